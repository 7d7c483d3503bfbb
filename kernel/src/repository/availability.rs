use crate::model::{id::CourtId, time_slot::TimeSlot};
use async_trait::async_trait;
use chrono::NaiveDate;
use shared::error::AppResult;

#[async_trait]
pub trait AvailabilityRepository: Send + Sync {
    // 指定したコートと日付について、まだ予約されていない時間帯の一覧を取得する
    async fn find_free_slots(&self, court_id: CourtId, date: NaiveDate) -> AppResult<Vec<TimeSlot>>;
}
