use async_trait::async_trait;
use chrono::NaiveDate;
use derive_new::new;
use kernel::model::{id::CourtId, time_slot::TimeSlot};
use kernel::repository::availability::AvailabilityRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::time_slot::TimeSlotRow, ConnectionPool};

#[derive(new)]
pub struct AvailabilityRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl AvailabilityRepository for AvailabilityRepositoryImpl {
    // カタログ上の全時間帯から、指定のコートと日付ですでに予約された枠を除いたものを返す
    async fn find_free_slots(&self, court_id: CourtId, date: NaiveDate) -> AppResult<Vec<TimeSlot>> {
        // 存在しないコートへの問い合わせは空リストではなくエラーにする
        let court = sqlx::query_scalar::<_, CourtId>(
            r#"
                SELECT court_id
                FROM courts
                WHERE court_id = $1;
            "#,
        )
        .bind(court_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if court.is_none() {
            return Err(AppError::EntityNotFound(format!(
                "コート（{}）が見つかりませんでした。",
                court_id
            )));
        }

        let rows: Vec<TimeSlotRow> = sqlx::query_as::<_, TimeSlotRow>(
            r#"
                SELECT
                    t.slot_id,
                    t.band,
                    t.shift
                FROM time_slots AS t
                WHERE NOT EXISTS (
                    SELECT 1
                    FROM reservation_slots AS rs
                    WHERE rs.slot_id = t.slot_id
                      AND rs.court_id = $1
                      AND rs.reserved_on = $2
                )
                ORDER BY t.band ASC, t.shift ASC;
            "#,
        )
        .bind(court_id)
        .bind(date)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(TimeSlot::from).collect())
    }
}
