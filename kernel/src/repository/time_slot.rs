use crate::model::{
    id::TimeSlotId,
    time_slot::{
        event::{CreateTimeSlot, DeleteTimeSlot, UpdateTimeSlot},
        TimeSlot,
    },
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait TimeSlotRepository: Send + Sync {
    async fn create(&self, event: CreateTimeSlot) -> AppResult<TimeSlot>;
    async fn find_all(&self) -> AppResult<Vec<TimeSlot>>;
    async fn find_by_id(&self, slot_id: TimeSlotId) -> AppResult<Option<TimeSlot>>;
    async fn update(&self, event: UpdateTimeSlot) -> AppResult<()>;
    async fn delete(&self, event: DeleteTimeSlot) -> AppResult<()>;
}
