use crate::model::{
    court::{
        event::{CreateCourt, DeleteCourt, UpdateCourt},
        Court,
    },
    id::CourtId,
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait CourtRepository: Send + Sync {
    async fn create(&self, event: CreateCourt) -> AppResult<Court>;
    async fn find_all(&self) -> AppResult<Vec<Court>>;
    async fn find_by_id(&self, court_id: CourtId) -> AppResult<Option<Court>>;
    async fn update(&self, event: UpdateCourt) -> AppResult<()>;
    async fn delete(&self, event: DeleteCourt) -> AppResult<()>;
}
