use crate::model::{
    id::PriceExtraId,
    price_extra::{
        event::{CreatePriceExtra, DeletePriceExtra, UpdatePriceExtra},
        PriceExtra,
    },
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait PriceExtraRepository: Send + Sync {
    async fn create(&self, event: CreatePriceExtra) -> AppResult<PriceExtra>;
    async fn find_all(&self) -> AppResult<Vec<PriceExtra>>;
    async fn find_by_id(&self, price_extra_id: PriceExtraId) -> AppResult<Option<PriceExtra>>;
    async fn update(&self, event: UpdatePriceExtra) -> AppResult<()>;
    async fn delete(&self, event: DeletePriceExtra) -> AppResult<()>;
}
