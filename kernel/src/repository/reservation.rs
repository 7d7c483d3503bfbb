use crate::model::{
    id::ReservationId,
    reservation::{
        event::{CreateReservation, DeleteReservation},
        Reservation, ReservationFilter,
    },
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    // 予約を確定する。空き状況の検証と料金の確定も同一トランザクション内で行う
    async fn create(&self, event: CreateReservation) -> AppResult<ReservationId>;
    // reservation_id から予約を取得する
    async fn find_by_id(&self, reservation_id: ReservationId) -> AppResult<Option<Reservation>>;
    // 絞り込み条件に一致する予約の一覧を取得する
    async fn find_all(&self, filter: ReservationFilter) -> AppResult<Vec<Reservation>>;
    // 予約を取り消す
    async fn delete(&self, event: DeleteReservation) -> AppResult<()>;
}
