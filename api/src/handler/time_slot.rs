use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{id::TimeSlotId, time_slot::event::DeleteTimeSlot};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::time_slot::{
        CreateTimeSlotRequest, TimeSlotResponse, TimeSlotsResponse, UpdateTimeSlotRequest,
        UpdateTimeSlotRequestWithId,
    },
};

pub async fn register_time_slot(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateTimeSlotRequest>,
) -> AppResult<(StatusCode, Json<TimeSlotResponse>)> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }
    req.validate(&())?;

    registry
        .time_slot_repository()
        .create(req.into())
        .await
        .map(TimeSlotResponse::from)
        .map(|slot| (StatusCode::CREATED, Json(slot)))
}

pub async fn show_time_slot_list(
    _user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<TimeSlotsResponse>> {
    registry
        .time_slot_repository()
        .find_all()
        .await
        .map(TimeSlotsResponse::from)
        .map(Json)
}

pub async fn show_time_slot(
    _user: AuthorizedUser,
    Path(slot_id): Path<TimeSlotId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<TimeSlotResponse>> {
    registry
        .time_slot_repository()
        .find_by_id(slot_id)
        .await
        .and_then(|slot| match slot {
            Some(slot) => Ok(Json(slot.into())),
            None => Err(AppError::EntityNotFound(format!(
                "時間帯（{slot_id}）が見つかりませんでした。"
            ))),
        })
}

pub async fn update_time_slot(
    user: AuthorizedUser,
    Path(slot_id): Path<TimeSlotId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateTimeSlotRequest>,
) -> AppResult<StatusCode> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }
    req.validate(&())?;

    let update_time_slot = UpdateTimeSlotRequestWithId::new(slot_id, req);
    registry
        .time_slot_repository()
        .update(update_time_slot.into())
        .await
        .map(|_| StatusCode::OK)
}

pub async fn delete_time_slot(
    user: AuthorizedUser,
    Path(slot_id): Path<TimeSlotId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }

    let delete_time_slot = DeleteTimeSlot { slot_id };
    registry
        .time_slot_repository()
        .delete(delete_time_slot)
        .await
        .map(|_| StatusCode::OK)
}
