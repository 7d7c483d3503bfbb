use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{
    access::ReservationAccess,
    id::ReservationId,
    reservation::{
        event::{CreateReservation, DeleteReservation},
        ReservationFilter,
    },
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::{
        parse_date,
        reservation::{
            CreateReservationRequest, ReservationListQuery, ReservationResponse,
            ReservationsResponse,
        },
    },
};

pub async fn reserve_court(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateReservationRequest>,
) -> AppResult<(StatusCode, Json<ReservationResponse>)> {
    req.validate(&())?;

    let reserved_on = parse_date(&req.date)?;
    let create_reservation =
        CreateReservation::new(user.id(), req.court_id, reserved_on, req.slot_ids);

    let reservation_id = registry
        .reservation_repository()
        .create(create_reservation)
        .await?;

    // 確定した単価を含めて返すため、登録済みレコードを引き直す
    let reservation = registry
        .reservation_repository()
        .find_by_id(reservation_id)
        .await?
        .ok_or_else(|| {
            AppError::EntityNotFound(format!("予約（{reservation_id}）が見つかりませんでした。"))
        })?;

    Ok((StatusCode::CREATED, Json(reservation.into())))
}

pub async fn show_my_reservations(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationsResponse>> {
    let filter = ReservationFilter {
        user_id: Some(user.id()),
        ..Default::default()
    };

    registry
        .reservation_repository()
        .find_all(filter)
        .await
        .map(ReservationsResponse::from)
        .map(Json)
}

// 存在しない予約は認可判定より先に 404 とする
pub async fn show_reservation(
    user: AuthorizedUser,
    Path(reservation_id): Path<ReservationId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationResponse>> {
    let reservation = registry
        .reservation_repository()
        .find_by_id(reservation_id)
        .await?
        .ok_or_else(|| {
            AppError::EntityNotFound(format!("予約（{reservation_id}）が見つかりませんでした。"))
        })?;

    let access = ReservationAccess::resolve(user.id(), user.role(), reservation.reserved_by.user_id);
    if !access.allows_read() {
        return Err(AppError::ForbiddenOperation);
    }

    Ok(Json(reservation.into()))
}

pub async fn cancel_reservation(
    user: AuthorizedUser,
    Path(reservation_id): Path<ReservationId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    let reservation = registry
        .reservation_repository()
        .find_by_id(reservation_id)
        .await?
        .ok_or_else(|| {
            AppError::EntityNotFound(format!("予約（{reservation_id}）が見つかりませんでした。"))
        })?;

    // 管理者でも他人の予約は取り消せない
    let access = ReservationAccess::resolve(user.id(), user.role(), reservation.reserved_by.user_id);
    if !access.allows_mutation() {
        return Err(AppError::ForbiddenOperation);
    }

    registry
        .reservation_repository()
        .delete(DeleteReservation::new(reservation_id, user.id()))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn show_reservation_list(
    user: AuthorizedUser,
    Query(query): Query<ReservationListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationsResponse>> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }

    let filter: ReservationFilter = query.try_into()?;
    registry
        .reservation_repository()
        .find_all(filter)
        .await
        .map(ReservationsResponse::from)
        .map(Json)
}
