use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{court::event::DeleteCourt, id::CourtId};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::court::{
        CourtResponse, CourtsResponse, CreateCourtRequest, UpdateCourtRequest,
        UpdateCourtRequestWithId,
    },
};

// コートの登録・更新・削除は管理者のみ。閲覧はログイン済みであれば誰でも可
pub async fn register_court(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateCourtRequest>,
) -> AppResult<(StatusCode, Json<CourtResponse>)> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }
    req.validate(&())?;

    registry
        .court_repository()
        .create(req.into())
        .await
        .map(CourtResponse::from)
        .map(|court| (StatusCode::CREATED, Json(court)))
}

pub async fn show_court_list(
    _user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<CourtsResponse>> {
    registry
        .court_repository()
        .find_all()
        .await
        .map(CourtsResponse::from)
        .map(Json)
}

pub async fn show_court(
    _user: AuthorizedUser,
    Path(court_id): Path<CourtId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<CourtResponse>> {
    registry
        .court_repository()
        .find_by_id(court_id)
        .await
        .and_then(|court| match court {
            Some(court) => Ok(Json(court.into())),
            None => Err(AppError::EntityNotFound(format!(
                "コート（{court_id}）が見つかりませんでした。"
            ))),
        })
}

pub async fn update_court(
    user: AuthorizedUser,
    Path(court_id): Path<CourtId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateCourtRequest>,
) -> AppResult<StatusCode> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }
    req.validate(&())?;

    let update_court = UpdateCourtRequestWithId::new(court_id, req);
    registry
        .court_repository()
        .update(update_court.into())
        .await
        .map(|_| StatusCode::OK)
}

pub async fn delete_court(
    user: AuthorizedUser,
    Path(court_id): Path<CourtId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }

    let delete_court = DeleteCourt { court_id };
    registry
        .court_repository()
        .delete(delete_court)
        .await
        .map(|_| StatusCode::OK)
}
