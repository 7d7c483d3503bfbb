use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{id::PriceExtraId, price_extra::event::DeletePriceExtra};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::price_extra::{
        CreatePriceExtraRequest, PriceExtraResponse, PriceExtrasResponse, UpdatePriceExtraRequest,
        UpdatePriceExtraRequestWithId,
    },
};

pub async fn register_price_extra(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreatePriceExtraRequest>,
) -> AppResult<(StatusCode, Json<PriceExtraResponse>)> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }
    req.validate(&())?;

    registry
        .price_extra_repository()
        .create(req.into())
        .await
        .map(PriceExtraResponse::from)
        .map(|extra| (StatusCode::CREATED, Json(extra)))
}

pub async fn show_price_extra_list(
    _user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<PriceExtrasResponse>> {
    registry
        .price_extra_repository()
        .find_all()
        .await
        .map(PriceExtrasResponse::from)
        .map(Json)
}

pub async fn show_price_extra(
    _user: AuthorizedUser,
    Path(price_extra_id): Path<PriceExtraId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<PriceExtraResponse>> {
    registry
        .price_extra_repository()
        .find_by_id(price_extra_id)
        .await
        .and_then(|extra| match extra {
            Some(extra) => Ok(Json(extra.into())),
            None => Err(AppError::EntityNotFound(format!(
                "追加料金（{price_extra_id}）が見つかりませんでした。"
            ))),
        })
}

pub async fn update_price_extra(
    user: AuthorizedUser,
    Path(price_extra_id): Path<PriceExtraId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdatePriceExtraRequest>,
) -> AppResult<StatusCode> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }
    req.validate(&())?;

    let update_price_extra = UpdatePriceExtraRequestWithId::new(price_extra_id, req);
    registry
        .price_extra_repository()
        .update(update_price_extra.into())
        .await
        .map(|_| StatusCode::OK)
}

pub async fn delete_price_extra(
    user: AuthorizedUser,
    Path(price_extra_id): Path<PriceExtraId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }

    let delete_price_extra = DeletePriceExtra { price_extra_id };
    registry
        .price_extra_repository()
        .delete(delete_price_extra)
        .await
        .map(|_| StatusCode::OK)
}
