use axum::Json;
use shared::error::{AppError, AppResult};
use strum::VariantNames;

use crate::{
    extractor::AuthorizedUser,
    model::user::{RoleName, RolesResponse},
};

// ロールは固定の2種類のため DB を引かずに列挙する
pub async fn show_role_list(user: AuthorizedUser) -> AppResult<Json<RolesResponse>> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }

    let items = RoleName::VARIANTS.iter().map(|v| v.to_string()).collect();
    Ok(Json(RolesResponse { items }))
}
