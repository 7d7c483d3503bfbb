use axum::{
    routing::{delete, get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::price_extra::{
    delete_price_extra, register_price_extra, show_price_extra, show_price_extra_list,
    update_price_extra,
};

pub fn build_price_extra_routers() -> Router<AppRegistry> {
    let extras_routers = Router::new()
        .route("/", post(register_price_extra))
        .route("/", get(show_price_extra_list))
        .route("/:price_extra_id", get(show_price_extra))
        .route("/:price_extra_id", put(update_price_extra))
        .route("/:price_extra_id", delete(delete_price_extra));

    Router::new().nest("/extras", extras_routers)
}
