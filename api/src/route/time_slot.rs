use axum::{
    routing::{delete, get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::time_slot::{
    delete_time_slot, register_time_slot, show_time_slot, show_time_slot_list, update_time_slot,
};

pub fn build_time_slot_routers() -> Router<AppRegistry> {
    let slots_routers = Router::new()
        .route("/", post(register_time_slot))
        .route("/", get(show_time_slot_list))
        .route("/:slot_id", get(show_time_slot))
        .route("/:slot_id", put(update_time_slot))
        .route("/:slot_id", delete(delete_time_slot));

    Router::new().nest("/slots", slots_routers)
}
