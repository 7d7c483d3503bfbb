use axum::{
    routing::{delete, get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::court::{
    delete_court, register_court, show_court, show_court_list, update_court,
};

pub fn build_court_routers() -> Router<AppRegistry> {
    let courts_routers = Router::new()
        .route("/", post(register_court))
        .route("/", get(show_court_list))
        .route("/:court_id", get(show_court))
        .route("/:court_id", put(update_court))
        .route("/:court_id", delete(delete_court));

    Router::new().nest("/courts", courts_routers)
}
