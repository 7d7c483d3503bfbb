use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::availability::show_free_slots;

pub fn build_availability_routers() -> Router<AppRegistry> {
    Router::new().route("/availability", get(show_free_slots))
}
