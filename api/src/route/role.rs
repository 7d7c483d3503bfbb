use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::role::show_role_list;

pub fn build_role_routers() -> Router<AppRegistry> {
    Router::new().route("/roles", get(show_role_list))
}
