use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::auth::{get_current_user, login, logout, register_user};

pub fn routes() -> Router<AppRegistry> {
    let auth_routers = Router::new()
        .route("/register", post(register_user))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/me", get(get_current_user));

    Router::new().nest("/auth", auth_routers)
}
