use axum::{
    routing::{delete, get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::reservation::{
    cancel_reservation, reserve_court, show_my_reservations, show_reservation,
    show_reservation_list,
};

pub fn build_reservation_routers() -> Router<AppRegistry> {
    let reservations_routers = Router::new()
        .route("/", post(reserve_court))
        .route("/me", get(show_my_reservations))
        .route("/:reservation_id", get(show_reservation))
        .route("/:reservation_id", delete(cancel_reservation));

    Router::new().nest("/reservations", reservations_routers)
}

pub fn build_admin_reservation_routers() -> Router<AppRegistry> {
    Router::new().route("/admin/reservations", get(show_reservation_list))
}
