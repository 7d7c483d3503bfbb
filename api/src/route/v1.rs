use super::{
    availability::build_availability_routers, court::build_court_routers,
    price_extra::build_price_extra_routers,
    reservation::{build_admin_reservation_routers, build_reservation_routers},
    role::build_role_routers, time_slot::build_time_slot_routers,
};
use axum::Router;
use registry::AppRegistry;

pub fn routes() -> Router<AppRegistry> {
    let router = Router::new()
        .merge(build_availability_routers())
        .merge(build_court_routers())
        .merge(build_time_slot_routers())
        .merge(build_price_extra_routers())
        .merge(build_role_routers())
        .merge(build_reservation_routers())
        .merge(build_admin_reservation_routers());
    Router::new().nest("/api/v1", router)
}
