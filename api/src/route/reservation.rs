use axum::{
    routing::{delete, get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::availability::check_availability;
use crate::handler::reservation::{
    approve_reservation, cancel_reservation, register_reservation, show_reservation,
    show_reservation_list, update_reservation,
};

pub fn build_reservation_routers() -> Router<AppRegistry> {
    let reservation_routers = Router::new()
        .route("/", post(register_reservation))
        .route("/", get(show_reservation_list))
        .route("/availability", post(check_availability))
        .route("/:reservation_id", get(show_reservation))
        .route("/:reservation_id", put(update_reservation))
        .route("/:reservation_id/approve", post(approve_reservation))
        .route("/:reservation_id/cancel", delete(cancel_reservation));

    Router::new().nest("/reservations", reservation_routers)
}
