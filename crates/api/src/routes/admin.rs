use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/admin/bookings", get(handlers::admin::list_bookings))
        .route(
            "/api/admin/bookings/:id/confirm",
            post(handlers::admin::confirm_booking),
        )
        .route(
            "/api/admin/bookings/:id/reject",
            post(handlers::admin::reject_booking),
        )
}
