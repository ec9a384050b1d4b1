use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/slots", get(handlers::slots::list_slots))
        .route("/api/slots/toggle", post(handlers::slots::toggle_slot))
}
