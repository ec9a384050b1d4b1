use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/kitchens", get(handlers::kitchen::list_kitchens))
        .route("/api/kitchens/:id", get(handlers::kitchen::get_kitchen))
        .route("/api/kitchens/:id/quote", get(handlers::kitchen::quote))
}
