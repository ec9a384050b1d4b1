//! # KitchenHub API
//!
//! The API crate provides the web server for the KitchenHub kitchen rental service.
//! It exposes the kitchen catalog, the slot picker used while building a booking,
//! the user's booking dashboard and the admin booking list.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Translate requests into calls on the core selection rules and repositories
//! - **Middleware**: Provide cross-cutting concerns like error mapping
//! - **Config**: Handle environment and application configuration
//!
//! All state lives in memory for the lifetime of the process.

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{http::HeaderValue, Router};
use chrono::NaiveDate;
use chrono_tz::Tz;
use eyre::Result;
use kitchenhub_core::{models::time_slot::TimeSlot, selection::available_slots_for_date};
use kitchenhub_db::repositories::{
    booking::BookingRepository, kitchen::KitchenCatalog, time_slot::SlotSource,
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
///
/// Every collaborator is passed in explicitly, so tests can swap the slot
/// source or the booking repository for fixtures and mocks.
pub struct ApiState {
    /// Kitchens offered for rent
    pub kitchens: KitchenCatalog,
    /// Source of bookable time slots
    pub slots: Arc<dyn SlotSource>,
    /// Bookings made during this session
    pub bookings: Arc<dyn BookingRepository>,
    /// Zone in which dates and slot hours are read
    pub timezone: Tz,
    /// Pause applied before a submitted booking is stored
    pub submit_delay: Duration,
    /// Owner recorded on new bookings
    pub user_id: String,
}

impl ApiState {
    pub fn new(
        config: &config::ApiConfig,
        kitchens: KitchenCatalog,
        slots: Arc<dyn SlotSource>,
        bookings: Arc<dyn BookingRepository>,
    ) -> Self {
        Self {
            kitchens,
            slots,
            bookings,
            timezone: config.timezone,
            submit_delay: config.submit_delay,
            user_id: config.default_user_id.clone(),
        }
    }

    /// Slots offered on `date`, in start time order.
    pub fn slots_for_date(&self, date: NaiveDate) -> Vec<TimeSlot> {
        let mut slots = available_slots_for_date(date, &self.slots.all_slots(), &self.timezone);
        slots.sort_by_key(|slot| slot.start_time);
        slots
    }
}

/// Builds the application router with all routes attached to `state`
pub fn build_router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Kitchen catalog endpoints
        .merge(routes::kitchen::routes())
        // Slot picker endpoints
        .merge(routes::slots::routes())
        // Booking dashboard endpoints
        .merge(routes::booking::routes())
        // Admin endpoints
        .merge(routes::admin::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Starts the API server with the provided configuration and state
///
/// Installs the global tracing subscriber, applies CORS and request timeout
/// layers, and serves until the listener fails.
pub async fn start_server(config: config::ApiConfig, state: Arc<ApiState>) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let app = build_router(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let origins: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        let cors = CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::DELETE,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(origins)
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    // Add request timeout middleware
    let app = app.layer(
        tower::ServiceBuilder::new()
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout)))
            .into_inner(),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
