use std::sync::Arc;

use chrono::Utc;
use color_eyre::eyre::Result;
use dotenv::dotenv;
use kitchenhub_api::{config::ApiConfig, ApiState};
use kitchenhub_db::repositories::{
    booking::InMemoryBookingRepository,
    kitchen::KitchenCatalog,
    time_slot::{RandomSlotSource, SlotWindow},
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // The booking window opens today, as seen from the kitchens' time zone
    let today = Utc::now().with_timezone(&config.timezone).date_naive();
    let slots = RandomSlotSource::from_seed(
        today,
        &config.timezone,
        SlotWindow::default(),
        config.slot_seed,
    );

    let state = Arc::new(ApiState::new(
        &config,
        KitchenCatalog::seeded(),
        Arc::new(slots),
        Arc::new(InMemoryBookingRepository::new()),
    ));

    // Start API server
    kitchenhub_api::start_server(config, state).await?;

    Ok(())
}
