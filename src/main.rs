//! Portfolio GUI - Main Entry Point
//!
//! Native desktop portfolio with About and Projects views.

use portfolio_gui::app::application::run_app;

fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Portfolio GUI...");

    // Run the GPUI application
    run_app();
}
