use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};
use vagtull_core::fee::{FeeService, FeeServiceTrait};
use vagtull_core::holidays::DagsmartProvider;
use vagtull_core::pricing::StaticPriceBlockProvider;
use vagtull_core::vehicles::StaticVehicleProvider;

use crate::config::Config;

pub struct AppState {
    pub fee_service: Arc<dyn FeeServiceTrait>,
}

pub fn init_tracing() {
    let log_format = std::env::var("VT_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> Arc<AppState> {
    let holiday_provider = Arc::new(DagsmartProvider::with_base_url(config.holiday_api_url.as_str()));
    let fee_service = FeeService::new(
        &StaticVehicleProvider,
        holiday_provider,
        &StaticPriceBlockProvider,
    );

    Arc::new(AppState {
        fee_service: Arc::new(fee_service),
    })
}
