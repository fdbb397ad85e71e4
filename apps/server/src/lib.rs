//! HTTP transport for the toll calculator.

pub mod api;
pub mod config;
pub mod error;
pub mod main_lib;

pub use config::Config;
pub use main_lib::{build_state, init_tracing, AppState};
