//! Desktop client for remote wine quality classifiers.
//!
//! Everything except window setup lives here so it can be exercised from
//! tests and benchmarks.

/// Application directory resolution.
pub mod app_dirs;
/// Comma-separated bulk entry of all features.
pub mod bulk_input;
/// Accuracy pie chart data.
pub mod chart;
/// Persisted settings.
pub mod config;
/// egui front end.
pub mod egui_app;
/// Wine feature record.
pub mod features;
mod http_client;
/// Tracing setup.
pub mod logging;
/// Remote prediction client.
pub mod predict;
/// Form session state.
pub mod session;
