//! Desktop front end built on egui.

/// Bridges form sessions, background requests and status reporting.
pub mod controller;
/// Plain UI state shared by the controller and renderer.
pub mod state;
/// egui rendering of the prediction pages.
pub mod ui;
