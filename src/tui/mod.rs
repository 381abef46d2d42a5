//! TUI module: Terminal User Interface using Ratatui.
//!
//! Provides a clinical-themed interface for:
//! - Disease selection
//! - Per-disease patient data entry
//! - Prediction result display

mod app;
mod styles;
mod ui;

pub use app::App;
pub use styles::ClinicTheme;
