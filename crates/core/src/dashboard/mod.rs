//! Dashboard state and view assembly.

mod dashboard_model;
mod dashboard_service;

pub use dashboard_model::{AssetRow, DashboardView, UiState};
pub use dashboard_service::Dashboard;
