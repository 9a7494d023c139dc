pub mod valuation_calculator;
pub mod valuation_model;

pub use valuation_calculator::calculate_metrics;
pub use valuation_model::PortfolioMetrics;
