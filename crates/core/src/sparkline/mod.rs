//! Sparkline geometry - normalized polylines for short price series.

mod sparkline_model;
mod sparkline_renderer;

pub use sparkline_model::{Sparkline, SparklinePoint, Trend};
pub use sparkline_renderer::{render_sparkline, SPARKLINE_HEIGHT, SPARKLINE_WIDTH};
