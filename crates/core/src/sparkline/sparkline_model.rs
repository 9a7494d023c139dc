use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction of a series, used to pick the stroke color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Trend {
    Rising,
    Falling,
}

impl Trend {
    /// Trend for a signed 24h change; zero counts as rising.
    pub fn from_change(change: Decimal) -> Self {
        if change >= Decimal::ZERO {
            Trend::Rising
        } else {
            Trend::Falling
        }
    }

    /// Stroke color for this trend. A binary choice, not a gradient.
    pub const fn stroke(&self) -> &'static str {
        match self {
            Trend::Rising => "#4ade80",
            Trend::Falling => "#ef4444",
        }
    }
}

/// A single polyline vertex in output coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SparklinePoint {
    pub x: f64,
    pub y: f64,
}

/// A rendered sparkline: an ordered polyline plus its stroke choice.
///
/// Consecutive points form straight segments with no gaps or smoothing.
/// Zero points means nothing to draw; a single point is a degenerate
/// polyline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sparkline {
    pub points: Vec<SparklinePoint>,
    pub trend: Trend,
    pub width: f64,
    pub height: f64,
}

impl Sparkline {
    /// Stroke color for the polyline.
    pub const fn stroke(&self) -> &'static str {
        self.trend.stroke()
    }

    /// SVG path data ("M x,y L x,y ...") for the polyline. Empty when
    /// there are no points.
    pub fn path_data(&self) -> String {
        let mut path = String::new();
        for (index, point) in self.points.iter().enumerate() {
            if index == 0 {
                path.push_str("M ");
            } else {
                path.push_str(" L ");
            }
            path.push_str(&format!("{},{}", point.x, point.y));
        }
        path
    }
}
