use num_traits::ToPrimitive;
use rust_decimal::Decimal;

use super::sparkline_model::{Sparkline, SparklinePoint, Trend};

/// Default sparkline extent, in output units.
pub const SPARKLINE_WIDTH: f64 = 100.0;
pub const SPARKLINE_HEIGHT: f64 = 40.0;

/// Inset keeping the polyline off the edges.
const PADDING: f64 = 2.0;

/// Maps a price series onto a `width` x `height` polyline.
///
/// Each sample becomes one vertex: x spreads the samples evenly across the
/// padded width, y normalizes the value into the padded height with the
/// series minimum at the bottom. A constant series renders as a flat line,
/// a single sample as one point at the left inset, and an empty series as
/// no points at all.
pub fn render_sparkline(series: &[Decimal], trend: Trend, width: f64, height: f64) -> Sparkline {
    let samples: Vec<f64> = series
        .iter()
        .map(|value| value.to_f64().unwrap_or(0.0))
        .collect();

    let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    // A flat series still needs a finite divisor.
    let range = if max > min { max - min } else { 1.0 };

    let inner_width = width - PADDING * 2.0;
    let inner_height = height - PADDING * 2.0;
    let last_index = samples.len().saturating_sub(1);

    let points = samples
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let x = if last_index == 0 {
                PADDING
            } else {
                index as f64 / last_index as f64 * inner_width + PADDING
            };
            let y = height - (value - min) / range * inner_height - PADDING;
            SparklinePoint { x, y }
        })
        .collect();

    Sparkline {
        points,
        trend,
        width,
        height,
    }
}
