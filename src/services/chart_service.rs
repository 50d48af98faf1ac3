//! Activity chart rendering
//!
//! Draws the two-series (sent/received) daily activity chart as a PNG.

use std::path::Path;

use chrono::{Duration, Local};
use plotters::prelude::*;

use crate::models::DailyBucket;

/// Days shown when there is no history at all
const PLACEHOLDER_DAYS: i64 = 5;

/// Pad the series so the chart always has at least two days on the x axis
///
/// With no history this produces a run of zero-valued days ending today;
/// with a single bucket it prepends the previous (empty) day. Display
/// concern only, the aggregator output itself stays untouched.
pub fn with_placeholders(buckets: Vec<DailyBucket>) -> Vec<DailyBucket> {
    match buckets.len() {
        0 => {
            let today = Local::now().date_naive();
            (0..PLACEHOLDER_DAYS)
                .rev()
                .map(|back| DailyBucket::empty(today - Duration::days(back)))
                .collect()
        }
        1 => {
            let prev = DailyBucket::empty(buckets[0].date_key - Duration::days(1));
            let mut padded = buckets;
            padded.insert(0, prev);
            padded
        }
        _ => buckets,
    }
}

/// Render the daily activity series to a PNG file
pub fn render_activity_chart(
    buckets: &[DailyBucket],
    path: &Path,
    width: u32,
    height: u32,
) -> Result<(), String> {
    let series = with_placeholders(buckets.to_vec());
    let x_min = match series.first() {
        Some(b) => b.date_key,
        None => return Err("No chart data available".to_string()),
    };
    let x_max = match series.last() {
        Some(b) => b.date_key,
        None => return Err("No chart data available".to_string()),
    };

    // Pad the value range so the tallest point is not glued to the frame
    let peak = series
        .iter()
        .map(|b| b.total_sent.max(b.total_received))
        .fold(0.0, f64::max);
    let y_max = if peak > 0.0 { peak * 1.1 } else { 1.0 };

    let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| format!("Failed to fill canvas: {}", e))?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Transaction Activity", ("sans-serif", 40.0).into_font())
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, 0f64..y_max)
        .map_err(|e| format!("Failed to build chart: {}", e))?;

    chart
        .configure_mesh()
        .y_desc("Amount")
        .x_desc("Day")
        .x_label_formatter(&|d| d.format("%b %d").to_string())
        .draw()
        .map_err(|e| format!("Failed to draw mesh: {}", e))?;

    chart
        .draw_series(LineSeries::new(
            series.iter().map(|b| (b.date_key, b.total_sent)),
            &RED,
        ))
        .map_err(|e| format!("Failed to draw sent series: {}", e))?
        .label("Sent")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart
        .draw_series(LineSeries::new(
            series.iter().map(|b| (b.date_key, b.total_received)),
            &GREEN,
        ))
        .map_err(|e| format!("Failed to draw received series: {}", e))?
        .label("Received")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN));

    // Mark the actual data points
    for bucket in &series {
        chart
            .draw_series(std::iter::once(Circle::new(
                (bucket.date_key, bucket.total_sent),
                3,
                RED.filled(),
            )))
            .map_err(|e| format!("Failed to draw point: {}", e))?;
        chart
            .draw_series(std::iter::once(Circle::new(
                (bucket.date_key, bucket.total_received),
                3,
                GREEN.filled(),
            )))
            .map_err(|e| format!("Failed to draw point: {}", e))?;
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(|e| format!("Failed to draw legend: {}", e))?;

    root.present()
        .map_err(|e| format!("Failed to render chart: {}", e))?;
    Ok(())
}
