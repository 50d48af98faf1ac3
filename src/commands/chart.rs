use std::path::Path;

use crate::services::{activity_service, chart_service};
use crate::App;

const CHART_WIDTH: u32 = 900;
const CHART_HEIGHT: u32 = 500;

/// Render the daily activity chart: `chart [output.png]`
pub async fn execute(app: &App, args: &[&str]) -> Result<(), String> {
    let path = args.first().copied().unwrap_or("activity.png");

    let records = app.store.lock().await.list_ascending();
    let buckets = activity_service::aggregate(&records);

    chart_service::render_activity_chart(&buckets, Path::new(path), CHART_WIDTH, CHART_HEIGHT)?;
    println!("📈 Activity chart saved to {}", path);
    Ok(())
}
