use std::time::Instant;

use tracing::info;

use crate::fetch::{download_text, FetchError};
use crate::rows::parse_rows;
use crate::stats::{aggregate, LogStats};
use crate::Args;

/// Run the single pass over an already-fetched document.
pub fn analyze_text(csv_text: &str, show_hours: bool) -> LogStats {
    let start_time = Instant::now();
    info!(action = "start", component = "aggregation", show_hours = show_hours, "Aggregating access log");

    let stats = aggregate(parse_rows(csv_text), show_hours);

    info!(
        action = "complete",
        component = "aggregation",
        total_hits = stats.total_hits,
        image_hits = stats.image_hits,
        duration_ms = start_time.elapsed().as_millis(),
        "Aggregation completed"
    );
    stats
}

pub fn analyze_access_log(args: &Args) -> Result<LogStats, FetchError> {
    let total_start_time = Instant::now();
    info!("Starting access log analysis");

    let csv_text = download_text(&args.url)?;
    let stats = analyze_text(&csv_text, args.show_hours);

    info!(
        duration_ms = total_start_time.elapsed().as_millis(),
        "Analysis completed successfully"
    );
    Ok(stats)
}
