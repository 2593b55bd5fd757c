use std::cmp::Reverse;

use crate::browser::Browser;
use crate::stats::LogStats;

pub const NO_REQUESTS: &str = "No requests found.";

/// Share of hits that were image requests, in percent. `None` for an empty log.
pub fn image_percentage(stats: &LogStats) -> Option<f64> {
    if stats.total_hits == 0 {
        return None;
    }
    Some(stats.image_hits as f64 * 100.0 / stats.total_hits as f64)
}

/// First label with the strictly highest count, scanning in the given order.
fn first_max(stats: &LogStats, labels: &[Browser]) -> Option<(Browser, u64)> {
    labels
        .iter()
        .map(|&browser| (browser, stats.browser_count(browser)))
        .fold(None, |best, candidate| match best {
            Some((_, count)) if count >= candidate.1 => best,
            _ => Some(candidate),
        })
}

/// The most popular of the four named browsers. Falls back to the overall
/// leader, `Other` included, when none of them was seen.
pub fn most_popular_browser(stats: &LogStats) -> Option<Browser> {
    if stats.total_hits == 0 {
        return None;
    }

    let named_total: u64 = Browser::NAMED
        .iter()
        .map(|&browser| stats.browser_count(browser))
        .sum();

    let labels: &[Browser] = if named_total == 0 {
        &Browser::ALL
    } else {
        &Browser::NAMED
    };
    first_max(stats, labels).map(|(browser, _)| browser)
}

/// Hours ordered by descending hits, ties by ascending hour.
pub fn hour_ranking(stats: &LogStats) -> Option<Vec<(usize, u64)>> {
    let hours = stats.hour_counts()?;
    let mut ranked: Vec<(usize, u64)> = hours.iter().copied().enumerate().collect();
    ranked.sort_by_key(|&(hour, count)| (Reverse(count), hour));
    Some(ranked)
}

/// Output lines for a finished pass.
pub fn render(stats: &LogStats) -> Vec<String> {
    let (Some(pct), Some(browser)) = (image_percentage(stats), most_popular_browser(stats)) else {
        return vec![NO_REQUESTS.to_string()];
    };

    let mut lines = vec![
        format!("Image requests account for {:.1}% of all requests", pct),
        format!("The most popular browser today is: {}", browser),
    ];

    if let Some(ranked) = hour_ranking(stats) {
        lines.extend(
            ranked
                .into_iter()
                .map(|(hour, count)| format!("Hour {:02} has {} hits", hour, count)),
        );
    }

    lines
}
