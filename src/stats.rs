use crate::browser::{detect_browser, Browser};
use crate::patterns::is_image_request;
use crate::rows::LogRow;
use crate::timestamp::parse_hour;

pub const HOURS_PER_DAY: usize = 24;

/// Counters accumulated over one pass of the log.
///
/// Every browser label and (when enabled) every hour of the day has an
/// explicit slot starting at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogStats {
    pub total_hits: u64,
    pub image_hits: u64,
    browser_counts: [u64; Browser::ALL.len()],
    hour_counts: Option<[u64; HOURS_PER_DAY]>,
}

impl LogStats {
    pub fn new(show_hours: bool) -> Self {
        LogStats {
            total_hits: 0,
            image_hits: 0,
            browser_counts: [0; Browser::ALL.len()],
            hour_counts: show_hours.then_some([0; HOURS_PER_DAY]),
        }
    }

    pub fn record(&mut self, row: &LogRow) {
        self.total_hits += 1;

        if is_image_request(&row.path) {
            self.image_hits += 1;
        }

        self.browser_counts[detect_browser(&row.user_agent).index()] += 1;

        if let Some(hours) = self.hour_counts.as_mut() {
            if let Ok(hour) = parse_hour(&row.timestamp) {
                hours[hour as usize] += 1;
            }
        }
    }

    pub fn browser_count(&self, browser: Browser) -> u64 {
        self.browser_counts[browser.index()]
    }

    /// Counts for every browser label in `Browser::ALL` order.
    pub fn browser_counts(&self) -> impl Iterator<Item = (Browser, u64)> + '_ {
        Browser::ALL
            .iter()
            .map(move |&browser| (browser, self.browser_count(browser)))
    }

    /// Per-hour counts indexed by hour, or `None` when hours were not tracked.
    pub fn hour_counts(&self) -> Option<&[u64; HOURS_PER_DAY]> {
        self.hour_counts.as_ref()
    }
}

/// Fold a row sequence into fresh counters.
pub fn aggregate<I>(rows: I, show_hours: bool) -> LogStats
where
    I: IntoIterator<Item = LogRow>,
{
    rows.into_iter()
        .fold(LogStats::new(show_hours), |mut stats, row| {
            stats.record(&row);
            stats
        })
}
