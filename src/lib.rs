pub mod analysis;
pub mod args;
pub mod browser;
pub mod fetch;
pub mod patterns;
pub mod report;
pub mod rows;
pub mod stats;
pub mod timestamp;
pub mod utils;

pub use analysis::{analyze_access_log, analyze_text};
pub use args::Args;
pub use browser::{detect_browser, Browser};
pub use fetch::FetchError;
pub use report::render;
pub use rows::{parse_rows, LogRow};
pub use stats::{aggregate, LogStats};
