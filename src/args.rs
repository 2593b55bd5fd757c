use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "hitstats",
    about = "Summarize a web server access log: image share, top browser and hourly hits",
    version,
    long_about = None
)]
pub struct Args {
    /// URL to the access log CSV (http, https or file://)
    #[arg(long, env = "HITSTATS_URL")]
    pub url: String,

    /// Show hourly hit counts
    #[arg(long)]
    pub show_hours: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
