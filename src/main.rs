use atlas::core::config::{self, CliOverrides};
use atlas::core::navigation::Tab;
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "atlas", about = "Browse the world's countries, capitals and flags")]
struct Args {
    /// Country API base URL (overrides config and ATLAS_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Tab to open on start
    #[arg(short, long, value_enum)]
    tab: Option<Tab>,

    /// Log file path
    #[arg(long, env = "ATLAS_LOG_FILE", default_value = "atlas.log")]
    log_file: String,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    // Initialize file logger. The TUI owns stdout, so logs never go there.
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Atlas starting up");

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("{}, using defaults", e);
        config::AtlasConfig::default()
    });
    let cli = CliOverrides {
        api_url: args.api_url,
        timeout_secs: args.timeout_secs,
        start_tab: args.tab,
    };
    let resolved = config::resolve(&file_config, &cli);
    log::info!("Resolved config: {:?}", resolved);

    atlas::tui::run(resolved)
}
