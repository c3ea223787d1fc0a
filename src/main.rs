use clap::Parser;
use cvterm::core::catalog::load_catalog;
use cvterm::core::config::{CvConfig, load_config, resolve};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cvterm", version, about = "Interactive terminal CV")]
struct Args {
    /// Path to the CV catalog (JSON)
    #[arg(long)]
    cv: Option<PathBuf>,

    /// Where to write the debug log
    #[arg(long, default_value = "cvterm.log")]
    log_file: PathBuf,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger; the terminal itself is owned by the UI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let config = load_config().unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {}", e);
        CvConfig::default()
    });
    let resolved = resolve(&config, args.cv.as_deref());

    log::info!("cvterm starting up with catalog {}", resolved.cv_path.display());

    let loaded = load_catalog(&resolved.cv_path);
    cvterm::tui::run(resolved, loaded)
}
