//! chatpane entry point.

use std::sync::Arc;

use chatpane_tui::Runtime;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Terminal chat screen demo
#[derive(Parser, Debug)]
#[command(name = "chatpane")]
#[command(about = "Terminal chat screen with a reverse-ordered message list")]
#[command(version)]
struct Args {
    /// Append logs to this file (stdout belongs to the TUI)
    #[arg(long)]
    log_file: Option<std::path::PathBuf>,

    /// Log level when --log-file is set (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Without --log-file no subscriber is installed and tracing is a no-op,
    // which keeps release runs quiet.
    if let Some(path) = &args.log_file {
        let file = std::fs::OpenOptions::new().create(true).append(true).open(path)?;
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&args.log_level));

        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Arc::new(file)))
            .with(filter)
            .init();
    }

    let runtime = Runtime::new()?;
    Ok(runtime.run().await?)
}
