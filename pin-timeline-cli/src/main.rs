//! pin-timeline - lay out pinned time-series data files on a timeline.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "pin-timeline",
    version,
    about = "Timeline bounds, month headers and bar geometry for pin data files"
)]
struct Cli {
    #[command(subcommand)]
    command: pin_timeline_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("pin-timeline {}", env!("CARGO_PKG_VERSION"));
    pin_timeline_cmd::run(cli.command).await
}
