//! GWM CLI - Command line tool for exploring DWLR groundwater monitoring data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "gwm-cli",
    version,
    about = "Groundwater level monitoring dashboard in the terminal"
)]
struct Cli {
    #[command(flatten)]
    source: gwm_cmd::SourceArgs,

    #[command(subcommand)]
    command: gwm_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("Loading from {:?}", cli.source.data_source());
    gwm_cmd::run(cli.source, cli.command).await
}
