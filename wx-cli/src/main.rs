//! wx-cli - Command line client for the weather service admin endpoint.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "wx-cli",
    version,
    about = "Configure weather service locations from the command line"
)]
struct Cli {
    /// Absolute URL of the admin endpoint
    #[arg(
        short,
        long,
        default_value = "http://localhost:8080/weather/ajaxcontroller"
    )]
    endpoint: String,

    /// Print the location table as CSV
    #[arg(long, global = true)]
    csv: bool,

    #[command(subcommand)]
    command: wx_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("endpoint {}", cli.endpoint);
    wx_cmd::run(&cli.endpoint, cli.csv, cli.command).await
}
