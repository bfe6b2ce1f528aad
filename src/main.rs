//! mobscan CLI - submit mobile applications to the security-scanning service

use clap::Parser;

mod cli;
mod output;

use cli::{Cli, Commands, GlobalOptions};
use mobscan::error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Upload(args) => cli::scan::upload(&args, &opts).await,
        Commands::Progress { scan_id } => cli::scan::progress(scan_id, &opts).await,
        Commands::Risk { scan_id } => cli::scan::risk(scan_id, &opts).await,
        Commands::Subscriptions => cli::subscription::check(&opts).await,
        Commands::Credentials(args) => cli::credentials::create(&args, &opts).await,
    }
}
