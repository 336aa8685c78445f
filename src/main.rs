use anyhow::Result;
use clap::Parser;
use tracing::info;

use check_pause::cli::Cli;
use check_pause::config::{load_config, SystemEnvironment};
use check_pause::controller::run;
use check_pause::error::CheckPauseError;
use check_pause::report::Outcome;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match execute(&cli).await {
        Ok(outcome) => print!("{}", outcome.render()),
        Err(e) => {
            eprintln!("ERROR: {:#}", e);
            let code = e
                .downcast_ref::<CheckPauseError>()
                .map(CheckPauseError::exit_code)
                .unwrap_or(1);
            std::process::exit(code);
        }
    }
}

async fn execute(cli: &Cli) -> Result<Outcome> {
    let cfg = load_config()?;
    info!("base_url = {}", cfg.base_url);

    let outcome = run(&cli.invocation(), &cfg, &SystemEnvironment).await?;
    Ok(outcome)
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "warn,check_pause=debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
