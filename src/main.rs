use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use realworld_client::api::ApiClient;
use realworld_client::cli::{self, Cli};
use realworld_client::config::Config;
use realworld_client::logging;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Cli::parse();
    logging::init_tracing();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;
    config.apply_env();
    config.apply_base_url(args.base_url.clone());
    config.validate().context("Invalid configuration")?;

    tracing::debug!(base_url = %config.server.base_url, "using server");

    let client = ApiClient::from_config(&config).context("Failed to build HTTP client")?;

    match cli::execute(args.command, client).await {
        Ok(outcome) => {
            println!("{}", outcome.render()?);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("{}", cli::render_error(&err));
            Ok(ExitCode::FAILURE)
        }
    }
}
