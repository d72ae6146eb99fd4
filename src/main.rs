pub mod configuration;
mod ilp;
mod smoke;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use configuration::get_configuration;
use ilp::IlpProvider;
use smoke::{Operation, SmokeCall};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

/// Send one request to the ILP gRPC service and print what comes back.
#[derive(Parser, Debug)]
#[command(name = "ilp-smoke", version)]
struct Cli {
    /// Call to make; defaults to `smoke.operation` from the configuration.
    #[arg(value_enum)]
    operation: Option<Operation>,

    /// Optional YAML file layered over the built-in defaults.
    #[arg(long, default_value = "configuration.yaml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<ExitCode, anyhow::Error> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_target(false)
        .without_time()
        // stdout carries only the response or the failure marker
        .with_writer(std::io::stderr)
        .init();

    let configuration =
        get_configuration(Some(&cli.config)).context("Failed to read configuration.")?;
    let operation = cli.operation.unwrap_or(configuration.smoke.operation);

    let provider = IlpProvider::new(&configuration.service)?;
    let call = SmokeCall::new(
        operation,
        &configuration.smoke,
        configuration.service.auth_token.as_ref(),
    );
    tracing::info!(
        endpoint = %configuration.service.base_url(),
        ?operation,
        "running smoke call"
    );

    let outcome = smoke::run(&provider, call, &mut std::io::stdout()).await?;
    if outcome.fails_process(configuration.smoke.fail_on_error) {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
