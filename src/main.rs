use std::process::ExitCode;

use phosphor_elm_gen::config::Config;
use phosphor_elm_gen::error::GeneratorResult;
use phosphor_elm_gen::report::{print_fatal, print_summary};
use phosphor_elm_gen::services::generator::{self, RunSummary};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "phosphor_elm_gen=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run().await {
        Ok(summary) => {
            if let Err(e) = print_summary(&summary) {
                tracing::error!("Failed to print summary: {}", e);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Generation aborted: {}", e);
            print_fatal(&e).ok();
            ExitCode::FAILURE
        }
    }
}

async fn run() -> GeneratorResult<RunSummary> {
    let config = Config::from_env()?;
    tracing::info!(
        version = phosphor_elm_gen::VERSION,
        assets = %config.assets_path.display(),
        layout = config.layout.as_str(),
        "Starting icon generation"
    );

    generator::run(&config).await
}
