use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use shrine_router::config::{AppConfig, ConfigError};
use shrine_router::dataset::{DatasetError, load_dataset};
use shrine_router::planner::{Planner, SearchError, render_report};
use shrine_router::report::{ReportError, ReportWriter};

/// Anything that stops a run from producing a report.
#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error(transparent)]
    Report(#[from] ReportError),
}

fn main() -> ExitCode {
    // Logs go to stderr; RUST_LOG=shrine_router=debug shows every pruned branch
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), AppError> {
    let config = AppConfig::from_env()?;

    info!(path = %config.data_path.display(), "loading dataset");
    let dataset = load_dataset(&config.data_path)?;

    let planner = Planner::new(&dataset, &config.search);
    let result = planner.search()?;
    info!(
        routes = result.routes.len(),
        diagnostics = result.diagnostics.len(),
        explored = result.routes_explored,
        "search finished"
    );

    let lines = render_report(result.routes);
    if let Some(best) = lines.first() {
        info!("fastest route: {best}");
    }

    let writer = ReportWriter::new(config.report);
    let files = writer.write(&lines, &result.diagnostics)?;
    info!(
        routes = %files.routes.display(),
        debug = %files.debug.display(),
        "done"
    );

    Ok(())
}
