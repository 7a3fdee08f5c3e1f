//! Starts the Zookeeper container and/or its ambassador on this host.
//!
//! ```text
//! run-zookeeper SCRIPT [--no-zookeeper | --no-dash-p] [-p PORTS]... [DOCKER ARGS]...
//!     [-- AMBASSADOR ARGS...]
//! ```
//!
//! `SCRIPT` is the leading entry passed by the invoking wrapper and is ignored.

use std::path::PathBuf;

use zk_core::services::args::launcher_args;
use zk_core::services::docker::DockerRunner;
use zk_core::services::environment::HostEnvironment;
use zk_core::services::launcher;

const DEBUG_LOG_ENV: &str = "ZK_LAUNCH_DEBUG_LOG";

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let guard = match std::env::var_os(DEBUG_LOG_ENV).filter(|p| !p.is_empty()) {
        Some(path) => Some(setup_file_logging(PathBuf::from(path))),
        None => {
            setup_stderr_logging();
            None
        }
    };

    let args = launcher_args(std::env::args());
    let env = HostEnvironment::from_env();
    tracing::debug!(config = %env.config_path().display(), ?args, "starting");

    let result = launcher::run(&env, &DockerRunner, &args).await;
    if let Ok(report) = &result {
        tracing::debug!(?report, "launches submitted");
    }
    // Flush file logging before a possible early exit.
    drop(guard);

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(e.exit_code());
    }
    Ok(())
}

fn setup_stderr_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();
}

/// File-based tracing at debug level. The guard must outlive all logging.
fn setup_file_logging(path: PathBuf) -> tracing_appender::non_blocking::WorkerGuard {
    let directory = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let file_name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "run-zookeeper-debug.log".into());
    let file_appender = tracing_appender::rolling::never(directory, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_ansi(false)
        .init();

    guard
}
