use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Utc;
use chrono_tz::Tz;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use arrival_snapshot::board::{BoardClient, BoardConfig, BoardSource, FetchError, MockBoardClient};
use arrival_snapshot::collect::Collector;
use arrival_snapshot::domain::StopGroup;
use arrival_snapshot::stops::{ConfigError, load_groups};
use arrival_snapshot::store::{SnapshotStore, SnapshotStoreConfig, StoreError};

/// Capture one snapshot of live tram arrivals.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Stop list (JSON array of [groupId, groupName, [[stopId, stopName], ...]])
    #[arg(long, env = "ARRIVALS_STOPS", default_value = "data.json")]
    stops: PathBuf,

    /// Directory snapshots are written under
    #[arg(long, env = "ARRIVALS_OUT_DIR", default_value = "data")]
    out_dir: PathBuf,

    /// IANA timezone used to name snapshot files
    #[arg(long, env = "ARRIVALS_TIMEZONE", default_value = "Asia/Tokyo")]
    timezone: String,

    /// Override the lookup endpoint
    #[arg(long, env = "ARRIVALS_ENDPOINT")]
    endpoint: Option<String>,

    /// Request timeout in seconds (transport default if unset)
    #[arg(long, env = "ARRIVALS_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// Serve saved pages from this directory instead of the live endpoint
    #[arg(long, env = "ARRIVALS_MOCK_DIR")]
    mock_dir: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("unknown timezone {0:?}")]
    Timezone(String),
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let timezone: Tz = cli
        .timezone
        .parse()
        .map_err(|_| AppError::Timezone(cli.timezone.clone()))?;
    let store = SnapshotStore::new(SnapshotStoreConfig::new(&cli.out_dir).with_timezone(timezone));
    info!(
        out_dir = %store.base_dir().display(),
        timezone = %store.timezone(),
        "writing snapshots"
    );

    let groups = load_groups(&cli.stops)?;
    info!(path = %cli.stops.display(), groups = groups.len(), "loaded stop list");

    if let Some(dir) = &cli.mock_dir {
        info!(dir = %dir.display(), "using mock boards");
        let source = MockBoardClient::new(dir)?;
        return collect_and_save(&source, &groups, &store).await;
    }

    let mut config = BoardConfig::new();
    if let Some(endpoint) = cli.endpoint {
        config = config.with_endpoint(endpoint);
    }
    if let Some(secs) = cli.timeout_secs {
        config = config.with_timeout(secs);
    }
    let source = BoardClient::new(config)?;
    info!(endpoint = source.endpoint(), "using live boards");
    collect_and_save(&source, &groups, &store).await
}

async fn collect_and_save<S: BoardSource>(
    source: &S,
    groups: &[StopGroup],
    store: &SnapshotStore,
) -> Result<(), AppError> {
    let (snapshot, stats) = Collector::new(source).run_with_stats(groups).await;
    let captured_at = Utc::now();
    info!(
        groups = snapshot.len(),
        stops_fetched = stats.stops_fetched,
        stops_failed = stats.stops_failed,
        arrivals = stats.arrivals,
        "run finished"
    );

    store.save(&snapshot, captured_at)?;
    Ok(())
}
