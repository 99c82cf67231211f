//! `slot-server` binary — loads the upstream day/timeslot schedule and
//! serves availability queries over HTTP.
//!
//! ## Usage
//!
//! ```sh
//! # Point at the upstream schedule document and serve on the default port
//! slot-server --url https://example.test/schedule/
//!
//! # Everything can also come from the environment
//! SCHEDULE_URL=https://example.test/schedule/ PORT=9090 slot-server
//!
//! # Boot without touching the network; POST /update populates the schedule
//! slot-server --url https://example.test/schedule/ --skip-initial-load
//! ```

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use slot_engine::ScheduleStore;
use tracing_subscriber::EnvFilter;

use slot_server::loader::ScheduleLoader;
use slot_server::routes;
use slot_server::state::AppState;

#[derive(Parser)]
#[command(
    name = "slot-server",
    version,
    about = "Availability query service over a daily busy/free schedule"
)]
struct Cli {
    /// Upstream endpoint serving the day/timeslot JSON document
    #[arg(long, env = "SCHEDULE_URL")]
    url: String,

    /// Bind host
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Bind port
    #[arg(long, env = "PORT", default_value_t = 8080)]
    port: u16,

    /// Upstream request timeout in seconds
    #[arg(long, default_value_t = 10)]
    request_timeout: u64,

    /// Start with an empty schedule instead of fetching on boot
    #[arg(long)]
    skip_initial_load: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(cli.request_timeout))
        .build()
        .context("failed to build the upstream HTTP client")?;
    let loader = ScheduleLoader::new(client, cli.url);
    let store = Arc::new(ScheduleStore::new());

    if cli.skip_initial_load {
        tracing::info!("starting with an empty schedule; POST /update to load");
    } else {
        let (days, busy) = loader
            .fetch()
            .await
            .context("initial schedule load failed")?;
        tracing::info!(
            days = days.len(),
            busy = busy.len(),
            url = loader.url(),
            "initial schedule loaded"
        );
        store.replace(days, busy);
    }

    let app = routes::router(AppState::new(store, loader));

    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port)
        .parse()
        .context("invalid bind address")?;
    tracing::info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
