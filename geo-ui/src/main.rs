use std::sync::Arc;

use anyhow::Context as _;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use geo_client::AreaServiceClient;
use geo_core::AreaTransport;
use geo_ui::app::MapApp;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Desktop client for the geo area-calculation service.
///
/// Click up to four points on the world map, then send them to the backend
/// to compute the enclosed area.
#[derive(Debug, Parser)]
struct Cli {
    /// Base URL of the area-calculation service.
    #[arg(long, default_value = "http://localhost:8080")]
    endpoint: String,

    /// Request timeout for submissions, in seconds.
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    // The runtime lives here for the whole session; the app only holds a
    // handle for spawning submission tasks.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let transport: Arc<dyn AreaTransport> =
        Arc::new(AreaServiceClient::new(&cli.endpoint, cli.timeout_secs)?);
    info!(endpoint = %cli.endpoint, "marker sets will be submitted to");

    let handle = runtime.handle().clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 640.0])
            .with_title("Geo Area Calculator"),
        ..Default::default()
    };

    eframe::run_native(
        "Geo Area Calculator",
        options,
        Box::new(move |_cc| Ok(Box::new(MapApp::new(transport, handle)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to run UI: {e}"))?;

    Ok(())
}
