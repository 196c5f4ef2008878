use sfa_axum::start_server;
use sfa_rest::RestCatalog;
use sfadmin::{AppConfig, Cli};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // By convention, we leverage `tracing` to instrument and log various
    // operations throughout this project.
    // Accordingly, we subscribe to these events so we can write them to stdio.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::import()?;
    let AppConfig { server, remote } = AppConfig::load(&cli)?;

    let catalog = RestCatalog::open(&remote)?;
    tracing::info!("Reading products from {}", catalog.base_url());

    start_server(server, catalog).await?;
    Ok(())
}
