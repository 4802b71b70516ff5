use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use postforge_backend::{BackendConfig, ContentApi};
use postforge_console::catalog::Catalog;
use postforge_console::directory::ClientDirectory;
use postforge_console::notify::NotificationCenter;
use postforge_console::workbench::Workbench;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "postforge_console=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = BackendConfig::from_env();
    tracing::info!(base_url = %config.base_url, "Connecting to content backend");

    let backend = Arc::new(ContentApi::new(&config));
    let notifier = Arc::new(NotificationCenter::default());

    let mut directory = ClientDirectory::new(backend.clone(), notifier.clone());
    let mut catalog = Catalog::new(backend.clone(), notifier.clone());
    let mut workbench = Workbench::new(backend, notifier);

    directory.refresh().await?;
    catalog.refresh().await?;
    workbench.refresh_saved().await?;

    tracing::info!(
        clients = directory.clients().len(),
        categories = catalog.categories().len(),
        topics = catalog.topics().len(),
        posts = workbench.saved_posts().len(),
        "Initial sync complete"
    );

    Ok(())
}
