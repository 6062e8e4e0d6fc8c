use std::sync::Arc;
use stratus_cloud::FileStore;
use stratus_config::Config;
use stratusd::{Handler, LineTransport, TemplateWorkflow};

pub async fn handle(config: &Config) -> anyhow::Result<()> {
    tracing::info!(
        store = %config.store.display(),
        templates = %config.templates.display(),
        timeout = ?config.timeout,
        "serving requests on stdin"
    );

    let handler = Handler::new(
        Arc::new(FileStore::new(&config.store)),
        Arc::new(TemplateWorkflow::new(&config.templates)),
        config.timeout,
    );

    let mut transport = LineTransport::stdio();
    let handled = stratusd::serve(&handler, &mut transport).await?;

    tracing::info!(handled, "input closed, shutting down");
    Ok(())
}
