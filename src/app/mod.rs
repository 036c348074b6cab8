use crate::api::ApiServer;
use crate::catalog::{MeetingCatalog, StaticCatalog};
use crate::config::Config;
use crate::session::ReviewMachine;
use crate::summary::Summarizer;
use anyhow::Result;
use std::sync::Arc;
use tracing::info;

pub async fn run_service() -> Result<()> {
    info!("Starting Recap service");

    let config = Config::load()?;

    let catalog: Arc<dyn MeetingCatalog> = Arc::new(StaticCatalog::demo());
    let summarizer = Arc::new(build_summarizer(&config)?);
    let machine = Arc::new(ReviewMachine::new(catalog.clone(), summarizer));

    let api_server = ApiServer::new(catalog, machine, config.server.port);

    info!("Recap is ready!");
    info!(
        "Browse meetings: curl http://127.0.0.1:{}/meetings",
        config.server.port
    );

    api_server.start().await
}

pub fn build_summarizer(config: &Config) -> Result<Summarizer> {
    let provider_name = config
        .summary
        .provider
        .clone()
        .unwrap_or_else(|| "openai-api".to_string());

    Summarizer::with_provider(&provider_name, &config.summary)
}
