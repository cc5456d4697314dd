use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;

use textops::application::services::{
    ExtractionService, FileIngestionService, OperationRegistry, PromptCatalog, SimilarityService,
};
use textops::infrastructure::ingestion::IngestionStepFactory;
use textops::infrastructure::llm::LlmClientFactory;
use textops::infrastructure::observability::{TracingConfig, init_tracing};
use textops::infrastructure::storage::LocalUploadStore;
use textops::infrastructure::text_processing::default_operations;
use textops::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("failed to load settings")?;

    init_tracing(
        &TracingConfig {
            environment: environment.to_string(),
            level: settings.logging.level.clone(),
            json_format: settings.logging.json,
        },
        settings.server.port,
    );

    let operation_registry = Arc::new(OperationRegistry::new(default_operations())?);
    tracing::info!(
        operations = ?operation_registry.list_operations(),
        "Text operations registered"
    );

    let backend = LlmClientFactory::create(&settings.llm)?;
    let similarity_service = Arc::new(SimilarityService::new(backend.embedder));
    let extraction_service = Arc::new(ExtractionService::new(
        backend.llm_client,
        PromptCatalog::default(),
    ));

    let upload_store = Arc::new(
        LocalUploadStore::new(PathBuf::from(&settings.uploads.upload_dir))
            .context("failed to prepare upload directory")?,
    );
    tracing::info!(root = %upload_store.root().display(), "Upload store ready");

    let file_ingestion_service = Arc::new(FileIngestionService::new(
        Arc::new(IngestionStepFactory),
        upload_store,
        settings.uploads.max_file_size,
        Duration::from_secs(settings.uploads.ingestion_timeout_secs),
    ));

    let state = AppState {
        operation_registry,
        similarity_service,
        extraction_service,
        file_ingestion_service,
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("invalid server address")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
