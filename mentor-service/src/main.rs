use mentor_service::config::MentorConfig;
use mentor_service::services::providers::openai::{OpenAiChatProvider, OpenAiConfig};
use mentor_service::services::providers::ChatProvider;
use mentor_service::startup::Application;
use service_core::observability::init_tracing;
use std::sync::Arc;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing
    init_tracing("mentor-service", "info");

    let config = MentorConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    // Initialize OpenAI chat provider
    let openai_config = OpenAiConfig {
        api_key: config.openai.api_key.clone(),
        model: config.openai.model.clone(),
        api_base: config.openai.api_base.clone(),
        temperature: config.openai.temperature,
        max_tokens: config.openai.max_tokens,
    };
    let provider: Arc<dyn ChatProvider> = Arc::new(OpenAiChatProvider::new(openai_config));

    tracing::info!(
        model = %config.openai.model,
        "Initialized OpenAI chat provider"
    );

    let app = Application::build(config, provider).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    app.run_until_stopped().await
}
