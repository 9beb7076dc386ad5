//! Test helper module for mentor-service integration tests.

#![allow(dead_code)]

use mentor_service::config::{
    ExchangeLogConfig, MentorConfig, OpenAiApiConfig, PromptConfig, UiConfig,
};
use mentor_service::services::providers::ChatProvider;
use mentor_service::startup::Application;
use service_core::config::Config as CoreConfig;
use std::sync::Arc;
use uuid::Uuid;

/// Test application with a running HTTP server.
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub log_path: String,
}

/// Configuration with dev defaults and a unique per-test exchange log path.
pub fn test_config() -> MentorConfig {
    MentorConfig {
        common: CoreConfig { port: 0 },
        openai: OpenAiApiConfig {
            api_key: "test-key".to_string(),
            model: "gpt-4".to_string(),
            api_base: "https://api.openai.com/v1".to_string(),
            temperature: None,
            max_tokens: None,
        },
        prompt: PromptConfig {
            system_prompt: "You are a test mentor. Answer with one action.".to_string(),
        },
        exchange_log: ExchangeLogConfig {
            path: format!("target/test-exchange-{}.log", Uuid::new_v4()),
            record_failures: true,
        },
        ui: UiConfig { serve_index: true },
    }
}

impl TestApp {
    pub async fn spawn(provider: Arc<dyn ChatProvider>) -> Self {
        Self::spawn_with_config(test_config(), provider).await
    }

    pub async fn spawn_with_config(
        mut config: MentorConfig,
        provider: Arc<dyn ChatProvider>,
    ) -> Self {
        config.common.port = 0; // Random port for testing
        let log_path = config.exchange_log.path.clone();

        let app = Application::build(config, provider)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            log_path,
        }
    }

    /// Cleanup test resources (exchange log file).
    pub async fn cleanup(&self) {
        let _ = tokio::fs::remove_file(&self.log_path).await;
    }
}
