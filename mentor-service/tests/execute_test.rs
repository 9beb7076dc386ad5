mod common;

use common::{test_config, TestApp};
use mentor_service::services::providers::mock::MockChatProvider;
use reqwest::Client;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

#[tokio::test]
async fn missing_message_returns_400() {
    let app = TestApp::spawn(Arc::new(MockChatProvider::new("unused"))).await;
    let client = Client::new();

    let response = client
        .post(format!("{}/execute", app.address))
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 400);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body, json!({"error": "Message is required"}));

    app.cleanup().await;
}

#[tokio::test]
async fn empty_message_returns_400() {
    let app = TestApp::spawn(Arc::new(MockChatProvider::new("unused"))).await;
    let client = Client::new();

    for message in ["", "   "] {
        let response = client
            .post(format!("{}/execute", app.address))
            .json(&json!({ "message": message }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), 400);

        let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
        assert_eq!(body, json!({"error": "Message is required"}));
    }

    // No exchange reached the provider, so nothing was logged
    assert!(tokio::fs::metadata(&app.log_path).await.is_err());

    app.cleanup().await;
}

#[tokio::test]
async fn valid_message_returns_response_and_logs_exchange() {
    let provider = MockChatProvider::new("Step 1: register your domain today.");
    let app = TestApp::spawn(Arc::new(provider)).await;
    let client = Client::new();

    let response = client
        .post(format!("{}/execute", app.address))
        .json(&json!({"message": "I want to start a business"}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body, json!({"response": "Step 1: register your domain today."}));

    let log = tokio::fs::read_to_string(&app.log_path)
        .await
        .expect("Failed to read exchange log");
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("USER: I want to start a business"));
    assert!(lines[0].contains("AI: Step 1: register your domain today."));

    app.cleanup().await;
}

#[tokio::test]
async fn response_whitespace_is_trimmed() {
    let provider = MockChatProvider::new("  Ship it today.  \n");
    let app = TestApp::spawn(Arc::new(provider)).await;
    let client = Client::new();

    let response = client
        .post(format!("{}/execute", app.address))
        .json(&json!({"message": "Should I polish the landing page more?"}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body, json!({"response": "Ship it today."}));

    app.cleanup().await;
}

#[tokio::test]
async fn provider_failure_returns_500() {
    let app = TestApp::spawn(Arc::new(MockChatProvider::failing())).await;
    let client = Client::new();

    let response = client
        .post(format!("{}/execute", app.address))
        .json(&json!({"message": "I want to start a business"}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 500);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body, json!({"error": "OpenAI API request failed."}));

    // Failed exchange is recorded
    let log = tokio::fs::read_to_string(&app.log_path)
        .await
        .expect("Failed to read exchange log");
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("USER: I want to start a business"));
    assert!(lines[0].contains("ERROR:"));

    app.cleanup().await;
}

#[tokio::test]
async fn provider_failure_is_not_recorded_when_disabled() {
    let mut config = test_config();
    config.exchange_log.record_failures = false;

    let app = TestApp::spawn_with_config(config, Arc::new(MockChatProvider::failing())).await;
    let client = Client::new();

    let response = client
        .post(format!("{}/execute", app.address))
        .json(&json!({"message": "I want to start a business"}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 500);
    assert!(tokio::fs::metadata(&app.log_path).await.is_err());

    app.cleanup().await;
}

#[tokio::test]
async fn log_write_failure_returns_500() {
    let mut config = test_config();
    // Parent directory does not exist, so the append fails after a
    // successful completion
    config.exchange_log.path = format!("target/missing-{}/mentor.log", Uuid::new_v4());

    let provider = MockChatProvider::new("Step 1: register your domain today.");
    let app = TestApp::spawn_with_config(config, Arc::new(provider)).await;
    let client = Client::new();

    let response = client
        .post(format!("{}/execute", app.address))
        .json(&json!({"message": "I want to start a business"}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 500);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body, json!({"error": "An unexpected error occurred."}));

    app.cleanup().await;
}
