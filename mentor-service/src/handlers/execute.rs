//! Exchange handler: forwards a user message to the completion provider
//! behind the configured persona instruction.

use crate::startup::AppState;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use service_core::error::AppError;

/// Execute request body.
#[derive(Debug, Deserialize)]
pub struct ExecuteRequest {
    #[serde(default)]
    pub message: Option<String>,
}

/// Successful exchange response.
#[derive(Debug, Serialize)]
pub struct ExecuteResponse {
    pub response: String,
}

/// Handle an exchange.
///
/// POST /execute
pub async fn execute(
    State(state): State<AppState>,
    Json(req): Json<ExecuteRequest>,
) -> Result<Json<ExecuteResponse>, AppError> {
    let message = match req.message {
        Some(m) if !m.trim().is_empty() => m,
        _ => return Err(AppError::BadRequest(anyhow::anyhow!("Message is required"))),
    };

    tracing::info!(message_len = message.len(), "Processing exchange");

    let reply = match state
        .provider
        .complete(&state.config.prompt.system_prompt, &message)
        .await
    {
        Ok(reply) => reply,
        Err(e) => {
            tracing::error!(error = %e, "Completion request failed");
            if state.config.exchange_log.record_failures {
                if let Err(log_err) = state
                    .exchange_log
                    .record_failure(&message, &e.to_string())
                    .await
                {
                    tracing::warn!(error = %log_err, "Failed to record failed exchange");
                }
            }
            return Err(AppError::UpstreamFailed(anyhow::anyhow!(
                "OpenAI API request failed."
            )));
        }
    };

    let text = reply.text.trim().to_string();

    tracing::debug!(
        input_tokens = reply.input_tokens,
        output_tokens = reply.output_tokens,
        "Exchange complete"
    );

    state.exchange_log.record_success(&message, &text).await?;

    Ok(Json(ExecuteResponse { response: text }))
}
