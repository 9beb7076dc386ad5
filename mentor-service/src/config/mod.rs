use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Persona instruction sent ahead of every user message.
const DEFAULT_SYSTEM_PROMPT: &str = "\
You are HM Hustle AI, a no-BS execution mentor.
Your mission: **Force the user to take action.**
- If they overthink, simplify it.
- If they hesitate, call them out.
- If they lack direction, give them **one single action step.**
- Keep it short, fast, and impactful.";

const DEFAULT_MODEL: &str = "gpt-4";
const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
const DEFAULT_LOG_FILE: &str = "mentor.log";

#[derive(Debug, Clone, Deserialize)]
pub struct MentorConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub openai: OpenAiApiConfig,
    pub prompt: PromptConfig,
    pub exchange_log: ExchangeLogConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiApiConfig {
    pub api_key: String,
    /// Chat model (e.g., gpt-4)
    pub model: String,
    /// Base URL of an OpenAI-compatible API
    pub api_base: String,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PromptConfig {
    pub system_prompt: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeLogConfig {
    pub path: String,
    /// Whether failed exchanges are also recorded
    pub record_failures: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    pub serve_index: bool,
}

impl MentorConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(MentorConfig {
            common: common_config,
            openai: OpenAiApiConfig {
                api_key: get_env("OPENAI_API_KEY", None, is_prod)?,
                model: get_env("OPENAI_MODEL", Some(DEFAULT_MODEL), is_prod)?,
                api_base: get_env("OPENAI_API_BASE", Some(DEFAULT_API_BASE), is_prod)?,
                temperature: env::var("MENTOR_TEMPERATURE")
                    .ok()
                    .and_then(|v| v.parse().ok()),
                max_tokens: env::var("MENTOR_MAX_TOKENS")
                    .ok()
                    .and_then(|v| v.parse().ok()),
            },
            prompt: PromptConfig {
                system_prompt: get_env("MENTOR_SYSTEM_PROMPT", Some(DEFAULT_SYSTEM_PROMPT), is_prod)?,
            },
            exchange_log: ExchangeLogConfig {
                path: get_env("MENTOR_LOG_FILE", Some(DEFAULT_LOG_FILE), is_prod)?,
                record_failures: get_env("MENTOR_RECORD_FAILURES", Some("true"), is_prod)?
                    .parse()
                    .unwrap_or(true),
            },
            ui: UiConfig {
                serve_index: get_env("MENTOR_SERVE_INDEX", Some("true"), is_prod)?
                    .parse()
                    .unwrap_or(true),
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
