use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Debug, Clone, Deserialize)]
pub struct ContentConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub mongodb: MongoConfig,
    pub openai: OpenAiConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiConfig {
    pub api_key: String,
    /// Model used for every generation request (e.g., gpt-4)
    pub model: String,
    pub base_url: String,
}

impl ContentConfig {
    pub fn load() -> Result<Self, AppError> {
        // Load common config (handles .env, APP__ prefix and PORT)
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(ContentConfig {
            common: common_config,
            mongodb: MongoConfig {
                uri: get_env("MONGODB_URI", None, is_prod)?,
                database: get_env("MONGODB_DATABASE", Some("brand_content_db"), is_prod)?,
            },
            openai: OpenAiConfig {
                api_key: get_env("OPENAI_API_KEY", None, is_prod)?,
                model: get_env("OPENAI_MODEL", Some("gpt-4"), is_prod)?,
                base_url: get_env("OPENAI_BASE_URL", Some(DEFAULT_OPENAI_BASE_URL), is_prod)?,
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    resolve(key, env::var(key).ok(), default, is_prod)
}

fn resolve(
    key: &str,
    value: Option<String>,
    default: Option<&str>,
    is_prod: bool,
) -> Result<String, AppError> {
    match value {
        Some(val) => Ok(val),
        None => {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_value_wins_over_default() {
        let value = resolve("OPENAI_MODEL", Some("gpt-4o".into()), Some("gpt-4"), false).unwrap();
        assert_eq!(value, "gpt-4o");
    }

    #[test]
    fn default_used_outside_prod() {
        let value = resolve("OPENAI_MODEL", None, Some("gpt-4"), false).unwrap();
        assert_eq!(value, "gpt-4");
    }

    #[test]
    fn missing_required_value_is_an_error() {
        let err = resolve("OPENAI_API_KEY", None, None, false).unwrap_err();
        assert!(err.to_string().contains("OPENAI_API_KEY is required"));
    }

    #[test]
    fn prod_ignores_defaults() {
        let err = resolve("MONGODB_DATABASE", None, Some("brand_content_db"), true).unwrap_err();
        assert!(err.to_string().contains("required in production"));
    }
}
