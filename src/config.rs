use std::{env, time::Duration};

use secrecy::SecretString;
use serde::Serialize;

use crate::errors::{AppError, AppResult};

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_PAYMENT_URL: &str = "https://pay.kiwify.com.br/iDBgO2e";
pub const DEFAULT_WHATSAPP_URL: &str = "https://wa.me/5513996005779";

/// Static call-to-action links offered after the analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CtaLinks {
    pub payment_url: String,
    pub whatsapp_url: String,
}

#[derive(Debug)]
pub struct Config {
    pub gemini_api_key: Option<SecretString>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub upstream_timeout: Duration,
    pub retry_max_attempts: u32,
    pub retry_base_delay: Duration,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub cors_allowed_origin: Option<String>,
    pub chat_enabled: bool,
    pub payment_url: String,
    pub whatsapp_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            gemini_api_key: env::var("GEMINI_API_KEY")
                .or_else(|_| env::var("API_KEY"))
                .ok()
                .filter(|key| !key.trim().is_empty())
                .map(SecretString::from),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_base_url: env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string()),
            upstream_timeout: Duration::from_secs(
                env::var("UPSTREAM_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            ),
            retry_max_attempts: env::var("RETRY_MAX_ATTEMPTS")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(3),
            retry_base_delay: Duration::from_millis(
                env::var("RETRY_BASE_DELAY_MS")
                    .ok()
                    .and_then(|ms| ms.parse().ok())
                    .unwrap_or(1000),
            ),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN").ok(),
            chat_enabled: env::var("CHAT_ENABLED")
                .map(|v| !matches!(v.trim().to_ascii_lowercase().as_str(), "0" | "false" | "no" | "off"))
                .unwrap_or(true),
            payment_url: env::var("PAYMENT_URL").unwrap_or_else(|_| DEFAULT_PAYMENT_URL.to_string()),
            whatsapp_url: env::var("WHATSAPP_URL")
                .unwrap_or_else(|_| DEFAULT_WHATSAPP_URL.to_string()),
        }
    }

    pub fn cta_links(&self) -> CtaLinks {
        CtaLinks {
            payment_url: self.payment_url.clone(),
            whatsapp_url: self.whatsapp_url.clone(),
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.gemini_api_key.is_some()
    }

    /// Checks the settings a deployed instance cannot run without.
    pub fn validate_for_production(&self) -> AppResult<()> {
        if self.gemini_api_key.is_none() {
            return Err(AppError::ConfigurationError(
                "GEMINI_API_KEY (or API_KEY) is not set".to_string(),
            ));
        }

        if self.retry_max_attempts == 0 {
            return Err(AppError::ConfigurationError(
                "RETRY_MAX_ATTEMPTS must be at least 1".to_string(),
            ));
        }

        if self.upstream_timeout.is_zero() {
            return Err(AppError::ConfigurationError(
                "UPSTREAM_TIMEOUT_SECS must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            gemini_api_key: Some(SecretString::from("test_api_key".to_string())),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_base_url: "http://127.0.0.1:9".to_string(),
            upstream_timeout: Duration::from_secs(5),
            retry_max_attempts: 3,
            retry_base_delay: Duration::from_millis(1),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            cors_allowed_origin: None,
            chat_enabled: true,
            payment_url: DEFAULT_PAYMENT_URL.to_string(),
            whatsapp_url: DEFAULT_WHATSAPP_URL.to_string(),
        }
    }
}
