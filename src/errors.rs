use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::{clients::FailureReason, services::generation_service::GenerationError};

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Upstream transient failure ({reason}): {detail}")]
    UpstreamTransient { reason: FailureReason, detail: String },

    #[error("Upstream permanent failure ({reason}): {detail}")]
    UpstreamPermanent { reason: FailureReason, detail: String },

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Gone: {0}")]
    Gone(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::ConfigurationError(_) => "CONFIGURATION_ERROR",
            AppError::UpstreamTransient { .. } => "UPSTREAM_TRANSIENT",
            AppError::UpstreamPermanent { .. } => "UPSTREAM_PERMANENT",
            AppError::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            AppError::Gone(_) => "GONE",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    pub fn reason(&self) -> Option<FailureReason> {
        match self {
            AppError::UpstreamTransient { reason, .. } | AppError::UpstreamPermanent { reason, .. } => {
                Some(*reason)
            }
            _ => None,
        }
    }

    /// The message shown to the end user. Upstream and configuration
    /// details stay in the logs.
    pub fn user_message(&self) -> String {
        match self {
            AppError::ValidationError(message) => message.clone(),
            AppError::ConfigurationError(_) => {
                "O serviço não está configurado corretamente. Tente novamente mais tarde.".to_string()
            }
            AppError::UpstreamTransient { .. } => {
                "Nossa assistente está muito requisitada agora. Aguarde alguns instantes e tente novamente."
                    .to_string()
            }
            AppError::UpstreamPermanent { .. } => {
                "Não foi possível gerar sua análise no momento. Tente novamente mais tarde.".to_string()
            }
            AppError::MethodNotAllowed => "Method Not Allowed".to_string(),
            AppError::Gone(message) => message.clone(),
            AppError::InternalError(_) => "Ocorreu um erro inesperado.".to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<FailureReason>,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::ConfigurationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::UpstreamTransient { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::UpstreamPermanent { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Gone(_) => StatusCode::GONE,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.user_message(),
            code: self.status_code().as_u16(),
            reason: self.reason(),
        })
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<GenerationError> for AppError {
    fn from(err: GenerationError) -> Self {
        match err {
            GenerationError::NotConfigured => {
                AppError::ConfigurationError("Gemini API key is not configured".to_string())
            }
            other => {
                let reason = other.reason();
                let detail = other.to_string();
                if other.is_transient() {
                    AppError::UpstreamTransient { reason, detail }
                } else {
                    AppError::UpstreamPermanent { reason, detail }
                }
            }
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
