use std::sync::Arc;

use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::{
        domain::Conversation,
        dto::{
            request::{ChatRequest, GenerateRequest},
            response::{ChatResponse, GenerateResponse},
        },
    },
    services::GenerationError,
};

pub async fn generate(
    req: HttpRequest,
    state: web::Data<Arc<AppState>>,
    request: web::Json<GenerateRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let answers = request
        .answers
        .as_ref()
        .ok_or_else(|| AppError::ValidationError("Missing answers in request body".to_string()))?;
    state.quiz.check_single_choice(answers)?;
    ensure_configured(&req, &state)?;

    let analysis = state
        .generation_service
        .generate(answers, request.name())
        .await
        .map_err(|err| upstream_failure(&req, err))?;

    Ok(HttpResponse::Ok().json(GenerateResponse::from(analysis)))
}

/// Takes the raw body so a disabled chat answers 410 whatever was posted.
pub async fn chat(
    req: HttpRequest,
    state: web::Data<Arc<AppState>>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    if !state.config.chat_enabled {
        return Err(AppError::Gone("O chat está desativado no momento.".to_string()));
    }

    let request: ChatRequest = serde_json::from_slice(&body).map_err(|err| {
        log::warn!("Rejected JSON body on {}: {}", req.path(), err);
        AppError::ValidationError(format!("Invalid request body: {}", err))
    })?;
    request.validate()?;
    let name = request.name().map(str::to_string);

    let conversation = Conversation::from_messages(request.history)?;
    ensure_configured(&req, &state)?;

    let reply = state
        .generation_service
        .converse(&conversation, name.as_deref())
        .await
        .map_err(|err| upstream_failure(&req, err))?;

    Ok(HttpResponse::Ok().json(ChatResponse::from(reply)))
}

pub async fn method_not_allowed() -> Result<HttpResponse, AppError> {
    Err(AppError::MethodNotAllowed)
}

// Refuses before any upstream call is attempted.
fn ensure_configured(req: &HttpRequest, state: &AppState) -> Result<(), AppError> {
    if state.config.has_api_key() {
        return Ok(());
    }
    log::error!(
        "[{}] {} refused: Gemini API key is not configured",
        request_id(req),
        req.path()
    );
    Err(GenerationError::NotConfigured.into())
}

fn upstream_failure(req: &HttpRequest, err: GenerationError) -> AppError {
    log::error!("[{}] {} failed: {}", request_id(req), req.path(), err);
    err.into()
}

fn request_id(req: &HttpRequest) -> String {
    get_request_id(req).unwrap_or_else(|| "-".to_string())
}
