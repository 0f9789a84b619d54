pub mod generation_handler;
pub mod health_handler;
pub mod quiz_handler;

use actix_web::{error::JsonPayloadError, web, HttpRequest};

use crate::errors::AppError;

pub use generation_handler::{chat, generate, method_not_allowed};
pub use health_handler::{health_check, health_check_live, health_check_ready};
pub use quiz_handler::{get_quiz, transition};

const JSON_BODY_LIMIT: usize = 256 * 1024;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(health_check)
        .service(health_check_live)
        .service(health_check_ready)
        .service(get_quiz)
        .service(transition)
        .service(
            web::resource("/api/generate")
                .route(web::post().to(generate))
                .default_service(web::to(method_not_allowed)),
        )
        .service(
            web::resource("/api/chat")
                .route(web::post().to(chat))
                .default_service(web::to(method_not_allowed)),
        );
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_BODY_LIMIT)
        .error_handler(json_error)
}

fn json_error(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected JSON body on {}: {}", req.path(), err);
    AppError::ValidationError(format!("Invalid request body: {}", err)).into()
}
