use std::sync::Arc;

use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::WizardTransitionRequest,
        response::{QuizCatalogResponse, WizardTransitionResponse},
    },
    services::wizard::reduce,
};

#[get("/api/quiz")]
pub async fn get_quiz(state: web::Data<Arc<AppState>>) -> Result<HttpResponse, AppError> {
    let response = QuizCatalogResponse::new(&state.quiz, state.config.cta_links());
    Ok(HttpResponse::Ok().json(response))
}

/// Applies one wizard action. A refused action still answers 200, with
/// `accepted: false` and the step unchanged.
#[post("/api/quiz/transition")]
pub async fn transition(
    state: web::Data<Arc<AppState>>,
    request: web::Json<WizardTransitionRequest>,
) -> Result<HttpResponse, AppError> {
    let (step, action) = request.into_inner().into_parts();
    step.state.validate(&state.quiz)?;

    let result = reduce(&state.quiz, step, &action);
    if !result.accepted {
        log::debug!("Wizard action {:?} refused", action);
    }

    Ok(HttpResponse::Ok().json(WizardTransitionResponse::new(result, &state.quiz)))
}
