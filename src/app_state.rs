use std::sync::Arc;

use crate::{
    clients::{GeminiClient, TextGenerator},
    config::Config,
    constants::quiz_data::quiz_questions,
    errors::AppResult,
    models::domain::Quiz,
    services::{GenerationService, RetryPolicy},
};

#[derive(Clone)]
pub struct AppState {
    pub generation_service: Arc<GenerationService>,
    pub quiz: Arc<Quiz>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let generator = Arc::new(GeminiClient::new(&config)?);
        Self::with_generator(config, generator)
    }

    /// Builds the state around any generator, e.g. a scripted one in tests.
    pub fn with_generator(config: Config, generator: Arc<dyn TextGenerator>) -> AppResult<Self> {
        let quiz = Arc::new(Quiz::new(quiz_questions())?);
        let retry_policy = RetryPolicy::new(config.retry_max_attempts, config.retry_base_delay);

        let generation_service = Arc::new(GenerationService::new(
            generator,
            Arc::clone(&quiz),
            retry_policy,
            config.cta_links(),
        ));

        log::info!(
            "Loaded quiz catalog with {} questions, model {}",
            quiz.len(),
            config.gemini_model
        );

        Ok(Self {
            generation_service,
            quiz,
            config: Arc::new(config),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_app_state_builds_with_gemini_client() {
        let state = AppState::new(Config::test_config()).unwrap();

        assert_eq!(state.quiz.len(), 6);
        assert!(state.config.has_api_key());
    }
}
