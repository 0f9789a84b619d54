#[cfg(test)]
pub mod fixtures {
    use std::sync::Arc;

    use crate::{
        app_state::AppState,
        clients::TextGenerator,
        config::{Config, CtaLinks},
        constants::quiz_data::quiz_questions,
        models::domain::{AnswerSet, Quiz},
    };

    /// The production catalog, validated.
    pub fn test_quiz() -> Quiz {
        Quiz::new(quiz_questions()).unwrap()
    }

    pub fn test_links() -> CtaLinks {
        CtaLinks {
            payment_url: "https://pay.example.test/checkout".to_string(),
            whatsapp_url: "https://wa.example.test/123".to_string(),
        }
    }

    /// Answers for every question of the catalog, over-40 age range included.
    pub fn complete_answers() -> AnswerSet {
        AnswerSet::from([
            (1, vec!["lipedema", "sanfona"]),
            (2, vec!["45-54"]),
            (3, vec!["dietas"]),
            (4, vec!["gordura_abdominal"]),
            (5, vec!["barriga", "pernas"]),
            (6, vec!["sim_pronta"]),
        ])
    }

    pub fn test_state(generator: impl TextGenerator + 'static) -> Arc<AppState> {
        test_state_with(Config::test_config(), generator)
    }

    pub fn test_state_with(config: Config, generator: impl TextGenerator + 'static) -> Arc<AppState> {
        Arc::new(AppState::with_generator(config, Arc::new(generator)).unwrap())
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_complete_answers_cover_catalog() {
        let quiz = test_quiz();
        let answers = complete_answers();

        assert_eq!(answers.len(), quiz.len());
        for question in quiz.questions() {
            for value in answers.get(question.id) {
                assert!(question.has_option(value), "{} is not an option of {}", value, question.id);
            }
        }
    }

    #[test]
    fn test_fixtures_links_are_distinct_from_defaults() {
        let links = test_links();
        assert_ne!(links.payment_url, crate::config::DEFAULT_PAYMENT_URL);
        assert_ne!(links.whatsapp_url, crate::config::DEFAULT_WHATSAPP_URL);
    }
}
