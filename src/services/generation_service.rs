use std::sync::Arc;

use thiserror::Error;

use crate::{
    clients::{FailureReason, GenerationRequest, TextGenerator, UpstreamError},
    config::CtaLinks,
    models::domain::{AnswerSet, Conversation, Quiz},
    services::{
        persona::Persona,
        prompt_builder::{build_analysis_request, build_chat_request},
        retry::{retry_with_backoff, RetryFailure, RetryPolicy},
    },
};

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Gemini API key is not configured")]
    NotConfigured,

    #[error("gave up after {attempts} attempt(s): {source}")]
    Exhausted { attempts: u32, source: UpstreamError },

    #[error("upstream rejected the request: {0}")]
    Rejected(UpstreamError),
}

impl GenerationError {
    pub fn reason(&self) -> FailureReason {
        match self {
            GenerationError::NotConfigured => FailureReason::InvalidCredentials,
            GenerationError::Exhausted { source, .. } => source.reason(),
            GenerationError::Rejected(source) => source.reason(),
        }
    }

    pub fn is_transient(&self) -> bool {
        match self {
            GenerationError::Exhausted { source, .. } => source.is_transient(),
            _ => false,
        }
    }
}

impl From<RetryFailure<UpstreamError>> for GenerationError {
    fn from(failure: RetryFailure<UpstreamError>) -> Self {
        match failure.error {
            UpstreamError::NotConfigured => GenerationError::NotConfigured,
            error if failure.retryable => GenerationError::Exhausted {
                attempts: failure.attempts,
                source: error,
            },
            error => GenerationError::Rejected(error),
        }
    }
}

pub struct GenerationService {
    generator: Arc<dyn TextGenerator>,
    quiz: Arc<Quiz>,
    retry_policy: RetryPolicy,
    links: CtaLinks,
}

impl GenerationService {
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        quiz: Arc<Quiz>,
        retry_policy: RetryPolicy,
        links: CtaLinks,
    ) -> Self {
        Self {
            generator,
            quiz,
            retry_policy,
            links,
        }
    }

    /// Personalized three-section analysis for a finished quiz.
    pub async fn generate(&self, answers: &AnswerSet, name: Option<&str>) -> Result<String, GenerationError> {
        let persona = Persona::from_name(name);
        log::info!(
            "Generating analysis for {} answered question(s), persona {:?}",
            answers.len(),
            persona
        );

        let request = build_analysis_request(&self.quiz, answers, persona);
        self.call_with_retry(&request).await
    }

    /// Reply to the latest user message, with the rest of the history as context.
    pub async fn converse(&self, conversation: &Conversation, name: Option<&str>) -> Result<String, GenerationError> {
        let persona = Persona::from_name(name);
        log::info!(
            "Generating chat reply for a {}-message history, persona {:?}",
            conversation.len(),
            persona
        );

        let request = build_chat_request(conversation, persona, &self.links);
        self.call_with_retry(&request).await
    }

    async fn call_with_retry(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        let generator = &self.generator;

        let text = retry_with_backoff(&self.retry_policy, UpstreamError::is_transient, |attempt| async move {
            log::debug!("Upstream generation attempt {}", attempt);
            let text = generator.generate(request).await?;
            if text.trim().is_empty() {
                Err(UpstreamError::EmptyResponse)
            } else {
                Ok(text)
            }
        })
        .await?;

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        clients::MockTextGenerator,
        models::domain::ConversationMessage,
        test_utils::fixtures::{test_links, test_quiz},
    };
    use std::{
        sync::atomic::{AtomicU32, Ordering},
        time::Duration,
    };

    fn service(mock: MockTextGenerator, max_attempts: u32) -> GenerationService {
        GenerationService::new(
            Arc::new(mock),
            Arc::new(test_quiz()),
            RetryPolicy::new(max_attempts, Duration::from_millis(1)),
            test_links(),
        )
    }

    fn maria_answers() -> AnswerSet {
        AnswerSet::from([(1, vec!["lipedema"]), (2, vec!["45-54"])])
    }

    #[tokio::test]
    async fn blank_text_twice_then_valid_text_is_returned() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&calls);

        let mut mock = MockTextGenerator::new();
        mock.expect_generate().times(3).returning(move |_| {
            match counter.fetch_add(1, Ordering::SeqCst) {
                0 => Ok(String::new()),
                1 => Ok("   \n".to_string()),
                _ => Ok("**Análise do seu Perfil**\nTudo certo.".to_string()),
            }
        });

        let text = service(mock, 3).generate(&maria_answers(), Some("Maria")).await.unwrap();

        assert_eq!(text, "**Análise do seu Perfil**\nTudo certo.");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn generate_sends_summary_with_feminine_persona_for_maria() {
        let mut mock = MockTextGenerator::new();
        mock.expect_generate()
            .withf(|request| {
                request.system_instruction.as_deref() == Some(Persona::Feminine.instruction())
                    && request.turns[0].text.contains("Resposta: \"Tenho lipedema\"")
                    && request.turns[0].text.contains("Resposta: \"45 a 54 anos\"")
            })
            .times(1)
            .returning(|_| Ok("ok".to_string()));

        let text = service(mock, 3).generate(&maria_answers(), Some("Maria")).await.unwrap();
        assert_eq!(text, "ok");
    }

    #[tokio::test]
    async fn carlos_gets_masculine_persona_regardless_of_answers() {
        let mut mock = MockTextGenerator::new();
        mock.expect_generate()
            .withf(|request| request.system_instruction.as_deref() == Some(Persona::Masculine.instruction()))
            .times(1)
            .returning(|_| Ok("ok".to_string()));

        service(mock, 3).generate(&maria_answers(), Some("Carlos")).await.unwrap();
    }

    #[tokio::test]
    async fn permission_denied_is_not_retried() {
        let mut mock = MockTextGenerator::new();
        mock.expect_generate().times(1).returning(|_| {
            Err(UpstreamError::Http {
                status: 403,
                message: "PERMISSION_DENIED".to_string(),
            })
        });

        let err = service(mock, 5).generate(&maria_answers(), None).await.unwrap_err();

        assert!(matches!(err, GenerationError::Rejected(_)));
        assert_eq!(err.reason(), FailureReason::PermissionDenied);
        assert!(!err.is_transient());
    }

    #[tokio::test]
    async fn rate_limit_exhausts_after_max_attempts() {
        let mut mock = MockTextGenerator::new();
        mock.expect_generate().times(4).returning(|_| {
            Err(UpstreamError::Http {
                status: 429,
                message: "RESOURCE_EXHAUSTED".to_string(),
            })
        });

        let err = service(mock, 4).generate(&maria_answers(), None).await.unwrap_err();

        assert!(matches!(err, GenerationError::Exhausted { attempts: 4, .. }));
        assert_eq!(err.reason(), FailureReason::RateLimited);
        assert!(err.is_transient());
    }

    #[tokio::test]
    async fn timeout_is_attempted_once_and_reported_as_timeout() {
        let mut mock = MockTextGenerator::new();
        mock.expect_generate()
            .times(1)
            .returning(|_| Err(UpstreamError::Timeout("operation timed out".to_string())));

        let err = service(mock, 3).generate(&maria_answers(), None).await.unwrap_err();

        assert!(matches!(err, GenerationError::Rejected(UpstreamError::Timeout(_))));
        assert_eq!(err.reason(), FailureReason::Timeout);
        assert!(!err.is_transient());
    }

    #[tokio::test]
    async fn missing_api_key_maps_to_not_configured() {
        let mut mock = MockTextGenerator::new();
        mock.expect_generate()
            .times(1)
            .returning(|_| Err(UpstreamError::NotConfigured));

        let err = service(mock, 3).generate(&maria_answers(), None).await.unwrap_err();
        assert!(matches!(err, GenerationError::NotConfigured));
    }

    #[tokio::test]
    async fn converse_forwards_history_and_returns_reply() {
        let mut mock = MockTextGenerator::new();
        mock.expect_generate()
            .withf(|request| {
                request.turns.len() == 1
                    && request.turns[0].text == "Quanto custa?"
                    && request
                        .system_instruction
                        .as_deref()
                        .is_some_and(|s| s.contains("Seu bloqueio é hormonal."))
            })
            .times(1)
            .returning(|_| Ok("Custa R$47 ✨".to_string()));

        let conversation = Conversation::from_messages(vec![
            ConversationMessage::assistant("Seu bloqueio é hormonal."),
            ConversationMessage::user("Quanto custa?"),
        ])
        .unwrap();

        let reply = service(mock, 3).converse(&conversation, Some("Ana")).await.unwrap();
        assert_eq!(reply, "Custa R$47 ✨");
    }
}
