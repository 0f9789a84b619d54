use serde::Deserialize;
use validator::Validate;

use crate::{
    models::domain::{AnswerSet, ConversationMessage},
    services::wizard::{WizardAction, WizardState, WizardStep},
};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateRequest {
    pub answers: Option<AnswerSet>,

    #[validate(length(max = 60))]
    pub name: Option<String>,
}

impl GenerateRequest {
    pub fn name(&self) -> Option<&str> {
        normalize_name(self.name.as_deref())
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(length(min = 1, max = 50, message = "History must hold between 1 and 50 messages"))]
    pub history: Vec<ConversationMessage>,

    #[validate(length(max = 60))]
    pub name: Option<String>,
}

impl ChatRequest {
    pub fn name(&self) -> Option<&str> {
        normalize_name(self.name.as_deref())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WizardTransitionRequest {
    #[serde(default)]
    pub state: WizardState,
    #[serde(default)]
    pub selection: Vec<String>,
    pub action: WizardAction,
}

impl WizardTransitionRequest {
    pub fn into_parts(self) -> (WizardStep, WizardAction) {
        let step = WizardStep {
            state: self.state,
            selection: self.selection,
        };
        (step, self.action)
    }
}

/// Blank names count as no name at all.
fn normalize_name(name: Option<&str>) -> Option<&str> {
    name.map(str::trim).filter(|n| !n.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_request_deserializes_answers_map() {
        let request: GenerateRequest =
            serde_json::from_str(r#"{"answers":{"1":["lipedema"],"2":["45-54"]},"name":"  Maria "}"#).unwrap();

        let answers = request.answers.as_ref().unwrap();
        assert_eq!(answers.first(1), Some("lipedema"));
        assert_eq!(answers.first(2), Some("45-54"));
        assert_eq!(request.name(), Some("Maria"));
    }

    #[test]
    fn test_missing_answers_is_none() {
        let request: GenerateRequest = serde_json::from_str(r#"{"name":"Ana"}"#).unwrap();
        assert!(request.answers.is_none());
    }

    #[test]
    fn test_blank_name_is_treated_as_absent() {
        let request: GenerateRequest = serde_json::from_str(r#"{"answers":{},"name":"   "}"#).unwrap();
        assert_eq!(request.name(), None);
    }

    #[test]
    fn test_chat_request_validation() {
        let empty: ChatRequest = serde_json::from_str(r#"{"history":[]}"#).unwrap();
        assert!(empty.validate().is_err());

        let ok: ChatRequest =
            serde_json::from_str(r#"{"history":[{"role":"user","text":"Oi"}],"name":"Carlos"}"#).unwrap();
        assert!(ok.validate().is_ok());
        assert_eq!(ok.name(), Some("Carlos"));
    }

    #[test]
    fn test_overlong_name_fails_validation() {
        let request = GenerateRequest {
            answers: Some(AnswerSet::new()),
            name: Some("a".repeat(61)),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_transition_request_defaults_to_fresh_state() {
        let request: WizardTransitionRequest =
            serde_json::from_str(r#"{"action":{"type":"select_option","question_id":1,"value":"sanfona"}}"#)
                .unwrap();

        let (step, action) = request.into_parts();
        assert_eq!(step, WizardStep::default());
        assert_eq!(
            action,
            WizardAction::SelectOption {
                question_id: 1,
                value: "sanfona".to_string()
            }
        );
    }
}
