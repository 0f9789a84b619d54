use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use super::AnswerSet;
use crate::errors::{AppError, AppResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Single,   // exactly one value once answered
    Multiple, // any non-empty subset
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionOption {
    pub label: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl QuestionOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            image: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SocialProof {
    pub name: String,
    pub result: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_image: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub question_type: QuestionType,
    pub options: Vec<QuestionOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition_message: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub conditional_messages: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_proof: Option<SocialProof>,
}

impl Question {
    pub fn new(
        id: u32,
        text: impl Into<String>,
        question_type: QuestionType,
        options: Vec<QuestionOption>,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            subtitle: None,
            question_type,
            options,
            transition_message: None,
            conditional_messages: BTreeMap::new(),
            social_proof: None,
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_transition_message(mut self, message: impl Into<String>) -> Self {
        self.transition_message = Some(message.into());
        self
    }

    pub fn with_conditional_message(mut self, value: impl Into<String>, message: impl Into<String>) -> Self {
        self.conditional_messages.insert(value.into(), message.into());
        self
    }

    pub fn with_social_proof(mut self, proof: SocialProof) -> Self {
        self.social_proof = Some(proof);
        self
    }

    pub fn is_single(&self) -> bool {
        self.question_type == QuestionType::Single
    }

    pub fn has_option(&self, value: &str) -> bool {
        self.options.iter().any(|o| o.value == value)
    }

    /// Label for a stored value token, or the token itself when it is unknown.
    pub fn label_for<'a>(&'a self, value: &'a str) -> &'a str {
        self.options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.as_str())
            .unwrap_or(value)
    }
}

/// The ordered question catalog. Position in `questions` is the step index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Quiz {
    questions: Vec<Question>,
}

impl Quiz {
    pub fn new(questions: Vec<Question>) -> AppResult<Self> {
        if questions.is_empty() {
            return Err(AppError::ValidationError("Quiz must have at least one question".to_string()));
        }

        let mut ids = HashSet::new();
        for question in &questions {
            if !ids.insert(question.id) {
                return Err(AppError::ValidationError(format!(
                    "Duplicate question id {}",
                    question.id
                )));
            }
            if question.options.is_empty() {
                return Err(AppError::ValidationError(format!(
                    "Question {} has no options",
                    question.id
                )));
            }
            let mut values = HashSet::new();
            if !question.options.iter().all(|o| values.insert(o.value.as_str())) {
                return Err(AppError::ValidationError(format!(
                    "Question {} has duplicate option values",
                    question.id
                )));
            }
        }

        Ok(Self { questions })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn at_step(&self, step_index: usize) -> Option<&Question> {
        self.questions.get(step_index)
    }

    pub fn find(&self, id: u32) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Single-choice questions hold at most one value. Unknown ids and
    /// tokens are left to the caller.
    pub fn check_single_choice(&self, answers: &AnswerSet) -> AppResult<()> {
        for (question_id, values) in answers.iter() {
            let single = self.find(question_id).is_some_and(Question::is_single);
            if single && values.len() > 1 {
                return Err(AppError::ValidationError(format!(
                    "Question {} accepts a single answer, got {}",
                    question_id,
                    values.len()
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yes_no(id: u32) -> Question {
        Question::new(
            id,
            "Pronta?",
            QuestionType::Single,
            vec![QuestionOption::new("Sim", "sim"), QuestionOption::new("Não", "nao")],
        )
    }

    #[test]
    fn question_type_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&QuestionType::Single).unwrap(), "\"single\"");
        assert_eq!(serde_json::to_string(&QuestionType::Multiple).unwrap(), "\"multiple\"");
    }

    #[test]
    fn label_for_falls_back_to_raw_token() {
        let question = yes_no(1);

        assert_eq!(question.label_for("sim"), "Sim");
        assert_eq!(question.label_for("talvez"), "talvez");
    }

    #[test]
    fn quiz_rejects_duplicate_ids() {
        let result = Quiz::new(vec![yes_no(1), yes_no(1)]);
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn quiz_rejects_questions_without_options() {
        let empty = Question::new(2, "?", QuestionType::Multiple, vec![]);
        assert!(Quiz::new(vec![yes_no(1), empty]).is_err());
    }

    #[test]
    fn quiz_rejects_duplicate_option_values() {
        let question = Question::new(
            1,
            "?",
            QuestionType::Single,
            vec![QuestionOption::new("A", "a"), QuestionOption::new("B", "a")],
        );
        assert!(Quiz::new(vec![question]).is_err());
    }

    #[test]
    fn quiz_lookup_by_step_and_id() {
        let quiz = Quiz::new(vec![yes_no(10), yes_no(20)]).unwrap();

        assert_eq!(quiz.len(), 2);
        assert_eq!(quiz.at_step(1).map(|q| q.id), Some(20));
        assert_eq!(quiz.find(10).map(|q| q.id), Some(10));
        assert!(quiz.at_step(2).is_none());
    }

    #[test]
    fn single_choice_answers_hold_one_value() {
        let multiple = Question::new(
            2,
            "Quais?",
            QuestionType::Multiple,
            vec![QuestionOption::new("A", "a"), QuestionOption::new("B", "b")],
        );
        let quiz = Quiz::new(vec![yes_no(1), multiple]).unwrap();

        assert!(quiz.check_single_choice(&AnswerSet::from([(1, vec!["sim"]), (2, vec!["a", "b"])])).is_ok());
        assert!(quiz.check_single_choice(&AnswerSet::from([(1, vec!["sim", "nao"])])).is_err());
        assert!(quiz.check_single_choice(&AnswerSet::from([(9, vec!["x", "y"])])).is_ok());
    }

    #[test]
    fn empty_optional_fields_are_omitted_from_json() {
        let json = serde_json::to_value(yes_no(1)).unwrap();

        assert!(json.get("subtitle").is_none());
        assert!(json.get("conditional_messages").is_none());
        assert!(json["options"][0].get("image").is_none());
    }
}
