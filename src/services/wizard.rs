use serde::{Deserialize, Serialize};

use crate::{
    errors::{AppError, AppResult},
    models::domain::{AnswerSet, Question, QuestionType, Quiz},
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct WizardState {
    pub step_index: usize,
    pub answers: AnswerSet,
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_finished(&self, quiz: &Quiz) -> bool {
        self.step_index >= quiz.len()
    }

    pub fn current_question<'q>(&self, quiz: &'q Quiz) -> Option<&'q Question> {
        quiz.at_step(self.step_index)
    }

    /// Fraction of the quiz completed, `1.0` once past the last question.
    pub fn progress(&self, quiz: &Quiz) -> f64 {
        if quiz.is_empty() || self.is_finished(quiz) {
            1.0
        } else {
            self.step_index as f64 / quiz.len() as f64
        }
    }

    /// Records `selection` for the current question and moves one step forward.
    /// Returns `None`, leaving the state untouched, when the move is not allowed.
    pub fn advance(&self, quiz: &Quiz, question_id: u32, selection: &[String]) -> Option<Self> {
        let question = self.current_question(quiz)?;
        if question.id != question_id || !is_valid_answer(question, selection) {
            return None;
        }

        let mut answers = self.answers.clone();
        answers.record(question_id, selection.to_vec());
        Some(Self {
            step_index: self.step_index + 1,
            answers,
        })
    }

    /// Moves one step back. Recorded answers are kept.
    pub fn retreat(&self) -> Option<Self> {
        if self.step_index == 0 {
            return None;
        }
        Some(Self {
            step_index: self.step_index - 1,
            answers: self.answers.clone(),
        })
    }

    /// Checks a state that came back from a client. Answers must cover a
    /// prefix of the catalog, since a question is only answered by advancing
    /// past it, and the step pointer cannot skip past that prefix. Every
    /// recorded answer must also be one `advance` would have accepted.
    pub fn validate(&self, quiz: &Quiz) -> AppResult<()> {
        if self.step_index > quiz.len() {
            return Err(AppError::ValidationError(format!(
                "step_index {} is past the end of the quiz",
                self.step_index
            )));
        }

        let answered = quiz
            .questions()
            .iter()
            .take_while(|q| self.answers.contains(q.id))
            .count();
        if self.answers.len() > answered {
            return Err(AppError::ValidationError(
                "Answers recorded for questions that were never reached".to_string(),
            ));
        }
        if self.step_index > answered {
            return Err(AppError::ValidationError(format!(
                "step_index {} skips unanswered questions",
                self.step_index
            )));
        }

        for (question_id, values) in self.answers.iter() {
            let valid = quiz
                .find(question_id)
                .is_some_and(|question| is_valid_answer(question, values));
            if !valid {
                return Err(AppError::ValidationError(format!(
                    "Invalid answer recorded for question {}",
                    question_id
                )));
            }
        }

        Ok(())
    }

    /// Selection a step starts with: whatever was recorded for it before.
    pub fn initial_selection(&self, quiz: &Quiz) -> Vec<String> {
        self.current_question(quiz)
            .map(|q| self.answers.get(q.id).to_vec())
            .unwrap_or_default()
    }
}

fn is_valid_answer(question: &Question, selection: &[String]) -> bool {
    if selection.is_empty() {
        return false;
    }
    if question.question_type == QuestionType::Single && selection.len() > 1 {
        return false;
    }
    selection.iter().all(|value| question.has_option(value))
}

/// Single choice replaces the selection, multiple choice toggles `value`.
/// Values that are not options of `question` are ignored.
pub fn select_option(question: &Question, selection: &[String], value: &str) -> Vec<String> {
    if !question.has_option(value) {
        return selection.to_vec();
    }

    match question.question_type {
        QuestionType::Single => vec![value.to_string()],
        QuestionType::Multiple => {
            if selection.iter().any(|v| v == value) {
                selection.iter().filter(|v| *v != value).cloned().collect()
            } else {
                let mut next = selection.to_vec();
                next.push(value.to_string());
                next
            }
        }
    }
}

/// Messages the current step shows after a selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StepFeedback {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditional_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition_message: Option<String>,
    pub show_social_proof: bool,
}

impl StepFeedback {
    /// Feedback for a step nobody has touched yet.
    pub fn idle(question: &Question) -> Self {
        Self {
            conditional_message: None,
            transition_message: None,
            show_social_proof: question.social_proof.is_some(),
        }
    }

    pub fn after_selection(question: &Question, selection: &[String], value: &str) -> Self {
        let transition_message = question
            .transition_message
            .clone()
            .filter(|_| !selection.is_empty());

        // The transition message replaces both the conditional message and the social proof card.
        let conditional_message = if transition_message.is_none() && question.is_single() {
            question.conditional_messages.get(value).cloned()
        } else {
            None
        };

        Self {
            conditional_message,
            show_social_proof: question.social_proof.is_some() && transition_message.is_none(),
            transition_message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WizardAction {
    SelectOption { question_id: u32, value: String },
    Advance { question_id: u32 },
    Retreat,
}

/// Wizard state plus the selection being built for the current step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct WizardStep {
    pub state: WizardState,
    #[serde(default)]
    pub selection: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub step: WizardStep,
    pub accepted: bool,
    pub feedback: Option<StepFeedback>,
}

impl Transition {
    fn rejected(step: WizardStep) -> Self {
        Self {
            step,
            accepted: false,
            feedback: None,
        }
    }

    fn moved(state: WizardState, quiz: &Quiz) -> Self {
        let selection = state.initial_selection(quiz);
        let feedback = state.current_question(quiz).map(StepFeedback::idle);
        Self {
            step: WizardStep { state, selection },
            accepted: true,
            feedback,
        }
    }
}

pub fn reduce(quiz: &Quiz, step: WizardStep, action: &WizardAction) -> Transition {
    match action {
        WizardAction::SelectOption { question_id, value } => {
            let Some(question) = step.state.current_question(quiz).filter(|q| q.id == *question_id) else {
                return Transition::rejected(step);
            };
            if !question.has_option(value) {
                return Transition::rejected(step);
            }

            let selection = select_option(question, &step.selection, value);
            let feedback = StepFeedback::after_selection(question, &selection, value);
            Transition {
                step: WizardStep {
                    state: step.state,
                    selection,
                },
                accepted: true,
                feedback: Some(feedback),
            }
        }
        WizardAction::Advance { question_id } => {
            match step.state.advance(quiz, *question_id, &step.selection) {
                Some(state) => Transition::moved(state, quiz),
                None => Transition::rejected(step),
            }
        }
        WizardAction::Retreat => match step.state.retreat() {
            Some(state) => Transition::moved(state, quiz),
            None => Transition::rejected(step),
        },
    }
}
