use serde::Serialize;

use crate::{
    config::CtaLinks,
    models::domain::{AnswerSet, Question, Quiz},
    services::{
        render::{render_sections, Section},
        wizard::{StepFeedback, Transition, WizardState},
    },
};

#[derive(Debug, Clone, Serialize)]
pub struct GenerateResponse {
    pub analysis: String,
    pub sections: Vec<Section>,
}

impl From<String> for GenerateResponse {
    fn from(analysis: String) -> Self {
        let sections = render_sections(&analysis);
        Self { analysis, sections }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub reply: String,
    pub sections: Vec<Section>,
}

impl From<String> for ChatResponse {
    fn from(reply: String) -> Self {
        let sections = render_sections(&reply);
        Self { reply, sections }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizCatalogResponse {
    pub questions: Vec<Question>,
    pub total: usize,
    pub links: CtaLinks,
}

impl QuizCatalogResponse {
    pub fn new(quiz: &Quiz, links: CtaLinks) -> Self {
        Self {
            questions: quiz.questions().to_vec(),
            total: quiz.len(),
            links,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WizardTransitionResponse {
    pub state: WizardState,
    pub selection: Vec<String>,
    pub accepted: bool,
    pub progress: f64,
    pub finished: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<Question>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<StepFeedback>,
    /// Set once the quiz is finished, ready to post to `/api/generate`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answers: Option<AnswerSet>,
}

impl WizardTransitionResponse {
    pub fn new(transition: Transition, quiz: &Quiz) -> Self {
        let state = transition.step.state;
        let finished = state.is_finished(quiz);

        Self {
            progress: state.progress(quiz),
            question: state.current_question(quiz).cloned(),
            answers: finished.then(|| state.answers.clone()),
            selection: transition.step.selection,
            accepted: transition.accepted,
            finished,
            feedback: transition.feedback,
            state,
        }
    }
}
