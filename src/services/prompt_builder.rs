use crate::{
    clients::{GenerationRequest, Turn},
    config::CtaLinks,
    constants::{
        prompts::{ANALYSIS_PROMPT, CHAT_INSTRUCTION, PERSONAL_STORY_INSTRUCTION, PRIOR_ANALYSIS_HEADER},
        quiz_data::{AGE_QUESTION_ID, AGE_RANGES_OVER_40},
    },
    models::domain::{AnswerSet, Conversation, Quiz, Role},
    services::persona::Persona,
};

/// One line per answered question, in catalog order. Unanswered questions are
/// skipped and unknown tokens are kept verbatim.
pub fn summarize_answers(quiz: &Quiz, answers: &AnswerSet) -> String {
    quiz.questions()
        .iter()
        .filter_map(|question| {
            let values = answers.get(question.id);
            if values.is_empty() {
                return None;
            }

            let labels = values
                .iter()
                .map(|value| question.label_for(value))
                .collect::<Vec<_>>()
                .join(", ");

            Some(format!("- Pergunta \"{}\": Resposta: \"{}\"", question.text, labels))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn is_over_40(answers: &AnswerSet) -> bool {
    answers
        .first(AGE_QUESTION_ID)
        .is_some_and(|age| AGE_RANGES_OVER_40.contains(&age))
}

pub fn build_analysis_request(quiz: &Quiz, answers: &AnswerSet, persona: Persona) -> GenerationRequest {
    let personal_story = if is_over_40(answers) {
        PERSONAL_STORY_INSTRUCTION
    } else {
        ""
    };

    // The summary carries raw answer tokens, so it goes in last.
    let prompt = ANALYSIS_PROMPT
        .replace("{{AUDIENCE}}", persona.audience())
        .replace("{{TOGETHER}}", persona.together())
        .replace("{{PERSONAL_STORY}}", personal_story)
        .replace("{{SUMMARY}}", &summarize_answers(quiz, answers));

    GenerationRequest {
        system_instruction: Some(persona.instruction().to_string()),
        turns: vec![Turn::user(prompt)],
    }
}

/// Leading assistant messages (the analysis the chat was seeded with) go into
/// the system instruction, since upstream contents must open with a user turn.
pub fn build_chat_request(conversation: &Conversation, persona: Persona, links: &CtaLinks) -> GenerationRequest {
    let messages = conversation.messages();
    let opening = messages
        .iter()
        .take_while(|m| m.role == Role::Assistant)
        .count();

    let mut instruction = format!(
        "{}\n\n{}",
        persona.instruction(),
        CHAT_INSTRUCTION
            .replace("{{AUDIENCE}}", persona.audience())
            .replace("{{PAYMENT_URL}}", &links.payment_url)
            .replace("{{WHATSAPP_URL}}", &links.whatsapp_url)
    );

    if opening > 0 {
        instruction.push_str("\n\n");
        instruction.push_str(PRIOR_ANALYSIS_HEADER);
        for message in &messages[..opening] {
            instruction.push('\n');
            instruction.push_str(&message.text);
        }
    }

    let turns = messages[opening..]
        .iter()
        .map(|message| match message.role {
            Role::User => Turn::user(message.text.clone()),
            Role::Assistant => Turn::model(message.text.clone()),
        })
        .collect();

    GenerationRequest {
        system_instruction: Some(instruction),
        turns,
    }
}
