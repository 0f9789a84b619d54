use crate::models::domain::{Question, QuestionOption, QuestionType, SocialProof};

/// Id of the age-range question; its answer drives the personal story prompt.
pub const AGE_QUESTION_ID: u32 = 2;
pub const AGE_RANGES_OVER_40: [&str; 4] = ["35-44", "45-54", "55-64", "65+"];

pub const MULTIPLE_CHOICE_HINT: &str = "(Selecione uma ou mais opções)";

fn proof(name: &str, result: &str, description: &str) -> SocialProof {
    SocialProof {
        name: name.to_string(),
        result: result.to_string(),
        description: description.to_string(),
        before_image: None,
        after_image: None,
    }
}

fn body_part(label: &str, value: &str, image_text: &str) -> QuestionOption {
    QuestionOption::new(label, value).with_image(format!(
        "https://placehold.co/200x200/ecfdf5/065f46?text={}&font=montserrat",
        image_text
    ))
}

pub fn quiz_questions() -> Vec<Question> {
    vec![
        Question::new(
            1,
            "Quais são seus maiores desafios para emagrecer hoje? 🤔",
            QuestionType::Multiple,
            vec![
                QuestionOption::new("Efeito sanfona (emagreço e volto a engordar) ⚖️", "sanfona"),
                QuestionOption::new("Ansiedade, fome emocional e compulsão 🤯", "ansiedade_compulsao"),
                QuestionOption::new("Metabolismo lento (tireoide, menopausa) 🐢", "metabolismo"),
                QuestionOption::new("Inchaço, retenção de líquidos e inflamação 💧", "inchaco_inflamacao"),
                QuestionOption::new("Falta de consistência para seguir um plano ⏳", "consistencia"),
                QuestionOption::new("Tenho lipedema", "lipedema"),
            ],
        )
        .with_subtitle(MULTIPLE_CHOICE_HINT)
        .with_transition_message(
            "Entendido. Esses são desafios comuns, mas acredite, existe um caminho natural para superá-los. Vamos continuar.",
        )
        .with_social_proof(proof(
            "Ana Fátima",
            "– 64 kg",
            "“Mesmo com hipotireoidismo, Ana Fátima eliminou 64 kg com o Método Japonês.”",
        )),
        Question::new(
            AGE_QUESTION_ID,
            "Qual é a sua faixa etária? 🎂",
            QuestionType::Single,
            vec![
                QuestionOption::new("20 a 34 anos", "20-34"),
                QuestionOption::new("35 a 44 anos", "35-44"),
                QuestionOption::new("45 a 54 anos", "45-54"),
                QuestionOption::new("55 a 64 anos", "55-64"),
                QuestionOption::new("65 anos ou mais", "65+"),
            ],
        ),
        Question::new(
            3,
            "Você já tentou alguma solução antes? 💊",
            QuestionType::Multiple,
            vec![
                QuestionOption::new("Medicamentos (ex: Ozempic, Monjaro)", "medicamentos"),
                QuestionOption::new("Dietas restritivas (low-carb, jejum) 🥗", "dietas"),
                QuestionOption::new("Exercícios intensos 🏋️‍♀️", "exercicios"),
                QuestionOption::new("Cirurgias bariátricas 🏥", "bariatrica"),
            ],
        )
        .with_subtitle(MULTIPLE_CHOICE_HINT)
        .with_conditional_message(
            "medicamentos",
            "Entendo — muitas relatam resultados rápidos com remédio, mas sem estabilidade. Vamos ver o que seu corpo realmente precisa.",
        )
        .with_social_proof(proof(
            "Bruna Brito",
            "– 13 kg",
            "“Bruna tentava de tudo — exercícios e dieta — sem resultado. Com o Monjaro Japonês, venceu o lipedema e eliminou 13 kg.”",
        )),
        Question::new(
            4,
            "Qual seu objetivo principal? 🏆",
            QuestionType::Multiple,
            vec![
                QuestionOption::new("Eliminar gordura abdominal 🎯", "gordura_abdominal"),
                QuestionOption::new("Controlar fome e compulsão alimentar 🧠", "fome_compulsao"),
                QuestionOption::new(
                    "Desinflamar e reduzir retenção de líquidos (inclusive nas pernas) 💧",
                    "desinflamar_retencao",
                ),
                QuestionOption::new("Manter os resultados com equilíbrio e leveza ✨", "manter_resultados"),
            ],
        )
        .with_subtitle(MULTIPLE_CHOICE_HINT)
        .with_social_proof(proof("Laís Moreira", "– 22 kg", "“Se eu consegui, vc tbm consegue 😉”")),
        Question::new(
            5,
            "Em que partes do seu corpo você deseja se concentrar?",
            QuestionType::Multiple,
            vec![
                body_part("Pernas", "pernas", "Pernas"),
                body_part("Barriga", "barriga", "Barriga"),
                body_part("Braços", "bracos", "Bra%C3%A7os"),
            ],
        )
        .with_subtitle(MULTIPLE_CHOICE_HINT),
        Question::new(
            6,
            "O Monjaro farmacêutico trata o sintoma. O Monjaro Japonês trata a causa. Resultado real: saciedade natural, menos compulsão e menos inchaço. Está pronta para a mudança que realmente funciona?",
            QuestionType::Single,
            vec![
                QuestionOption::new("Sim, estou pronta para a mudança! ✅", "sim_pronta"),
                QuestionOption::new("Quero saber mais sobre a causa 🤔", "saber_mais"),
                QuestionOption::new("Ainda não tenho certeza 🤷‍♀️", "nao_tenho_certeza"),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::Quiz;

    #[test]
    fn catalog_is_a_valid_quiz() {
        let quiz = Quiz::new(quiz_questions()).unwrap();

        assert_eq!(quiz.len(), 6);
        let ids: Vec<u32> = quiz.questions().iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn age_question_covers_over_40_ranges() {
        let quiz = Quiz::new(quiz_questions()).unwrap();
        let age = quiz.find(AGE_QUESTION_ID).unwrap();

        assert!(age.is_single());
        assert!(AGE_RANGES_OVER_40.iter().all(|range| age.has_option(range)));
    }

    #[test]
    fn conditional_messages_reference_existing_options() {
        for question in quiz_questions() {
            for value in question.conditional_messages.keys() {
                assert!(question.has_option(value), "question {} / {}", question.id, value);
            }
        }
    }
}
