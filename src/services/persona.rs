use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::constants::prompts::{FEMININE_PERSONA, MASCULINE_PERSONA};

static MALE_NAMES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "adriano", "alexandre", "anderson", "andré", "andre", "antonio", "antônio", "arthur",
        "bernardo", "bruno", "caio", "carlos", "cesar", "césar", "cláudio", "claudio", "daniel",
        "davi", "david", "diego", "douglas", "eduardo", "enzo", "fabio", "fábio", "felipe",
        "fernando", "francisco", "gabriel", "guilherme", "gustavo", "heitor", "henrique", "hugo",
        "igor", "jorge", "josé", "jose", "joão", "joao", "júlio", "julio", "leandro", "leonardo",
        "lucas", "luiz", "luis", "luís", "marcelo", "marcio", "márcio", "marco", "marcos",
        "mateus", "matheus", "miguel", "murilo", "nelson", "otávio", "otavio", "paulo", "pedro",
        "rafael", "renato", "ricardo", "roberto", "rodrigo", "samuel", "sergio", "sérgio",
        "thiago", "tiago", "vinicius", "vinícius", "vitor", "victor", "wagner", "wellington",
    ]
    .into_iter()
    .collect()
});

/// Voice used for the generated text. Chosen from the first name only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Persona {
    Feminine,
    Masculine,
}

impl Persona {
    /// Names absent from the male list, and no name at all, get the feminine voice.
    pub fn from_name(name: Option<&str>) -> Self {
        let first = name
            .and_then(|n| n.split_whitespace().next())
            .map(str::to_lowercase);

        match first {
            Some(first) if MALE_NAMES.contains(first.as_str()) => Persona::Masculine,
            _ => Persona::Feminine,
        }
    }

    pub fn instruction(&self) -> &'static str {
        match self {
            Persona::Feminine => FEMININE_PERSONA,
            Persona::Masculine => MASCULINE_PERSONA,
        }
    }

    pub fn audience(&self) -> &'static str {
        match self {
            Persona::Feminine => "usuária",
            Persona::Masculine => "usuário",
        }
    }

    pub fn together(&self) -> &'static str {
        match self {
            Persona::Feminine => "juntas",
            Persona::Masculine => "juntos",
        }
    }
}
