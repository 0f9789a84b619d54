use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Question id to the value tokens chosen for it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<u32, Vec<String>>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, question_id: u32) -> &[String] {
        self.0.get(&question_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn first(&self, question_id: u32) -> Option<&str> {
        self.get(question_id).first().map(String::as_str)
    }

    pub fn record(&mut self, question_id: u32, values: Vec<String>) {
        self.0.insert(question_id, values);
    }

    pub fn contains(&self, question_id: u32) -> bool {
        self.0.contains_key(&question_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &[String])> {
        self.0.iter().map(|(id, values)| (*id, values.as_slice()))
    }
}

impl<const N: usize> From<[(u32, Vec<&str>); N]> for AnswerSet {
    fn from(entries: [(u32, Vec<&str>); N]) -> Self {
        Self(
            entries
                .into_iter()
                .map(|(id, values)| (id, values.into_iter().map(str::to_string).collect()))
                .collect(),
        )
    }
}
