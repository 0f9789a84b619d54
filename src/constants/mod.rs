pub mod prompts;
pub mod quiz_data;
