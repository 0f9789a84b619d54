pub mod generation_service;
pub mod persona;
pub mod prompt_builder;
pub mod render;
pub mod retry;
pub mod wizard;

pub use generation_service::{GenerationError, GenerationService};
pub use retry::{retry_with_backoff, RetryPolicy};
pub use wizard::{reduce, WizardAction, WizardState, WizardStep};
