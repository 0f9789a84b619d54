pub mod answer_set;
pub mod conversation;
pub mod question;
pub use answer_set::AnswerSet;
pub use conversation::{Conversation, ConversationMessage, Role};
pub use question::{Question, QuestionOption, QuestionType, Quiz, SocialProof};
