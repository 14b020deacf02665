pub mod prompt;
pub mod questions;

pub use prompt::{run_questionnaire, run_questionnaire_stdio};
pub use questions::{parse_answer, Answer, Question, QuestionKey, QUESTIONS};
