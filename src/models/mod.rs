pub mod bank;
pub mod loaders;
pub mod question;
pub mod taxonomy;

pub use bank::{Category, QuestionBank};
pub use loaders::{load_bank, load_question_file};
pub use question::{AcceptedQuestion, Question, RawRecord};
pub use taxonomy::{CategoryTemplate, KeywordRule, PrefixRule, Taxonomy};
