pub mod bank_merger;
pub mod bank_writer;
pub mod categorizer;
pub mod duplicate_detector;
pub mod validator;

pub use bank_merger::{BankMerger, MergeOutcome};
pub use bank_writer::BankWriter;
pub use categorizer::Categorizer;
pub use duplicate_detector::{
    find_in_file_duplicates, normalize_question_text, Duplicate, DuplicateDetector,
    InFileDuplicate,
};
pub use validator::{validate_question, Violation};
