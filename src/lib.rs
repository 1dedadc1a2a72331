pub mod checker;
pub mod reader;
pub mod report;

// Re-export main types for convenient access
pub use checker::{
    is_pangram, CaseMode, CharacterFilter, PangramChecker, PangramReport, PangramRules,
    WhitespacePolicy,
};

pub use reader::{read_sentences_async, ReadStats, ReaderConfig, SentenceReader};
pub use report::{check_all, write_json_lines, write_summary, RunSummary, SentenceResult};
