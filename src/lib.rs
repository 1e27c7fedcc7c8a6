pub mod analyzer;
pub mod error;
pub mod mecab_output;
pub mod sentence_splitter;
