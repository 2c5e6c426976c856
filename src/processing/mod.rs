//! Resume scoring pipeline

pub mod analyzer;
pub mod document;
pub mod metadata;
pub mod scorer;
pub mod similarity;
pub mod skills;
pub mod text_processor;
