//! Input handling: file loading, type sniffing, and text extraction

pub mod file_detector;
pub mod manager;
pub mod text_extractor;
