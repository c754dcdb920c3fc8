//! # txt2latex
//!
//! Converts the plain-text transcription of a scholarly PDF into a translated
//! LaTeX document, keeping title, authors, abstract, sections, figure
//! captions, code listings and the bibliography.
//!
//! ## Example
//!
//! ```no_run
//! use txt2latex::{ConvertOptions, TextToLatex, TranslationMode};
//!
//! let options = ConvertOptions {
//!     translation: TranslationMode::Offline,
//!     ..Default::default()
//! };
//!
//! let converter = TextToLatex::new(options);
//! let latex = converter.convert("paper.txt").unwrap();
//! std::fs::write("paper.tex", latex).unwrap();
//! ```

pub mod converter;
pub mod core;
pub mod error;
pub mod render;
pub mod segmenter;
pub mod translate;

pub use crate::core::ast::{Block, BlockNode, DocumentAst, HeadingLevel, Line};
pub use converter::TextToLatex;
pub use error::{Error, Result};
pub use render::{escape_latex, LatexRenderer, Renderer};
pub use segmenter::{PatternConfig, PatternSet, Segmenter};
pub use translate::{split_into_chunks, ChunkOptions, TranslationBackend, Translator};

use std::time::Duration;

/// Options for text to LaTeX conversion.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Language of the extracted text.
    pub source_lang: String,
    /// Language of the generated document.
    pub target_lang: String,
    /// Where translations come from.
    pub translation: TranslationMode,
    /// Request timeout of the online backend; expiry counts as a failed call.
    pub timeout: Duration,
    /// Length limits and pacing of backend calls.
    pub chunking: ChunkOptions,
    /// Block classification patterns.
    pub patterns: PatternConfig,
    /// `lstlisting` language of code blocks.
    pub code_language: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            source_lang: "en".to_string(),
            target_lang: "zh-CN".to_string(),
            translation: TranslationMode::Online,
            timeout: Duration::from_secs(10),
            chunking: ChunkOptions::default(),
            patterns: PatternConfig::default(),
            code_language: "Python".to_string(),
        }
    }
}

/// Specifies how block text is translated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationMode {
    /// Online backend, falling back to the keyword lexicon when it cannot be
    /// set up.
    Online,
    /// Built-in keyword lexicon only.
    Offline,
    /// Leave text untranslated.
    Disabled,
}
