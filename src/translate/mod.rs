//! Best-effort translation of block text.
//!
//! The actual translation service is a pluggable [`TranslationBackend`].
//! [`Translator`] wraps it with the degrade path the converter relies on:
//! backend call, then static lexicon, then passthrough. It never returns an
//! error; failed calls keep the original text and are logged as warnings.

mod chunk;
#[cfg(feature = "online")]
mod google;
mod lexicon;

use crate::Result;
use std::time::Duration;

pub use self::chunk::split_into_chunks;
#[cfg(feature = "online")]
pub use self::google::{GoogleTranslateBackend, DEFAULT_ENDPOINT};
pub use self::lexicon::Lexicon;

/// External capability that translates text between two languages.
pub trait TranslationBackend: Send + Sync {
    /// Translates `text` from `source` into `target` (language codes such as
    /// `en` or `zh-CN`).
    fn translate(&self, text: &str, source: &str, target: &str) -> Result<String>;
}

impl<F> TranslationBackend for F
where
    F: Fn(&str, &str, &str) -> Result<String> + Send + Sync,
{
    fn translate(&self, text: &str, source: &str, target: &str) -> Result<String> {
        self(text, source, target)
    }
}

/// Length limits and throttling for backend calls. Lengths are in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkOptions {
    /// Texts up to this length go to the backend in a single call.
    pub direct_limit: usize,
    /// Maximum chunk length for longer texts.
    pub chunk_limit: usize,
    /// Pause between consecutive chunk calls.
    pub chunk_delay: Duration,
}

impl Default for ChunkOptions {
    fn default() -> Self {
        Self {
            direct_limit: 5000,
            chunk_limit: 4500,
            chunk_delay: Duration::from_millis(100),
        }
    }
}

pub struct Translator {
    backend: Option<Box<dyn TranslationBackend>>,
    lexicon: Lexicon,
    source_lang: String,
    target_lang: String,
    chunking: ChunkOptions,
}

impl Translator {
    /// Creates a translator without backend; it falls back to the keyword
    /// lexicon of the language pair.
    pub fn new(source_lang: impl Into<String>, target_lang: impl Into<String>) -> Self {
        let source_lang = source_lang.into();
        let target_lang = target_lang.into();
        Self {
            backend: None,
            lexicon: Lexicon::for_pair(&source_lang, &target_lang),
            source_lang,
            target_lang,
            chunking: ChunkOptions::default(),
        }
    }

    /// Identity translator.
    pub fn passthrough() -> Self {
        Self {
            backend: None,
            lexicon: Lexicon::default(),
            source_lang: String::new(),
            target_lang: String::new(),
            chunking: ChunkOptions::default(),
        }
    }

    pub fn with_backend<B: TranslationBackend + 'static>(self, backend: B) -> Self {
        self.with_boxed_backend(Box::new(backend))
    }

    pub fn with_boxed_backend(mut self, backend: Box<dyn TranslationBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    pub fn with_chunking(mut self, chunking: ChunkOptions) -> Self {
        self.chunking = chunking;
        self
    }

    pub fn has_backend(&self) -> bool {
        self.backend.is_some()
    }

    pub fn target_lang(&self) -> &str {
        &self.target_lang
    }

    /// Translates `text`, degrading to usable output on every failure path.
    pub fn translate(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return text.to_string();
        }

        let Some(backend) = self.backend.as_deref() else {
            return self.lexicon.apply(text);
        };

        if text.chars().count() <= self.chunking.direct_limit {
            return self.call(backend, text);
        }

        let chunks = split_into_chunks(text, self.chunking.chunk_limit);
        log::debug!(
            "translating {} characters in {} chunks",
            text.chars().count(),
            chunks.len()
        );

        let mut translated = Vec::with_capacity(chunks.len());
        for (i, chunk) in chunks.iter().enumerate() {
            if i > 0 && !self.chunking.chunk_delay.is_zero() {
                std::thread::sleep(self.chunking.chunk_delay);
            }
            translated.push(self.call(backend, chunk));
        }
        translated.join(" ")
    }

    fn call(&self, backend: &dyn TranslationBackend, text: &str) -> String {
        match backend.translate(text, &self.source_lang, &self.target_lang) {
            Ok(translated) => translated,
            Err(e) => {
                log::warn!("Translation failed, keeping original text: {}", e);
                text.to_string()
            }
        }
    }
}
