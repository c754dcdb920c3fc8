//! Conversion pipeline: source text → blocks → LaTeX.

use crate::core::ast::DocumentAst;
use crate::error::Error;
use crate::render::{LatexRenderer, Renderer};
use crate::segmenter::{PatternSet, Segmenter};
use crate::translate::{TranslationBackend, Translator};
use crate::{ConvertOptions, Result, TranslationMode};
use std::io;
use std::path::Path;
use std::time::Duration;

/// Main converter struct that orchestrates text to LaTeX conversion.
pub struct TextToLatex {
    options: ConvertOptions,
    translator: Translator,
}

impl TextToLatex {
    /// Creates a new converter with the given options.
    pub fn new(options: ConvertOptions) -> Self {
        let translator = build_translator(&options);
        Self {
            options,
            translator,
        }
    }

    /// Creates a new converter with default options.
    pub fn with_defaults() -> Self {
        Self::new(ConvertOptions::default())
    }

    /// Replaces the translator derived from the options.
    pub fn with_translator(mut self, translator: Translator) -> Self {
        self.translator = translator;
        self
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Converts a UTF-8 text file to LaTeX.
    ///
    /// # Arguments
    /// * `path` - Path to the extracted text file
    ///
    /// # Returns
    /// The complete LaTeX document as a String.
    pub fn convert<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::MissingInput(path.to_path_buf()),
            _ => Error::Io(e),
        })?;
        log::debug!("read {} bytes from {}", text.len(), path.display());
        self.convert_str(&text)
    }

    /// Converts already loaded text to LaTeX.
    pub fn convert_str(&self, text: &str) -> Result<String> {
        let document = self.segment(text)?;
        LatexRenderer::new(&self.translator)
            .with_target_lang(self.options.target_lang.as_str())
            .with_code_language(self.options.code_language.as_str())
            .render(&document)
    }

    /// Runs only the segmentation stage.
    pub fn segment(&self, text: &str) -> Result<DocumentAst> {
        let patterns = PatternSet::compile(&self.options.patterns)?;
        Ok(Segmenter::new(patterns).segment(text))
    }
}

fn build_translator(options: &ConvertOptions) -> Translator {
    let translator = Translator::new(options.source_lang.as_str(), options.target_lang.as_str())
        .with_chunking(options.chunking);

    match options.translation {
        TranslationMode::Disabled => Translator::passthrough(),
        TranslationMode::Offline => translator,
        TranslationMode::Online => match online_backend(options.timeout) {
            Some(backend) => translator.with_boxed_backend(backend),
            None => translator,
        },
    }
}

#[cfg(feature = "online")]
fn online_backend(timeout: Duration) -> Option<Box<dyn TranslationBackend>> {
    match crate::translate::GoogleTranslateBackend::new(timeout) {
        Ok(backend) => Some(Box::new(backend)),
        Err(e) => {
            log::warn!("Online translation unavailable, using keyword lexicon: {}", e);
            None
        }
    }
}

#[cfg(not(feature = "online"))]
fn online_backend(_timeout: Duration) -> Option<Box<dyn TranslationBackend>> {
    log::warn!("Built without the `online` feature, using keyword lexicon");
    None
}
