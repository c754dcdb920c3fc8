use super::{escape_latex, Renderer};
use crate::core::ast::{Block, DocumentAst};
use crate::translate::Translator;
use crate::Result;
use std::collections::HashMap;

/// Placed in every figure environment instead of the image itself.
pub const IMAGE_OMITTED_COMMENT: &str = "% Image omitted: only the caption is preserved";

const PACKAGES: &[&str] = &["graphicx", "amsmath", "hyperref", "listings", "xcolor"];

/// Renders a block sequence as a complete LaTeX document.
///
/// Free text of each block goes through the translator and then through
/// [`escape_latex`], once. Code listings are emitted verbatim and reference
/// entries are escaped but not translated.
pub struct LatexRenderer<'t> {
    translator: &'t Translator,
    target_lang: String,
    code_language: String,
}

impl<'t> LatexRenderer<'t> {
    pub fn new(translator: &'t Translator) -> Self {
        Self {
            translator,
            target_lang: "zh-CN".to_string(),
            code_language: "Python".to_string(),
        }
    }

    /// Target language of the output; selects the font setup in the preamble.
    pub fn with_target_lang(mut self, lang: impl Into<String>) -> Self {
        self.target_lang = lang.into();
        self
    }

    pub fn with_code_language(mut self, language: impl Into<String>) -> Self {
        self.code_language = language.into();
        self
    }

    fn text(&self, raw: &str) -> String {
        escape_latex(&self.translator.translate(raw))
    }

    fn preamble(&self) -> String {
        let mut out = String::from("\\documentclass[12pt,a4paper]{article}\n");
        if self.target_lang.to_ascii_lowercase().starts_with("zh") {
            out.push_str("\\usepackage[UTF8]{ctex}\n");
        } else {
            out.push_str("\\usepackage[utf8]{inputenc}\n");
        }
        for package in PACKAGES {
            out.push_str(&format!("\\usepackage{{{package}}}\n"));
        }
        out.push_str("\\begin{document}\n\n");
        out
    }

    /// Rendered fragments in output order: preamble, one per block,
    /// postamble.
    pub fn fragments(&self, document: &DocumentAst) -> Vec<String> {
        let mut fragments = Vec::with_capacity(document.len() + 2);
        fragments.push(self.preamble());

        let mut figure_labels: HashMap<u32, usize> = HashMap::new();
        let mut blocks = document.iter().peekable();

        while let Some(block) = blocks.next() {
            let fragment = match block {
                Block::Title { text } => {
                    let mut out = format!("\\title{{{}}}\n", self.text(text));
                    if !matches!(blocks.peek(), Some(Block::AuthorList { .. })) {
                        out.push_str("\\maketitle\n\n");
                    }
                    out
                }
                Block::AuthorList { names } => format!(
                    "\\author{{{}}}\n\\maketitle\n\n",
                    self.text(&names.join(", "))
                ),
                Block::Abstract { text } => format!(
                    "\\begin{{abstract}}\n{}\n\\end{{abstract}}\n\n",
                    self.text(text)
                ),
                Block::Heading { level, text } => {
                    format!("\\{}{{{}}}\n\n", level.command(), self.text(text))
                }
                Block::Figure { number, caption } => {
                    let seen = figure_labels.entry(*number).or_insert(0);
                    *seen += 1;
                    let label = if *seen == 1 {
                        format!("fig:{number}")
                    } else {
                        format!("fig:{number}-{seen}")
                    };

                    let mut out = String::from("\\begin{figure}[h]\n\\centering\n");
                    out.push_str(IMAGE_OMITTED_COMMENT);
                    out.push('\n');
                    if !caption.is_empty() {
                        out.push_str(&format!("\\caption{{{}}}\n", self.text(caption)));
                    }
                    out.push_str(&format!("\\label{{{label}}}\n\\end{{figure}}\n\n"));
                    out
                }
                Block::CodeBlock { lines } => {
                    let mut out = format!("\\begin{{lstlisting}}[language={}]\n", self.code_language);
                    for line in lines {
                        out.push_str(line);
                        out.push('\n');
                    }
                    out.push_str("\\end{lstlisting}\n\n");
                    out
                }
                Block::BibliographyStart => "\\begin{thebibliography}{99}\n".to_string(),
                Block::ReferenceEntry { number, text } => {
                    format!("\\bibitem{{{number}}}\n{}\n\n", escape_latex(text))
                }
                Block::BibliographyEnd => "\\end{thebibliography}\n\n".to_string(),
                Block::Paragraph { text } => format!("{}\n\n", self.text(text)),
            };
            fragments.push(fragment);
        }

        fragments.push("\\end{document}\n".to_string());
        fragments
    }
}

impl Renderer for LatexRenderer<'_> {
    fn render(&self, document: &DocumentAst) -> Result<String> {
        Ok(self.fragments(document).concat())
    }
}
