use std::ops::Range;

/// One line of source text, addressed by its 0-based position in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub index: usize,
    pub text: &'a str,
}

impl<'a> Line<'a> {
    pub fn trimmed(&self) -> &'a str {
        self.text.trim()
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Splits raw text into indexed lines. `\r\n` endings are accepted.
pub fn split_lines(text: &str) -> Vec<Line<'_>> {
    text.lines()
        .enumerate()
        .map(|(index, text)| Line { index, text })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    Section,
    Subsection,
    Subsubsection,
}

impl HeadingLevel {
    /// LaTeX sectioning command for this level.
    pub fn command(self) -> &'static str {
        match self {
            HeadingLevel::Section => "section",
            HeadingLevel::Subsection => "subsection",
            HeadingLevel::Subsubsection => "subsubsection",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Title { text: String },
    AuthorList { names: Vec<String> },
    Abstract { text: String },
    Heading { level: HeadingLevel, text: String },
    Figure { number: u32, caption: String },
    CodeBlock { lines: Vec<String> },
    ReferenceEntry { number: u32, text: String },
    Paragraph { text: String },
    BibliographyStart,
    BibliographyEnd,
}

/// A block together with the half-open range of line indexes it consumed.
///
/// Structural markers (`BibliographyStart`, `BibliographyEnd`) carry an
/// empty span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockNode {
    pub block: Block,
    pub span: Range<usize>,
}

impl BlockNode {
    pub fn new(block: Block, span: Range<usize>) -> Self {
        Self { block, span }
    }

    pub fn marker(block: Block, at: usize) -> Self {
        Self {
            block,
            span: at..at,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentAst {
    pub blocks: Vec<BlockNode>,
}

impl DocumentAst {
    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter().map(|node| &node.block)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn has_bibliography(&self) -> bool {
        self.iter().any(|b| matches!(b, Block::BibliographyStart))
    }
}
