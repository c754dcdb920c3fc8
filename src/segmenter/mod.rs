//! Line-oriented segmenter turning extracted text into typed blocks.
//!
//! The segmenter makes a single forward pass. Front matter (title and author
//! lines) is read once at the start; after that every non-blank line is
//! classified through the priority table of the current [`Mode`] and the
//! winning rule consumes as many lines as its block needs.

mod cursor;
mod patterns;
mod rules;

use crate::core::ast::{split_lines, Block, BlockNode, DocumentAst, HeadingLevel, Line};
use crate::Result;

pub use self::cursor::LineCursor;
pub use self::patterns::{PatternConfig, PatternSet};
pub use self::rules::{classify, Mode, Rule};

/// Maximum number of lines after the title scanned for author names.
const MAX_AUTHOR_LINES: usize = 4;

/// Heading text emitted when the bibliography opens.
pub const BIBLIOGRAPHY_HEADING: &str = "References";

pub struct Segmenter {
    patterns: PatternSet,
}

#[derive(Default)]
struct SegmentState<'a> {
    mode: Mode,
    paragraph: Vec<Line<'a>>,
    blocks: Vec<BlockNode>,
}

impl<'a> SegmentState<'a> {
    fn push(&mut self, block: Block, span: std::ops::Range<usize>) {
        self.blocks.push(BlockNode::new(block, span));
    }

    fn flush_paragraph(&mut self) {
        let (Some(first), Some(last)) = (self.paragraph.first(), self.paragraph.last()) else {
            return;
        };
        let span = first.index..last.index + 1;
        let text = self
            .paragraph
            .iter()
            .map(|l| l.trimmed())
            .collect::<Vec<_>>()
            .join(" ");
        self.paragraph.clear();
        self.push(Block::Paragraph { text }, span);
    }

    fn finish(mut self, end: usize) -> DocumentAst {
        self.flush_paragraph();
        if self.mode == Mode::Bibliography {
            self.blocks
                .push(BlockNode::marker(Block::BibliographyEnd, end));
        }
        DocumentAst {
            blocks: self.blocks,
        }
    }
}

impl Segmenter {
    pub fn new(patterns: PatternSet) -> Self {
        Self { patterns }
    }

    /// Creates a segmenter with the default pattern set.
    pub fn with_defaults() -> Result<Self> {
        Ok(Self::new(PatternSet::compile(&PatternConfig::default())?))
    }

    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    /// Segments `text` into an ordered block sequence.
    ///
    /// Never fails: lines no rule recognises end up in paragraphs.
    pub fn segment(&self, text: &str) -> DocumentAst {
        let lines = split_lines(text);
        let mut cursor = LineCursor::new(&lines);
        let mut state = SegmentState::default();

        self.front_matter(&mut cursor, &mut state);

        while let Some(line) = cursor.next_line() {
            if line.is_blank() {
                state.flush_paragraph();
                continue;
            }

            let applied = match classify(line.trimmed(), state.mode, &self.patterns) {
                Some(rule) => {
                    log::debug!("line {}: {:?}", line.index, rule);
                    state.flush_paragraph();
                    self.apply(rule, line, &mut cursor, &mut state).is_some()
                }
                None => false,
            };
            if !applied {
                state.paragraph.push(line);
            }
        }

        let doc = state.finish(cursor.position());
        log::debug!(
            "segmented {} lines into {} blocks",
            lines.len(),
            doc.blocks.len()
        );
        doc
    }

    fn front_matter<'a>(&self, cursor: &mut LineCursor<'a>, state: &mut SegmentState<'a>) {
        cursor.collect_until(|l| !l.is_blank());
        let Some(title) = cursor.next_line() else {
            return;
        };
        state.push(
            Block::Title {
                text: title.trimmed().to_string(),
            },
            title.index..title.index + 1,
        );

        let start = cursor.position();
        let mut budget = MAX_AUTHOR_LINES;
        let candidates = cursor.collect_until(|l| {
            if budget == 0 || self.patterns.abstract_start(l.trimmed()).is_some() {
                return true;
            }
            budget -= 1;
            false
        });
        let names: Vec<String> = candidates
            .iter()
            .filter(|l| !l.is_blank())
            .map(|l| l.trimmed().to_string())
            .collect();
        if !names.is_empty() {
            state.push(Block::AuthorList { names }, start..cursor.position());
        }
    }

    /// Builds the block for `rule` starting at the already consumed `line`.
    ///
    /// Returns `None` when the rule's extractor disagrees with its matcher,
    /// in which case the caller keeps the line as prose.
    fn apply<'a>(
        &self,
        rule: Rule,
        line: Line<'a>,
        cursor: &mut LineCursor<'a>,
        state: &mut SegmentState<'a>,
    ) -> Option<()> {
        let start = line.index;
        let trimmed = line.trimmed();
        let patterns = &self.patterns;

        match rule {
            Rule::Abstract => {
                let mut parts = Vec::new();
                let first = patterns.abstract_start(trimmed)?;
                if !first.is_empty() {
                    parts.push(first);
                }
                let body = cursor.collect_until(|l| patterns.is_abstract_end(l.trimmed()));
                parts.extend(body.iter().filter(|l| !l.is_blank()).map(|l| l.trimmed()));
                state.push(
                    Block::Abstract {
                        text: parts.join(" "),
                    },
                    start..cursor.position(),
                );
            }
            Rule::Heading => {
                let (level, title) = patterns.heading(trimmed)?;
                state.push(
                    Block::Heading {
                        level,
                        text: title.to_string(),
                    },
                    start..start + 1,
                );
            }
            Rule::Figure => {
                let (number, caption) = patterns.figure(trimmed)?;
                let mut caption = caption.to_string();
                if caption.is_empty() {
                    if let Some(next) = cursor.peek() {
                        if !next.is_blank() && !patterns.is_heading(next.trimmed()) {
                            caption = next.trimmed().to_string();
                            cursor.next_line();
                        }
                    }
                }
                state.push(Block::Figure { number, caption }, start..cursor.position());
            }
            Rule::Code => {
                let mut lines = vec![line.text.to_string()];
                let body =
                    cursor.collect_until(|l| l.is_blank() || patterns.is_heading(l.trimmed()));
                lines.extend(body.iter().map(|l| l.text.to_string()));
                state.push(Block::CodeBlock { lines }, start..cursor.position());
            }
            Rule::Bibliography => {
                state.push(
                    Block::Heading {
                        level: HeadingLevel::Section,
                        text: BIBLIOGRAPHY_HEADING.to_string(),
                    },
                    start..start + 1,
                );
                state
                    .blocks
                    .push(BlockNode::marker(Block::BibliographyStart, start + 1));
                state.mode = Mode::Bibliography;
            }
            Rule::Reference => {
                let (number, first) = patterns.reference(trimmed)?;
                let mut parts = Vec::new();
                if !first.is_empty() {
                    parts.push(first);
                }
                let body = cursor.collect_until(|l| {
                    l.is_blank() || patterns.reference(l.trimmed()).is_some()
                });
                parts.extend(body.iter().map(|l| l.trimmed()));
                state.push(
                    Block::ReferenceEntry {
                        number,
                        text: parts.join(" "),
                    },
                    start..cursor.position(),
                );
            }
        }
        Some(())
    }
}
