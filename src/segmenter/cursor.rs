//! Forward-only cursor over the input lines.

use crate::core::ast::Line;

pub struct LineCursor<'a> {
    lines: &'a [Line<'a>],
    pos: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(lines: &'a [Line<'a>]) -> Self {
        Self { lines, pos: 0 }
    }

    /// Index of the next unread line (equals the input length at the end).
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn peek(&self) -> Option<Line<'a>> {
        self.lines.get(self.pos).copied()
    }

    pub fn next_line(&mut self) -> Option<Line<'a>> {
        let line = self.peek()?;
        self.pos += 1;
        Some(line)
    }

    /// Consumes lines until `stop` returns true for the next line or the
    /// input ends. The stopping line is left unread.
    pub fn collect_until<F>(&mut self, mut stop: F) -> Vec<Line<'a>>
    where
        F: FnMut(&Line<'a>) -> bool,
    {
        let mut taken = Vec::new();
        while let Some(line) = self.peek() {
            if stop(&line) {
                break;
            }
            taken.push(line);
            self.pos += 1;
        }
        taken
    }
}
