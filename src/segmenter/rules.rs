//! Rule priority tables.
//!
//! At each cursor position the rules of the current [`Mode`] are tried in
//! table order and the first match decides how the line is consumed. A line
//! matching no rule falls through to paragraph accumulation.

use super::patterns::PatternSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Abstract,
    Heading,
    Figure,
    Code,
    Bibliography,
    Reference,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Body,
    /// Entered at the references heading and kept until end of input.
    Bibliography,
}

const BODY_PRIORITY: &[Rule] = &[
    Rule::Abstract,
    Rule::Heading,
    Rule::Figure,
    Rule::Code,
    Rule::Bibliography,
];

const BIBLIOGRAPHY_PRIORITY: &[Rule] = &[
    Rule::Reference,
    Rule::Abstract,
    Rule::Heading,
    Rule::Figure,
    Rule::Code,
];

impl Mode {
    pub fn priority(self) -> &'static [Rule] {
        match self {
            Mode::Body => BODY_PRIORITY,
            Mode::Bibliography => BIBLIOGRAPHY_PRIORITY,
        }
    }
}

impl Rule {
    /// Whether this rule fires on the (trimmed) line.
    pub fn matches(self, line: &str, patterns: &PatternSet) -> bool {
        match self {
            Rule::Abstract => patterns.abstract_start(line).is_some(),
            Rule::Heading => patterns.is_heading(line),
            Rule::Figure => patterns.figure(line).is_some(),
            Rule::Code => patterns.is_code_start(line),
            Rule::Bibliography => patterns.is_bibliography_start(line),
            Rule::Reference => patterns.reference(line).is_some(),
        }
    }
}

/// First rule of `mode`'s table that fires on `line`, if any.
pub fn classify(line: &str, mode: Mode, patterns: &PatternSet) -> Option<Rule> {
    mode.priority()
        .iter()
        .copied()
        .find(|rule| rule.matches(line, patterns))
}
