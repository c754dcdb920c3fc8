//! Classification patterns.
//!
//! The defaults are tuned for IEEE-style papers as they come out of common
//! PDF-to-text extractors. Every pattern can be overridden through
//! [`PatternConfig`], which deserializes from JSON with missing fields taking
//! their default values.

use crate::core::ast::HeadingLevel;
use crate::error::Error;
use crate::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Raw, uncompiled pattern configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    /// Opens the abstract. An optional `rest` group captures text following
    /// the keyword on the same line.
    pub abstract_start: String,
    /// Terminates the abstract (the matching line is not consumed).
    pub abstract_end: String,
    /// Top-level heading patterns; each needs a `title` group.
    pub section: Vec<String>,
    pub subsection: Vec<String>,
    pub subsubsection: Vec<String>,
    /// Heading candidates with longer titles are treated as prose.
    pub max_heading_words: usize,
    /// Figure caption patterns with a `number` and an optional `caption` group.
    pub figure: Vec<String>,
    /// Lines that open a code listing.
    pub code_start: Vec<String>,
    /// Lines that open the bibliography.
    pub bibliography: Vec<String>,
    /// Reference entry start with `number` and `text` groups.
    pub reference: String,
}

impl Default for PatternConfig {
    fn default() -> Self {
        const ROMAN: &str = r"(?:I{1,3}|IV|VI{0,3}|IX|X)";
        Self {
            abstract_start: r"^Abstract\b\s*[—–:.\-]*\s*(?P<rest>.*)$".to_string(),
            abstract_end: r"^[IVX]+\.".to_string(),
            section: vec![
                format!(r"^{ROMAN}\.\s+(?P<title>.+)$"),
                // Without the dot only all-caps titles qualify ("IV EXPERIMENTS");
                // at least one capital, so "V = 2" and table rows stay prose.
                format!(r"^{ROMAN}\s+(?P<title>[^\p{{Ll}}]*\p{{Lu}}[^\p{{Ll}}]*)$"),
            ],
            subsection: vec![r"^[A-H]\.\s+(?P<title>.+)$".to_string()],
            subsubsection: vec![r"^[a-f]\)\s+(?P<title>.+)$".to_string()],
            max_heading_words: 12,
            figure: vec![
                r"^(?i:fig(?:ure)?)\.?\s*(?P<number>\d+)(?:\s*[.:]\s*(?P<caption>.*))?$"
                    .to_string(),
            ],
            code_start: vec![
                r"^import\s+[\w.]+".to_string(),
                r"^from\s+[\w.]+\s+import\s+\S".to_string(),
                r"^[\w.\[\], ]+=\s*.*\b(?:np|se3|pin)\.\w".to_string(),
            ],
            bibliography: vec![
                r"^R\s?EFERENCES\b".to_string(),
                r"^References\s*$".to_string(),
            ],
            reference: r"^\[(?P<number>\d+)\]\s*(?P<text>.*)$".to_string(),
        }
    }
}

impl PatternConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}

/// Compiled form of [`PatternConfig`]. All matchers expect trimmed lines.
#[derive(Debug, Clone)]
pub struct PatternSet {
    abstract_start: Regex,
    abstract_end: Regex,
    headings: Vec<(HeadingLevel, Regex)>,
    max_heading_words: usize,
    figure: Vec<Regex>,
    code_start: Vec<Regex>,
    bibliography: Vec<Regex>,
    reference: Regex,
}

fn compile_all(patterns: &[String]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|p| Regex::new(p).map_err(Error::from))
        .collect()
}

impl PatternSet {
    pub fn compile(config: &PatternConfig) -> Result<Self> {
        let mut headings = Vec::new();
        for (level, patterns) in [
            (HeadingLevel::Section, &config.section),
            (HeadingLevel::Subsection, &config.subsection),
            (HeadingLevel::Subsubsection, &config.subsubsection),
        ] {
            for regex in compile_all(patterns)? {
                headings.push((level, regex));
            }
        }

        Ok(Self {
            abstract_start: Regex::new(&config.abstract_start)?,
            abstract_end: Regex::new(&config.abstract_end)?,
            headings,
            max_heading_words: config.max_heading_words,
            figure: compile_all(&config.figure)?,
            code_start: compile_all(&config.code_start)?,
            bibliography: compile_all(&config.bibliography)?,
            reference: Regex::new(&config.reference)?,
        })
    }

    /// Returns the text following the abstract keyword when `line` opens
    /// the abstract.
    pub fn abstract_start<'t>(&self, line: &'t str) -> Option<&'t str> {
        let caps = self.abstract_start.captures(line)?;
        Some(caps.name("rest").map_or("", |m| m.as_str().trim()))
    }

    pub fn is_abstract_end(&self, line: &str) -> bool {
        self.abstract_end.is_match(line)
    }

    pub fn heading<'t>(&self, line: &'t str) -> Option<(HeadingLevel, &'t str)> {
        self.headings.iter().find_map(|(level, regex)| {
            let title = regex.captures(line)?.name("title")?.as_str().trim();
            let words = title.split_whitespace().count();
            (words > 0 && words <= self.max_heading_words).then_some((*level, title))
        })
    }

    pub fn is_heading(&self, line: &str) -> bool {
        self.heading(line).is_some()
    }

    /// Returns the figure number and the caption found on the same line
    /// (possibly empty).
    pub fn figure<'t>(&self, line: &'t str) -> Option<(u32, &'t str)> {
        self.figure.iter().find_map(|regex| {
            let caps = regex.captures(line)?;
            let number = caps.name("number")?.as_str().parse().ok()?;
            let caption = caps.name("caption").map_or("", |m| m.as_str().trim());
            Some((number, caption))
        })
    }

    pub fn is_code_start(&self, line: &str) -> bool {
        self.code_start.iter().any(|r| r.is_match(line))
    }

    pub fn is_bibliography_start(&self, line: &str) -> bool {
        self.bibliography.iter().any(|r| r.is_match(line))
    }

    pub fn reference<'t>(&self, line: &'t str) -> Option<(u32, &'t str)> {
        let caps = self.reference.captures(line)?;
        let number = caps.name("number")?.as_str().parse().ok()?;
        let text = caps.name("text").map_or("", |m| m.as_str().trim());
        Some((number, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns() -> PatternSet {
        PatternSet::compile(&PatternConfig::default()).expect("default patterns compile")
    }

    #[test]
    fn test_heading_levels() {
        let p = patterns();
        assert_eq!(
            p.heading("II. RELATED WORK"),
            Some((HeadingLevel::Section, "RELATED WORK"))
        );
        assert_eq!(
            p.heading("B. Dataset"),
            Some((HeadingLevel::Subsection, "Dataset"))
        );
        assert_eq!(
            p.heading("c) Metrics"),
            Some((HeadingLevel::Subsubsection, "Metrics"))
        );
        assert_eq!(
            p.heading("IV EXPERIMENTS"),
            Some((HeadingLevel::Section, "EXPERIMENTS"))
        );
    }

    #[test]
    fn test_heading_rejects_prose() {
        let p = patterns();
        assert_eq!(p.heading("I think this works."), None);
        assert_eq!(p.heading("XI. ELEVEN"), None);
        assert_eq!(p.heading("IVX. BROKEN"), None);
        assert_eq!(p.heading("V = 2"), None);
        assert_eq!(p.heading("X 0.12 0.34"), None);
        assert_eq!(
            p.heading("A. Smith and B. Jones showed that the dynamics of articulated bodies can be computed fast"),
            None
        );
    }

    #[test]
    fn test_figure_with_and_without_caption() {
        let p = patterns();
        assert_eq!(
            p.figure("Fig. 3: Network architecture overview."),
            Some((3, "Network architecture overview."))
        );
        assert_eq!(p.figure("FIGURE 12. Timing"), Some((12, "Timing")));
        assert_eq!(p.figure("Fig. 4"), Some((4, "")));
        assert_eq!(p.figure("Figure 2 shows the trajectory"), None);
        assert_eq!(p.figure("as shown in Fig. 2: left"), None);
    }

    #[test]
    fn test_code_start() {
        let p = patterns();
        assert!(p.is_code_start("import pinocchio as pin"));
        assert!(p.is_code_start("from numpy import zeros"));
        assert!(p.is_code_start("M = se3.exp(v)"));
        assert!(p.is_code_start("q = np.zeros(model.nq)"));
        assert!(!p.is_code_start("Important results follow."));
        assert!(!p.is_code_start("we set x = 3 for all runs"));
    }

    #[test]
    fn test_bibliography_and_reference() {
        let p = patterns();
        assert!(p.is_bibliography_start("REFERENCES"));
        assert!(p.is_bibliography_start("R EFERENCES"));
        assert!(p.is_bibliography_start("References"));
        assert!(!p.is_bibliography_start("References to prior work are given."));
        assert_eq!(
            p.reference("[12] A. Author, Title, 2020."),
            Some((12, "A. Author, Title, 2020."))
        );
        assert_eq!(p.reference("pp. 1-10."), None);
    }

    #[test]
    fn test_abstract_start_strips_separator() {
        let p = patterns();
        assert_eq!(
            p.abstract_start("Abstract—We present a library."),
            Some("We present a library.")
        );
        assert_eq!(p.abstract_start("Abstract"), Some(""));
        assert_eq!(p.abstract_start("Abstractions help."), None);
        assert!(p.is_abstract_end("I. INTRODUCTION"));
    }

    #[test]
    fn test_partial_json_override() {
        let config =
            PatternConfig::from_json_str(r#"{ "max_heading_words": 3 }"#).expect("valid json");
        assert_eq!(config.max_heading_words, 3);
        assert_eq!(config.reference, PatternConfig::default().reference);

        let p = PatternSet::compile(&config).expect("compiles");
        assert_eq!(p.heading("A. A long subsection title"), None);
    }

    #[test]
    fn test_config_survives_json_round_trip() {
        let config = PatternConfig {
            max_heading_words: 8,
            code_start: vec![r"^#include\s+<".to_string()],
            ..Default::default()
        };
        let json = serde_json::to_string_pretty(&config).expect("serializes");
        assert_eq!(PatternConfig::from_json_str(&json).expect("parses"), config);
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let config = PatternConfig {
            figure: vec!["(".to_string()],
            ..Default::default()
        };
        assert!(matches!(
            PatternSet::compile(&config),
            Err(Error::InvalidPattern(_))
        ));
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        assert!(matches!(
            PatternConfig::from_json_str("{ not json"),
            Err(Error::Config(_))
        ));
    }
}
