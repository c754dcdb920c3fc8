//! Static keyword lexicon used when no translation backend is available.

/// Longer keywords come first so that substitution never splits a longer
/// keyword with a shorter one.
const EN_ZH: &[(&str, &str)] = &[
    ("Acknowledgement", "致谢"),
    ("Introduction", "引言"),
    ("Conclusion", "结论"),
    ("References", "参考文献"),
    ("Abstract", "摘要"),
    ("Section", "章节"),
    ("Figure", "图"),
    ("Table", "表"),
    ("Fig.", "图"),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct Lexicon {
    entries: &'static [(&'static str, &'static str)],
}

impl Lexicon {
    /// Lexicon for a language pair; empty when the pair has none.
    pub fn for_pair(source: &str, target: &str) -> Self {
        let source = source.to_ascii_lowercase();
        let target = target.to_ascii_lowercase();
        if source.starts_with("en") && target.starts_with("zh") {
            Self { entries: EN_ZH }
        } else {
            Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Literal substring substitution of every known keyword.
    pub fn apply(&self, text: &str) -> String {
        let mut out = text.to_string();
        for &(from, to) in self.entries {
            if out.contains(from) {
                out = out.replace(from, to);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_en_zh_substitution() {
        let lexicon = Lexicon::for_pair("en", "zh-CN");
        assert_eq!(lexicon.apply("References"), "参考文献");
        assert_eq!(
            lexicon.apply("Figure 2 and Fig. 3 in the Introduction"),
            "图 2 and 图 3 in the 引言"
        );
        assert_eq!(lexicon.apply("plain words"), "plain words");
    }

    #[test]
    fn test_unknown_pair_passes_through() {
        let lexicon = Lexicon::for_pair("en", "de");
        assert!(lexicon.is_empty());
        assert_eq!(lexicon.apply("Abstract"), "Abstract");
    }
}
