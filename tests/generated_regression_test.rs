use pretty_assertions::assert_eq;
use txt2latex::{
    escape_latex, split_into_chunks, Block, ConvertOptions, Error, HeadingLevel, Segmenter,
    TextToLatex, TranslationMode, Translator,
};

fn blocks(text: &str) -> Vec<Block> {
    Segmenter::with_defaults()
        .expect("default patterns compile")
        .segment(text)
        .blocks
        .into_iter()
        .map(|node| node.block)
        .collect()
}

/// Body lines start after four blank lines so no author scan interferes.
fn body(lines: &str) -> String {
    format!("Title\n\n\n\n\n{lines}")
}

#[test]
fn heading_level_mapping_regression() {
    let found = blocks(&body("II. RELATED WORK\nB. Dataset\nc) Metrics"));
    assert_eq!(
        &found[1..],
        &[
            Block::Heading {
                level: HeadingLevel::Section,
                text: "RELATED WORK".to_string()
            },
            Block::Heading {
                level: HeadingLevel::Subsection,
                text: "Dataset".to_string()
            },
            Block::Heading {
                level: HeadingLevel::Subsubsection,
                text: "Metrics".to_string()
            },
        ]
    );
}

#[test]
fn figure_caption_regression() {
    let found = blocks(&body("Fig. 3: Network architecture overview."));
    match &found[1] {
        Block::Figure { number, caption } => {
            assert_eq!(*number, 3);
            assert!(caption.contains("Network architecture overview"));
        }
        other => panic!("expected a figure, got {other:?}"),
    }

    let latex = TextToLatex::new(ConvertOptions {
        translation: TranslationMode::Disabled,
        ..Default::default()
    })
    .convert_str(&body("Fig. 3: Network architecture overview."))
    .unwrap();
    assert!(latex.contains("% Image omitted"));
    assert!(latex.contains("\\label{fig:3}"));
    assert!(!latex.contains("\\includegraphics"));
}

#[test]
fn reference_merging_regression() {
    let found = blocks(&body(
        "REFERENCES\n[1] Author, Title, Venue, 2020.\npp. 1-10.",
    ));
    assert_eq!(
        found[3],
        Block::ReferenceEntry {
            number: 1,
            text: "Author, Title, Venue, 2020. pp. 1-10.".to_string()
        }
    );
    assert_eq!(found.last(), Some(&Block::BibliographyEnd));
}

#[test]
fn three_line_end_to_end_regression() {
    let converter = TextToLatex::new(ConvertOptions {
        translation: TranslationMode::Disabled,
        ..Default::default()
    });
    let text = "Dynamics Paper\nAbstract—We study dynamics.\nI. INTRODUCTION";

    let found: Vec<Block> = converter
        .segment(text)
        .unwrap()
        .blocks
        .into_iter()
        .map(|n| n.block)
        .collect();
    assert_eq!(
        found,
        vec![
            Block::Title {
                text: "Dynamics Paper".to_string()
            },
            Block::Abstract {
                text: "We study dynamics.".to_string()
            },
            Block::Heading {
                level: HeadingLevel::Section,
                text: "INTRODUCTION".to_string()
            },
        ]
    );

    let latex = converter.convert_str(text).unwrap();
    let title = latex.find("\\title{Dynamics Paper}").expect("title");
    let abstract_env = latex.find("\\begin{abstract}\nWe study dynamics.\n\\end{abstract}").expect("abstract");
    let section = latex.find("\\section{INTRODUCTION}").expect("section");
    assert!(title < abstract_env && abstract_env < section);
    assert_eq!(latex.matches("We study dynamics.").count(), 1);
    assert_eq!(latex.matches("INTRODUCTION").count(), 1);
}

#[test]
fn translation_fallback_regression() {
    let translator = Translator::new("en", "zh-CN").with_backend(
        |_: &str, _: &str, _: &str| -> txt2latex::Result<String> {
            Err(Error::Translation("service unavailable".to_string()))
        },
    );
    let converter = TextToLatex::new(ConvertOptions::default()).with_translator(translator);

    let latex = converter
        .convert_str(&body("Costs fell by 50% & more.\n\nB. Data_sets"))
        .unwrap();
    assert!(latex.contains(&format!("{}\n\n", escape_latex("Costs fell by 50% & more."))));
    assert!(latex.contains("\\subsection{Data\\_sets}"));
}

#[test]
fn escaping_applied_once_regression() {
    let translator = Translator::new("en", "zh-CN").with_backend(
        |text: &str, _: &str, _: &str| -> txt2latex::Result<String> { Ok(text.to_string()) },
    );
    let converter = TextToLatex::new(ConvertOptions::default()).with_translator(translator);
    let latex = converter.convert_str(&body("Path C:\\tmp costs $5")).unwrap();

    assert!(latex.contains("Path C:\\textbackslash{}tmp costs \\$5\n"));
    assert!(!latex.contains("\\textbackslash{}textbackslash"));
}

#[test]
fn chunking_identity_regression() {
    let paragraph: String = (0..1500)
        .map(|i| format!("token{i}"))
        .collect::<Vec<_>>()
        .join(" \n");
    assert!(paragraph.chars().count() > 5000);

    let chunks = split_into_chunks(&paragraph, 4500);
    assert!(chunks.len() > 1);
    let rejoined = chunks.join(" ");
    let words: Vec<&str> = paragraph.split_whitespace().collect();
    assert_eq!(rejoined, words.join(" "));
}
