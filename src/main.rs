//! CLI for txt2latex - extracted paper text to translated LaTeX

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use txt2latex::{ConvertOptions, PatternConfig, TextToLatex, TranslationMode};

const DEFAULT_INPUT: &str = "document.txt";
const DEFAULT_OUTPUT: &str = "document.tex";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input text file extracted from the PDF
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Output LaTeX file path
    #[arg(default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Language of the input text
    #[arg(long, default_value = "en")]
    source_lang: String,

    /// Language of the generated document
    #[arg(long, default_value = "zh-CN")]
    target_lang: String,

    /// Only use the built-in keyword lexicon (no network access)
    #[arg(long)]
    offline: bool,

    /// Keep the text untranslated
    #[arg(long, conflicts_with = "offline")]
    no_translate: bool,

    /// JSON file overriding the classification patterns
    #[arg(long)]
    patterns: Option<PathBuf>,

    /// Language passed to lstlisting for code blocks
    #[arg(long, default_value = "Python")]
    code_language: String,

    /// Timeout of each online translation request in seconds
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> txt2latex::Result<()> {
    let patterns = match &args.patterns {
        Some(path) => PatternConfig::from_json_file(path)?,
        None => PatternConfig::default(),
    };

    let translation = if args.no_translate {
        TranslationMode::Disabled
    } else if args.offline {
        TranslationMode::Offline
    } else {
        TranslationMode::Online
    };

    let options = ConvertOptions {
        source_lang: args.source_lang.clone(),
        target_lang: args.target_lang.clone(),
        translation,
        timeout: Duration::from_secs(args.timeout_secs),
        patterns,
        code_language: args.code_language.clone(),
        ..Default::default()
    };

    let converter = TextToLatex::new(options);
    let latex = converter.convert(&args.input)?;
    std::fs::write(&args.output, latex)?;

    println!(
        "Successfully converted {} to {}",
        args.input.display(),
        args.output.display()
    );
    println!("Note: images were omitted, their captions are preserved");
    Ok(())
}
