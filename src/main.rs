use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser as _;
use log::info;
use rjson::{
    common::SourceText,
    config::{Options, DEFAULT_MAX_DEPTH},
    from_tokens,
    lexing::Lexer,
    Error,
};

const SAMPLE: &str = r#"[{"key1": "val1"}, "val2", [1,2,3], {"arr": []}]"#;

#[derive(clap::Parser)]
#[command(name = "rjson")]
#[command(about = "Lexes and parses JSON documents", version, long_about = None)]
struct Cli {
    /// JSON texts to parse; a built-in sample is used when none are given
    inputs: Vec<String>,

    /// Read a document from a file
    #[arg(long, short)]
    file: Vec<PathBuf>,

    /// Print the token stream before the value
    #[arg(long)]
    tokens: bool,

    /// Accept tokens after the top-level value
    #[arg(long)]
    allow_trailing: bool,

    /// Maximum nesting of arrays and objects
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let options = Options::new()
        .max_depth(cli.max_depth)
        .allow_trailing(cli.allow_trailing);

    let mut sources = cli
        .inputs
        .iter()
        .enumerate()
        .map(|(i, text)| SourceText::new(format!("<arg {}>", i + 1), text))
        .collect::<Vec<_>>();

    for path in &cli.file {
        let source = SourceText::read_from_file(path)
            .with_context(|| format!("Couldn't read {}", path.display()))?;
        sources.push(source);
    }

    let show_tokens = cli.tokens || sources.is_empty();
    if sources.is_empty() {
        sources.push(SourceText::new("<sample>", SAMPLE));
    }

    let failed = sources
        .iter()
        .filter(|source| !run(source, options, show_tokens))
        .count();

    if failed > 0 {
        bail!("{failed} of {} documents failed to parse", sources.len());
    }

    Ok(())
}

///
/// Lexes and parses one document, reporting to stdout/stderr.
///
fn run(source: &SourceText, options: Options, show_tokens: bool) -> bool {
    info!("parsing {}", source.name());
    println!("== {}", source.name());

    let lexed = Lexer::from_source(source).lex();
    if show_tokens {
        for token in &lexed.tokens {
            println!("{token}");
        }
    }

    let result = lexed
        .into_result()
        .map_err(Error::from)
        .and_then(|tokens| from_tokens(&tokens, options).map_err(Error::from));

    match result {
        Ok(value) => {
            println!("{value:#?}");
            true
        }
        Err(err) => {
            match err.locate(source) {
                Some(at) => eprintln!("{at}: {err}"),
                None => eprintln!("{}: {err}", source.name()),
            }

            if let Some(text) = source.source_at(&err).filter(|text| !text.is_empty()) {
                eprintln!("  near {text:?}");
            }
            false
        }
    }
}
