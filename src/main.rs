use std::error::Error;
use std::io::{self, BufRead, Write};

use tracing::info;
use tracing_subscriber::EnvFilter;
use transcript_highlight::{MatchPatternBuilder, builder_from_file};

const USAGE: &str = "usage: highlight <query> [text...]\n\
    Prints each text argument (or each stdin line) with matches wrapped in [ ].\n\
    Set HIGHLIGHT_CONFIG to a YAML file to override the defaults.";

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let Some(query) = args.next() else {
        eprintln!("{USAGE}");
        std::process::exit(2);
    };
    let texts: Vec<String> = args.collect();

    let builder = match std::env::var_os("HIGHLIGHT_CONFIG") {
        Some(path) => {
            info!(config = %path.to_string_lossy(), "loading_config");
            builder_from_file(path)?
        }
        None => MatchPatternBuilder::new(),
    };

    let patterns = builder.build(&query)?;
    for pattern in &patterns {
        info!(pattern = pattern.as_str(), literal = pattern.is_literal(), "pattern");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if texts.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line?;
            writeln!(out, "{}", patterns.highlight(&line).render("[", "]"))?;
        }
    } else {
        for text in &texts {
            writeln!(out, "{}", patterns.highlight(text).render("[", "]"))?;
        }
    }

    Ok(())
}
