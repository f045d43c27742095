// ugu-cli: shared utilities for the command-line tools.

pub mod config;

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::Args;
use ugu_censor::Censor;
use ugu_censor::stemmer;

use crate::config::Config;

/// Error type for loading configuration and word lists.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("{}: language entry has an empty code", path.display())]
    InvalidLanguage { path: PathBuf },
}

/// Dictionary options shared by every tool.
#[derive(Debug, Clone, Args)]
pub struct DictionaryArgs {
    /// Configuration file (default: $UGU_CENSOR_CONFIG, then the user config dir)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Language code of the input text
    #[arg(short, long, default_value = "ru")]
    pub lang: String,

    /// Word list file, one entry per line (repeatable)
    #[arg(short = 'w', long = "word-list", value_name = "PATH")]
    pub word_lists: Vec<PathBuf>,

    /// Single dictionary word (repeatable)
    #[arg(long = "word", value_name = "WORD")]
    pub words: Vec<String>,

    /// Match exact word forms only for --lang
    #[arg(long)]
    pub no_stem: bool,

    /// Replacement character for censored text
    #[arg(long, value_name = "CHAR")]
    pub mask: Option<char>,
}

/// Read a word list: one entry per line, blank lines and `#` comments skipped.
pub fn read_word_list(path: &Path) -> Result<Vec<String>, CliError> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_word_list(&content))
}

fn parse_word_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Build a censor from the configuration file (if any) and command-line
/// arguments. Command-line words are added for `args.lang` on top of the
/// configured languages.
pub fn build_censor(args: &DictionaryArgs) -> Result<Censor, CliError> {
    let config = Config::load(args.config.as_deref())?.unwrap_or_default();
    let mut censor = Censor::new();

    if let Some(mask) = args.mask.or(config.mask) {
        censor.set_mask(mask);
    }

    let factory = stemmer::default_factory();
    if args.no_stem {
        censor.register_language(&args.lang, None);
    }

    for language in &config.languages {
        let stemmer = if language.stemming {
            factory.create(&language.code)
        } else {
            None
        };
        censor.register_language(&language.code, stemmer);

        censor.add_words(&language.words, &language.code);
        for list in &language.word_lists {
            let words = read_word_list(&config.resolve(list))?;
            censor.add_words(&words, &language.code);
        }
    }

    censor.add_words(&args.words, &args.lang);
    for list in &args.word_lists {
        let words = read_word_list(list)?;
        censor.add_words(&words, &args.lang);
    }

    for lang in censor.languages() {
        let entries = censor.dictionary(lang).map_or(0, |d| d.len());
        tracing::info!(lang, entries, "dictionary ready");
    }

    Ok(censor)
}

/// Censor `input` line by line into `out`. Returns whether any line was
/// censored.
///
/// Stops at the first read or write error; lines before it have already been
/// written.
pub fn censor_lines<R: BufRead, W: Write>(
    censor: &Censor,
    lang: &str,
    input: R,
    out: &mut W,
) -> io::Result<bool> {
    let mut any_censored = false;
    for line in input.lines() {
        let line = line?;
        let (text, censored) = censor.censor_text(&line, lang);
        any_censored |= censored;
        writeln!(out, "{text}")?;
    }
    Ok(any_censored)
}

/// Install the stderr log subscriber. `RUST_LOG` overrides the default
/// `warn` level.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}
