// ugu-scan: Show how the censor scans text from stdin.
//
// For every non-empty input line prints the candidate starts found by the
// first pass and the spans resolved by the second, with the censorship
// decision for each span:
//
//   line 1: Это иг....ра!
//     candidates: [4]
//     [   4..  12] word=игра bad_part=игр stem=игр censored=true
//
// Usage:
//   ugu-scan [-c CONFIG] [-l LANG] [-w WORD_LIST]... [--word WORD]...

use std::io::{self, BufRead, Write};

use clap::Parser;
use ugu_cli::DictionaryArgs;

#[derive(Parser)]
#[command(name = "ugu-scan")]
#[command(about = "Print candidate starts and resolved spans for stdin text", long_about = None)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    dictionary: DictionaryArgs,
}

fn main() {
    let cli = Cli::parse();
    ugu_cli::init_tracing();

    let censor = ugu_cli::build_censor(&cli.dictionary)
        .unwrap_or_else(|e| ugu_cli::fatal(&e.to_string()));
    let lang = cli.dictionary.lang.as_str();
    let Some(dictionary) = censor.dictionary(lang) else {
        ugu_cli::fatal(&format!("no dictionary words for language {lang:?}"));
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for (number, line) in stdin.lock().lines().enumerate() {
        let line = line.unwrap_or_else(|e| ugu_cli::fatal(&format!("failed to read stdin: {e}")));
        if line.trim().is_empty() {
            continue;
        }

        let _ = writeln!(out, "line {}: {line}", number + 1);
        let _ = writeln!(out, "  candidates: {:?}", censor.candidate_starts(&line, lang));
        for bounds in censor.word_bounds(&line, lang) {
            let _ = writeln!(
                out,
                "  [{:>4}..{:>4}] word={} bad_part={} stem={} censored={}",
                bounds.start,
                bounds.end,
                bounds.word,
                bounds.bad_part,
                dictionary.stem(&bounds.word),
                censor.is_censored(&bounds, lang)
            );
        }
    }
}
