// ugu-censor: Mask dictionary words in text from stdin.
//
// Reads text from stdin and writes it to stdout with every dictionary word
// replaced by mask characters. Text without matches is copied unchanged.
//
// Usage:
//   ugu-censor [-c CONFIG] [-l LANG] [-w WORD_LIST]... [--word WORD]... [OPTIONS]
//
// Examples:
//   echo "Это та самая игра!" | ugu-censor --word игра
//   ugu-censor -l en -w badwords.txt --lines < chat.log

use std::io::{self, Read, Write};

use clap::Parser;
use ugu_cli::DictionaryArgs;

#[derive(Parser)]
#[command(name = "ugu-censor")]
#[command(about = "Mask dictionary words in text read from stdin", long_about = None)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    dictionary: DictionaryArgs,

    /// Process input line by line instead of reading it whole
    #[arg(long)]
    lines: bool,

    /// Print "censored: true|false" to stderr when done
    #[arg(long)]
    report: bool,
}

fn main() {
    let cli = Cli::parse();
    ugu_cli::init_tracing();

    let censor = ugu_cli::build_censor(&cli.dictionary)
        .unwrap_or_else(|e| ugu_cli::fatal(&e.to_string()));
    let lang = cli.dictionary.lang.as_str();

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let any_censored = if cli.lines {
        let stdin = io::stdin();
        ugu_cli::censor_lines(&censor, lang, stdin.lock(), &mut out)
            .unwrap_or_else(|e| ugu_cli::fatal(&format!("failed to censor stdin: {e}")))
    } else {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .unwrap_or_else(|e| ugu_cli::fatal(&format!("failed to read stdin: {e}")));
        let (text, censored) = censor.censor_text(&input, lang);
        if let Err(e) = out.write_all(text.as_bytes()) {
            ugu_cli::fatal(&format!("failed to write stdout: {e}"));
        }
        censored
    };

    if let Err(e) = out.flush() {
        ugu_cli::fatal(&format!("failed to write stdout: {e}"));
    }
    if cli.report {
        eprintln!("censored: {any_censored}");
    }
}
