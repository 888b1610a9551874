// syllable-words: Print the syllable count of individual words.
//
// Usage:
//   syllable-words [OPTIONS] [WORD...]
//
// If WORD arguments are given, reports each word. Otherwise reads words from
// stdin (one per line, blank lines skipped). Output is `word<TAB>count`.

use std::io::{self, Write};

use clap::Parser;
use syllabic_cli::source::for_each_line;
use syllabic_cli::words::{WordMode, write_word};
use syllabic_en::scanner::trim_word;

#[derive(Debug, Parser)]
#[command(name = "syllable-words", version, about = "Print the syllable count of each word")]
struct Args {
    /// Words to scan; reads stdin when omitted
    #[arg(value_name = "WORD")]
    words: Vec<String>,

    /// Print why a word could not be scanned instead of 0
    #[arg(long, conflicts_with = "trace")]
    strict: bool,

    /// Print every state transition
    #[arg(long)]
    trace: bool,

    /// Suppress log output
    #[arg(short, long)]
    quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    syllabic_cli::init_logging(args.verbose, args.quiet);

    let mode = if args.trace {
        WordMode::Trace
    } else if args.strict {
        WordMode::Strict
    } else {
        WordMode::Count
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut report = |word: &str| {
        write_word(&mut out, word, mode)
            .unwrap_or_else(|e| syllabic_cli::fatal(&format!("failed to write output: {e}")));
    };

    if args.words.is_empty() {
        log::info!("reading words from <stdin>");
        let stdin = io::stdin();
        let read = for_each_line(stdin.lock(), |line| {
            let word = trim_word(line);
            if !word.is_empty() {
                report(word);
            }
        });
        if let Err(e) = read {
            syllabic_cli::fatal(&format!("failed to read <stdin>: {e}"));
        }
    } else {
        for word in &args.words {
            report(word);
        }
    }

    if let Err(e) = out.flush() {
        syllabic_cli::fatal(&format!("failed to write output: {e}"));
    }
}
