// syllable-count: Count syllables across word lists.
//
// Reads one word per line from each FILE (or stdin), estimates the syllables
// of every word and prints the total syllable count, the number of words with
// at least one syllable and the elapsed time.
//
// Usage:
//   syllable-count [OPTIONS] [FILE...]
//
// A word list served over HTTP can be piped in:
//   curl -s https://example.org/dictionary.txt | syllable-count

use std::io::{self, Write};
use std::time::Instant;

use clap::Parser;
use syllabic_cli::{OutputFormat, Report, Tally, WordSource};

#[derive(Debug, Parser)]
#[command(name = "syllable-count", version, about = "Count syllables across word lists")]
struct Args {
    /// Word list files, one word per line; `-` reads stdin
    #[arg(value_name = "FILE", env = "SYLLABIC_WORDLIST")]
    inputs: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

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
    log::debug!("arguments: {args:?}");

    let sources: Vec<WordSource> = if args.inputs.is_empty() {
        vec![WordSource::Stdin]
    } else {
        args.inputs.iter().map(|a| WordSource::from_arg(a)).collect()
    };

    let start = Instant::now();
    let mut tally = Tally::default();
    for source in &sources {
        let part = source
            .tally()
            .unwrap_or_else(|e| syllabic_cli::fatal(&e.to_string()));
        log::info!(
            "{source}: {} lines, {} words, {} syllables",
            part.lines,
            part.words,
            part.syllables
        );
        tally.merge(&part);
    }
    let elapsed = start.elapsed();

    if tally.unscannable > 0 {
        log::info!("{} lines could not be scanned", tally.unscannable);
    }

    let report = Report::new(&sources, tally, elapsed);
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    if let Err(e) = report.write_to(&mut out, args.format) {
        syllabic_cli::fatal(&e.to_string());
    }
    if let Err(e) = out.flush() {
        syllabic_cli::fatal(&format!("failed to write report: {e}"));
    }
}
