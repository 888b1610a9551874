// Report rendering for `syllable-count`.

use std::io::Write;
use std::time::Duration;

use serde::Serialize;

use crate::CliError;
use crate::source::WordSource;
use crate::tally::Tally;

/// Output format of the aggregate report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// A single JSON object
    Json,
}

/// Totals over all sources plus the time spent counting them.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub sources: Vec<String>,
    #[serde(flatten)]
    pub tally: Tally,
    pub elapsed_secs: f64,
}

impl Report {
    pub fn new(sources: &[WordSource], tally: Tally, elapsed: Duration) -> Self {
        Self {
            sources: sources.iter().map(ToString::to_string).collect(),
            tally,
            elapsed_secs: elapsed.as_secs_f64(),
        }
    }

    pub fn write_to<W: Write>(&self, out: &mut W, format: OutputFormat) -> Result<(), CliError> {
        match format {
            OutputFormat::Text => {
                writeln!(out, "Reading words from {}", self.sources.join(", "))?;
                writeln!(
                    out,
                    "Counted {} syllables in {} words",
                    self.tally.syllables, self.tally.words
                )?;
                writeln!(out, "Elapsed time: {:.3} sec", self.elapsed_secs)?;
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, self)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Report {
        let tally: Tally = ["cat", "home-brew", "xyz123"].into_iter().collect();
        Report::new(
            &[WordSource::from_arg("words.txt")],
            tally,
            Duration::from_millis(1250),
        )
    }

    #[test]
    fn text_report() {
        let mut out = Vec::new();
        sample().write_to(&mut out, OutputFormat::Text).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Reading words from words.txt\n\
             Counted 3 syllables in 2 words\n\
             Elapsed time: 1.250 sec\n"
        );
    }

    #[test]
    fn json_report() {
        let mut out = Vec::new();
        sample().write_to(&mut out, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["sources"][0], "words.txt");
        assert_eq!(value["lines"], 3);
        assert_eq!(value["words"], 2);
        assert_eq!(value["syllables"], 3);
        assert_eq!(value["unscannable"], 1);
        assert_eq!(value["elapsed_secs"], 1.25);
    }
}
