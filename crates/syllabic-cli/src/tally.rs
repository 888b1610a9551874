// Aggregate syllable totals over a word list.

use std::io::{self, BufRead};

use serde::Serialize;
use syllabic_en::try_count_syllables;

use crate::source::for_each_line;

/// Running totals over a sequence of words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    /// Lines read, blank ones included.
    pub lines: usize,
    /// Lines that scanned to at least one syllable.
    pub words: usize,
    /// Sum of all syllable counts.
    pub syllables: usize,
    /// Lines rejected by the scanner.
    pub unscannable: usize,
}

impl Tally {
    /// Count one line.
    pub fn record(&mut self, word: &str) {
        self.lines += 1;
        match try_count_syllables(word) {
            Ok(n) => {
                self.syllables += n;
                if n > 0 {
                    self.words += 1;
                }
            }
            Err(e) => {
                log::debug!("skipping {word:?}: {e}");
                self.unscannable += 1;
            }
        }
    }

    pub fn merge(&mut self, other: &Tally) {
        self.lines += other.lines;
        self.words += other.words;
        self.syllables += other.syllables;
        self.unscannable += other.unscannable;
    }

    /// Tally every line of `reader`. Bytes that are not UTF-8 are replaced,
    /// which makes the affected line unscannable rather than failing the read.
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Tally> {
        let mut tally = Tally::default();
        for_each_line(reader, |line| tally.record(line))?;
        Ok(tally)
    }
}

impl<'a> FromIterator<&'a str> for Tally {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut tally = Tally::default();
        for word in iter {
            tally.record(word);
        }
        tally
    }
}
