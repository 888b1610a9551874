// Per-word output for `syllable-words`.

use std::io::{self, Write};

use syllabic_en::scanner::Step;
use syllabic_en::{count_syllables, trace, try_count_syllables};

/// How each word is reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WordMode {
    /// `word<TAB>count`, with 0 for unscannable words.
    #[default]
    Count,
    /// `word<TAB>count`, or `word<TAB>error: reason` for unscannable words.
    Strict,
    /// Every transition followed by the result.
    Trace,
}

/// Write the report for one word.
pub fn write_word<W: Write>(out: &mut W, word: &str, mode: WordMode) -> io::Result<()> {
    match mode {
        WordMode::Count => writeln!(out, "{word}\t{}", count_syllables(word)),
        WordMode::Strict => match try_count_syllables(word) {
            Ok(n) => writeln!(out, "{word}\t{n}"),
            Err(e) => writeln!(out, "{word}\terror: {e}"),
        },
        WordMode::Trace => {
            let t = trace(word);
            writeln!(out, "{word}")?;
            for step in t.steps() {
                writeln!(out, "  {}", format_step(step))?;
            }
            match t.outcome() {
                Ok(n) => writeln!(out, "  = {n}"),
                Err(e) => writeln!(out, "  = 0 ({e})"),
            }
        }
    }
}

fn format_step(step: &Step) -> String {
    let mark = if step.counted { " +1" } else { "" };
    format!(
        "{:>3} {:?} {:?}: {:?} -> {:?}{mark}",
        step.position, step.character, step.class, step.from, step.to
    )
}
