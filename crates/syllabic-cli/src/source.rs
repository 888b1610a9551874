// Word list sources: files or standard input, one word per line.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use crate::CliError;
use crate::tally::Tally;

/// Where a word list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    Stdin,
    File(PathBuf),
}

impl WordSource {
    /// Interpret a command-line argument. `-` means standard input.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            WordSource::Stdin
        } else {
            WordSource::File(PathBuf::from(arg))
        }
    }

    pub fn open(&self) -> Result<Box<dyn BufRead>, CliError> {
        match self {
            WordSource::Stdin => Ok(Box::new(BufReader::new(io::stdin()))),
            WordSource::File(path) => {
                let file = File::open(path).map_err(|source| CliError::Open {
                    path: path.clone(),
                    source,
                })?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }

    /// Open the source and count every line in it.
    pub fn tally(&self) -> Result<Tally, CliError> {
        let reader = self.open()?;
        log::info!("reading words from {}", self);
        Tally::from_reader(reader).map_err(|source| CliError::Read {
            origin: self.to_string(),
            source,
        })
    }
}

impl fmt::Display for WordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordSource::Stdin => write!(f, "<stdin>"),
            WordSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Call `f` with every line of `reader`, without the line terminator.
///
/// Bytes that are not UTF-8 are replaced with U+FFFD, so a bad line reaches
/// `f` (and scans as unscannable) instead of ending the read.
pub fn for_each_line<R: BufRead>(mut reader: R, mut f: impl FnMut(&str)) -> io::Result<()> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(());
        }
        let line = String::from_utf8_lossy(&buf);
        f(line.trim_end_matches(['\n', '\r']));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_is_stdin() {
        assert_eq!(WordSource::from_arg("-"), WordSource::Stdin);
        assert_eq!(
            WordSource::from_arg("words.txt"),
            WordSource::File(PathBuf::from("words.txt"))
        );
    }

    #[test]
    fn for_each_line_keeps_going_after_invalid_utf8() {
        let input: &[u8] = b"cat\ncaf\xe9\r\nmake";
        let mut lines = Vec::new();
        for_each_line(input, |line| lines.push(line.to_string())).unwrap();
        assert_eq!(lines, vec!["cat", "caf\u{FFFD}", "make"]);
    }

    #[test]
    fn display() {
        assert_eq!(WordSource::Stdin.to_string(), "<stdin>");
        assert_eq!(WordSource::from_arg("a/b.txt").to_string(), "a/b.txt");
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let source = WordSource::from_arg("/nonexistent/syllabic/words.txt");
        let err = source.tally().unwrap_err();
        assert!(matches!(err, CliError::Open { .. }));
        assert!(err.to_string().starts_with("failed to open /nonexistent/syllabic/words.txt"));
    }
}
