// Syllable scanner -- drives the transition table over a single word
//
// A word is normalized by trimming surrounding spaces and ASCII control
// characters, lower-casing ASCII letters and appending one end marker. Each
// character is classified once and fed to the table. The first unscannable character ends the scan.

mod state;

pub use state::{State, Transition, transition};

use syllabic_core::character::{CharClass, END_MARKER, classify};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// A word rejected by the scanner.
///
/// `count_syllables` reports such words as zero syllables, which is
/// indistinguishable from a word that legitimately scans to zero.
/// `try_count_syllables` keeps the two apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unscannable character {character:?} at position {position}")]
pub struct InvalidWord {
    /// Character index within the word after [`trim_word`].
    pub position: usize,
    /// The rejected character, after case folding.
    pub character: char,
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Strip leading and trailing spaces and ASCII control characters.
///
/// Other whitespace, such as U+00A0 or U+3000, is kept and makes the word
/// unscannable.
pub fn trim_word(word: &str) -> &str {
    word.trim_matches(|c: char| c <= ' ')
}

/// Normalize a word into the character sequence the scanner consumes.
pub fn normalize(word: &str) -> impl Iterator<Item = char> + '_ {
    trim_word(word)
        .chars()
        .map(|c| c.to_ascii_lowercase())
        .chain(std::iter::once(END_MARKER))
}

// ---------------------------------------------------------------------------
// Scanner
// ---------------------------------------------------------------------------

/// One character fed through the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Index within the normalized word.
    pub position: usize,
    pub character: char,
    pub class: CharClass,
    pub from: State,
    pub to: State,
    /// Whether this character closed a syllable.
    pub counted: bool,
    /// Running syllable count after this character.
    pub syllables: usize,
}

/// State and counter for one scan.
///
/// A scanner is created per word and consumed by [`Scanner::finish`]; it is
/// never reset or shared between words.
#[derive(Debug, Clone)]
pub struct Scanner {
    state: State,
    syllables: usize,
    position: usize,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Scanner {
    pub fn new() -> Self {
        Self {
            state: State::Start,
            syllables: 0,
            position: 0,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn syllables(&self) -> usize {
        self.syllables
    }

    /// Feed one already-normalized character.
    ///
    /// Feeding an invalidated scanner leaves it unchanged.
    pub fn feed(&mut self, c: char) -> Step {
        let class = classify(c);
        let from = self.state;
        let t = transition(from, class, self.syllables > 0);
        if t.count {
            self.syllables += 1;
        }
        self.state = t.next;

        let step = Step {
            position: self.position,
            character: c,
            class,
            from,
            to: t.next,
            counted: t.count,
            syllables: self.syllables,
        };
        self.position += 1;
        step
    }

    /// Final count. An invalidated scan yields zero.
    pub fn finish(self) -> usize {
        if self.state.is_terminal() {
            0
        } else {
            self.syllables
        }
    }
}

fn run(word: &str, mut on_step: impl FnMut(Step)) -> Result<usize, InvalidWord> {
    let mut scanner = Scanner::new();
    for c in normalize(word) {
        let step = scanner.feed(c);
        on_step(step);
        if step.to.is_terminal() {
            return Err(InvalidWord {
                position: step.position,
                character: step.character,
            });
        }
    }
    Ok(scanner.finish())
}

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Estimate the number of syllables in `word`.
///
/// Returns 0 for words containing characters outside `a`-`z`, `A`-`Z`,
/// apostrophe, hyphen and space, and for words that do not scan to any
/// syllable (such as `""` or `"x"`).
///
/// ```
/// assert_eq!(syllabic_en::count_syllables("home-brew"), 2);
/// assert_eq!(syllabic_en::count_syllables("xyz123"), 0);
/// ```
pub fn count_syllables(word: &str) -> usize {
    try_count_syllables(word).unwrap_or(0)
}

/// Like [`count_syllables`], but reports the character that made the word
/// unscannable instead of returning zero.
pub fn try_count_syllables(word: &str) -> Result<usize, InvalidWord> {
    run(word, |_| {})
}

/// Every transition taken while scanning a word, plus the outcome.
#[derive(Debug, Clone)]
pub struct Trace {
    steps: Vec<Step>,
    outcome: Result<usize, InvalidWord>,
}

impl Trace {
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn outcome(&self) -> Result<usize, InvalidWord> {
        self.outcome
    }

    /// Same value [`count_syllables`] returns for the word.
    pub fn syllables(&self) -> usize {
        self.outcome.unwrap_or(0)
    }
}

/// Scan a word and record each transition.
pub fn trace(word: &str) -> Trace {
    let mut steps = Vec::with_capacity(word.len() + 1);
    let outcome = run(word, |step| steps.push(step));
    Trace { steps, outcome }
}
