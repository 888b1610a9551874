// Character classification for ASCII word scanning
//
// Scanners lower-case their input before classifying it, so every predicate
// here works on lower-case ASCII only. Upper-case letters and anything
// outside ASCII fall into `CharClass::Other`.

// ---------------------------------------------------------------------------
// Alphabet constants
// ---------------------------------------------------------------------------

/// Strict vowels (lowercase): a e i o u
const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// Synthetic end-of-word marker appended to every normalized word.
pub const END_MARKER: char = ' ';

// ---------------------------------------------------------------------------
// Character class
// ---------------------------------------------------------------------------

/// Disjoint classification of a single lower-cased character.
///
/// The letters `e` and `y` get their own variants because the scanner
/// treats them differently from the other vowels: `e` may be silent at the
/// end of a word, and `y` acts as a vowel only when it opens a vowel group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// One of `a`, `i`, `o`, `u`.
    Vowel,
    /// The letter `e`.
    E,
    /// The letter `y`.
    Y,
    /// Any other letter `a`-`z`.
    Consonant,
    /// `-`
    Hyphen,
    /// `'`
    Apostrophe,
    /// The end marker (a space).
    Boundary,
    /// Everything else: digits, punctuation, control characters, non-ASCII.
    Other,
}

impl CharClass {
    /// True for `a e i o u`.
    pub fn is_vowel(self) -> bool {
        matches!(self, CharClass::Vowel | CharClass::E)
    }

    /// True for `a e i o u y`.
    pub fn is_vowel_or_y(self) -> bool {
        matches!(self, CharClass::Vowel | CharClass::E | CharClass::Y)
    }

    /// True for every letter that is not a strict vowel, `y` included.
    pub fn is_consonant(self) -> bool {
        matches!(self, CharClass::Consonant | CharClass::Y)
    }
}

/// Classify one lower-cased character.
pub fn classify(c: char) -> CharClass {
    match c {
        'e' => CharClass::E,
        'y' => CharClass::Y,
        'a' | 'i' | 'o' | 'u' => CharClass::Vowel,
        'a'..='z' => CharClass::Consonant,
        '-' => CharClass::Hyphen,
        '\'' => CharClass::Apostrophe,
        END_MARKER => CharClass::Boundary,
        _ => CharClass::Other,
    }
}

// ---------------------------------------------------------------------------
// Character predicates
// ---------------------------------------------------------------------------

/// Check whether a character is a strict vowel: a, e, i, o, u.
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

/// Check whether a character is a vowel or the letter y.
pub fn is_vowel_or_y(c: char) -> bool {
    c == 'y' || is_vowel(c)
}

/// Check whether a character is a lowercase ASCII letter other than a strict
/// vowel. The letter y is a consonant under this definition.
pub fn is_consonant(c: char) -> bool {
    c.is_ascii_lowercase() && !is_vowel(c)
}

/// Check whether a character is a hyphen.
pub fn is_hyphen(c: char) -> bool {
    c == '-'
}

/// Check whether a character is an apostrophe.
pub fn is_apostrophe(c: char) -> bool {
    c == '\''
}

/// Check whether a character is the end marker.
pub fn is_ending(c: char) -> bool {
    c == END_MARKER
}

/// Check whether a character falls outside the scannable alphabet.
///
/// The scannable alphabet is the lowercase letters plus apostrophe, hyphen
/// and the end marker. An apostrophe is accepted but never drives a
/// transition on its own.
pub fn is_non_letter(c: char) -> bool {
    !(c.is_ascii_lowercase() || is_apostrophe(c) || is_hyphen(c) || is_ending(c))
}
