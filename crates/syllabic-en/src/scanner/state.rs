// Scanner states and the transition table
//
// The table is a pure function of (state, character class). The only part of
// the running count it reads is whether any syllable has been counted yet,
// which a trailing `e` needs to decide whether it is silent.

use syllabic_core::character::CharClass;

/// The state of a single word scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    /// Nothing but apostrophes or spaces seen so far.
    Start,
    /// Last letter was a consonant (or a `y` closing a vowel group).
    Consonant,
    /// Inside a vowel group of length one.
    SingleVowel,
    /// Inside a vowel group of two or more vowels.
    MultiVowel,
    /// An `e` directly after a consonant. Possibly silent.
    TrailingE,
    /// Directly after a hyphen.
    Hyphen,
    /// The word contains an unscannable character. Absorbing.
    Invalid,
}

impl State {
    /// True once the scan can no longer produce a count.
    pub fn is_terminal(self) -> bool {
        self == State::Invalid
    }
}

/// Outcome of feeding one character to a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// State after the character.
    pub next: State,
    /// Whether the character closes a syllable.
    pub count: bool,
}

impl Transition {
    const fn to(next: State) -> Self {
        Self { next, count: false }
    }

    const fn counting(next: State) -> Self {
        Self { next, count: true }
    }
}

/// Apply the transition table.
///
/// `counted_any` tells whether the scan has counted at least one syllable
/// before this character.
pub fn transition(state: State, class: CharClass, counted_any: bool) -> Transition {
    use CharClass as C;

    let stay = Transition::to(state);
    match state {
        State::Start => match class {
            C::Vowel | C::E | C::Y => Transition::to(State::SingleVowel),
            C::Consonant => Transition::to(State::Consonant),
            C::Hyphen | C::Other => Transition::to(State::Invalid),
            C::Apostrophe | C::Boundary => stay,
        },
        State::Consonant => match class {
            // Checked before the general vowel rule
            C::E => Transition::to(State::TrailingE),
            C::Vowel | C::Y => Transition::to(State::SingleVowel),
            C::Hyphen => Transition::to(State::Hyphen),
            C::Other => Transition::to(State::Invalid),
            C::Consonant | C::Apostrophe | C::Boundary => stay,
        },
        State::TrailingE => match class {
            C::Vowel | C::E => Transition::to(State::MultiVowel),
            C::Consonant | C::Y => Transition::counting(State::Consonant),
            // A final e only counts when it is the first syllable of the word
            C::Hyphen if counted_any => Transition::to(State::Hyphen),
            C::Hyphen => Transition::counting(State::Hyphen),
            C::Boundary if counted_any => stay,
            C::Boundary => Transition::counting(State::TrailingE),
            C::Other => Transition::to(State::Invalid),
            C::Apostrophe => stay,
        },
        State::SingleVowel => match class {
            C::Vowel | C::E => Transition::to(State::MultiVowel),
            C::Consonant | C::Y => Transition::counting(State::Consonant),
            C::Hyphen => Transition::counting(State::Hyphen),
            C::Boundary => Transition::counting(State::SingleVowel),
            C::Other => Transition::to(State::Invalid),
            C::Apostrophe => stay,
        },
        State::MultiVowel => match class {
            C::Consonant | C::Y => Transition::counting(State::Consonant),
            C::Hyphen => Transition::counting(State::Hyphen),
            C::Boundary => Transition::counting(State::MultiVowel),
            C::Other => Transition::to(State::Invalid),
            C::Vowel | C::E | C::Apostrophe => stay,
        },
        State::Hyphen => match class {
            C::Vowel | C::E | C::Y => Transition::to(State::SingleVowel),
            C::Consonant => Transition::to(State::Consonant),
            C::Hyphen | C::Other => Transition::to(State::Invalid),
            // A word may end right after a hyphen
            C::Boundary | C::Apostrophe => stay,
        },
        State::Invalid => stay,
    }
}
