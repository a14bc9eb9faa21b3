use strum::VariantArray;

use crate::location::{Coord, Location};

/// The orientation of a placed word.
///
/// The declaration order doubles as the search order: when two spots tie on
/// intersection count, a [`Horizontal`](Direction::Horizontal) spot found at
/// the same position wins over a [`Vertical`](Direction::Vertical) one.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug)]
pub enum Direction {
    /// Letters run left to right.
    Horizontal,
    /// Letters run top to bottom.
    Vertical,
}

impl Direction {
    /// The unit step from one letter of a word to the next.
    pub(crate) fn step(&self) -> (isize, isize) {
        match self {
            Self::Horizontal => (1, 0),
            Self::Vertical => (0, 1),
        }
    }

    /// The axis words cross this one on.
    pub(crate) fn perpendicular(&self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// The cell holding the `i`th letter of a word starting at `origin`.
    pub(crate) fn walk(&self, origin: Location, i: Coord) -> Location {
        match self {
            Self::Horizontal => Location(origin.0 + i, origin.1),
            Self::Vertical => Location(origin.0, origin.1 + i),
        }
    }

    pub(crate) fn code(&self) -> u8 {
        match self {
            Self::Horizontal => 0,
            Self::Vertical => 1,
        }
    }

    pub(crate) fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Horizontal),
            1 => Some(Self::Vertical),
            _ => None,
        }
    }
}

/// Reasons a word is rejected at intake.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum WordError {
    /// The word has no letters.
    #[error("word is empty")]
    Empty,
    /// The word contains something other than an ASCII letter.
    /// This also keeps the `|` and `,` separators of the token format out of words,
    /// where they would make the encoding ambiguous.
    #[error("word contains {0:?}; only ASCII letters are allowed")]
    Character(char),
}

fn check_word(word: &str) -> Result<(), WordError> {
    if word.is_empty() {
        return Err(WordError::Empty);
    }
    match word.chars().find(|ch| !ch.is_ascii_alphabetic()) {
        Some(ch) => Err(WordError::Character(ch)),
        None => Ok(()),
    }
}

/// An unplaced word offered to [`Layout::generate`](crate::Layout::generate), keyed by the id of
/// its clue in whatever store the caller keeps words in.
///
/// Candidates are validated once, on construction; the placement engine takes them at face value.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Candidate {
    id: u32,
    word: String,
}

impl Candidate {
    /// Validate `word` and wrap it up with its external id.
    pub fn new(id: u32, word: impl Into<String>) -> Result<Self, WordError> {
        let word = word.into();
        check_word(&word)?;
        Ok(Self { id, word })
    }

    /// The id of this word in the caller's word/clue store.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// The letters to place.
    pub fn word(&self) -> &str {
        &self.word
    }
}

/// One placed word: identity, letters, origin cell, and orientation.
///
/// Entries are immutable and never move once committed; a layout is rebuilt
/// from scratch for each generation run rather than edited in place.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Entry {
    id: u32,
    word: String,
    position: Location,
    direction: Direction,
}

impl Entry {
    /// Build an entry by hand, applying the same word validation as [`Candidate::new`].
    ///
    /// Bounds and overlap validity are properties of a whole layout, not of a single
    /// entry, and are checked when entries are rasterized together.
    pub fn new(
        id: u32,
        word: impl Into<String>,
        position: Location,
        direction: Direction,
    ) -> Result<Self, WordError> {
        let word = word.into();
        check_word(&word)?;
        Ok(Self { id, word, position, direction })
    }

    /// The id of this word in the caller's word/clue store.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// The placed letters.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The cell holding the first letter.
    pub fn position(&self) -> Location {
        self.position
    }

    /// Which way the letters run.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub(crate) fn letters(&self) -> impl Iterator<Item = (Location, u8)> + '_ {
        letters_of(&self.word, self.position, self.direction)
    }
}

/// Walk a word's letters cell by cell from `origin` along `direction`.
pub(crate) fn letters_of(
    word: &str,
    origin: Location,
    direction: Direction,
) -> impl Iterator<Item = (Location, u8)> + '_ {
    word.bytes().enumerate().map(move |(i, letter)| (direction.walk(origin, i), letter))
}
