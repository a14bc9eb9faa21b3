use std::fmt::{Display, Formatter};

use ndarray::Array2;

use crate::location::Location;
use crate::word::{letters_of, Direction, Entry};

/// The in-buffer sentinel for a cell no word covers.
pub(crate) const EMPTY: u8 = b' ';

/// Ways a set of entries can fail to fit a board.
///
/// Neither condition should arise while generating a layout; the placement
/// engine only commits spots it has already validated. Both arise routinely
/// while decoding, where they mean the token was corrupted or hand-edited.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum GridError {
    /// A letter landed outside the `[0, size)` square.
    #[error("cell ({x}, {y}) is outside the board")]
    OutOfBounds {
        /// Column of the offending cell.
        x: usize,
        /// Row of the offending cell.
        y: usize,
    },
    /// Two words disagree about the letter in one cell.
    #[error("conflicting letters at ({x}, {y})")]
    Conflict {
        /// Column of the offending cell.
        x: usize,
        /// Row of the offending cell.
        y: usize,
    },
}

/// The verdict of a read-only placement probe. See [`Board::can_place`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Placement {
    /// Whether every cell of the probed word is either empty or already holds
    /// the same letter.
    pub valid: bool,
    /// How many cells of the probed word coincide with matching letters
    /// already on the board. Counted up to the first mismatch when invalid.
    pub intersections: usize,
}

/// A square grid of letter cells, rasterized from a set of [`Entry`]s.
///
/// The board is always derived state: it can be rebuilt at any time from a
/// layout's size and entries, and rebuilding doubles as a consistency check.
/// All cell access is bounds-checked; out-of-range coordinates surface as
/// [`GridError::OutOfBounds`] rather than wrapping into a neighboring row.
pub struct Board {
    size: usize,
    cells: Array2<u8>,
}

impl Board {
    /// An all-empty `size × size` board.
    pub fn empty(size: usize) -> Self {
        Self { size, cells: Array2::from_elem((size, size), EMPTY) }
    }

    /// Build a board of the given size and write every entry onto it, in order.
    ///
    /// Two entries writing the same letter to a cell is how a legitimate
    /// crossing looks and is not an error; disagreeing letters are a
    /// [`GridError::Conflict`].
    pub fn rasterize(size: usize, entries: &[Entry]) -> Result<Self, GridError> {
        let mut board = Self::empty(size);
        for entry in entries {
            board.write(entry)?;
        }
        Ok(board)
    }

    /// The edge length of the square grid.
    pub fn size(&self) -> usize {
        self.size
    }

    fn checked(&self, location: Location) -> Result<(usize, usize), GridError> {
        let Location(x, y) = location;
        if x >= self.size || y >= self.size {
            return Err(GridError::OutOfBounds { x, y });
        }
        Ok(location.as_index())
    }

    pub(crate) fn cell(&self, location: Location) -> Result<u8, GridError> {
        let index = self.checked(location)?;
        Ok(self.cells[index])
    }

    /// Whether the cell at `location` is empty.
    pub fn is_empty(&self, location: Location) -> Result<bool, GridError> {
        Ok(self.cell(location)? == EMPTY)
    }

    /// The letter at `location`, or [`None`] for an empty cell.
    pub fn letter(&self, location: Location) -> Result<Option<char>, GridError> {
        Ok(match self.cell(location)? {
            EMPTY => None,
            letter => Some(letter as char),
        })
    }

    /// Rasterize one entry onto the live board.
    pub(crate) fn write(&mut self, entry: &Entry) -> Result<(), GridError> {
        for (location, letter) in entry.letters() {
            let index = self.checked(location)?;
            let cell = &mut self.cells[index];
            if *cell == EMPTY {
                *cell = letter;
            } else if *cell != letter {
                let Location(x, y) = location;
                return Err(GridError::Conflict { x, y });
            }
        }
        Ok(())
    }

    /// Probe a prospective word against the current board without mutating it.
    ///
    /// Walks the word's cells from `origin` along `direction`: an empty cell is
    /// fine, a cell holding the same letter counts as an intersection, and a
    /// cell holding a different letter invalidates the spot on the spot.
    pub fn can_place(
        &self,
        word: &str,
        origin: Location,
        direction: Direction,
    ) -> Result<Placement, GridError> {
        let mut intersections = 0;
        for (location, letter) in letters_of(word, origin, direction) {
            let cell = self.cell(location)?;
            if cell == letter {
                intersections += 1;
            } else if cell != EMPTY {
                return Ok(Placement { valid: false, intersections });
            }
        }
        Ok(Placement { valid: true, intersections })
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut out = String::with_capacity(self.size * (self.size + 1));
        for row in self.cells.rows() {
            for cell in row {
                out.push(match *cell {
                    EMPTY => '.',
                    letter => letter as char,
                });
            }
            out.push('\n');
        }
        write!(f, "{}", out)
    }
}
