use std::collections::HashMap;

use rand::Rng;

use crate::board::{Board, GridError};
use crate::codec::{self, DecodeError};
use crate::placer;
use crate::word::{Candidate, Entry};

/// A fully realized crossword arrangement: a grid size plus the words placed
/// on it.
///
/// A `Layout` is a plain value. Every way of obtaining one ([`generate`](Self::generate),
/// [`new`](Self::new), or [`decode`](Self::decode)) establishes that its entries rasterize onto
/// one consistent grid, so the board derived by [`board`](Self::board) always exists.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Layout {
    size: usize,
    entries: Vec<Entry>,
}

impl Layout {
    /// The grid size interactive puzzles are generated at by default.
    pub const DEFAULT_SIZE: usize = 8;

    /// Assemble a layout from entries placed by hand, validating that they
    /// all fit the grid and agree wherever they overlap.
    pub fn new(size: usize, entries: Vec<Entry>) -> Result<Self, GridError> {
        Board::rasterize(size, &entries)?;
        Ok(Self { size, entries })
    }

    /// Generate a fresh layout from a pool of candidate words.
    ///
    /// The pool is tried in a uniformly shuffled order, so repeated calls
    /// with the same pool produce different puzzles; callers unhappy with a
    /// result simply generate again. Words that fit nowhere are left out.
    pub fn generate(size: usize, pool: &[Candidate]) -> Self {
        Self::generate_with(size, pool, &mut rand::rng())
    }

    /// [`generate`](Self::generate) with a caller-supplied randomness source,
    /// for reproducible layouts.
    ///
    /// Feeding the same seeded RNG and pool yields the same layout, which is
    /// what tests want.
    pub fn generate_with<R: Rng + ?Sized>(size: usize, pool: &[Candidate], rng: &mut R) -> Self {
        Self { size, entries: placer::place_all(size, pool, rng) }
    }

    /// The edge length of the square grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The placed words, in the order they were committed.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Rasterize the entries onto a fresh [`Board`].
    ///
    /// The board is derived state, never stored; this is the one way to
    /// obtain it and it can be called any number of times.
    pub fn board(&self) -> Board {
        Board::rasterize(self.size, &self.entries)
            .expect("a constructed layout always rasterizes")
    }

    /// Serialize this layout into its opaque base64 token.
    pub fn encode(&self) -> String {
        codec::encode(self)
    }

    /// Rebuild a layout from a token produced by [`encode`](Self::encode).
    ///
    /// Decoding is strict: a malformed or internally inconsistent token is
    /// rejected, never repaired. Callers typically respond to a rejected
    /// token by generating a fresh layout.
    pub fn decode(token: &str) -> Result<Self, DecodeError> {
        codec::decode(token)
    }

    /// Pair each placed entry with its clue, looked up by id.
    ///
    /// Entries whose id is missing from `clues` come back with [`None`] so
    /// the presentation layer can show a placeholder rather than fail.
    pub fn with_clues<'a>(
        &'a self,
        clues: &'a HashMap<u32, String>,
    ) -> Vec<(&'a Entry, Option<&'a str>)> {
        self.entries
            .iter()
            .map(|entry| (entry, clues.get(&entry.id()).map(String::as_str)))
            .collect()
    }
}
