#![warn(missing_docs)]

//! # `gridlock`
//!
//! A crossword layout generator.
//! Given a pool of candidate words, [`Layout::generate`] places as many of them as possible onto a fixed-size square grid so that placed words intersect legally,
//! then [`Layout::encode`] serializes the result into a compact, reversible base64 token suitable for a URL or a storage field.
//! [`Layout::decode`] is the exact inverse and re-validates everything it reads.
//!
//! Words and clues live elsewhere; this crate only sees `{id, word}` pairs and hands back placements keyed by the same ids.
//! Pair a decoded layout back up with its clues via [`Layout::with_clues`].
//!
//! # Internals
//! Placement is a greedy, single-pass search: candidates are processed in a uniformly shuffled order, and for each one every grid position and orientation is scored
//! by how many cells it would share with already-placed words. The best-scoring legal spot is committed immediately and never revisited.
//! The shuffle is the sole source of non-determinism; regenerating from the same pool yields a different puzzle each time, which is the intended variety mechanism.
//! Pass your own [`rand::Rng`] to [`Layout::generate_with`] when reproducibility matters.
//!
//! A spot is legal when the word fits on the board, agrees with every letter it overlaps, and does not run parallel-adjacent to another word without crossing it.

pub use board::{Board, GridError, Placement};
pub use codec::DecodeError;
pub use layout::Layout;
pub use location::Location;
pub use word::{Candidate, Direction, Entry, WordError};

pub(crate) mod board;
mod tests;
pub(crate) mod codec;
pub(crate) mod layout;
pub(crate) mod location;
pub(crate) mod placer;
pub(crate) mod word;

#[cfg(feature = "wasm")]
pub mod wasm;
