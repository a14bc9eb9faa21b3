use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;
use strum::VariantArray;

use crate::board::Board;
use crate::location::Location;
use crate::word::{Candidate, Direction, Entry};

/// A legal position for one word, scored by how many letters it shares with
/// words already on the board.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Spot {
    pub(crate) origin: Location,
    pub(crate) direction: Direction,
    pub(crate) intersections: usize,
}

// a neighbor off the board cannot block a spot
fn blocked(board: &Board, location: Location) -> bool {
    board.is_empty(location).is_ok_and(|empty| !empty)
}

/// Judge one candidate spot, returning it scored if it is legal.
///
/// A spot is legal when, in order:
/// 1. the word's full span fits on the board;
/// 2. every span cell that is currently empty has empty neighbors on the
///    perpendicular axis; cells already holding a letter are prospective
///    crossings and are judged by the probe instead, so two words may cross
///    but never run parallel one row or column apart;
/// 3. the cells immediately before the first letter and after the last, on
///    the parallel axis, are empty, so two words cannot splice into one
///    longer unintended run;
/// 4. the board probe finds no disagreeing letter anywhere on the span.
pub(crate) fn evaluate(
    board: &Board,
    word: &str,
    origin: Location,
    direction: Direction,
) -> Option<Spot> {
    let size = board.size();
    let last = direction.walk(origin, word.len() - 1);
    if last.0 >= size || last.1 >= size {
        return None;
    }

    let (dx, dy) = direction.step();
    let (px, py) = direction.perpendicular().step();
    for i in 0..word.len() {
        let cell = direction.walk(origin, i);
        if blocked(board, cell) {
            continue;
        }
        if blocked(board, cell.offset_by((px, py))) || blocked(board, cell.offset_by((-px, -py))) {
            return None;
        }
    }
    if blocked(board, origin.offset_by((-dx, -dy))) || blocked(board, last.offset_by((dx, dy))) {
        return None;
    }

    let probe = board.can_place(word, origin, direction).ok()?;
    probe
        .valid
        .then(|| Spot { origin, direction, intersections: probe.intersections })
}

/// Find the best spot for `word` on the current board, maximizing
/// intersections with already-placed words.
///
/// Positions are scanned x-ascending, then y-ascending, then
/// [`Direction::VARIANTS`] in declaration order; the first spot seen at the
/// highest intersection count wins ties. Returns [`None`] for a word that
/// cannot fit anywhere, including any word longer than the board edge.
pub(crate) fn best_spot(board: &Board, word: &str) -> Option<Spot> {
    if word.is_empty() || word.len() > board.size() {
        return None;
    }

    let mut best: Option<Spot> = None;
    for (x, y) in (0..board.size()).cartesian_product(0..board.size()) {
        for direction in Direction::VARIANTS {
            if let Some(spot) = evaluate(board, word, Location(x, y), *direction) {
                if best.is_none_or(|b| spot.intersections > b.intersections) {
                    best = Some(spot);
                }
            }
        }
    }
    best
}

/// Place as many of `pool`'s words as possible on an empty `size × size`
/// board, committing greedily in a shuffled order.
///
/// Each committed entry immediately becomes part of the board every later
/// candidate is judged against; nothing is ever un-placed. Candidates with no
/// legal spot are skipped, so the result may use any subset of the pool.
pub(crate) fn place_all<R: Rng + ?Sized>(
    size: usize,
    pool: &[Candidate],
    rng: &mut R,
) -> Vec<Entry> {
    let mut order = pool.iter().collect_vec();
    order.shuffle(rng);

    let mut board = Board::empty(size);
    let mut entries = Vec::new();
    for candidate in order {
        let Some(spot) = best_spot(&board, candidate.word()) else {
            continue;
        };
        let entry = Entry::new(candidate.id(), candidate.word(), spot.origin, spot.direction)
            .expect("candidate words are validated at intake");
        board
            .write(&entry)
            .expect("a spot that probed valid must rasterize");
        entries.push(entry);
    }
    entries
}
