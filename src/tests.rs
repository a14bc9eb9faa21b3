#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::board::{Board, GridError, Placement};
    use crate::codec::DecodeError;
    use crate::layout::Layout;
    use crate::location::Location;
    use crate::placer::{self, Spot};
    use crate::word::{Candidate, Direction, Entry, WordError};

    fn entry(id: u32, word: &str, x: usize, y: usize, direction: Direction) -> Entry {
        Entry::new(id, word, Location(x, y), direction).unwrap()
    }

    fn pool(words: &[(u32, &str)]) -> Vec<Candidate> {
        words
            .iter()
            .map(|(id, word)| Candidate::new(*id, *word).unwrap())
            .collect()
    }

    // every entry, checked against a board holding all the *other* entries:
    // an occupied cell must be a matching crossing, and an empty cell must
    // not have occupied perpendicular neighbors
    fn assert_isolated(layout: &Layout) {
        let entries = layout.entries();
        for (i, entry) in entries.iter().enumerate() {
            let others = entries
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .map(|(_, other)| other.clone())
                .collect::<Vec<_>>();
            let board = Board::rasterize(layout.size(), &others).unwrap();
            let (px, py) = entry.direction().perpendicular().step();
            for (k, letter) in entry.word().bytes().enumerate() {
                let cell = entry.direction().walk(entry.position(), k);
                if !board.is_empty(cell).unwrap() {
                    assert_eq!(board.letter(cell).unwrap(), Some(letter as char));
                    continue;
                }
                for neighbor in [cell.offset_by((px, py)), cell.offset_by((-px, -py))] {
                    assert!(
                        board.is_empty(neighbor).unwrap_or(true),
                        "{:?} runs beside another word at {:?} without crossing it",
                        entry.word(),
                        neighbor,
                    );
                }
            }
        }
    }

    #[test]
    fn render_crossing_words() {
        let layout = Layout::new(
            5,
            vec![
                entry(1, "CAT", 0, 0, Direction::Horizontal),
                entry(2, "TOY", 2, 0, Direction::Vertical),
            ],
        )
        .unwrap();

        assert_eq!(format!("{}", layout.board()), "CAT..
..O..
..Y..
.....
.....
");
    }

    #[test]
    fn conflicting_overlap_rejected() {
        let result = Layout::new(
            5,
            vec![
                entry(1, "CAT", 0, 0, Direction::Horizontal),
                entry(2, "DOG", 0, 0, Direction::Vertical),
            ],
        );

        assert_eq!(result.unwrap_err(), GridError::Conflict { x: 0, y: 0 });
    }

    #[test]
    fn span_must_stay_on_board() {
        let result = Layout::new(5, vec![entry(1, "CAT", 3, 0, Direction::Horizontal)]);

        assert_eq!(result.unwrap_err(), GridError::OutOfBounds { x: 5, y: 0 });
    }

    #[test]
    fn probe_reports_intersections() {
        let board =
            Board::rasterize(5, &[entry(1, "CAT", 0, 0, Direction::Horizontal)]).unwrap();

        assert_eq!(
            board.can_place("TOY", Location(2, 0), Direction::Vertical).unwrap(),
            Placement { valid: true, intersections: 1 },
        );
        // mismatch on the T stops the walk, keeping the two matches seen so far
        assert_eq!(
            board.can_place("CAP", Location(0, 0), Direction::Horizontal).unwrap(),
            Placement { valid: false, intersections: 2 },
        );
        assert_eq!(
            board.can_place("DOG", Location(0, 0), Direction::Vertical).unwrap(),
            Placement { valid: false, intersections: 0 },
        );
        assert!(matches!(
            board.can_place("HELLO", Location(3, 3), Direction::Horizontal),
            Err(GridError::OutOfBounds { .. }),
        ));
    }

    #[test]
    fn first_spot_wins_on_empty_board() {
        let board = Board::empty(5);

        assert_eq!(
            placer::best_spot(&board, "CAT"),
            Some(Spot {
                origin: Location(0, 0),
                direction: Direction::Horizontal,
                intersections: 0,
            }),
        );
    }

    #[test]
    fn crossing_beats_open_space() {
        let board =
            Board::rasterize(5, &[entry(1, "CAT", 0, 2, Direction::Horizontal)]).unwrap();

        assert_eq!(
            placer::best_spot(&board, "TOY"),
            Some(Spot {
                origin: Location(2, 2),
                direction: Direction::Vertical,
                intersections: 1,
            }),
        );
    }

    #[test]
    fn parallel_adjacency_blocked() {
        // rows 0 and 1 are unusable next to CAT; the far row is the first fit
        let board =
            Board::rasterize(3, &[entry(1, "CAT", 0, 0, Direction::Horizontal)]).unwrap();

        assert_eq!(
            placer::best_spot(&board, "DOG"),
            Some(Spot {
                origin: Location(0, 2),
                direction: Direction::Horizontal,
                intersections: 0,
            }),
        );
    }

    #[test]
    fn end_to_end_runs_blocked() {
        let board =
            Board::rasterize(5, &[entry(1, "GO", 0, 0, Direction::Horizontal)]).unwrap();

        // flush continuation of GO on the same row
        assert_eq!(placer::evaluate(&board, "AT", Location(2, 0), Direction::Horizontal), None);
        // one row below, no crossing
        assert_eq!(placer::evaluate(&board, "AT", Location(0, 1), Direction::Horizontal), None);
        // crossing through the G is legal
        let spot = placer::evaluate(&board, "GUM", Location(0, 0), Direction::Vertical).unwrap();
        assert_eq!(spot.intersections, 1);
    }

    #[test]
    fn small_pool_places_every_word() {
        let words = pool(&[(1, "CAT"), (2, "CAR")]);

        for seed in 0..10 {
            let layout = Layout::generate_with(5, &words, &mut StdRng::seed_from_u64(seed));
            assert_eq!(layout.entries().len(), 2, "seed {seed}");
            layout.board();
            assert_isolated(&layout);
        }
    }

    #[test]
    fn oversized_word_never_places() {
        let layout =
            Layout::generate_with(3, &pool(&[(1, "HELLO")]), &mut StdRng::seed_from_u64(0));

        assert!(layout.entries().is_empty());
        assert_eq!(format!("{}", layout.board()), "...
...
...
");
    }

    #[test]
    fn generated_layouts_stay_consistent() {
        let words = pool(&[
            (1, "APPLE"),
            (2, "PEAR"),
            (3, "PLUM"),
            (4, "CHERRY"),
            (5, "GRAPE"),
            (6, "LEMON"),
            (7, "LIME"),
            (8, "MANGO"),
        ]);

        for seed in 0..20 {
            let layout =
                Layout::generate_with(Layout::DEFAULT_SIZE, &words, &mut StdRng::seed_from_u64(seed));

            // rasterizes without conflict and entirely in bounds
            layout.board();
            assert_isolated(&layout);
            // placed words are a subset of the pool, by id and text
            for placed in layout.entries() {
                assert!(words
                    .iter()
                    .any(|candidate| candidate.id() == placed.id()
                        && candidate.word() == placed.word()));
            }
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let words = pool(&[(1, "NORTH"), (2, "SOUTH"), (3, "EAST"), (4, "WEST")]);

        let first = Layout::generate_with(8, &words, &mut StdRng::seed_from_u64(9));
        let second = Layout::generate_with(8, &words, &mut StdRng::seed_from_u64(9));

        assert_eq!(first, second);
    }

    #[test]
    fn token_round_trip() {
        let layout =
            Layout::new(4, vec![entry(7, "GO", 0, 0, Direction::Horizontal)]).unwrap();

        let token = layout.encode();
        assert_eq!(token, "NHw3LEdPLDAsMCww");
        assert_eq!(Layout::decode(&token).unwrap(), layout);
    }

    #[test]
    fn empty_layout_round_trip() {
        let layout = Layout::new(3, vec![]).unwrap();

        assert_eq!(layout.encode(), "Mw==");
        assert_eq!(Layout::decode("Mw==").unwrap(), layout);
    }

    #[test]
    fn generated_token_round_trip() {
        let words = pool(&[(1, "STONE"), (2, "TONGS"), (3, "NOTES"), (4, "ONSET")]);

        for seed in 0..10 {
            let layout = Layout::generate_with(6, &words, &mut StdRng::seed_from_u64(seed));
            assert_eq!(Layout::decode(&layout.encode()).unwrap(), layout, "seed {seed}");
        }
    }

    #[test]
    fn malformed_tokens_rejected() {
        for token in [
            // not base64 at all
            "%%%",
            // x|1,CAT,0,0,0: non-numeric size
            "eHwxLENBVCwwLDAsMA==",
            // 5|1,CAT,0,0: four sub-fields
            "NXwxLENBVCwwLDA=",
            // 5|1,CAT,0,0,7: unknown orientation code
            "NXwxLENBVCwwLDAsNw==",
            // 5|1,,0,0,0: empty word
            "NXwxLCwwLDAsMA==",
            // 3|: dangling separator
            "M3w=",
        ] {
            assert!(
                matches!(Layout::decode(token), Err(DecodeError::InvalidFormat(_))),
                "{token}",
            );
        }
    }

    #[test]
    fn inconsistent_tokens_rejected() {
        // 5|1,CAT,0,0,0|2,DOG,0,0,1: C and D fight over (0, 0)
        assert!(matches!(
            Layout::decode("NXwxLENBVCwwLDAsMHwyLERPRywwLDAsMQ=="),
            Err(DecodeError::Grid(GridError::Conflict { x: 0, y: 0 })),
        ));
        // 3|1,HELLO,0,0,0: runs off a size-3 board
        assert!(matches!(
            Layout::decode("M3wxLEhFTExPLDAsMCww"),
            Err(DecodeError::Grid(GridError::OutOfBounds { x: 3, y: 0 })),
        ));
    }

    #[test]
    fn words_validated_at_intake() {
        assert_eq!(Candidate::new(1, "").unwrap_err(), WordError::Empty);
        assert_eq!(Candidate::new(1, "A|B").unwrap_err(), WordError::Character('|'));
        assert_eq!(Candidate::new(1, "NO,PE").unwrap_err(), WordError::Character(','));
        assert!(Candidate::new(1, "lowercase").is_ok());
        assert_eq!(
            Entry::new(1, "B AD", Location(0, 0), Direction::Horizontal).unwrap_err(),
            WordError::Character(' '),
        );
    }

    #[test]
    fn missing_clues_become_placeholders() {
        let layout = Layout::new(
            5,
            vec![
                entry(1, "CAT", 0, 0, Direction::Horizontal),
                entry(2, "TOY", 2, 0, Direction::Vertical),
            ],
        )
        .unwrap();
        let clues = HashMap::from([(1, "Feline".to_string())]);

        let paired = layout.with_clues(&clues);
        assert_eq!(paired[0], (&layout.entries()[0], Some("Feline")));
        assert_eq!(paired[1].1, None);
    }

    #[test]
    fn zero_size_board() {
        let layout = Layout::generate_with(0, &pool(&[(1, "A")]), &mut StdRng::seed_from_u64(0));

        assert!(layout.entries().is_empty());
        assert_eq!(format!("{}", layout.board()), "");
        assert_eq!(Layout::decode(&layout.encode()).unwrap(), layout);
    }
}
