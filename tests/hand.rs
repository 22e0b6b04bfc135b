//! Classifier, accumulator, score table, and board sweep tests.

use pokersol::{
    Card, CardError, GRID_SIZE, Grid, Hand, HandCategory, HandError, HandState, LINE_COUNT, Line,
    SCORE_TABLE, Suit, classify, score, sweep,
};

use pokersol::Suit::{Clubs, Diamonds, Hearts, Spades};

fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank).unwrap()
}

fn category(cards: &[Card]) -> HandCategory {
    classify(cards).unwrap()
}

fn permutations(cards: &[Card]) -> Vec<Vec<Card>> {
    if cards.len() <= 1 {
        return vec![cards.to_vec()];
    }
    let mut out = Vec::new();
    for i in 0..cards.len() {
        let mut rest = cards.to_vec();
        let first = rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, first);
            out.push(tail);
        }
    }
    out
}

/// Rows of the sample board used by the sweep tests, scoring 288 points.
fn sample_rows() -> [[Card; GRID_SIZE]; GRID_SIZE] {
    [
        [
            card(Spades, 10),
            card(Spades, 11),
            card(Spades, 12),
            card(Spades, 13),
            card(Spades, 14),
        ],
        [
            card(Hearts, 2),
            card(Diamonds, 2),
            card(Clubs, 2),
            card(Spades, 2),
            card(Hearts, 3),
        ],
        [
            card(Hearts, 4),
            card(Hearts, 5),
            card(Hearts, 6),
            card(Hearts, 7),
            card(Hearts, 9),
        ],
        [
            card(Diamonds, 3),
            card(Diamonds, 4),
            card(Clubs, 5),
            card(Spades, 6),
            card(Diamonds, 7),
        ],
        [
            card(Clubs, 8),
            card(Diamonds, 8),
            card(Clubs, 9),
            card(Diamonds, 9),
            card(Hearts, 13),
        ],
    ]
}

fn full_grid(rows: [[Card; GRID_SIZE]; GRID_SIZE]) -> Grid {
    Grid::from_rows(rows.map(|row| row.map(Some)))
}

#[test]
fn card_construction_and_names() {
    let ace = card(Spades, 14);
    assert_eq!(ace.rank(), 14);
    assert_eq!(ace.suit(), Spades);
    assert_eq!(ace.rank_name(), "Ace");
    assert_eq!(ace.suit_name(), "Spades");
    assert_eq!(ace.to_string(), "Ace of Spades");
    assert_eq!(ace.short_name(), "AS");

    let ten = card(Hearts, 10);
    assert_eq!(ten.rank_name(), "10");
    assert_eq!(ten.short_name(), "10H");
    assert_eq!(card(Clubs, 11).rank_name(), "Jack");
    assert_eq!(card(Clubs, 12).rank_name(), "Queen");
    assert_eq!(card(Diamonds, 13).to_string(), "King of Diamonds");

    assert_eq!(Card::new(Hearts, 1), Err(CardError::InvalidRank(1)));
    assert_eq!(Card::new(Hearts, 15), Err(CardError::InvalidRank(15)));
    assert_eq!(Card::from_indices(5, 4), Err(CardError::InvalidSuit(4)));
    assert_eq!(Card::from_indices(5, 2), Ok(card(Clubs, 5)));
    assert_eq!(Suit::try_from(3), Ok(Spades));
}

#[test]
fn empty_hand_is_nothing() {
    assert_eq!(category(&[]), HandCategory::Nothing);
    assert_eq!(category(&[]).points(), 0);
}

#[test]
fn five_card_categories() {
    let full_house = [
        card(Clubs, 2),
        card(Diamonds, 2),
        card(Spades, 3),
        card(Hearts, 3),
        card(Diamonds, 3),
    ];
    assert_eq!(category(&full_house), HandCategory::FullHouse);
    assert_eq!(category(&full_house).points(), 9);

    let straight_flush = [
        card(Spades, 4),
        card(Spades, 5),
        card(Spades, 6),
        card(Spades, 7),
        card(Spades, 8),
    ];
    assert_eq!(category(&straight_flush), HandCategory::StraightFlush);
    assert_eq!(category(&straight_flush).points(), 50);

    let royal = [
        card(Hearts, 10),
        card(Hearts, 11),
        card(Hearts, 12),
        card(Hearts, 13),
        card(Hearts, 14),
    ];
    assert_eq!(category(&royal), HandCategory::RoyalFlush);
    assert_eq!(category(&royal).points(), 250);

    let wheel = [
        card(Clubs, 14),
        card(Diamonds, 2),
        card(Spades, 3),
        card(Hearts, 4),
        card(Clubs, 5),
    ];
    assert_eq!(category(&wheel), HandCategory::Straight);
    assert_eq!(category(&wheel).points(), 4);

    let nothing = [
        card(Clubs, 2),
        card(Diamonds, 7),
        card(Spades, 9),
        card(Hearts, 11),
        card(Clubs, 13),
    ];
    assert_eq!(category(&nothing), HandCategory::Nothing);

    let four = [
        card(Clubs, 9),
        card(Diamonds, 9),
        card(Spades, 9),
        card(Hearts, 9),
        card(Clubs, 13),
    ];
    assert_eq!(category(&four), HandCategory::FourOfAKind);

    let flush = [
        card(Diamonds, 2),
        card(Diamonds, 7),
        card(Diamonds, 9),
        card(Diamonds, 11),
        card(Diamonds, 13),
    ];
    assert_eq!(category(&flush), HandCategory::Flush);
    assert_eq!(category(&flush).points(), 6);

    let two_pair = [
        card(Clubs, 4),
        card(Diamonds, 4),
        card(Spades, 12),
        card(Hearts, 12),
        card(Clubs, 13),
    ];
    assert_eq!(category(&two_pair), HandCategory::TwoPair);
}

#[test]
fn wheel_is_the_only_wrapping_straight() {
    let wrap = [
        card(Clubs, 12),
        card(Diamonds, 13),
        card(Spades, 14),
        card(Hearts, 2),
        card(Clubs, 3),
    ];
    assert_eq!(category(&wrap), HandCategory::Nothing);

    let steel_wheel = [
        card(Clubs, 14),
        card(Clubs, 2),
        card(Clubs, 3),
        card(Clubs, 4),
        card(Clubs, 5),
    ];
    assert_eq!(category(&steel_wheel), HandCategory::StraightFlush);

    let broadway = [
        card(Clubs, 10),
        card(Diamonds, 11),
        card(Spades, 12),
        card(Hearts, 13),
        card(Clubs, 14),
    ];
    assert_eq!(category(&broadway), HandCategory::Straight);
}

#[test]
fn partial_hands_only_score_rank_groups() {
    let four_hearts = [
        card(Hearts, 2),
        card(Hearts, 3),
        card(Hearts, 4),
        card(Hearts, 5),
    ];
    assert_eq!(category(&four_hearts), HandCategory::Nothing);
    assert_eq!(category(&four_hearts[..1]), HandCategory::Nothing);

    assert_eq!(
        category(&[card(Hearts, 7), card(Clubs, 7)]),
        HandCategory::OnePair
    );
    assert_eq!(
        category(&[card(Hearts, 7), card(Clubs, 7), card(Spades, 3)]),
        HandCategory::OnePair
    );
    assert_eq!(
        category(&[card(Hearts, 7), card(Clubs, 7), card(Spades, 7)]),
        HandCategory::ThreeOfAKind
    );
    assert_eq!(
        category(&[
            card(Hearts, 7),
            card(Clubs, 7),
            card(Spades, 3),
            card(Diamonds, 3)
        ]),
        HandCategory::TwoPair
    );
    assert_eq!(
        category(&[
            card(Hearts, 7),
            card(Clubs, 7),
            card(Spades, 7),
            card(Diamonds, 7)
        ]),
        HandCategory::FourOfAKind
    );
}

#[test]
fn classification_ignores_order() {
    let hands = [
        [
            card(Clubs, 2),
            card(Diamonds, 2),
            card(Spades, 3),
            card(Hearts, 3),
            card(Diamonds, 3),
        ],
        [
            card(Clubs, 14),
            card(Diamonds, 2),
            card(Spades, 3),
            card(Hearts, 4),
            card(Clubs, 5),
        ],
        [
            card(Hearts, 10),
            card(Hearts, 11),
            card(Hearts, 12),
            card(Hearts, 13),
            card(Hearts, 14),
        ],
    ];

    for hand in hands {
        let expected = category(&hand);
        for permutation in permutations(&hand) {
            assert_eq!(category(&permutation), expected);
        }
    }
}

#[test]
fn invalid_hands_are_rejected() {
    let six = [
        card(Clubs, 2),
        card(Clubs, 3),
        card(Clubs, 4),
        card(Clubs, 5),
        card(Clubs, 6),
        card(Clubs, 7),
    ];
    assert_eq!(classify(&six), Err(HandError::TooManyCards(6)));

    let duplicate = [card(Clubs, 2), card(Hearts, 9), card(Clubs, 2)];
    assert_eq!(
        classify(&duplicate),
        Err(HandError::DuplicateCard(card(Clubs, 2)))
    );
}

#[test]
fn score_table_values() {
    let expected = [
        (0, "Nothing"),
        (1, "One Pair"),
        (2, "Two Pairs"),
        (3, "Three of a Kind"),
        (4, "Straight"),
        (6, "Flush"),
        (9, "Full House"),
        (25, "Four of a Kind"),
        (50, "Straight Flush"),
        (250, "Royal Flush"),
    ];

    for (category, (points, label)) in HandCategory::ALL.into_iter().zip(expected) {
        assert_eq!(score(category).points, points);
        assert_eq!(score(category).label, label);
        assert_eq!(category.to_string(), label);
    }

    for (category, entry) in SCORE_TABLE {
        assert_eq!(entry, score(category));
    }

    assert!(HandCategory::RoyalFlush > HandCategory::StraightFlush);
    assert!(HandCategory::OnePair > HandCategory::Nothing);
}

#[test]
fn accumulator_lifecycle() {
    let mut hand = Hand::new();
    assert_eq!(hand.state(), HandState::Empty);
    assert_eq!(hand.evaluate(), Ok(HandCategory::Nothing));

    hand.add(card(Hearts, 9)).unwrap();
    hand.add(card(Spades, 9)).unwrap();
    assert_eq!(hand.state(), HandState::Accumulating);
    assert_eq!(hand.evaluate(), Ok(HandCategory::OnePair));
    assert_eq!(hand.evaluate(), Ok(HandCategory::OnePair));
    assert_eq!(hand.len(), 2);

    hand.add(card(Clubs, 9)).unwrap();
    hand.add(card(Diamonds, 9)).unwrap();
    hand.add(card(Hearts, 4)).unwrap();
    assert!(hand.is_full());
    assert_eq!(hand.add(card(Hearts, 5)), Err(HandError::Full));
    assert_eq!(hand.evaluate(), Ok(HandCategory::FourOfAKind));

    hand.reset();
    assert!(hand.is_empty());
    assert_eq!(hand.state(), HandState::Empty);
    assert_eq!(hand.evaluate(), Ok(HandCategory::Nothing));
}

#[test]
fn sweep_empty_grid() {
    let result = sweep(&Grid::new()).unwrap();
    assert_eq!(result.lines.len(), LINE_COUNT);
    assert_eq!(result.total, 0);
    assert!(
        result
            .lines
            .iter()
            .all(|line| line.category == HandCategory::Nothing && line.points == 0)
    );

    let order: Vec<Line> = result.lines.iter().map(|line| line.line).collect();
    assert_eq!(order, Line::ALL);
}

#[test]
fn sweep_full_grid() {
    let grid = full_grid(sample_rows());
    assert!(grid.is_full());

    let result = sweep(&grid).unwrap();
    let categories: Vec<HandCategory> = result.lines.iter().map(|line| line.category).collect();
    assert_eq!(
        categories,
        [
            HandCategory::RoyalFlush,
            HandCategory::FourOfAKind,
            HandCategory::Flush,
            HandCategory::Straight,
            HandCategory::TwoPair,
            HandCategory::Nothing,
            HandCategory::Nothing,
            HandCategory::Nothing,
            HandCategory::Nothing,
            HandCategory::Nothing,
            HandCategory::OnePair,
            HandCategory::Nothing,
        ]
    );
    assert_eq!(result.total, 288);

    let royal = result.line(Line::Row(0)).unwrap();
    assert_eq!(royal.points, 250);
    assert_eq!(royal.to_string(), "Row 1: Royal Flush (250 points)");
    assert_eq!(
        result
            .lines
            .iter()
            .filter(|line| line.category == HandCategory::RoyalFlush)
            .count(),
        1
    );
    assert_eq!(
        result.line(Line::Diagonal(0)).unwrap().to_string(),
        "Diagonal 1: One Pair (1 points)"
    );
}

#[test]
fn sweep_scores_partial_lines() {
    let mut grid = Grid::new();
    grid.set(0, 0, Some(card(Hearts, 8)));
    grid.set(0, 3, Some(card(Clubs, 8)));
    grid.set(4, 0, Some(card(Spades, 8)));

    let result = sweep(&grid).unwrap();
    assert_eq!(
        result.line(Line::Row(0)).unwrap().category,
        HandCategory::OnePair
    );
    assert_eq!(
        result.line(Line::Column(0)).unwrap().category,
        HandCategory::OnePair
    );
    assert_eq!(
        result.line(Line::Diagonal(1)).unwrap().category,
        HandCategory::Nothing
    );
    assert_eq!(result.total, 2);
    assert_eq!(grid.occupied(), 3);
}

#[test]
fn sweep_propagates_duplicate_cards() {
    let mut grid = Grid::new();
    grid.set(2, 1, Some(card(Hearts, 8)));
    grid.set(2, 4, Some(card(Hearts, 8)));

    assert_eq!(
        sweep(&grid).unwrap_err(),
        HandError::DuplicateCard(card(Hearts, 8))
    );
}

#[test]
fn line_cells_and_labels() {
    assert_eq!(
        Line::Diagonal(1).cells(),
        [(0, 4), (1, 3), (2, 2), (3, 1), (4, 0)]
    );
    assert_eq!(
        Line::Column(2).cells(),
        [(0, 2), (1, 2), (2, 2), (3, 2), (4, 2)]
    );
    assert_eq!(Line::Row(4).to_string(), "Row 5");
    assert_eq!(Line::Column(0).to_string(), "Column 1");
    assert_eq!(Line::Diagonal(1).to_string(), "Diagonal 2");
    assert_eq!(Line::Row(u8::MAX).to_string(), "Row 256");
    assert_eq!(Line::Diagonal(u8::MAX).to_string(), "Diagonal 256");
}
