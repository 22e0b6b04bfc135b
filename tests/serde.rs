//! Serialization tests, built with `--features serde`.
#![cfg(feature = "serde")]

use pokersol::{Card, Grid, HandCategory, Line, Suit, SweepResult, sweep};

use pokersol::Suit::{Clubs, Hearts, Spades};

fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank).unwrap()
}

#[test]
fn card_round_trips_through_json() {
    let ace = card(Spades, 14);
    let json = serde_json::to_string(&ace).unwrap();
    assert_eq!(json, r#"{"suit":"Spades","rank":14}"#);
    assert_eq!(serde_json::from_str::<Card>(&json).unwrap(), ace);
}

#[test]
fn out_of_range_ranks_are_rejected() {
    for rank in [0, 1, 15, 20, 255] {
        let json = format!(r#"{{"suit":"Hearts","rank":{rank}}}"#);
        let err = serde_json::from_str::<Card>(&json).unwrap_err();
        assert!(
            err.to_string().contains(&format!("invalid card rank {rank}")),
            "{err}"
        );
    }

    assert!(serde_json::from_str::<Card>(r#"{"suit":"Stars","rank":5}"#).is_err());
    assert_eq!(
        serde_json::from_str::<Card>(r#"{"suit":"Hearts","rank":2}"#).unwrap(),
        card(Hearts, 2)
    );
}

#[test]
fn sweep_result_round_trips_through_json() {
    let mut grid = Grid::new();
    grid.set(0, 0, Some(card(Hearts, 7)));
    grid.set(0, 1, Some(card(Clubs, 7)));
    grid.set(1, 1, Some(card(Spades, 7)));

    let result = sweep(&grid).unwrap();
    assert_eq!(
        result.line(Line::Row(0)).unwrap().category,
        HandCategory::OnePair
    );

    let json = serde_json::to_string(&result).unwrap();
    let back: SweepResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result);
    assert_eq!(back.total, result.total);
    assert_eq!(back.lines.len(), result.lines.len());
}
