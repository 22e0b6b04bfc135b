use pokersol::{Card, Game, GameOptions, GameState, LineScore, Placement, SweepResult};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32, high_score: u32) -> Self {
        let options = GameOptions::default().with_high_score(high_score);
        Self {
            game: Game::new(options, seed as u64),
        }
    }

    pub fn reset(&mut self, seed: u32) {
        let options = GameOptions::default().with_high_score(self.game.high_score());
        self.game = Game::new(options, seed as u64);
    }

    pub fn place(&self, row: u32, col: u32) -> Result<JsValue, JsValue> {
        let placement = self
            .game
            .place(row as usize, col as usize)
            .map_err(js_err)?;
        to_js_value(&JsPlacement::from(placement))
    }

    pub fn new_game(&self) -> Result<(), JsValue> {
        self.game.new_game().map_err(js_err)
    }

    pub fn high_score(&self) -> u32 {
        self.game.high_score()
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let grid = self.game.grid();
        let cells = grid
            .rows()
            .iter()
            .map(|row| row.iter().map(|cell| (*cell).map(card_to_js)).collect())
            .collect();

        let snapshot = Snapshot {
            state: state_to_str(self.game.state()),
            grid: cells,
            next_card: self.game.next_card().map(card_to_js),
            score: JsScore::from(self.game.last_score()),
            high_score: self.game.high_score(),
            cards_placed: self.game.cards_placed() as u32,
            cards_remaining: self.game.cards_remaining() as u32,
        };

        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
struct Snapshot {
    state: &'static str,
    grid: Vec<Vec<Option<JsCard>>>,
    next_card: Option<JsCard>,
    score: JsScore,
    high_score: u32,
    cards_placed: u32,
    cards_remaining: u32,
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: u8,
    label: String,
}

#[derive(Serialize)]
struct JsLine {
    line: String,
    category: &'static str,
    points: u32,
    text: String,
}

impl From<&LineScore> for JsLine {
    fn from(score: &LineScore) -> Self {
        Self {
            line: score.line.to_string(),
            category: score.category.label(),
            points: score.points,
            text: score.to_string(),
        }
    }
}

#[derive(Serialize)]
struct JsScore {
    lines: Vec<JsLine>,
    total: u32,
}

impl From<SweepResult> for JsScore {
    fn from(result: SweepResult) -> Self {
        Self {
            lines: result.lines.iter().map(JsLine::from).collect(),
            total: result.total,
        }
    }
}

#[derive(Serialize)]
struct JsPlacement {
    card: JsCard,
    row: u32,
    col: u32,
    score: Option<JsScore>,
    game_over: bool,
}

impl From<Placement> for JsPlacement {
    fn from(placement: Placement) -> Self {
        Self {
            card: card_to_js(placement.card),
            row: placement.row as u32,
            col: placement.col as u32,
            score: placement.score.map(JsScore::from),
            game_over: placement.game_over,
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: card.suit_name(),
        rank: card.rank(),
        label: card.short_name(),
    }
}

fn state_to_str(state: GameState) -> &'static str {
    match state {
        GameState::Placing => "Placing",
        GameState::GameOver => "GameOver",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
