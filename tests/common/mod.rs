//! Shared helpers for integration tests.

#![allow(dead_code)]

use memory_match::{Deck, GameConfig, GameController, RecordingDisplay, VirtualScheduler};
use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

pub type TestGame = GameController<RecordingDisplay, VirtualScheduler>;

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `warn`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Game over a fixed layout with the default config.
pub fn fixed_game(order: &[&str]) -> TestGame {
    fixed_game_with(GameConfig::new(), order)
}

/// Game over a fixed layout with a custom config.
pub fn fixed_game_with(config: GameConfig, order: &[&str]) -> TestGame {
    init_logging();
    let deck = Deck::from_order(order.iter().copied()).expect("valid layout");
    GameController::with_deck(config, deck, RecordingDisplay::new(order.len()), VirtualScheduler::new())
        .expect("valid game")
}

/// Shuffled stock game with a pinned seed.
pub fn seeded_game(seed: u64) -> TestGame {
    init_logging();
    GameController::new(
        GameConfig::new().with_seed(seed),
        RecordingDisplay::new(12),
        VirtualScheduler::new(),
    )
    .expect("valid game")
}

/// Position of the other card showing the same face as `position`.
pub fn partner_of(game: &TestGame, position: usize) -> usize {
    let faces = game.deck().faces();
    faces
        .iter()
        .enumerate()
        .position(|(i, face)| i != position && *face == faces[position])
        .expect("every face has a partner")
}
