//! The game controller.
//!
//! Owns every piece of mutable game state: the board, the pending
//! selections, the tries counter, the play flag and the single hide timer.
//! Hosts drive it with three calls:
//!
//! - `handle_click` for every click inside the card container
//! - `handle_selection` to pick a slot directly (bypasses the click filter)
//! - `on_timer` when a scheduled hide comes due
//!
//! ## Turn flow
//!
//! ```text
//! Empty --pick--> OnePending --pick--> Resolving --match----> Empty (play on)
//!                                                 \-mismatch-> Empty (play off until hide)
//! ```

use smallvec::SmallVec;

use super::events::ClickTarget;
use super::snapshot::GameSnapshot;
use super::turn::{IgnoreReason, Selection, SelectionOutcome, TurnPhase};
use crate::board::{Board, SlotId};
use crate::cards::Deck;
use crate::core::{GameConfig, GameRng, GameRngState, MemoryError, Result};
use crate::display::{tries_text, DisplayLayer};
use crate::timer::{Scheduler, TimerId, VirtualScheduler};

/// Single-owner game state plus its display and scheduler.
///
/// ## Example
///
/// ```
/// use memory_match::controller::{GameController, SelectionOutcome};
/// use memory_match::cards::Deck;
/// use memory_match::core::GameConfig;
/// use memory_match::display::RecordingDisplay;
/// use memory_match::timer::VirtualScheduler;
///
/// let deck = Deck::from_order(["bird", "bird", "cat", "cat"]).unwrap();
/// let mut game = GameController::with_deck(
///     GameConfig::new(),
///     deck,
///     RecordingDisplay::new(4),
///     VirtualScheduler::new(),
/// )
/// .unwrap();
///
/// game.handle_selection(0).unwrap();
/// let outcome = game.handle_selection(1).unwrap();
/// assert!(matches!(outcome, SelectionOutcome::Matched { tries: 1, .. }));
/// ```
pub struct GameController<D, S> {
    config: GameConfig,
    deck: Deck,
    board: Board,
    rng_state: Option<GameRngState>,

    /// Picks of the current turn. Resolution takes both out, so between
    /// calls this holds at most one.
    pending: SmallVec<[Selection; 2]>,
    phase: TurnPhase,
    tries: u32,
    can_play: bool,
    hide_timer: Option<TimerId>,

    display: D,
    scheduler: S,
}

impl<D: DisplayLayer, S: Scheduler> GameController<D, S> {
    /// Shuffle a deck from `config` and set up a fresh game.
    ///
    /// Uses `config.seed` when present, entropy otherwise.
    pub fn new(config: GameConfig, display: D, scheduler: S) -> Result<Self> {
        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let deck = Deck::shuffled(&config, &mut rng)?;

        let mut game = Self::with_deck(config, deck, display, scheduler)?;
        game.rng_state = Some(rng.state());
        Ok(game)
    }

    /// Set up a game over an already ordered deck.
    ///
    /// The config's face list is ignored; its delay, assets and label apply.
    pub fn with_deck(config: GameConfig, deck: Deck, display: D, scheduler: S) -> Result<Self> {
        if deck.is_empty() {
            return Err(MemoryError::EmptyDeck);
        }
        if config.hide_delay_ms == 0 {
            return Err(MemoryError::InvalidDelay);
        }

        let board = Board::new(deck.len());
        let mut game = Self {
            config,
            deck,
            board,
            rng_state: None,
            pending: SmallVec::new(),
            phase: TurnPhase::Empty,
            tries: 0,
            can_play: true,
            hide_timer: None,
            display,
            scheduler,
        };
        game.render_tries();

        tracing::info!(cards = game.deck.len(), pairs = game.deck.pair_count(), "game ready");
        Ok(game)
    }

    // === Input ===

    /// Entry point for every click inside the card container.
    ///
    /// Clicks that did not land on a card are ignored.
    pub fn handle_click(&mut self, target: ClickTarget) -> Result<SelectionOutcome> {
        match target.card_position() {
            Some(position) => self.handle_selection(position),
            None => {
                tracing::trace!("click outside cards ignored");
                Ok(SelectionOutcome::Ignored(IgnoreReason::NotACard))
            }
        }
    }

    /// Pick the card at `position`.
    ///
    /// Returns `SlotOutOfRange` without touching state when `position` is
    /// past the end of the board.
    pub fn handle_selection(&mut self, position: usize) -> Result<SelectionOutcome> {
        let slot = self.board.slot_id(position)?;

        if let Some(reason) = self.rejection(slot) {
            tracing::debug!(%slot, ?reason, "selection ignored");
            return Ok(SelectionOutcome::Ignored(reason));
        }

        let face = self
            .deck
            .face(slot.index())
            .cloned()
            .ok_or(MemoryError::SlotOutOfRange {
                slot: position,
                len: self.deck.len(),
            })?;

        let path = self.config.assets.path_for(&face);
        self.board.reveal(slot);
        self.display.show_face(slot, &path);
        tracing::debug!(%slot, %face, "card revealed");

        let selection = Selection::new(slot, face);
        let Some(first) = self.pending.pop() else {
            self.pending.push(selection);
            self.phase = TurnPhase::OnePending;
            return Ok(SelectionOutcome::FirstPick { slot });
        };

        Ok(self.resolve_turn(first, selection))
    }

    /// Deliver a scheduled hide.
    ///
    /// Returns `false` for ids that are no longer armed (cancelled or
    /// replaced); those change nothing.
    pub fn on_timer(&mut self, id: TimerId) -> bool {
        if self.hide_timer != Some(id) {
            tracing::trace!(timer = %id, "stale timer ignored");
            return false;
        }

        self.hide_timer = None;
        self.hide_unmatched();
        self.scheduler.complete(id);
        true
    }

    /// Cancel the armed hide without hiding anything.
    ///
    /// Play stays disabled if a mismatch was on display; the caller decides
    /// what happens next.
    pub fn cancel_pending_hide(&mut self) -> Option<TimerId> {
        let id = self.hide_timer.take()?;
        self.scheduler.cancel(id);
        tracing::debug!(timer = %id, "hide cancelled");
        Some(id)
    }

    // === Turn machinery ===

    fn rejection(&self, slot: SlotId) -> Option<IgnoreReason> {
        if !self.can_play {
            return Some(IgnoreReason::PlayDisabled);
        }
        if self.board.is_matched(slot) {
            return Some(IgnoreReason::AlreadyMatched);
        }
        if self.pending.iter().any(|s| s.slot == slot) {
            return Some(IgnoreReason::SameSlot);
        }
        None
    }

    /// Compare both picks of the turn and settle it.
    ///
    /// Pending selections are already cleared when this runs.
    fn resolve_turn(&mut self, first: Selection, second: Selection) -> SelectionOutcome {
        self.phase = TurnPhase::Resolving;
        self.can_play = false;
        self.tries += 1;
        self.render_tries();

        let outcome = if first.face == second.face {
            for slot in [first.slot, second.slot] {
                self.board.mark_matched(slot);
                self.display.mark_matched(slot);
            }
            self.can_play = true;
            tracing::info!(
                first = %first.slot,
                second = %second.slot,
                face = %first.face,
                tries = self.tries,
                "pair matched"
            );

            if self.board.all_matched() {
                tracing::info!(tries = self.tries, "all pairs found");
            }

            SelectionOutcome::Matched {
                first: first.slot,
                second: second.slot,
                tries: self.tries,
            }
        } else {
            let timer = self.arm_hide();
            tracing::info!(
                first = %first.slot,
                second = %second.slot,
                tries = self.tries,
                timer = ?timer,
                "mismatch, hiding after delay"
            );

            SelectionOutcome::Mismatched {
                first: first.slot,
                second: second.slot,
                tries: self.tries,
                timer,
            }
        };

        self.phase = TurnPhase::Empty;
        outcome
    }

    /// Cancel any armed hide, then arm a new one.
    ///
    /// If the scheduler refuses, the cards are hidden right away so play
    /// never stays disabled without a hide on the way.
    fn arm_hide(&mut self) -> Option<TimerId> {
        if let Some(previous) = self.hide_timer.take() {
            self.scheduler.cancel(previous);
            tracing::debug!(timer = %previous, "replaced pending hide");
        }

        match self.scheduler.schedule(self.config.hide_delay_ms) {
            Ok(id) => {
                self.hide_timer = Some(id);
                Some(id)
            }
            Err(err) => {
                tracing::error!(%err, "hide could not be scheduled, hiding now");
                self.hide_unmatched();
                None
            }
        }
    }

    fn hide_unmatched(&mut self) {
        let cleared = self.board.hide_unmatched();
        for slot in &cleared {
            self.display.hide_face(*slot);
        }
        self.can_play = true;
        tracing::debug!(cleared = cleared.len(), "unmatched cards hidden");
    }

    fn render_tries(&mut self) {
        let text = tries_text(&self.config.tries_label, self.tries);
        self.display.render_tries(&text);
    }

    // === Queries ===

    /// Completed turns so far.
    #[must_use]
    pub fn tries(&self) -> u32 {
        self.tries
    }

    /// Current turn phase.
    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Whether a click would be accepted.
    #[must_use]
    pub fn can_play(&self) -> bool {
        self.can_play
    }

    /// Picks waiting for resolution (0 or 1 between calls).
    #[must_use]
    pub fn pending(&self) -> &[Selection] {
        &self.pending
    }

    /// Whether a mismatch hide is armed.
    #[must_use]
    pub fn has_pending_hide(&self) -> bool {
        self.hide_timer.is_some()
    }

    /// Whether every pair has been found.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.board.all_matched()
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Capture the full game state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            deck: self.deck.clone(),
            board: self.board.clone(),
            pending: self.pending.to_vec(),
            phase: self.phase,
            tries: self.tries,
            can_play: self.can_play,
            hide_pending: self.hide_timer.is_some(),
            rng: self.rng_state.clone(),
        }
    }
}

impl<D: DisplayLayer> GameController<D, VirtualScheduler> {
    /// Move the virtual clock forward and deliver whatever came due.
    ///
    /// Returns how many deliveries changed state.
    pub fn advance_clock(&mut self, delta_ms: u64) -> usize {
        let due = self.scheduler.advance(delta_ms);
        due.into_iter().filter(|id| self.on_timer(*id)).count()
    }
}
