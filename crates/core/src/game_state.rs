//! Game state module - manages the complete game session
//!
//! This module ties together the board, the active piece, the random source and the
//! difficulty timing. It handles per-tick input, gravity, locking, line clears and the
//! Playing / GameOver lifecycle.

use log::{debug, info};

use crate::rng::{RandomSource, SimpleRng};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::timing::Timing;
use crate::types::{Direction, HeldDirections, PieceKind};
use crate::{Board, Tetromino};

/// Session lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Playing,
    GameOver,
}

/// Emitted by [`GameState::tick`] when the active piece locked during the tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    /// Kind of the piece that locked.
    pub kind: PieceKind,
    pub lines_cleared: usize,
    /// The replacement piece could not spawn.
    pub game_over: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = SimpleRng> {
    board: Board,
    active: Tetromino,
    rng: R,
    timing: Timing,
    phase: Phase,
    /// Play time accumulated while `Playing`.
    elapsed_ms: u64,
    drop_interval_ms: u32,
    drop_timer_ms: u32,
    /// Time since the last applied left/right/rotate action.
    action_timer_ms: u32,
    /// Pieces spawned in this session, including the current one.
    pieces_spawned: u32,
}

impl GameState<SimpleRng> {
    /// Create a new game with the given RNG seed and default timing
    pub fn new(seed: u32) -> Self {
        Self::with_timing(seed, Timing::default())
    }

    pub fn with_timing(seed: u32, timing: Timing) -> Self {
        Self::with_rng(SimpleRng::new(seed), timing)
    }
}

impl<R: RandomSource> GameState<R> {
    /// Create a game drawing piece kinds from `rng`.
    pub fn with_rng(rng: R, timing: Timing) -> Self {
        Self::with_board(Board::new(), rng, timing)
    }

    /// Create a game on a pre-filled board.
    ///
    /// The first piece spawns immediately; if it does not fit the session
    /// starts in [`Phase::GameOver`].
    pub fn with_board(board: Board, mut rng: R, timing: Timing) -> Self {
        let active = Tetromino::spawn(None, &mut rng);
        let mut state = Self {
            board,
            active,
            rng,
            timing,
            phase: Phase::Playing,
            elapsed_ms: 0,
            drop_interval_ms: timing.drop_interval_ms(0),
            drop_timer_ms: 0,
            action_timer_ms: 0,
            pieces_spawned: 1,
        };
        state.check_spawn();
        state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &Tetromino {
        &self.active
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = Some(ActiveSnapshot::from(self.active));
        out.elapsed_ms = self.elapsed_ms;
        out.drop_interval_ms = self.drop_interval_ms;
        out.game_over = self.game_over();
        out.pieces_spawned = self.pieces_spawned;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Replace the active piece with a freshly drawn one.
    ///
    /// Returns false (and enters game over) when the new piece does not fit
    /// at its spawn position.
    pub fn spawn_piece(&mut self) -> bool {
        self.active = Tetromino::spawn(None, &mut self.rng);
        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);
        self.check_spawn()
    }

    fn check_spawn(&mut self) -> bool {
        if self.active.can_move(0, 0, &self.board) {
            return true;
        }
        self.phase = Phase::GameOver;
        info!(
            "game over after {} ms, {} pieces",
            self.elapsed_ms, self.pieces_spawned
        );
        false
    }

    /// Move the active piece if the destination fits
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if self.active.can_move(dx, dy, &self.board) {
            self.active.move_by(dx, dy);
            return true;
        }
        false
    }

    /// Rotate the active piece if the rotated shape fits (no kicks)
    pub fn try_rotate(&mut self) -> bool {
        self.active.rotate(&self.board)
    }

    /// Advance the session by `elapsed_ms` with the given held directions.
    ///
    /// Order within a tick: play time and drop interval, one cooldown-gated
    /// left/right/rotate action, soft drop, then gravity. Does nothing once
    /// the game is over.
    pub fn tick(&mut self, elapsed_ms: u32, held: HeldDirections) -> Option<LockEvent> {
        if self.phase == Phase::GameOver {
            return None;
        }

        self.elapsed_ms = self.elapsed_ms.saturating_add(u64::from(elapsed_ms));
        self.drop_interval_ms = self.timing.drop_interval_ms(self.elapsed_ms);

        self.action_timer_ms = self.action_timer_ms.saturating_add(elapsed_ms);
        if self.action_timer_ms >= self.timing.move_cooldown_ms && self.apply_gated_action(held)
        {
            self.action_timer_ms = 0;
        }

        if held.contains(Direction::Down) {
            self.try_move(0, 1);
        }

        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if self.drop_timer_ms >= self.drop_interval_ms {
            self.drop_timer_ms = 0;
            if !self.try_move(0, 1) {
                return Some(self.lock_piece());
            }
        }

        None
    }

    /// Left, then right, then rotate: the first one that applies wins.
    fn apply_gated_action(&mut self, held: HeldDirections) -> bool {
        if held.contains(Direction::Left) && self.try_move(-1, 0) {
            return true;
        }
        if held.contains(Direction::Right) && self.try_move(1, 0) {
            return true;
        }
        held.contains(Direction::Rotate) && self.try_rotate()
    }

    /// Commit the active piece, clear full rows and spawn the next piece.
    fn lock_piece(&mut self) -> LockEvent {
        let kind = self.active.kind();
        self.active.place_on_board(&mut self.board);

        let cleared = self.board.clear_full_rows();
        debug!(
            "locked {} at {:?}, cleared rows {:?}",
            kind.as_str(),
            self.active.position(),
            cleared.as_slice()
        );

        let spawned = self.spawn_piece();
        LockEvent {
            kind,
            lines_cleared: cleared.len(),
            game_over: !spawned,
        }
    }

    /// Start a fresh session: empty board, new piece, zeroed clocks.
    pub fn reset(&mut self) {
        self.board.clear();
        self.phase = Phase::Playing;
        self.elapsed_ms = 0;
        self.drop_interval_ms = self.timing.drop_interval_ms(0);
        self.drop_timer_ms = 0;
        self.action_timer_ms = 0;
        self.pieces_spawned = 0;
        self.spawn_piece();
        info!("session reset");
    }
}
