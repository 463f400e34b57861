//! Game state module - the session that owns board, piece, score and gravity
//!
//! [`GameSession`] is the single owner of all mutable game state. The shell
//! feeds it commands through [`GameSession::apply`] and elapsed time through
//! [`GameSession::tick`], and reads it back through [`GameSession::snapshot`].
//!
//! # Piece lifecycle
//!
//! A piece falls until a gravity step leaves it resting on an occupied cell.
//! It then locks: its footprint is written into the board, the next piece is
//! spawned (a spawn that collides ends the game), and full rows are resolved.
//!
//! Gravity moves the piece first and only then looks one row further down, so
//! a piece locks on the step that brings it to rest rather than on the step
//! that would push it into the stack.

use tracing::{debug, info};

use crate::board::Board;
use crate::gravity::GravityTimer;
use crate::lines::resolve_lines;
use crate::piece::ActivePiece;
use crate::pieces::next_rotation;
use crate::rng::SimpleRng;
use crate::snapshot::GameSnapshot;
use crate::types::*;

const W: i32 = BOARD_WIDTH as i32;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    active: Option<ActivePiece>,
    score: u32,
    status: GameStatus,
    gravity: GravityTimer,
    rng: SimpleRng,
    /// Monotonic id for spawned pieces
    piece_id: u32,
    /// Last lock event (consumed by the shell)
    last_event: Option<LockEvent>,
}

impl GameSession {
    /// Create an idle session with the default gravity period and a first
    /// piece already spawned.
    pub fn new(seed: u32) -> Self {
        Self::with_gravity(seed, GRAVITY_MS)
    }

    pub fn with_gravity(seed: u32, gravity_ms: u32) -> Self {
        let mut session = Self {
            board: Board::new(),
            active: None,
            score: 0,
            status: GameStatus::Idle,
            gravity: GravityTimer::new(gravity_ms),
            rng: SimpleRng::new(seed),
            piece_id: 0,
            last_event: None,
        };
        session.spawn();
        session
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    pub fn gravity(&self) -> &GravityTimer {
        &self.gravity
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    /// Mutable board access for setting up positions in tests and benches.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Replace the active piece, e.g. to set up a position in tests.
    pub fn set_active(&mut self, piece: Option<ActivePiece>) {
        self.active = piece;
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Apply a command from the input layer.
    ///
    /// Movement commands are ignored unless the session is running; session
    /// commands are always handled. Returns whether the command changed
    /// anything.
    pub fn apply(&mut self, command: GameCommand) -> bool {
        if !command.is_session_control() && !self.is_running() {
            return false;
        }

        match command {
            GameCommand::MoveLeft => self.move_left(),
            GameCommand::MoveRight => self.move_right(),
            GameCommand::RotateCw => self.rotate(),
            GameCommand::SoftDrop => {
                self.move_down();
                true
            }
            GameCommand::StartOrPause => self.toggle_start_pause(),
            GameCommand::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Advance the gravity timer by `elapsed_ms`, performing one
    /// [`move_down`](Self::move_down) per elapsed period. Returns the number
    /// of gravity steps taken.
    pub fn tick(&mut self, elapsed_ms: u32) -> u32 {
        let mut steps = 0;
        let mut elapsed = elapsed_ms;
        // A game over inside move_down disarms the timer and ends the loop.
        while self.gravity.advance(elapsed) {
            elapsed = 0;
            self.move_down();
            steps += 1;
        }
        steps
    }

    /// Start gravity when idle or paused, pause it when running.
    ///
    /// Ignored after game over (returns `false`): only
    /// [`restart`](Self::restart) leaves that state.
    pub fn toggle_start_pause(&mut self) -> bool {
        match self.status {
            GameStatus::Idle | GameStatus::Paused => {
                self.status = GameStatus::Running;
                self.gravity.arm();
                info!(status = self.status.as_str(), "gravity started");
                true
            }
            GameStatus::Running => {
                self.status = GameStatus::Paused;
                self.gravity.disarm();
                info!(status = self.status.as_str(), "gravity paused");
                true
            }
            GameStatus::GameOver => false,
        }
    }

    /// Stop gravity, zero the score, reset the board and spawn a fresh piece.
    /// The session ends up idle, waiting for a start.
    pub fn restart(&mut self) {
        self.gravity.disarm();
        self.score = 0;
        self.board.reset();
        self.last_event = None;
        self.status = GameStatus::Idle;
        self.active = None;
        self.spawn();
        info!("session restarted");
    }

    /// Shift the piece one column left unless a cell is already in column 0.
    pub fn move_left(&mut self) -> bool {
        let Some(piece) = self.active.as_mut() else {
            return false;
        };
        if piece.touches_left_wall() {
            return false;
        }
        piece.position -= 1;
        true
    }

    /// Shift the piece one column right unless a cell is already in the last column.
    pub fn move_right(&mut self) -> bool {
        let Some(piece) = self.active.as_mut() else {
            return false;
        };
        if piece.touches_right_wall() {
            return false;
        }
        piece.position += 1;
        true
    }

    /// Advance to the next rotation state.
    ///
    /// After rotating, a cell in column 0 nudges the piece right and a cell in
    /// the last column nudges it left. If the result overlaps an occupied cell
    /// the rotation is undone completely. The floor is only checked through
    /// occupancy.
    pub fn rotate(&mut self) -> bool {
        let Some(before) = self.active else {
            return false;
        };

        let mut rotated = ActivePiece {
            rotation: next_rotation(before.kind, before.rotation),
            ..before
        };

        // Both checks look at the unshifted footprint.
        let left = rotated.touches_left_wall();
        let right = rotated.touches_right_wall();
        if left {
            rotated.position += 1;
        }
        if right {
            rotated.position -= 1;
        }

        if rotated.collides(&self.board) {
            return false;
        }
        self.active = Some(rotated);
        true
    }

    /// One gravity step: move down a row, then lock if the piece now rests
    /// on an occupied cell.
    pub fn move_down(&mut self) {
        let Some(piece) = self.active.as_mut() else {
            return;
        };
        piece.position += W;
        let piece = *piece;

        if piece.is_resting(&self.board) {
            self.lock(piece);
        }
    }

    /// Write `piece` into the board, spawn its successor, then resolve lines.
    fn lock(&mut self, piece: ActivePiece) {
        self.board.occupy(&piece.footprint(), piece.kind);
        self.active = None;
        debug!(
            kind = piece.kind.as_str(),
            position = piece.position,
            rotation = piece.rotation,
            "piece locked"
        );

        self.spawn();

        // Resolution still runs when the spawn ended the game.
        let cleared = resolve_lines(&mut self.board);
        self.score += cleared.score;

        self.last_event = Some(LockEvent {
            kind: Some(piece.kind),
            lines_cleared: cleared.count(),
            score_awarded: cleared.score,
            game_over: self.game_over(),
        });
    }

    /// Spawn a uniformly random piece at the spawn position.
    ///
    /// If its footprint overlaps the stack, the game is over: gravity stops
    /// and no piece is active. Returns whether a piece was placed.
    pub fn spawn(&mut self) -> bool {
        let kind = self.rng.next_kind();
        self.spawn_kind(kind)
    }

    /// Spawn a specific kind (the random draw is skipped).
    pub fn spawn_kind(&mut self, kind: PieceKind) -> bool {
        let piece = ActivePiece::new(kind);

        if piece.collides(&self.board) {
            self.active = None;
            self.end_game();
            return false;
        }

        self.active = Some(piece);
        self.piece_id = self.piece_id.wrapping_add(1);
        debug!(kind = kind.as_str(), piece_id = self.piece_id, "piece spawned");
        true
    }

    fn end_game(&mut self) {
        self.gravity.disarm();
        self.status = GameStatus::GameOver;
        info!(score = self.score, "game over");
    }

    /// Copy the state into `out`. The waiting piece is not drawn while idle;
    /// it appears on the board once the session is started.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.fill_board(&self.board);
        if let Some(piece) = self.active.filter(|_| self.status != GameStatus::Idle) {
            out.mark_active(piece);
        }
        out.active = self.active.map(Into::into);
        out.score = self.score;
        out.status = self.status;
        out.game_over = self.game_over();
        out.piece_id = self.piece_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::rotation_count;

    fn running(seed: u32) -> GameSession {
        let mut session = GameSession::new(seed);
        assert!(session.apply(GameCommand::StartOrPause));
        session
    }

    fn place(session: &mut GameSession, kind: PieceKind, rotation: usize, position: i32) {
        session.set_active(Some(ActivePiece {
            kind,
            rotation,
            position,
        }));
    }

    #[test]
    fn test_new_session_is_idle_with_a_piece() {
        let session = GameSession::new(12345);
        assert_eq!(session.status(), GameStatus::Idle);
        assert_eq!(session.score(), 0);
        assert_eq!(session.piece_id(), 1);
        let piece = session.active().unwrap();
        assert_eq!(piece.position, SPAWN_POSITION);
        assert_eq!(piece.rotation, 0);
        assert!(!session.gravity().is_armed());
    }

    #[test]
    fn test_moves_ignored_unless_running() {
        let mut session = GameSession::new(1);
        let before = session.active();
        assert!(!session.apply(GameCommand::MoveLeft));
        assert!(!session.apply(GameCommand::SoftDrop));
        assert_eq!(session.active(), before);
    }

    #[test]
    fn test_start_pause_toggle() {
        let mut session = GameSession::new(1);
        assert!(session.apply(GameCommand::StartOrPause));
        assert_eq!(session.status(), GameStatus::Running);
        assert!(session.gravity().is_armed());

        assert!(session.apply(GameCommand::StartOrPause));
        assert_eq!(session.status(), GameStatus::Paused);
        assert!(!session.gravity().is_armed());

        assert!(session.apply(GameCommand::StartOrPause));
        assert_eq!(session.status(), GameStatus::Running);
    }

    #[test]
    fn test_move_left_and_right() {
        let mut session = running(1);
        place(&mut session, PieceKind::O, 0, 4);

        assert!(session.move_left());
        assert_eq!(session.active().unwrap().position, 3);
        assert!(session.move_right());
        assert_eq!(session.active().unwrap().position, 4);
    }

    #[test]
    fn test_move_blocked_at_walls() {
        let mut session = running(1);
        place(&mut session, PieceKind::O, 0, 0);
        assert!(!session.move_left());
        assert_eq!(session.active().unwrap().position, 0);

        place(&mut session, PieceKind::O, 0, 8);
        assert!(!session.move_right());
        assert_eq!(session.active().unwrap().position, 8);
    }

    #[test]
    fn test_move_left_stops_after_reaching_column_zero() {
        let mut session = running(1);
        place(&mut session, PieceKind::L, 0, 4);
        let mut moved = 0;
        for _ in 0..10 {
            if session.move_left() {
                moved += 1;
            }
        }
        // L state 0 has its leftmost cell at column offset 1.
        assert_eq!(moved, 5);
        assert_eq!(session.active().unwrap().position, -1);
    }

    #[test]
    fn test_gravity_locks_on_floor() {
        let mut session = running(3);
        place(&mut session, PieceKind::O, 0, 164);

        session.move_down();
        assert_eq!(session.active().unwrap().position, 174);
        assert!(session.take_last_event().is_none());

        session.move_down();
        // Now at 184: cells 184, 185, 194, 195 sit on the floor.
        assert!(session.take_last_event().is_some());
        for i in [184, 185, 194, 195] {
            assert_eq!(session.board().get(i), Some(Cell::Locked(PieceKind::O)));
        }
        assert_eq!(session.piece_id(), 2);
        assert_eq!(session.active().unwrap().position, SPAWN_POSITION);
    }

    #[test]
    fn test_gravity_locks_on_stack() {
        let mut session = running(3);
        session.board_mut().occupy(&[104, 105], PieceKind::I);
        place(&mut session, PieceKind::O, 0, 74);
        session.move_down();
        // Footprint 84, 85, 94, 95 rests on 104, 105.
        assert!(session.board().is_occupied(94));
        assert!(session.board().is_occupied(84));
    }

    #[test]
    fn test_rotate_cycles_back() {
        let mut session = running(1);
        for kind in PieceKind::ALL {
            place(&mut session, kind, 0, 44);
            let count = rotation_count(kind);
            for _ in 0..count {
                session.rotate();
            }
            let piece = session.active().unwrap();
            assert_eq!(piece.rotation, 0, "{:?}", kind);
            assert_eq!(piece.position, 44, "{:?}", kind);
        }
    }

    #[test]
    fn test_rotate_reverts_on_collision() {
        let mut session = running(1);
        place(&mut session, PieceKind::I, 1, 40);
        // Vertical state would cover 41, 51, 61, 71.
        session.board_mut().occupy(&[61], PieceKind::O);
        assert!(!session.rotate());
        let piece = session.active().unwrap();
        assert_eq!(piece.rotation, 1);
        assert_eq!(piece.position, 40);
    }

    #[test]
    fn test_rotate_kicks_off_left_wall() {
        let mut session = running(1);
        // L state 1 hugging column 0: cells 10, 11, 12, 22.
        place(&mut session, PieceKind::L, 1, 0);
        assert!(session.rotate());
        let piece = session.active().unwrap();
        assert_eq!(piece.rotation, 2);
        // State 2 would put a cell at 20 (column 0), so the piece shifts right.
        assert_eq!(piece.position, 1);
        assert_eq!(piece.footprint(), [2, 12, 22, 21]);
    }

    #[test]
    fn test_rotate_touching_both_walls_gets_no_net_shift() {
        let mut session = running(1);
        // Vertical I at column 0: reference 39 puts cells at 40, 50, 60, 70.
        place(&mut session, PieceKind::I, 0, 39);
        assert!(session.rotate());
        let piece = session.active().unwrap();
        assert_eq!(piece.rotation, 1);
        // Horizontal footprint 49..52 touches column 9 and column 0.
        assert_eq!(piece.position, 39);
    }

    #[test]
    fn test_rotate_kicks_off_right_wall() {
        let mut session = running(1);
        // Vertical I in column 7: horizontal footprint 56..59 ends at column 9.
        place(&mut session, PieceKind::I, 0, 46);
        assert!(session.rotate());
        let piece = session.active().unwrap();
        assert_eq!(piece.rotation, 1);
        assert_eq!(piece.position, 45);
        assert_eq!(piece.footprint(), [55, 56, 57, 58]);
    }

    #[test]
    fn test_rotate_o_is_a_no_op_in_place() {
        let mut session = running(1);
        place(&mut session, PieceKind::O, 0, 44);
        assert!(session.rotate());
        assert_eq!(session.active().unwrap().rotation, 0);
        assert_eq!(session.active().unwrap().position, 44);
    }

    #[test]
    fn test_rotate_into_floor_reverts() {
        let mut session = running(1);
        // Horizontal I on row 18; vertical would reach into the floor.
        place(&mut session, PieceKind::I, 1, 170);
        assert!(!session.rotate());
        assert_eq!(session.active().unwrap().rotation, 1);
    }

    #[test]
    fn test_line_clear_on_lock() {
        let mut session = running(5);
        let row: Vec<i32> = (190..198).collect();
        session.board_mut().occupy(&row, PieceKind::L);
        // O at 178 fills 188, 189, 198, 199 after one step.
        place(&mut session, PieceKind::O, 0, 178);
        session.move_down();

        let event = session.take_last_event().unwrap();
        assert_eq!(event.lines_cleared, 1);
        assert_eq!(event.score_awarded, 10);
        assert_eq!(session.score(), 10);
        // Top half of the O shifted down into the bottom row.
        assert!(session.board().is_occupied(198));
        assert!(session.board().is_occupied(199));
        assert!(!session.board().is_occupied(190));
    }

    #[test]
    fn test_spawn_collision_is_game_over() {
        let mut session = running(9);
        let blocked: Vec<i32> = (0..40).collect();
        session.board_mut().occupy(&blocked, PieceKind::Z);

        assert!(!session.spawn());
        assert_eq!(session.status(), GameStatus::GameOver);
        assert!(session.active().is_none());
        assert!(!session.gravity().is_armed());
        assert_eq!(session.tick(10_000), 0);
    }

    #[test]
    fn test_game_over_rejects_everything_but_restart() {
        let mut session = running(9);
        let blocked: Vec<i32> = (0..40).collect();
        session.board_mut().occupy(&blocked, PieceKind::Z);
        session.spawn();

        assert!(!session.apply(GameCommand::MoveLeft));
        assert!(!session.apply(GameCommand::StartOrPause));
        assert_eq!(session.status(), GameStatus::GameOver);

        assert!(session.apply(GameCommand::Restart));
        assert_eq!(session.status(), GameStatus::Idle);
        assert!(session.active().is_some());
        assert!(session.board().is_empty());
    }

    #[test]
    fn test_lock_that_ends_game_still_resolves_lines() {
        let mut session = running(2);
        // Every kind covers cell 5 when spawned; block it and nearly fill row 19.
        let mut cells: Vec<i32> = vec![5];
        cells.extend(190..198);
        session.board_mut().occupy(&cells, PieceKind::T);
        place(&mut session, PieceKind::O, 0, 178);

        session.move_down();
        let event = session.take_last_event().unwrap();
        assert!(event.game_over);
        assert_eq!(event.lines_cleared, 1);
        assert_eq!(session.score(), 10);
    }

    #[test]
    fn test_tick_drives_gravity() {
        let mut session = running(4);
        let start = session.active().unwrap().position;
        assert_eq!(session.tick(499), 0);
        assert_eq!(session.tick(1), 1);
        assert_eq!(session.active().unwrap().position, start + W);
        assert_eq!(session.tick(1000), 2);
    }

    #[test]
    fn test_pause_cancels_pending_gravity() {
        let mut session = running(4);
        session.tick(490);
        session.apply(GameCommand::StartOrPause);
        assert_eq!(session.tick(1000), 0);
        session.apply(GameCommand::StartOrPause);
        // Resuming starts a fresh period.
        assert_eq!(session.tick(20), 0);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut session = running(6);
        session.board_mut().occupy(&[150, 151, 152], PieceKind::I);
        for _ in 0..200 {
            session.apply(GameCommand::SoftDrop);
        }
        session.restart();

        assert_eq!(session.score(), 0);
        assert_eq!(session.status(), GameStatus::Idle);
        assert!(session.board().is_empty());
        assert!(!session.gravity().is_armed());
        let piece = session.active().unwrap();
        assert_eq!(piece.position, SPAWN_POSITION);
        assert_eq!(piece.rotation, 0);
    }

    #[test]
    fn test_long_soft_drop_run_ends_in_game_over() {
        let mut session = running(8);
        for _ in 0..10_000 {
            if session.game_over() {
                break;
            }
            session.apply(GameCommand::SoftDrop);
        }
        assert!(session.game_over());
        assert!(session.active().is_none());
    }
}
