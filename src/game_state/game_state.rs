//! Running game: board plus turn, castling rights, counters and history.
//!
//! `Game` changes only through [`Game::attempt_move`], [`Game::resign`] and
//! [`Game::agree_draw`]. A rejected move leaves every field untouched. The
//! type has no internal locking; an embedding service that runs many games
//! must give each one a single writer.

use chrono::{DateTime, Utc};

use crate::chess_errors::{ChessResult, IllegalMove};
use crate::game_state::board::Board;
use crate::game_state::castle_ability::CastleAbility;
use crate::game_state::chess_types::*;
use crate::game_state::rules_config::RulesConfig;
use crate::move_legality::legal_move_apply::update_castle_ability;
use crate::move_legality::legal_move_checks::check_flags;
use crate::move_legality::legal_move_filter::{filter_legal_move, LegalityContext};
use crate::moves::move_descriptions::{Move, MoveKind};
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// One accepted move as it was played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub mv: Move,
    /// Piece removed from the destination square, `Piece::Empty` if none.
    pub captured: Piece,
    /// Check state of the position right after the move.
    pub check: CheckState,
    pub played_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    castle_ability: CastleAbility,
    side_to_move: Color,
    move_counter: u32,
    halfmove_clock: u32,
    outcome: GameOutcome,
    history: Vec<MoveRecord>,
    config: RulesConfig,
}

impl Default for Game {
    fn default() -> Self {
        Self::new_game()
    }
}

impl Game {
    /// Standard starting position, White to move, default rules.
    pub fn new_game() -> Self {
        Self::with_config(RulesConfig::default())
    }

    pub fn with_config(config: RulesConfig) -> Self {
        Self::from_parts(Board::starting_position(), CastleAbility::all(), Color::White, 0, 0)
            .with_rules(config)
    }

    /// Assemble a game from an arbitrary position. The board is trusted to
    /// hold at most one king per color.
    pub fn from_parts(
        board: Board,
        castle_ability: CastleAbility,
        side_to_move: Color,
        move_counter: u32,
        halfmove_clock: u32,
    ) -> Self {
        Self {
            board,
            castle_ability,
            side_to_move,
            move_counter,
            halfmove_clock,
            outcome: GameOutcome::Ongoing,
            history: Vec::new(),
            config: RulesConfig::default(),
        }
    }

    /// Replace the rule configuration.
    pub fn with_rules(mut self, config: RulesConfig) -> Self {
        self.config = config;
        self
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn castle_ability(&self) -> &CastleAbility {
        &self.castle_ability
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Number of accepted plies, including any offset the game was set up with.
    #[inline]
    pub fn move_counter(&self) -> u32 {
        self.move_counter
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    #[inline]
    pub fn rules(&self) -> &RulesConfig {
        &self.config
    }

    #[inline]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    #[inline]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last()
    }

    /// Per-color check flags of the current position.
    #[inline]
    pub fn check_flags(&self) -> CheckFlags {
        check_flags(&self.board)
    }

    #[inline]
    pub fn check_state(&self) -> CheckState {
        self.check_flags().state()
    }

    /// Judge `mv` against the current position without playing it.
    pub fn is_legal(&self, mv: &Move) -> bool {
        self.judge(mv).is_ok()
    }

    /// Play `mv` if it is legal. On success the board, turn, castling rights,
    /// counters and history advance together; on failure nothing changes.
    pub fn attempt_move(&mut self, mv: &Move) -> ChessResult<CheckState> {
        let next = match self.judge(mv) {
            Ok(next) => next,
            Err(reason) => {
                log::debug!(
                    "rejected {:?} {:?} -> {:?}: {}",
                    mv.piece(),
                    mv.source(),
                    mv.destination(),
                    reason
                );
                return Err(reason.into());
            }
        };

        let captured = match mv.kind() {
            MoveKind::Castle { .. } => Piece::Empty,
            _ => self.board.get(mv.destination()),
        };
        update_castle_ability(&mut self.castle_ability, &self.board, mv);

        let resets_clock = !captured.is_empty() || mv.piece().kind() == Some(PieceKind::Pawn);
        self.halfmove_clock = if resets_clock {
            0
        } else {
            self.halfmove_clock.saturating_add(1)
        };

        self.board = next;
        self.side_to_move = self.side_to_move.opposite();
        self.move_counter = self.move_counter.saturating_add(1);

        let check = self.check_state();
        log::trace!(
            "move {}: {:?} {:?} -> {:?}, {:?}",
            self.move_counter,
            mv.piece(),
            mv.source(),
            mv.landing_square(),
            check
        );
        self.history.push(MoveRecord {
            mv: *mv,
            captured,
            check,
            played_at: Utc::now(),
        });

        Ok(check)
    }

    /// `color` gives up; the other side wins.
    pub fn resign(&mut self, color: Color) -> ChessResult<GameOutcome> {
        self.finish(GameOutcome::Resigned {
            winner: color.opposite(),
        })
    }

    /// Both sides agree to a draw.
    pub fn agree_draw(&mut self) -> ChessResult<GameOutcome> {
        self.finish(GameOutcome::DrawAgreed)
    }

    fn finish(&mut self, outcome: GameOutcome) -> ChessResult<GameOutcome> {
        if self.outcome.is_over() {
            return Err(IllegalMove::GameOver.into());
        }
        log::info!("game over after {} plies: {:?}", self.move_counter, outcome);
        self.outcome = outcome;
        Ok(outcome)
    }

    fn judge(&self, mv: &Move) -> Result<Board, IllegalMove> {
        if self.outcome.is_over() {
            return Err(IllegalMove::GameOver);
        }
        let ctx = LegalityContext {
            board: &self.board,
            castle_ability: &self.castle_ability,
            side_to_move: self.side_to_move,
            config: &self.config,
        };
        filter_legal_move(&ctx, mv)
    }
}
