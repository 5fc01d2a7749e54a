use std::fmt;

use shakmaty::{Color, File, Rank, Square};
use thiserror::Error;

use crate::board::{Board, BoardError};
use crate::notation::{MoveInput, ParseMoveError};

/// A legal pawn move, classified by how it is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// One square forward onto an empty square.
    Step { from: Square, to: Square },
    /// Two squares forward from the home rank.
    DoubleStep { from: Square, to: Square },
    /// Diagonal onto an opposing pawn.
    Capture { from: Square, to: Square },
    /// Diagonal onto the square an opposing pawn just skipped.
    /// `captured` is where that pawn actually stands.
    EnPassant {
        from: Square,
        to: Square,
        captured: Square,
    },
}

impl Move {
    #[inline]
    pub fn from(&self) -> Square {
        match *self {
            Move::Step { from, .. }
            | Move::DoubleStep { from, .. }
            | Move::Capture { from, .. }
            | Move::EnPassant { from, .. } => from,
        }
    }

    #[inline]
    pub fn to(&self) -> Square {
        match *self {
            Move::Step { to, .. }
            | Move::DoubleStep { to, .. }
            | Move::Capture { to, .. }
            | Move::EnPassant { to, .. } => to,
        }
    }

    /// Square of the pawn this move removes, if any.
    #[inline]
    pub fn captured(&self) -> Option<Square> {
        match *self {
            Move::Capture { to, .. } => Some(to),
            Move::EnPassant { captured, .. } => Some(captured),
            Move::Step { .. } | Move::DoubleStep { .. } => None,
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured().is_some()
    }
}

/// Formats as the 4-character input form, e.g. `e2e4`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from(), self.to())
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Winner(Color),
    Stalemate,
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::Winner(Color::White) => f.write_str("White Wins!"),
            GameResult::Winner(Color::Black) => f.write_str("Black Wins!"),
            GameResult::Stalemate => f.write_str("Stalemate!"),
        }
    }
}

/// Why a player's input was rejected. The display text is what the
/// player sees before being prompted again.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidMove {
    #[error("Invalid Input")]
    Malformed(#[from] ParseMoveError),
    #[error("No {} pawn at {square}", color_name(.color))]
    NoPawn { color: Color, square: Square },
    #[error("Invalid Input")]
    Illegal(MoveInput),
}

/// Errors from [`GameEngine::play`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    Invalid(#[from] InvalidMove),
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Lowercase color name, as used in player-facing messages.
pub fn color_name(color: &Color) -> &'static str {
    match color {
        Color::White => "white",
        Color::Black => "black",
    }
}

/// Rank direction a pawn of `color` advances in.
#[inline]
const fn forward(color: Color) -> i32 {
    match color {
        Color::White => 1,
        Color::Black => -1,
    }
}

/// Rank a pawn starts on and may double-step from.
#[inline]
pub const fn home_rank(color: Color) -> Rank {
    match color {
        Color::White => Rank::Second,
        Color::Black => Rank::Seventh,
    }
}

/// Rank a pawn must stand on to capture en passant.
#[inline]
pub const fn en_passant_rank(color: Color) -> Rank {
    match color {
        Color::White => Rank::Fifth,
        Color::Black => Rank::Fourth,
    }
}

/// Square offset by whole files and ranks, or `None` past the edge.
fn shift(square: Square, files: i32, ranks: i32) -> Option<Square> {
    let file = square.file() as i32 + files;
    let rank = square.rank() as i32 + ranks;
    if (0..8).contains(&file) && (0..8).contains(&rank) {
        Some(Square::from_coords(
            File::new(file as u32),
            Rank::new(rank as u32),
        ))
    } else {
        None
    }
}

/// Turn counter, last move and board: everything the rules need.
#[derive(Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    /// Half-move counter starting at 1. Odd turns are White's.
    turn: u32,
    /// Read only to decide en passant on the following move.
    last_move: Option<Move>,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    #[inline]
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    /// Start a game from an arbitrary layout, White to move.
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            turn: 1,
            last_move: None,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    #[inline]
    pub fn active_color(&self) -> Color {
        if self.turn % 2 == 1 {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Every legal move for the pawn on `square`. Empty when the square has
    /// no pawn.
    pub fn valid_moves(&self, square: Square) -> Vec<Move> {
        let mut moves = Vec::new();
        let Some(pawn) = self.board.pawn_at(square) else {
            return moves;
        };
        let color = pawn.color();
        let dir = forward(color);

        // A pawn already on its far rank has nowhere to go.
        let Some(ahead) = shift(square, 0, dir) else {
            return moves;
        };

        if self.board.is_empty(ahead) {
            moves.push(Move::Step {
                from: square,
                to: ahead,
            });
            if square.rank() == home_rank(color)
                && let Some(two_ahead) = shift(square, 0, 2 * dir)
                && self.board.is_empty(two_ahead)
            {
                moves.push(Move::DoubleStep {
                    from: square,
                    to: two_ahead,
                });
            }
        }

        for side in [-1, 1] {
            let Some(target) = shift(square, side, dir) else {
                continue;
            };
            if self
                .board
                .pawn_at(target)
                .is_some_and(|other| other.color() != color)
            {
                moves.push(Move::Capture {
                    from: square,
                    to: target,
                });
            } else if let Some(captured) = self.en_passant_victim(color, square, side) {
                moves.push(Move::EnPassant {
                    from: square,
                    to: target,
                    captured,
                });
            }
        }

        moves
    }

    /// The pawn beside `from` on `side` that may be taken en passant, if the
    /// previous move was its double step.
    fn en_passant_victim(&self, color: Color, from: Square, side: i32) -> Option<Square> {
        if from.rank() != en_passant_rank(color) {
            return None;
        }
        let beside = shift(from, side, 0)?;
        let origin = Square::from_coords(beside.file(), home_rank(!color));

        match self.last_move {
            Some(Move::DoubleStep { from: start, to })
                if start == origin
                    && to == beside
                    && self
                        .board
                        .pawn_at(beside)
                        .is_some_and(|victim| victim.color() != color) =>
            {
                Some(beside)
            }
            _ => None,
        }
    }

    /// Check a player's input against the active color and the rules.
    pub fn validate(&self, input: &str) -> Result<Move, InvalidMove> {
        let typed: MoveInput = input.parse()?;
        self.validate_input(typed)
    }

    /// Like [`GameEngine::validate`] for input that has already been parsed.
    pub fn validate_input(&self, typed: MoveInput) -> Result<Move, InvalidMove> {
        let color = self.active_color();
        if !self
            .board
            .pawn_at(typed.from())
            .is_some_and(|pawn| pawn.color() == color)
        {
            return Err(InvalidMove::NoPawn {
                color,
                square: typed.from(),
            });
        }

        self.valid_moves(typed.from())
            .into_iter()
            .find(|mv| mv.to() == typed.to())
            .ok_or(InvalidMove::Illegal(typed))
    }

    /// Apply a move returned by validation and pass the turn.
    pub fn apply(&mut self, mv: Move) -> Result<(), BoardError> {
        if self.board.pawn_at(mv.from()).is_none() {
            return Err(BoardError::Empty(mv.from()));
        }
        if let Some(square) = mv.captured() {
            let victim = self.board.remove_pawn(square)?;
            log::debug!(
                "{mv} captures {} pawn on {square}",
                color_name(&victim.color())
            );
        }
        self.board.move_pawn(mv.from(), mv.to())?;
        debug_assert!(self.board.is_consistent(), "board bookkeeping diverged");

        log::debug!("turn {}: applied {mv:?}", self.turn);
        self.last_move = Some(mv);
        self.turn += 1;
        Ok(())
    }

    /// Validate and apply in one call.
    pub fn play(&mut self, input: &str) -> Result<Move, GameError> {
        let mv = self.validate(input)?;
        self.apply(mv)?;
        Ok(mv)
    }

    /// Winner after the last applied move, if the game is over.
    ///
    /// The last move's destination rank is checked first. A pawn reaching
    /// rank 8 means White wins even if it also took Black's last pawn.
    pub fn outcome(&self) -> Option<GameResult> {
        if let Some(mv) = self.last_move {
            match mv.to().rank() {
                Rank::Eighth => return Some(GameResult::Winner(Color::White)),
                Rank::First => return Some(GameResult::Winner(Color::Black)),
                _ => {}
            }
        }
        if self.board.pawns_of(Color::White).next().is_none() {
            return Some(GameResult::Winner(Color::Black));
        }
        if self.board.pawns_of(Color::Black).next().is_none() {
            return Some(GameResult::Winner(Color::White));
        }
        None
    }

    /// True when no pawn of the color to move has a legal move.
    pub fn is_stalemate(&self) -> bool {
        let color = self.active_color();
        let stuck = self
            .board
            .pawns_of(color)
            .all(|pawn| self.valid_moves(pawn.square()).is_empty());
        log::trace!(
            "stalemate scan for {} on turn {}: {stuck}",
            color_name(&color),
            self.turn
        );
        stuck
    }
}

impl fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameEngine")
            .field("board", &self.board.layout())
            .field("turn", &self.turn)
            .field("last_move", &self.last_move.map(|mv| mv.to_string()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    impl GameEngine {
        fn from_layout(layout: &str) -> Self {
            Self::from_board(layout.parse().expect("invalid layout"))
        }
    }

    fn play_all(engine: &mut GameEngine, moves: &[&str]) {
        for input in moves {
            engine
                .play(input)
                .unwrap_or_else(|e| panic!("{input} should be legal: {e}"));
        }
    }

    fn destinations(engine: &GameEngine, square: Square) -> Vec<Square> {
        engine.valid_moves(square).iter().map(Move::to).collect()
    }

    #[test_case(Square::A2, Square::A3, Square::A4; "white a file")]
    #[test_case(Square::E2, Square::E3, Square::E4; "white e file")]
    #[test_case(Square::H7, Square::H6, Square::H5; "black h file")]
    fn test_home_rank_has_step_and_double_step(from: Square, one: Square, two: Square) {
        let engine = GameEngine::new();

        assert_eq!(
            engine.valid_moves(from),
            vec![
                Move::Step { from, to: one },
                Move::DoubleStep { from, to: two },
            ]
        );
    }

    #[test]
    fn test_double_step_gone_after_leaving_home_rank() {
        let mut engine = GameEngine::new();
        play_all(&mut engine, &["e2e3", "a7a6"]);

        assert_eq!(
            engine.valid_moves(Square::E3),
            vec![Move::Step {
                from: Square::E3,
                to: Square::E4
            }]
        );
    }

    #[test]
    fn test_double_step_blocked_by_far_square() {
        let engine = GameEngine::from_layout("8/8/8/8/4B3/8/4W3/8");
        assert_eq!(destinations(&engine, Square::E2), vec![Square::E3]);
    }

    #[test]
    fn test_blocked_pawn_has_no_forward_moves() {
        let engine = GameEngine::from_layout("8/8/8/8/8/4B3/4W3/8");
        assert!(engine.valid_moves(Square::E2).is_empty());
    }

    #[test]
    fn test_capture_both_sides() {
        let engine = GameEngine::from_layout("8/8/8/3B1B2/4W3/8/8/8");

        assert_eq!(
            engine.valid_moves(Square::E4),
            vec![
                Move::Step {
                    from: Square::E4,
                    to: Square::E5
                },
                Move::Capture {
                    from: Square::E4,
                    to: Square::D5
                },
                Move::Capture {
                    from: Square::E4,
                    to: Square::F5
                },
            ]
        );
    }

    #[test]
    fn test_no_capture_of_own_color() {
        let engine = GameEngine::from_layout("8/8/8/3W4/4W3/8/8/8");
        assert_eq!(destinations(&engine, Square::E4), vec![Square::E5]);
    }

    #[test_case("8/8/8/1B6/W7/8/8/8", Square::A4, Square::B5; "white on a file")]
    #[test_case("8/8/8/6B1/7W/8/8/8", Square::H4, Square::G5; "white on h file")]
    #[test_case("8/8/8/7B/6W1/8/8/8", Square::G4, Square::H5; "capture onto h file")]
    fn test_edge_files_stay_on_board(layout: &str, from: Square, capture: Square) {
        let engine = GameEngine::from_layout(layout);
        let moves = engine.valid_moves(from);

        assert!(moves.contains(&Move::Capture { from, to: capture }));
        assert_eq!(moves.len(), 2);
    }

    #[test]
    fn test_black_captures_downward() {
        let engine = GameEngine::from_layout("8/8/8/3B4/2W1W3/8/8/8");

        assert_eq!(
            engine.valid_moves(Square::D5),
            vec![
                Move::Step {
                    from: Square::D5,
                    to: Square::D4
                },
                Move::Capture {
                    from: Square::D5,
                    to: Square::C4
                },
                Move::Capture {
                    from: Square::D5,
                    to: Square::E4
                },
            ]
        );
    }

    #[test]
    fn test_empty_square_has_no_moves() {
        assert!(GameEngine::new().valid_moves(Square::E4).is_empty());
    }

    #[test]
    fn test_pawn_on_far_rank_has_no_moves() {
        let engine = GameEngine::from_layout("W7/8/8/8/8/8/8/8");
        assert!(engine.valid_moves(Square::A8).is_empty());
    }

    #[test]
    fn test_en_passant_after_white_double_step() {
        let mut engine = GameEngine::from_layout("8/8/8/8/1B6/8/W7/8");
        play_all(&mut engine, &["a2a4"]);

        assert_eq!(
            engine.valid_moves(Square::B4),
            vec![
                Move::Step {
                    from: Square::B4,
                    to: Square::B3
                },
                Move::EnPassant {
                    from: Square::B4,
                    to: Square::A3,
                    captured: Square::A4,
                },
            ]
        );
    }

    #[test_case("c7c5", Square::C6, Square::C5; "right side")]
    #[test_case("a7a5", Square::A6, Square::A5; "left side")]
    fn test_en_passant_tagged_on_both_sides(double: &str, to: Square, captured: Square) {
        let mut engine = GameEngine::from_layout("8/B1B5/8/1W6/8/8/8/7W");
        play_all(&mut engine, &["h1h2", double]);

        assert!(engine.valid_moves(Square::B5).contains(&Move::EnPassant {
            from: Square::B5,
            to,
            captured,
        }));
    }

    #[test]
    fn test_en_passant_expires_after_one_move() {
        let mut engine = GameEngine::from_layout("8/7B/8/8/1B6/8/W6W/8");
        play_all(&mut engine, &["a2a4", "h7h6"]);
        assert_eq!(destinations(&engine, Square::B4), vec![Square::B3]);

        play_all(&mut engine, &["h2h3"]);
        assert_eq!(destinations(&engine, Square::B4), vec![Square::B3]);
    }

    #[test]
    fn test_no_en_passant_after_single_steps() {
        let mut engine = GameEngine::from_layout("8/8/8/8/1B6/W7/8/7W");
        play_all(&mut engine, &["a3a4"]);

        assert_eq!(destinations(&engine, Square::B4), vec![Square::B3]);
    }

    #[test]
    fn test_en_passant_applies_to_other_square() {
        let mut engine = GameEngine::from_layout("8/7B/8/8/1B6/8/W6W/8");
        play_all(&mut engine, &["a2a4"]);
        let before = engine.board().pawn_count();

        let mv = engine.play("b4a3").expect("en passant is legal");

        assert_eq!(
            mv,
            Move::EnPassant {
                from: Square::B4,
                to: Square::A3,
                captured: Square::A4
            }
        );
        assert_eq!(engine.board().pawn_count(), before - 1);
        assert!(engine.board().is_empty(Square::A4));
        assert!(engine.board().is_empty(Square::B4));
        assert_eq!(
            engine.board().pawn_at(Square::A3).map(|p| p.color()),
            Some(Color::Black)
        );
        assert!(engine.board().is_consistent());
    }

    #[test]
    fn test_capture_removes_exactly_one() {
        let mut engine = GameEngine::new();
        play_all(&mut engine, &["e2e4", "d7d5"]);
        let victim = engine
            .board()
            .cell(Square::D5)
            .occupant()
            .expect("pawn on d5");

        play_all(&mut engine, &["e4d5"]);

        assert_eq!(engine.board().pawn_count(), 15);
        assert!(engine.board().pawns().all(|p| p.id() != victim));
        assert_eq!(
            engine.board().pawn_at(Square::D5).map(|p| p.color()),
            Some(Color::White)
        );
    }

    #[test]
    fn test_non_capture_keeps_count() {
        let mut engine = GameEngine::new();
        play_all(&mut engine, &["e2e4", "e7e5", "d2d3"]);
        assert_eq!(engine.board().pawn_count(), 16);
        assert!(engine.board().is_consistent());
    }

    #[test]
    fn test_turn_parity() {
        let mut engine = GameEngine::new();
        assert_eq!(engine.active_color(), Color::White);
        assert_eq!(engine.turn(), 1);

        play_all(&mut engine, &["e2e4"]);
        assert_eq!(engine.active_color(), Color::Black);
        assert_eq!(engine.turn(), 2);

        play_all(&mut engine, &["e7e5"]);
        assert_eq!(engine.active_color(), Color::White);
    }

    #[test_case("e2e5", InvalidMove::Illegal(MoveInput::new(Square::E2, Square::E5)); "too far")]
    #[test_case("e2d3", InvalidMove::Illegal(MoveInput::new(Square::E2, Square::D3)); "diagonal to empty")]
    #[test_case("e2e1", InvalidMove::Illegal(MoveInput::new(Square::E2, Square::E1)); "backwards")]
    #[test_case("a3a4", InvalidMove::NoPawn { color: Color::White, square: Square::A3 }; "empty origin")]
    #[test_case("e7e5", InvalidMove::NoPawn { color: Color::White, square: Square::E7 }; "opponent pawn")]
    #[test_case("e2e4x", InvalidMove::Malformed(ParseMoveError::Length(5)); "malformed")]
    fn test_validate_rejects(input: &str, expected: InvalidMove) {
        assert_eq!(GameEngine::new().validate(input), Err(expected));
    }

    #[test]
    fn test_invalid_move_messages() {
        let engine = GameEngine::new();

        let no_pawn = engine.validate("a3a4").unwrap_err();
        assert_eq!(no_pawn.to_string(), "No white pawn at a3");

        let illegal = engine.validate("e2e5").unwrap_err();
        assert_eq!(illegal.to_string(), "Invalid Input");

        let malformed = engine.validate("hello").unwrap_err();
        assert_eq!(malformed.to_string(), "Invalid Input");
    }

    #[test]
    fn test_no_pawn_message_names_black() {
        let mut engine = GameEngine::new();
        play_all(&mut engine, &["e2e4"]);

        let err = engine.validate("e2e3").unwrap_err();
        assert_eq!(err.to_string(), "No black pawn at e2");
    }

    #[test]
    fn test_rejected_move_leaves_state_alone() {
        let mut engine = GameEngine::new();
        let before = engine.clone();

        assert!(engine.play("e2e5").is_err());
        assert_eq!(engine, before);
    }

    #[test]
    fn test_apply_from_empty_square_fails_cleanly() {
        let mut engine = GameEngine::new();
        let before = engine.clone();

        let result = engine.apply(Move::Capture {
            from: Square::E4,
            to: Square::D7,
        });

        assert_eq!(result, Err(BoardError::Empty(Square::E4)));
        assert_eq!(engine, before);
    }

    #[test]
    fn test_white_wins_on_rank_eight() {
        let mut engine = GameEngine::from_layout("8/W6B/8/8/8/8/8/8");
        play_all(&mut engine, &["a7a8"]);
        assert_eq!(engine.outcome(), Some(GameResult::Winner(Color::White)));
    }

    #[test]
    fn test_black_wins_on_rank_one() {
        let mut engine = GameEngine::from_layout("8/8/8/8/7W/8/B7/8");
        play_all(&mut engine, &["h4h5", "a2a1"]);
        assert_eq!(engine.outcome(), Some(GameResult::Winner(Color::Black)));
    }

    #[test]
    fn test_back_rank_wins_regardless_of_material() {
        let mut engine = GameEngine::from_layout("8/W7/8/8/8/8/BBBBBBBB/8");
        play_all(&mut engine, &["a7a8"]);
        assert_eq!(engine.outcome(), Some(GameResult::Winner(Color::White)));
    }

    #[test]
    fn test_white_wins_by_elimination() {
        let mut engine = GameEngine::from_layout("8/8/8/3B4/4W3/8/8/8");
        play_all(&mut engine, &["e4d5"]);
        assert_eq!(engine.outcome(), Some(GameResult::Winner(Color::White)));
    }

    #[test]
    fn test_black_wins_by_elimination() {
        let mut engine = GameEngine::from_layout("8/8/8/8/3B4/8/4W3/8");
        play_all(&mut engine, &["e2e3"]);
        assert_eq!(engine.outcome(), None);

        play_all(&mut engine, &["d4e3"]);
        assert_eq!(engine.outcome(), Some(GameResult::Winner(Color::Black)));
    }

    #[test]
    fn test_capture_of_last_pawn_onto_back_rank() {
        let mut engine = GameEngine::from_layout("1B6/W7/8/8/8/8/8/8");
        play_all(&mut engine, &["a7b8"]);
        assert_eq!(engine.outcome(), Some(GameResult::Winner(Color::White)));
    }

    #[test]
    fn test_no_outcome_mid_game() {
        let mut engine = GameEngine::new();
        assert_eq!(engine.outcome(), None);
        play_all(&mut engine, &["e2e4", "d7d5", "e4d5"]);
        assert_eq!(engine.outcome(), None);
    }

    #[test]
    fn test_stalemate_when_all_blocked() {
        let engine = GameEngine::from_layout("8/8/8/B7/W7/8/8/8");
        assert!(engine.is_stalemate());
    }

    #[test]
    fn test_not_stalemate_with_capture_available() {
        let engine = GameEngine::from_layout("8/8/8/BB6/W7/8/8/8");
        assert!(!engine.is_stalemate());
    }

    #[test]
    fn test_stalemate_checks_only_active_color() {
        let mut engine = GameEngine::from_layout("8/8/8/8/B7/W7/8/7W");
        assert!(!engine.is_stalemate());
        play_all(&mut engine, &["h1h2"]);
        assert!(engine.is_stalemate());
    }

    #[test]
    fn test_start_is_not_stalemate() {
        assert!(!GameEngine::new().is_stalemate());
    }

    #[test]
    fn test_replay_is_deterministic() {
        let moves = ["e2e4", "d7d5", "e4e5", "f7f5", "e5f6", "g7f6"];
        let mut first = GameEngine::new();
        let mut second = GameEngine::new();

        play_all(&mut first, &moves);
        play_all(&mut second, &moves);

        assert_eq!(first, second);
        assert_eq!(first.board().layout(), "8/BBB1B2B/5B2/3B4/8/8/WWWW1WWW/8");
    }

    #[test]
    fn test_move_display() {
        let mv = Move::EnPassant {
            from: Square::B4,
            to: Square::A3,
            captured: Square::A4,
        };
        assert_eq!(mv.to_string(), "b4a3");
        assert!(mv.is_capture());
    }

    #[test_case(GameResult::Winner(Color::White), "White Wins!"; "white")]
    #[test_case(GameResult::Winner(Color::Black), "Black Wins!"; "black")]
    #[test_case(GameResult::Stalemate, "Stalemate!"; "stalemate")]
    fn test_result_messages(result: GameResult, message: &str) {
        assert_eq!(result.to_string(), message);
    }
}
