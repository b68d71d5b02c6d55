// This file is part of the chessvar library.
// Copyright (C) 2026 The chessvar developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

use std::{error::Error, fmt, num::NonZeroU32, str::FromStr};

use tracing::{debug, info, trace};

use crate::{
    role::ByRole,
    rules,
    setup::{Setup, SetupError, SetupErrorKinds},
    tally::{CaptureError, Tally},
    Bitboard, Board, ByColor, Color, Coordinate, EdgeMode, Move, MoveList, Rank, Role, Uci,
};

/// Error when parsing an invalid [`GameState`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseGameStateError;

impl fmt::Display for ParseGameStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid game state")
    }
}

impl Error for ParseGameStateError {}

/// Whether a game is still going, and who won it if not.
///
/// The text form is `UNFINISHED`, `WHITE_WON` or `BLACK_WON`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum GameState {
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "UNFINISHED"))]
    InProgress,
    #[cfg_attr(feature = "serde", serde(rename = "WHITE_WON"))]
    WhiteWon,
    #[cfg_attr(feature = "serde", serde(rename = "BLACK_WON"))]
    BlackWon,
}

impl GameState {
    pub const fn won_by(winner: Color) -> GameState {
        match winner {
            Color::White => GameState::WhiteWon,
            Color::Black => GameState::BlackWon,
        }
    }

    pub const fn winner(self) -> Option<Color> {
        match self {
            GameState::InProgress => None,
            GameState::WhiteWon => Some(Color::White),
            GameState::BlackWon => Some(Color::Black),
        }
    }

    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameState::InProgress)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            GameState::InProgress => "UNFINISHED",
            GameState::WhiteWon => "WHITE_WON",
            GameState::BlackWon => "BLACK_WON",
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameState {
    type Err = ParseGameStateError;

    fn from_str(s: &str) -> Result<GameState, ParseGameStateError> {
        Ok(match s {
            "UNFINISHED" => GameState::InProgress,
            "WHITE_WON" => GameState::WhiteWon,
            "BLACK_WON" => GameState::BlackWon,
            _ => return Err(ParseGameStateError),
        })
    }
}

/// Reason for rejecting a move.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PlayError {
    /// The game has already been won.
    GameOver,
    /// Origin or target is not a square of the board.
    OutOfBounds,
    /// There is no piece on the origin square.
    EmptySquare,
    /// The piece on the origin square belongs to the side not to move.
    WrongTurn,
    /// The target square holds a piece of the side to move.
    FriendlyTarget,
    /// The piece cannot move like that.
    IllegalMove,
    /// The captured kind has no pieces left in the tally. Games started
    /// through [`Game::new()`] or [`Game::from_setup()`] keep tallies in step
    /// with the board, so this only reports a broken tally.
    Tally(CaptureError),
}

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayError::GameOver => f.write_str("game is already over"),
            PlayError::OutOfBounds => f.write_str("coordinate out of bounds"),
            PlayError::EmptySquare => f.write_str("no piece on origin square"),
            PlayError::WrongTurn => f.write_str("piece belongs to the side not to move"),
            PlayError::FriendlyTarget => f.write_str("target square holds a friendly piece"),
            PlayError::IllegalMove => f.write_str("illegal move"),
            PlayError::Tally(err) => write!(f, "inconsistent tally: {err}"),
        }
    }
}

impl Error for PlayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PlayError::Tally(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CaptureError> for PlayError {
    fn from(err: CaptureError) -> PlayError {
        PlayError::Tally(err)
    }
}

/// A game in progress or finished, with white to move first.
///
/// # Examples
///
/// ```
/// use chessvar::{new_game, Color, Coordinate, GameState};
///
/// let mut game = new_game();
/// let e2: Coordinate = "e2".parse()?;
/// let e4: Coordinate = "e4".parse()?;
///
/// assert!(game.attempt_move(e2, e4));
/// assert_eq!(game.active_side(), Color::Black);
/// assert_eq!(game.game_state(), GameState::InProgress);
///
/// // White cannot move twice.
/// assert!(!game.attempt_move(e4, "e5".parse()?));
/// # Ok::<_, chessvar::ParseCoordinateError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Game {
    board: Board,
    turn: Color,
    state: GameState,
    tallies: ByColor<Tally>,
    fullmoves: NonZeroU32,
    mode: EdgeMode,
}

impl Game {
    /// The starting position with the standard edge rules.
    pub fn new() -> Game {
        Game::with_edge_mode(EdgeMode::Standard)
    }

    pub fn with_edge_mode(mode: EdgeMode) -> Game {
        Game {
            board: Board::new(),
            turn: Color::White,
            state: GameState::InProgress,
            tallies: ByColor::new_with(|_| Tally::new()),
            fullmoves: NonZeroU32::MIN,
            mode,
        }
    }

    /// Validates a [`Setup`] and starts a game from it.
    ///
    /// Each side's tally is derived from the opponent pieces on the board.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError`] with every problem found.
    pub fn from_setup(setup: Setup, mode: EdgeMode) -> Result<Game, SetupError> {
        let material = setup.board.material();
        let mut kinds = SetupErrorKinds::empty();

        if setup.board.occupied().is_empty() {
            kinds |= SetupErrorKinds::EMPTY_BOARD;
        }

        for counts in material.iter() {
            if Role::ALL.into_iter().any(|role| *counts.get(role) > role.initial_count()) {
                kinds |= SetupErrorKinds::TOO_MANY_PIECES;
            }
            if counts.find(|&count| count == 0).is_some() {
                kinds |= SetupErrorKinds::MISSING_ROLE;
            }
        }

        let backranks = Bitboard::from_rank(Rank::First) | Bitboard::from_rank(Rank::Eighth);
        let pawns = setup.board.by_piece(Color::White, Role::Pawn)
            | setup.board.by_piece(Color::Black, Role::Pawn);
        if (pawns & backranks).any() {
            kinds |= SetupErrorKinds::PAWNS_ON_BACKRANK;
        }

        if !kinds.is_empty() {
            return Err(SetupError::new(kinds));
        }

        let tally_against = |color: Color| {
            Tally::from_counts(*material.get(color.other()))
                .ok_or(SetupError::new(SetupErrorKinds::TOO_MANY_PIECES))
        };

        Ok(Game {
            tallies: ByColor {
                white: tally_against(Color::White)?,
                black: tally_against(Color::Black)?,
            },
            board: setup.board,
            turn: setup.turn,
            state: GameState::InProgress,
            fullmoves: setup.fullmoves,
            mode,
        })
    }

    pub fn to_setup(&self) -> Setup {
        Setup {
            board: self.board.clone(),
            turn: self.turn,
            fullmoves: self.fullmoves,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    pub fn active_side(&self) -> Color {
        self.turn
    }

    pub fn game_state(&self) -> GameState {
        self.state
    }

    /// Opponent pieces `color` still has to capture.
    pub fn tally(&self, color: Color) -> &Tally {
        self.tallies.get(color)
    }

    /// Opponent pieces each side still has to capture, by kind.
    pub fn tallies(&self) -> ByColor<ByRole<u8>> {
        self.tallies.map(|tally| tally.counts())
    }

    /// The move number, starting at 1 and incremented after every black
    /// move.
    pub fn fullmoves(&self) -> NonZeroU32 {
        self.fullmoves
    }

    pub fn edge_mode(&self) -> EdgeMode {
        self.mode
    }

    /// Checks every precondition of [`Game::play()`] without changing
    /// anything.
    pub(crate) fn validate(&self, from: Coordinate, to: Coordinate) -> Result<Move, PlayError> {
        if self.state.is_terminal() {
            return Err(PlayError::GameOver);
        }

        let (Some(from), Some(to)) = (from.square(), to.square()) else {
            return Err(PlayError::OutOfBounds);
        };

        let piece = self.board.piece_at(from).ok_or(PlayError::EmptySquare)?;
        if piece.color != self.turn {
            return Err(PlayError::WrongTurn);
        }

        let target = self.board.piece_at(to);
        if target.is_some_and(|target| target.color == self.turn) {
            return Err(PlayError::FriendlyTarget);
        }

        if !rules::is_legal_move(piece, from, to, &self.board, self.mode) {
            return Err(PlayError::IllegalMove);
        }

        let capture = target.map(|target| target.role);
        if let Some(role) = capture {
            let mut tally = *self.tallies.get(self.turn);
            tally.record_capture(role)?;
        }

        Ok(Move {
            role: piece.role,
            from,
            to,
            capture,
        })
    }

    /// Tests if the active side may move from `from` to `to`.
    pub fn is_legal(&self, from: Coordinate, to: Coordinate) -> bool {
        self.validate(from, to).is_ok()
    }

    /// Validates and plays a move.
    ///
    /// # Errors
    ///
    /// Returns the reason for rejecting the move. A rejected move leaves the
    /// game unchanged.
    pub fn play(&mut self, from: Coordinate, to: Coordinate) -> Result<Move, PlayError> {
        let m = self.validate(from, to).inspect_err(|err| {
            trace!(%from, %to, turn = %self.turn, %err, "move rejected");
        })?;
        self.play_unchecked(m);
        Ok(m)
    }

    /// Plays a move if it is legal, reporting success.
    ///
    /// ```
    /// use chessvar::{new_game, Square};
    ///
    /// let mut game = new_game();
    /// assert!(!game.attempt_move(Square::E2.into(), Square::E5.into()));
    /// assert!(game.attempt_move(Square::E2.into(), Square::E4.into()));
    /// ```
    pub fn attempt_move(&mut self, from: Coordinate, to: Coordinate) -> bool {
        self.play(from, to).is_ok()
    }

    /// Validates and plays a move given in UCI notation.
    ///
    /// # Errors
    ///
    /// See [`Game::play()`].
    pub fn play_uci(&mut self, uci: Uci) -> Result<Move, PlayError> {
        self.play(uci.from, uci.to)
    }

    /// Plays a move produced by [`Game::validate()`].
    pub(crate) fn play_unchecked(&mut self, m: Move) {
        let turn = self.turn;

        if let Some(role) = m.capture {
            let tally = self.tallies.get_mut(turn);
            if tally.record_capture(role).is_ok() {
                debug!(%m, captured = %role, remaining = tally.remaining(role), "capture");
                if tally.has_won() {
                    self.state = GameState::won_by(turn);
                    info!(winner = %turn, exhausted = %role, fullmoves = self.fullmoves.get(), "game decided");
                }
            }
        }

        if let Some(piece) = self.board.remove_piece_at(m.from) {
            let piece = if piece.is_pawn() { piece.into_moved() } else { piece };
            self.board.set_piece_at(m.to, piece);
        }
        debug!(%m, %turn, "move played");

        if turn.is_black() {
            self.fullmoves = self.fullmoves.saturating_add(1);
        }
        self.turn = !turn;
    }

    /// Generates all moves the active side may play. A finished game has
    /// none.
    pub fn legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();

        if self.state.is_terminal() {
            return moves;
        }

        let targets = !self.board.by_color(self.turn);
        for from in self.board.by_color(self.turn) {
            for to in targets {
                if let Ok(m) = self.validate(from.into(), to.into()) {
                    moves.push(m);
                }
            }
        }

        moves
    }
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    fn play(game: &mut Game, from: Square, to: Square) -> Result<Move, PlayError> {
        game.play(from.into(), to.into())
    }

    #[test]
    fn test_game_state_text() {
        for state in [GameState::InProgress, GameState::WhiteWon, GameState::BlackWon] {
            assert_eq!(state.to_string().parse::<GameState>(), Ok(state));
        }
        assert_eq!(GameState::InProgress.to_string(), "UNFINISHED");
        assert_eq!("IN_PROGRESS".parse::<GameState>(), Err(ParseGameStateError));
        assert_eq!(GameState::won_by(Color::Black).winner(), Some(Color::Black));
        assert_eq!(GameState::InProgress.winner(), None);
    }

    #[test]
    fn test_rejection_causes() {
        let mut game = Game::new();
        assert_eq!(game.play(Coordinate::new(8, 1), Coordinate::new(4, 3)), Err(PlayError::OutOfBounds));
        assert_eq!(game.play(Square::E2.into(), Coordinate::new(4, -1)), Err(PlayError::OutOfBounds));
        assert_eq!(play(&mut game, Square::E4, Square::E5), Err(PlayError::EmptySquare));
        assert_eq!(play(&mut game, Square::E7, Square::E5), Err(PlayError::WrongTurn));
        assert_eq!(play(&mut game, Square::A1, Square::A2), Err(PlayError::FriendlyTarget));
        assert_eq!(play(&mut game, Square::E2, Square::E5), Err(PlayError::IllegalMove));
        assert_eq!(game, Game::new());
    }

    #[test]
    fn test_capture_updates_tally() {
        let mut game = Game::new();
        play(&mut game, Square::E2, Square::E4).expect("legal");
        play(&mut game, Square::D7, Square::D5).expect("legal");
        let m = play(&mut game, Square::E4, Square::D5).expect("legal");
        assert_eq!(m.capture, Some(Role::Pawn));
        assert_eq!(game.tally(Color::White).remaining(Role::Pawn), 7);
        assert_eq!(game.tally(Color::Black).remaining(Role::Pawn), 8);
        assert_eq!(game.fullmoves().get(), 2);
        assert!(game.board().piece_at(Square::D5).is_some_and(|p| p.moved));
    }

    #[test]
    fn test_win_by_capturing_the_queen() {
        let setup: Setup = "rnb1kbnr/pppppppp/8/8/8/3Q4/PPPPPPPP/RNBqKBNR w".parse().expect("valid setup");
        let mut game = Game::from_setup(setup, EdgeMode::Standard).expect("valid position");
        assert_eq!(game.tally(Color::White).remaining(Role::Queen), 1);

        let m = play(&mut game, Square::E1, Square::D1).expect("king takes queen");
        assert_eq!(m.capture, Some(Role::Queen));
        assert_eq!(game.game_state(), GameState::WhiteWon);
        assert_eq!(game.active_side(), Color::Black);
        assert!(game.legal_moves().is_empty());
        assert_eq!(play(&mut game, Square::E7, Square::E5), Err(PlayError::GameOver));
    }

    #[test]
    fn test_from_setup_errors() {
        let kinds = |fen: &str| {
            Game::from_setup(fen.parse().expect("valid setup"), EdgeMode::Standard)
                .map(|_| SetupErrorKinds::empty())
                .unwrap_or_else(|err| err.kinds())
        };

        assert_eq!(kinds("8/8/8/8/8/8/8/8 w"), SetupErrorKinds::EMPTY_BOARD | SetupErrorKinds::MISSING_ROLE);
        assert_eq!(kinds("4k3/8/8/8/8/8/8/4K3 w"), SetupErrorKinds::MISSING_ROLE);
        assert_eq!(
            kinds("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNQ w"),
            SetupErrorKinds::TOO_MANY_PIECES
        );
        assert_eq!(
            kinds("rnbqkbnP/pppppppp/8/8/8/8/PPPPPPP1/RNBQKBNR w"),
            SetupErrorKinds::PAWNS_ON_BACKRANK
        );
        assert_eq!(kinds("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b"), SetupErrorKinds::empty());
    }

    #[test]
    fn test_setup_roundtrip_through_game() {
        let mut game = Game::new();
        play(&mut game, Square::G1, Square::F3).expect("legal");
        let setup = game.to_setup();
        assert_eq!(setup.to_string(), "rnbqkbnr/pppppppp/8/8/8/5N2/PPPPPPPP/RNBQKB1R b 1");

        let restored = Game::from_setup(setup, EdgeMode::Standard).expect("valid position");
        assert_eq!(restored.active_side(), Color::Black);
        assert_eq!(restored.legal_moves().len(), 20);
    }

    #[test]
    fn test_capture_beyond_tally_is_rejected() {
        let mut game = Game::new();
        play(&mut game, Square::E2, Square::E4).expect("legal");
        play(&mut game, Square::D7, Square::D5).expect("legal");

        game.tallies.white = Tally::from_counts(ByRole { pawn: 0, ..Tally::new().counts() })
            .expect("valid counts");
        let before = game.clone();

        assert_eq!(
            play(&mut game, Square::E4, Square::D5),
            Err(PlayError::Tally(CaptureError { role: Role::Pawn }))
        );
        assert_eq!(game, before);
        assert!(game.legal_moves().iter().all(|m| !m.is_capture()));
        assert!(play(&mut game, Square::E4, Square::E5).is_ok());
    }

    #[test]
    fn test_legal_moves_from_start() {
        let moves = Game::new().legal_moves();
        assert_eq!(moves.len(), 20);
        assert_eq!(moves.iter().filter(|m| m.role == Role::Knight).count(), 4);
        assert!(moves.iter().all(|m| !m.is_capture()));
    }
}
