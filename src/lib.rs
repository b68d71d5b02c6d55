//! A rules engine for a chess variant in which a player wins by capturing
//! every opponent piece of any one kind: all eight pawns, both knights, both
//! bishops, both rooks, the queen or the king.
//!
//! There is no check, no checkmate, no castling, no en passant and no
//! promotion. Pieces otherwise move as in chess.
//!
//! # Examples
//!
//! Play moves:
//!
//! ```
//! use chessvar::{new_game, Color, Coordinate};
//!
//! let mut game = new_game();
//!
//! // 1. e4
//! let e2: Coordinate = "e2".parse()?;
//! let e4: Coordinate = "e4".parse()?;
//! assert!(game.attempt_move(e2, e4));
//! assert_eq!(game.active_side(), Color::Black);
//! # Ok::<_, chessvar::ParseCoordinateError>(())
//! ```
//!
//! Find out why a move was rejected:
//!
//! ```
//! use chessvar::{new_game, PlayError, Square};
//!
//! let mut game = new_game();
//! assert_eq!(
//!     game.play(Square::A1.into(), Square::A8.into()),
//!     Err(PlayError::IllegalMove)
//! );
//! ```
//!
//! Watch for the end of the game:
//!
//! ```
//! use chessvar::{new_game, GameState};
//!
//! let game = new_game();
//! assert_eq!(game.game_state(), GameState::InProgress);
//! assert_eq!(game.game_state().to_string(), "UNFINISHED");
//! ```
//!
//! Also supports [setups](Setup) and [UCI](uci) formats for positions and
//! moves.
//!
//! # Feature flags
//!
//! * `serde`: Implements [`serde::Serialize`](https://docs.rs/serde/1/serde/trait.Serialize.html)
//!   and [`serde::Deserialize`](https://docs.rs/serde/1/serde/trait.Deserialize.html) for
//!   types with unique natural representations.
//! * `arbitrary`: Implements
//!   [`arbitrary::Arbitrary`](https://docs.rs/arbitrary/1/arbitrary/trait.Arbitrary.html)
//!   for the vocabulary types.
//! * `nohash-hasher`: Implements
//!   [`nohash_hasher::IsEnabled`](https://docs.rs/nohash-hasher/0.2/nohash_hasher/trait.IsEnabled.html)
//!   for sensible types.
//!
//! # Logging
//!
//! Rejected moves are reported through [`tracing`] at trace level, played
//! moves and captures at debug level, and decided games at info level. No
//! subscriber is installed.

#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]
#![cfg_attr(docs_rs, feature(doc_auto_cfg))]

#[macro_use]
mod util;
mod color;
mod game;
mod m;
mod perft;
mod role;
mod setup;
mod square;
mod tally;
mod types;

pub mod attacks;
pub mod bitboard;
pub mod board;
pub mod rules;
pub mod uci;

pub use bitboard::Bitboard;
pub use board::{Board, InvalidCoordinate};
pub use color::{ByColor, Color, ParseColorError};
pub use game::{Game, GameState, ParseGameStateError, PlayError};
pub use m::{Move, MoveList};
pub use perft::perft;
pub use role::{ByRole, ParseRoleError, Role};
pub use setup::{ParseSetupError, Setup, SetupError, SetupErrorKinds};
pub use square::{Coordinate, File, ParseCoordinateError, ParseSquareError, Rank, Square};
pub use tally::{CaptureError, Tally};
pub use types::{EdgeMode, Piece};
pub use uci::{ParseUciError, Uci};

/// Starts a game from the standard position, white to move.
pub fn new_game() -> Game {
    Game::new()
}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for File {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Rank {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Square {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Role {}

#[cfg(feature = "nohash-hasher")]
impl nohash_hasher::IsEnabled for Color {}
