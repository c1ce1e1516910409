//! Puzzle state of a 3x3x3 twisty cube.
//!
//! The cube consists of 26 pieces on a grid with coordinates in `{-1, 0, 1}`.
//! Six slices, one per face, each contain the 9 pieces adjacent to that face.
//! A move rotates one slice a quarter turn about the face's outward normal.

mod cube;
mod error;
mod geometry;
mod orientation;
mod piece;
mod sign;
mod twist;

pub use cube::{Cube, PIECE_COUNT, SLICE_SIZE, SliceMembers};
pub use error::CubeError;
pub use geometry::{Axis, Face, GridPos};
pub use orientation::Orientation;
pub use piece::{INTERIOR_RGB, Piece, PieceId, StickerColor};
pub use sign::Sign;
pub use twist::{Direction, Move, MoveRotation, compute_move, parse_moves};

/// Number of random moves in a scramble.
pub const SCRAMBLE_MOVE_COUNT: usize = 20;

/// Edge length of a rendered piece, where pieces are spaced 1 unit apart.
pub const CUBELET_SIZE: f32 = 0.95;
