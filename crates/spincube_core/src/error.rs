use thiserror::Error;

use crate::{GridPos, Move, PieceId};

/// Error returned when a move cannot be applied to the cube.
///
/// The cube is never modified when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
    /// The slice name does not name any face.
    #[error("unknown face {0:?}")]
    UnknownFace(String),
    /// Rotating a piece moved it off the grid.
    #[error("{mv} would move piece {piece} from {from} off the grid")]
    OffGrid {
        /// Move that was attempted.
        mv: Move,
        /// Piece that would have left the grid.
        piece: PieceId,
        /// Position of the piece before the move.
        from: GridPos,
    },
}
