//! Cube state and slice grouping.

use cgmath::Vector3;
use smallvec::SmallVec;

use crate::{CubeError, Direction, Face, GridPos, Move, Piece, PieceId, StickerColor};

/// Number of movable pieces in a 3x3x3 cube.
pub const PIECE_COUNT: usize = 26;
/// Number of pieces in each face slice.
pub const SLICE_SIZE: usize = 9;

/// Pieces in a single face slice.
pub type SliceMembers = SmallVec<[PieceId; SLICE_SIZE]>;

/// State of a 3x3x3 puzzle cube.
///
/// Slice membership is derived from piece positions and is recomputed from
/// scratch after every committed move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cube {
    /// Pieces, indexed by [`PieceId`].
    pieces: Vec<Piece>,
    /// Members of each slice, indexed by [`Face::idx()`].
    slices: [SliceMembers; Face::COUNT],
}
impl Default for Cube {
    fn default() -> Self {
        Self::new()
    }
}
impl Cube {
    /// Constructs a solved cube.
    pub fn new() -> Self {
        let pieces = GridPos::iter_pieces()
            .enumerate()
            .map(|(i, pos)| Piece::new(PieceId(i as u8), pos))
            .collect();
        let mut ret = Self {
            pieces,
            slices: Default::default(),
        };
        ret.regroup();
        ret
    }

    /// Returns all pieces, in order of ID.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }
    /// Returns the piece with the given ID.
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.idx())
    }
    /// Returns the piece currently at `pos`, or `None` if `pos` is the core.
    pub fn piece_at(&self, pos: GridPos) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.pos == pos)
    }
    /// Returns the IDs of the pieces currently in the slice adjacent to
    /// `face`.
    pub fn slice(&self, face: Face) -> &[PieceId] {
        &self.slices[face.idx()]
    }
    /// Returns the pieces currently in the slice adjacent to `face`.
    pub fn slice_pieces(&self, face: Face) -> impl Iterator<Item = &Piece> {
        self.slice(face).iter().map(|id| &self.pieces[id.idx()])
    }
    /// Returns the slices that a piece currently belongs to.
    pub fn slices_of(&self, id: PieceId) -> SmallVec<[Face; 3]> {
        Face::iter()
            .filter(|face| self.slice(*face).contains(&id))
            .collect()
    }

    /// Recomputes slice membership from piece positions.
    fn regroup(&mut self) {
        for slice in &mut self.slices {
            slice.clear();
        }
        for piece in &self.pieces {
            for face in piece.pos.faces() {
                self.slices[face.idx()].push(piece.id());
            }
        }
        debug_assert!(self.slices.iter().all(|s| s.len() == SLICE_SIZE));
    }

    /// Applies a quarter turn.
    ///
    /// Every piece in the slice has its position and orientation multiplied by
    /// the rotation matrix and rounded back onto the grid. If any piece fails
    /// to land on the grid, then the cube is not modified.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), CubeError> {
        let rot = mv.rotation().matrix();

        let new_states = self
            .slice_pieces(mv.face)
            .map(|piece| {
                let off_grid = || CubeError::OffGrid {
                    mv,
                    piece: piece.id(),
                    from: piece.pos,
                };
                let pos =
                    GridPos::from_vector_rounded(rot * piece.pos.to_vector()).ok_or_else(off_grid)?;
                let orientation = piece.orientation.rotated_by(rot).ok_or_else(off_grid)?;
                Ok((piece.id(), pos, orientation))
            })
            .collect::<Result<SmallVec<[_; SLICE_SIZE]>, CubeError>>()?;

        for (id, pos, orientation) in new_states {
            let piece = &mut self.pieces[id.idx()];
            piece.pos = pos;
            piece.orientation = orientation;
        }
        self.regroup();

        log::trace!("applied {mv}");
        Ok(())
    }
    /// Applies a quarter turn of the slice with the given name (such as
    /// `"front"`).
    pub fn apply_move_named(&mut self, name: &str, direction: Direction) -> Result<(), CubeError> {
        let face = name
            .parse()
            .map_err(|_| CubeError::UnknownFace(name.to_owned()))?;
        self.apply_move(Move::new(face, direction))
    }
    /// Applies a sequence of quarter turns, stopping at the first error.
    pub fn apply_moves(&mut self, moves: impl IntoIterator<Item = Move>) -> Result<(), CubeError> {
        moves.into_iter().try_for_each(|mv| self.apply_move(mv))
    }

    /// Returns every piece to its initial position and orientation.
    pub fn reset(&mut self) {
        for piece in &mut self.pieces {
            piece.reset();
        }
        self.regroup();
    }

    /// Returns whether every piece is at its initial position and
    /// orientation.
    pub fn is_reset(&self) -> bool {
        self.pieces.iter().all(Piece::is_home)
    }
    /// Returns whether each face of the cube shows a single color.
    pub fn is_solved(&self) -> bool {
        Face::iter().all(|face| {
            let mut colors = self.slice_pieces(face).map(|p| p.sticker_facing(face));
            let first = colors.next().flatten();
            first.is_some() && colors.all(|c| c == first)
        })
    }

    /// Returns the color of a sticker as seen when looking at `face` from
    /// outside the cube, with `row` and `col` each in `0..3`.
    ///
    /// Rows go from top to bottom and columns from left to right in the
    /// usual unfolded layout: side faces are viewed upright, the top face is
    /// viewed with the front face below it, and the bottom face is viewed with
    /// the front face above it.
    pub fn facelet(&self, face: Face, row: usize, col: usize) -> Option<StickerColor> {
        if row >= 3 || col >= 3 {
            return None;
        }
        let (right, down) = facelet_basis(face);
        let offset = right * (col as f32 - 1.0) + down * (row as f32 - 1.0);
        let pos = GridPos::from_vector_rounded(face.center().to_vector() + offset)?;
        self.piece_at(pos)?.sticker_facing(face)
    }
}

/// Returns the screen-right and screen-down directions when looking at a
/// face in the unfolded layout.
fn facelet_basis(face: Face) -> (Vector3<f32>, Vector3<f32>) {
    let x = Vector3::unit_x();
    let y = Vector3::unit_y();
    let z = Vector3::unit_z();
    match face {
        Face::Front => (x, -y),
        Face::Back => (-x, -y),
        Face::Right => (-z, -y),
        Face::Left => (z, -y),
        Face::Top => (x, z),
        Face::Bottom => (x, -z),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::Sign;

    fn pos(x: i32, y: i32, z: i32) -> GridPos {
        GridPos::new(x, y, z).unwrap()
    }

    #[test]
    fn test_new_cube() {
        let cube = Cube::new();
        assert_eq!(cube.pieces().len(), PIECE_COUNT);
        for face in Face::iter() {
            assert_eq!(cube.slice(face).len(), SLICE_SIZE);
        }
        let positions: HashSet<GridPos> = cube.pieces().iter().map(Piece::pos).collect();
        assert_eq!(positions.len(), PIECE_COUNT);
        assert!(cube.is_reset());
        assert!(cube.is_solved());
    }

    #[test]
    fn test_top_turn_moves_corner_to_front() {
        let mut cube = Cube::new();
        let id = cube.piece_at(pos(-1, 1, -1)).unwrap().id();
        assert_eq!(
            cube.slices_of(id).as_slice(),
            &[Face::Left, Face::Top, Face::Back],
        );

        cube.apply_move(Move::new(Face::Top, Direction::Cw)).unwrap();

        assert_eq!(cube.piece(id).unwrap().pos(), pos(-1, 1, 1));
        assert_eq!(
            cube.slices_of(id).as_slice(),
            &[Face::Left, Face::Top, Face::Front],
        );
    }

    #[test]
    fn test_move_only_touches_slice() {
        let mut cube = Cube::new();
        cube.apply_move(Move::new(Face::Right, Direction::Ccw)).unwrap();
        for piece in cube.pieces() {
            if piece.home().x() == Sign::Pos {
                assert_eq!(piece.pos().x(), Sign::Pos);
            } else {
                assert!(piece.is_home());
            }
        }
        // The center of the turned face stays in place but rotates.
        let center = cube.piece_at(Face::Right.center()).unwrap();
        assert_eq!(center.home(), Face::Right.center());
        assert!(!center.orientation().is_ident());
        assert!(!cube.is_solved());
    }

    #[test]
    fn test_unknown_face_is_rejected() {
        let mut cube = Cube::new();
        let before = cube.clone();
        assert_eq!(
            cube.apply_move_named("middle", Direction::Cw),
            Err(CubeError::UnknownFace("middle".to_owned())),
        );
        assert_eq!(cube, before);
        cube.apply_move_named("bottom", Direction::Ccw).unwrap();
        assert_ne!(cube, before);
    }

    #[test]
    fn test_reset() {
        let mut cube = Cube::new();
        cube.apply_moves(crate::parse_moves("R U F' L D B'").unwrap())
            .unwrap();
        assert!(!cube.is_reset());
        cube.reset();
        assert_eq!(cube, Cube::new());
        cube.reset();
        assert_eq!(cube, Cube::new());
    }

    #[test]
    fn test_facelets() {
        let mut cube = Cube::new();
        for face in Face::iter() {
            for row in 0..3 {
                for col in 0..3 {
                    assert_eq!(cube.facelet(face, row, col), Some(StickerColor::of_face(face)));
                }
            }
        }
        assert_eq!(cube.facelet(Face::Front, 3, 0), None);

        // A positive turn about +Y carries the left face's top row to the
        // front.
        cube.apply_move(Move::new(Face::Top, Direction::Cw)).unwrap();
        for col in 0..3 {
            assert_eq!(cube.facelet(Face::Front, 0, col), Some(StickerColor::Blue));
            assert_eq!(cube.facelet(Face::Front, 1, col), Some(StickerColor::Red));
        }
    }
}
