//! Discrete orientation of a single piece.

use std::ops::{Index, Mul};

use cgmath::{Matrix3, SquareMatrix};
use itertools::Itertools;

use crate::{Axis, Face, GridPos, Sign};

/// Orientation of a piece, as one of the 24 rotations of a cube.
///
/// `orientation[axis]` is the face that the piece's own positive `axis`
/// points toward. Equivalently, this is a signed permutation matrix whose
/// columns are the normals of `orientation[Axis::X]`, `orientation[Axis::Y]`,
/// and `orientation[Axis::Z]`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Orientation([Face; 3]);
impl Default for Orientation {
    fn default() -> Self {
        Self::IDENT
    }
}
impl Index<Axis> for Orientation {
    type Output = Face;
    fn index(&self, axis: Axis) -> &Face {
        &self.0[axis.int()]
    }
}
impl Mul<Orientation> for Orientation {
    type Output = Self;

    /// Composes two orientations. `(a * b)` applies `b` first, then `a`.
    fn mul(self, rhs: Self) -> Self {
        Self(rhs.0.map(|face| self.apply_to_face(face)))
    }
}
impl Orientation {
    /// Identity orientation.
    pub const IDENT: Self = Self([Face::Right, Face::Top, Face::Front]);

    /// Returns the face that `local` (a face in the piece's home frame) now
    /// points toward.
    pub fn apply_to_face(self, local: Face) -> Face {
        let face = self[local.axis()];
        match local.sign() {
            Sign::Neg => -face,
            Sign::Zero | Sign::Pos => face,
        }
    }
    /// Returns the face in the piece's home frame that now points toward
    /// `world`.
    pub fn local_face_toward(self, world: Face) -> Face {
        self.rev().apply_to_face(world)
    }
    /// Rotates a grid position.
    pub fn apply_to_pos(self, pos: GridPos) -> GridPos {
        let mut ret = GridPos::CORE;
        for axis in Axis::iter() {
            let face = self[axis];
            ret[face.axis()] = pos[axis] * face.sign();
        }
        ret
    }

    /// Returns the inverse orientation.
    #[must_use]
    pub fn rev(self) -> Self {
        let mut ret = Self::IDENT.0;
        for axis in Axis::iter() {
            let face = self[axis];
            let home = axis.pos_face();
            ret[face.axis().int()] = match face.sign() {
                Sign::Neg => -home,
                Sign::Zero | Sign::Pos => home,
            };
        }
        Self(ret)
    }
    /// Returns whether this is the identity orientation.
    pub fn is_ident(self) -> bool {
        self == Self::IDENT
    }

    /// Returns the rotation matrix for this orientation.
    pub fn to_matrix(self) -> Matrix3<f32> {
        let [x, y, z] = self.0.map(Face::normal);
        Matrix3::from_cols(x, y, z)
    }
    /// Rounds each entry of a matrix to `{-1, 0, 1}` and returns the
    /// corresponding orientation, or `None` if the result is not a proper
    /// rotation of the cube.
    pub fn from_matrix_rounded(m: Matrix3<f32>) -> Option<Self> {
        let cols = [m.x, m.y, m.z].map(|col| {
            let pos = GridPos::from_vector_rounded(col)?;
            // Each column must be a single axis.
            pos.faces().exactly_one().ok()
        });
        let [Some(x), Some(y), Some(z)] = cols else {
            return None;
        };
        let ret = Self([x, y, z]);
        // Reject reflections and degenerate matrices.
        let det = ret.to_matrix().determinant();
        (det > 0.5).then_some(ret)
    }
    /// Applies a rotation matrix after this orientation, rounding the result.
    pub fn rotated_by(self, rot: Matrix3<f32>) -> Option<Self> {
        Self::from_matrix_rounded(rot * self.to_matrix())
    }

    /// Returns an iterator over all 24 orientations.
    pub fn iter() -> impl Iterator<Item = Self> {
        Face::iter()
            .cartesian_product(Face::iter())
            .filter(|(x, y)| x.axis() != y.axis())
            .filter_map(|(x, y)| {
                let z = x.normal().cross(y.normal());
                let z = GridPos::from_vector_rounded(z)?.faces().exactly_one().ok()?;
                Some(Self([x, y, z]))
            })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use cgmath::{Rad, Vector3};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_orientation_count() {
        let all: HashSet<Orientation> = Orientation::iter().collect();
        assert_eq!(all.len(), 24);
    }

    #[test]
    fn test_orientation_inverse() {
        for o in Orientation::iter() {
            assert_eq!(o * o.rev(), Orientation::IDENT);
            assert_eq!(o.rev() * o, Orientation::IDENT);
            for face in Face::iter() {
                assert_eq!(o.local_face_toward(o.apply_to_face(face)), face);
            }
        }
    }

    #[test]
    fn test_orientation_matches_matrix() {
        let v = Vector3::new(1.0, -1.0, 0.0);
        for a in Orientation::iter() {
            for b in Orientation::iter() {
                assert_eq!((a * b).to_matrix(), a.to_matrix() * b.to_matrix());
            }
            let pos = GridPos::from_vector_rounded(v).unwrap();
            assert_eq!(
                a.apply_to_pos(pos),
                GridPos::from_vector_rounded(a.to_matrix() * v).unwrap(),
            );
        }
    }

    #[test]
    fn test_rotated_by_absorbs_float_error() {
        let rot = Matrix3::from_axis_angle(Vector3::unit_y(), Rad(std::f32::consts::FRAC_PI_2));
        let o = Orientation::IDENT.rotated_by(rot).unwrap();
        // +X goes to -Z when rotating a quarter turn about +Y.
        assert_eq!(o[Axis::X], Face::Back);
        assert_eq!(o[Axis::Y], Face::Top);
        assert_eq!(o[Axis::Z], Face::Right);
    }

    #[test]
    fn test_reject_reflection() {
        let m = Matrix3::from_cols(-Vector3::unit_x(), Vector3::unit_y(), Vector3::unit_z());
        assert_eq!(Orientation::from_matrix_rounded(m), None);
    }
}
