//! Axes, faces, and grid positions of a 3x3x3 cube.

use std::fmt;
use std::ops::{Index, IndexMut, Neg};

use cgmath::Vector3;
use strum::VariantArray;

use crate::Sign;

/// A 3-dimensional axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// X axis (right).
    X = 0,
    /// Y axis (up).
    Y = 1,
    /// Z axis (towards the camera).
    Z = 2,
}
impl Axis {
    /// All axes, in order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Returns an integer index for this axis; X = 0, Y = 1, Z = 2.
    pub const fn int(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
    /// Returns the face on the positive end of this axis.
    pub const fn pos_face(self) -> Face {
        match self {
            Self::X => Face::Right,
            Self::Y => Face::Top,
            Self::Z => Face::Front,
        }
    }
    /// Returns the unit vector along this axis.
    pub fn unit_vector(self) -> Vector3<f32> {
        let mut ret = Vector3::new(0.0, 0.0, 0.0);
        ret[self.int()] = 1.0;
        ret
    }
    /// Returns an iterator over all axes.
    pub fn iter() -> impl Clone + Iterator<Item = Axis> {
        Self::ALL.into_iter()
    }
}

/// A face of the cube, which also names the slice of pieces adjacent to it.
///
/// The order of variants matches the order of the material slots on each
/// piece: right, left, top, bottom, front, back.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::VariantArray,
)]
#[strum(serialize_all = "lowercase")]
pub enum Face {
    /// +X
    Right,
    /// -X
    Left,
    /// +Y
    Top,
    /// -Y
    Bottom,
    /// +Z
    Front,
    /// -Z
    Back,
}
impl Face {
    /// Number of faces on a cube.
    pub const COUNT: usize = 6;

    /// Returns the face on the given axis with the given sign, or `None` if
    /// the sign is zero.
    pub const fn new(axis: Axis, sign: Sign) -> Option<Self> {
        match (axis, sign) {
            (Axis::X, Sign::Pos) => Some(Self::Right),
            (Axis::X, Sign::Neg) => Some(Self::Left),
            (Axis::Y, Sign::Pos) => Some(Self::Top),
            (Axis::Y, Sign::Neg) => Some(Self::Bottom),
            (Axis::Z, Sign::Pos) => Some(Self::Front),
            (Axis::Z, Sign::Neg) => Some(Self::Back),
            (_, Sign::Zero) => None,
        }
    }
    /// Returns the axis perpendicular to this face.
    pub const fn axis(self) -> Axis {
        match self {
            Self::Right | Self::Left => Axis::X,
            Self::Top | Self::Bottom => Axis::Y,
            Self::Front | Self::Back => Axis::Z,
        }
    }
    /// Returns the sign of this face along its perpendicular axis.
    pub const fn sign(self) -> Sign {
        match self {
            Self::Right | Self::Top | Self::Front => Sign::Pos,
            Self::Left | Self::Bottom | Self::Back => Sign::Neg,
        }
    }
    /// Returns an index for this face, in the range `0..6`.
    pub const fn idx(self) -> usize {
        self as usize
    }
    /// Returns the outward unit normal of this face.
    pub fn normal(self) -> Vector3<f32> {
        self.axis().unit_vector() * self.sign().float()
    }
    /// Returns the conventional one-letter symbol for a twist of this face.
    pub const fn symbol(self) -> char {
        match self {
            Self::Right => 'R',
            Self::Left => 'L',
            Self::Top => 'U',
            Self::Bottom => 'D',
            Self::Front => 'F',
            Self::Back => 'B',
        }
    }
    /// Returns the face with the given one-letter symbol.
    pub fn from_symbol(c: char) -> Option<Self> {
        Self::iter().find(|f| f.symbol() == c.to_ascii_uppercase())
    }
    /// Returns the piece position at the center of this face.
    pub fn center(self) -> GridPos {
        let mut ret = GridPos::CORE;
        ret[self.axis()] = self.sign();
        ret
    }
    /// Returns an iterator over all faces.
    pub fn iter() -> impl Clone + Iterator<Item = Face> {
        Self::VARIANTS.iter().copied()
    }
}
impl Neg for Face {
    type Output = Face;
    fn neg(self) -> Self {
        match self {
            Self::Right => Self::Left,
            Self::Left => Self::Right,
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Front => Self::Back,
            Self::Back => Self::Front,
        }
    }
}

/// Position of a piece in the cube grid. Each coordinate is in `{-1, 0, 1}`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridPos(pub [Sign; 3]);
impl Index<Axis> for GridPos {
    type Output = Sign;
    fn index(&self, axis: Axis) -> &Sign {
        &self.0[axis.int()]
    }
}
impl IndexMut<Axis> for GridPos {
    fn index_mut(&mut self, axis: Axis) -> &mut Sign {
        &mut self.0[axis.int()]
    }
}
impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.0.map(Sign::int);
        write!(f, "({x}, {y}, {z})")
    }
}
impl GridPos {
    /// Position at the center of the cube, which has no piece.
    pub const CORE: Self = Self([Sign::Zero; 3]);

    /// Constructs a grid position from integer coordinates, or returns `None`
    /// if any coordinate is outside `{-1, 0, 1}`.
    pub fn new(x: i32, y: i32, z: i32) -> Option<Self> {
        Some(Self([
            Sign::try_from(x).ok()?,
            Sign::try_from(y).ok()?,
            Sign::try_from(z).ok()?,
        ]))
    }
    /// Returns the X coordinate.
    pub fn x(self) -> Sign {
        self[Axis::X]
    }
    /// Returns the Y coordinate.
    pub fn y(self) -> Sign {
        self[Axis::Y]
    }
    /// Returns the Z coordinate.
    pub fn z(self) -> Sign {
        self[Axis::Z]
    }
    /// Returns whether this is the center of the cube.
    pub fn is_core(self) -> bool {
        self == Self::CORE
    }
    /// Returns the number of nonzero coordinates, which is the number of
    /// exterior faces of a piece at this position.
    pub fn exterior_face_count(self) -> usize {
        self.0.iter().map(|s| s.abs()).sum()
    }
    /// Returns whether this position is on the given face.
    pub fn is_on(self, face: Face) -> bool {
        self[face.axis()] == face.sign()
    }
    /// Returns the faces that this position is on, in axis order.
    pub fn faces(self) -> impl Iterator<Item = Face> {
        Axis::iter().filter_map(move |axis| Face::new(axis, self[axis]))
    }

    /// Returns this position as a floating-point vector.
    pub fn to_vector(self) -> Vector3<f32> {
        let [x, y, z] = self.0.map(Sign::float);
        Vector3::new(x, y, z)
    }
    /// Rounds each component of a vector to the nearest grid coordinate, or
    /// returns `None` if any component is too far outside the grid.
    pub fn from_vector_rounded(v: Vector3<f32>) -> Option<Self> {
        Some(Self([
            Sign::round(v.x)?,
            Sign::round(v.y)?,
            Sign::round(v.z)?,
        ]))
    }

    /// Returns an iterator over all 26 piece positions, excluding the core.
    ///
    /// Positions are produced with X varying slowest and Z varying fastest.
    pub fn iter_pieces() -> impl Clone + Iterator<Item = Self> {
        Sign::iter()
            .flat_map(|x| Sign::iter().map(move |y| (x, y)))
            .flat_map(|(x, y)| Sign::iter().map(move |z| Self([x, y, z])))
            .filter(|p| !p.is_core())
    }
}
