//! Quarter turns of a single face.

use std::f32::consts::FRAC_PI_2;
use std::fmt;
use std::str::FromStr;

use cgmath::{Matrix3, Quaternion, Rad, Rotation3, Vector3};
use rand::Rng;

use crate::{CubeError, Face, Sign};

/// Direction of a quarter turn.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Positive (right-handed) rotation about the face's outward normal. This
    /// is the default for user input.
    ///
    /// Seen from outside the cube, looking at the face, this turns the face
    /// counterclockwise.
    #[default]
    Cw,
    /// Negative rotation about the face's outward normal. Seen from outside the
    /// cube, this turns the face clockwise.
    Ccw,
}
impl Direction {
    /// Returns the reverse direction.
    #[must_use]
    pub fn rev(self) -> Self {
        match self {
            Self::Cw => Self::Ccw,
            Self::Ccw => Self::Cw,
        }
    }
    /// Returns the sign of this direction: `Pos` for `Cw` and `Neg` for `Ccw`.
    pub fn sign(self) -> Sign {
        match self {
            Self::Cw => Sign::Pos,
            Self::Ccw => Sign::Neg,
        }
    }
}
impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Cw => Ok(()),
            Direction::Ccw => write!(f, "'"),
        }
    }
}

/// Axis and angle of a quarter turn.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MoveRotation {
    /// Unit vector, equal to the outward normal of the face being turned.
    pub axis: Vector3<f32>,
    /// Angle of rotation, either +π/2 or -π/2.
    pub angle: Rad<f32>,
}
impl MoveRotation {
    /// Returns the rotation matrix for this rotation.
    pub fn matrix(self) -> Matrix3<f32> {
        Matrix3::from_axis_angle(self.axis, self.angle)
    }
    /// Returns the rotation quaternion for this rotation.
    pub fn quaternion(self) -> Quaternion<f32> {
        Quaternion::from_axis_angle(self.axis, self.angle)
    }
}

/// Computes the axis and angle of a quarter turn of `face` in `direction`.
///
/// The axis is the face's outward normal, so opposite faces rotate about
/// opposite axes. The angle is `direction * π/2`.
pub fn compute_move(face: Face, direction: Direction) -> MoveRotation {
    MoveRotation {
        axis: face.normal(),
        angle: Rad(FRAC_PI_2 * direction.sign().float()),
    }
}

/// Quarter turn of a single face.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    /// Face whose slice is turned.
    pub face: Face,
    /// Direction of the turn.
    pub direction: Direction,
}
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face.symbol(), self.direction)
    }
}
impl From<Face> for Move {
    fn from(face: Face) -> Self {
        Self::new(face, Direction::default())
    }
}
impl FromStr for Move {
    type Err = CubeError;

    /// Parses a move in cube notation (`R`, `U'`) or by face name (`right`,
    /// `top'`). A trailing `'` reverses the direction.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (name, direction) = match s.strip_suffix('\'') {
            Some(rest) => (rest, Direction::Ccw),
            None => (s, Direction::Cw),
        };
        let mut chars = name.chars();
        let face = match (chars.next(), chars.next()) {
            (Some(c), None) => Face::from_symbol(c),
            _ => name.to_ascii_lowercase().parse().ok(),
        };
        match face {
            Some(face) => Ok(Self::new(face, direction)),
            None => Err(CubeError::UnknownFace(name.to_owned())),
        }
    }
}
impl Move {
    /// Constructs a quarter turn of `face` in `direction`.
    pub const fn new(face: Face, direction: Direction) -> Self {
        Self { face, direction }
    }
    /// Returns the move that undoes this one.
    #[must_use]
    pub fn rev(self) -> Self {
        Self {
            face: self.face,
            direction: self.direction.rev(),
        }
    }
    /// Returns the axis and angle of this move.
    pub fn rotation(self) -> MoveRotation {
        compute_move(self.face, self.direction)
    }
    /// Returns a random move, with every face and direction equally likely.
    pub fn random(rng: &mut impl Rng) -> Self {
        let face_count = Face::COUNT;
        let face = Face::iter()
            .nth(rng.random_range(0..face_count))
            .unwrap_or(Face::Front);
        let direction = if rng.random_bool(0.5) {
            Direction::Cw
        } else {
            Direction::Ccw
        };
        Self { face, direction }
    }
}

/// Parses a whitespace-separated sequence of moves.
pub fn parse_moves(s: &str) -> Result<Vec<Move>, CubeError> {
    s.split_whitespace().map(str::parse).collect()
}

#[cfg(test)]
mod tests {
    use cgmath::{InnerSpace, Rotation};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_compute_move_axes() {
        assert_eq!(compute_move(Face::Front, Direction::Cw).axis, Vector3::unit_z());
        assert_eq!(compute_move(Face::Back, Direction::Cw).axis, -Vector3::unit_z());
        assert_eq!(compute_move(Face::Right, Direction::Cw).axis, Vector3::unit_x());
        assert_eq!(compute_move(Face::Left, Direction::Cw).axis, -Vector3::unit_x());
        assert_eq!(compute_move(Face::Top, Direction::Cw).axis, Vector3::unit_y());
        assert_eq!(compute_move(Face::Bottom, Direction::Cw).axis, -Vector3::unit_y());

        assert_eq!(compute_move(Face::Top, Direction::Cw).angle, Rad(FRAC_PI_2));
        assert_eq!(compute_move(Face::Top, Direction::Ccw).angle, Rad(-FRAC_PI_2));
    }

    #[test]
    fn test_cw_is_counterclockwise_from_outside() {
        // Looking at the front face from +Z, with +Y up and +X to the right,
        // the top edge moves to the left.
        let rot = compute_move(Face::Front, Direction::Cw).matrix();
        let moved = rot * Vector3::new(0.0, 1.0, 0.0);
        assert!((moved - Vector3::new(-1.0, 0.0, 0.0)).magnitude() < 1e-5);

        let rot = compute_move(Face::Front, Direction::Ccw).matrix();
        let moved = rot * Vector3::new(0.0, 1.0, 0.0);
        assert!((moved - Vector3::new(1.0, 0.0, 0.0)).magnitude() < 1e-5);
    }

    #[test]
    fn test_matrix_and_quaternion_agree() {
        let v = Vector3::new(-1.0, 1.0, -1.0);
        for face in Face::iter() {
            for direction in [Direction::Cw, Direction::Ccw] {
                let rot = compute_move(face, direction);
                let by_matrix = rot.matrix() * v;
                let by_quat = rot.quaternion().rotate_vector(v);
                assert!((by_matrix - by_quat).magnitude() < 1e-5);
            }
        }
    }

    #[test]
    fn test_parse_moves() {
        assert_eq!(
            parse_moves("R U' front top'").unwrap(),
            vec![
                Move::new(Face::Right, Direction::Cw),
                Move::new(Face::Top, Direction::Ccw),
                Move::new(Face::Front, Direction::Cw),
                Move::new(Face::Top, Direction::Ccw),
            ],
        );
        assert!(matches!("M".parse::<Move>(), Err(CubeError::UnknownFace(_))));
        assert!(matches!("sideways".parse::<Move>(), Err(CubeError::UnknownFace(_))));
    }

    #[test]
    fn test_display() {
        assert_eq!(Move::new(Face::Bottom, Direction::Ccw).to_string(), "D'");
        assert_eq!(Move::from(Face::Back).to_string(), "B");
        assert_eq!(Move::from(Face::Back).rev().rev(), Move::from(Face::Back));
    }
}
