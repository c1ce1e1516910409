//! Sign enum, used for grid coordinates and face directions.

use std::ops::{Mul, Neg};

/// Positive, negative, or zero.
///
/// Every grid coordinate of a piece is a `Sign`, which makes it impossible to
/// represent a position outside of `{-1, 0, 1}^3`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sign {
    /// Negative.
    Neg = -1,
    /// Zero.
    #[default]
    Zero = 0,
    /// Positive.
    Pos = 1,
}
impl Neg for Sign {
    type Output = Sign;
    fn neg(self) -> Sign {
        match self {
            Sign::Neg => Sign::Pos,
            Sign::Zero => Sign::Zero,
            Sign::Pos => Sign::Neg,
        }
    }
}
impl Mul<Sign> for Sign {
    type Output = Sign;
    fn mul(self, rhs: Sign) -> Sign {
        match self {
            Sign::Neg => -rhs,
            Sign::Zero => Sign::Zero,
            Sign::Pos => rhs,
        }
    }
}
impl TryFrom<i32> for Sign {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Sign::Neg),
            0 => Ok(Sign::Zero),
            1 => Ok(Sign::Pos),
            _ => Err(value),
        }
    }
}
impl Sign {
    /// All signs, from negative to positive.
    pub const ALL: [Sign; 3] = [Sign::Neg, Sign::Zero, Sign::Pos];

    /// Returns an integer representation of the sign (either -1, 0, or 1).
    pub const fn int(self) -> i32 {
        match self {
            Sign::Neg => -1,
            Sign::Zero => 0,
            Sign::Pos => 1,
        }
    }
    /// Returns a floating-point representation of the sign (either -1.0, 0.0,
    /// or 1.0).
    pub const fn float(self) -> f32 {
        self.int() as f32
    }
    /// Returns the absolute value of the integer representation of the sign
    /// (either 0 or 1).
    pub const fn abs(self) -> usize {
        match self {
            Sign::Neg | Sign::Pos => 1,
            Sign::Zero => 0,
        }
    }

    /// Rounds a floating-point value to the nearest integer and returns the
    /// corresponding sign, or `None` if the nearest integer is not -1, 0, or 1.
    ///
    /// This absorbs floating-point error after multiplying a grid vector by a
    /// rotation matrix.
    pub fn round(x: f32) -> Option<Sign> {
        if !x.is_finite() {
            return None;
        }
        Sign::try_from(x.round() as i32).ok()
    }

    /// Returns an iterator over all signs.
    pub fn iter() -> impl Clone + Iterator<Item = Sign> {
        Self::ALL.into_iter()
    }
}
