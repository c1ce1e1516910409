//! Time-sliced quarter-turn animation.

use cgmath::{Matrix4, One, Quaternion};
use spincube_core::{Cube, CubeError, Move, Piece, PieceId, SliceMembers};
use spincube_prefs::InterpolateFn;

/// Capability to report whether an animation is in flight.
pub trait AnimationStatus {
    /// Returns whether an animation is in flight, in which case new moves and
    /// pointer interaction are rejected.
    fn is_animating(&self) -> bool;
}

/// Quarter turn being animated.
#[derive(Debug, Clone, PartialEq)]
pub struct TwistAnimation {
    /// Move that will be committed when the animation completes.
    pub mv: Move,
    /// Pieces in the turning slice, captured when the animation started.
    pub grip: SliceMembers,
    /// Initial rotation of the gripped pieces.
    pub initial_rotation: Quaternion<f32>,
    /// Final rotation of the gripped pieces.
    pub final_rotation: Quaternion<f32>,
    /// Duration of the animation, in seconds.
    pub duration: f32,
}
impl TwistAnimation {
    /// Returns whether the animation moves `piece`.
    pub fn grips(&self, piece: PieceId) -> bool {
        self.grip.contains(&piece)
    }
}

/// Drives at most one [`TwistAnimation`] at a time, committing the move to the
/// cube when the animation completes.
#[derive(Debug, Default, Clone)]
pub struct AnimationDriver {
    current: Option<TwistAnimation>,
    /// Time elapsed in the current animation, in seconds.
    elapsed: f32,
    /// Eased progress of the current animation, from 0.0 to 1.0.
    progress: f32,
}
impl AnimationStatus for AnimationDriver {
    fn is_animating(&self) -> bool {
        self.current.is_some()
    }
}
impl AnimationDriver {
    /// Constructs an idle animation driver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts animating `mv` over `duration` seconds. Returns `false` and
    /// does nothing if an animation is already in flight.
    pub fn start(&mut self, cube: &Cube, mv: Move, duration: f32) -> bool {
        if let Some(current) = &self.current {
            log::debug!("Dropping {mv} because {} is still animating", current.mv);
            return false;
        }

        self.current = Some(TwistAnimation {
            mv,
            grip: cube.slice(mv.face).iter().copied().collect(),
            initial_rotation: Quaternion::one(),
            final_rotation: mv.rotation().quaternion(),
            duration,
        });
        self.elapsed = 0.0;
        self.progress = 0.0;
        log::trace!("Started animating {mv} over {duration}s");
        true
    }

    /// Steps the animation forward by `delta` seconds. When the animation
    /// completes, the move is committed to `cube`, the slice transform is
    /// reset, and the move is returned.
    ///
    /// If the move cannot be committed, the cube is left unchanged, the driver
    /// is idle again, and the error is returned.
    ///
    /// Negative or non-finite deltas count as zero. A zero or non-finite
    /// duration completes on the first update.
    pub fn update(
        &mut self,
        cube: &mut Cube,
        delta: f32,
        interpolation: InterpolateFn,
    ) -> Result<Option<Move>, CubeError> {
        let Some(anim) = &self.current else {
            return Ok(None);
        };

        let delta = if delta.is_finite() { delta.max(0.0) } else { 0.0 };
        self.elapsed += delta;
        let t = if anim.duration.is_finite() && anim.duration > 0.0 {
            (self.elapsed / anim.duration).min(1.0)
        } else {
            1.0
        };

        if t < 1.0 {
            self.progress = interpolation.interpolate(t);
            log::trace!("{} at {:.3}", anim.mv, self.progress);
            return Ok(None);
        }

        let mv = anim.mv;
        self.current = None;
        self.elapsed = 0.0;
        self.progress = 0.0;
        cube.apply_move(mv)?;
        log::debug!("Committed {mv}");
        Ok(Some(mv))
    }

    /// Returns the animation in flight along with its eased progress.
    pub fn current(&self) -> Option<(&TwistAnimation, f32)> {
        Some((self.current.as_ref()?, self.progress))
    }

    /// Returns the current rotation of the turning slice, or the identity if
    /// no animation is in flight.
    pub fn slice_rotation(&self) -> Quaternion<f32> {
        match &self.current {
            Some(anim) => anim
                .initial_rotation
                .slerp(anim.final_rotation, self.progress),
            None => Quaternion::one(),
        }
    }

    /// Returns the model matrix of a piece, including the rotation of the
    /// turning slice if the piece is in it.
    pub fn piece_transform(&self, piece: &Piece) -> Matrix4<f32> {
        match &self.current {
            Some(anim) if anim.grips(piece.id()) => {
                Matrix4::from(self.slice_rotation()) * piece.model_matrix()
            }
            _ => piece.model_matrix(),
        }
    }
}

#[cfg(test)]
mod tests {
    use cgmath::{InnerSpace, Rotation, Vector3};
    use pretty_assertions::assert_eq;
    use spincube_core::{Direction, Face};

    use super::*;

    const SMOOTH: InterpolateFn = InterpolateFn::Smoothstep;

    #[test]
    fn test_animation_commits_at_end() {
        let mut cube = Cube::new();
        let mut driver = AnimationDriver::new();
        let mv = Move::new(Face::Top, Direction::Cw);

        assert!(driver.start(&cube, mv, 0.3));
        assert!(driver.is_animating());

        assert_eq!(driver.update(&mut cube, 0.1, SMOOTH), Ok(None));
        assert_eq!(cube, Cube::new(), "cube must not change before commit");
        assert_eq!(driver.update(&mut cube, 0.1, SMOOTH), Ok(None));
        assert_eq!(driver.update(&mut cube, 0.15, SMOOTH), Ok(Some(mv)));

        assert!(!driver.is_animating());
        assert_eq!(driver.slice_rotation(), Quaternion::one());
        let mut expected = Cube::new();
        expected.apply_move(mv).unwrap();
        assert_eq!(cube, expected);
    }

    #[test]
    fn test_start_rejected_while_animating() {
        let mut cube = Cube::new();
        let mut driver = AnimationDriver::new();
        let first = Move::new(Face::Front, Direction::Cw);
        let second = Move::new(Face::Right, Direction::Ccw);

        assert!(driver.start(&cube, first, 0.3));
        assert!(!driver.start(&cube, second, 0.3));
        assert_eq!(driver.current().unwrap().0.mv, first);

        assert_eq!(driver.update(&mut cube, 1.0, SMOOTH), Ok(Some(first)));
        assert_eq!(driver.update(&mut cube, 1.0, SMOOTH), Ok(None));
        assert!(driver.start(&cube, second, 0.3));
    }

    #[test]
    fn test_progress_is_eased() {
        let mut cube = Cube::new();
        let mut driver = AnimationDriver::new();
        driver.start(&cube, Move::from(Face::Back), 1.0);

        driver.update(&mut cube, 0.25, SMOOTH).unwrap();
        assert_eq!(driver.current().unwrap().1, 0.15625);
        driver.update(&mut cube, 0.25, SMOOTH).unwrap();
        assert_eq!(driver.current().unwrap().1, 0.5);
    }

    #[test]
    fn test_halfway_rotation() {
        let mut cube = Cube::new();
        let mut driver = AnimationDriver::new();
        driver.start(&cube, Move::new(Face::Top, Direction::Cw), 1.0);
        driver.update(&mut cube, 0.5, InterpolateFn::Lerp).unwrap();

        // Halfway through a quarter turn about +Y, +X has turned 45 degrees
        // toward -Z.
        let v = driver.slice_rotation().rotate_vector(Vector3::unit_x());
        let expected = Vector3::new(1.0, 0.0, -1.0).normalize();
        assert!((v - expected).magnitude() < 1e-5);

        // Pieces outside the slice are not rotated.
        let bottom_center = cube.piece_at(Face::Bottom.center()).unwrap();
        assert_eq!(driver.piece_transform(bottom_center), bottom_center.model_matrix());
        let top_center = cube.piece_at(Face::Top.center()).unwrap();
        assert_ne!(driver.piece_transform(top_center), top_center.model_matrix());
    }

    #[test]
    fn test_degenerate_inputs() {
        let mut cube = Cube::new();
        let mut driver = AnimationDriver::new();

        driver.start(&cube, Move::from(Face::Left), 0.3);
        assert_eq!(driver.update(&mut cube, -5.0, SMOOTH), Ok(None));
        assert_eq!(driver.update(&mut cube, f32::NAN, SMOOTH), Ok(None));
        assert_eq!(driver.current().unwrap().1, 0.0);

        driver.update(&mut cube, 1.0, SMOOTH).unwrap();
        driver.start(&cube, Move::from(Face::Left), 0.0);
        assert_eq!(driver.update(&mut cube, 0.0, SMOOTH), Ok(Some(Move::from(Face::Left))));

        let mut expected = Cube::new();
        expected.apply_moves([Move::from(Face::Left); 2]).unwrap();
        assert_eq!(cube, expected);
    }
}
