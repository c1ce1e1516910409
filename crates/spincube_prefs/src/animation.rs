use serde::{Deserialize, Serialize};

pub use interpolation::InterpolateFn;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AnimationPreferences {
    /// Duration of a twist requested by the user, in seconds.
    pub twist_duration: f32,
    /// Duration of each twist in a scramble, in seconds.
    pub scramble_twist_duration: f32,
    /// Pause between consecutive scramble twists, in seconds.
    pub scramble_move_delay: f32,
    pub twist_interpolation: InterpolateFn,
}
impl Default for AnimationPreferences {
    fn default() -> Self {
        Self {
            twist_duration: 0.3,
            scramble_twist_duration: 0.2,
            scramble_move_delay: 0.05,
            twist_interpolation: InterpolateFn::default(),
        }
    }
}
impl AnimationPreferences {
    /// Replaces negative or non-finite durations with their defaults.
    pub(crate) fn sanitize(&mut self) {
        let defaults = Self::default();
        for (name, value, default) in [
            ("twist_duration", &mut self.twist_duration, defaults.twist_duration),
            (
                "scramble_twist_duration",
                &mut self.scramble_twist_duration,
                defaults.scramble_twist_duration,
            ),
            (
                "scramble_move_delay",
                &mut self.scramble_move_delay,
                defaults.scramble_move_delay,
            ),
        ] {
            if !value.is_finite() || *value < 0.0 {
                log::warn!("Invalid animation.{name} {value}; using {default}");
                *value = default;
            }
        }
    }
}

pub mod interpolation {
    //! Interpolation functions.

    use std::f32::consts::PI;

    use serde::{Deserialize, Serialize};
    use strum::VariantArray;

    /// Function that maps a float from the range 0.0 to 1.0 to another float
    /// from 0.0 to 1.0.
    #[derive(
        Serialize,
        Deserialize,
        Debug,
        Default,
        Copy,
        Clone,
        PartialEq,
        Eq,
        Hash,
        VariantArray,
        strum::Display,
        strum::EnumString,
    )]
    #[serde(rename_all = "snake_case")]
    #[strum(serialize_all = "snake_case")]
    pub enum InterpolateFn {
        /// Constant speed.
        Lerp,
        /// Hermite smoothstep, `t²(3 - 2t)`.
        #[default]
        Smoothstep,
        /// Half period of a cosine wave.
        Cosine,
        /// Fast start with a gradual stop.
        CubicOut,
    }

    impl InterpolateFn {
        /// Returns the interpolation value in the range [0, 1] for `t` in the
        /// range [0, 1]. Values of `t` outside that range are clamped.
        pub fn interpolate(self, t: f32) -> f32 {
            let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
            match self {
                Self::Lerp => t,

                Self::Smoothstep => t * t * (3.0 - 2.0 * t),

                Self::Cosine => (1.0 - (t * PI).cos()) / 2.0,

                Self::CubicOut => 1.0 - (1.0 - t).powi(3),
            }
        }
    }

}
