//! Animation, pointer input, and the simulation state machine for Spincube.
//!
//! [`CubeSimulation`] owns a [`spincube_core::Cube`] and animates one quarter
//! turn at a time. The render host calls [`CubeSimulation::update()`] every
//! frame and forwards pointer events through an [`InteractionController`].

mod animation;
pub mod input;
mod scramble;
mod simulation;
mod stats;

pub use animation::{AnimationDriver, AnimationStatus, TwistAnimation};
pub use input::{Camera, InteractionController, PointerEvent, Viewport};
pub use scramble::ScrambleChain;
pub use simulation::{CubeSimulation, MoveSource, SimEvent, SimState};
pub use stats::{SessionStats, format_elapsed};
