//! Cube simulation: the idle/animating state machine that owns the cube, the
//! animation driver, and any scramble in progress.

use cgmath::Matrix4;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use spincube_core::{Cube, CubeError, Direction, Face, Move, Piece, SCRAMBLE_MOVE_COUNT};
use spincube_prefs::AnimationPreferences;
use web_time::{Duration, Instant};

use crate::{AnimationDriver, AnimationStatus, ScrambleChain, SessionStats};

/// Frame rate assumed for the first frame of an animation.
const ASSUMED_FPS: f32 = 60.0;

/// Coarse state of a [`CubeSimulation`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SimState {
    /// Ready to accept a move.
    Idle,
    /// A move is animating, or a scramble is in progress.
    Animating,
}

/// What caused a move.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MoveSource {
    /// Pointer input or an explicit request.
    User,
    /// Scramble chain.
    Scramble,
}

/// Something that happened during [`CubeSimulation::update()`].
#[derive(Debug, Clone, PartialEq)]
pub enum SimEvent {
    /// A move finished animating and was committed to the cube.
    MoveCommitted {
        /// Move that was committed.
        mv: Move,
        /// What caused the move.
        source: MoveSource,
    },
    /// The last move of a scramble was committed.
    ScrambleFinished,
    /// A scramble stopped early because one of its moves could not be
    /// committed.
    ScrambleAborted,
}

/// Interactive 3x3x3 cube.
///
/// The render host calls [`Self::update()`] (or [`Self::step()`]) once per
/// frame. At most one move animates at a time; requests that arrive while a
/// move is animating or a scramble is running are dropped.
pub struct CubeSimulation {
    /// Committed cube state. This does not include the move being animated.
    cube: Cube,
    driver: AnimationDriver,
    /// Scramble in progress, if any.
    scramble: Option<ScrambleChain>,
    rng: ChaCha8Rng,
    prefs: AnimationPreferences,
    stats: SessionStats,
    /// Callbacks invoked once per committed user move.
    move_complete_hooks: Vec<Box<dyn FnMut()>>,
    /// Time of last frame, or `None` if we are not in the middle of an
    /// animation.
    last_frame_time: Option<Instant>,
}
impl std::fmt::Debug for CubeSimulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CubeSimulation")
            .field("cube", &self.cube)
            .field("driver", &self.driver)
            .field("scramble", &self.scramble)
            .field("prefs", &self.prefs)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
impl AnimationStatus for CubeSimulation {
    fn is_animating(&self) -> bool {
        self.driver.is_animating() || self.scramble.is_some()
    }
}
impl CubeSimulation {
    /// Constructs a simulation of a solved cube, with scrambles seeded from
    /// the thread RNG.
    pub fn new(prefs: AnimationPreferences) -> Self {
        Self::with_rng(prefs, ChaCha8Rng::from_rng(&mut rand::rng()))
    }
    /// Constructs a simulation of a solved cube with reproducible scrambles.
    pub fn with_seed(prefs: AnimationPreferences, seed: u64) -> Self {
        Self::with_rng(prefs, ChaCha8Rng::seed_from_u64(seed))
    }
    fn with_rng(prefs: AnimationPreferences, rng: ChaCha8Rng) -> Self {
        Self {
            cube: Cube::new(),
            driver: AnimationDriver::new(),
            scramble: None,
            rng,
            prefs,
            stats: SessionStats::default(),
            move_complete_hooks: vec![],
            last_frame_time: None,
        }
    }

    /// Returns the committed cube state.
    pub fn cube(&self) -> &Cube {
        &self.cube
    }
    /// Returns the animation driver.
    pub fn driver(&self) -> &AnimationDriver {
        &self.driver
    }
    /// Returns whether the simulation is idle or busy.
    pub fn state(&self) -> SimState {
        match self.is_animating() {
            true => SimState::Animating,
            false => SimState::Idle,
        }
    }
    /// Returns the scramble in progress, if any.
    pub fn scramble_progress(&self) -> Option<&ScrambleChain> {
        self.scramble.as_ref()
    }
    /// Returns the session move counter and timer.
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }
    /// Returns the animation preferences.
    pub fn prefs(&self) -> &AnimationPreferences {
        &self.prefs
    }
    /// Replaces the animation preferences. An animation in flight keeps its
    /// original duration.
    pub fn set_prefs(&mut self, prefs: AnimationPreferences) {
        self.prefs = prefs;
    }

    /// Registers a callback that is invoked once each time a user move is
    /// committed. Scramble moves do not invoke it.
    pub fn on_move_complete(&mut self, hook: impl FnMut() + 'static) {
        self.move_complete_hooks.push(Box::new(hook));
    }

    /// Requests a user move. Returns whether it was accepted.
    pub fn request_move(&mut self, mv: Move) -> bool {
        if self.scramble.is_some() {
            log::debug!("Dropping {mv} during scramble");
            return false;
        }
        self.driver
            .start(&self.cube, mv, self.prefs.twist_duration)
    }
    /// Requests a user move by face name, such as `"front"`. Unknown names
    /// are ignored.
    pub fn request_move_named(&mut self, name: &str, direction: Direction) -> bool {
        match name.parse::<Face>() {
            Ok(face) => self.request_move(Move::new(face, direction)),
            Err(_) => {
                log::debug!("Ignoring move of unknown face {name:?}");
                false
            }
        }
    }

    /// Starts a scramble of [`SCRAMBLE_MOVE_COUNT`] random moves. Returns
    /// `false` and does nothing if the simulation is busy.
    ///
    /// The move counter and timer are cleared.
    pub fn scramble(&mut self) -> bool {
        if self.is_animating() {
            log::debug!("Ignoring scramble while busy");
            return false;
        }
        log::info!("Scrambling with {SCRAMBLE_MOVE_COUNT} moves");
        self.stats.reset();
        self.scramble = Some(ScrambleChain::new(
            SCRAMBLE_MOVE_COUNT,
            self.prefs.scramble_move_delay,
        ));
        self.poll_scramble(0.0);
        true
    }

    /// Restores the cube to its solved state and clears the move counter and
    /// timer. Returns `false` and does nothing if the simulation is busy.
    pub fn reset(&mut self) -> bool {
        if self.is_animating() {
            log::debug!("Ignoring reset while busy");
            return false;
        }
        self.cube.reset();
        self.stats.reset();
        log::info!("Reset cube");
        true
    }

    /// Advances the simulation by `delta` seconds.
    pub fn update(&mut self, delta: f32) -> Vec<SimEvent> {
        let mut events = vec![];

        let interpolation = self.prefs.twist_interpolation;
        match self.driver.update(&mut self.cube, delta, interpolation) {
            Ok(Some(mv)) => self.on_move_committed(mv, &mut events),
            Ok(None) => {
                if !self.driver.is_animating() {
                    self.poll_scramble(delta);
                }
            }
            Err(e) => self.on_commit_failed(&e, &mut events),
        }

        events
    }

    fn on_move_committed(&mut self, mv: Move, events: &mut Vec<SimEvent>) {
        match &mut self.scramble {
            Some(chain) => {
                events.push(SimEvent::MoveCommitted {
                    mv,
                    source: MoveSource::Scramble,
                });
                if chain.on_move_committed() {
                    log::info!("Scramble finished after {} moves", chain.committed());
                    self.scramble = None;
                    events.push(SimEvent::ScrambleFinished);
                }
            }
            None => {
                events.push(SimEvent::MoveCommitted {
                    mv,
                    source: MoveSource::User,
                });
                self.stats.move_count += 1;
                for hook in &mut self.move_complete_hooks {
                    hook();
                }
            }
        }
    }

    /// Drops a move that could not be committed. The driver is already idle;
    /// any scramble in progress is abandoned so that the simulation returns to
    /// [`SimState::Idle`].
    fn on_commit_failed(&mut self, e: &CubeError, events: &mut Vec<SimEvent>) {
        log::error!("Error committing move: {e}");
        if let Some(chain) = self.scramble.take() {
            log::warn!(
                "Aborting scramble after {} of {} moves",
                chain.committed(),
                chain.total(),
            );
            events.push(SimEvent::ScrambleAborted);
        }
    }

    /// Advances the simulation using the time since the last frame. Returns
    /// the same events as [`Self::update()`].
    pub fn step(&mut self) -> Vec<SimEvent> {
        let now = Instant::now();
        let delta = match self.last_frame_time {
            Some(then) => now - then,
            None => Duration::from_secs_f32(1.0 / ASSUMED_FPS),
        };

        let events = self.update(delta.as_secs_f32());

        self.last_frame_time = self.is_animating().then_some(now);
        events
    }

    /// Starts the next scramble move if one is due.
    fn poll_scramble(&mut self, delta: f32) {
        let Some(chain) = &mut self.scramble else {
            return;
        };
        if chain.poll(delta) {
            let mv = Move::random(&mut self.rng);
            log::trace!("Scramble move {}/{}: {mv}", chain.committed() + 1, chain.total());
            if !self
                .driver
                .start(&self.cube, mv, self.prefs.scramble_twist_duration)
            {
                chain.on_move_dropped();
            }
        }
    }

    /// Returns the model matrix of a piece, including the rotation of the
    /// turning slice.
    pub fn piece_transform(&self, piece: &Piece) -> Matrix4<f32> {
        self.driver.piece_transform(piece)
    }
}
