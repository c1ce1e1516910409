use cgmath::{Matrix4, Point2, SquareMatrix};
use eyre::{Context, Result, bail, eyre};
use itertools::Itertools;
use spincube_core::Move;
use spincube_prefs::Preferences;
use spincube_view::input::{Camera, Viewport, face_at, pick, pointer_to_ndc};
use spincube_view::{AnimationStatus, CubeSimulation, MoveSource, SimEvent};

/// Upper bound on simulated frames per command, in case a preference makes an
/// animation never finish.
const MAX_FRAMES: usize = 1_000_000;

/// Spincube command-line interface
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Animate a sequence of moves and print the resulting cube.
    Twist {
        /// Moves in cube notation (`R`, `U'`) or by face name (`front`,
        /// `top'`).
        #[arg(required = true)]
        moves: Vec<String>,
        /// Simulated frames per second.
        #[arg(long, default_value_t = 60.0)]
        fps: f32,
        /// Print the cube without colors.
        #[arg(long)]
        no_color: bool,
    },
    /// Scramble the cube and print the result.
    Scramble {
        /// Random seed, for a reproducible scramble.
        #[arg(long)]
        seed: Option<u64>,
        /// Simulated frames per second.
        #[arg(long, default_value_t = 60.0)]
        fps: f32,
        /// Print the cube without colors.
        #[arg(long)]
        no_color: bool,
    },
    /// Print the face of the solved cube under a pixel, as seen from the
    /// default camera.
    Pick {
        /// Pixel X coordinate, from the left edge.
        x: f32,
        /// Pixel Y coordinate, from the top edge.
        y: f32,
        /// Viewport width in pixels.
        #[arg(long, default_value_t = 800.0)]
        width: f32,
        /// Viewport height in pixels.
        #[arg(long, default_value_t = 600.0)]
        height: f32,
    },
    /// Print the preferences file path and the effective preferences.
    Prefs,
}

pub(crate) fn exec(subcommand: Subcommand) -> Result<()> {
    match subcommand {
        Subcommand::Twist {
            moves,
            fps,
            no_color,
        } => {
            let moves: Vec<Move> = moves
                .iter()
                .map(|s| s.parse::<Move>().wrap_err_with(|| format!("bad move {s:?}")))
                .try_collect()?;
            let delta = frame_delta(fps)?;

            let prefs = Preferences::load();
            let mut sim = CubeSimulation::new(prefs.animation);
            for mv in moves {
                if !sim.request_move(mv) {
                    bail!("move {mv} was rejected");
                }
                run_until_idle(&mut sim, delta)?;
            }

            print!("{}", crate::net::render(sim.cube(), !no_color));
            println!("Moves: {}", sim.stats().move_count);
            println!("Solved: {}", sim.cube().is_solved());
            Ok(())
        }

        Subcommand::Scramble {
            seed,
            fps,
            no_color,
        } => {
            let delta = frame_delta(fps)?;

            let prefs = Preferences::load();
            let mut sim = match seed {
                Some(seed) => CubeSimulation::with_seed(prefs.animation, seed),
                None => CubeSimulation::new(prefs.animation),
            };
            if !sim.scramble() {
                bail!("scramble was rejected");
            }
            let events = run_until_idle(&mut sim, delta)?;
            if events.contains(&SimEvent::ScrambleAborted) {
                bail!("scramble was aborted");
            }
            let scramble = events
                .iter()
                .filter_map(|event| match event {
                    SimEvent::MoveCommitted {
                        mv,
                        source: MoveSource::Scramble,
                    } => Some(mv),
                    _ => None,
                })
                .join(" ");

            println!("{scramble}");
            print!("{}", crate::net::render(sim.cube(), !no_color));
            println!(
                "Moves: {}  Time: {}",
                sim.stats().move_count,
                sim.stats().elapsed_string(),
            );
            Ok(())
        }

        Subcommand::Pick {
            x,
            y,
            width,
            height,
        } => {
            let viewport = Viewport::with_size(width, height);
            let ndc = pointer_to_ndc(Point2::new(x, y), viewport)
                .ok_or_else(|| eyre!("pixel ({x}, {y}) is outside the {width}x{height} viewport"))?;
            let camera = Camera {
                aspect: width / height,
                ..Camera::default()
            };
            let prefs = Preferences::load();
            let sim = CubeSimulation::new(prefs.animation);
            let model = Matrix4::identity();

            let threshold = prefs.interaction.face_normal_threshold;
            match face_at(sim.cube(), &sim, &camera, model, ndc, threshold) {
                Some(face) => {
                    let piece = pick(sim.cube(), &camera, model, ndc)
                        .and_then(|hit| sim.cube().piece(hit.piece));
                    match piece {
                        Some(piece) => println!("{face} (piece {} at {})", piece.id(), piece.pos()),
                        None => println!("{face}"),
                    }
                }
                None => println!("none"),
            }
            Ok(())
        }

        Subcommand::Prefs => {
            match spincube_prefs::persist::prefs_file() {
                Ok(path) => println!("# {}", path.display()),
                Err(e) => log::warn!("Error locating preferences file: {e}"),
            }
            print!("{}", Preferences::load().to_yaml()?);
            Ok(())
        }
    }
}

fn frame_delta(fps: f32) -> Result<f32> {
    if !(fps.is_finite() && fps > 0.0) {
        bail!("frames per second must be positive, not {fps}");
    }
    Ok(1.0 / fps)
}

/// Steps the simulation one frame at a time until it is idle, returning every
/// event.
fn run_until_idle(sim: &mut CubeSimulation, delta: f32) -> Result<Vec<SimEvent>> {
    let mut events = vec![];
    for _ in 0..MAX_FRAMES {
        if !sim.is_animating() {
            return Ok(events);
        }
        for event in sim.update(delta) {
            log::debug!("{event:?}");
            events.push(event);
        }
    }
    bail!("animation did not finish after {MAX_FRAMES} frames")
}
