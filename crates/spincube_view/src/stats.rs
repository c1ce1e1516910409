//! Move counter and session timer.

use web_time::{Duration, Instant};

/// Move counter and timer for the current session.
///
/// Both are cleared whenever the cube is scrambled or reset.
#[derive(Debug, Clone)]
pub struct SessionStats {
    /// Number of user moves committed.
    pub move_count: u32,
    /// Time that the session started.
    pub start_time: Instant,
}
impl Default for SessionStats {
    fn default() -> Self {
        Self {
            move_count: 0,
            start_time: Instant::now(),
        }
    }
}
impl SessionStats {
    /// Clears the move counter and restarts the timer.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
    /// Returns the time since the session started.
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
    /// Returns the time since the session started, formatted as `MM:SS`.
    pub fn elapsed_string(&self) -> String {
        format_elapsed(self.elapsed())
    }
}

/// Formats a duration as `MM:SS`, truncating to whole seconds. Minutes keep
/// counting past 59.
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
