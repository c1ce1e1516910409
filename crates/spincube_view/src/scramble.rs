//! Chain of random moves played one after another.

/// Progress through a scramble.
///
/// The chain does not pick moves itself; it only tracks how many remain and
/// the pause between one move committing and the next one starting.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrambleChain {
    /// Number of moves in the whole scramble.
    total: usize,
    /// Number of moves that have been started.
    started: usize,
    /// Number of moves that have been committed.
    committed: usize,
    /// Pause between moves, in seconds.
    move_delay: f32,
    /// Time left before the next move may start, or `None` if a move is in
    /// flight.
    wait: Option<f32>,
}
impl ScrambleChain {
    /// Constructs a chain of `total` moves with `move_delay` seconds between
    /// them. The first move may start immediately.
    pub fn new(total: usize, move_delay: f32) -> Self {
        Self {
            total,
            started: 0,
            committed: 0,
            move_delay,
            wait: Some(0.0),
        }
    }

    /// Returns the number of moves in the whole scramble.
    pub fn total(&self) -> usize {
        self.total
    }
    /// Returns the number of moves that have been committed.
    pub fn committed(&self) -> usize {
        self.committed
    }
    /// Returns whether every move has been committed.
    pub fn is_finished(&self) -> bool {
        self.committed >= self.total
    }

    /// Counts down the pause between moves. Returns whether the next move
    /// should start now, in which case the caller must start it and the chain
    /// waits for [`Self::on_move_committed()`].
    pub fn poll(&mut self, delta: f32) -> bool {
        let Some(wait) = &mut self.wait else {
            return false;
        };
        if self.started >= self.total {
            return false;
        }
        if delta.is_finite() && delta > 0.0 {
            *wait -= delta;
        }
        if *wait > 0.0 {
            return false;
        }
        self.wait = None;
        self.started += 1;
        true
    }

    /// Records that a scramble move committed and begins the pause before the
    /// next one. Returns whether the scramble is now finished.
    pub fn on_move_committed(&mut self) -> bool {
        self.committed += 1;
        if self.is_finished() {
            self.wait = None;
        } else {
            self.wait = Some(self.move_delay);
        }
        self.is_finished()
    }

    /// Records that a move failed to start, so that it is retried after the
    /// usual pause.
    pub fn on_move_dropped(&mut self) {
        self.started = self.started.saturating_sub(1);
        self.wait = Some(self.move_delay);
    }
}
