use std::time::Duration;

/// Length of the reveal animation.
pub const ANIMATION_DURATION: Duration = Duration::from_millis(1000);

/// Identifies one animation run. Starting a new run invalidates every older id,
/// so ticks scheduled for a cancelled run can no longer touch the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RunId(u64);

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    Idle,
    Running { run: RunId, started_at: f64 },
}

/// What a tick did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tick {
    /// Stale run or nothing running. No state was touched.
    Ignored,
    /// Progress moved and the run continues.
    Advanced(f32),
    /// Progress reached 1 and the animator went idle.
    Finished,
}

impl Tick {
    pub fn needs_redraw(&self) -> bool {
        !matches!(self, Tick::Ignored)
    }
}

/// Linear 0 to 1 progress over a fixed duration. Times are host clock seconds.
#[derive(Debug, Clone)]
pub struct Animator {
    state: State,
    progress: f32,
    duration: f64,
    runs: u64,
}

impl Animator {
    pub fn new() -> Self {
        Animator::with_duration(ANIMATION_DURATION)
    }

    pub fn with_duration(duration: Duration) -> Self {
        Animator {
            state: State::Idle,
            progress: 0.0,
            duration: duration.as_secs_f64(),
            runs: 0,
        }
    }

    /// Cancels whatever is running, resets progress and starts over.
    pub fn restart(&mut self, now: f64) -> RunId {
        if let State::Running { run, .. } = self.state {
            log::debug!("cancelling animation run {:?}", run);
        }

        self.runs += 1;
        let run = RunId(self.runs);
        self.progress = 0.0;
        self.state = State::Running {
            run,
            started_at: now,
        };

        log::debug!("animation run {:?} started at {:.3}s", run, now);
        run
    }

    pub fn tick(&mut self, run: RunId, now: f64) -> Tick {
        let started_at = match self.state {
            State::Running {
                run: current,
                started_at,
            } if current == run => started_at,
            _ => {
                log::trace!("ignoring tick for inactive run {:?}", run);
                return Tick::Ignored;
            }
        };

        let elapsed = (now - started_at).max(0.0);
        self.progress = if self.duration > 0.0 {
            (elapsed / self.duration).min(1.0) as f32
        } else {
            1.0
        };

        if self.progress >= 1.0 {
            self.state = State::Idle;
            log::debug!("animation run {:?} finished", run);
            Tick::Finished
        } else {
            Tick::Advanced(self.progress)
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, State::Running { .. })
    }

    pub fn current_run(&self) -> Option<RunId> {
        match self.state {
            State::Running { run, .. } => Some(run),
            State::Idle => None,
        }
    }
}

impl Default for Animator {
    fn default() -> Self {
        Animator::new()
    }
}
