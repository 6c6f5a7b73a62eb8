use std::time::{Duration, Instant};

/// Keeps consecutive frames at least `target_delta_time` apart.
pub struct FramePacer {
    pub target_delta_time: Duration,
    pub last_instant: Option<Instant>,
}

impl FramePacer {
    pub fn new(target_delta_time: Duration) -> Self {
        Self {
            target_delta_time,
            last_instant: None,
        }
    }

    /// Sleeps out the rest of the frame, returns whether any sleeping was needed.
    pub fn sleep(&mut self) -> bool {
        let slept = match self.remaining() {
            Some(remaining) => {
                spin_sleep::sleep(remaining);
                true
            }
            None => false,
        };

        self.last_instant = Some(Instant::now());
        slept
    }

    /// Time left until the frame is due, `None` if it's due already.
    pub fn remaining(&self) -> Option<Duration> {
        // Never late for the first frame.
        let last_instant = self.last_instant?;

        self.target_delta_time
            .checked_sub(last_instant.elapsed())
            .filter(|remaining| !remaining.is_zero())
    }
}
