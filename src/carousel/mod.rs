//! Time-driven rotation state machines.
//!
//! Each machine owns its state and timer. The host either schedules [`Carousel::tick`] itself
//! or feeds elapsed time through the machine's `advance`, and calls [`Carousel::cancel`] on
//! teardown. A cancelled machine ignores every further transition.

pub(crate) mod gesture;
pub(crate) mod hero;
pub(crate) mod pager;
pub(crate) mod slideshow;

use std::time::Duration;

pub trait Carousel {
    /// One scheduled step.
    fn tick(&mut self);
    fn cancel(&mut self);
    fn is_cancelled(&self) -> bool;
    /// Index of the first visible item.
    fn current(&self) -> usize;
}

/// Converts elapsed wall time into whole periods.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Interval {
    period: Duration,
    elapsed: Duration,
}

impl Interval {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            elapsed: Duration::ZERO,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Time accumulated since the last whole period.
    pub fn phase(&self) -> Duration {
        self.elapsed
    }

    /// Accumulate `dt` and return how many periods completed. A zero period never fires.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        if self.period.is_zero() {
            return 0;
        }
        self.elapsed += dt;
        let mut fired = 0;
        while self.elapsed >= self.period {
            self.elapsed -= self.period;
            fired += 1;
        }
        fired
    }

    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}
