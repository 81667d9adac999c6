use crate::blocks::model::ImageBlock;
use crate::carousel::{Carousel, Interval};
use crate::sections::props::MainProps;
use std::time::Duration;

/// Cross-fading image slideshow with dot navigation.
#[derive(Clone, Debug, PartialEq)]
pub struct Slideshow {
    count: usize,
    current: usize,
    previous: Option<usize>,
    interval: Interval,
    fade: Duration,
    fade_elapsed: Duration,
    cancelled: bool,
}

impl Slideshow {
    pub fn new(count: usize, period: Duration, fade: Duration) -> Self {
        Self {
            count,
            current: 0,
            previous: None,
            interval: Interval::new(period),
            fade,
            fade_elapsed: fade,
            cancelled: false,
        }
    }

    /// A slideshow over an image block's images, timed by the section props.
    pub fn for_block(block: &ImageBlock, props: &MainProps) -> Self {
        Self::new(
            block.images.len(),
            Duration::from_millis(props.slideshow_interval_ms),
            Duration::from_millis(props.slideshow_fade_ms),
        )
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Jump to image `index` from a dot click. The rotation timer keeps its phase.
    pub fn select(&mut self, index: usize) {
        if self.cancelled || index >= self.count || index == self.current {
            return;
        }
        self.show(index);
    }

    pub fn advance(&mut self, dt: Duration) {
        if self.cancelled {
            return;
        }
        let fired = self.interval.advance(dt);
        if fired == 0 || self.count < 2 {
            self.fade_elapsed = (self.fade_elapsed + dt).min(self.fade);
            return;
        }
        for _ in 0..fired {
            self.tick();
        }
        // The fade started at the last tick, `phase` ago.
        self.fade_elapsed = self.interval.phase().min(self.fade);
    }

    pub fn is_fading(&self) -> bool {
        self.previous.is_some() && self.fade_elapsed < self.fade
    }

    /// Opacity of image `index` at the current point of the cross-fade.
    pub fn opacity(&self, index: usize) -> f64 {
        let progress = if self.fade.is_zero() {
            1.0
        } else {
            self.fade_elapsed.as_secs_f64() / self.fade.as_secs_f64()
        };
        if index == self.current {
            if self.previous.is_some() { progress } else { 1.0 }
        } else if Some(index) == self.previous {
            1.0 - progress
        } else {
            0.0
        }
    }

    fn show(&mut self, index: usize) {
        self.previous = Some(self.current);
        self.current = index;
        self.fade_elapsed = Duration::ZERO;
    }
}

impl Carousel for Slideshow {
    fn tick(&mut self) {
        if self.cancelled || self.count < 2 {
            return;
        }
        self.show((self.current + 1) % self.count);
    }

    fn cancel(&mut self) {
        self.cancelled = true;
    }

    fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    fn current(&self) -> usize {
        self.current
    }
}
