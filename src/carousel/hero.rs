use crate::carousel::{Carousel, Interval};
use crate::sections::props::HeroProps;
use std::time::Duration;

/// Auto-rotating hero slides. Circular, no manual controls.
#[derive(Clone, Debug, PartialEq)]
pub struct HeroRotator {
    count: usize,
    current: usize,
    interval: Interval,
    cancelled: bool,
}

impl HeroRotator {
    pub fn new(count: usize, period: Duration) -> Self {
        Self {
            count,
            current: 0,
            interval: Interval::new(period),
            cancelled: false,
        }
    }

    pub fn from_props(props: &HeroProps) -> Self {
        Self::new(props.slides.len(), Duration::from_millis(props.interval_ms))
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Feed elapsed time; each completed period advances one slide.
    pub fn advance(&mut self, dt: Duration) {
        if self.cancelled {
            return;
        }
        for _ in 0..self.interval.advance(dt) {
            self.tick();
        }
    }

    /// The heading accent bar marks every slide after the first.
    pub fn heading_bar_visible(&self) -> bool {
        self.current != 0
    }
}

impl Carousel for HeroRotator {
    fn tick(&mut self) {
        if self.cancelled || self.count == 0 {
            return;
        }
        self.current = (self.current + 1) % self.count;
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotates_and_wraps() {
        let mut h = HeroRotator::new(3, Duration::from_secs(6));
        let mut seen = vec![h.current()];
        for _ in 0..4 {
            h.tick();
            seen.push(h.current());
        }
        assert_eq!(seen, vec![0, 1, 2, 0, 1]);
    }

    #[test]
    fn advance_uses_the_period() {
        let mut h = HeroRotator::new(3, Duration::from_secs(6));
        h.advance(Duration::from_millis(5_999));
        assert_eq!(h.current(), 0);
        h.advance(Duration::from_millis(1));
        assert_eq!(h.current(), 1);
        assert!(h.heading_bar_visible());
        h.advance(Duration::from_secs(12));
        assert_eq!(h.current(), 0);
        assert!(!h.heading_bar_visible());
    }

    #[test]
    fn zero_and_single_slide_are_safe() {
        let mut h = HeroRotator::new(0, Duration::from_secs(6));
        h.tick();
        h.advance(Duration::from_secs(60));
        assert_eq!(h.current(), 0);
        assert!(h.is_empty());

        let mut h = HeroRotator::new(1, Duration::from_secs(6));
        h.tick();
        assert_eq!(h.current(), 0);
    }

    #[test]
    fn cancel_freezes_rotation() {
        let mut h = HeroRotator::new(3, Duration::from_secs(6));
        h.tick();
        h.cancel();
        h.tick();
        h.advance(Duration::from_secs(60));
        assert_eq!(h.current(), 1);
        assert!(h.is_cancelled());
    }

    #[test]
    fn built_from_props() {
        let props = HeroProps {
            slides: vec![Default::default(); 2],
            interval_ms: 1_000,
        };
        let mut h = HeroRotator::from_props(&props);
        assert_eq!(h.len(), 2);
        h.advance(Duration::from_secs(1));
        assert_eq!(h.current(), 1);
    }
}
