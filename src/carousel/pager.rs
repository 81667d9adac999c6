use crate::carousel::Carousel;
use crate::carousel::gesture::{DragTracker, SwipeDirection};
use crate::sections::props::TestimonialsProps;

/// Items shown per page for a viewport width.
pub fn page_size_for(viewport_width: u32, breakpoint_px: u32) -> usize {
    if viewport_width >= breakpoint_px { 2 } else { 1 }
}

/// Paged testimonial strip. No auto-rotation: [`Carousel::tick`] is a no-op.
///
/// `current` stays within `0..=max(0, len - page_size)` through every transition.
#[derive(Clone, Debug, PartialEq)]
pub struct TestimonialPager {
    count: usize,
    index: usize,
    page_size: usize,
    breakpoint_px: u32,
    drag: DragTracker,
    cancelled: bool,
}

impl TestimonialPager {
    pub fn new(count: usize, viewport_width: u32, breakpoint_px: u32, swipe_threshold: f64) -> Self {
        Self {
            count,
            index: 0,
            page_size: page_size_for(viewport_width, breakpoint_px),
            breakpoint_px,
            drag: DragTracker::new(swipe_threshold),
            cancelled: false,
        }
    }

    pub fn from_props(props: &TestimonialsProps, viewport_width: u32) -> Self {
        Self::new(
            props.items.len(),
            viewport_width,
            props.breakpoint_px,
            props.swipe_threshold,
        )
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    fn max_index(&self) -> usize {
        self.count.saturating_sub(self.page_size)
    }

    pub fn next(&mut self) {
        if self.cancelled {
            return;
        }
        self.index = (self.index + self.page_size).min(self.max_index());
    }

    pub fn previous(&mut self) {
        if self.cancelled {
            return;
        }
        self.index = self.index.saturating_sub(self.page_size);
    }

    /// Jump to the first item of `page`, clamped to the last full page.
    pub fn go_to_page(&mut self, page: usize) {
        if self.cancelled {
            return;
        }
        self.index = page.saturating_mul(self.page_size).min(self.max_index());
    }

    /// Recompute the page size for a new viewport width. The position is clamped, not reset.
    pub fn resize(&mut self, viewport_width: u32) {
        if self.cancelled {
            return;
        }
        self.page_size = page_size_for(viewport_width, self.breakpoint_px);
        self.index = self.index.min(self.max_index());
    }

    pub fn page_count(&self) -> usize {
        self.count.div_ceil(self.page_size)
    }

    pub fn active_page(&self) -> usize {
        self.index / self.page_size
    }

    pub fn can_prev(&self) -> bool {
        self.index > 0
    }

    pub fn can_next(&self) -> bool {
        self.index < self.max_index()
    }

    /// Horizontal translation of the strip, as a percentage of the viewport.
    pub fn track_offset_percent(&self) -> f64 {
        self.index as f64 * 100.0 / self.page_size as f64
    }

    pub fn drag_start(&mut self, x: f64) {
        if !self.cancelled {
            self.drag.begin(x);
        }
    }

    /// End a drag (pointer-up or pointer-leave) and apply the resulting swipe.
    pub fn drag_end(&mut self, x: f64) -> Option<SwipeDirection> {
        if self.cancelled {
            return None;
        }
        let swipe = self.drag.end(x)?;
        match swipe {
            SwipeDirection::Next => self.next(),
            SwipeDirection::Previous => self.previous(),
        }
        Some(swipe)
    }
}

impl Carousel for TestimonialPager {
    fn tick(&mut self) {}

    fn cancel(&mut self) {
        self.cancelled = true;
        self.drag.reset();
    }

    fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    fn current(&self) -> usize {
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESKTOP: u32 = 1024;
    const MOBILE: u32 = 375;

    #[test]
    fn next_clamps_to_last_full_page() {
        let mut p = TestimonialPager::new(5, DESKTOP, 768, 50.0);
        assert_eq!(p.page_size(), 2);
        for _ in 0..10 {
            p.next();
        }
        assert_eq!(p.current(), 3);
        assert!(!p.can_next());
        assert!(p.can_prev());
    }

    #[test]
    fn previous_at_start_stays() {
        let mut p = TestimonialPager::new(5, DESKTOP, 768, 50.0);
        p.previous();
        assert_eq!(p.current(), 0);
        assert!(!p.can_prev());
    }

    #[test]
    fn breakpoint_is_inclusive() {
        assert_eq!(page_size_for(768, 768), 2);
        assert_eq!(page_size_for(767, 768), 1);
    }

    #[test]
    fn pages_and_offsets() {
        let mut p = TestimonialPager::new(5, DESKTOP, 768, 50.0);
        assert_eq!(p.page_count(), 3);
        p.go_to_page(1);
        assert_eq!(p.current(), 2);
        assert_eq!(p.active_page(), 1);
        assert_eq!(p.track_offset_percent(), 100.0);
        p.go_to_page(2);
        assert_eq!(p.current(), 3);
        assert_eq!(p.active_page(), 1);
        p.go_to_page(usize::MAX);
        assert_eq!(p.current(), 3);
    }

    #[test]
    fn resize_reclamps_without_reset() {
        let mut p = TestimonialPager::new(5, MOBILE, 768, 50.0);
        for _ in 0..4 {
            p.next();
        }
        assert_eq!(p.current(), 4);
        assert_eq!(p.track_offset_percent(), 400.0);
        p.resize(DESKTOP);
        assert_eq!(p.page_size(), 2);
        assert_eq!(p.current(), 3);
        p.resize(MOBILE);
        assert_eq!(p.current(), 3);
        assert_eq!(p.page_count(), 5);
    }

    #[test]
    fn fewer_items_than_a_page() {
        let mut p = TestimonialPager::new(1, DESKTOP, 768, 50.0);
        p.next();
        assert_eq!(p.current(), 0);
        assert_eq!(p.page_count(), 1);
        assert!(!p.can_next());

        let mut p = TestimonialPager::new(0, DESKTOP, 768, 50.0);
        p.next();
        p.go_to_page(3);
        assert_eq!(p.current(), 0);
        assert_eq!(p.page_count(), 0);
    }

    #[test]
    fn drag_moves_one_page() {
        let mut p = TestimonialPager::new(5, DESKTOP, 768, 50.0);
        p.drag_start(300.0);
        assert_eq!(p.drag_end(251.0), None);
        assert_eq!(p.current(), 0);
        p.drag_start(300.0);
        assert_eq!(p.drag_end(249.0), Some(SwipeDirection::Next));
        assert_eq!(p.current(), 2);
        p.drag_start(0.0);
        assert_eq!(p.drag_end(400.0), Some(SwipeDirection::Previous));
        assert_eq!(p.current(), 0);
    }

    #[test]
    fn cancelled_pager_is_inert() {
        let mut p = TestimonialPager::new(5, DESKTOP, 768, 50.0);
        p.drag_start(300.0);
        p.cancel();
        assert_eq!(p.drag_end(0.0), None);
        p.next();
        p.go_to_page(1);
        p.resize(MOBILE);
        p.tick();
        assert_eq!(p.current(), 0);
        assert_eq!(p.page_size(), 2);
    }
}
