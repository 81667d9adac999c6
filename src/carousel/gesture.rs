/// Outcome of a completed horizontal drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SwipeDirection {
    Next,
    Previous,
}

/// Tracks one pointer or touch drag at a time.
///
/// Pointer-up and pointer-leave both end the gesture through [`DragTracker::end`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragTracker {
    threshold: f64,
    start: Option<f64>,
}

impl DragTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            start: None,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_dragging(&self) -> bool {
        self.start.is_some()
    }

    pub fn begin(&mut self, x: f64) {
        self.start = Some(x);
    }

    /// Finish the drag at `x`. Dragging left past the threshold means next; right means
    /// previous. Anything shorter snaps back.
    pub fn end(&mut self, x: f64) -> Option<SwipeDirection> {
        let start = self.start.take()?;
        let delta = start - x;
        if delta.abs() <= self.threshold {
            return None;
        }
        Some(if delta > 0.0 {
            SwipeDirection::Next
        } else {
            SwipeDirection::Previous
        })
    }

    /// Drop an in-flight drag without a result.
    pub fn reset(&mut self) {
        self.start = None;
    }
}
