use crate::foundation::error::{PageError, PageResult};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

/// Timing and threshold settings for the presentation state machines.
///
/// Every field has a default, so a partial JSON object is a valid configuration.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineOpts {
    /// Hero carousel rotation period.
    pub hero_interval_ms: u64,
    /// Image slideshow rotation period.
    pub slideshow_interval_ms: u64,
    /// Cross-fade length between two slideshow images.
    pub slideshow_fade_ms: u64,
    /// Minimum horizontal drag distance that counts as a swipe.
    pub swipe_threshold: f64,
    /// Viewport width at and above which the testimonial pager shows two items.
    pub pager_breakpoint_px: u32,
    /// Count-up animation length.
    pub count_up_duration_ms: u64,
    /// How long the count-up "ghost" echo stays visible after completion.
    pub count_up_ghost_ms: u64,
}

impl Default for EngineOpts {
    fn default() -> Self {
        Self {
            hero_interval_ms: 6_000,
            slideshow_interval_ms: 5_000,
            slideshow_fade_ms: 1_000,
            swipe_threshold: 50.0,
            pager_breakpoint_px: 768,
            count_up_duration_ms: 2_000,
            count_up_ghost_ms: 1_000,
        }
    }
}

impl EngineOpts {
    /// Parse options from a JSON reader and validate them.
    pub fn from_reader<R: std::io::Read>(r: R) -> PageResult<Self> {
        let opts: Self = serde_json::from_reader(r)
            .map_err(|e| PageError::serde(format!("parse engine options JSON: {e}")))?;
        opts.validate()?;
        Ok(opts)
    }

    /// Load options from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> PageResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            PageError::validation(format!("open engine options '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> PageResult<()> {
        if self.hero_interval_ms == 0 {
            return Err(PageError::validation("heroIntervalMs must be > 0"));
        }
        if self.slideshow_interval_ms == 0 {
            return Err(PageError::validation("slideshowIntervalMs must be > 0"));
        }
        if self.count_up_duration_ms == 0 {
            return Err(PageError::validation("countUpDurationMs must be > 0"));
        }
        if !self.swipe_threshold.is_finite() || self.swipe_threshold < 0.0 {
            return Err(PageError::validation(
                "swipeThreshold must be finite and >= 0",
            ));
        }
        Ok(())
    }

    pub fn hero_interval(&self) -> Duration {
        Duration::from_millis(self.hero_interval_ms)
    }

    pub fn slideshow_interval(&self) -> Duration {
        Duration::from_millis(self.slideshow_interval_ms)
    }

    pub fn slideshow_fade(&self) -> Duration {
        Duration::from_millis(self.slideshow_fade_ms)
    }

    pub fn count_up_duration(&self) -> Duration {
        Duration::from_millis(self.count_up_duration_ms)
    }

    pub fn count_up_ghost(&self) -> Duration {
        Duration::from_millis(self.count_up_ghost_ms)
    }
}
