use serde::{Deserialize, Serialize};

/// Minimum horizontal travel, in device-independent pixels, for a swipe.
pub const DEFAULT_SWIPE_THRESHOLD_PX: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwipeDirection {
    /// Finger moved right-to-left; advances the deck.
    Forward,
    Backward,
}

/// Tracks one touch gesture between `touchstart` and `touchend`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeTracker {
    threshold_px: f64,
    start_x: Option<f64>,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD_PX)
    }
}

impl SwipeTracker {
    #[must_use]
    pub fn new(threshold_px: f64) -> Self {
        Self {
            threshold_px,
            start_x: None,
        }
    }

    pub fn on_touch_start(&mut self, screen_x: f64) {
        self.start_x = screen_x.is_finite().then_some(screen_x);
    }

    /// Completes the gesture.
    ///
    /// Returns `None` without a matching start, for non-finite input, or when
    /// the displacement does not exceed the threshold.
    pub fn on_touch_end(&mut self, screen_x: f64) -> Option<SwipeDirection> {
        let start_x = self.start_x.take()?;
        if !screen_x.is_finite() {
            return None;
        }
        let diff = start_x - screen_x;
        if diff.abs() <= self.threshold_px {
            return None;
        }
        if diff > 0.0 {
            Some(SwipeDirection::Forward)
        } else {
            Some(SwipeDirection::Backward)
        }
    }
}
