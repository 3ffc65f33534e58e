use serde::{Deserialize, Serialize};

use crate::error::{DeckError, DeckResult};

/// Navigation lock state derived from the in-transition flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationMode {
    Idle,
    Transitioning,
}

/// Why a navigation request was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    /// A transition is still inside its lock window.
    Transitioning,
    /// Target outside `1..=total_slides`.
    OutOfRange,
    /// Directional input arrived while the overview grid was open.
    OverviewOpen,
    /// Already at the first or last slide.
    AtBoundary,
    /// Location fragment did not match `#slide-<digits>`.
    MalformedFragment,
}

/// Result of a navigation request. Rejections are silent no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationOutcome {
    Started { from: usize, to: usize },
    Rejected(RejectReason),
}

impl NavigationOutcome {
    #[must_use]
    pub fn is_started(self) -> bool {
        matches!(self, Self::Started { .. })
    }
}

/// Process-wide presentation state.
///
/// Invariant: `1 <= current_slide <= total_slides`. Mutation is only reachable
/// through crate-internal methods used by the engine controllers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentationState {
    current_slide: usize,
    total_slides: usize,
    is_animating: bool,
    overview_active: bool,
}

impl PresentationState {
    pub fn new(total_slides: usize) -> DeckResult<Self> {
        if total_slides == 0 {
            return Err(DeckError::InvalidConfig(
                "a deck needs at least one slide".to_owned(),
            ));
        }
        Ok(Self {
            current_slide: 1,
            total_slides,
            is_animating: false,
            overview_active: false,
        })
    }

    #[must_use]
    pub fn current_slide(self) -> usize {
        self.current_slide
    }

    #[must_use]
    pub fn total_slides(self) -> usize {
        self.total_slides
    }

    #[must_use]
    pub fn is_animating(self) -> bool {
        self.is_animating
    }

    #[must_use]
    pub fn overview_active(self) -> bool {
        self.overview_active
    }

    #[must_use]
    pub fn mode(self) -> NavigationMode {
        if self.is_animating {
            NavigationMode::Transitioning
        } else {
            NavigationMode::Idle
        }
    }

    #[must_use]
    pub fn contains(self, target: usize) -> bool {
        (1..=self.total_slides).contains(&target)
    }

    #[must_use]
    pub fn is_first(self) -> bool {
        self.current_slide == 1
    }

    #[must_use]
    pub fn is_last(self) -> bool {
        self.current_slide == self.total_slides
    }

    /// Progress through the deck in percent, `current / total * 100`.
    #[must_use]
    pub fn progress_percent(self) -> f64 {
        self.current_slide as f64 / self.total_slides as f64 * 100.0
    }

    /// Checks the transition guard and bounds without mutating.
    fn check_target(self, target: usize) -> Result<(), RejectReason> {
        if self.is_animating {
            return Err(RejectReason::Transitioning);
        }
        if !self.contains(target) {
            return Err(RejectReason::OutOfRange);
        }
        Ok(())
    }

    /// Applies an accepted navigation and engages the transition lock.
    pub(crate) fn begin_transition(&mut self, target: usize) -> Result<usize, RejectReason> {
        self.check_target(target)?;
        let from = self.current_slide;
        self.is_animating = true;
        self.current_slide = target;
        Ok(from)
    }

    pub(crate) fn release_lock(&mut self) {
        self.is_animating = false;
    }

    /// Flips overview visibility and returns the new value.
    pub(crate) fn toggle_overview(&mut self) -> bool {
        self.overview_active = !self.overview_active;
        self.overview_active
    }
}
