use tracing::debug;

use crate::core::{DeferredTask, NavigationOutcome, RejectReason};
use crate::extensions::DeckEvent;
use crate::interaction::parse_slide_fragment;
use crate::render::Renderer;

use super::DeckEngine;

impl<R: Renderer> DeckEngine<R> {
    /// Starts a transition to `target` (1-based).
    ///
    /// Rejected without side effects while a transition is in flight or when
    /// `target` is outside the deck. On success the frame is rendered before
    /// returning; chart rendering and lock release are scheduled on the
    /// timeline.
    pub fn go_to_slide(&mut self, target: usize) -> NavigationOutcome {
        let from = match self.state.begin_transition(target) {
            Ok(from) => from,
            Err(reason) => return self.reject(target, reason),
        };

        self.present_frame();
        self.timeline.schedule_after(
            self.config.chart_render_delay(),
            DeferredTask::RenderCharts { slide: target },
        );
        self.timeline
            .schedule_after(self.config.transition_lock(), DeferredTask::ReleaseLock);

        debug!(from, to = target, "slide transition started");
        self.emit_plugin_event(DeckEvent::SlideChanged { from, to: target });
        NavigationOutcome::Started { from, to: target }
    }

    /// Advances one slide; no-op on the last slide.
    pub fn next_slide(&mut self) -> NavigationOutcome {
        let current = self.state.current_slide();
        if self.state.is_last() {
            return self.reject(current + 1, RejectReason::AtBoundary);
        }
        self.go_to_slide(current + 1)
    }

    /// Goes back one slide; no-op on the first slide.
    pub fn prev_slide(&mut self) -> NavigationOutcome {
        let current = self.state.current_slide();
        if self.state.is_first() {
            return self.reject(0, RejectReason::AtBoundary);
        }
        self.go_to_slide(current - 1)
    }

    pub fn first_slide(&mut self) -> NavigationOutcome {
        self.go_to_slide(1)
    }

    pub fn last_slide(&mut self) -> NavigationOutcome {
        self.go_to_slide(self.state.total_slides())
    }

    /// Navigates to the slide named by a `#slide-<N>` location fragment.
    ///
    /// Malformed and out-of-range fragments are ignored.
    pub fn handle_fragment(&mut self, fragment: &str) -> NavigationOutcome {
        let Some(target) = parse_slide_fragment(fragment) else {
            debug!(fragment, "ignoring malformed slide fragment");
            return NavigationOutcome::Rejected(RejectReason::MalformedFragment);
        };
        if !self.state.contains(target) {
            return self.reject(target, RejectReason::OutOfRange);
        }
        self.go_to_slide(target)
    }

    pub(super) fn reject(&mut self, target: usize, reason: RejectReason) -> NavigationOutcome {
        debug!(
            target,
            current = self.state.current_slide(),
            ?reason,
            "navigation rejected"
        );
        self.emit_plugin_event(DeckEvent::NavigationRejected { target, reason });
        NavigationOutcome::Rejected(reason)
    }
}
