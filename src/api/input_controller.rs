use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{NavigationOutcome, RejectReason};
use crate::interaction::{Key, NavigationCommand, SwipeDirection};
use crate::render::Renderer;

use super::DeckEngine;

/// Effect of executing one [`NavigationCommand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandOutcome {
    Navigation(NavigationOutcome),
    Overview { open: bool },
}

impl<R: Renderer> DeckEngine<R> {
    /// Routes a command to the matching controller.
    pub fn execute(&mut self, command: NavigationCommand) -> CommandOutcome {
        let outcome = match command {
            NavigationCommand::Next => self.next_slide(),
            NavigationCommand::Prev => self.prev_slide(),
            NavigationCommand::First => self.first_slide(),
            NavigationCommand::Last => self.last_slide(),
            NavigationCommand::GoTo(target) => self.go_to_slide(target),
            NavigationCommand::ToggleOverview => {
                return CommandOutcome::Overview {
                    open: self.toggle_overview(),
                };
            }
        };
        CommandOutcome::Navigation(outcome)
    }

    /// Handles a key press. Returns `true` when the key was consumed and the
    /// host should suppress its default action.
    ///
    /// While the overview is open only `Escape` is honored, so slides never
    /// change unseen beneath the grid.
    pub fn key_down(&mut self, key: Key) -> bool {
        let Some(command) = key.command() else {
            return false;
        };
        if self.state.overview_active() && command.is_directional() {
            trace!(?key, "key suppressed while overview is open");
            return false;
        }
        self.execute(command);
        true
    }

    pub fn click_prev(&mut self) -> NavigationOutcome {
        self.prev_slide()
    }

    pub fn click_next(&mut self) -> NavigationOutcome {
        self.next_slide()
    }

    pub fn touch_start(&mut self, screen_x: f64) {
        self.swipe.on_touch_start(screen_x);
    }

    /// Completes a touch gesture. Returns `None` when it was not a swipe.
    pub fn touch_end(&mut self, screen_x: f64) -> Option<NavigationOutcome> {
        let direction = self.swipe.on_touch_end(screen_x)?;
        if self.state.overview_active() {
            let target = match direction {
                SwipeDirection::Forward => self.state.current_slide() + 1,
                SwipeDirection::Backward => self.state.current_slide().saturating_sub(1),
            };
            return Some(self.reject(target, RejectReason::OverviewOpen));
        }
        Some(match direction {
            SwipeDirection::Forward => self.next_slide(),
            SwipeDirection::Backward => self.prev_slide(),
        })
    }
}
