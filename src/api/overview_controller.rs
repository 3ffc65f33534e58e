use crate::core::NavigationOutcome;
use crate::extensions::DeckEvent;
use crate::render::Renderer;

use super::DeckEngine;

impl<R: Renderer> DeckEngine<R> {
    /// Opens or closes the overview grid and returns the new visibility.
    ///
    /// Allowed during transitions; the navigation lock is not consulted.
    pub fn toggle_overview(&mut self) -> bool {
        let open = self.state.toggle_overview();
        self.present_frame();
        self.emit_plugin_event(DeckEvent::OverviewToggled { open });
        open
    }

    /// Handles a click on an overview grid cell: closes the grid, then
    /// navigates to `index`.
    pub fn select_overview_item(&mut self, index: usize) -> NavigationOutcome {
        if self.state.overview_active() {
            self.toggle_overview();
        }
        self.go_to_slide(index)
    }

    /// Handles a click on the modal backdrop. Returns `true` when the grid
    /// was open and is now closed.
    pub fn click_overview_backdrop(&mut self) -> bool {
        if !self.state.overview_active() {
            return false;
        }
        self.toggle_overview();
        true
    }
}
