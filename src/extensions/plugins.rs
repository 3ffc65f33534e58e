use serde::{Deserialize, Serialize};

use crate::core::{NavigationMode, RejectReason};

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginContext {
    pub current_slide: usize,
    pub total_slides: usize,
    pub mode: NavigationMode,
    pub overview_active: bool,
    pub mounted_charts: usize,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeckEvent {
    SlideChanged { from: usize, to: usize },
    NavigationRejected { target: usize, reason: RejectReason },
    OverviewToggled { open: bool },
    ChartsRendered { slide: usize, mounted: usize },
    TransitionSettled { slide: usize },
}

/// Observer hook for host-side extras such as speaker notes or analytics.
///
/// Plugins see events and context but cannot mutate the deck.
pub trait DeckPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: DeckEvent, context: PluginContext);
}
