//! Input translation: raw host events become navigation commands.

mod fragment;
mod swipe;

pub use fragment::{FRAGMENT_PREFIX, parse_slide_fragment, slide_fragment};
pub use swipe::{DEFAULT_SWIPE_THRESHOLD_PX, SwipeDirection, SwipeTracker};

use serde::{Deserialize, Serialize};

/// Keys the deck reacts to. Everything else maps to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    ArrowRight,
    ArrowDown,
    Space,
    PageDown,
    ArrowLeft,
    ArrowUp,
    PageUp,
    Home,
    End,
    Escape,
    Other,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "ArrowRight" => Self::ArrowRight,
            "ArrowDown" => Self::ArrowDown,
            " " | "Spacebar" => Self::Space,
            "PageDown" => Self::PageDown,
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowUp" => Self::ArrowUp,
            "PageUp" => Self::PageUp,
            "Home" => Self::Home,
            "End" => Self::End,
            "Escape" | "Esc" => Self::Escape,
            _ => Self::Other,
        }
    }

    #[must_use]
    pub fn command(self) -> Option<NavigationCommand> {
        match self {
            Self::ArrowRight | Self::ArrowDown | Self::Space | Self::PageDown => {
                Some(NavigationCommand::Next)
            }
            Self::ArrowLeft | Self::ArrowUp | Self::PageUp => Some(NavigationCommand::Prev),
            Self::Home => Some(NavigationCommand::First),
            Self::End => Some(NavigationCommand::Last),
            Self::Escape => Some(NavigationCommand::ToggleOverview),
            Self::Other => None,
        }
    }
}

/// Controller-level request produced by input translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationCommand {
    Next,
    Prev,
    First,
    Last,
    GoTo(usize),
    ToggleOverview,
}

impl NavigationCommand {
    /// Directional commands move between slides and are suppressed while the
    /// overview grid is open.
    #[must_use]
    pub fn is_directional(self) -> bool {
        !matches!(self, Self::ToggleOverview)
    }
}
