//! Built-in deck content: the eight-slide AI strategic planning presentation.

pub mod charts;
mod slides;

pub use charts::strategic_planning_bindings;
pub use slides::STRATEGIC_PLANNING_TITLES;
