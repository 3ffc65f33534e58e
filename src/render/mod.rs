mod frame;
mod null_renderer;
mod primitives;

pub use frame::{DeckFrame, OverviewFrame, OverviewItem};
pub use null_renderer::{ChartCall, NullRenderer};
pub use primitives::Color;

use crate::charts::ChartConfig;
use crate::error::DeckResult;

/// Opaque handle to one chart instance living in the rendering service.
///
/// Handles are deliberately not `Clone`: whoever holds one owns the instance
/// and must give it back through [`Renderer::destroy_chart`].
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct ChartHandle {
    id: u64,
}

impl ChartHandle {
    /// Wraps a backend-specific instance id.
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self { id }
    }

    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }
}

/// Contract implemented by any host backend.
///
/// Frames are fully materialized and deterministic, so drawing code stays
/// isolated from navigation logic. Chart calls are limited to construction
/// from a declarative config and destruction; instances are never queried
/// or reconfigured in place.
pub trait Renderer {
    fn render(&mut self, frame: &DeckFrame) -> DeckResult<()>;

    /// Whether the named mount surface exists in the current layout.
    fn has_surface(&self, surface: &str) -> bool;

    fn mount_chart(&mut self, surface: &str, config: &ChartConfig) -> DeckResult<ChartHandle>;

    fn destroy_chart(&mut self, handle: ChartHandle);
}
