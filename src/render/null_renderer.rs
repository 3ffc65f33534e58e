use indexmap::{IndexMap, IndexSet};

use crate::charts::ChartConfig;
use crate::error::{DeckError, DeckResult};
use crate::render::{ChartHandle, DeckFrame, Renderer};

/// Chart lifecycle call observed by [`NullRenderer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartCall {
    Mounted { id: u64, surface: String },
    Destroyed { id: u64, surface: String },
}

/// Headless renderer used by tests, tooling and headless engine usage.
///
/// It still validates frames and chart configs so tests catch malformed
/// output before a real backend is attached. Every surface exists unless it
/// was listed in `missing_surfaces`.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_frame: Option<DeckFrame>,
    pub missing_surfaces: IndexSet<String>,
    /// Makes every mount fail, simulating a broken rendering service.
    pub fail_mounts: bool,
    pub chart_calls: Vec<ChartCall>,
    /// Surface of every live instance, keyed by instance id.
    pub live_charts: IndexMap<u64, String>,
    /// Last config mounted on each surface.
    pub mounted_configs: IndexMap<String, ChartConfig>,
    next_chart_id: u64,
}

impl NullRenderer {
    #[must_use]
    pub fn with_missing_surfaces<I, S>(surfaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            missing_surfaces: surfaces.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_failing_mounts(mut self) -> Self {
        self.fail_mounts = true;
        self
    }

    #[must_use]
    pub fn mount_count(&self, surface: &str) -> usize {
        self.chart_calls
            .iter()
            .filter(|call| matches!(call, ChartCall::Mounted { surface: s, .. } if s == surface))
            .count()
    }

    #[must_use]
    pub fn destroy_count(&self, surface: &str) -> usize {
        self.chart_calls
            .iter()
            .filter(|call| matches!(call, ChartCall::Destroyed { surface: s, .. } if s == surface))
            .count()
    }

    #[must_use]
    pub fn live_on(&self, surface: &str) -> usize {
        self.live_charts.values().filter(|s| *s == surface).count()
    }
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &DeckFrame) -> DeckResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_frame = Some(frame.clone());
        Ok(())
    }

    fn has_surface(&self, surface: &str) -> bool {
        !self.missing_surfaces.contains(surface)
    }

    fn mount_chart(&mut self, surface: &str, config: &ChartConfig) -> DeckResult<ChartHandle> {
        if self.fail_mounts {
            return Err(DeckError::Render(format!(
                "mount refused on surface `{surface}`"
            )));
        }
        config.validate()?;
        self.next_chart_id += 1;
        let id = self.next_chart_id;
        self.live_charts.insert(id, surface.to_owned());
        self.mounted_configs
            .insert(surface.to_owned(), config.clone());
        self.chart_calls.push(ChartCall::Mounted {
            id,
            surface: surface.to_owned(),
        });
        Ok(ChartHandle::new(id))
    }

    fn destroy_chart(&mut self, handle: ChartHandle) {
        if let Some(surface) = self.live_charts.shift_remove(&handle.id()) {
            self.chart_calls.push(ChartCall::Destroyed {
                id: handle.id(),
                surface,
            });
        }
    }
}
