use indexmap::IndexMap;
use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use crate::error::{DeckError, DeckResult};
use crate::render::{ChartHandle, Renderer};

use super::ChartConfig;

/// Associates a slide with a mount surface and a pure config builder.
#[derive(Debug, Clone, Copy)]
pub struct ChartBinding {
    pub slide: usize,
    pub surface: &'static str,
    pub build: fn() -> ChartConfig,
}

impl ChartBinding {
    #[must_use]
    pub const fn new(slide: usize, surface: &'static str, build: fn() -> ChartConfig) -> Self {
        Self {
            slide,
            surface,
            build,
        }
    }
}

type SlideBindings = SmallVec<[ChartBinding; 2]>;

/// Owns every live chart instance and re-creates them on slide visits.
///
/// A surface holds at most one instance. Each render destroys the previous
/// instance, then builds and validates a fresh config before mounting it.
/// Invalid configs never reach the renderer.
#[derive(Debug, Default)]
pub struct ChartOrchestrator {
    bindings: IndexMap<usize, SlideBindings>,
    handles: IndexMap<&'static str, ChartHandle>,
}

impl ChartOrchestrator {
    pub fn new(bindings: impl IntoIterator<Item = ChartBinding>) -> DeckResult<Self> {
        let mut orchestrator = Self::default();
        for binding in bindings {
            orchestrator.bind(binding)?;
        }
        Ok(orchestrator)
    }

    fn bind(&mut self, binding: ChartBinding) -> DeckResult<()> {
        if binding.slide == 0 {
            return Err(DeckError::InvalidConfig(format!(
                "chart surface `{}` is bound to slide 0",
                binding.surface
            )));
        }
        if binding.surface.is_empty() {
            return Err(DeckError::InvalidConfig(
                "chart surface id must not be empty".to_owned(),
            ));
        }
        if self
            .bindings
            .values()
            .flatten()
            .any(|existing| existing.surface == binding.surface)
        {
            return Err(DeckError::InvalidConfig(format!(
                "chart surface `{}` is bound more than once",
                binding.surface
            )));
        }
        self.bindings.entry(binding.slide).or_default().push(binding);
        Ok(())
    }

    #[must_use]
    pub fn bindings_for(&self, slide: usize) -> &[ChartBinding] {
        self.bindings
            .get(&slide)
            .map(|bindings| bindings.as_slice())
            .unwrap_or_default()
    }

    /// Highest slide index carrying a chart, if any.
    #[must_use]
    pub fn max_bound_slide(&self) -> Option<usize> {
        self.bindings.keys().copied().max()
    }

    #[must_use]
    pub fn has_instance(&self, surface: &str) -> bool {
        self.handles.contains_key(surface)
    }

    #[must_use]
    pub fn instance_count(&self) -> usize {
        self.handles.len()
    }

    /// Surfaces holding a live instance, most recently mounted last.
    #[must_use]
    pub fn mounted_surfaces(&self) -> Vec<String> {
        self.handles.keys().map(|surface| (*surface).to_owned()).collect()
    }

    /// Renders every chart bound to `slide` and returns how many were mounted.
    pub fn render_slide<R: Renderer>(&mut self, slide: usize, renderer: &mut R) -> usize {
        let Some(bindings) = self.bindings.get(&slide) else {
            return 0;
        };

        let mut mounted = 0;
        for binding in bindings {
            if !renderer.has_surface(binding.surface) {
                debug!(slide, surface = binding.surface, "chart surface missing, skipping");
                continue;
            }

            if let Some(previous) = self.handles.shift_remove(binding.surface) {
                trace!(surface = binding.surface, id = previous.id(), "destroying chart");
                renderer.destroy_chart(previous);
            }

            let config = (binding.build)();
            if let Err(err) = config.validate() {
                warn!(
                    slide,
                    surface = binding.surface,
                    error = %err,
                    "chart config rejected"
                );
                continue;
            }
            match renderer.mount_chart(binding.surface, &config) {
                Ok(handle) => {
                    trace!(surface = binding.surface, id = handle.id(), "mounted chart");
                    self.handles.insert(binding.surface, handle);
                    mounted += 1;
                }
                Err(err) => {
                    warn!(
                        slide,
                        surface = binding.surface,
                        error = %err,
                        "chart mount failed"
                    );
                }
            }
        }
        mounted
    }

    /// Destroys every live instance.
    pub fn teardown<R: Renderer>(&mut self, renderer: &mut R) {
        for (_, handle) in self.handles.drain(..) {
            renderer.destroy_chart(handle);
        }
    }
}
