mod engine_config;
mod frame_builder;
mod input_controller;
mod navigation_controller;
mod overview_controller;
mod plugin_dispatch;
mod plugin_registry;
mod snapshot;
mod timeline_controller;
mod validation;

pub use engine_config::{ChartSet, DeckEngineConfig};
pub use input_controller::CommandOutcome;
pub use snapshot::{DECK_SNAPSHOT_JSON_SCHEMA_V1, DeckSnapshot, DeckSnapshotJsonContractV1};

use crate::charts::ChartOrchestrator;
use crate::core::{NavigationMode, PresentationState, Slide, TransitionTimeline, slides_from_titles};
use crate::error::DeckResult;
use crate::extensions::DeckPlugin;
use crate::interaction::SwipeTracker;
use crate::render::Renderer;

use validation::{validate_chart_bindings, validate_engine_config, validate_slides};

/// Presentation engine: owns deck state and drives a [`Renderer`].
///
/// All mutation goes through the controller methods, which keeps
/// `1 <= current_slide <= total_slides` and the single in-flight transition
/// guarantee intact. Deferred work runs only when the host calls
/// [`DeckEngine::advance`].
pub struct DeckEngine<R: Renderer> {
    renderer: R,
    config: DeckEngineConfig,
    slides: Vec<Slide>,
    state: PresentationState,
    timeline: TransitionTimeline,
    swipe: SwipeTracker,
    charts: ChartOrchestrator,
    plugins: Vec<Box<dyn DeckPlugin>>,
}

impl<R: Renderer> DeckEngine<R> {
    /// Validates `config`, builds the deck and renders the initial frame.
    pub fn new(renderer: R, config: DeckEngineConfig) -> DeckResult<Self> {
        validate_engine_config(&config)?;

        let slides = slides_from_titles(config.slide_titles.iter().cloned());
        validate_slides(&slides)?;
        let state = PresentationState::new(slides.len())?;
        let charts = ChartOrchestrator::new(config.chart_set.bindings())?;
        validate_chart_bindings(&charts, slides.len())?;

        let mut engine = Self {
            renderer,
            swipe: SwipeTracker::new(config.swipe_threshold_px),
            config,
            slides,
            state,
            timeline: TransitionTimeline::default(),
            charts,
            plugins: Vec::new(),
        };
        let frame = engine.build_frame();
        engine.renderer.render(&frame)?;
        Ok(engine)
    }

    #[must_use]
    pub fn config(&self) -> &DeckEngineConfig {
        &self.config
    }

    #[must_use]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    #[must_use]
    pub fn state(&self) -> PresentationState {
        self.state
    }

    #[must_use]
    pub fn current_slide(&self) -> usize {
        self.state.current_slide()
    }

    #[must_use]
    pub fn total_slides(&self) -> usize {
        self.state.total_slides()
    }

    #[must_use]
    pub fn mode(&self) -> NavigationMode {
        self.state.mode()
    }

    #[must_use]
    pub fn overview_active(&self) -> bool {
        self.state.overview_active()
    }

    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        self.state.progress_percent()
    }

    #[must_use]
    pub fn charts(&self) -> &ChartOrchestrator {
        &self.charts
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Destroys every live chart and hands the renderer back to the host.
    #[must_use]
    pub fn into_renderer(mut self) -> R {
        self.charts.teardown(&mut self.renderer);
        self.renderer
    }

    fn present_frame(&mut self) {
        let frame = self.build_frame();
        if let Err(err) = self.renderer.render(&frame) {
            tracing::warn!(
                slide = self.state.current_slide(),
                error = %err,
                "frame render failed"
            );
        }
    }
}
