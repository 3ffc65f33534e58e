use crate::charts::ChartOrchestrator;
use crate::core::Slide;
use crate::error::{DeckError, DeckResult};

use super::DeckEngineConfig;

pub(super) fn validate_engine_config(config: &DeckEngineConfig) -> DeckResult<()> {
    if config.slide_titles.is_empty() {
        return Err(DeckError::InvalidConfig(
            "a deck needs at least one slide".to_owned(),
        ));
    }
    if config.chart_render_delay_ms > config.transition_lock_ms {
        return Err(DeckError::InvalidConfig(format!(
            "chart render delay ({} ms) must not exceed the transition lock ({} ms)",
            config.chart_render_delay_ms, config.transition_lock_ms
        )));
    }
    if !config.swipe_threshold_px.is_finite() || config.swipe_threshold_px < 0.0 {
        return Err(DeckError::InvalidConfig(
            "swipe threshold must be finite and >= 0".to_owned(),
        ));
    }
    Ok(())
}

pub(super) fn validate_slides(slides: &[Slide]) -> DeckResult<()> {
    slides.iter().try_for_each(Slide::validate)
}

pub(super) fn validate_chart_bindings(
    charts: &ChartOrchestrator,
    total_slides: usize,
) -> DeckResult<()> {
    match charts.max_bound_slide() {
        Some(slide) if slide > total_slides => Err(DeckError::InvalidConfig(format!(
            "chart bound to slide {slide} but the deck has {total_slides} slides"
        ))),
        _ => Ok(()),
    }
}
