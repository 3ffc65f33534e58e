use crate::core::SlideMark;
use crate::interaction::slide_fragment;
use crate::render::{DeckFrame, OverviewFrame, OverviewItem, Renderer};

use super::DeckEngine;

impl<R: Renderer> DeckEngine<R> {
    /// Materializes the derived UI for the current state.
    #[must_use]
    pub fn build_frame(&self) -> DeckFrame {
        let current = self.state.current_slide();
        let total = self.state.total_slides();

        let slide_marks = self
            .slides
            .iter()
            .map(|slide| SlideMark::for_index(slide.index, current))
            .collect();

        let items = self
            .slides
            .iter()
            .map(|slide| OverviewItem {
                index: slide.index,
                title: slide.title.clone(),
                fragment: slide_fragment(slide.index),
                active: slide.index == current,
            })
            .collect();

        DeckFrame {
            slide_marks,
            current_slide: current,
            total_slides: total,
            progress_percent: self.state.progress_percent(),
            prev_enabled: !self.state.is_first(),
            next_enabled: !self.state.is_last(),
            overview: OverviewFrame {
                visible: self.state.overview_active(),
                items,
            },
        }
    }
}
