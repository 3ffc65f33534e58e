use serde::{Deserialize, Serialize};

use crate::core::SlideMark;
use crate::error::{DeckError, DeckResult};

/// One cell of the overview grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverviewItem {
    pub index: usize,
    pub title: String,
    /// Link target selecting this slide, e.g. `#slide-3`.
    pub fragment: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverviewFrame {
    pub visible: bool,
    pub items: Vec<OverviewItem>,
}

/// Backend-agnostic derived UI for one presentation state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckFrame {
    /// Transition class per slide, ordered by slide index.
    pub slide_marks: Vec<SlideMark>,
    pub current_slide: usize,
    pub total_slides: usize,
    pub progress_percent: f64,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub overview: OverviewFrame,
}

impl DeckFrame {
    /// Counter label shown next to the navigation buttons.
    #[must_use]
    pub fn counter_text(&self) -> String {
        format!("{} / {}", self.current_slide, self.total_slides)
    }

    #[must_use]
    pub fn active_slide(&self) -> Option<usize> {
        self.slide_marks
            .iter()
            .position(|mark| *mark == SlideMark::Active)
            .map(|offset| offset + 1)
    }

    pub fn validate(&self) -> DeckResult<()> {
        if self.total_slides == 0 || self.slide_marks.len() != self.total_slides {
            return Err(DeckError::InvalidData(format!(
                "frame carries {} slide marks for {} slides",
                self.slide_marks.len(),
                self.total_slides
            )));
        }
        let active_count = self
            .slide_marks
            .iter()
            .filter(|mark| **mark == SlideMark::Active)
            .count();
        if active_count != 1 || self.active_slide() != Some(self.current_slide) {
            return Err(DeckError::InvalidData(
                "frame must mark exactly the current slide as active".to_owned(),
            ));
        }
        if !self.progress_percent.is_finite() || !(0.0..=100.0).contains(&self.progress_percent) {
            return Err(DeckError::InvalidData(
                "progress must be finite and in [0, 100]".to_owned(),
            ));
        }
        if self.overview.items.len() != self.total_slides {
            return Err(DeckError::InvalidData(
                "overview grid must list every slide".to_owned(),
            ));
        }
        if self.overview.items.iter().filter(|item| item.active).count() != 1 {
            return Err(DeckError::InvalidData(
                "overview grid must highlight exactly one slide".to_owned(),
            ));
        }
        Ok(())
    }
}
