use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::charts::ChartBinding;
use crate::content::{STRATEGIC_PLANNING_TITLES, strategic_planning_bindings};
use crate::error::{DeckError, DeckResult};
use crate::interaction::DEFAULT_SWIPE_THRESHOLD_PX;

/// Which built-in chart bindings the engine orchestrates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartSet {
    None,
    StrategicPlanning,
}

impl ChartSet {
    #[must_use]
    pub fn bindings(self) -> Vec<ChartBinding> {
        match self {
            Self::None => Vec::new(),
            Self::StrategicPlanning => strategic_planning_bindings(),
        }
    }
}

/// Public engine bootstrap configuration.
///
/// Serializable so hosts can keep deck setup next to their content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckEngineConfig {
    pub slide_titles: Vec<String>,
    #[serde(default = "default_chart_set")]
    pub chart_set: ChartSet,
    /// Delay between a navigation and rendering the new slide's charts.
    #[serde(default = "default_chart_render_delay_ms")]
    pub chart_render_delay_ms: u64,
    /// Length of the window during which further navigation is rejected.
    #[serde(default = "default_transition_lock_ms")]
    pub transition_lock_ms: u64,
    #[serde(default = "default_swipe_threshold_px")]
    pub swipe_threshold_px: f64,
}

impl DeckEngineConfig {
    /// Creates a chart-less deck with default timing.
    #[must_use]
    pub fn new<I, S>(slide_titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            slide_titles: slide_titles.into_iter().map(Into::into).collect(),
            chart_set: default_chart_set(),
            chart_render_delay_ms: default_chart_render_delay_ms(),
            transition_lock_ms: default_transition_lock_ms(),
            swipe_threshold_px: default_swipe_threshold_px(),
        }
    }

    /// The built-in eight-slide strategic planning deck with its charts.
    #[must_use]
    pub fn strategic_planning() -> Self {
        Self::new(STRATEGIC_PLANNING_TITLES).with_chart_set(ChartSet::StrategicPlanning)
    }

    #[must_use]
    pub fn with_chart_set(mut self, chart_set: ChartSet) -> Self {
        self.chart_set = chart_set;
        self
    }

    #[must_use]
    pub fn with_timing(mut self, chart_render_delay_ms: u64, transition_lock_ms: u64) -> Self {
        self.chart_render_delay_ms = chart_render_delay_ms;
        self.transition_lock_ms = transition_lock_ms;
        self
    }

    #[must_use]
    pub fn with_swipe_threshold(mut self, threshold_px: f64) -> Self {
        self.swipe_threshold_px = threshold_px;
        self
    }

    #[must_use]
    pub fn total_slides(&self) -> usize {
        self.slide_titles.len()
    }

    #[must_use]
    pub fn chart_render_delay(&self) -> Duration {
        Duration::from_millis(self.chart_render_delay_ms)
    }

    #[must_use]
    pub fn transition_lock(&self) -> Duration {
        Duration::from_millis(self.transition_lock_ms)
    }

    pub fn to_json_pretty(&self) -> DeckResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DeckError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> DeckResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| DeckError::InvalidConfig(format!("failed to parse config json: {e}")))
    }
}

fn default_chart_set() -> ChartSet {
    ChartSet::None
}

fn default_chart_render_delay_ms() -> u64 {
    300
}

fn default_transition_lock_ms() -> u64 {
    600
}

fn default_swipe_threshold_px() -> f64 {
    DEFAULT_SWIPE_THRESHOLD_PX
}
