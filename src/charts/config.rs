use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{DeckError, DeckResult};
use crate::render::Color;

/// Chart family understood by the rendering service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    Line,
    Doughnut,
    Radar,
}

/// Dataset fill: one color for the whole series or one per data point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fill {
    Solid(Color),
    PerPoint(Vec<Color>),
}

impl Fill {
    fn colors(&self) -> &[Color] {
        match self {
            Self::Solid(color) => std::slice::from_ref(color),
            Self::PerPoint(colors) => colors,
        }
    }
}

/// Point marker styling for line and radar series.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointStyle {
    pub radius: Option<f64>,
    pub hover_radius: Option<f64>,
    pub border_width: Option<f64>,
    pub background_color: Option<Color>,
    pub border_color: Option<Color>,
    pub hover_background_color: Option<Color>,
    pub hover_border_color: Option<Color>,
}

/// Dash pattern in pixels: alternating dash and gap lengths.
pub type DashPattern = SmallVec<[f64; 2]>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub label: Option<String>,
    pub data: Vec<f64>,
    pub background: Fill,
    pub border_color: Option<Color>,
    pub border_width: f64,
    pub border_radius: f64,
    pub border_dash: DashPattern,
    /// Fills the area under a line series.
    pub area_fill: bool,
    /// Bezier curve tension for line series, `0` draws straight segments.
    pub tension: f64,
    pub point: PointStyle,
}

impl Dataset {
    #[must_use]
    pub fn new(data: Vec<f64>, background: Fill) -> Self {
        Self {
            label: None,
            data,
            background,
            border_color: None,
            border_width: 0.0,
            border_radius: 0.0,
            border_dash: DashPattern::new(),
            area_fill: false,
            tension: 0.0,
            point: PointStyle::default(),
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_border(mut self, color: Color, width: f64) -> Self {
        self.border_color = Some(color);
        self.border_width = width;
        self
    }

    #[must_use]
    pub fn with_border_radius(mut self, radius: f64) -> Self {
        self.border_radius = radius;
        self
    }

    #[must_use]
    pub fn with_border_dash(mut self, pattern: &[f64]) -> Self {
        self.border_dash = pattern.iter().copied().collect();
        self
    }

    #[must_use]
    pub fn with_area_fill(mut self, tension: f64) -> Self {
        self.area_fill = true;
        self.tension = tension;
        self
    }

    #[must_use]
    pub fn with_point(mut self, point: PointStyle) -> Self {
        self.point = point;
        self
    }

    fn validate(&self, label_count: usize, position: usize) -> DeckResult<()> {
        if self.data.len() != label_count {
            return Err(DeckError::InvalidData(format!(
                "dataset {position} has {} values for {label_count} labels",
                self.data.len()
            )));
        }
        if self.data.iter().any(|value| !value.is_finite()) {
            return Err(DeckError::InvalidData(format!(
                "dataset {position} values must be finite"
            )));
        }
        if let Fill::PerPoint(colors) = &self.background {
            if colors.len() != label_count {
                return Err(DeckError::InvalidData(format!(
                    "dataset {position} has {} fill colors for {label_count} labels",
                    colors.len()
                )));
            }
        }
        for color in self.background.colors() {
            color.validate()?;
        }
        for color in [
            self.border_color,
            self.point.background_color,
            self.point.border_color,
            self.point.hover_background_color,
            self.point.hover_border_color,
        ]
        .into_iter()
        .flatten()
        {
            color.validate()?;
        }
        let lengths = [
            self.border_width,
            self.border_radius,
            self.tension,
            self.point.radius.unwrap_or(0.0),
            self.point.hover_radius.unwrap_or(0.0),
            self.point.border_width.unwrap_or(0.0),
        ];
        if lengths
            .iter()
            .chain(self.border_dash.iter())
            .any(|value| !value.is_finite() || *value < 0.0)
        {
            return Err(DeckError::InvalidData(format!(
                "dataset {position} styling lengths must be finite and >= 0"
            )));
        }
        Ok(())
    }
}

/// Tick label decoration the rendering service applies to numeric axes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TickFormat {
    Plain,
    Prefix(String),
    Suffix(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridStyle {
    pub display: bool,
    pub color: Option<Color>,
}

impl GridStyle {
    #[must_use]
    pub fn hidden() -> Self {
        Self {
            display: false,
            color: None,
        }
    }

    #[must_use]
    pub fn colored(color: Color) -> Self {
        Self {
            display: true,
            color: Some(color),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisConfig {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub begin_at_zero: bool,
    pub step_size: Option<f64>,
    pub tick_format: TickFormat,
    pub tick_font_size: f64,
    /// Font size of radial point labels; only meaningful on radar `r` axes.
    pub point_label_font_size: Option<f64>,
    pub grid: GridStyle,
}

impl AxisConfig {
    #[must_use]
    pub fn new(tick_font_size: f64, grid: GridStyle) -> Self {
        Self {
            min: None,
            max: None,
            begin_at_zero: false,
            step_size: None,
            tick_format: TickFormat::Plain,
            tick_font_size,
            point_label_font_size: None,
            grid,
        }
    }

    #[must_use]
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    #[must_use]
    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    #[must_use]
    pub fn begin_at_zero(mut self) -> Self {
        self.begin_at_zero = true;
        self
    }

    #[must_use]
    pub fn with_step_size(mut self, step: f64) -> Self {
        self.step_size = Some(step);
        self
    }

    #[must_use]
    pub fn with_tick_format(mut self, format: TickFormat) -> Self {
        self.tick_format = format;
        self
    }

    #[must_use]
    pub fn with_point_label_font_size(mut self, size: f64) -> Self {
        self.point_label_font_size = Some(size);
        self
    }

    fn validate(&self, axis_id: &str) -> DeckResult<()> {
        for value in [self.min, self.max, self.step_size, self.point_label_font_size]
            .into_iter()
            .flatten()
            .chain(std::iter::once(self.tick_font_size))
        {
            if !value.is_finite() {
                return Err(DeckError::InvalidData(format!(
                    "axis `{axis_id}` values must be finite"
                )));
            }
        }
        if let (Some(min), Some(max)) = (self.min, self.max) {
            if min >= max {
                return Err(DeckError::InvalidData(format!(
                    "axis `{axis_id}` requires min < max, got {min} >= {max}"
                )));
            }
        }
        if self.step_size.is_some_and(|step| step <= 0.0) || self.tick_font_size <= 0.0 {
            return Err(DeckError::InvalidData(format!(
                "axis `{axis_id}` step and font sizes must be > 0"
            )));
        }
        if let Some(color) = self.grid.color {
            color.validate()?;
        }
        Ok(())
    }
}

/// Axis along which bars extend their categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexAxis {
    X,
    Y,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendPosition {
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointShape {
    Circle,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegendConfig {
    pub display: bool,
    pub position: LegendPosition,
    pub padding: f64,
    pub font_size: f64,
    pub use_point_style: bool,
    pub point_shape: Option<PointShape>,
}

impl LegendConfig {
    #[must_use]
    pub fn hidden() -> Self {
        Self {
            display: false,
            position: LegendPosition::Top,
            padding: 0.0,
            font_size: 12.0,
            use_point_style: false,
            point_shape: None,
        }
    }

    #[must_use]
    pub fn at(position: LegendPosition, padding: f64, font_size: f64) -> Self {
        Self {
            display: true,
            position,
            padding,
            font_size,
            use_point_style: false,
            point_shape: None,
        }
    }

    #[must_use]
    pub fn with_point_style(mut self, shape: Option<PointShape>) -> Self {
        self.use_point_style = true;
        self.point_shape = shape;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    EaseOutQuart,
}

/// Entry animation played by the rendering service on mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationConfig {
    pub duration_ms: u32,
    pub easing: Easing,
}

impl AnimationConfig {
    #[must_use]
    pub fn ease_out_quart(duration_ms: u32) -> Self {
        Self {
            duration_ms,
            easing: Easing::EaseOutQuart,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelPosition {
    Start,
    Center,
    End,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationLabel {
    pub content: String,
    pub position: LabelPosition,
}

/// Overlay drawn on top of the plotted series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Annotation {
    /// Vertical guide at a category offset along the x axis.
    VerticalLine {
        category: f64,
        color: Color,
        width: f64,
        dash: DashPattern,
        label: Option<AnnotationLabel>,
    },
}

impl Annotation {
    fn validate(&self, label_count: usize) -> DeckResult<()> {
        match self {
            Self::VerticalLine {
                category,
                color,
                width,
                ..
            } => {
                let last = label_count.saturating_sub(1) as f64;
                if !category.is_finite() || !(0.0..=last).contains(category) {
                    return Err(DeckError::InvalidData(format!(
                        "annotation category {category} outside 0..={last}"
                    )));
                }
                if !width.is_finite() || *width <= 0.0 {
                    return Err(DeckError::InvalidData(
                        "annotation width must be finite and > 0".to_owned(),
                    ));
                }
                color.validate()
            }
        }
    }
}

/// Declarative chart description handed to the rendering service.
///
/// Configs are pure data: building the same config twice yields equal values,
/// which keeps re-mounts on repeated slide visits deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    /// Axis configs keyed by axis id (`x`, `y`, `r`), in declaration order.
    pub scales: IndexMap<String, AxisConfig>,
    pub index_axis: IndexAxis,
    /// Inner radius of doughnut charts as a percentage of the outer radius.
    pub cutout_percent: Option<f64>,
    pub legend: LegendConfig,
    pub animation: AnimationConfig,
    pub annotations: Vec<Annotation>,
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
}

impl ChartConfig {
    #[must_use]
    pub fn new<I, S>(kind: ChartKind, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind,
            labels: labels.into_iter().map(Into::into).collect(),
            datasets: Vec::new(),
            scales: IndexMap::new(),
            index_axis: IndexAxis::X,
            cutout_percent: None,
            legend: LegendConfig::hidden(),
            animation: AnimationConfig::ease_out_quart(1_000),
            annotations: Vec::new(),
            responsive: true,
            maintain_aspect_ratio: false,
        }
    }

    #[must_use]
    pub fn with_dataset(mut self, dataset: Dataset) -> Self {
        self.datasets.push(dataset);
        self
    }

    #[must_use]
    pub fn with_scale(mut self, axis_id: impl Into<String>, axis: AxisConfig) -> Self {
        self.scales.insert(axis_id.into(), axis);
        self
    }

    #[must_use]
    pub fn with_index_axis(mut self, axis: IndexAxis) -> Self {
        self.index_axis = axis;
        self
    }

    #[must_use]
    pub fn with_cutout_percent(mut self, percent: f64) -> Self {
        self.cutout_percent = Some(percent);
        self
    }

    #[must_use]
    pub fn with_legend(mut self, legend: LegendConfig) -> Self {
        self.legend = legend;
        self
    }

    #[must_use]
    pub fn with_animation(mut self, animation: AnimationConfig) -> Self {
        self.animation = animation;
        self
    }

    #[must_use]
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn validate(&self) -> DeckResult<()> {
        if self.labels.is_empty() {
            return Err(DeckError::InvalidData(
                "chart config requires at least one label".to_owned(),
            ));
        }
        if self.datasets.is_empty() {
            return Err(DeckError::InvalidData(
                "chart config requires at least one dataset".to_owned(),
            ));
        }
        for (position, dataset) in self.datasets.iter().enumerate() {
            dataset.validate(self.labels.len(), position)?;
        }
        for (axis_id, axis) in &self.scales {
            axis.validate(axis_id)?;
        }
        match (self.kind, self.cutout_percent) {
            (ChartKind::Doughnut, Some(percent))
                if !percent.is_finite() || !(0.0..100.0).contains(&percent) =>
            {
                return Err(DeckError::InvalidData(format!(
                    "doughnut cutout must be in [0, 100), got {percent}"
                )));
            }
            (ChartKind::Doughnut, _) | (_, None) => {}
            (kind, Some(_)) => {
                return Err(DeckError::InvalidData(format!(
                    "cutout is only valid for doughnut charts, got {kind:?}"
                )));
            }
        }
        if !self.legend.padding.is_finite()
            || self.legend.padding < 0.0
            || !self.legend.font_size.is_finite()
            || self.legend.font_size <= 0.0
        {
            return Err(DeckError::InvalidData(
                "legend padding must be >= 0 and font size > 0".to_owned(),
            ));
        }
        for annotation in &self.annotations {
            annotation.validate(self.labels.len())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar() -> ChartConfig {
        ChartConfig::new(ChartKind::Bar, ["a", "b"]).with_dataset(Dataset::new(
            vec![1.0, 2.0],
            Fill::Solid(Color::rgb(0.5, 0.5, 0.5)),
        ))
    }

    #[test]
    fn mismatched_dataset_length_is_rejected() {
        let config = ChartConfig::new(ChartKind::Bar, ["a", "b", "c"]).with_dataset(
            Dataset::new(vec![1.0], Fill::Solid(Color::rgb(0.0, 0.0, 0.0))),
        );
        assert!(config.validate().is_err());
    }

    #[test]
    fn cutout_requires_doughnut() {
        assert!(bar().with_cutout_percent(50.0).validate().is_err());
    }

    #[test]
    fn inverted_axis_bounds_are_rejected() {
        let config = bar().with_scale(
            "y",
            AxisConfig::new(10.0, GridStyle::hidden()).with_range(5.0, 1.0),
        );
        assert!(config.validate().is_err());
    }

    #[test]
    fn annotation_must_land_on_a_category() {
        let config = bar().with_annotation(Annotation::VerticalLine {
            category: 4.0,
            color: Color::rgb(0.0, 0.0, 0.0),
            width: 1.0,
            dash: DashPattern::new(),
            label: None,
        });
        assert!(config.validate().is_err());
    }
}
