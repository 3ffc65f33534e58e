//! Declarative chart configs and their slide-driven lifecycle.

mod config;
mod orchestrator;

pub use config::{
    AnimationConfig, Annotation, AnnotationLabel, AxisConfig, ChartConfig, ChartKind,
    DashPattern, Dataset, Easing, Fill, GridStyle, IndexAxis, LabelPosition, LegendConfig,
    LegendPosition, PointShape, PointStyle, TickFormat,
};
pub use orchestrator::{ChartBinding, ChartOrchestrator};
