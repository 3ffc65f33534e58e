use std::time::Duration;

use deck_rs::DeckResult;
use deck_rs::api::{DeckEngine, DeckEngineConfig};
use deck_rs::charts::{ChartBinding, ChartConfig, ChartKind, ChartOrchestrator, Dataset, Fill};
use deck_rs::content::charts::{
    COMPETITOR_SURFACE, CUMULATIVE_ROI_SURFACE, MATURITY_RADAR_SURFACE, POLICY_TIMELINE_SURFACE,
    SUBSIDY_ROI_SURFACE, competitor_chart,
};
use deck_rs::core::DeferredTask;
use deck_rs::render::{ChartCall, ChartHandle, Color, DeckFrame, NullRenderer, Renderer};

fn build_engine_with(renderer: NullRenderer) -> DeckEngine<NullRenderer> {
    DeckEngine::new(renderer, DeckEngineConfig::strategic_planning()).expect("engine init")
}

fn build_engine() -> DeckEngine<NullRenderer> {
    build_engine_with(NullRenderer::default())
}

#[test]
fn charts_render_only_after_the_short_delay() {
    let mut engine = build_engine();
    engine.go_to_slide(4);
    assert_eq!(
        engine.pending_tasks(),
        vec![
            DeferredTask::RenderCharts { slide: 4 },
            DeferredTask::ReleaseLock
        ]
    );
    assert!(engine.renderer().chart_calls.is_empty());

    engine.advance(Duration::from_millis(299));
    assert!(engine.renderer().chart_calls.is_empty());

    engine.advance(Duration::from_millis(1));
    assert_eq!(engine.renderer().mount_count(COMPETITOR_SURFACE), 1);
    assert!(engine.charts().has_instance(COMPETITOR_SURFACE));
    assert_eq!(engine.pending_tasks(), vec![DeferredTask::ReleaseLock]);
}

#[test]
fn slide_two_mounts_both_policy_charts() {
    let mut engine = build_engine();
    engine.next_slide();
    engine.settle();
    assert_eq!(engine.renderer().mount_count(POLICY_TIMELINE_SURFACE), 1);
    assert_eq!(engine.renderer().mount_count(SUBSIDY_ROI_SURFACE), 1);
    assert_eq!(
        engine.charts().mounted_surfaces(),
        vec![
            POLICY_TIMELINE_SURFACE.to_owned(),
            SUBSIDY_ROI_SURFACE.to_owned()
        ]
    );
}

#[test]
fn revisits_destroy_previous_instance_before_mounting() {
    let mut engine = build_engine();
    for _ in 0..3 {
        engine.go_to_slide(3);
        engine.settle();
        engine.go_to_slide(1);
        engine.settle();
    }

    let renderer = engine.renderer();
    assert_eq!(renderer.mount_count(MATURITY_RADAR_SURFACE), 3);
    assert_eq!(renderer.destroy_count(MATURITY_RADAR_SURFACE), 2);
    assert_eq!(renderer.live_on(MATURITY_RADAR_SURFACE), 1);

    let radar_calls: Vec<&ChartCall> = renderer
        .chart_calls
        .iter()
        .filter(|call| match call {
            ChartCall::Mounted { surface, .. } | ChartCall::Destroyed { surface, .. } => {
                surface == MATURITY_RADAR_SURFACE
            }
        })
        .collect();
    assert!(matches!(radar_calls[0], ChartCall::Mounted { id: 1, .. }));
    assert!(matches!(radar_calls[1], ChartCall::Destroyed { id: 1, .. }));
    assert!(matches!(radar_calls[2], ChartCall::Mounted { id: 2, .. }));
}

#[test]
fn policy_charts_are_replaced_not_leaked() {
    let mut engine = build_engine();
    for _ in 0..2 {
        engine.go_to_slide(2);
        engine.settle();
    }
    assert_eq!(engine.renderer().live_on(POLICY_TIMELINE_SURFACE), 1);
    assert_eq!(engine.renderer().live_on(SUBSIDY_ROI_SURFACE), 1);
}

#[test]
fn repeated_visits_mount_identical_configs() {
    let mut engine = build_engine();
    engine.go_to_slide(4);
    engine.settle();
    let first = engine.renderer().mounted_configs[COMPETITOR_SURFACE].clone();

    engine.go_to_slide(8);
    engine.settle();
    engine.go_to_slide(4);
    engine.settle();
    let second = engine.renderer().mounted_configs[COMPETITOR_SURFACE].clone();
    assert_eq!(first, second);
    assert_eq!(first, competitor_chart());
}

#[test]
fn missing_surface_is_skipped_silently() {
    let renderer = NullRenderer::with_missing_surfaces([SUBSIDY_ROI_SURFACE]);
    let mut engine = build_engine_with(renderer);
    engine.go_to_slide(2);
    engine.settle();

    assert_eq!(engine.renderer().mount_count(POLICY_TIMELINE_SURFACE), 1);
    assert_eq!(engine.renderer().mount_count(SUBSIDY_ROI_SURFACE), 0);
    assert!(!engine.charts().has_instance(SUBSIDY_ROI_SURFACE));
}

#[test]
fn mount_failure_leaves_navigation_intact() {
    let mut engine = build_engine_with(NullRenderer::default().with_failing_mounts());
    engine.go_to_slide(8);
    engine.settle();
    assert_eq!(engine.current_slide(), 8);
    assert!(!engine.charts().has_instance(CUMULATIVE_ROI_SURFACE));
    assert!(engine.renderer().chart_calls.is_empty());
    assert!(engine.prev_slide().is_started());
}

#[test]
fn chartless_slides_mount_nothing() {
    let mut engine = build_engine();
    engine.go_to_slide(1);
    engine.settle();
    assert!(engine.renderer().chart_calls.is_empty());
}

#[test]
fn into_renderer_tears_down_live_charts() {
    let mut engine = build_engine();
    for slide in 2..=8 {
        engine.go_to_slide(slide);
        engine.settle();
    }
    assert_eq!(engine.charts().instance_count(), 8);

    let renderer = engine.into_renderer();
    assert!(renderer.live_charts.is_empty());
}

fn tiny_chart() -> ChartConfig {
    ChartConfig::new(ChartKind::Line, ["a"]).with_dataset(Dataset::new(
        vec![1.0],
        Fill::Solid(Color::rgb(0.0, 0.0, 0.0)),
    ))
}

#[test]
fn duplicate_or_zero_bindings_are_rejected() {
    let duplicate = ChartOrchestrator::new([
        ChartBinding::new(1, "surface", tiny_chart),
        ChartBinding::new(2, "surface", tiny_chart),
    ]);
    assert!(duplicate.is_err());
    assert!(ChartOrchestrator::new([ChartBinding::new(0, "zero", tiny_chart)]).is_err());
    assert!(ChartOrchestrator::new([ChartBinding::new(1, "", tiny_chart)]).is_err());
}

#[test]
fn orchestrator_renders_directly_against_a_renderer() {
    let mut orchestrator =
        ChartOrchestrator::new([ChartBinding::new(1, "tiny", tiny_chart)]).expect("bindings");
    let mut renderer = NullRenderer::default();
    assert_eq!(orchestrator.render_slide(1, &mut renderer), 1);
    assert_eq!(orchestrator.render_slide(2, &mut renderer), 0);
    assert_eq!(orchestrator.render_slide(1, &mut renderer), 1);
    assert_eq!(renderer.destroy_count("tiny"), 1);

    orchestrator.teardown(&mut renderer);
    assert_eq!(orchestrator.instance_count(), 0);
    assert!(renderer.live_charts.is_empty());
}

#[derive(Default)]
struct AcceptAllRenderer {
    mounts: Vec<String>,
}

impl Renderer for AcceptAllRenderer {
    fn render(&mut self, _frame: &DeckFrame) -> DeckResult<()> {
        Ok(())
    }

    fn has_surface(&self, _surface: &str) -> bool {
        true
    }

    fn mount_chart(&mut self, surface: &str, _config: &ChartConfig) -> DeckResult<ChartHandle> {
        self.mounts.push(surface.to_owned());
        Ok(ChartHandle::new(self.mounts.len() as u64))
    }

    fn destroy_chart(&mut self, _handle: ChartHandle) {}
}

fn unlabeled_chart() -> ChartConfig {
    ChartConfig::new(ChartKind::Bar, Vec::<String>::new())
}

#[test]
fn invalid_config_never_reaches_the_renderer() {
    let mut orchestrator = ChartOrchestrator::new([
        ChartBinding::new(1, "broken", unlabeled_chart),
        ChartBinding::new(1, "tiny", tiny_chart),
    ])
    .expect("bindings");
    let mut renderer = AcceptAllRenderer::default();

    assert_eq!(orchestrator.render_slide(1, &mut renderer), 1);
    assert_eq!(renderer.mounts, vec!["tiny".to_owned()]);
    assert!(!orchestrator.has_instance("broken"));
    assert!(orchestrator.has_instance("tiny"));
}
