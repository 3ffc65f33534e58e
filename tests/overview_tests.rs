use deck_rs::api::{DeckEngine, DeckEngineConfig};
use deck_rs::content::STRATEGIC_PLANNING_TITLES;
use deck_rs::core::{NavigationMode, NavigationOutcome};
use deck_rs::render::NullRenderer;

fn build_engine() -> DeckEngine<NullRenderer> {
    DeckEngine::new(NullRenderer::default(), DeckEngineConfig::strategic_planning())
        .expect("engine init")
}

#[test]
fn double_toggle_restores_overview_and_slide() {
    let mut engine = build_engine();
    engine.go_to_slide(5);
    engine.settle();

    let before = engine.overview_active();
    engine.toggle_overview();
    engine.toggle_overview();
    assert_eq!(engine.overview_active(), before);
    assert_eq!(engine.current_slide(), 5);
}

#[test]
fn overview_frame_lists_titles_and_highlights_current() {
    let mut engine = build_engine();
    engine.go_to_slide(3);
    assert!(engine.toggle_overview());

    let frame = engine.renderer().last_frame.clone().expect("frame");
    assert!(frame.overview.visible);
    assert_eq!(frame.overview.items.len(), 8);
    for (item, title) in frame.overview.items.iter().zip(STRATEGIC_PLANNING_TITLES) {
        assert_eq!(item.title, title);
        assert_eq!(item.active, item.index == 3);
        assert_eq!(item.fragment, format!("#slide-{}", item.index));
    }
}

#[test]
fn toggle_is_allowed_during_transition() {
    let mut engine = build_engine();
    engine.go_to_slide(2);
    assert_eq!(engine.mode(), NavigationMode::Transitioning);
    assert!(engine.toggle_overview());
    assert_eq!(engine.mode(), NavigationMode::Transitioning);
    assert_eq!(engine.current_slide(), 2);
}

#[test]
fn selecting_a_grid_item_closes_overview_and_navigates() {
    let mut engine = build_engine();
    engine.toggle_overview();
    assert_eq!(
        engine.select_overview_item(6),
        NavigationOutcome::Started { from: 1, to: 6 }
    );
    assert!(!engine.overview_active());
    assert_eq!(engine.current_slide(), 6);

    let frame = engine.renderer().last_frame.clone().expect("frame");
    assert!(!frame.overview.visible);
    assert_eq!(frame.active_slide(), Some(6));
}

#[test]
fn grid_selection_during_transition_still_closes_overview() {
    let mut engine = build_engine();
    engine.go_to_slide(2);
    engine.toggle_overview();
    assert!(!engine.select_overview_item(7).is_started());
    assert!(!engine.overview_active());
    assert_eq!(engine.current_slide(), 2);
}

#[test]
fn selecting_with_closed_overview_does_not_open_it() {
    let mut engine = build_engine();
    assert!(engine.select_overview_item(4).is_started());
    assert!(!engine.overview_active());
}

#[test]
fn backdrop_click_only_closes() {
    let mut engine = build_engine();
    assert!(!engine.click_overview_backdrop());
    assert!(!engine.overview_active());

    engine.toggle_overview();
    assert!(engine.click_overview_backdrop());
    assert!(!engine.overview_active());
}
