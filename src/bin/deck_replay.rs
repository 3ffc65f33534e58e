use deck_rs::api::{CommandOutcome, DeckEngine, DeckEngineConfig, DeckSnapshot};
use deck_rs::core::NavigationOutcome;
use deck_rs::interaction::{Key, NavigationCommand};
use deck_rs::render::NullRenderer;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

const USAGE: &str = "usage: deck_replay --input <script.json> [--output <path>]";

#[derive(Debug)]
struct CliArgs {
    input: PathBuf,
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ReplayScript {
    #[serde(default)]
    config: Option<DeckEngineConfig>,
    #[serde(default)]
    missing_surfaces: Vec<String>,
    steps: Vec<ReplayAction>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ReplayAction {
    Key { key: String },
    GoTo { slide: usize },
    ClickPrev,
    ClickNext,
    ToggleOverview,
    SelectOverviewItem { slide: usize },
    ClickOverviewBackdrop,
    Swipe { start_x: f64, end_x: f64 },
    Fragment { fragment: String },
    Advance { ms: u64 },
    Settle,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum StepEffect {
    Navigation { outcome: NavigationOutcome },
    Command { outcome: CommandOutcome },
    KeyConsumed { consumed: bool },
    Overview { open: bool },
    NoSwipe,
    TasksRun { count: usize },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ReplayStep {
    action: ReplayAction,
    effect: StepEffect,
    snapshot: DeckSnapshot,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ReplayReport {
    steps: Vec<ReplayStep>,
    chart_lifecycle_calls: usize,
}

fn main() {
    let _ = deck_rs::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let raw = fs::read_to_string(&args.input)
        .map_err(|err| format!("failed to read `{}`: {err}", args.input.display()))?;
    let report = replay(parse_script(&raw)?)?;
    let json = serde_json::to_string_pretty(&report)
        .map_err(|err| format!("failed to serialize report: {err}"))?;

    match args.output {
        Some(path) => fs::write(&path, json)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => {
            println!("{json}");
            Ok(())
        }
    }
}

fn parse_script(raw: &str) -> Result<ReplayScript, String> {
    serde_json::from_str(raw).map_err(|err| format!("invalid json: {err}"))
}

fn replay(script: ReplayScript) -> Result<ReplayReport, String> {
    let config = script
        .config
        .unwrap_or_else(DeckEngineConfig::strategic_planning);
    let renderer = NullRenderer::with_missing_surfaces(script.missing_surfaces);
    let mut engine = DeckEngine::new(renderer, config).map_err(|err| err.to_string())?;

    let mut steps = Vec::with_capacity(script.steps.len());
    for action in script.steps {
        let effect = apply(&mut engine, &action);
        steps.push(ReplayStep {
            action,
            effect,
            snapshot: engine.snapshot(),
        });
    }

    let chart_lifecycle_calls = engine.renderer().chart_calls.len();
    Ok(ReplayReport {
        steps,
        chart_lifecycle_calls,
    })
}

fn apply(engine: &mut DeckEngine<NullRenderer>, action: &ReplayAction) -> StepEffect {
    match action {
        ReplayAction::Key { key } => StepEffect::KeyConsumed {
            consumed: engine.key_down(Key::from_dom_key(key)),
        },
        ReplayAction::GoTo { slide } => StepEffect::Command {
            outcome: engine.execute(NavigationCommand::GoTo(*slide)),
        },
        ReplayAction::ClickPrev => StepEffect::Navigation {
            outcome: engine.click_prev(),
        },
        ReplayAction::ClickNext => StepEffect::Navigation {
            outcome: engine.click_next(),
        },
        ReplayAction::ToggleOverview => StepEffect::Overview {
            open: engine.toggle_overview(),
        },
        ReplayAction::SelectOverviewItem { slide } => StepEffect::Navigation {
            outcome: engine.select_overview_item(*slide),
        },
        ReplayAction::ClickOverviewBackdrop => {
            engine.click_overview_backdrop();
            StepEffect::Overview {
                open: engine.overview_active(),
            }
        }
        ReplayAction::Swipe { start_x, end_x } => {
            engine.touch_start(*start_x);
            match engine.touch_end(*end_x) {
                Some(outcome) => StepEffect::Navigation { outcome },
                None => StepEffect::NoSwipe,
            }
        }
        ReplayAction::Fragment { fragment } => StepEffect::Navigation {
            outcome: engine.handle_fragment(fragment),
        },
        ReplayAction::Advance { ms } => StepEffect::TasksRun {
            count: engine.advance(Duration::from_millis(*ms)),
        },
        ReplayAction::Settle => StepEffect::TasksRun {
            count: engine.settle(),
        },
    }
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut input = None::<PathBuf>;
    let mut output = None::<PathBuf>;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            other => return Err(format!("unknown argument `{other}`\n{USAGE}")),
        }
    }

    Ok(CliArgs {
        input: input.ok_or_else(|| USAGE.to_owned())?,
        output,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_rs::core::{NavigationMode, RejectReason};

    #[test]
    fn replays_a_short_script_into_per_step_snapshots() {
        let script = parse_script(
            r#"{
                "steps": [
                    { "type": "key", "key": "ArrowRight" },
                    { "type": "go_to", "slide": 5 },
                    { "type": "settle" }
                ]
            }"#,
        )
        .expect("script");
        let report = replay(script).expect("replay");

        assert_eq!(report.steps.len(), 3);
        assert!(matches!(
            report.steps[0].effect,
            StepEffect::KeyConsumed { consumed: true }
        ));
        assert!(matches!(
            report.steps[1].effect,
            StepEffect::Command {
                outcome: CommandOutcome::Navigation(NavigationOutcome::Rejected(
                    RejectReason::Transitioning
                ))
            }
        ));
        assert!(matches!(
            report.steps[2].effect,
            StepEffect::TasksRun { count: 2 }
        ));

        let last = &report.steps[2].snapshot;
        assert_eq!(last.current_slide, 2);
        assert_eq!(last.mode, NavigationMode::Idle);
        assert_eq!(last.clock_ms, 600);
        assert_eq!(report.chart_lifecycle_calls, 2);
    }

    #[test]
    fn missing_surfaces_and_custom_config_are_honored() {
        let script = parse_script(
            r##"{
                "config": { "slide_titles": ["A", "B"] },
                "missing_surfaces": ["unused"],
                "steps": [{ "type": "fragment", "fragment": "#slide-2" }]
            }"##,
        )
        .expect("script");
        let report = replay(script).expect("replay");
        assert_eq!(report.steps[0].snapshot.total_slides, 2);
        assert_eq!(report.steps[0].snapshot.current_slide, 2);
        assert_eq!(report.chart_lifecycle_calls, 0);
    }

    #[test]
    fn malformed_script_is_reported() {
        assert!(parse_script(r#"{ "steps": [{ "type": "jump" }] }"#).is_err());
    }
}
