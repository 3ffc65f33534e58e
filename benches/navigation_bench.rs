use std::hint::black_box;
use std::time::Duration;

use criterion::{Criterion, criterion_group, criterion_main};
use deck_rs::api::{DeckEngine, DeckEngineConfig};
use deck_rs::content::strategic_planning_bindings;
use deck_rs::interaction::{Key, parse_slide_fragment};
use deck_rs::render::NullRenderer;

fn bench_full_deck_walk(c: &mut Criterion) {
    let mut engine = DeckEngine::new(NullRenderer::default(), DeckEngineConfig::strategic_planning())
        .expect("engine init");

    c.bench_function("full_deck_walk_with_charts", |b| {
        b.iter(|| {
            engine.first_slide();
            engine.settle();
            for _ in 0..7 {
                engine.key_down(black_box(Key::ArrowRight));
                engine.advance(Duration::from_millis(600));
            }
        })
    });
}

fn bench_rejected_input_burst(c: &mut Criterion) {
    let mut engine = DeckEngine::new(NullRenderer::default(), DeckEngineConfig::strategic_planning())
        .expect("engine init");
    engine.go_to_slide(4);

    c.bench_function("rejected_input_burst_1k", |b| {
        b.iter(|| {
            for _ in 0..1_000 {
                let _ = engine.next_slide();
            }
        })
    });
}

fn bench_chart_config_build(c: &mut Criterion) {
    let bindings = strategic_planning_bindings();

    c.bench_function("build_all_chart_configs", |b| {
        b.iter(|| {
            for binding in &bindings {
                let _ = black_box((binding.build)());
            }
        })
    });
}

fn bench_snapshot_json(c: &mut Criterion) {
    let mut engine = DeckEngine::new(NullRenderer::default(), DeckEngineConfig::strategic_planning())
        .expect("engine init");
    engine.go_to_slide(2);
    engine.settle();

    c.bench_function("snapshot_json_contract_v1", |b| {
        b.iter(|| {
            let _ = engine
                .snapshot()
                .to_json_contract_v1_pretty()
                .expect("snapshot json");
        })
    });
}

fn bench_fragment_parse(c: &mut Criterion) {
    c.bench_function("parse_slide_fragment", |b| {
        b.iter(|| parse_slide_fragment(black_box("#slide-7")))
    });
}

criterion_group!(
    benches,
    bench_full_deck_walk,
    bench_rejected_input_burst,
    bench_chart_config_build,
    bench_snapshot_json,
    bench_fragment_parse
);
criterion_main!(benches);
