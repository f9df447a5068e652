//! Resolver throughput benchmarks.
//!
//! A scroll handler runs on every frame, so resolving and applying one
//! offset must stay far below a frame budget.
//!
//! Run with: cargo bench --bench resolve_benchmark

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use logoscroll::config::{ResolvedConfig, ResolverConfig};
use logoscroll::host::{PageEvent, PageLayout, ScrollEffects, SimulatedPage};
use logoscroll::integration::{timeline, TimelineRange};
use logoscroll::model::{AnchorSnapshot, ElementBox, Viewport};
use logoscroll::resolver::resolve;

/// Scroll position on the landing page fixture.
#[derive(Debug, Clone, Copy)]
enum ScrollPosition {
    Top,
    MidZoom,
    Locked,
    LightMode,
}

impl ScrollPosition {
    fn name(&self) -> &'static str {
        match self {
            ScrollPosition::Top => "top",
            ScrollPosition::MidZoom => "mid_zoom",
            ScrollPosition::Locked => "locked",
            ScrollPosition::LightMode => "light_mode",
        }
    }

    fn offset(&self) -> f64 {
        match self {
            ScrollPosition::Top => 0.0,
            ScrollPosition::MidZoom => 1300.0,
            ScrollPosition::Locked => 3000.0,
            ScrollPosition::LightMode => 4500.0,
        }
    }
}

const POSITIONS: [ScrollPosition; 4] = [
    ScrollPosition::Top,
    ScrollPosition::MidZoom,
    ScrollPosition::Locked,
    ScrollPosition::LightMode,
];

fn anchors(scroll_y: f64) -> AnchorSnapshot {
    AnchorSnapshot {
        static_logo: Some(ElementBox::in_flow(3000.0, 100.0, scroll_y)),
        mindset: Some(ElementBox::in_flow(1800.0, 900.0, scroll_y)),
        strength: Some(ElementBox::in_flow(2700.0, 600.0, scroll_y)),
        contact: Some(ElementBox::in_flow(5000.0, 1000.0, scroll_y)),
        supporters: Some(ElementBox::in_flow(4200.0, 600.0, scroll_y)),
    }
}

/// Benchmark the pure resolver alone.
fn benchmark_resolve(c: &mut Criterion) {
    let viewport = Viewport::new(1280.0, 900.0).expect("valid viewport");
    let config = ResolverConfig::default();
    let mut group = c.benchmark_group("resolve");

    for position in POSITIONS {
        let snapshot = anchors(position.offset());
        group.bench_with_input(
            BenchmarkId::from_parameter(position.name()),
            &position.offset(),
            |b, &scroll_y| {
                b.iter(|| resolve(black_box(scroll_y), viewport, black_box(&snapshot), &config))
            },
        );
    }

    group.finish();
}

/// Benchmark a full scroll event: geometry reads, resolve, diffed writes.
fn benchmark_scroll_event(c: &mut Criterion) {
    let layout = PageLayout::load("tests/fixtures/landing_page.toml").expect("fixture loads");
    let mut group = c.benchmark_group("scroll_event");

    for position in POSITIONS {
        let mut page = SimulatedPage::new(&layout).expect("valid layout");
        let mut effects = ScrollEffects::attach(&mut page, ResolverConfig::default(), 0.1)
            .expect("logo layers present");
        page.scroll_to(position.offset());

        group.bench_function(BenchmarkId::from_parameter(position.name()), |b| {
            b.iter(|| effects.handle(black_box(&mut page), PageEvent::Scroll))
        });
    }

    group.finish();
}

/// Benchmark a 101-frame timeline over the whole document.
fn benchmark_timeline(c: &mut Criterion) {
    let layout = PageLayout::load("tests/fixtures/landing_page.toml").expect("fixture loads");
    let config = ResolvedConfig::default();
    let range = TimelineRange::new(0.0, 6100.0, 61.0).expect("valid range");

    c.bench_function("timeline_101_frames", |b| {
        b.iter(|| timeline(black_box(&layout), &config, range))
    });
}

criterion_group!(
    benches,
    benchmark_resolve,
    benchmark_scroll_event,
    benchmark_timeline
);
criterion_main!(benches);
