use bubblechart_core::{
    aggregate, layout_with, AggregationMode, Canvas, LayoutConfig, RadiusScale, RawCountry,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

fn synthetic_countries(n: usize) -> Vec<RawCountry> {
    const REGIONS: [&str; 5] = ["Africa", "Americas", "Asia", "Europe", "Oceania"];
    (0..n)
        .map(|i| {
            RawCountry::new(format!("Country {i}"), format!("C{i:02}"))
                .with_population((i as u64 * 104_729) % 50_000_000)
                .with_region(REGIONS[i % REGIONS.len()])
                .with_timezones((0..(i % 4 + 1)).map(|k| format!("UTC+{:02}:00", (i + k) % 12)))
                .with_borders((0..(i % 6)).map(|k| format!("B{k}")))
        })
        .collect()
}

fn bench_aggregate(c: &mut Criterion) {
    let countries = synthetic_countries(250);
    let mut group = c.benchmark_group("aggregate");
    for token in ["population", "borders", "regionTimezones"] {
        let mode = AggregationMode::from_token(token);
        group.bench_with_input(BenchmarkId::from_parameter(token), &mode, |b, mode| {
            b.iter(|| aggregate(black_box(&countries), *mode).unwrap())
        });
    }
    group.finish();
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    group.sample_size(10);
    for n in [25usize, 100, 250] {
        let items = aggregate(
            &synthetic_countries(n),
            AggregationMode::from_token("population"),
        )
        .unwrap();
        let max = items.iter().map(|i| i.value).max().unwrap_or(0) as f64;
        let sized = RadiusScale::new(max, 10.0, 100.0).size(items);
        group.bench_with_input(BenchmarkId::from_parameter(n), &sized, |b, sized| {
            b.iter(|| layout_with(sized.clone(), Canvas::default(), LayoutConfig::default()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_aggregate, bench_layout);
criterion_main!(benches);
