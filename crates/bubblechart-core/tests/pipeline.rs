#![cfg(feature = "json")]

use bubblechart_core::loader::{load_from_path, load_from_str};
use bubblechart_core::prelude::*;
use bubblechart_core::{CountryMetric, LayoutConfig, RadiusScale, RegionMetric, SizedItem};
use std::path::PathBuf;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/countries.json")
}

fn fixture() -> Vec<RawCountry> {
    load_from_path(fixture_path()).expect("fixture loads")
}

fn assert_no_overlap(items: &[PositionedItem]) {
    for (i, a) in items.iter().enumerate() {
        for b in &items[i + 1..] {
            assert!(
                a.distance_to(b) >= a.radius + b.radius - 0.01,
                "{} overlaps {} by {}",
                a.name,
                b.name,
                a.overlap_with(b)
            );
        }
    }
}

#[test]
fn every_country_mode_keeps_one_item_per_record() {
    let countries = fixture();
    for token in ["population", "borders", "timezones", "languages"] {
        let items = aggregate(&countries, AggregationMode::from_token(token)).unwrap();
        assert_eq!(items.len(), countries.len(), "{token}");
        for (item, country) in items.iter().zip(&countries) {
            assert_eq!(item.name, country.alpha3_code);
            assert_eq!(item.full_name.as_deref(), Some(country.name.as_str()));
        }
    }
}

#[test]
fn country_values_match_fields() {
    let countries = fixture();
    let by = |token: &str| -> Vec<u64> {
        aggregate(&countries, AggregationMode::from_token(token))
            .unwrap()
            .into_iter()
            .map(|i| i.value)
            .collect()
    };
    assert_eq!(by("population")[4], 206_135_893);
    assert_eq!(by("borders")[4], 10);
    assert_eq!(by("timezones")[6], 8);
    // languages are objects in this dataset; only the count matters
    assert_eq!(by("languages")[7], 4);
}

#[test]
fn region_modes_follow_first_appearance() {
    let countries = fixture();
    let names_and_values = |mode| -> Vec<(String, u64)> {
        aggregate(&countries, mode)
            .unwrap()
            .into_iter()
            .map(|i| (i.name, i.value))
            .collect()
    };

    let by_countries = names_and_values(AggregationMode::Region(RegionMetric::Countries));
    let expected: Vec<(String, u64)> = [
        ("Asia", 2),
        ("Europe", 2),
        ("Africa", 2),
        ("Americas", 2),
        ("Oceania", 2),
        ("Polar", 1),
    ]
    .iter()
    .map(|(n, v)| (n.to_string(), *v))
    .collect();
    assert_eq!(by_countries, expected);

    let by_timezones = names_and_values(AggregationMode::Region(RegionMetric::Timezones));
    let values: Vec<u64> = by_timezones.iter().map(|(_, v)| *v).collect();
    // Americas: Brazil's UTC-05/-04/-03 are shared with Canada
    assert_eq!(values, [2, 2, 2, 7, 9, 8]);
}

#[test]
fn full_cycle_on_fixture_is_overlap_free() {
    let countries = fixture();
    let config = ChartConfig::default();
    for token in AggregationMode::TOKENS {
        let chart = run_cycle(&countries, token, &config).unwrap();
        assert!(chart.report.max_overlap <= config.layout.overlap_tolerance);
        assert_no_overlap(&chart.items);
        for item in &chart.items {
            assert!(item.radius >= 10.0 && item.radius <= 100.0);
            assert!(item.x > 0.0 && item.x < config.canvas.width, "{token}: x={}", item.x);
            assert!(item.y > 0.0 && item.y < config.canvas.height, "{token}: y={}", item.y);
        }
    }
}

#[test]
fn aland_albania_population_example() {
    let json = r#"[
        {"name":"Aland","alpha3Code":"ALA","population":5,"borders":[],"timezones":["UTC+2"],"languages":["sv"]},
        {"name":"Albania","alpha3Code":"ALB","population":100,"borders":["MNE"],"timezones":["UTC+1"],"languages":["sq"]}
    ]"#;
    let countries = load_from_str(json).unwrap();
    let items = aggregate(&countries, AggregationMode::from_token("population")).unwrap();
    assert_eq!(
        items,
        [
            Item::new("ALA", 5).with_full_name("Aland"),
            Item::new("ALB", 100).with_full_name("Albania"),
        ]
    );

    let scale = derive_scale(&items);
    assert!((scale.radius(5.0) - 30.12).abs() < 0.01);
    assert_eq!(scale.radius(100.0), 100.0);

    let chart = run_cycle(&countries, "population", &ChartConfig::default()).unwrap();
    assert_no_overlap(&chart.items);
    let (cx, cy) = chart.items.iter().fold((0.0, 0.0), |(x, y), p| (x + p.x, y + p.y));
    assert!((cx / 2.0 - 960.0).abs() < 1e-6);
    assert!((cy / 2.0 - 1000.0).abs() < 1e-6);
}

#[test]
fn europe_region_example() {
    let json = r#"[
        {"name":"A","alpha3Code":"AAA","region":"Europe","timezones":["UTC+1"]},
        {"name":"B","alpha3Code":"BBB","region":"Europe","timezones":["UTC+1","UTC+2"]}
    ]"#;
    let countries = load_from_str(json).unwrap();
    for token in ["regionCountries", "regionTimezones"] {
        let items = aggregate(&countries, AggregationMode::from_token(token)).unwrap();
        assert_eq!(items, [Item::new("Europe", 2)], "{token}");
    }
}

#[test]
fn missing_borders_fail_only_in_borders_mode() {
    let json = r#"[
        {"name":"Island","alpha3Code":"ISL","population":1,"timezones":["UTC"],"languages":["is"],"region":"Europe"}
    ]"#;
    let countries = load_from_str(json).unwrap();
    assert!(run_cycle(&countries, "population", &ChartConfig::default()).is_ok());
    assert!(run_cycle(&countries, "regionTimezones", &ChartConfig::default()).is_ok());
    let err = run_cycle(&countries, "borders", &ChartConfig::default()).unwrap_err();
    assert_eq!(err.to_string(), "country 'Island' is missing field 'borders'");
}

#[test]
fn unrecognized_selection_degrades_to_zeroes() {
    let chart = run_cycle(&fixture(), "gdp", &ChartConfig::default()).unwrap();
    assert_eq!(chart.mode, AggregationMode::Country(CountryMetric::Unrecognized));
    assert!(chart.items.iter().all(|p| p.value == 0 && p.radius == 10.0));
    assert_no_overlap(&chart.items);
}

#[test]
fn five_hundred_items_settle_without_overlap() {
    let items: Vec<Item> = (0..500u64)
        .map(|i| Item::new(format!("I{i}"), (i * 7919) % 1_000))
        .collect();
    let sized: Vec<SizedItem> = RadiusScale::new(1_000.0, 10.0, 100.0).size(items);
    let config = LayoutConfig::default();
    let (out, report) = bubblechart_core::layout_with(sized, Canvas::default(), config.clone());
    assert_eq!(out.len(), 500);
    assert!(report.steps <= config.max_steps);
    assert!(report.relax_passes < config.max_relax_passes);
    assert!(report.max_overlap <= config.overlap_tolerance);
    assert!(out.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    assert_no_overlap(&out);
}

#[test]
fn successive_cycles_do_not_share_state() {
    let countries = fixture();
    let config = ChartConfig::default();
    let first = run_cycle(&countries, "population", &config).unwrap();
    let _other = run_cycle(&countries, "regionCountries", &config).unwrap();
    let again = run_cycle(&countries, "population", &config).unwrap();
    assert_eq!(first.items, again.items);
}

#[cfg(feature = "compact")]
#[test]
fn gzipped_dataset_loads() {
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("countries.json.gz");
    let raw = std::fs::read(fixture_path()).unwrap();
    let mut enc = GzEncoder::new(std::fs::File::create(&path).unwrap(), Compression::default());
    enc.write_all(&raw).unwrap();
    enc.finish().unwrap();

    let countries = load_from_path(&path).unwrap();
    assert_eq!(countries.len(), fixture().len());
}
