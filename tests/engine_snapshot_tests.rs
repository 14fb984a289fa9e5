use radar_rs::api::{EngineSnapshot, RadarEngine, RadarEngineConfig};
use radar_rs::core::{ChartMargins, ChartSize, Color, LinearRadialScale, Row};
use radar_rs::render::NullSurface;

fn engine() -> RadarEngine<NullSurface> {
    let size = ChartSize::new(600.0, 400.0, ChartMargins::new(10.0, 20.0, 30.0, 40.0));
    let config = RadarEngineConfig::new(size, "ax", "value", "cat")
        .with_palette(vec![Color::rgb(1.0, 0.0, 0.0), Color::rgb(0.0, 0.0, 1.0)]);
    RadarEngine::new(
        NullSurface::default(),
        config,
        Box::new(LinearRadialScale::new()),
    )
    .expect("engine init")
}

fn dataset() -> Vec<Row> {
    vec![
        Row::new()
            .with_cell("ax", "speed")
            .with_cell("value", 100)
            .with_cell("cat", "one"),
        Row::new()
            .with_cell("ax", "range")
            .with_cell("value", 200)
            .with_cell("cat", "two"),
    ]
}

#[test]
fn snapshot_reflects_the_latest_render() {
    let mut engine = engine();
    engine.bind_data(dataset());
    engine.render().expect("render");

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.row_count, 2);
    assert_eq!(snapshot.domain.min, 100.0);
    assert_eq!(snapshot.domain.max, 200.0);
    assert_eq!(snapshot.axes.len(), 2);
    assert_eq!(snapshot.legend.len(), 2);
    assert_eq!(snapshot.polygon_categories, ["one", "two"]);
    assert_eq!(snapshot.vertex_count, 2);
    assert!(snapshot.excluded.is_empty());
}

#[test]
fn snapshot_json_round_trips() {
    let mut engine = engine();
    engine.bind_data(dataset());
    engine.render().expect("render");

    let json = engine.snapshot_json_pretty().expect("snapshot json");
    let parsed: EngineSnapshot = serde_json::from_str(&json).expect("parse snapshot");
    assert_eq!(parsed, engine.snapshot());
}

#[test]
fn snapshot_before_any_render_is_empty() {
    let engine = engine();
    let snapshot = engine.snapshot();
    assert_eq!(snapshot.row_count, 0);
    assert!(snapshot.axes.is_empty());
    assert!(snapshot.polygon_categories.is_empty());
}
