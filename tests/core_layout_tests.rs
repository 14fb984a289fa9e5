use std::f64::consts::PI;

use approx::assert_relative_eq;
use radar_rs::core::{
    Color, LinearRadialScale, Row, build_color_map, compute_domain_ticks, extract_axes, min_max,
};

fn axis_rows(keys: &[&str]) -> Vec<Row> {
    keys.iter()
        .map(|key| Row::new().with_cell("ax", *key))
        .collect()
}

#[test]
fn min_max_over_mixed_magnitudes() {
    let rows: Vec<Row> = [100, 200, 300, 400, 500, 600, 10, 12, 3]
        .iter()
        .map(|value| Row::new().with_cell("value", *value))
        .collect();
    assert_eq!(min_max(&rows, "value").expect("min max"), (3.0, 600.0));
}

#[test]
fn axes_dedup_in_first_seen_order() {
    let rows = axis_rows(&["a", "zz", "1", "a", "001", "zz"]);
    let axes = extract_axes(&rows, "ax").expect("axes");
    let keys: Vec<&str> = axes.iter().map(|axis| axis.key.as_str()).collect();
    assert_eq!(keys, ["a", "zz", "1", "001"]);
}

#[test]
fn four_axes_quarter_the_circle_from_the_top() {
    let rows = axis_rows(&["1", "2", "3", "4"]);
    let axes = extract_axes(&rows, "ax").expect("axes");
    let expected = [-PI / 2.0, 0.0, PI / 2.0, PI];
    for (axis, want) in axes.iter().zip(expected.iter()) {
        assert_relative_eq!(axis.angle_radians, *want, epsilon = 1e-12);
    }
}

#[test]
fn color_map_assigns_palette_positionally() {
    let rows: Vec<Row> = ["one", "two", "one", "three", "two"]
        .iter()
        .map(|category| Row::new().with_cell("cat", *category))
        .collect();
    let palette = [
        Color::rgb(1.0, 0.0, 0.0),
        Color::rgb(0.0, 0.0, 1.0),
        Color::rgb(0.0, 1.0, 0.0),
    ];
    let map = build_color_map(&rows, "cat", &palette).expect("colors");

    assert_eq!(map.len(), 3);
    assert_eq!(map.color_of("one").expect("one"), palette[0]);
    assert_eq!(map.color_of("two").expect("two"), palette[1]);
    assert_eq!(map.color_of("three").expect("three"), palette[2]);
}

#[test]
fn leading_zero_tick_is_dropped_from_the_ring_set() {
    let rows: Vec<Row> = [0, 50, 100]
        .iter()
        .map(|value| Row::new().with_cell("value", *value))
        .collect();
    let mut scale = LinearRadialScale::new();
    let domain = compute_domain_ticks(&rows, "value", &mut scale, 10).expect("domain");
    assert!(!domain.ticks.contains(&0.0));
    assert_eq!(domain.ticks.first().copied(), Some(10.0));
}

#[test]
fn tick_set_without_leading_zero_is_unchanged() {
    let rows: Vec<Row> = [40, 100]
        .iter()
        .map(|value| Row::new().with_cell("value", *value))
        .collect();
    let mut scale = LinearRadialScale::new();
    let domain = compute_domain_ticks(&rows, "value", &mut scale, 10).expect("domain");
    assert_eq!(domain.ticks.first().copied(), Some(40.0));
    assert_eq!(domain.ticks.last().copied(), Some(100.0));
}
