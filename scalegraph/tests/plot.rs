// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use scalegraph::{PlotConfig, Scale, Trace};

fn non_empty(path: &std::path::Path) -> bool {
    std::fs::metadata(path).map(|m| m.len() > 0).unwrap_or(false)
}

#[test]
fn plot_single_trace() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("single.png");

    let trace = Trace::new("collisions", vec![(100.0, 4.0), (200.0, 9.0)]);
    PlotConfig::new()
        .caption("single")
        .x_desc("size")
        .y_desc("count")
        .size((400, 300))
        .plot(&path, &[trace], Scale::Linear)
        .unwrap();

    assert!(non_empty(&path));
}

#[test]
fn plot_log_with_zeroes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("log.png");

    let traces = vec![
        Trace::new("linear", vec![(100.0, 50.0), (200.0, 120.0)]),
        Trace::new("hash", vec![(100.0, 0.0), (200.0, 0.0)]),
    ];
    PlotConfig::new()
        .caption("log")
        .legend(true)
        .size((400, 300))
        .plot(&path, &traces, Scale::Log)
        .unwrap();

    assert!(non_empty(&path));
}

#[test]
fn plot_without_points() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.png");

    PlotConfig::new()
        .legend(true)
        .size((400, 300))
        .plot(&path, &[], Scale::Log)
        .unwrap();

    assert!(non_empty(&path));
}

#[test]
fn plot_into_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("chart.png");

    let trace = Trace::new("a", vec![(1.0, 1.0)]);
    let result = PlotConfig::new().plot(&path, &[trace], Scale::Linear);

    assert!(result.is_err());
}
