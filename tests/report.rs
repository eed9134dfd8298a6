// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use perfplot::{Config, Error};

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

fn write(dir: &Path, name: &str, content: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join(name), content).unwrap();
}

fn config(root: &Path) -> Config {
    let mut config = Config::default();
    config.set_collisions(root.join("collision"));
    config.set_timings(root.join("times"));
    config.set_output(root.join("plots"));
    config
}

fn listing(dir: &Path) -> BTreeSet<String> {
    fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect()
}

#[test]
fn end_to_end() {
    let root = tempfile::tempdir().unwrap();
    write(&root.path().join("collision"), "children_100.csv", "4\n");
    write(&root.path().join("collision"), "children_200.csv", "9\n");
    write(&root.path().join("times"), "children_100.csv", "linear,50\nbinary,5\n");

    let config = config(root.path());
    let written = perfplot::run(&config).unwrap();

    let expected: BTreeSet<String> = vec![
        "plot-hash-collisions.png",
        "plot-all.png",
        "plot-all-log.png",
        "plot-linear.png",
        "plot-linear-log.png",
        "plot-binary.png",
        "plot-binary-log.png",
    ]
    .into_iter()
    .map(String::from)
    .collect();

    assert_eq!(written.len(), 7);
    assert_eq!(listing(config.output()), expected);
    for path in &written {
        assert!(fs::metadata(path).unwrap().len() > 0, "{} is empty", path.display());
    }

    // collision chart first, then the combined charts
    assert!(written[0].ends_with("plot-hash-collisions.png"));
    assert!(written[1].ends_with("plot-all.png"));
    assert!(written[2].ends_with("plot-all-log.png"));
}

#[test]
fn output_directory_created() {
    let root = tempfile::tempdir().unwrap();
    write(&root.path().join("collision"), "children_10.csv", "0");
    write(&root.path().join("times"), "children_10.csv", "hash,0\n");

    let mut config = config(root.path());
    config.set_output(root.path().join("nested").join("plots"));

    let written = perfplot::run(&config).unwrap();
    assert_eq!(written.len(), 5);
    assert!(config.output().join("plot-hash-log.png").exists());
}

#[test]
fn empty_inputs_still_charted() {
    let root = tempfile::tempdir().unwrap();
    fs::create_dir_all(root.path().join("collision")).unwrap();
    fs::create_dir_all(root.path().join("times")).unwrap();

    let config = config(root.path());
    let written = perfplot::run(&config).unwrap();

    let expected: BTreeSet<String> = vec!["plot-hash-collisions.png", "plot-all.png", "plot-all-log.png"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(written.len(), 3);
    assert_eq!(listing(config.output()), expected);
}

#[test]
fn missing_input_directory() {
    let root = tempfile::tempdir().unwrap();
    write(&root.path().join("times"), "children_10.csv", "linear,1\n");

    let result = perfplot::run(&config(root.path()));
    assert!(matches!(result, Err(Error::Io { .. })));
}

#[test]
fn bad_collision_value_aborts() {
    let root = tempfile::tempdir().unwrap();
    write(&root.path().join("collision"), "children_10.csv", "ten");
    write(&root.path().join("times"), "children_10.csv", "linear,1\n");

    let config = config(root.path());
    let result = perfplot::run(&config);
    assert!(matches!(result, Err(Error::InvalidValue { .. })));
    assert!(!config.output().join("plot-hash-collisions.png").exists());
}
