// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::collections::btree_map;
use std::collections::BTreeMap;

use scalegraph::Trace;

/// A single measurement: the input size and the value recorded for it
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub size: u64,
    pub value: u64,
}

impl Point {
    pub fn new(size: u64, value: u64) -> Self {
        Self { size, value }
    }
}

impl From<(u64, u64)> for Point {
    fn from((size, value): (u64, u64)) -> Self {
        Self::new(size, value)
    }
}

/// Measurements ordered by ascending size
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Series {
    points: Vec<Point>,
}

impl Series {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Order points by size, then value. Sorting twice changes nothing.
    pub fn sort(&mut self) {
        self.points.sort_unstable();
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn trace(&self, label: impl AsRef<str>) -> Trace {
        Trace::new(
            label,
            self.points
                .iter()
                .map(|p| (p.size as f64, p.value as f64))
                .collect(),
        )
    }
}

impl From<Vec<Point>> for Series {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl std::iter::FromIterator<Point> for Series {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

/// One series per method name, iterated in name order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SeriesSet {
    series: BTreeMap<String, Series>,
}

impl SeriesSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a point for `method`, leaving all other methods untouched
    pub fn push(&mut self, method: &str, point: Point) {
        if let Some(series) = self.series.get_mut(method) {
            series.push(point);
        } else {
            let mut series = Series::new();
            series.push(point);
            self.series.insert(method.to_owned(), series);
        }
    }

    pub fn sort(&mut self) {
        for series in self.series.values_mut() {
            series.sort();
        }
    }

    pub fn get(&self, method: &str) -> Option<&Series> {
        self.series.get(method)
    }

    pub fn methods(&self) -> impl Iterator<Item = &str> + '_ {
        self.series.keys().map(|k| k.as_str())
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Series> {
        self.series.iter()
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn traces(&self) -> Vec<Trace> {
        self.iter()
            .map(|(method, series)| series.trace(method))
            .collect()
    }
}

impl<'a> IntoIterator for &'a SeriesSet {
    type Item = (&'a String, &'a Series);
    type IntoIter = btree_map::Iter<'a, String, Series>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
