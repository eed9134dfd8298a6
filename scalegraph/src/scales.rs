// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::ops::Range;

use strum_macros::EnumIter;

/// Fraction of the data extent added on each side of a linear axis.
const PADDING: f64 = 0.05;

/// The scale used for the y-axis of a chart
#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter)]
pub enum Scale {
    Linear,
    Log,
}

impl Scale {
    /// Suffix appended to a chart's file stem, eg: `plot-all-log.png`
    pub fn suffix(self) -> &'static str {
        match self {
            Scale::Linear => "",
            Scale::Log => "-log",
        }
    }

    /// Whether a value can be drawn on this scale
    pub fn accepts(self, value: f64) -> bool {
        match self {
            Scale::Linear => value.is_finite(),
            Scale::Log => value.is_finite() && value > 0.0,
        }
    }

    pub fn bounds<I>(self, values: I) -> Range<f64>
    where
        I: IntoIterator<Item = f64>,
    {
        match self {
            Scale::Linear => linear_bounds(values),
            Scale::Log => log_bounds(values),
        }
    }
}

fn extent<I>(values: I) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = f64>,
{
    values.into_iter().fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((min, max)) => Some((min.min(v), max.max(v))),
    })
}

/// Range covering all values with a margin on both ends. A single distinct
/// value gets a margin of one unit, no values at all yield `0..1`.
pub fn linear_bounds<I>(values: I) -> Range<f64>
where
    I: IntoIterator<Item = f64>,
{
    match extent(values.into_iter().filter(|v| v.is_finite())) {
        None => 0.0..1.0,
        Some((min, max)) if min == max => (min - 1.0)..(max + 1.0),
        Some((min, max)) => {
            let pad = (max - min) * PADDING;
            (min - pad)..(max + pad)
        }
    }
}

/// Range spanning the strictly positive values, widened to whole decades.
/// Without any positive value the range is `1..10`.
pub fn log_bounds<I>(values: I) -> Range<f64>
where
    I: IntoIterator<Item = f64>,
{
    match extent(values.into_iter().filter(|v| Scale::Log.accepts(*v))) {
        None => 1.0..10.0,
        Some((min, max)) => {
            let lower = 10f64.powf(min.log10().floor());
            let mut upper = 10f64.powf(max.log10().ceil());
            if upper <= lower {
                upper = lower * 10.0;
            }
            lower..upper
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_padding() {
        let range = linear_bounds(vec![0.0, 100.0]);
        assert_eq!(range, -5.0..105.0);
    }

    #[test]
    fn linear_degenerate() {
        assert_eq!(linear_bounds(vec![4.0, 4.0]), 3.0..5.0);
        assert_eq!(linear_bounds(Vec::new()), 0.0..1.0);
    }

    #[test]
    fn log_masks_non_positive() {
        let range = log_bounds(vec![0.0, 5.0, 50.0]);
        assert_eq!(range, 1.0..100.0);
    }

    #[test]
    fn log_single_decade() {
        assert_eq!(log_bounds(vec![10.0]), 10.0..100.0);
        assert_eq!(log_bounds(vec![0.0]), 1.0..10.0);
    }

    #[test]
    fn suffixes() {
        assert_eq!(Scale::Linear.suffix(), "");
        assert_eq!(Scale::Log.suffix(), "-log");
    }
}
