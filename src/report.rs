// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::config::Config;
use crate::error::Error;
use crate::series::{Series, SeriesSet};
use crate::source;

use scalegraph::{PlotConfig, Scale, Trace};
use strum::IntoEnumIterator;

use std::fs;
use std::path::PathBuf;

const X_DESC: &str = "Array size";
const COLLISIONS_TITLE: &str = "Hash collisions by array size";
const COLLISIONS_Y_DESC: &str = "Collisions";
const TIMINGS_TITLE: &str = "Search time (µs) by array size";

/// Load every result and render the full set of charts into the output
/// directory. Returns the paths written, in the order they were drawn.
pub fn run(config: &Config) -> Result<Vec<PathBuf>, Error> {
    let output = config.output();
    fs::create_dir_all(output).map_err(|e| Error::io(output, e))?;

    let mut collisions: Series = source::load_collisions(config.collisions(), config.extension())?
        .into_iter()
        .collect();
    collisions.sort();
    info!("loaded {} collision counts", collisions.len());

    let mut timings = source::load_timings(config.timings(), config.extension())?;
    timings.sort();
    info!("loaded timings for {} search methods", timings.len());

    let report = Report::new(config);
    let mut written = Vec::new();
    written.push(report.collisions(&collisions)?);
    for scale in Scale::iter() {
        written.push(report.combined(&timings, scale)?);
    }
    for scale in Scale::iter() {
        for (method, series) in &timings {
            written.push(report.method(method, series, scale)?);
        }
    }

    Ok(written)
}

/// Filename of a chart, eg: `plot-all-log.png`
pub fn chart_filename(descriptor: &str, scale: Scale) -> String {
    format!("plot-{}{}.png", descriptor, scale.suffix())
}

fn time_y_desc(scale: Scale) -> &'static str {
    match scale {
        Scale::Linear => "Time (µs)",
        Scale::Log => "Time (µs, log)",
    }
}

fn title(base: &str, scale: Scale) -> String {
    match scale {
        Scale::Linear => base.to_string(),
        Scale::Log => format!("{} (log scale)", base),
    }
}

/// Renders individual charts into one output directory
pub struct Report<'a> {
    config: &'a Config,
}

impl<'a> Report<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Collision counts as a single series on a linear axis
    pub fn collisions(&self, series: &Series) -> Result<PathBuf, Error> {
        let mut plot = PlotConfig::new();
        plot.caption(COLLISIONS_TITLE)
            .x_desc(X_DESC)
            .y_desc(COLLISIONS_Y_DESC)
            .size(self.config.chart().collisions());

        self.render(
            &plot,
            "hash-collisions",
            &[series.trace("collisions")],
            Scale::Linear,
        )
    }

    /// All search methods overlaid, with a legend
    pub fn combined(&self, timings: &SeriesSet, scale: Scale) -> Result<PathBuf, Error> {
        let mut plot = PlotConfig::new();
        plot.caption(title(TIMINGS_TITLE, scale))
            .x_desc(X_DESC)
            .y_desc(time_y_desc(scale))
            .size(self.config.chart().combined())
            .legend(true);

        self.render(&plot, "all", &timings.traces(), scale)
    }

    /// A single search method
    pub fn method(&self, method: &str, series: &Series, scale: Scale) -> Result<PathBuf, Error> {
        let mut plot = PlotConfig::new();
        plot.caption(title(&format!("Search time: {}", method), scale))
            .x_desc(X_DESC)
            .y_desc(time_y_desc(scale))
            .size(self.config.chart().method());

        self.render(&plot, method, &[series.trace(method)], scale)
    }

    fn render(
        &self,
        plot: &PlotConfig,
        descriptor: &str,
        traces: &[Trace],
        scale: Scale,
    ) -> Result<PathBuf, Error> {
        let path = self.path(descriptor, scale);
        plot.plot(&path, traces, scale)
            .map_err(|e| Error::Render {
                path: path.clone(),
                reason: e.to_string(),
            })?;
        info!("wrote {}", path.display());
        Ok(path)
    }

    fn path(&self, descriptor: &str, scale: Scale) -> PathBuf {
        self.config.output().join(chart_filename(descriptor, scale))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filenames() {
        assert_eq!(
            chart_filename("hash-collisions", Scale::Linear),
            "plot-hash-collisions.png"
        );
        assert_eq!(chart_filename("all", Scale::Log), "plot-all-log.png");
        assert_eq!(chart_filename("binary", Scale::Log), "plot-binary-log.png");
    }

    #[test]
    fn titles() {
        assert_eq!(title("Search time: linear", Scale::Linear), "Search time: linear");
        assert_eq!(
            title("Search time: linear", Scale::Log),
            "Search time: linear (log scale)"
        );
        assert_eq!(time_y_desc(Scale::Log), "Time (µs, log)");
    }
}
