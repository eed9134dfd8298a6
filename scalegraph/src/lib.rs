// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Line charts which plot a measurement against the input size it was taken
//! at. Each chart is written to a PNG file using the `plotters` bitmap
//! backend.

use plotters::coord::ranged1d::{Ranged, ValueFormatter};
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;

use std::error::Error;
use std::path::Path;

mod scales;

pub use scales::*;

macro_rules! hexcolour {
    ($colour:literal) => {
        RGBColor(
            (($colour & 0xFF0000) >> 16) as u8,
            (($colour & 0x00FF00) >> 8) as u8,
            ($colour & 0x0000FF) as u8,
        )
    };
}

const COLOURS: &[RGBColor] = &[
    hexcolour!(0xAA0000),
    hexcolour!(0x0000FF),
    hexcolour!(0x117733),
    hexcolour!(0xDDCC77),
    hexcolour!(0x999933),
    hexcolour!(0x332288),
    hexcolour!(0x888888),
    hexcolour!(0x88CCEE),
    hexcolour!(0x882255),
    hexcolour!(0x44AA99),
    hexcolour!(0xAA4499),
    hexcolour!(0xCC6677),
];

const FONT: &str = "sans-serif";
const MARKER_SIZE: u32 = 4;

/// Colour of the series at `index`, cycling through the palette.
pub fn palette(index: usize) -> RGBColor {
    COLOURS[index % COLOURS.len()]
}

/// A named sequence of `(x, y)` points. Points are drawn in the order given.
#[derive(Clone, Debug, PartialEq)]
pub struct Trace {
    label: String,
    points: Vec<(f64, f64)>,
}

impl Trace {
    pub fn new(label: impl AsRef<str>, points: Vec<(f64, f64)>) -> Self {
        Self {
            label: label.as_ref().to_owned(),
            points,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// The points which can be placed on the given scale
    fn visible(&self, scale: Scale) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .copied()
            .filter(|(x, y)| x.is_finite() && scale.accepts(*y))
            .collect()
    }
}

/// Chart settings shared by every chart drawn with the same config.
#[derive(Clone, Debug)]
pub struct PlotConfig {
    x_desc: String,
    y_desc: String,
    caption: String,
    size: (u32, u32),
    legend: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl PlotConfig {
    pub fn new() -> Self {
        Self {
            x_desc: String::new(),
            y_desc: String::new(),
            caption: String::new(),
            size: (1000, 600),
            legend: false,
        }
    }

    pub fn caption(&mut self, caption: impl AsRef<str>) -> &mut Self {
        self.caption = caption.as_ref().to_owned();
        self
    }

    pub fn x_desc(&mut self, x_desc: impl AsRef<str>) -> &mut Self {
        self.x_desc = x_desc.as_ref().to_owned();
        self
    }

    pub fn y_desc(&mut self, y_desc: impl AsRef<str>) -> &mut Self {
        self.y_desc = y_desc.as_ref().to_owned();
        self
    }

    pub fn size(&mut self, size: (u32, u32)) -> &mut Self {
        self.size = size;
        self
    }

    /// Draw a legend box with one entry per trace
    pub fn legend(&mut self, legend: bool) -> &mut Self {
        self.legend = legend;
        self
    }

    /// Render the traces into a PNG at `filename`. Points that cannot be
    /// shown on the chosen scale (eg: zero on a log axis) are skipped.
    pub fn plot(
        &self,
        filename: impl AsRef<Path>,
        traces: &[Trace],
        scale: Scale,
    ) -> Result<(), Box<dyn Error>> {
        let visible: Vec<Vec<(f64, f64)>> = traces.iter().map(|t| t.visible(scale)).collect();

        let x_range = linear_bounds(visible.iter().flatten().map(|(x, _)| *x));
        let y_range = scale.bounds(visible.iter().flatten().map(|(_, y)| *y));

        let root = BitMapBackend::new(filename.as_ref(), self.size).into_drawing_area();
        root.fill(&WHITE)?;

        let mut builder = ChartBuilder::on(&root);
        builder
            .caption(&self.caption, (FONT, 30))
            .margin(20)
            .set_label_area_size(LabelAreaPosition::Left, 80)
            .set_label_area_size(LabelAreaPosition::Bottom, 50);

        match scale {
            Scale::Linear => {
                let mut chart = builder.build_cartesian_2d(x_range, y_range)?;
                self.draw(&mut chart, traces, &visible)?;
            }
            Scale::Log => {
                let mut chart = builder.build_cartesian_2d(x_range, y_range.log_scale())?;
                self.draw(&mut chart, traces, &visible)?;
            }
        }

        root.present()?;

        Ok(())
    }

    fn draw<'a, Y>(
        &self,
        chart: &mut ChartContext<'a, BitMapBackend<'a>, Cartesian2d<RangedCoordf64, Y>>,
        traces: &[Trace],
        visible: &[Vec<(f64, f64)>],
    ) -> Result<(), Box<dyn Error>>
    where
        Y: Ranged<ValueType = f64> + ValueFormatter<f64>,
    {
        chart
            .configure_mesh()
            .x_desc(&self.x_desc)
            .y_desc(&self.y_desc)
            .label_style((FONT, 16))
            .axis_desc_style((FONT, 20))
            .draw()?;

        for (i, (trace, points)) in traces.iter().zip(visible.iter()).enumerate() {
            let colour = palette(i);

            let series = chart.draw_series(LineSeries::new(
                points.iter().copied(),
                colour.stroke_width(2),
            ))?;
            if self.legend {
                series.label(trace.label()).legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], colour.stroke_width(2))
                });
            }

            chart.draw_series(
                points
                    .iter()
                    .map(|&point| Circle::new(point, MARKER_SIZE, colour.filled())),
            )?;
        }

        if self.legend {
            chart
                .configure_series_labels()
                .background_style(WHITE.mix(0.8).filled())
                .border_style(BLACK.stroke_width(1))
                .position(SeriesLabelPosition::UpperLeft)
                .draw()?;
        }

        Ok(())
    }
}
