// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Charts of hash collision counts and search timings by input array size.
//!
//! Results are read from two directories of files named
//! `<prefix>_<size>.<extension>`: collision files hold a single integer and
//! timing files hold `method,microseconds` rows. [`run`] loads both, orders
//! every series by size and writes the PNG charts to the output directory.

#[macro_use]
extern crate rustcommon_logger;

mod config;
mod error;
mod report;
mod series;
mod source;

pub use crate::config::{Chart, Config, NAME, VERSION};
pub use crate::error::Error;
pub use crate::report::{chart_filename, run, Report};
pub use crate::series::{Point, Series, SeriesSet};
pub use crate::source::{extract_size, list_inputs, load_collisions, load_timings};

pub use scalegraph::Scale;
