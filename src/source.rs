// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Discovery and parsing of benchmark result files. Every result file is
//! named `<prefix>_<size>.<extension>`; collision files hold a single count
//! and timing files hold `method,time` rows.

use crate::error::Error;
use crate::series::{Point, SeriesSet};

use csv::ReaderBuilder;

use std::fs;
use std::path::{Path, PathBuf};

/// Parse the input size from a result filename, eg: `children_1000.csv`
pub fn extract_size(filename: &str, extension: &str) -> Result<u64, Error> {
    let last = filename.rsplit('_').next().unwrap_or(filename);
    let suffix = format!(".{}", extension);
    let token = last.strip_suffix(suffix.as_str()).unwrap_or(last);

    token.parse().map_err(|_| Error::InvalidSize {
        file: filename.to_owned(),
    })
}

/// List the files in `dir` with the given extension, paired with the size
/// parsed from each name. Order follows the directory listing.
pub fn list_inputs(dir: &Path, extension: &str) -> Result<Vec<(PathBuf, u64)>, Error> {
    let suffix = format!(".{}", extension);
    let mut inputs = Vec::new();

    for entry in fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let path = entry.path();

        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(_) => {
                debug!("skipping non utf-8 filename: {}", path.display());
                continue;
            }
        };
        if !name.ends_with(&suffix) {
            continue;
        }
        if !entry.file_type().map_err(|e| Error::io(&path, e))?.is_file() {
            debug!("skipping non-file entry: {}", path.display());
            continue;
        }

        let size = extract_size(&name, extension)?;
        inputs.push((path, size));
    }

    Ok(inputs)
}

/// Load one `(size, collisions)` point per collision file. The points are
/// returned unsorted.
pub fn load_collisions(dir: &Path, extension: &str) -> Result<Vec<Point>, Error> {
    let mut points = Vec::new();

    for (path, size) in list_inputs(dir, extension)? {
        let content = fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let value: u64 = content.trim().parse().map_err(|_| Error::InvalidValue {
            path: path.clone(),
            content: content.trim().to_owned(),
        })?;
        debug!("collisions: {} size: {} value: {}", path.display(), size, value);
        points.push(Point::new(size, value));
    }

    Ok(points)
}

/// Load the per-method timings from every timing file. Rows with fewer than
/// two fields are skipped.
pub fn load_timings(dir: &Path, extension: &str) -> Result<SeriesSet, Error> {
    let mut set = SeriesSet::new();

    for (path, size) in list_inputs(dir, extension)? {
        debug!("timings: {} size: {}", path.display(), size);
        load_timing_file(&path, size, &mut set)?;
    }

    Ok(set)
}

fn load_timing_file(path: &Path, size: u64, set: &mut SeriesSet) -> Result<(), Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| Error::Csv {
            path: path.to_owned(),
            source,
        })?;

    for record in reader.records() {
        let record = record.map_err(|source| Error::Csv {
            path: path.to_owned(),
            source,
        })?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let (method, time) = match (record.get(0), record.get(1)) {
            (Some(method), Some(time)) => (method, time.trim()),
            _ => {
                debug!("skipping short row on line {} of {}", line, path.display());
                continue;
            }
        };

        let value: u64 = time.parse().map_err(|_| Error::InvalidTime {
            path: path.to_owned(),
            line,
            value: time.to_owned(),
        })?;
        set.push(method, Point::new(size, value));
    }

    Ok(())
}
