// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::path::PathBuf;

use thiserror::Error;

/// Errors which abort a report run
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read rows from {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("filename does not end in a size: {file}")]
    InvalidSize { file: String },
    #[error("collision count in {} is not an integer: {content:?}", .path.display())]
    InvalidValue { path: PathBuf, content: String },
    #[error("time on line {line} of {} is not an integer: {value:?}", .path.display())]
    InvalidTime {
        path: PathBuf,
        line: u64,
        value: String,
    },
    #[error("failed to render {}: {reason}", .path.display())]
    Render { path: PathBuf, reason: String },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
