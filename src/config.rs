// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use clap::{App, Arg, ArgMatches};
use rustcommon_logger::LevelFilter;
use serde_derive::*;

use std::ffi::OsString;
use std::io::Read;
use std::path::{Path, PathBuf};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Report configuration: where results are read from, where charts go, and
/// how large each chart is drawn
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    general: General,
    #[serde(default)]
    chart: Chart,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct General {
    #[serde(default = "default_collisions")]
    collisions: PathBuf,
    #[serde(default = "default_timings")]
    timings: PathBuf,
    #[serde(default = "default_output")]
    output: PathBuf,
    #[serde(default = "default_extension")]
    extension: String,
    #[serde(with = "LevelFilterDef")]
    #[serde(default = "default_logging_level")]
    logging: LevelFilter,
}

impl Default for General {
    fn default() -> Self {
        Self {
            collisions: default_collisions(),
            timings: default_timings(),
            output: default_output(),
            extension: default_extension(),
            logging: default_logging_level(),
        }
    }
}

/// Image dimensions in pixels as `[width, height]`
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Chart {
    #[serde(default = "default_collisions_size")]
    collisions: (u32, u32),
    #[serde(default = "default_combined_size")]
    combined: (u32, u32),
    #[serde(default = "default_method_size")]
    method: (u32, u32),
}

impl Default for Chart {
    fn default() -> Self {
        Self {
            collisions: default_collisions_size(),
            combined: default_combined_size(),
            method: default_method_size(),
        }
    }
}

impl Chart {
    pub fn collisions(&self) -> (u32, u32) {
        self.collisions
    }

    pub fn combined(&self) -> (u32, u32) {
        self.combined
    }

    pub fn method(&self) -> (u32, u32) {
        self.method
    }
}

fn default_collisions() -> PathBuf {
    PathBuf::from("found-children/HashTable/collision")
}

fn default_timings() -> PathBuf {
    PathBuf::from("found-children/times")
}

fn default_output() -> PathBuf {
    PathBuf::from("plots2")
}

fn default_extension() -> String {
    "csv".to_string()
}

fn default_logging_level() -> LevelFilter {
    LevelFilter::Info
}

fn default_collisions_size() -> (u32, u32) {
    (1000, 500)
}

fn default_combined_size() -> (u32, u32) {
    (1000, 600)
}

fn default_method_size() -> (u32, u32) {
    (800, 400)
}

#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
#[serde(remote = "LevelFilter")]
#[serde(deny_unknown_fields)]
enum LevelFilterDef {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl Config {
    /// parse command line options and return `Config`
    pub fn new() -> Config {
        Self::from_args(std::env::args_os())
    }

    /// parse the given arguments, the first being the program name
    pub fn from_args<I, T>(args: I) -> Config
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let app = App::new(NAME)
            .version(VERSION)
            .about("Charts hash collisions and search timings by array size")
            .arg(
                Arg::with_name("config")
                    .long("config")
                    .value_name("FILE")
                    .help("TOML config file")
                    .takes_value(true),
            )
            .arg(
                Arg::with_name("collisions")
                    .long("collisions")
                    .value_name("DIR")
                    .help("Directory of collision count files")
                    .takes_value(true),
            )
            .arg(
                Arg::with_name("timings")
                    .long("timings")
                    .value_name("DIR")
                    .help("Directory of search timing files")
                    .takes_value(true),
            )
            .arg(
                Arg::with_name("output")
                    .long("output")
                    .value_name("DIR")
                    .help("Directory the charts are written to")
                    .takes_value(true),
            )
            .arg(
                Arg::with_name("extension")
                    .long("extension")
                    .value_name("EXT")
                    .help("Extension of result files, without the dot")
                    .takes_value(true),
            )
            .arg(
                Arg::with_name("verbose")
                    .short("v")
                    .long("verbose")
                    .help("Increase verbosity by one level. Can be used more than once")
                    .multiple(true),
            );

        let matches = app.get_matches_from(args);

        let mut config = if let Some(file) = matches.value_of("config") {
            Config::load_from_file(file)
        } else {
            Default::default()
        };

        config.apply_matches(&matches);

        config
    }

    fn apply_matches(&mut self, matches: &ArgMatches) {
        if let Some(collisions) = matches.value_of_os("collisions") {
            self.set_collisions(collisions);
        }
        if let Some(timings) = matches.value_of_os("timings") {
            self.set_timings(timings);
        }
        if let Some(output) = matches.value_of_os("output") {
            self.set_output(output);
        }
        if let Some(extension) = matches.value_of("extension") {
            self.set_extension(extension);
        }

        match matches.occurrences_of("verbose") {
            0 => {}
            1 => self.general.logging = LevelFilter::Debug,
            _ => self.general.logging = LevelFilter::Trace,
        }
    }

    /// parse a TOML config. all sections and keys are optional
    pub fn load_from_str(content: &str) -> Result<Config, toml::de::Error> {
        toml::from_str(content)
    }

    fn load_from_file(filename: &str) -> Config {
        let mut content = String::new();
        let read = std::fs::File::open(filename).and_then(|mut f| f.read_to_string(&mut content));
        if let Err(e) = read {
            println!("Failed to read config: {}", filename);
            println!("{}", e);
            std::process::exit(1);
        }
        match Config::load_from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                println!("Failed to parse TOML config: {}", filename);
                println!("{}", e);
                std::process::exit(1);
            }
        }
    }

    /// directory holding one collision count file per array size
    pub fn collisions(&self) -> &Path {
        &self.general.collisions
    }

    pub fn set_collisions(&mut self, dir: impl Into<PathBuf>) {
        self.general.collisions = dir.into();
    }

    /// directory holding one timing file per array size
    pub fn timings(&self) -> &Path {
        &self.general.timings
    }

    pub fn set_timings(&mut self, dir: impl Into<PathBuf>) {
        self.general.timings = dir.into();
    }

    /// directory the charts are written to, created if missing
    pub fn output(&self) -> &Path {
        &self.general.output
    }

    pub fn set_output(&mut self, dir: impl Into<PathBuf>) {
        self.general.output = dir.into();
    }

    /// result file extension, without the leading dot
    pub fn extension(&self) -> &str {
        &self.general.extension
    }

    pub fn set_extension(&mut self, extension: &str) {
        self.general.extension = extension.trim_start_matches('.').to_string();
    }

    /// get logging level
    pub fn logging(&self) -> LevelFilter {
        self.general.logging
    }

    pub fn chart(&self) -> &Chart {
        &self.chart
    }

    pub fn print(&self) {
        info!("-----");
        info!("{} {}", NAME, VERSION);
        info!("Config: Collisions: {}", self.collisions().display());
        info!("Config: Timings: {}", self.timings().display());
        info!("Config: Output: {}", self.output().display());
        info!("Config: Extension: {}", self.extension());
        info!(
            "Config: Chart Sizes: Collisions: {:?} Combined: {:?} Method: {:?}",
            self.chart.collisions(),
            self.chart.combined(),
            self.chart.method(),
        );
    }
}
