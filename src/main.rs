// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#[macro_use]
extern crate rustcommon_logger;

use rustcommon_logger::{LogBuilder, MultiLogBuilder, Stdout};

use perfplot::Config;

fn main() {
    let config = Config::new();

    // initialize logging
    let log = LogBuilder::new()
        .output(Box::new(Stdout::new()))
        .log_queue_depth(1024)
        .single_message_size(4096)
        .build()
        .expect("failed to initialize log");

    let mut log = MultiLogBuilder::new()
        .level_filter(config.logging())
        .default(log)
        .build()
        .start();

    config.print();

    match perfplot::run(&config) {
        Ok(charts) => {
            info!("-----");
            info!("wrote {} charts to {}", charts.len(), config.output().display());
            if let Err(e) = log.flush() {
                eprintln!("failed to flush log: {}", e);
            }
        }
        Err(e) => {
            error!("{}", e);
            if let Err(e) = log.flush() {
                eprintln!("failed to flush log: {}", e);
            }
            std::process::exit(1);
        }
    }
}
