/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::time::Duration;

use clap::parser::ValueSource;
use clap::ArgMatches;
use log::{info, Level};
use pixmorph_core::options::DecoderOptions;
use pixmorph_imageprocs::morph::DEFAULT_FRAME_DELAY;

use crate::cmd_parsers::get_decoder_options;

#[derive(Debug, Copy, Clone)]
pub struct CmdOptions {
    pub decoder_options: DecoderOptions,
    pub override_files:  bool,
    pub alpha:           f64,
    pub steps:           usize,
    pub frame_delay:     Duration
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions {
            decoder_options: DecoderOptions::default(),
            override_files:  false,
            alpha:           0.5,
            steps:           50,
            frame_delay:     DEFAULT_FRAME_DELAY
        }
    }
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    cmd_options.decoder_options = get_decoder_options(options);

    if options.value_source("all-yes") == Some(ValueSource::CommandLine) {
        info!("Setting all commands to yes");
        cmd_options.override_files = true;
    }
    if let Some(alpha) = options.get_one::<f64>("alpha") {
        cmd_options.alpha = *alpha;
    }
    if let Some(steps) = options.get_one::<usize>("steps") {
        cmd_options.steps = *steps;
    }
    if let Some(delay) = options.get_one::<u64>("delay") {
        cmd_options.frame_delay = Duration::from_millis(*delay);
    }
    cmd_options
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = if options.get_flag("debug") {
        Level::Debug
    } else if options.get_flag("trace") {
        Level::Trace
    } else if options.get_flag("warn") {
        Level::Warn
    } else if options.get_flag("info") {
        Level::Info
    } else {
        Level::Warn
    };

    if let Err(e) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {e}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::cmd_args::create_cmd_args;
    use crate::cmd_parsers::global_options::parse_options;

    #[test]
    fn defaults() {
        let matches = create_cmd_args()
            .try_get_matches_from(["pixmorph", "-i", "in.ppm"])
            .unwrap();
        let options = parse_options(&matches);

        assert!(!options.override_files);
        assert_eq!(options.steps, 50);
        assert_eq!(options.frame_delay, Duration::from_millis(5));
        assert!((options.alpha - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn morph_and_overwrite_flags() {
        let matches = create_cmd_args()
            .try_get_matches_from([
                "pixmorph", "-i", "in.ppm", "-y", "--steps", "3", "--delay", "0", "--alpha", "0.1"
            ])
            .unwrap();
        let options = parse_options(&matches);

        assert!(options.override_files);
        assert_eq!(options.steps, 3);
        assert_eq!(options.frame_delay, Duration::ZERO);
        assert!((options.alpha - 0.1).abs() < f64::EPSILON);
    }
}
