/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::parser::ValueSource;
use clap::ArgMatches;
use pixmorph_core::options::DecoderOptions;

use crate::cmd_args::OPERATIONS;

pub mod global_options;

/// Collect the operations in the order in which they
/// were specified in the command line
pub fn fill_operations(options: &ArgMatches) -> Vec<String> {
    let mut operations = Vec::with_capacity(OPERATIONS.len());

    for id in options.ids() {
        let argument = id.as_str();

        if !OPERATIONS.contains(&argument) {
            continue;
        }
        if options.value_source(argument) != Some(ValueSource::CommandLine) {
            // ignore things not passed via command line
            continue;
        }
        operations.push(argument.to_string());
    }
    operations
}

pub fn get_decoder_options(options: &ArgMatches) -> DecoderOptions {
    let defaults = DecoderOptions::default();

    let max_width = options
        .get_one::<usize>("max-width")
        .copied()
        .unwrap_or(defaults.get_max_width());
    let max_height = options
        .get_one::<usize>("max-height")
        .copied()
        .unwrap_or(defaults.get_max_height());
    let strict_mode = !options.get_flag("no-strict");

    defaults
        .set_max_width(max_width)
        .set_max_height(max_height)
        .set_strict_mode(strict_mode)
}

#[cfg(test)]
mod tests {
    use crate::cmd_args::create_cmd_args;
    use crate::cmd_parsers::{fill_operations, get_decoder_options};

    #[test]
    fn operations_keep_command_line_order() {
        let matches = create_cmd_args()
            .try_get_matches_from([
                "pixmorph",
                "-i",
                "in.ppm",
                "--grayscale",
                "--print",
                "--resize",
                "2x2",
                "--flip-vertical"
            ])
            .unwrap();

        assert_eq!(
            fill_operations(&matches),
            ["grayscale", "resize", "flip-vertical"]
        );
    }

    #[test]
    fn decoder_options_from_flags() {
        let matches = create_cmd_args()
            .try_get_matches_from(["pixmorph", "-i", "in.ppm", "--max-width", "8", "--no-strict"])
            .unwrap();

        let options = get_decoder_options(&matches);

        assert_eq!(options.get_max_width(), 8);
        assert_eq!(options.get_max_height(), 16384);
        assert!(!options.get_strict_mode());
    }
}
