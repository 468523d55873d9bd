/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

use crate::cmd_args::arg_parsers::{parse_alpha, parse_dimensions};

pub mod arg_parsers;

/// Arguments that transform the input image, applied
/// in the order they appear on the command line
pub const OPERATIONS: [&str; 5] = [
    "flip-horizontal",
    "flip-vertical",
    "grayscale",
    "resize",
    "blend"
];

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("pixmorph")
        .about("Transform, print and morph plain PPM (P3) images")
        .arg(Arg::new("in")
            .short('i')
            .long("input")
            .help("Input file to read data from")
            .value_parser(value_parser!(PathBuf))
            .required(true))
        .arg(Arg::new("out")
            .short('o')
            .long("output")
            .help("Output to write the data to, always a plain PPM file")
            .value_parser(value_parser!(PathBuf)))
        .arg(Arg::new("all-yes")
            .short('y')
            .long("yes")
            .action(ArgAction::SetTrue)
            .help("Overwrite the output file without asking"))
        .arg(Arg::new("probe")
            .long("probe")
            .action(ArgAction::SetTrue)
            .help("Print the input dimensions as JSON and exit")
            .conflicts_with_all(["out", "print", "morph"]))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the decoding options"))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("ADVANCED")
            .help("Maximum width of an image to decode")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("ADVANCED")
            .help("Maximum height of an image to decode")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
        .arg(Arg::new("no-strict")
            .long("no-strict")
            .action(ArgAction::SetTrue)
            .help_heading("ADVANCED")
            .help("Ignore data after the last pixel instead of failing"))
        .arg(Arg::new("flip-horizontal")
            .long("flip-horizontal")
            .action(ArgAction::SetTrue)
            .help_heading("OPERATIONS")
            .help("Mirror the image around its vertical axis"))
        .arg(Arg::new("flip-vertical")
            .long("flip-vertical")
            .action(ArgAction::SetTrue)
            .help_heading("OPERATIONS")
            .help("Swap the top and bottom rows of the image"))
        .arg(Arg::new("grayscale")
            .long("grayscale")
            .action(ArgAction::SetTrue)
            .help_heading("OPERATIONS")
            .help("Convert the image to grayscale"))
        .arg(Arg::new("resize")
            .long("resize")
            .value_name("WIDTHxHEIGHT")
            .help_heading("OPERATIONS")
            .help("Resize the image with nearest neighbor sampling")
            .value_parser(parse_dimensions))
        .arg(Arg::new("blend")
            .long("blend")
            .value_name("FILE")
            .help_heading("OPERATIONS")
            .help("Blend the image with another image of the same dimensions")
            .value_parser(value_parser!(PathBuf)))
        .arg(Arg::new("alpha")
            .long("alpha")
            .help_heading("OPERATIONS")
            .help("Weight of the input image when blending")
            .long_help("Weight of the input image when blending, the blended image gets 1 - alpha.\n1.0 keeps the input image, 0.0 replaces it with the blended image")
            .value_parser(parse_alpha)
            .default_value("0.5"))
        .arg(Arg::new("print")
            .long("print")
            .action(ArgAction::SetTrue)
            .help_heading("DISPLAY")
            .help("Print the pixels of the result as (r,g,b) triplets"))
        .arg(Arg::new("morph")
            .long("morph")
            .value_name("FILE")
            .help_heading("DISPLAY")
            .help("Animate the result into another image on the terminal")
            .value_parser(value_parser!(PathBuf)))
        .arg(Arg::new("steps")
            .long("steps")
            .help_heading("DISPLAY")
            .help("Number of steps of the morph")
            .value_parser(value_parser!(usize))
            .default_value("50"))
        .arg(Arg::new("delay")
            .long("delay")
            .help_heading("DISPLAY")
            .help("Pause between two morph frames, in milliseconds")
            .value_parser(value_parser!(u64))
            .default_value("5"))
}
