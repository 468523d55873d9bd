/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::read;
use std::io;
use std::path::{Path, PathBuf};

use clap::ArgMatches;
use log::info;
use pixmorph_core::options::DecoderOptions;
use pixmorph_image::codecs::ppm::PPMDecoder;
use pixmorph_image::errors::ImageErrors;

use crate::cmd_parsers::global_options::CmdOptions;
use crate::serde::Metadata;

/// Probe the input file, extract its dimensions and print them to standard output.
pub fn probe_input_files(args: &ArgMatches, cmd_opts: &CmdOptions) -> Result<(), ImageErrors> {
    let Some(in_file) = args.get_one::<PathBuf>("in") else {
        return Ok(());
    };
    let metadata = probe_file(in_file, cmd_opts.decoder_options)?;

    let json = serde_json::to_string_pretty(&metadata).map_err(io::Error::from)?;

    println!("{json}");

    Ok(())
}

/// Read only the headers of `file`
pub fn probe_file(file: &Path, options: DecoderOptions) -> Result<Metadata, ImageErrors> {
    info!("Probing {:?}", file);

    let data = read(file)?;
    let size = data.len() as u64;

    // only headers are read, dimension limits don't apply
    let header_options = options
        .set_max_width(usize::MAX)
        .set_max_height(usize::MAX);

    let mut decoder = PPMDecoder::new_with_options(&data, header_options);
    decoder.decode_headers()?;

    let dimensions = decoder.dimensions().ok_or_else(|| {
        ImageErrors::FormatError(format!("{}: could not read dimensions", file.display()))
    })?;

    Ok(Metadata::new(
        file.as_os_str().to_os_string(),
        size,
        dimensions,
        options
    ))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pixmorph_core::options::DecoderOptions;

    use crate::probe_files::probe_file;

    #[test]
    fn probe_reads_header_only() {
        let path = std::env::temp_dir().join(format!("pixmorph-probe-{}.ppm", std::process::id()));
        // pixel data is missing, probing still succeeds
        fs::write(&path, b"P3\n4 2\n255\n").unwrap();

        let metadata = probe_file(&path, DecoderOptions::default());

        fs::remove_file(&path).unwrap();

        let value = serde_json::to_value(metadata.unwrap()).unwrap();

        assert_eq!(value["width"], 4);
        assert_eq!(value["height"], 2);
        assert_eq!(value["size"], 11);
    }

    #[test]
    fn probe_missing_file() {
        let path = std::env::temp_dir().join("pixmorph-probe-does-not-exist.ppm");

        assert!(probe_file(&path, DecoderOptions::default()).is_err());
    }
}
