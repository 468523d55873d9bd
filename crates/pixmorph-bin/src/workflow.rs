/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::{stdin, stdout, BufRead};
use std::path::{Path, PathBuf};

use clap::ArgMatches;
use log::{debug, info};
use pixmorph_image::errors::ImageErrors;
use pixmorph_image::image::Image;
use pixmorph_image::pipelines::Pipeline;
use pixmorph_image::render::TextRenderer;
use pixmorph_image::traits::Renderer;
use pixmorph_imageprocs::blend::Blend;
use pixmorph_imageprocs::flip::{Flip, FlipDirection};
use pixmorph_imageprocs::grayscale::Grayscale;
use pixmorph_imageprocs::morph::Morph;
use pixmorph_imageprocs::resize::{Resize, ResizeMethod};

use crate::cmd_parsers::fill_operations;
use crate::cmd_parsers::global_options::CmdOptions;
use crate::file_io::PixFile;
use crate::show_terminal::AnsiRenderer;

pub(crate) fn create_and_exec_workflow_from_cmd(
    args: &ArgMatches, cmd_opts: &CmdOptions
) -> Result<(), ImageErrors> {
    info!("Creating workflows from input");

    let in_file = args
        .get_one::<PathBuf>("in")
        .ok_or_else(|| ImageErrors::invalid_argument("No input file"))?;

    let out_file = args.get_one::<PathBuf>("out");

    if let Some(out_file) = out_file {
        verify_file_paths(in_file, out_file, cmd_opts)?;
    }

    // images borrowed by operations must outlive the pipeline
    let blend_image = args
        .get_one::<PathBuf>("blend")
        .map(|file| Image::open(file, cmd_opts.decoder_options))
        .transpose()?;

    let mut pipeline = Pipeline::new();

    pipeline.chain_decoder(PixFile::new(in_file.clone(), cmd_opts.decoder_options));

    add_operations(args, cmd_opts, blend_image.as_ref(), &mut pipeline)?;

    pipeline.advance_to_end()?;

    let image = pipeline
        .into_image()
        .ok_or(ImageErrors::NoImageForOperations)?;

    if let Some(out_file) = out_file {
        info!("Writing {:?}", out_file);
        image.save(out_file)?;
    }

    if args.get_flag("print") {
        TextRenderer::new(stdout().lock()).render(&image)?;
    }

    if let Some(target_file) = args.get_one::<PathBuf>("morph") {
        let target = Image::open(target_file, cmd_opts.decoder_options)?;

        Morph::new(&image, &target, cmd_opts.steps)?
            .set_frame_delay(cmd_opts.frame_delay)
            .run(AnsiRenderer::new(stdout().lock()))?;
    }

    Ok(())
}

fn verify_file_paths(
    in_path: &Path, out_path: &Path, cmd_opts: &CmdOptions
) -> Result<(), ImageErrors> {
    if in_path == out_path {
        return Err(ImageErrors::InvalidArgument(format!(
            "Cannot use {in_path:?} as both input and output"
        )));
    }

    if !in_path.exists() {
        return Err(ImageErrors::InvalidArgument(format!(
            "Path {in_path:?}, does not exist"
        )));
    }

    if !in_path.is_file() {
        return Err(ImageErrors::InvalidArgument(format!(
            "Path {in_path:?} is not a file"
        )));
    }

    if out_path.exists() {
        if cmd_opts.override_files {
            info!("Overwriting path {:?} ", out_path);
        } else {
            println!("File {out_path:?} exists, overwrite [y/N]");
            let mut result = String::new();

            stdin().lock().read_line(&mut result)?;

            if result.trim() != "y" {
                return Err(ImageErrors::InvalidArgument(format!(
                    "Not overwriting file {out_path:?}"
                )));
            }
        }
    }
    Ok(())
}

pub fn add_operations<'a>(
    args: &ArgMatches, cmd_opts: &CmdOptions, blend_image: Option<&'a Image>,
    pipeline: &mut Pipeline<'a, PixFile>
) -> Result<(), ImageErrors> {
    for argument in fill_operations(args) {
        match argument.as_str() {
            "flip-horizontal" => {
                debug!("Added horizontal flip operation");
                pipeline.chain_operations(Box::new(Flip::new(FlipDirection::Horizontal)));
            }
            "flip-vertical" => {
                debug!("Added vertical flip operation");
                pipeline.chain_operations(Box::new(Flip::new(FlipDirection::Vertical)));
            }
            "grayscale" => {
                debug!("Added grayscale operation");
                pipeline.chain_operations(Box::new(Grayscale::new()));
            }
            "resize" => {
                let (width, height) = args
                    .get_one::<(usize, usize)>("resize")
                    .copied()
                    .ok_or_else(|| ImageErrors::invalid_argument("Missing resize dimensions"))?;

                debug!("Added resize operation with width={width} height={height}");

                pipeline.chain_operations(Box::new(Resize::new(
                    width,
                    height,
                    ResizeMethod::NearestNeighbor
                )));
            }
            "blend" => {
                let image = blend_image
                    .ok_or_else(|| ImageErrors::invalid_argument("Missing image to blend with"))?;

                debug!("Added blend operation with alpha {}", cmd_opts.alpha);

                pipeline.chain_operations(Box::new(Blend::new(image, cmd_opts.alpha)));
            }
            _ => {}
        }
    }
    Ok(())
}
