/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use log::debug;
use pixmorph_core::options::DecoderOptions;
use pixmorph_image::errors::ImageErrors;
use pixmorph_image::image::Image;
use pixmorph_image::traits::IntoImage;

/// A plain PPM file on disk, decoded when the pipeline asks for it
pub struct PixFile {
    file_path: PathBuf,
    options:   DecoderOptions
}

impl PixFile {
    pub fn new(file_path: PathBuf, options: DecoderOptions) -> PixFile {
        PixFile { file_path, options }
    }
}

impl IntoImage for PixFile {
    fn into_image(self) -> Result<Image, ImageErrors> {
        debug!("Treating {:?} as a ppm file", self.file_path);

        Image::open(&self.file_path, self.options).map_err(|err| match err {
            ImageErrors::FormatError(reason) => {
                ImageErrors::FormatError(format!("{}: {reason}", self.file_path.display()))
            }
            err => err
        })
    }
}
