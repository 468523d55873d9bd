/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Represents a plain PPM image decoder and encoder
use std::io::Write;

use pixmorph_core::options::DecoderOptions;
pub use pixmorph_ppm::{PPMDecodeErrors, PPMDecoder, PPMEncodeErrors, PPMEncoder as PPMEnc};

use crate::errors::ImageErrors;
use crate::image::Image;
use crate::traits::{DecoderTrait, EncoderTrait, IntoImage};

/// Decode a plain PPM image with default options
///
/// # Errors
/// The data is not a well formed plain PPM image, see
/// [`PPMDecoder::decode`] for the full list
pub fn decode(data: &[u8]) -> Result<Image, ImageErrors> {
    decode_with_options(data, DecoderOptions::default())
}

/// Decode a plain PPM image with custom decoder options
///
/// # Errors
/// The data is not a well formed plain PPM image or its dimensions
/// exceed the limits in `options`
pub fn decode_with_options(data: &[u8], options: DecoderOptions) -> Result<Image, ImageErrors> {
    PPMDecoder::new_with_options(data, options).into_image()
}

/// Encode an image as plain PPM returning the encoded bytes
///
/// # Errors
/// Never in practice, writing to a `Vec` doesn't fail
pub fn encode(image: &Image) -> Result<Vec<u8>, ImageErrors> {
    let mut sink = Vec::with_capacity(image.width() * image.height() * 12 + 32);
    encode_to(image, &mut sink)?;

    Ok(sink)
}

/// Encode an image as plain PPM into `sink`
///
/// Returns the number of bytes written
///
/// # Errors
/// The sink fails
pub fn encode_to<W: Write>(image: &Image, sink: W) -> Result<usize, ImageErrors> {
    PPMEncoder.encode(image, sink)
}

/// A plain PPM encoder
#[derive(Copy, Clone, Default, Debug)]
pub struct PPMEncoder;

impl EncoderTrait for PPMEncoder {
    fn name(&self) -> &'static str {
        "PPM Encoder"
    }

    fn encode<W: Write>(&mut self, image: &Image, mut sink: W) -> Result<usize, ImageErrors> {
        let (width, height) = image.dimensions();

        let written = PPMEnc::new(&mut sink).encode(width, height, image.pixels())?;

        Ok(written)
    }
}

impl DecoderTrait for PPMDecoder<'_> {
    fn decode(&mut self) -> Result<Image, ImageErrors> {
        let pixels = PPMDecoder::decode(self)?;

        let (width, height) = PPMDecoder::dimensions(self).ok_or_else(|| {
            ImageErrors::FormatError("ppm: dimensions unknown after decoding".to_string())
        })?;

        Image::new(pixels, width, height)
    }

    fn dimensions(&self) -> Option<(usize, usize)> {
        PPMDecoder::dimensions(self)
    }

    fn name(&self) -> &'static str {
        "PPM Decoder"
    }
}

impl IntoImage for PPMDecoder<'_> {
    fn into_image(mut self) -> Result<Image, ImageErrors> {
        DecoderTrait::decode(&mut self)
    }
}
