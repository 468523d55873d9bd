/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Blend two images together
use pixmorph_image::errors::ImageErrors;
use pixmorph_image::image::Image;
use pixmorph_image::traits::OperationsTrait;

use crate::pixel::blend_color;

/// Create a blend image filter which
/// can blend two images based on a configurable alpha
///
/// The image the operation runs on is weighted by `alpha`,
/// the image passed to [`Blend::new`] by `1 - alpha`.
pub struct Blend<'src> {
    image: &'src Image,
    alpha: f64
}

impl<'src> Blend<'src> {
    /// Create a new blend filter
    ///
    /// # Arguments
    /// - image: The image to blend with, must have the same dimensions
    ///  as the image the operation runs on
    /// - alpha: Weight of the image the operation runs on, not clamped
    #[must_use]
    pub fn new(image: &'src Image, alpha: f64) -> Blend<'src> {
        Blend { image, alpha }
    }
}

impl OperationsTrait for Blend<'_> {
    fn name(&self) -> &'static str {
        "Blend"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        check_dimensions(image, self.image)?;
        blend_into(image, self.image, self.alpha);

        Ok(())
    }
}

/// Blend `other` into `dest` in place, `dest` is weighted by `alpha`
///
/// Both images must have the same dimensions
pub(crate) fn blend_into(dest: &mut Image, other: &Image, alpha: f64) {
    debug_assert_eq!(dest.dimensions(), other.dimensions());

    for (pixel, other) in dest.pixels_mut().iter_mut().zip(other.pixels()) {
        *pixel = blend_color(*pixel, *other, alpha);
    }
}

/// Blend two images pixel by pixel, returning a new image
///
/// Each output pixel is `blend_color(image1, image2, alpha)`, so an
/// alpha of 1.0 reproduces `image1` and 0.0 reproduces `image2`.
///
/// # Errors
/// The images have different dimensions
pub fn blend_images(image1: &Image, image2: &Image, alpha: f64) -> Result<Image, ImageErrors> {
    check_dimensions(image1, image2)?;

    let (width, height) = image1.dimensions();

    let pixels = image1
        .pixels()
        .iter()
        .zip(image2.pixels())
        .map(|(c1, c2)| blend_color(*c1, *c2, alpha))
        .collect();

    Image::new(pixels, width, height)
}

fn check_dimensions(expected: &Image, found: &Image) -> Result<(), ImageErrors> {
    if expected.dimensions() != found.dimensions() {
        return Err(ImageErrors::DimensionMismatch(
            expected.dimensions(),
            found.dimensions()
        ));
    }
    Ok(())
}
