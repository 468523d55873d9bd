/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Convert an image to grayscale
use pixmorph_image::errors::ImageErrors;
use pixmorph_image::image::Image;
use pixmorph_image::traits::OperationsTrait;

use crate::pixel::luminance;

/// Replace every pixel of the image with its luminance
#[derive(Copy, Clone, Debug, Default)]
pub struct Grayscale;

impl Grayscale {
    /// Create a new grayscale operation
    #[must_use]
    pub fn new() -> Grayscale {
        Grayscale
    }
}

impl OperationsTrait for Grayscale {
    fn name(&self) -> &'static str {
        "Grayscale"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        grayscale(image);
        Ok(())
    }
}

/// Convert an image to grayscale in place
pub fn grayscale(image: &mut Image) {
    for pixel in image.pixels_mut() {
        *pixel = luminance(*pixel);
    }
}

/// Return a grayscale copy of `image`, leaving it untouched
#[must_use]
pub fn grayscaled(image: &Image) -> Image {
    let mut copy = image.clone();
    grayscale(&mut copy);
    copy
}

#[cfg(test)]
mod tests {
    use nanorand::{Rng, WyRand};
    use pixmorph_core::color::Color;
    use pixmorph_image::image::Image;

    use crate::grayscale::{grayscale, grayscaled};

    #[test]
    fn grayscale_is_a_fixed_point() {
        let mut rand = WyRand::new_seed(7);

        let mut image = Image::from_fn(16, 16, |_, _| {
            Color::new(rand.generate(), rand.generate(), rand.generate())
        })
        .unwrap();

        grayscale(&mut image);
        let once = image.clone();
        grayscale(&mut image);

        assert_eq!(image, once);
    }

    #[test]
    fn copy_leaves_source_alone() {
        let image = Image::fill(Color::new(10, 20, 30), 2, 3).unwrap();
        let gray = grayscaled(&image);

        assert_eq!(image[(0, 0)], Color::new(10, 20, 30));
        assert!(gray.pixels().iter().all(|c| *c == Color::gray(18)));
    }
}
