/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Resize operation
use pixmorph_image::errors::ImageErrors;
use pixmorph_image::image::Image;
use pixmorph_image::traits::OperationsTrait;

/// Resampling methods understood by [`Resize`]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ResizeMethod {
    /// Pick the source pixel an output pixel falls in, no interpolation
    #[default]
    NearestNeighbor
}

/// Resize an image to a new width and height
/// using the resize method specified
#[derive(Copy, Clone, Debug)]
pub struct Resize {
    new_width:  usize,
    new_height: usize,
    method:     ResizeMethod
}

impl Resize {
    /// Create a new resize operation
    ///
    /// # Argument
    /// - new_width: The new image width
    /// - new_height: The new image height.
    /// - method: The resize method to use
    #[must_use]
    pub fn new(new_width: usize, new_height: usize, method: ResizeMethod) -> Resize {
        Resize {
            new_width,
            new_height,
            method
        }
    }
}

impl OperationsTrait for Resize {
    fn name(&self) -> &'static str {
        "Resize"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        match self.method {
            ResizeMethod::NearestNeighbor => {
                *image = scale(image, self.new_width, self.new_height)?;
            }
        }
        Ok(())
    }
}

/// Resize an image with nearest neighbor sampling, returning a new image
///
/// Output pixel `(i, j)` reads source pixel
/// `(floor(i * height / new_height), floor(j * width / new_width))`,
/// computed in `f64` and clamped to the last row and column.
///
/// # Errors
/// `new_width` or `new_height` is zero
///
/// # Example
/// ```
/// use pixmorph_core::color::Color;
/// use pixmorph_image::image::Image;
/// use pixmorph_imageprocs::resize::scale;
///
/// let image = Image::from_rows(vec![vec![Color::BLACK, Color::WHITE]]).unwrap();
/// let wide = scale(&image, 4, 2).unwrap();
///
/// assert_eq!(wide.row(1).unwrap(), [Color::BLACK, Color::BLACK, Color::WHITE, Color::WHITE]);
/// ```
pub fn scale(image: &Image, new_width: usize, new_height: usize) -> Result<Image, ImageErrors> {
    if new_width == 0 || new_height == 0 {
        return Err(ImageErrors::InvalidArgument(format!(
            "Cannot scale to {new_width}x{new_height}, dimensions must be at least 1"
        )));
    }
    let (width, height) = image.dimensions();

    let ratio_w = width as f64 / new_width as f64;
    let ratio_h = height as f64 / new_height as f64;

    let source_col = |j: usize| ((j as f64 * ratio_w) as usize).min(width - 1);
    let source_row = |i: usize| ((i as f64 * ratio_h) as usize).min(height - 1);

    Image::from_fn(new_width, new_height, |i, j| {
        image[(source_row(i), source_col(j))]
    })
}

#[cfg(test)]
mod tests {
    use nanorand::{Rng, WyRand};
    use pixmorph_core::color::Color;
    use pixmorph_image::errors::ImageErrors;
    use pixmorph_image::image::Image;
    use pixmorph_image::traits::OperationsTrait;

    use crate::resize::{scale, Resize, ResizeMethod};

    fn random_image(rand: &mut WyRand, width: usize, height: usize) -> Image {
        Image::from_fn(width, height, |_, _| {
            Color::new(rand.generate(), rand.generate(), rand.generate())
        })
        .unwrap()
    }

    #[test]
    fn scale_to_same_size_is_identity() {
        let mut rand = WyRand::new_seed(3);

        for (w, h) in [(1, 1), (3, 7), (13, 5), (64, 64)] {
            let image = random_image(&mut rand, w, h);
            assert_eq!(scale(&image, w, h).unwrap(), image);
        }
    }

    #[test]
    fn zero_targets_are_rejected() {
        let image = Image::fill(Color::WHITE, 2, 2).unwrap();

        assert!(matches!(
            scale(&image, 0, 2),
            Err(ImageErrors::InvalidArgument(_))
        ));
        assert!(matches!(
            scale(&image, 2, 0),
            Err(ImageErrors::InvalidArgument(_))
        ));
    }

    #[test]
    fn downscale_picks_nearest_pixels() {
        let image = Image::from_fn(4, 4, |row, col| Color::new(row as u8, col as u8, 0)).unwrap();
        let small = scale(&image, 2, 2).unwrap();

        assert_eq!(
            small.pixels(),
            [
                Color::new(0, 0, 0),
                Color::new(0, 2, 0),
                Color::new(2, 0, 0),
                Color::new(2, 2, 0)
            ]
        );
    }

    #[test]
    fn uneven_ratios_stay_in_bounds() {
        let mut rand = WyRand::new_seed(11);
        let image = random_image(&mut rand, 7, 3);

        let scaled = scale(&image, 5, 11).unwrap();

        assert_eq!(scaled.dimensions(), (5, 11));
        assert_eq!(scaled[(10, 4)], image[(2, 5)]);
    }

    #[test]
    fn resize_operation_replaces_image() {
        let mut image = Image::fill(Color::gray(9), 3, 3).unwrap();

        Resize::new(1, 6, ResizeMethod::NearestNeighbor)
            .execute(&mut image)
            .unwrap();

        assert_eq!(image.dimensions(), (1, 6));
        assert!(image.pixels().iter().all(|c| *c == Color::gray(9)));
    }
}
