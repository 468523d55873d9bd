/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! This module represents a single image
//!
//! An image is represented as
//!
//! - a rectangular grid of [`Color`] values
//!     - stored row major, row 0 at the top
//!         - with a width and height of at least one
//!
//! Every constructor checks those invariants, so an `Image`
//! value is never partially initialized.
use std::fs::File;
use std::io::{BufWriter, Read};
use std::ops::{Index, IndexMut};
use std::path::Path;
use std::slice::{ChunksExact, ChunksExactMut};

use pixmorph_core::color::Color;
use pixmorph_core::options::DecoderOptions;

use crate::codecs::ppm;
use crate::errors::ImageErrors;

/// Represents a single image
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Image {
    width:  usize,
    height: usize,
    pixels: Vec<Color>
}

impl Image {
    /// Create a new image from row major pixels
    ///
    /// # Errors
    /// - Width or height is zero
    /// - `width*height` overflows
    /// - `pixels.len()` is not `width*height`
    pub fn new(pixels: Vec<Color>, width: usize, height: usize) -> Result<Image, ImageErrors> {
        let num_pixels = check_dimensions(width, height)?;

        if pixels.len() != num_pixels {
            return Err(ImageErrors::InvalidArgument(format!(
                "Expected {num_pixels} pixels for a {width}x{height} image but found {}",
                pixels.len()
            )));
        }
        Ok(Image {
            width,
            height,
            pixels
        })
    }

    /// Create an image with every pixel set to `color`
    ///
    /// # Errors
    /// Width or height is zero, or `width*height` overflows
    pub fn fill(color: Color, width: usize, height: usize) -> Result<Image, ImageErrors> {
        let num_pixels = check_dimensions(width, height)?;

        Ok(Image {
            width,
            height,
            pixels: vec![color; num_pixels]
        })
    }

    /// Create an image by calling `func(row, col)` for every pixel
    ///
    /// # Errors
    /// Width or height is zero, or `width*height` overflows
    pub fn from_fn<F>(width: usize, height: usize, mut func: F) -> Result<Image, ImageErrors>
    where
        F: FnMut(usize, usize) -> Color
    {
        check_dimensions(width, height)?;

        let pixels = (0..height)
            .flat_map(|row| (0..width).map(move |col| (row, col)))
            .map(|(row, col)| func(row, col))
            .collect();

        Ok(Image {
            width,
            height,
            pixels
        })
    }

    /// Create an image from a list of rows
    ///
    /// # Errors
    /// - There are no rows or the rows are empty
    /// - Rows have different lengths
    pub fn from_rows(rows: Vec<Vec<Color>>) -> Result<Image, ImageErrors> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        check_dimensions(width, height)?;

        if let Some(pos) = rows.iter().position(|row| row.len() != width) {
            return Err(ImageErrors::InvalidArgument(format!(
                "Row {pos} has {} pixels but row 0 has {width}",
                rows[pos].len()
            )));
        }
        Ok(Image {
            width,
            height,
            pixels: rows.into_iter().flatten().collect()
        })
    }

    /// Decode a plain PPM image from a file
    ///
    /// # Errors
    /// The file can't be read or its contents are malformed
    pub fn open<P: AsRef<Path>>(file: P, options: DecoderOptions) -> Result<Image, ImageErrors> {
        let mut data = vec![];
        File::open(file)?.read_to_end(&mut data)?;

        ppm::decode_with_options(&data, options)
    }

    /// Encode this image as a plain PPM file, overwriting `file`
    /// if it exists
    ///
    /// # Errors
    /// The file can't be created or written to
    pub fn save<P: AsRef<Path>>(&self, file: P) -> Result<(), ImageErrors> {
        let writer = BufWriter::new(File::create(file)?);
        ppm::encode_to(self, writer)?;

        Ok(())
    }

    /// Get image dimensions as a tuple of (width,height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Return the pixel at `(row, col)` or `None` if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Color> {
        if row < self.height && col < self.width {
            Some(self.pixels[row * self.width + col])
        } else {
            None
        }
    }

    /// Return a mutable reference to the pixel at `(row, col)`
    /// or `None` if out of bounds
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Color> {
        if row < self.height && col < self.width {
            Some(&mut self.pixels[row * self.width + col])
        } else {
            None
        }
    }

    /// Overwrite the pixel at `(row, col)`
    ///
    /// # Errors
    /// The position is outside the image
    pub fn set(&mut self, row: usize, col: usize, color: Color) -> Result<(), ImageErrors> {
        let (width, height) = self.dimensions();

        let pixel = self.get_mut(row, col).ok_or_else(|| {
            ImageErrors::InvalidArgument(format!(
                "Position ({row},{col}) is outside a {width}x{height} image"
            ))
        })?;
        *pixel = color;

        Ok(())
    }

    /// Return a single row or `None` if out of bounds
    pub fn row(&self, row: usize) -> Option<&[Color]> {
        self.rows().nth(row)
    }

    /// Iterate over the image rows, top to bottom
    pub fn rows(&self) -> ChunksExact<'_, Color> {
        self.pixels.chunks_exact(self.width)
    }

    /// Iterate mutably over the image rows, top to bottom
    pub fn rows_mut(&mut self) -> ChunksExactMut<'_, Color> {
        self.pixels.chunks_exact_mut(self.width)
    }

    /// All pixels in row major order
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// All pixels in row major order, mutably
    ///
    /// The length of the buffer is fixed, so the image
    /// invariants can't be broken through this
    pub fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    /// Consume the image returning its pixels
    pub fn into_pixels(self) -> Vec<Color> {
        self.pixels
    }
}

/// Index by `(row, col)`
///
/// # Panics
/// If the index is out of bounds
impl Index<(usize, usize)> for Image {
    type Output = Color;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(
            row < self.height && col < self.width,
            "Index ({row},{col}) out of bounds for a {}x{} image",
            self.width,
            self.height
        );
        &self.pixels[row * self.width + col]
    }
}

impl IndexMut<(usize, usize)> for Image {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        assert!(
            row < self.height && col < self.width,
            "Index ({row},{col}) out of bounds for a {}x{} image",
            self.width,
            self.height
        );
        &mut self.pixels[row * self.width + col]
    }
}

/// Validate dimensions and return the number of pixels they hold
fn check_dimensions(width: usize, height: usize) -> Result<usize, ImageErrors> {
    if width == 0 || height == 0 {
        return Err(ImageErrors::InvalidArgument(format!(
            "Image dimensions must be at least 1x1, found {width}x{height}"
        )));
    }
    width.checked_mul(height).ok_or_else(|| {
        ImageErrors::InvalidArgument(format!(
            "Image dimensions {width}x{height} overflow the pixel count"
        ))
    })
}

#[cfg(test)]
mod tests {
    use pixmorph_core::color::Color;
    use pixmorph_core::options::DecoderOptions;

    use crate::codecs::ppm::decode_with_options;
    use crate::errors::ImageErrors;
    use crate::image::Image;

    #[test]
    fn rejects_empty_images() {
        assert!(matches!(
            Image::fill(Color::BLACK, 0, 3),
            Err(ImageErrors::InvalidArgument(_))
        ));
        assert!(matches!(
            Image::from_rows(vec![]),
            Err(ImageErrors::InvalidArgument(_))
        ));
        assert!(matches!(
            Image::new(vec![Color::BLACK; 5], 2, 2),
            Err(ImageErrors::InvalidArgument(_))
        ));
    }

    #[test]
    fn rejects_ragged_rows() {
        let rows = vec![vec![Color::BLACK; 2], vec![Color::WHITE; 3]];
        assert!(Image::from_rows(rows).is_err());
    }

    #[test]
    fn rejects_overflowing_dimensions() {
        let side = 1_usize << (usize::BITS / 2);

        assert!(matches!(
            Image::new(vec![], side, side),
            Err(ImageErrors::InvalidArgument(_))
        ));
        assert!(matches!(
            Image::fill(Color::BLACK, usize::MAX, 2),
            Err(ImageErrors::InvalidArgument(_))
        ));
        assert!(matches!(
            Image::from_fn(side, side, |_, _| Color::BLACK),
            Err(ImageErrors::InvalidArgument(_))
        ));
    }

    #[test]
    fn decode_errors_never_yield_an_image() {
        let options = DecoderOptions::default()
            .set_max_width(usize::MAX)
            .set_max_height(usize::MAX);

        for data in [
            &b"P3 4294967296 4294967296 255"[..],
            b"P3 18446744073709551615 2 255 1 2 3",
            b"P3 2 2 255 1 2 3",
            b"P3 1 1 255 1 2 3 4"
        ] {
            assert!(
                matches!(
                    decode_with_options(data, options),
                    Err(ImageErrors::FormatError(_))
                ),
                "{:?} should fail",
                String::from_utf8_lossy(data)
            );
        }
    }

    #[test]
    fn row_major_layout() {
        let image = Image::from_fn(3, 2, |row, col| Color::new(row as u8, col as u8, 0)).unwrap();

        assert_eq!(image.dimensions(), (3, 2));
        assert_eq!(image[(1, 2)], Color::new(1, 2, 0));
        assert_eq!(image.pixels()[5], Color::new(1, 2, 0));
        assert_eq!(image.row(1).unwrap()[0], Color::new(1, 0, 0));
        assert_eq!(image.rows().count(), 2);
        assert_eq!(image.get(2, 0), None);
        assert_eq!(image.get(0, 3), None);
    }

    #[test]
    fn from_rows_matches_from_fn() {
        let rows = vec![
            vec![Color::new(0, 0, 0), Color::new(0, 1, 0)],
            vec![Color::new(1, 0, 0), Color::new(1, 1, 0)],
        ];
        let a = Image::from_rows(rows).unwrap();
        let b = Image::from_fn(2, 2, |row, col| Color::new(row as u8, col as u8, 0)).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn mutate_through_index() {
        let mut image = Image::fill(Color::BLACK, 2, 2).unwrap();
        image[(0, 1)] = Color::WHITE;
        *image.get_mut(1, 0).unwrap() = Color::gray(7);
        image.set(1, 1, Color::gray(3)).unwrap();

        assert!(image.set(2, 0, Color::WHITE).is_err());
        assert_eq!(
            image.into_pixels(),
            [Color::BLACK, Color::WHITE, Color::gray(7), Color::gray(3)]
        );
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds() {
        let image = Image::fill(Color::BLACK, 2, 2).unwrap();
        let _ = image[(2, 0)];
    }
}
