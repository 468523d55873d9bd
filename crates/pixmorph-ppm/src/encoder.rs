/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Write;

use pixmorph_core::color::Color;

use crate::errors::PPMEncodeErrors;

/// A plain PPM encoder
///
/// Writes a `P3` header with a max value of 255, then one line
/// per image row of space separated samples.
pub struct PPMEncoder<'a, W: Write> {
    writer: &'a mut W
}

impl<'a, W: Write> PPMEncoder<'a, W> {
    /// Create a new PPM encoder that writes to `writer`
    pub fn new(writer: &'a mut W) -> PPMEncoder<'a, W> {
        Self { writer }
    }

    fn write_headers(&mut self, width: usize, height: usize) -> Result<usize, PPMEncodeErrors> {
        let header = format!("P3\n{width} {height}\n255\n");

        self.writer.write_all(header.as_bytes())?;

        Ok(header.len())
    }

    /// Encode `pixels` as a plain PPM file
    ///
    /// Returns the number of bytes written
    ///
    /// # Errors
    /// - `pixels.len()` is not `width*height`, or either dimension is zero
    /// - The underlying writer fails
    pub fn encode(
        &mut self, width: usize, height: usize, pixels: &[Color]
    ) -> Result<usize, PPMEncodeErrors> {
        if width == 0 || height == 0 {
            return Err(PPMEncodeErrors::Static("Image dimensions must be non-zero"));
        }
        if width * height != pixels.len() {
            return Err(PPMEncodeErrors::WrongLength(width * height, pixels.len()));
        }
        let mut written = self.write_headers(width, height)?;

        let mut line = String::with_capacity(width * 12);

        for row in pixels.chunks_exact(width) {
            line.clear();

            for (i, pixel) in row.iter().enumerate() {
                if i != 0 {
                    line.push(' ');
                }
                line.push_str(&format!(
                    "{} {} {}",
                    pixel.red(),
                    pixel.green(),
                    pixel.blue()
                ));
            }
            line.push('\n');

            self.writer.write_all(line.as_bytes())?;
            written += line.len();
        }
        self.writer.flush()?;

        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use pixmorph_core::color::Color;

    use crate::{PPMEncodeErrors, PPMEncoder};

    #[test]
    fn one_line_per_row() {
        let pixels = [
            Color::new(0, 1, 2),
            Color::new(3, 4, 5),
            Color::new(255, 255, 255),
            Color::new(9, 8, 7)
        ];
        let mut out = vec![];
        let size = PPMEncoder::new(&mut out).encode(2, 2, &pixels).unwrap();

        assert_eq!(out, b"P3\n2 2\n255\n0 1 2 3 4 5\n255 255 255 9 8 7\n");
        assert_eq!(size, out.len());
    }

    #[test]
    fn wrong_pixel_count() {
        let mut out = vec![];
        let err = PPMEncoder::new(&mut out)
            .encode(2, 2, &[Color::BLACK])
            .unwrap_err();

        assert!(matches!(err, PPMEncodeErrors::WrongLength(4, 1)));
        assert!(out.is_empty());
    }
}
