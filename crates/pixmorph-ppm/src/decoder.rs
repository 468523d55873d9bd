/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use pixmorph_core::bytestream::ByteReader;
use pixmorph_core::color::Color;
use pixmorph_core::log::{info, trace, warn};
use pixmorph_core::options::DecoderOptions;

use crate::errors::PPMDecodeErrors;

/// An instance of a plain PPM decoder
///
/// The decoder reads the header `magic width height max_value` followed by
/// `width*height` RGB triples, all as whitespace separated decimal tokens.
pub struct PPMDecoder<'a> {
    width:           usize,
    height:          usize,
    decoded_headers: bool,
    reader:          ByteReader<'a>,
    options:         DecoderOptions
}

impl<'a> PPMDecoder<'a> {
    /// Create a new ppm decoder with default options
    ///
    /// # Arguments
    /// - data: PPM encoded pixels
    ///
    /// # Example
    /// ```
    /// use pixmorph_ppm::PPMDecoder;
    /// let mut decoder = PPMDecoder::new(b"NOT VALID PPM");
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new(data: &'a [u8]) -> PPMDecoder<'a> {
        PPMDecoder::new_with_options(data, DecoderOptions::default())
    }

    /// Create a new PPM decoder with the specified options
    ///
    /// # Arguments
    /// - data: PPM encoded data.
    /// - options: Modified options for the decoder
    pub fn new_with_options(data: &'a [u8], options: DecoderOptions) -> PPMDecoder<'a> {
        PPMDecoder {
            width: 0,
            height: 0,
            decoded_headers: false,
            reader: ByteReader::new(data),
            options
        }
    }

    /// Read PPM headers and store them in internal state
    ///
    /// Calling this more than once is a no-op.
    ///
    /// # Errors
    /// - The stream ends before all four header values are read
    /// - Width, height or max value is not a decimal integer
    /// - Width or height is zero or above the configured limits
    /// - `width*height*3` does not fit in a `usize`
    pub fn decode_headers(&mut self) -> Result<(), PPMDecodeErrors> {
        if self.decoded_headers {
            return Ok(());
        }
        skip_spaces(&mut self.reader);

        if self.reader.eof() {
            return Err(PPMDecodeErrors::InvalidHeader(
                "stream contains no data".to_string()
            ));
        }
        // the magic is read but not interpreted
        let magic = get_bytes_until_whitespace(&mut self.reader);
        trace!("Magic: {}", String::from_utf8_lossy(magic));

        let width = self.read_header_value("width")?;
        let height = self.read_header_value("height")?;
        // likewise, samples are never rescaled by the max value
        let max_value = self.read_header_value("max value")?;

        if width == 0 || height == 0 {
            return Err(PPMDecodeErrors::ZeroDimensions(width, height));
        }
        if width > self.options.get_max_width() {
            return Err(PPMDecodeErrors::LargeDimensions(
                self.options.get_max_width(),
                width
            ));
        }
        if height > self.options.get_max_height() {
            return Err(PPMDecodeErrors::LargeDimensions(
                self.options.get_max_height(),
                height
            ));
        }
        // limits may be raised up to usize::MAX, so the sample count can still overflow
        if width
            .checked_mul(height)
            .and_then(|pixels| pixels.checked_mul(3))
            .is_none()
        {
            return Err(PPMDecodeErrors::OverflowingDimensions(width, height));
        }

        info!("Width: {}, height: {}", width, height);
        trace!("Max value: {}", max_value);

        self.width = width;
        self.height = height;
        self.decoded_headers = true;

        Ok(())
    }

    /// Return image dimensions as `(width, height)` or none if headers
    /// are not decoded
    pub const fn dimensions(&self) -> Option<(usize, usize)> {
        if self.decoded_headers {
            Some((self.width, self.height))
        } else {
            None
        }
    }

    /// Decode a ppm encoded buffer and return its pixels in row major order
    ///
    /// Nothing is returned unless every pixel was read.
    ///
    /// # Errors
    /// - Any header error, see [`decode_headers`](Self::decode_headers)
    /// - A sample is not a decimal integer or is larger than 255
    /// - The stream ends before `width*height*3` samples
    /// - In strict mode, the stream has tokens after the last sample
    pub fn decode(&mut self) -> Result<Vec<Color>, PPMDecodeErrors> {
        self.decode_headers()?;

        // checked in decode_headers
        let num_pixels = self.width * self.height;
        let expected = num_pixels * 3;
        // a pixel takes at least six bytes, don't trust the header for the allocation
        let capacity = num_pixels.min(self.reader.remaining() / 6 + 1);

        let mut pixels = Vec::with_capacity(capacity);
        let mut found = 0;

        for _ in 0..num_pixels {
            let mut rgb = [0_u8; 3];

            for sample in &mut rgb {
                match self.read_integer()? {
                    Some((value, position)) => {
                        *sample = u8::try_from(value)
                            .map_err(|_| PPMDecodeErrors::SampleOutOfRange(value, position))?;
                        found += 1;
                    }
                    None => return Err(PPMDecodeErrors::NotEnoughData(expected, found))
                }
            }
            pixels.push(Color::from(rgb));
        }

        skip_spaces(&mut self.reader);

        if !self.reader.eof() {
            if self.options.get_strict_mode() {
                return Err(PPMDecodeErrors::TrailingData(self.reader.get_position()));
            }
            warn!(
                "Ignoring {} bytes after the last sample",
                self.reader.remaining()
            );
        }

        Ok(pixels)
    }

    fn read_header_value(&mut self, name: &'static str) -> Result<usize, PPMDecodeErrors> {
        match self.read_integer()? {
            Some((value, _)) => Ok(value),
            None => Err(PPMDecodeErrors::InvalidHeader(format!(
                "stream ended before the image {name}"
            )))
        }
    }

    /// Read the next token as a decimal integer
    ///
    /// Returns the value and the offset it started at, or `None`
    /// if the stream has no more tokens.
    fn read_integer(&mut self) -> Result<Option<(usize, usize)>, PPMDecodeErrors> {
        skip_spaces(&mut self.reader);

        if self.reader.eof() {
            return Ok(None);
        }
        let position = self.reader.get_position();
        let token = get_bytes_until_whitespace(&mut self.reader);

        let invalid =
            || PPMDecodeErrors::InvalidToken(String::from_utf8_lossy(token).into_owned(), position);

        let mut value = 0_usize;

        for byte in token {
            if !byte.is_ascii_digit() {
                return Err(invalid());
            }
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(usize::from(byte - b'0')))
                .ok_or_else(invalid)?;
        }
        Ok(Some((value, position)))
    }
}

/// Skip all whitespace characters and comments
/// until one hits a character that isn't a space or
/// we reach eof
fn skip_spaces(byte_stream: &mut ByteReader) {
    while let Some(byte) = byte_stream.peek_u8() {
        if byte == b'#' {
            // skip the whole comment
            while !byte_stream.eof() && byte_stream.get_u8() != b'\n' {}
        } else if byte.is_ascii_whitespace() {
            byte_stream.skip(1);
        } else {
            break;
        }
    }
}

/// Return a reference to all bytes preceding a whitespace or a comment.
///
/// The whitespace itself is not consumed.
fn get_bytes_until_whitespace<'a>(z: &mut ByteReader<'a>) -> &'a [u8] {
    let start = z.get_position();

    while let Some(byte) = z.peek_u8() {
        if byte.is_ascii_whitespace() || byte == b'#' {
            break;
        }
        z.skip(1);
    }
    let end = z.get_position();
    // rewind back to where we started
    z.rewind(end - start);
    // then take that as a reference
    let stream = z.peek_at(0, end - start).unwrap_or_default();
    // then bump up position to indicate we read those bytes
    z.skip(end - start);
    stream
}
