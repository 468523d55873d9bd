/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during image processing
use std::fmt::{Debug, Display, Formatter};
use std::io;

/// All possible image errors that can occur.
///
/// Every error is fatal to the operation that raised it,
/// no partially built image is ever returned alongside one.
pub enum ImageErrors {
    /// Malformed or truncated input while decoding
    FormatError(String),
    /// Two images that must share dimensions don't,
    /// expected `(width, height)` and found `(width, height)`
    DimensionMismatch((usize, usize), (usize, usize)),
    /// A parameter outside the range an operation accepts
    InvalidArgument(String),
    /// A pipeline was asked to run operations without an image
    NoImageForOperations,
    /// Encoding failed
    EncodeErrors(String),
    /// Reading, writing or rendering failed
    IoErrors(io::Error)
}

impl ImageErrors {
    /// Shorthand for an [`InvalidArgument`](Self::InvalidArgument) error
    pub fn invalid_argument<T: Into<String>>(reason: T) -> ImageErrors {
        ImageErrors::InvalidArgument(reason.into())
    }
}

impl Display for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FormatError(reason) => write!(f, "Malformed image data: {reason}"),
            Self::DimensionMismatch(expected, found) => {
                write!(
                    f,
                    "Dimensions mismatch, expected {}x{} but found {}x{}",
                    expected.0, expected.1, found.0, found.1
                )
            }
            Self::InvalidArgument(reason) => write!(f, "Invalid argument: {reason}"),
            Self::NoImageForOperations => {
                write!(f, "No image found for which we can execute operations")
            }
            Self::EncodeErrors(reason) => write!(f, "Could not encode image: {reason}"),
            Self::IoErrors(err) => write!(f, "I/O error: {err}")
        }
    }
}

impl Debug for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{self}")
    }
}

impl std::error::Error for ImageErrors {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IoErrors(err) => Some(err),
            _ => None
        }
    }
}

impl From<io::Error> for ImageErrors {
    fn from(err: io::Error) -> Self {
        ImageErrors::IoErrors(err)
    }
}

impl From<pixmorph_ppm::PPMDecodeErrors> for ImageErrors {
    fn from(from: pixmorph_ppm::PPMDecodeErrors) -> Self {
        ImageErrors::FormatError(format!("ppm: {from}"))
    }
}

impl From<pixmorph_ppm::PPMEncodeErrors> for ImageErrors {
    fn from(error: pixmorph_ppm::PPMEncodeErrors) -> Self {
        match error {
            pixmorph_ppm::PPMEncodeErrors::IOErrors(err) => ImageErrors::IoErrors(err),
            err => ImageErrors::EncodeErrors(format!("ppm: {err}"))
        }
    }
}
