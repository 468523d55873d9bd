/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};
use std::io;

/// Errors occurring during decoding
pub enum PPMDecodeErrors {
    /// The header ended before all of magic, width, height and max value were seen
    InvalidHeader(String),
    /// A token that is not a decimal integer, at the given byte offset
    InvalidToken(String, usize),
    /// A sample larger than 255, value and byte offset
    SampleOutOfRange(usize, usize),
    /// Width or height of zero
    ZeroDimensions(usize, usize),
    /// Allowed dimension, found dimension
    LargeDimensions(usize, usize),
    /// Width and height whose sample count does not fit in a `usize`
    OverflowingDimensions(usize, usize),
    /// Expected samples, found samples
    NotEnoughData(usize, usize),
    /// Data after the last sample, at the given byte offset
    TrailingData(usize)
}

impl Display for PPMDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidHeader(val) => {
                write!(f, "Invalid header, reason: {val}")
            }
            Self::InvalidToken(token, position) => {
                write!(
                    f,
                    "Invalid token {token:?} at offset {position}, expected a decimal integer"
                )
            }
            Self::SampleOutOfRange(value, position) => {
                write!(
                    f,
                    "Sample {value} at offset {position} does not fit in 8 bits"
                )
            }
            Self::ZeroDimensions(width, height) => {
                write!(
                    f,
                    "Image dimensions must be non-zero, found width={width} height={height}"
                )
            }
            Self::LargeDimensions(expected, found) => {
                write!(
                    f,
                    "Too large dimensions, expected a value less than {expected} but found {found}"
                )
            }
            Self::OverflowingDimensions(width, height) => {
                write!(
                    f,
                    "Image dimensions width={width} height={height} overflow the sample count"
                )
            }
            Self::NotEnoughData(expected, found) => {
                write!(f, "Expected {expected} samples but found {found}")
            }
            Self::TrailingData(position) => {
                write!(f, "Unexpected data after the last sample at offset {position}")
            }
        }
    }
}

impl Debug for PPMDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{self}")
    }
}

impl std::error::Error for PPMDecodeErrors {}

/// Errors occurring during encoding
pub enum PPMEncodeErrors {
    Static(&'static str),
    /// Expected pixels, found pixels
    WrongLength(usize, usize),
    IOErrors(io::Error)
}

impl From<io::Error> for PPMEncodeErrors {
    fn from(err: io::Error) -> Self {
        PPMEncodeErrors::IOErrors(err)
    }
}

impl Display for PPMEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PPMEncodeErrors::Static(errors) => write!(f, "{errors}"),
            PPMEncodeErrors::WrongLength(expected, found) => {
                write!(
                    f,
                    "Pixel count does not match dimensions, expected {expected} but found {found}"
                )
            }
            PPMEncodeErrors::IOErrors(err) => write!(f, "{err}")
        }
    }
}

impl Debug for PPMEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{self}")
    }
}

impl std::error::Error for PPMEncodeErrors {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PPMEncodeErrors::IOErrors(err) => Some(err),
            _ => None
        }
    }
}
