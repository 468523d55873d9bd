/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A plain Portable Pixmap decoder and encoder
//!
//! This crate reads and writes the ASCII flavour of the netpbm pixmap,
//! a header of whitespace separated decimal tokens
//!
//! ```text
//! P3
//! 2 1
//! 255
//! 10 20 30  40 50 60
//! ```
//!
//! followed by `width*height` red, green and blue samples in row major order.
//!
//! The magic and the maximum value are read but not interpreted, samples are taken
//! literally and must fit in 8 bits.
//!
//! # Example
//! ```
//! use pixmorph_core::color::Color;
//! use pixmorph_ppm::{PPMDecoder, PPMEncoder};
//!
//! let mut decoder = PPMDecoder::new(b"P3 2 1 255 10 20 30 40 50 60");
//! let pixels = decoder.decode().unwrap();
//!
//! assert_eq!(decoder.dimensions(), Some((2, 1)));
//! assert_eq!(pixels, [Color::new(10, 20, 30), Color::new(40, 50, 60)]);
//!
//! let mut out = vec![];
//! PPMEncoder::new(&mut out).encode(2, 1, &pixels).unwrap();
//! assert_eq!(out, b"P3\n2 1\n255\n10 20 30 40 50 60\n");
//! ```
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(clippy::module_name_repetitions, clippy::doc_markdown)]

pub use decoder::PPMDecoder;
pub use encoder::PPMEncoder;
pub use errors::{PPMDecodeErrors, PPMEncodeErrors};
pub use pixmorph_core;

mod decoder;
mod encoder;
mod errors;
