/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! An image library for pixmorph
//!
//! This crate holds the [`Image`](crate::image::Image) type shared by every
//! operation, the traits operations, codecs and renderers implement, the glue
//! between images and the PPM codec, and a small pipeline to chain operations.
//!
//! # Example
//! ```
//! use pixmorph_image::codecs::ppm;
//!
//! let image = ppm::decode(b"P3 2 1 255 10 20 30 40 50 60").unwrap();
//! assert_eq!(image.dimensions(), (2, 1));
//!
//! let bytes = ppm::encode(&image).unwrap();
//! assert_eq!(ppm::decode(&bytes).unwrap(), image);
//! ```
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc
)]

pub mod codecs;
pub mod errors;
pub mod image;
pub mod pipelines;
pub mod render;
pub mod traits;
