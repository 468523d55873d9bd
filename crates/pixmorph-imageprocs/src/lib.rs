/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image processing routines for `pixmorph`
//!
//! This implements the pixel level operations, the image transforms
//! and the morpher that animates one image into another.
//!
//! In place transforms also implement the `OperationsTrait` defined by
//! pixmorph-image so they can be queued in a pipeline.
//!
//! # Example
//! - Flip an image and convert it to grayscale
//! ```
//! use pixmorph_core::color::Color;
//! use pixmorph_image::image::Image;
//! use pixmorph_image::traits::OperationsTrait;
//! use pixmorph_imageprocs::flip::{Flip, FlipDirection};
//! use pixmorph_imageprocs::grayscale::Grayscale;
//!
//! let mut image = Image::from_rows(vec![vec![Color::new(255, 0, 0), Color::new(0, 0, 255)]]).unwrap();
//!
//! Flip::new(FlipDirection::Horizontal).execute(&mut image).unwrap();
//! Grayscale::new().execute(&mut image).unwrap();
//!
//! assert_eq!(image.pixels(), [Color::gray(29), Color::gray(76)]);
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
    clippy::similar_names,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]

pub mod blend;
pub mod flip;
pub mod grayscale;
pub mod morph;
pub mod pixel;
pub mod resize;
