/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by all libraries
//!
//! This crate provides a set of core routines shared
//! by the decoders, encoders and image operations under the `pixmorph` umbrella
//!
//! It currently contains
//!
//! - The 8-bit RGB [`Color`](crate::color::Color) every image is made of
//! - A byte reader used by the text decoders
//! - Image decoder and encoder options
//! - A logging shim that compiles to nothing unless the `log` feature is on
//!
//! # Features
//!  - `log`: Forward the logging macros to the `log` crate.
//!
//!  - `serde`: Enables serializing of some of the data structures
//!     present in the crate
//!
#![macro_use]

pub mod bytestream;
pub mod color;
pub mod log;
pub mod options;
