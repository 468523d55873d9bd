/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Entry point for all supported codecs the library understands
//!
//! Only plain (`P3`) PPM images are read and written, the codec
//! itself lives in `pixmorph-ppm`, this module glues it to [`Image`](crate::image::Image).
pub mod ppm;
