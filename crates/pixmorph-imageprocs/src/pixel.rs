/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Per pixel operations
//!
//! Both operations truncate toward zero when converting
//! back to a channel value, they never round.
use pixmorph_core::color::Color;

/// Weights of the red, green and blue channels in [`luminance`],
/// in thousandths
pub const LUMA_WEIGHTS: [u32; 3] = [299, 587, 114];

/// Return the gray color with the luminance of `color`
///
/// `lum = trunc(0.299*r + 0.587*g + 0.114*b)`
///
/// The sum is computed exactly in thousandths, so a gray color
/// is its own luminance. This differs from evaluating the formula in
/// `f64`, where rounding error truncates a few inputs one step lower,
/// e.g. `gray(2)` would become `gray(1)`.
///
/// # Example
/// ```
/// use pixmorph_core::color::Color;
/// use pixmorph_imageprocs::pixel::luminance;
///
/// assert_eq!(luminance(Color::new(10, 20, 30)), Color::gray(18));
/// ```
pub fn luminance(color: Color) -> Color {
    let [wr, wg, wb] = LUMA_WEIGHTS;

    let sum = wr * u32::from(color.red())
        + wg * u32::from(color.green())
        + wb * u32::from(color.blue());

    // weights add up to 1000, so sum / 1000 is at most 255
    Color::gray((sum / 1000) as u8)
}

/// Linearly combine two colors
///
/// Each channel is `trunc(alpha * c1 + (1 - alpha) * c2)`, so an
/// alpha of 1.0 returns `c1` and an alpha of 0.0 returns `c2`.
///
/// Alpha is not clamped, channels that leave `0..=255` saturate
/// at the nearest bound.
pub fn blend_color(c1: Color, c2: Color, alpha: f64) -> Color {
    let mix = |v1: u8, v2: u8| alpha * f64::from(v1) + (1.0 - alpha) * f64::from(v2);

    Color::from_f64(
        mix(c1.red(), c2.red()),
        mix(c1.green(), c2.green()),
        mix(c1.blue(), c2.blue())
    )
}
