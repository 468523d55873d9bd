/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A single 8-bit RGB sample
use core::fmt::{Display, Formatter};

/// An immutable red, green, blue triple.
///
/// Every component is an unsigned 8 bit integer, so a color
/// can never hold a value outside `0..=255`.
///
/// Conversions from floating point (see [`Color::from_f64`]) truncate toward zero
/// and saturate at the bounds.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    r: u8,
    g: u8,
    b: u8
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    /// Create a new color from its components
    pub const fn new(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }

    /// Create a gray color, all three components set to `value`
    pub const fn gray(value: u8) -> Color {
        Color::new(value, value, value)
    }

    /// Create a color from floating point components.
    ///
    /// Each component is truncated toward zero, values below zero
    /// become 0, values above 255 become 255 and NaN becomes 0.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_f64(r: f64, g: f64, b: f64) -> Color {
        Color::new(r as u8, g as u8, b as u8)
    }

    /// Red component
    pub const fn red(&self) -> u8 {
        self.r
    }

    /// Green component
    pub const fn green(&self) -> u8 {
        self.g
    }

    /// Blue component
    pub const fn blue(&self) -> u8 {
        self.b
    }

    /// Return the components as an `[r, g, b]` array
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Color::new(r, g, b)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::new(r, g, b)
    }
}

impl From<Color> for [u8; 3] {
    fn from(color: Color) -> Self {
        color.to_array()
    }
}

/// Formats a color the way the text renderers print it,
/// i.e `( 10, 20, 30)`
impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "({:>3},{:>3},{:>3})", self.r, self.g, self.b)
    }
}
