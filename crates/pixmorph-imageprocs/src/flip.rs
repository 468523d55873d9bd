/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Flip filter: reflect an image around one of its central axes.
//!
use pixmorph_image::errors::ImageErrors;
use pixmorph_image::image::Image;
use pixmorph_image::traits::OperationsTrait;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FlipDirection {
    /// Creates a horizontal mirror image by reflecting the pixels around the central y-axis
    ///```text
    ///old image     new image
    ///┌─────────┐   ┌──────────┐
    ///│a b c d e│   │e d c b a │
    ///│f g h i j│   │j i h g f │
    ///└─────────┘   └──────────┘
    ///```
    Horizontal,

    /// Swap the rows of the image, the top row becomes the bottom row
    ///
    /// ```text
    ///
    ///old image     new image
    /// ┌─────────┐   ┌──────────┐
    /// │a b c d e│   │f g h i j │
    /// │f g h i j│   │a b c d e │
    /// └─────────┘   └──────────┘
    /// ```
    ///
    Vertical
}

/// Flip an image to a certain direction
#[derive(Copy, Clone, Debug)]
pub struct Flip {
    flip_direction: FlipDirection
}

impl Flip {
    /// Create a new flip operation
    #[must_use]
    pub fn new(flip_direction: FlipDirection) -> Flip {
        Self { flip_direction }
    }
}

impl OperationsTrait for Flip {
    fn name(&self) -> &'static str {
        match self.flip_direction {
            FlipDirection::Horizontal => "Flip horizontal",
            FlipDirection::Vertical => "Flip vertical"
        }
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        match self.flip_direction {
            FlipDirection::Horizontal => flip_horizontal(image),
            FlipDirection::Vertical => flip_vertical(image)
        }
        Ok(())
    }
}

/// Swap column `j` with column `width - 1 - j` in every row
///
/// The middle column of an odd width image stays in place
pub fn flip_horizontal(image: &mut Image) {
    let width = image.width();
    flop(image.pixels_mut(), width);
}

/// Swap row `i` with row `height - 1 - i`
///
/// The middle row of an odd height image stays in place
pub fn flip_vertical(image: &mut Image) {
    let width = image.width();
    vertical_flip(image.pixels_mut(), width);
}

/// Flip a row major buffer on the vertical axis
///
/// ```text
///
///old image     new image
/// ┌─────────┐   ┌──────────┐
/// │a b c d e│   │f g h i j │
/// │f g h i j│   │a b c d e │
/// └─────────┘   └──────────┘
/// ```
///
pub fn vertical_flip<T: Copy>(channel: &mut [T], width: usize) {
    // split the image in half, walk the top half forwards
    // and the bottom half backwards swapping whole rows
    let rows = channel.len() / width;

    let (top, bottom) = channel.split_at_mut((rows / 2) * width);

    for (t, b) in top
        .chunks_exact_mut(width)
        .zip(bottom.rchunks_exact_mut(width))
    {
        t.swap_with_slice(b);
    }
}

/// Flop a row major buffer, reversing every row
///
///```text
///old image     new image
///┌─────────┐   ┌──────────┐
///│a b c d e│   │e d c b a │
///│f g h i j│   │j i h g f │
///└─────────┘   └──────────┘
///```
///
pub fn flop<T: Copy>(in_out_image: &mut [T], width: usize) {
    assert_eq!(
        in_out_image.len() % width,
        0,
        "Width does not evenly divide image"
    );

    for width_chunks in in_out_image.chunks_exact_mut(width) {
        width_chunks.reverse();
    }
}
