/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Renderers shipped with the library
//!
//! - [`NullRenderer`]: drops every frame
//! - [`RecordingRenderer`]: keeps every frame in memory
//! - [`TextRenderer`]: prints pixels as `(r,g,b)` triplets
use std::io::Write;
use std::time::Duration;

use crate::errors::ImageErrors;
use crate::image::Image;
use crate::traits::Renderer;

/// Map an image row to a drawing surface row for surfaces whose
/// origin is the bottom left corner
///
/// Row 0 of an image is the top, so it lands on surface row `height - 1`.
///
/// # Example
/// ```
/// use pixmorph_image::render::canvas_row;
///
/// assert_eq!(canvas_row(3, 0), 2);
/// assert_eq!(canvas_row(3, 2), 0);
/// ```
pub const fn canvas_row(height: usize, row: usize) -> usize {
    height - row - 1
}

/// A renderer that ignores every frame and never waits
#[derive(Copy, Clone, Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _: &Image) -> Result<(), ImageErrors> {
        Ok(())
    }

    fn pause(&mut self, _: Duration) {}
}

/// A renderer that stores everything it is handed without waiting
///
/// Mostly useful to inspect the frames of a morph
#[derive(Clone, Debug, Default)]
pub struct RecordingRenderer {
    canvas: Option<(usize, usize)>,
    frames: Vec<Image>,
    pauses: Vec<Duration>
}

impl RecordingRenderer {
    /// Create a renderer with no recorded frames
    pub fn new() -> RecordingRenderer {
        RecordingRenderer::default()
    }

    /// Dimensions of the last canvas set up, if any
    pub fn canvas(&self) -> Option<(usize, usize)> {
        self.canvas
    }

    /// Frames in the order they were rendered
    pub fn frames(&self) -> &[Image] {
        &self.frames
    }

    /// Every pause requested, in order
    pub fn pauses(&self) -> &[Duration] {
        &self.pauses
    }

    /// Consume the renderer returning its frames
    pub fn into_frames(self) -> Vec<Image> {
        self.frames
    }
}

impl Renderer for RecordingRenderer {
    fn set_canvas(&mut self, image: &Image) -> Result<(), ImageErrors> {
        self.canvas = Some(image.dimensions());
        Ok(())
    }

    fn render(&mut self, image: &Image) -> Result<(), ImageErrors> {
        self.frames.push(image.clone());
        Ok(())
    }

    fn pause(&mut self, duration: Duration) {
        self.pauses.push(duration);
    }
}

/// A renderer printing every pixel as an `(r,g,b)` triplet
///
/// Each image row is written on its own line, each pixel padded
/// to three digits per channel and followed by two spaces.
///
/// # Example
/// ```
/// use pixmorph_core::color::Color;
/// use pixmorph_image::image::Image;
/// use pixmorph_image::render::TextRenderer;
/// use pixmorph_image::traits::Renderer;
///
/// let image = Image::fill(Color::new(1, 20, 255), 1, 1).unwrap();
/// let mut out = vec![];
/// TextRenderer::new(&mut out).render(&image).unwrap();
///
/// assert_eq!(out, b"(  1, 20,255)  \n");
/// ```
pub struct TextRenderer<W: Write> {
    writer: W
}

impl<W: Write> TextRenderer<W> {
    /// Create a renderer writing to `writer`
    pub fn new(writer: W) -> TextRenderer<W> {
        TextRenderer { writer }
    }

    /// Return the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, image: &Image) -> Result<(), ImageErrors> {
        for row in image.rows() {
            for pixel in row {
                write!(self.writer, "{pixel}  ")?;
            }
            writeln!(self.writer)?;
        }
        self.writer.flush()?;

        Ok(())
    }

    fn pause(&mut self, _: Duration) {}
}
