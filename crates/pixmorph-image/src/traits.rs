/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Traits implemented by decoders, encoders, operations and renderers
use std::io::Write;
use std::time::Duration;

use pixmorph_core::log::trace;

use crate::errors::ImageErrors;
use crate::image::Image;

/// Encapsulates an image decoder.
///
/// All supported image decoders must implement this trait
pub trait DecoderTrait {
    /// Decode the buffer the decoder was constructed with
    ///
    /// # Errors
    /// Any image decoding errors will be propagated to the caller.
    fn decode(&mut self) -> Result<Image, ImageErrors>;

    /// Get width and height of the image
    ///
    /// # Returns
    /// - Some(width,height)
    /// - None -> If the headers haven't been decoded yet
    fn dimensions(&self) -> Option<(usize, usize)>;

    /// Get the name of the decoder
    fn name(&self) -> &'static str;
}

/// Encapsulates an image encoder
pub trait EncoderTrait {
    /// Get the name of the encoder
    fn name(&self) -> &'static str;

    /// Encode `image`, writing the result to `sink`
    ///
    /// Returns the number of bytes written
    ///
    /// # Errors
    /// The sink fails or the encoder can't represent the image
    fn encode<W: Write>(&mut self, image: &Image, sink: W) -> Result<usize, ImageErrors>;
}

/// Anything that can be turned into an image
///
/// Used by the [`Pipeline`](crate::pipelines::Pipeline) to
/// accept both decoders and already decoded images
pub trait IntoImage {
    /// Consume this and produce an image
    ///
    /// # Errors
    /// The conversion failed, e.g. a decoder hit malformed data
    fn into_image(self) -> Result<Image, ImageErrors>;
}

impl IntoImage for Image {
    fn into_image(self) -> Result<Image, ImageErrors> {
        Ok(self)
    }
}

/// This encapsulates an image operation.
///
/// All operations that can be stored in a pipeline
/// need to implement this trait.
pub trait OperationsTrait {
    /// Get the name of this operation
    fn name(&self) -> &'static str;

    /// Carry out the operation on `image`
    ///
    /// Callers should go through [`execute`](Self::execute), this
    /// is the part every operation provides.
    ///
    /// # Errors
    /// Any operation error will be propagated to the caller
    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors>;

    /// Execute the operation on the image
    ///
    /// # Errors
    /// Any operation error will be propagated to the caller
    ///
    /// # Example
    /// ```
    /// use pixmorph_core::color::Color;
    /// use pixmorph_image::errors::ImageErrors;
    /// use pixmorph_image::image::Image;
    /// use pixmorph_image::traits::OperationsTrait;
    ///
    /// struct Invert;
    ///
    /// impl OperationsTrait for Invert {
    ///     fn name(&self) -> &'static str {
    ///         "invert"
    ///     }
    ///     fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
    ///         for pix in image.pixels_mut() {
    ///             *pix = Color::new(255 - pix.red(), 255 - pix.green(), 255 - pix.blue());
    ///         }
    ///         Ok(())
    ///     }
    /// }
    /// let mut image = Image::fill(Color::BLACK, 2, 2).unwrap();
    /// Invert.execute(&mut image).unwrap();
    /// assert_eq!(image.get(1, 1), Some(Color::WHITE));
    /// ```
    fn execute(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let (width, height) = image.dimensions();

        trace!("Running {} on a {width}x{height} image", self.name());

        self.execute_impl(image)
    }
}

/// A surface frames are drawn on
///
/// The morpher hands every frame to a renderer and waits
/// between frames through [`pause`](Self::pause), so a headless
/// renderer can skip the wait entirely.
pub trait Renderer {
    /// Prepare the drawing surface for images shaped like `image`
    ///
    /// Called once before the first frame of a morph
    ///
    /// # Errors
    /// The surface could not be set up
    fn set_canvas(&mut self, image: &Image) -> Result<(), ImageErrors> {
        let _ = image;
        Ok(())
    }

    /// Draw a single frame
    ///
    /// # Errors
    /// Drawing failed
    fn render(&mut self, image: &Image) -> Result<(), ImageErrors>;

    /// Wait between two frames, blocks the current thread by default
    fn pause(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn set_canvas(&mut self, image: &Image) -> Result<(), ImageErrors> {
        (**self).set_canvas(image)
    }

    fn render(&mut self, image: &Image) -> Result<(), ImageErrors> {
        (**self).render(image)
    }

    fn pause(&mut self, duration: Duration) {
        (**self).pause(duration);
    }
}
