/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Morph one image into another
//!
//! A morph of `n` steps produces `n + 1` frames, frame `k` being
//! `blend_images(source, target, k / n)`. The target is first scaled to
//! the source dimensions when the two differ.
//!
//! Since `blend_images` weights its first image by alpha, the first frame
//! (alpha 0.0) equals the target and the last frame (alpha 1.0) equals
//! the source.
use std::borrow::Cow;
use std::time::{Duration, Instant};

use pixmorph_core::log::{info, trace};
use pixmorph_image::errors::ImageErrors;
use pixmorph_image::image::Image;
use pixmorph_image::traits::Renderer;

use crate::blend::blend_into;
use crate::resize::scale;

/// Pause between two frames unless configured otherwise
pub const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(5);

/// A morph from a source image to a target image
///
/// # Example
/// ```
/// use pixmorph_core::color::Color;
/// use pixmorph_image::image::Image;
/// use pixmorph_imageprocs::morph::Morph;
///
/// let source = Image::fill(Color::WHITE, 2, 2).unwrap();
/// let target = Image::fill(Color::BLACK, 1, 1).unwrap();
///
/// let morph = Morph::new(&source, &target, 4).unwrap();
/// let alphas: Vec<f64> = morph.frames().map(|(alpha, _)| alpha).collect();
///
/// assert_eq!(alphas, [0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
#[derive(Clone, Debug)]
pub struct Morph<'a> {
    source:      &'a Image,
    target:      Cow<'a, Image>,
    steps:       usize,
    frame_delay: Duration
}

impl<'a> Morph<'a> {
    /// Create a new morph of `steps` steps
    ///
    /// The target is scaled to the source dimensions here, once.
    ///
    /// # Errors
    /// `steps` is zero
    pub fn new(source: &'a Image, target: &'a Image, steps: usize) -> Result<Morph<'a>, ImageErrors> {
        if steps == 0 {
            return Err(ImageErrors::invalid_argument(
                "A morph needs at least one step"
            ));
        }
        let (width, height) = source.dimensions();

        let target = if target.dimensions() == (width, height) {
            Cow::Borrowed(target)
        } else {
            trace!(
                "Scaling target from {:?} to {width}x{height}",
                target.dimensions()
            );
            Cow::Owned(scale(target, width, height)?)
        };

        Ok(Morph {
            source,
            target,
            steps,
            frame_delay: DEFAULT_FRAME_DELAY
        })
    }

    /// Set the pause between two rendered frames
    #[must_use]
    pub fn set_frame_delay(mut self, delay: Duration) -> Morph<'a> {
        self.frame_delay = delay;
        self
    }

    /// Number of steps, one less than the number of frames
    pub const fn steps(&self) -> usize {
        self.steps
    }

    /// Pause between two rendered frames
    pub const fn frame_delay(&self) -> Duration {
        self.frame_delay
    }

    /// The target, already scaled to the source dimensions
    pub fn target(&self) -> &Image {
        &self.target
    }

    /// Iterate over `(alpha, frame)` pairs without rendering them
    pub fn frames(&self) -> Frames<'_> {
        Frames {
            source: self.source,
            target: &self.target,
            steps:  self.steps,
            next:   0
        }
    }

    /// Hand every frame to `renderer`, pausing between frames
    ///
    /// The renderer canvas is set up once with the source image
    ///
    /// # Errors
    /// The renderer fails, remaining frames are not rendered
    pub fn run<R: Renderer>(&self, mut renderer: R) -> Result<(), ImageErrors> {
        let (width, height) = self.source.dimensions();

        info!(
            "Morphing a {width}x{height} image in {} steps",
            self.steps
        );
        let start = Instant::now();

        renderer.set_canvas(self.source)?;

        for (alpha, frame) in self.frames() {
            trace!("Rendering frame with alpha {alpha:.3}");

            renderer.render(&frame)?;
            renderer.pause(self.frame_delay);
        }

        trace!("Finished morph in {} ms", start.elapsed().as_millis());

        Ok(())
    }
}

/// Iterator over the frames of a [`Morph`]
///
/// Frames are computed lazily, one per call to `next`
pub struct Frames<'m> {
    source: &'m Image,
    target: &'m Image,
    steps:  usize,
    next:   usize
}

impl Iterator for Frames<'_> {
    type Item = (f64, Image);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next > self.steps {
            return None;
        }
        let alpha = self.next as f64 / self.steps as f64;
        self.next += 1;

        let mut frame = self.source.clone();
        blend_into(&mut frame, self.target, alpha);

        Some((alpha, frame))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.steps + 1).saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Frames<'_> {}

/// Morph `source` into `target` in `steps` steps, rendering every frame
///
/// Frames are separated by [`DEFAULT_FRAME_DELAY`], use [`Morph`] to
/// configure the delay or to collect frames without a renderer.
///
/// # Errors
/// - `steps` is zero
/// - The renderer fails
pub fn morph<R: Renderer>(
    source: &Image, target: &Image, steps: usize, renderer: R
) -> Result<(), ImageErrors> {
    Morph::new(source, target, steps)?.run(renderer)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use nanorand::{Rng, WyRand};
    use pixmorph_core::color::Color;
    use pixmorph_image::errors::ImageErrors;
    use pixmorph_image::image::Image;
    use pixmorph_image::render::{NullRenderer, RecordingRenderer};

    use crate::blend::blend_images;
    use crate::morph::{morph, Morph, DEFAULT_FRAME_DELAY};
    use crate::resize::scale;

    fn random_image(rand: &mut WyRand, width: usize, height: usize) -> Image {
        Image::from_fn(width, height, |_, _| {
            Color::new(rand.generate(), rand.generate(), rand.generate())
        })
        .unwrap()
    }

    #[test]
    fn zero_steps_is_rejected() {
        let image = Image::fill(Color::BLACK, 1, 1).unwrap();

        assert!(matches!(
            morph(&image, &image, 0, NullRenderer),
            Err(ImageErrors::InvalidArgument(_))
        ));
    }

    #[test]
    fn two_steps_render_three_frames() {
        let mut rand = WyRand::new_seed(2);
        let source = random_image(&mut rand, 4, 3);
        let target = random_image(&mut rand, 4, 3);

        let mut renderer = RecordingRenderer::new();
        morph(&source, &target, 2, &mut renderer).unwrap();

        let expected: Vec<Image> = [0.0, 0.5, 1.0]
            .iter()
            .map(|alpha| blend_images(&source, &target, *alpha).unwrap())
            .collect();

        assert_eq!(renderer.canvas(), Some((4, 3)));
        assert_eq!(renderer.frames(), expected);
        assert_eq!(renderer.frames()[0], target);
        assert_eq!(renderer.frames()[2], source);
        assert_eq!(renderer.pauses(), [DEFAULT_FRAME_DELAY; 3]);
    }

    #[test]
    fn target_is_scaled_to_source() {
        let mut rand = WyRand::new_seed(9);
        let source = random_image(&mut rand, 6, 2);
        let target = random_image(&mut rand, 3, 5);

        let morph = Morph::new(&source, &target, 3).unwrap();
        let scaled = scale(&target, 6, 2).unwrap();

        assert_eq!(morph.target(), &scaled);

        let frames: Vec<(f64, Image)> = morph.frames().collect();

        assert_eq!(frames.len(), 4);
        for (alpha, frame) in frames {
            assert_eq!(frame, blend_images(&source, &scaled, alpha).unwrap());
        }
    }

    #[test]
    fn frame_delay_is_forwarded() {
        let image = Image::fill(Color::WHITE, 1, 1).unwrap();
        let mut renderer = RecordingRenderer::new();

        Morph::new(&image, &image, 1)
            .unwrap()
            .set_frame_delay(Duration::ZERO)
            .run(&mut renderer)
            .unwrap();

        assert_eq!(renderer.pauses(), [Duration::ZERO; 2]);
    }

    #[test]
    fn frames_report_exact_size() {
        let image = Image::fill(Color::WHITE, 1, 1).unwrap();
        let morph = Morph::new(&image, &image, 10).unwrap();

        let mut frames = morph.frames();
        assert_eq!(frames.len(), 11);

        frames.next();
        assert_eq!(frames.len(), 10);
    }
}
