/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Properties that should hold for any image, checked on random ones
use nanorand::{Rng, WyRand};
use pixmorph_core::color::Color;
use pixmorph_image::codecs::ppm::{decode, encode};
use pixmorph_image::errors::ImageErrors;
use pixmorph_image::image::Image;
use pixmorph_image::render::RecordingRenderer;
use pixmorph_imageprocs::blend::blend_images;
use pixmorph_imageprocs::flip::{flip_horizontal, flip_vertical};
use pixmorph_imageprocs::grayscale::grayscaled;
use pixmorph_imageprocs::morph::morph;
use pixmorph_imageprocs::resize::scale;

const ITERATIONS: usize = 30;

fn random_image(rand: &mut WyRand, width: usize, height: usize) -> Image {
    Image::from_fn(width, height, |_, _| {
        Color::new(rand.generate(), rand.generate(), rand.generate())
    })
    .unwrap()
}

fn random_dimensions(rand: &mut WyRand) -> (usize, usize) {
    (
        rand.generate_range(1_usize..=24),
        rand.generate_range(1_usize..=24)
    )
}

#[test]
fn encoding_round_trips() {
    let mut rand = WyRand::new_seed(1);

    for _ in 0..ITERATIONS {
        let (width, height) = random_dimensions(&mut rand);
        let image = random_image(&mut rand, width, height);

        assert_eq!(decode(&encode(&image).unwrap()).unwrap(), image);
    }
}

#[test]
fn flips_are_involutions() {
    let mut rand = WyRand::new_seed(2);

    for _ in 0..ITERATIONS {
        let (width, height) = random_dimensions(&mut rand);
        let image = random_image(&mut rand, width, height);

        let mut flipped = image.clone();
        flip_horizontal(&mut flipped);
        flip_horizontal(&mut flipped);
        assert_eq!(flipped, image);

        flip_vertical(&mut flipped);
        flip_vertical(&mut flipped);
        assert_eq!(flipped, image);
    }
}

#[test]
fn grayscale_is_idempotent() {
    let mut rand = WyRand::new_seed(3);

    for _ in 0..ITERATIONS {
        let (width, height) = random_dimensions(&mut rand);
        let gray = grayscaled(&random_image(&mut rand, width, height));

        assert_eq!(grayscaled(&gray), gray);
        assert!(gray
            .pixels()
            .iter()
            .all(|p| p.red() == p.green() && p.green() == p.blue()));
    }
}

#[test]
fn blend_boundaries() {
    let mut rand = WyRand::new_seed(4);

    for _ in 0..ITERATIONS {
        let (width, height) = random_dimensions(&mut rand);
        let a = random_image(&mut rand, width, height);
        let b = random_image(&mut rand, width, height);

        assert_eq!(blend_images(&a, &b, 1.0).unwrap(), a);
        assert_eq!(blend_images(&a, &b, 0.0).unwrap(), b);
        assert_eq!(
            blend_images(&a, &b, 0.5).unwrap(),
            blend_images(&b, &a, 0.5).unwrap()
        );
    }
}

#[test]
fn blend_rejects_mismatched_dimensions() {
    let a = Image::fill(Color::WHITE, 3, 2).unwrap();
    let b = Image::fill(Color::WHITE, 2, 3).unwrap();

    assert!(matches!(
        blend_images(&a, &b, 0.5),
        Err(ImageErrors::DimensionMismatch((3, 2), (2, 3)))
    ));
}

#[test]
fn scaling_to_same_size_is_identity() {
    let mut rand = WyRand::new_seed(5);

    for _ in 0..ITERATIONS {
        let (width, height) = random_dimensions(&mut rand);
        let image = random_image(&mut rand, width, height);

        assert_eq!(scale(&image, width, height).unwrap(), image);

        let (new_width, new_height) = random_dimensions(&mut rand);
        let scaled = scale(&image, new_width, new_height).unwrap();

        assert_eq!(scaled.dimensions(), (new_width, new_height));
        assert!(scaled.pixels().iter().all(|p| image.pixels().contains(p)));
    }
}

#[test]
fn morph_frames_move_from_target_to_source() {
    let mut rand = WyRand::new_seed(6);

    let source = random_image(&mut rand, 5, 4);
    let target = random_image(&mut rand, 7, 3);

    let mut renderer = RecordingRenderer::new();
    morph(&source, &target, 2, &mut renderer).unwrap();

    let frames = renderer.frames();

    assert_eq!(frames.len(), 3);
    assert_eq!(frames[0], scale(&target, 5, 4).unwrap());
    assert_eq!(frames[2], source);
}
