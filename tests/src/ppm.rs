/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::read;
use std::path::PathBuf;

use pixmorph_core::color::Color;
use pixmorph_core::options::DecoderOptions;
use pixmorph_image::codecs::ppm::{decode, decode_with_options, encode};
use pixmorph_image::errors::ImageErrors;
use pixmorph_image::image::Image;
use pixmorph_imageprocs::flip::flip_horizontal;
use pixmorph_imageprocs::grayscale::grayscaled;

use crate::{read_entries, sample_path, TestEntry};

pub fn ppm_path() -> PathBuf {
    sample_path().join("test-images/ppm")
}

fn open(name: &str) -> Image {
    Image::open(ppm_path().join(name), DecoderOptions::default()).unwrap()
}

#[test]
#[allow(clippy::uninlined_format_args)]
fn test_ppm() {
    let paths = read_entries("ppm.json");

    let default_path = ppm_path();
    let mut error = false;
    let mut files = Vec::new();

    for path in &paths {
        let file_name = default_path.join(&path.name);

        let file_contents = read(&file_name).unwrap();

        let result = decode_with_options(&file_contents, path.options());

        let failed = match (&result, path.error) {
            (Ok(image), false) => {
                Some(image.dimensions()) != path.width.zip(path.height)
                    || image.pixels().len() != image.width() * image.height()
            }
            (Err(ImageErrors::FormatError(_)), true) => false,
            _ => true
        };

        if failed {
            error = true;
            files.push(path.to_owned());

            let err = format!(
                "Unexpected result for file {:?}\nFound {:?}\nConfig:{:#?}",
                file_name,
                result.map(|image| image.dimensions()),
                path
            );
            eprintln!("{}\n", err);
        }
    }
    if error {
        panic!("Errors found during test decoding\n {:#?}", files);
    }
}

#[test]
fn test_ppm_reencode() {
    for path in read_entries("ppm.json").iter().filter(|entry| !entry.error) {
        let image =
            Image::open(ppm_path().join(&path.name), path.options()).unwrap();

        let encoded = encode(&image).unwrap();

        assert_eq!(decode(&encoded).unwrap(), image, "{}", path.name);
    }
}

#[test]
fn tinypic_pixels() {
    let image = open("tinypic.ppm");

    assert_eq!(image[(0, 1)], Color::new(100, 0, 0));
    assert_eq!(image[(0, 3)], Color::new(255, 0, 255));
    assert_eq!(image[(1, 1)], Color::new(0, 255, 175));
    assert_eq!(image[(2, 2)], Color::new(0, 15, 175));

    assert_eq!(grayscaled(&image)[(0, 1)], Color::gray(29));
}

#[test]
fn tinypic_flipped() {
    let mut image = open("tinypic.ppm");
    flip_horizontal(&mut image);

    assert_eq!(image[(0, 0)], Color::new(255, 0, 255));
    assert_eq!(image[(0, 2)], Color::new(100, 0, 0));
    assert_eq!(image[(1, 2)], Color::new(0, 255, 175));
    assert_eq!(image[(2, 1)], Color::new(0, 15, 175));
}

#[test]
fn comments_and_line_endings_are_whitespace() {
    let image = open("comments.ppm");

    let expected: Vec<Color> = (0..6_u8)
        .map(|i| Color::new(3 * i + 1, 3 * i + 2, 3 * i + 3))
        .collect();

    assert_eq!(image.dimensions(), (3, 2));
    assert_eq!(image.pixels(), expected);
}
