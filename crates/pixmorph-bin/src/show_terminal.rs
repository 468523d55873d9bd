/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Write;

use log::trace;
use pixmorph_image::errors::ImageErrors;
use pixmorph_image::image::Image;
use pixmorph_image::traits::Renderer;

const CLEAR_SCREEN: &str = "\x1b[2J";
const CURSOR_HOME: &str = "\x1b[H";
const RESET: &str = "\x1b[0m";

/// Draws images on a terminal supporting 24 bit colors
///
/// Every pixel becomes a cell two characters wide, so pixels
/// look roughly square. Frames are drawn over each other by
/// moving the cursor home before each one.
pub struct AnsiRenderer<W: Write> {
    writer: W
}

impl<W: Write> AnsiRenderer<W> {
    pub fn new(writer: W) -> AnsiRenderer<W> {
        AnsiRenderer { writer }
    }
}

impl<W: Write> Renderer for AnsiRenderer<W> {
    fn set_canvas(&mut self, image: &Image) -> Result<(), ImageErrors> {
        trace!("Setting up a {:?} terminal canvas", image.dimensions());

        write!(self.writer, "{CLEAR_SCREEN}")?;
        Ok(())
    }

    fn render(&mut self, image: &Image) -> Result<(), ImageErrors> {
        let mut frame = String::with_capacity(image.pixels().len() * 24);

        frame.push_str(CURSOR_HOME);

        for row in image.rows() {
            for pixel in row {
                frame.push_str(&format!(
                    "\x1b[48;2;{};{};{}m  ",
                    pixel.red(),
                    pixel.green(),
                    pixel.blue()
                ));
            }
            frame.push_str(RESET);
            frame.push('\n');
        }
        self.writer.write_all(frame.as_bytes())?;
        self.writer.flush()?;

        Ok(())
    }
}
