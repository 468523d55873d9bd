/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![allow(unused_imports, unused)]

use std::fs::read;
use std::path::{Path, PathBuf};

use pixmorph_core::options::DecoderOptions;
use serde::Deserialize;

mod ppm;
mod properties;

#[derive(Clone, Deserialize, Debug)]
pub struct TestEntry {
    pub name:    String,
    pub width:   Option<usize>,
    pub height:  Option<usize>,
    #[serde(default)]
    pub error:   bool,
    pub strict:  Option<bool>,
    pub comment: Option<String>
}

impl TestEntry {
    pub fn options(&self) -> DecoderOptions {
        DecoderOptions::default().set_strict_mode(self.strict.unwrap_or(true))
    }
}

pub fn sample_path() -> PathBuf {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"));
    // get parent path
    path.parent().unwrap().to_owned()
}

pub fn read_entries(manifest: &str) -> Vec<TestEntry> {
    let file = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join(manifest);

    let json_file = read(file).unwrap();

    serde_json::from_slice(&json_file).unwrap()
}
