/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsString;

use pixmorph_core::options::DecoderOptions;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Header information of a single probed file
pub struct Metadata {
    file:    OsString,
    size:    u64,
    width:   usize,
    height:  usize,
    options: DecoderOptions
}

impl Metadata {
    pub fn new(
        file: OsString, size: u64, (width, height): (usize, usize), options: DecoderOptions
    ) -> Metadata {
        Metadata {
            file,
            size,
            width,
            height,
            options
        }
    }
}

impl Serialize for Metadata {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("Metadata", 5)?;

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("size", &self.size)?;
        state.serialize_field("width", &self.width)?;
        state.serialize_field("height", &self.height)?;
        state.serialize_field("options", &self.options)?;

        state.end()
    }
}

#[cfg(test)]
mod tests {
    use pixmorph_core::options::DecoderOptions;

    use crate::serde::Metadata;

    #[test]
    fn serialize_metadata() {
        let metadata = Metadata::new("a.ppm".into(), 30, (2, 3), DecoderOptions::default());
        let value = serde_json::to_value(&metadata).unwrap();

        assert_eq!(value["file"], "a.ppm");
        assert_eq!(value["size"], 30);
        assert_eq!(value["width"], 2);
        assert_eq!(value["height"], 3);
        assert_eq!(value["options"]["max_width"], 16384);
        assert_eq!(value["options"]["strict_mode"], true);
    }
}
