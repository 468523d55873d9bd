/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple byte reader over an in-memory buffer
//!
//! Useful for the text image readers, it's put
//! here to minimize code reuse

static ERROR_MSG: &str = "No more bytes";

/// An encapsulation of a byte stream
///
/// The lifetime parameter is from the buffer which we
/// are reading from, references returned by the reader
/// borrow from that buffer and not the reader.
pub struct ByteReader<'a> {
    /// Data stream
    stream:   &'a [u8],
    position: usize
}

impl<'a> ByteReader<'a> {
    /// Create a new reader positioned at the start of `buf`
    pub const fn new(buf: &'a [u8]) -> ByteReader<'a> {
        ByteReader {
            stream:   buf,
            position: 0
        }
    }

    /// Skip `n` bytes ahead of the stream.
    ///
    /// Skipping past the end is allowed, subsequent reads see
    /// an exhausted stream.
    pub fn skip(&mut self, bytes: usize) {
        self.position = self.position.saturating_add(bytes);
    }

    /// Move the position `bytes` back, stopping at the start of the stream
    pub fn rewind(&mut self, bytes: usize) {
        self.position = self.position.saturating_sub(bytes);
    }

    /// Return true if there are no more bytes to read
    pub const fn eof(&self) -> bool {
        self.position >= self.stream.len()
    }

    /// Number of bytes not yet read
    pub const fn remaining(&self) -> usize {
        // Must be saturating to prevent underflow
        self.stream.len().saturating_sub(self.position)
    }

    /// Current position in the stream
    pub const fn get_position(&self) -> usize {
        self.position
    }

    /// Read a single byte, returning 0 if the stream is exhausted
    pub fn get_u8(&mut self) -> u8 {
        self.get_u8_err().unwrap_or(0)
    }

    /// Read a single byte or error out if the stream is exhausted
    pub fn get_u8_err(&mut self) -> Result<u8, &'static str> {
        match self.stream.get(self.position) {
            Some(byte) => {
                self.position += 1;
                Ok(*byte)
            }
            None => Err(ERROR_MSG)
        }
    }

    /// Look at the next byte without consuming it
    pub fn peek_u8(&self) -> Option<u8> {
        self.stream.get(self.position).copied()
    }

    /// Return `num_bytes` bytes starting `position` bytes from the current
    /// position without consuming them
    pub fn peek_at(&self, position: usize, num_bytes: usize) -> Result<&'a [u8], &'static str> {
        let start = self.position.saturating_add(position);
        let end = start.saturating_add(num_bytes);

        self.stream.get(start..end).ok_or(ERROR_MSG)
    }
}
