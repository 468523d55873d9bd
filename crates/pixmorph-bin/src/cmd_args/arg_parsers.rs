/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Parse a `WIDTHxHEIGHT` pair such as `640x480`
///
/// Used as a clap value parser, so errors are plain strings
pub fn parse_dimensions(value: &str) -> Result<(usize, usize), String> {
    let (width, height) = value
        .trim()
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("Expected dimensions as WIDTHxHEIGHT, got `{value}`"))?;

    let parse = |dim: &str| -> Result<usize, String> {
        let dim = dim.trim();
        match dim.parse::<usize>() {
            Ok(0) => Err(format!("Dimensions must be at least 1, got `{value}`")),
            Ok(dim) => Ok(dim),
            Err(e) => Err(format!("Invalid dimension `{dim}`: {e}"))
        }
    };

    Ok((parse(width)?, parse(height)?))
}

/// Parse a blend weight, a finite floating point number
pub fn parse_alpha(value: &str) -> Result<f64, String> {
    let alpha = value
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("Invalid alpha `{value}`: {e}"))?;

    if !alpha.is_finite() {
        return Err(format!("Alpha must be a finite number, got `{value}`"));
    }
    Ok(alpha)
}
