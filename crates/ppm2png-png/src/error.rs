/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};

pub enum PngEncodeErrors {
    /// Width or height is zero
    ZeroDimensions(usize, usize),
    /// A side does not fit in the 32 bits PNG allows
    TooLarge(usize),
    /// Buffer length does not match `width * height * 4`
    BufferSize { expected: usize, found: usize },
    /// The png crate rejected the image or the sink failed
    Encoding(png::EncodingError)
}

impl Debug for PngEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroDimensions(width, height) => {
                write!(f, "cannot encode a {width}x{height} image")
            }
            Self::TooLarge(value) => {
                write!(f, "dimension {value} is larger than {}", u32::MAX)
            }
            Self::BufferSize { expected, found } => {
                write!(f, "expected {expected} bytes of RGBA data but found {found}")
            }
            Self::Encoding(err) => write!(f, "png encoding failed: {err}")
        }
    }
}

impl Display for PngEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(self, f)
    }
}

impl std::error::Error for PngEncodeErrors {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Encoding(err) => Some(err),
            _ => None
        }
    }
}

impl From<png::EncodingError> for PngEncodeErrors {
    fn from(err: png::EncodingError) -> Self {
        Self::Encoding(err)
    }
}
