/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};
use std::num::ParseIntError;

/// Errors that may occur while decoding a P3 stream
///
/// Every variant is fatal, the decoder does not try to recover
/// from any of them.
pub enum PpmDecodeErrors {
    /// The first line was missing or was not `P3`
    BadHeader(String),
    /// The dimensions line had the wrong number of tokens,
    /// a token was not an integer or (strict mode) a side was not positive
    BadDimensions(String),
    /// The max colour value line was not an integer
    /// or (strict mode) was missing or out of range
    BadColorDepth(String),
    /// A pixel line did not contain exactly three tokens.
    ///
    /// `offset` is the byte offset the pixel would have been written to
    BadPixelLine { offset: usize, tokens: usize },
    /// A sample could not be converted to a byte
    BadByteValue { token: String, reason: String },
    /// More pixel lines than `width * height`
    Overflow { offset: usize, capacity: usize },
    /// Image dimensions larger than the configured limits,
    /// `(limit, found)`
    LargeDimensions(usize, usize),
    /// Strict mode: fewer pixel lines than `width * height`
    Truncated { expected: usize, found: usize },
    /// The underlying reader failed
    Io(std::io::Error)
}

impl Debug for PpmDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadHeader(val) => write!(f, "bad header, {val}"),
            Self::BadDimensions(val) => write!(f, "bad dimensions, {val}"),
            Self::BadColorDepth(val) => write!(f, "bad colour size, {val}"),
            Self::BadPixelLine { offset, tokens } => {
                write!(
                    f,
                    "bad colour size at offset {offset}, expected 3 values but found {tokens}"
                )
            }
            Self::BadByteValue { token, reason } => {
                write!(f, "failed to convert {token:?}: {reason}")
            }
            Self::Overflow { offset, capacity } => {
                write!(
                    f,
                    "too many pixels, offset {offset} is past the end of a {capacity} byte image"
                )
            }
            Self::LargeDimensions(expected, found) => {
                write!(
                    f,
                    "too large dimensions, expected a value of at most {expected} but found {found}"
                )
            }
            Self::Truncated { expected, found } => {
                write!(f, "expected {expected} pixels but found {found}")
            }
            Self::Io(err) => write!(f, "i/o error: {err}")
        }
    }
}

impl Display for PpmDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(self, f)
    }
}

impl std::error::Error for PpmDecodeErrors {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None
        }
    }
}

impl From<std::io::Error> for PpmDecodeErrors {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl PpmDecodeErrors {
    pub(crate) fn bad_byte(token: &str, err: &ParseIntError) -> Self {
        Self::BadByteValue {
            token:  token.to_string(),
            reason: err.to_string()
        }
    }
}
