/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! An ASCII PPM (P3) decoder
//!
//! The decoder understands the line oriented subset of P3 where
//! - line 1 is the magic `P3`
//! - line 2 is `<width> <height>`
//! - line 3 is the max colour value
//! - every following line is one `<r> <g> <b>` pixel
//!
//! Tokens are separated by a single space. Samples are stored as bytes
//! without scaling by the max colour value, and each pixel gets an opaque
//! alpha so the output is always RGBA8.
//!
//! # Example
//! ```
//! use ppm2png_ppm::PpmDecoder;
//!
//! let data = b"P3\n2 1\n255\n255 0 0\n0 255 0\n";
//! let mut decoder = PpmDecoder::new(&data[..]);
//! let pixels = decoder.decode().unwrap();
//!
//! assert_eq!(pixels.as_bytes(), &[255, 0, 0, 255, 0, 255, 0, 255]);
//! ```
//!
//! # Features
//!  - `serde`: Enables serializing of the header types
#![forbid(unsafe_code)]

pub use buffer::{Dimensions, PixelBuffer, OPAQUE, RGBA_COMPONENTS};
pub use decoder::{parse_byte, PpmDecoder, PpmHeader, PPM_MAGIC};
pub use errors::PpmDecodeErrors;
pub use options::DecoderOptions;

mod buffer;
mod decoder;
mod errors;
mod options;
mod serde;
