/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! PNG encoding for RGBA8 pixel buffers
//!
//! This crate does not implement PNG itself, chunking, filtering and
//! deflate are handled by the [`png`] crate. What it adds is validation of
//! the buffer against the declared dimensions before anything is written,
//! and a small options type the command line can fill.
//!
//! # Example
//! ```
//! use ppm2png_png::{EncoderOptions, PngEncoder};
//!
//! let pixels = [255, 0, 0, 255, 0, 255, 0, 255];
//! let options = EncoderOptions::new(2, 1);
//! let encoded = PngEncoder::new(&pixels, options).encode_to_vec().unwrap();
//!
//! assert_eq!(&encoded[1..4], b"PNG");
//! ```
#![forbid(unsafe_code)]

pub use encoder::PngEncoder;
pub use error::PngEncodeErrors;
pub use options::{Compression, EncoderOptions, FilterMethod};

mod encoder;
mod error;
mod options;
