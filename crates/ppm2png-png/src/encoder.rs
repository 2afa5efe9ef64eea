/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Write;

use log::{debug, trace};

use crate::error::PngEncodeErrors;
use crate::options::EncoderOptions;

/// Bytes per RGBA8 pixel
const COMPONENTS: usize = 4;

/// Encodes a row-major RGBA8 buffer into a PNG stream
pub struct PngEncoder<'a> {
    options: EncoderOptions,
    data:    &'a [u8]
}

impl<'a> PngEncoder<'a> {
    /// Create a new encoder for `data`
    ///
    /// `data` must hold `width * height * 4` bytes, this is
    /// checked when encoding.
    pub fn new(data: &'a [u8], options: EncoderOptions) -> PngEncoder<'a> {
        PngEncoder { options, data }
    }

    /// Check dimensions and buffer size, returning the
    /// dimensions as PNG wants them
    fn validate(&self) -> Result<(u32, u32), PngEncodeErrors> {
        let width = self.options.width();
        let height = self.options.height();

        if width == 0 || height == 0 {
            return Err(PngEncodeErrors::ZeroDimensions(width, height));
        }
        let png_width = u32::try_from(width).map_err(|_| PngEncodeErrors::TooLarge(width))?;
        let png_height = u32::try_from(height).map_err(|_| PngEncodeErrors::TooLarge(height))?;

        let expected = width
            .checked_mul(height)
            .and_then(|size| size.checked_mul(COMPONENTS))
            .ok_or(PngEncodeErrors::TooLarge(width.max(height)))?;

        if self.data.len() != expected {
            return Err(PngEncodeErrors::BufferSize {
                expected,
                found: self.data.len()
            });
        }
        Ok((png_width, png_height))
    }

    /// Encode the image, writing the complete PNG stream to `sink`
    ///
    /// Nothing is written if the buffer does not match the dimensions.
    pub fn encode<W: Write>(&self, sink: W) -> Result<(), PngEncodeErrors> {
        let (width, height) = self.validate()?;
        let (filter, adaptive) = self.options.filter().to_png();

        debug!(
            "Encoding {}x{} RGBA image, compression {:?}, filter {:?}",
            width,
            height,
            self.options.compression(),
            self.options.filter()
        );

        let mut encoder = png::Encoder::new(sink, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(self.options.compression().to_png());
        encoder.set_filter(filter);
        encoder.set_adaptive_filter(adaptive);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(self.data)?;
        writer.finish()?;

        trace!("Finished writing PNG stream");

        Ok(())
    }

    /// Encode the image into a new vector
    pub fn encode_to_vec(&self) -> Result<Vec<u8>, PngEncodeErrors> {
        let mut out = Vec::with_capacity(self.data.len() / 2 + 64);
        self.encode(&mut out)?;

        Ok(out)
    }
}
