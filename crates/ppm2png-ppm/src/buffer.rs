/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::errors::PpmDecodeErrors;

/// Number of bytes a single RGBA8 pixel occupies
pub const RGBA_COMPONENTS: usize = 4;

/// Alpha value appended to every decoded sample
pub const OPAQUE: u8 = 255;

/// Image dimensions as declared by the dimensions line.
///
/// Values are kept signed since the file may declare zero or
/// negative sides, such images have no pixels.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Dimensions {
    pub width:  i32,
    pub height: i32
}

impl Dimensions {
    pub const fn new(width: i32, height: i32) -> Dimensions {
        Dimensions { width, height }
    }

    /// Whether both sides are strictly positive
    pub const fn is_positive(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Number of pixels the image holds, zero for degenerate dimensions
    pub const fn pixel_count(&self) -> usize {
        if self.is_positive() {
            (self.width as usize) * (self.height as usize)
        } else {
            0
        }
    }

    /// Byte offset of pixel `(x, y)` in a row-major RGBA8 buffer
    pub const fn offset(&self, x: usize, y: usize) -> usize {
        (y * (self.width as usize) + x) * RGBA_COMPONENTS
    }
}

/// A row-major RGBA8 pixel store filled one pixel at a time.
///
/// The buffer is zeroed on creation, so pixels never written
/// read back as `(0, 0, 0, 0)`.
#[derive(Clone, Debug)]
pub struct PixelBuffer {
    dimensions: Dimensions,
    data:       Vec<u8>,
    written:    usize
}

impl PixelBuffer {
    /// Allocate a zeroed buffer for `dimensions`
    pub fn new(dimensions: Dimensions) -> PixelBuffer {
        PixelBuffer {
            dimensions,
            data: vec![0; dimensions.pixel_count() * RGBA_COMPONENTS],
            written: 0
        }
    }

    /// Write `(r, g, b, 255)` into the next unfilled pixel.
    ///
    /// Returns [`PpmDecodeErrors::Overflow`] once every pixel has been written.
    pub fn push_rgb(&mut self, r: u8, g: u8, b: u8) -> Result<(), PpmDecodeErrors> {
        let capacity = self.dimensions.pixel_count();

        if self.written >= capacity {
            return Err(PpmDecodeErrors::Overflow {
                offset:   self.written * RGBA_COMPONENTS,
                capacity: self.data.len()
            });
        }
        // capacity > 0 so width is positive
        let width = self.dimensions.width as usize;
        let offset = self
            .dimensions
            .offset(self.written % width, self.written / width);

        self.data[offset..offset + RGBA_COMPONENTS].copy_from_slice(&[r, g, b, OPAQUE]);
        self.written += 1;

        Ok(())
    }

    pub const fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Number of pixels written so far
    pub const fn pixels_written(&self) -> usize {
        self.written
    }

    /// Byte offset the next pixel will be written to
    pub const fn write_offset(&self) -> usize {
        self.written * RGBA_COMPONENTS
    }

    /// Whether every pixel of the image has been written
    pub const fn is_complete(&self) -> bool {
        self.written == self.dimensions.pixel_count()
    }

    /// Return the RGBA value at `(x, y)` or `None` if out of bounds
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if !self.dimensions.is_positive()
            || x >= self.dimensions.width as usize
            || y >= self.dimensions.height as usize
        {
            return None;
        }
        let offset = self.dimensions.offset(x, y);
        let mut rgba = [0; RGBA_COMPONENTS];
        rgba.copy_from_slice(&self.data[offset..offset + RGBA_COMPONENTS]);

        Some(rgba)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer returning the raw RGBA bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}
