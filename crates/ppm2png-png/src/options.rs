/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Encoder options

/// Deflate effort used when compressing image data
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Compression {
    Fast,
    #[default]
    Default,
    Best
}

impl Compression {
    pub(crate) const fn to_png(self) -> png::Compression {
        match self {
            Compression::Fast => png::Compression::Fast,
            Compression::Default => png::Compression::Default,
            Compression::Best => png::Compression::Best
        }
    }
}

/// Row filter applied before compression
///
/// `Adaptive` picks a filter per scanline, the rest use one
/// filter for the whole image.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum FilterMethod {
    None,
    Sub,
    Up,
    Avg,
    Paeth,
    #[default]
    Adaptive
}

impl FilterMethod {
    pub(crate) const fn to_png(self) -> (png::FilterType, png::AdaptiveFilterType) {
        use png::AdaptiveFilterType::{Adaptive, NonAdaptive};
        use png::FilterType;

        match self {
            FilterMethod::None => (FilterType::NoFilter, NonAdaptive),
            FilterMethod::Sub => (FilterType::Sub, NonAdaptive),
            FilterMethod::Up => (FilterType::Up, NonAdaptive),
            FilterMethod::Avg => (FilterType::Avg, NonAdaptive),
            FilterMethod::Paeth => (FilterType::Paeth, NonAdaptive),
            FilterMethod::Adaptive => (FilterType::Sub, Adaptive)
        }
    }
}

/// Options for [`crate::PngEncoder`]
///
/// Output is always 8 bit RGBA.
#[derive(Debug, Copy, Clone)]
pub struct EncoderOptions {
    width:       usize,
    height:      usize,
    compression: Compression,
    filter:      FilterMethod
}

impl EncoderOptions {
    /// Create options for a `width` x `height` image with
    /// default compression and adaptive filtering
    pub const fn new(width: usize, height: usize) -> EncoderOptions {
        EncoderOptions {
            width,
            height,
            compression: Compression::Default,
            filter: FilterMethod::Adaptive
        }
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub const fn compression(&self) -> Compression {
        self.compression
    }

    pub const fn filter(&self) -> FilterMethod {
        self.filter
    }

    pub fn set_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn set_height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    pub fn set_compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    pub fn set_filter(mut self, filter: FilterMethod) -> Self {
        self.filter = filter;
        self
    }
}
