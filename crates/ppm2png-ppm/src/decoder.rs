/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::{BufRead, Lines};

use log::{debug, info, trace, warn};

use crate::buffer::{Dimensions, PixelBuffer};
use crate::errors::PpmDecodeErrors;
use crate::options::DecoderOptions;

/// Magic token every P3 stream starts with
pub const PPM_MAGIC: &str = "P3";

/// Tokens on the dimensions and pixel lines are separated
/// by exactly this character, runs of it produce empty tokens.
const SEPARATOR: char = ' ';

/// Information read from the first three lines of a P3 stream
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PpmHeader {
    pub dimensions: Dimensions,
    /// Declared max colour value, `None` when the stream ended
    /// before the line. Samples are never scaled by it.
    pub max_value:  Option<i32>
}

/// An instance of a P3 decoder
///
/// The decoder reads its input line by line, exactly once,
/// and fails on the first malformed line.
pub struct PpmDecoder<R: BufRead> {
    lines:       Lines<R>,
    line_number: usize,
    header:      Option<PpmHeader>,
    options:     DecoderOptions
}

/// Convert a single sample token to a byte
///
/// # Example
/// ```
/// use ppm2png_ppm::parse_byte;
///
/// assert_eq!(parse_byte("255").unwrap(), 255);
/// assert!(parse_byte("256").is_err());
/// assert!(parse_byte("abc").is_err());
/// assert!(parse_byte("+5").is_err());
/// ```
pub fn parse_byte(token: &str) -> Result<u8, PpmDecodeErrors> {
    // samples are unsigned decimal, `parse` alone would take a leading `+`
    if !token.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(PpmDecodeErrors::BadByteValue {
            token:  token.to_string(),
            reason: "invalid digit found in string".to_string()
        });
    }
    token
        .parse::<u8>()
        .map_err(|err| PpmDecodeErrors::bad_byte(token, &err))
}

impl<R: BufRead> PpmDecoder<R> {
    /// Create a new P3 decoder with default options
    ///
    /// # Example
    /// ```
    /// use ppm2png_ppm::PpmDecoder;
    /// let mut decoder = PpmDecoder::new(&b"NOT VALID PPM"[..]);
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new(reader: R) -> PpmDecoder<R> {
        PpmDecoder::new_with_options(DecoderOptions::default(), reader)
    }

    /// Create a new P3 decoder with the specified options
    ///
    /// # Example
    /// ```
    /// use ppm2png_ppm::{DecoderOptions, PpmDecoder};
    /// let options = DecoderOptions::default().set_strict_mode(true);
    /// let mut decoder = PpmDecoder::new_with_options(options, &b"P3\n0 0\n255\n"[..]);
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new_with_options(options: DecoderOptions, reader: R) -> PpmDecoder<R> {
        PpmDecoder {
            lines: reader.lines(),
            line_number: 0,
            header: None,
            options
        }
    }

    fn next_line(&mut self) -> Result<Option<String>, PpmDecodeErrors> {
        let line = self.lines.next().transpose()?;

        if line.is_some() {
            self.line_number += 1;
        }
        Ok(line)
    }

    /// Read the magic, dimensions and max value lines
    ///
    /// Calling this more than once returns the stored header
    pub fn read_headers(&mut self) -> Result<PpmHeader, PpmDecodeErrors> {
        if let Some(header) = self.header {
            return Ok(header);
        }

        match self.next_line()? {
            Some(line) if line == PPM_MAGIC => {}
            Some(line) => {
                let msg = format!("expected {PPM_MAGIC:?} but found {line:?}");
                return Err(PpmDecodeErrors::BadHeader(msg));
            }
            None => {
                let msg = format!("expected {PPM_MAGIC:?} but the stream is empty");
                return Err(PpmDecodeErrors::BadHeader(msg));
            }
        }

        let dimensions = self.read_dimensions()?;
        info!("Width: {}, height: {}", dimensions.width, dimensions.height);

        self.check_limits(dimensions)?;

        let max_value = self.read_max_value()?;
        info!("Max value: {:?}", max_value);

        let header = PpmHeader {
            dimensions,
            max_value
        };
        self.header = Some(header);

        Ok(header)
    }

    fn read_dimensions(&mut self) -> Result<Dimensions, PpmDecodeErrors> {
        let line = match self.next_line()? {
            Some(line) => line,
            None => {
                return Err(PpmDecodeErrors::BadDimensions(
                    "missing dimensions line".to_string()
                ))
            }
        };
        let values: Vec<&str> = line.split(SEPARATOR).collect();

        if values.len() != 2 {
            let msg = format!("expected 2 values but found {}", values.len());
            return Err(PpmDecodeErrors::BadDimensions(msg));
        }

        let dimensions = Dimensions::new(parse_dimension(values[0])?, parse_dimension(values[1])?);

        if self.options.get_strict_mode() && !dimensions.is_positive() {
            let msg = format!(
                "width and height must be positive but found {}x{}",
                dimensions.width, dimensions.height
            );
            return Err(PpmDecodeErrors::BadDimensions(msg));
        }
        if !dimensions.is_positive() {
            warn!(
                "Degenerate dimensions {}x{}, image has no pixels",
                dimensions.width, dimensions.height
            );
        }
        Ok(dimensions)
    }

    fn check_limits(&self, dimensions: Dimensions) -> Result<(), PpmDecodeErrors> {
        let width = usize::try_from(dimensions.width).unwrap_or(0);
        let height = usize::try_from(dimensions.height).unwrap_or(0);

        if width > self.options.get_max_width() {
            return Err(PpmDecodeErrors::LargeDimensions(
                self.options.get_max_width(),
                width
            ));
        }
        if height > self.options.get_max_height() {
            return Err(PpmDecodeErrors::LargeDimensions(
                self.options.get_max_height(),
                height
            ));
        }
        Ok(())
    }

    fn read_max_value(&mut self) -> Result<Option<i32>, PpmDecodeErrors> {
        let line = match self.next_line()? {
            Some(line) => line,
            None if self.options.get_strict_mode() => {
                return Err(PpmDecodeErrors::BadColorDepth(
                    "missing max colour value".to_string()
                ))
            }
            None => {
                debug!("Stream ended before the max colour value");
                return Ok(None);
            }
        };

        let max_value = line
            .parse::<i32>()
            .map_err(|err| PpmDecodeErrors::BadColorDepth(format!("{line:?}: {err}")))?;

        if self.options.get_strict_mode() && !(1..=255).contains(&max_value) {
            let msg = format!("max value {max_value} is outside 1..=255");
            return Err(PpmDecodeErrors::BadColorDepth(msg));
        }
        Ok(Some(max_value))
    }

    /// Return the header or none if headers
    /// aren't decoded
    pub const fn get_header(&self) -> Option<PpmHeader> {
        self.header
    }

    /// Return image dimensions or none if headers aren't decoded
    pub fn get_dimensions(&self) -> Option<Dimensions> {
        self.header.map(|header| header.dimensions)
    }

    /// Return the declared max colour value, none if headers aren't
    /// decoded or the stream had no max value line
    pub fn get_max_value(&self) -> Option<i32> {
        self.header.and_then(|header| header.max_value)
    }

    /// Decode the stream into an RGBA8 buffer
    ///
    /// Every pixel line fills the next pixel of the buffer with
    /// an opaque alpha, pixels without a line stay `(0, 0, 0, 0)`.
    pub fn decode(&mut self) -> Result<PixelBuffer, PpmDecodeErrors> {
        let header = self.read_headers()?;
        let mut buffer = PixelBuffer::new(header.dimensions);

        while let Some(line) = self.next_line()? {
            trace!("Pixel line {}: {:?}", self.line_number, line);

            let values: Vec<&str> = line.split(SEPARATOR).collect();

            if values.len() != 3 {
                return Err(PpmDecodeErrors::BadPixelLine {
                    offset: buffer.write_offset(),
                    tokens: values.len()
                });
            }
            let r = parse_byte(values[0])?;
            let g = parse_byte(values[1])?;
            let b = parse_byte(values[2])?;

            buffer.push_rgb(r, g, b)?;
        }

        if !buffer.is_complete() {
            let expected = header.dimensions.pixel_count();
            let found = buffer.pixels_written();

            if self.options.get_strict_mode() {
                return Err(PpmDecodeErrors::Truncated { expected, found });
            }
            warn!(
                "Expected {} pixels but found {}, remaining pixels are transparent",
                expected, found
            );
        }
        debug!("Decoded {} pixels", buffer.pixels_written());

        Ok(buffer)
    }
}

fn parse_dimension(token: &str) -> Result<i32, PpmDecodeErrors> {
    token
        .parse::<i32>()
        .map_err(|err| PpmDecodeErrors::BadDimensions(format!("{token:?}: {err}")))
}
