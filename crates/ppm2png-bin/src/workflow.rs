/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::Path;

use log::{debug, info};
use ppm2png_png::PngEncoder;
use ppm2png_ppm::{PixelBuffer, PpmDecoder};

use crate::cmd_parsers::global_options::CmdOptions;
use crate::errors::CliErrors;
use crate::file_io::{open_input, write_output};

/// Convert the P3 file at `source` into a PNG at `dest`
///
/// The destination is only created once decoding and encoding
/// both succeeded, a failed conversion leaves no file behind.
pub fn convert_file(source: &Path, dest: &Path, options: &CmdOptions) -> Result<(), CliErrors> {
    verify_file_paths(source, dest)?;

    let pixels = decode_file(source, options)?;
    let encoded = encode_pixels(&pixels, dest, options)?;
    // release the pixel buffer before touching the destination
    drop(pixels);

    write_output(dest, &encoded)?;

    Ok(())
}

fn verify_file_paths(source: &Path, dest: &Path) -> Result<(), CliErrors> {
    if source == dest {
        return Err(CliErrors::SamePath(source.to_path_buf()));
    }
    Ok(())
}

fn decode_file(source: &Path, options: &CmdOptions) -> Result<PixelBuffer, CliErrors> {
    info!("Decoding {:?}", source);

    // the reader is dropped, closing the file, when this scope ends
    let reader = open_input(source)?;
    let mut decoder = PpmDecoder::new_with_options(options.decoder_options(), reader);

    decoder
        .decode()
        .map_err(|err| CliErrors::Decode(source.to_path_buf(), err))
}

fn encode_pixels(pixels: &PixelBuffer, dest: &Path, options: &CmdOptions) -> Result<Vec<u8>, CliErrors> {
    let dimensions = pixels.dimensions();
    debug!(
        "Encoding {}x{} image for {:?}",
        dimensions.width, dimensions.height, dest
    );

    // negative sides become zero, which the encoder rejects
    let width = usize::try_from(dimensions.width).unwrap_or(0);
    let height = usize::try_from(dimensions.height).unwrap_or(0);

    PngEncoder::new(pixels.as_bytes(), options.encoder_options(width, height))
        .encode_to_vec()
        .map_err(|err| CliErrors::EncodeFailure(dest.to_path_buf(), err))
}
