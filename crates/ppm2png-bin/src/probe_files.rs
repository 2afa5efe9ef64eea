/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::Path;

use log::info;
use ppm2png_ppm::PpmDecoder;

use crate::cmd_parsers::global_options::CmdOptions;
use crate::errors::CliErrors;
use crate::file_io::open_input;
use crate::serde::Metadata;

/// Read the header of `path` and render it as pretty JSON
///
/// Only the first three lines of the file are consumed.
pub fn probe_file(path: &Path, options: &CmdOptions) -> Result<String, CliErrors> {
    let reader = open_input(path)?;
    let size = reader
        .get_ref()
        .metadata()
        .map_err(|err| CliErrors::InputOpenFailure(path.to_path_buf(), err))?
        .len();

    let mut decoder = PpmDecoder::new_with_options(options.decoder_options(), reader);
    let header = decoder
        .read_headers()
        .map_err(|err| CliErrors::Decode(path.to_path_buf(), err))?;

    info!("Probed {:?}: {:?}", path, header);

    let metadata = Metadata::new(path.as_os_str().to_os_string(), size, &header);

    Ok(serde_json::to_string_pretty(&metadata)?)
}
