/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::errors::CliErrors;

/// Open `path` for buffered line reading
pub fn open_input(path: &Path) -> Result<BufReader<File>, CliErrors> {
    let fd = File::open(path).map_err(|err| CliErrors::InputOpenFailure(path.to_path_buf(), err))?;
    debug!("Opened {:?} for reading", path);

    Ok(BufReader::new(fd))
}

/// Create (or truncate) `path` and write `data` to it
///
/// The handle is flushed and closed before returning.
pub fn write_output(path: &Path, data: &[u8]) -> Result<(), CliErrors> {
    let file =
        File::create(path).map_err(|err| CliErrors::OutputCreateFailure(path.to_path_buf(), err))?;
    let mut writer = BufWriter::new(file);

    writer
        .write_all(data)
        .and_then(|_| writer.flush())
        .map_err(|err| CliErrors::OutputWriteFailure(path.to_path_buf(), err))?;

    debug!("Wrote {} bytes to {:?}", data.len(), path);
    Ok(())
}
