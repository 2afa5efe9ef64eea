/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};
use std::path::PathBuf;

use ppm2png_png::PngEncodeErrors;
use ppm2png_ppm::PpmDecodeErrors;

/// Every way a conversion can fail
///
/// Each variant maps to a single diagnostic line and exit code 1.
pub enum CliErrors {
    /// Fewer than two file names, holds the program name
    MissingArguments(String),
    /// Source and destination are the same path
    SamePath(PathBuf),
    InputOpenFailure(PathBuf, std::io::Error),
    /// The source was opened but its contents are malformed
    Decode(PathBuf, PpmDecodeErrors),
    EncodeFailure(PathBuf, PngEncodeErrors),
    OutputCreateFailure(PathBuf, std::io::Error),
    OutputWriteFailure(PathBuf, std::io::Error),
    /// Probe output could not be serialized
    Serialize(serde_json::Error)
}

impl Debug for CliErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingArguments(program) => {
                write!(
                    f,
                    "Missing arguments, usage: {program} <ppm-filename> <png-filename>"
                )
            }
            Self::SamePath(path) => {
                write!(f, "Cannot use {} as both input and output", path.display())
            }
            Self::InputOpenFailure(path, err) => {
                write!(f, "Could not open file {}: {err}", path.display())
            }
            Self::Decode(path, err) => write!(f, "Failed to read {}, {err}", path.display()),
            Self::EncodeFailure(path, err) => {
                write!(f, "Failed to encode {}: {err}", path.display())
            }
            Self::OutputCreateFailure(path, err) => {
                write!(f, "Could not create file {}: {err}", path.display())
            }
            Self::OutputWriteFailure(path, err) => {
                write!(f, "Could not write file {}: {err}", path.display())
            }
            Self::Serialize(err) => write!(f, "Could not serialize metadata: {err}")
        }
    }
}

impl Display for CliErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(self, f)
    }
}

impl std::error::Error for CliErrors {}

impl From<serde_json::Error> for CliErrors {
    fn from(err: serde_json::Error) -> Self {
        CliErrors::Serialize(err)
    }
}
