/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use log::{info, Level};
use ppm2png_png::{Compression, EncoderOptions, FilterMethod};
use ppm2png_ppm::DecoderOptions;

use crate::cmd_args::arg_parsers::{ICompression, IFilter};

/// Options shared by every conversion in a run
#[derive(Debug, Copy, Clone)]
pub struct CmdOptions {
    pub max_width:   usize,
    pub max_height:  usize,
    pub strict_mode: bool,
    pub compression: Compression,
    pub filter:      FilterMethod
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        let decoder = DecoderOptions::default();

        CmdOptions {
            max_width:   decoder.get_max_width(),
            max_height:  decoder.get_max_height(),
            strict_mode: decoder.get_strict_mode(),
            compression: Compression::Default,
            filter:      FilterMethod::Adaptive
        }
    }

    pub fn decoder_options(&self) -> DecoderOptions {
        DecoderOptions::default()
            .set_max_width(self.max_width)
            .set_max_height(self.max_height)
            .set_strict_mode(self.strict_mode)
    }

    pub fn encoder_options(&self, width: usize, height: usize) -> EncoderOptions {
        EncoderOptions::new(width, height)
            .set_compression(self.compression)
            .set_filter(self.filter)
    }
}

impl Default for CmdOptions {
    fn default() -> Self {
        CmdOptions::new()
    }
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    if let Some(width) = options.get_one::<usize>("max-width") {
        cmd_options.max_width = *width;
    }
    if let Some(height) = options.get_one::<usize>("max-height") {
        cmd_options.max_height = *height;
    }
    if options.get_flag("strict") {
        info!("Decoding in strict mode");
        cmd_options.strict_mode = true;
    }
    if let Some(compression) = options.get_one::<ICompression>("compression") {
        cmd_options.compression = compression.to_compression();
    }
    if let Some(filter) = options.get_one::<IFilter>("filter") {
        cmd_options.filter = filter.to_filter();
    }
    info!("Options: {:?}", cmd_options);

    cmd_options
}

/// Pick the log level from the logging flags.
///
/// `--warn` caps the level and wins over the other flags, otherwise
/// the most verbose flag wins. Without any flag only warnings and
/// errors are shown.
pub fn log_level(options: &ArgMatches) -> Level {
    if options.get_flag("warn") {
        return Level::Warn;
    }
    if options.get_flag("trace") {
        Level::Trace
    } else if options.get_flag("debug") {
        Level::Debug
    } else if options.get_flag("info") {
        Level::Info
    } else {
        Level::Warn
    }
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = log_level(options);

    if simple_logger::init_with_level(log_level).is_err() {
        // a logger is already installed for this process
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}
