/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

pub(crate) mod arg_parsers;
mod help_strings;

use clap::{value_parser, Arg, ArgAction, Command};

use crate::cmd_args::arg_parsers::{ICompression, IFilter};
use crate::cmd_args::help_strings::{PROBE_HELP, STRICT_HELP};

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("ppm2png")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert an ASCII PPM (P3) image into a PNG image")
        .arg(Arg::new("in")
            .help("PPM file to read data from")
            .value_name("ppm-filename")
            .value_parser(value_parser!(std::path::PathBuf)))
        .arg(Arg::new("out")
            .help("PNG file to write the data to")
            .value_name("png-filename")
            .value_parser(value_parser!(std::path::PathBuf)))
        .arg(Arg::new("probe")
            .long("probe")
            .action(ArgAction::SetTrue)
            .help("Print the PPM header as JSON and exit")
            .long_help(PROBE_HELP))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display only warnings and errors, wins over the other logging flags"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the decoding options"))
        .arg(Arg::new("strict")
            .long("strict")
            .action(ArgAction::SetTrue)
            .help_heading("DECODING")
            .help("Reject inputs the default mode tolerates")
            .long_help(STRICT_HELP))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("DECODING")
            .help("Maximum width of images allowed")
            .default_value("16384")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("DECODING")
            .help("Maximum height of images allowed")
            .default_value("16384")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("compression")
            .long("compression")
            .help_heading("ENCODING")
            .help("Deflate effort for the PNG output")
            .default_value("default")
            .value_parser(value_parser!(ICompression)))
        .arg(Arg::new("filter")
            .long("filter")
            .help_heading("ENCODING")
            .help("Row filter for the PNG output")
            .default_value("adaptive")
            .value_parser(value_parser!(IFilter)))
}
