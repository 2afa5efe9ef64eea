/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::exit;

use clap::error::ErrorKind;
use clap::ArgMatches;
use log::debug;

pub use crate::cmd_parsers::global_options::CmdOptions;
pub use crate::errors::CliErrors;
pub use crate::probe_files::probe_file;
pub use crate::workflow::convert_file;

mod cmd_args;
mod cmd_parsers;
mod errors;
mod file_io;
mod probe_files;
mod serde;
mod workflow;

pub fn main() {
    exit(run(std::env::args_os()));
}

/// Parse `args`, run the conversion and return the process exit code
///
/// Diagnostics and the success message go to standard output.
pub fn run<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let program = program_name(args.first());

    let cmd = cmd_args::create_cmd_args();

    let options = match cmd.try_get_matches_from(args) {
        Ok(options) => options,
        Err(err) => {
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    let _ = err.print();
                    0
                }
                _ => {
                    // usage errors are diagnostics too, keep them on stdout
                    println!("{}", err.render());
                    1
                }
            };
        }
    };

    cmd_parsers::global_options::setup_logger(&options);

    let parsed_opts = cmd_parsers::global_options::parse_options(&options);

    match execute(&options, &parsed_opts, &program) {
        Ok(message) => {
            println!("{message}");
            0
        }
        Err(err) => {
            debug!("Conversion failed: {:?}", err);
            println!("{err}");
            1
        }
    }
}

fn execute(args: &ArgMatches, options: &CmdOptions, program: &str) -> Result<String, CliErrors> {
    let source = args.get_one::<PathBuf>("in");
    let dest = args.get_one::<PathBuf>("out");

    if args.get_flag("probe") {
        return match source {
            Some(source) => probe_file(source, options),
            None => Err(CliErrors::MissingArguments(program.to_string()))
        };
    }

    let (source, dest) = match (source, dest) {
        (Some(source), Some(dest)) => (source, dest),
        _ => return Err(CliErrors::MissingArguments(program.to_string()))
    };

    convert_file(source, dest, options)?;

    Ok(format!(
        "Processed {} into {}",
        source.display(),
        dest.display()
    ))
}

/// Bare executable name, without the directory it was called from
fn program_name(arg0: Option<&OsString>) -> String {
    arg0.map(PathBuf::from)
        .and_then(|path| path.file_name().map(|name| name.to_string_lossy().into_owned()))
        .unwrap_or_else(|| String::from("ppm2png"))
}
