//! Command-line argument parsing for the imagemap CLI.
//!
//! Global flags (`-v`/`--verbose`, `--log-file <path>`) may appear anywhere.
//! The first remaining word selects the command.

use std::path::PathBuf;

use thiserror::Error;

use crate::auth::{HmacAlgorithm, DEFAULT_DIGITS, DEFAULT_PERIOD_SECS};
use crate::color::{DeltaAlgorithm, Rgb};

pub const USAGE: &str = "\
Usage:
  imagemap resolve <map.json> <x> <y>
  imagemap replay  <map.json> <script.json>
  imagemap delta   <rrggbb> <rrggbb> [rgb|cie76|cie94|cie2000]
  imagemap base32  encode|decode <text>
  imagemap totp    <secret> [--time <unix>] [--period <s>] [--digits <n>] [--algorithm sha1|sha256|sha512|md5]
  imagemap --version | --help

Global options:
  -v, --verbose          debug logging (RUST_LOG honored)
  --log-file <path>      also write logs to a file";

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Resolve one pointer position against a map file
    Resolve { map: PathBuf, x: i32, y: i32 },
    /// Feed a pointer script to a map file and print the events
    Replay { map: PathBuf, script: PathBuf },
    /// Color difference between two colors
    Delta {
        a: Rgb,
        b: Rgb,
        algorithm: DeltaAlgorithm,
    },
    Base32Encode { text: String },
    Base32Decode { text: String },
    /// One-time password for a base32 secret
    Totp {
        secret: String,
        time: Option<u64>,
        period: u64,
        digits: u32,
        algorithm: HmacAlgorithm,
    },
}

/// Command plus global options.
#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    pub verbose: bool,
    pub log_file: Option<PathBuf>,
    pub command: CliCommand,
}

/// Argument errors, reported together with [`USAGE`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    #[error("missing {0}")]
    Missing(&'static str),

    #[error("invalid {what}: '{value}'")]
    Invalid { what: &'static str, value: String },

    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("unexpected argument '{0}'")]
    Unexpected(String),
}

/// Parse command-line arguments (program name first).
///
/// # Examples
///
/// ```
/// use imagemap::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["imagemap".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()).unwrap().command, CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> Result<CliArgs, ArgsError>
where
    I: Iterator<Item = String>,
{
    let mut verbose = false;
    let mut log_file = None;
    let mut rest = Vec::new();

    // Skip the program name
    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-v" | "--verbose" => verbose = true,
            "--log-file" => log_file = Some(PathBuf::from(args.next().ok_or(ArgsError::Missing("log file path"))?)),
            _ => rest.push(arg),
        }
    }

    let command = parse_command(rest)?;
    Ok(CliArgs {
        verbose,
        log_file,
        command,
    })
}

fn parse_command(words: Vec<String>) -> Result<CliCommand, ArgsError> {
    let mut words = words.into_iter();
    let Some(name) = words.next() else {
        return Ok(CliCommand::Help);
    };

    let command = match name.as_str() {
        "--version" | "-V" | "version" => CliCommand::Version,
        "--help" | "-h" | "help" => CliCommand::Help,
        "resolve" => CliCommand::Resolve {
            map: PathBuf::from(next(&mut words, "map file")?),
            x: parse_value(&next(&mut words, "x coordinate")?, "x coordinate")?,
            y: parse_value(&next(&mut words, "y coordinate")?, "y coordinate")?,
        },
        "replay" => CliCommand::Replay {
            map: PathBuf::from(next(&mut words, "map file")?),
            script: PathBuf::from(next(&mut words, "script file")?),
        },
        "delta" => {
            let a = parse_value(&next(&mut words, "first color")?, "color")?;
            let b = parse_value(&next(&mut words, "second color")?, "color")?;
            let algorithm = match words.next() {
                Some(name) => DeltaAlgorithm::from_name(&name).ok_or(ArgsError::Invalid {
                    what: "delta algorithm",
                    value: name,
                })?,
                None => DeltaAlgorithm::default(),
            };
            CliCommand::Delta { a, b, algorithm }
        }
        "base32" => {
            let mode = next(&mut words, "encode or decode")?;
            let text = next(&mut words, "text")?;
            match mode.as_str() {
                "encode" => CliCommand::Base32Encode { text },
                "decode" => CliCommand::Base32Decode { text },
                _ => {
                    return Err(ArgsError::Invalid {
                        what: "base32 mode",
                        value: mode,
                    })
                }
            }
        }
        "totp" => parse_totp(&mut words)?,
        _ => return Err(ArgsError::UnknownCommand(name)),
    };

    match words.next() {
        Some(extra) => Err(ArgsError::Unexpected(extra)),
        None => Ok(command),
    }
}

fn parse_totp(words: &mut impl Iterator<Item = String>) -> Result<CliCommand, ArgsError> {
    let secret = next(words, "secret")?;
    let mut time = None;
    let mut period = DEFAULT_PERIOD_SECS;
    let mut digits = DEFAULT_DIGITS;
    let mut algorithm = HmacAlgorithm::default();

    while let Some(flag) = words.next() {
        match flag.as_str() {
            "--time" => time = Some(parse_value(&next(words, "time")?, "time")?),
            "--period" => period = parse_value(&next(words, "period")?, "period")?,
            "--digits" => digits = parse_value(&next(words, "digits")?, "digits")?,
            "--algorithm" => {
                let name = next(words, "algorithm")?;
                algorithm = name.parse().map_err(|_| ArgsError::Invalid {
                    what: "algorithm",
                    value: name,
                })?;
            }
            _ => return Err(ArgsError::Unexpected(flag)),
        }
    }

    Ok(CliCommand::Totp {
        secret,
        time,
        period,
        digits,
        algorithm,
    })
}

fn next(words: &mut impl Iterator<Item = String>, what: &'static str) -> Result<String, ArgsError> {
    words.next().ok_or(ArgsError::Missing(what))
}

fn parse_value<T: std::str::FromStr>(value: &str, what: &'static str) -> Result<T, ArgsError> {
    value.parse().map_err(|_| ArgsError::Invalid {
        what,
        value: value.to_string(),
    })
}
