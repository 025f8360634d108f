//! CLI module for imagemap.
//!
//! This module provides the command-line driver:
//! - Argument parsing
//! - Command handlers over the library
//! - Pointer script replay
//!
//! # Usage
//!
//! ```ignore
//! use imagemap::cli::{parse_args, run_cli_command};
//!
//! let args = parse_args(std::env::args())?;
//! run_cli_command(args.command, &mut std::io::stdout())?;
//! ```

pub mod args;
pub mod commands;
pub mod replay;
pub mod version;

pub use args::{parse_args, ArgsError, CliArgs, CliCommand, USAGE};
pub use replay::{replay, ReplayStep, StepOutcome};
pub use version::{version_line, VERSION};

use std::io::Write;

use color_eyre::Result;

/// Run a parsed command, writing its output to `out`.
pub fn run_cli_command(command: CliCommand, out: &mut dyn Write) -> Result<()> {
    match command {
        CliCommand::Version => {
            writeln!(out, "{}", version_line())?;
            Ok(())
        }
        CliCommand::Help => {
            writeln!(out, "{}", USAGE)?;
            Ok(())
        }
        CliCommand::Resolve { map, x, y } => commands::run_resolve(&map, x, y, out),
        CliCommand::Replay { map, script } => commands::run_replay(&map, &script, out),
        CliCommand::Delta { a, b, algorithm } => commands::run_delta(a, b, algorithm, out),
        CliCommand::Base32Encode { text } => commands::run_base32_encode(&text, out),
        CliCommand::Base32Decode { text } => commands::run_base32_decode(&text, out),
        CliCommand::Totp {
            secret,
            time,
            period,
            digits,
            algorithm,
        } => commands::run_totp(&secret, time, period, digits, algorithm, out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_command_output() {
        let mut buf = Vec::new();
        run_cli_command(CliCommand::Version, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.trim(), format!("imagemap {}", VERSION));
    }

    #[test]
    fn test_help_lists_commands() {
        let mut buf = Vec::new();
        run_cli_command(CliCommand::Help, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        for name in ["resolve", "replay", "delta", "base32", "totp"] {
            assert!(text.contains(name), "usage mentions {}", name);
        }
    }
}
