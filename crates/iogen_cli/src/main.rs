//! iogen CLI: generates XDC pin constraints and VHDL signal declarations
//! from JSON I/O tables.
//!
//! Provides `iogen xdc` and `iogen vhdl` for running a single emitter,
//! `iogen flatten` for expanding a signal table into a pin table, and
//! `iogen build` for generating every output configured in `iogen.toml`.

#![warn(missing_docs)]

mod build;
mod flatten;
mod pipeline;
mod vhdl;
mod xdc;

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

/// iogen: I/O table to constraint and HDL generator.
#[derive(Parser, Debug)]
#[command(name = "iogen", version, about = "I/O constraint and signal generator")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (repeat for more detail).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Path to a custom `iogen.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Emit XDC pin constraints for a pin table.
    Xdc(XdcArgs),
    /// Emit VHDL signal declarations for a signal table.
    Vhdl(VhdlArgs),
    /// Expand a signal table into a pin table.
    Flatten(FlattenArgs),
    /// Generate every output configured in `iogen.toml`.
    Build,
}

/// Arguments for the `iogen xdc` subcommand.
#[derive(Parser, Debug)]
pub struct XdcArgs {
    /// Pin table JSON file.
    pub pin_table: PathBuf,

    /// Write to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `iogen vhdl` subcommand.
#[derive(Parser, Debug)]
pub struct VhdlArgs {
    /// Signal table JSON file.
    pub signal_table: PathBuf,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = VhdlFormat::Text)]
    pub format: VhdlFormat,

    /// Write to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `iogen flatten` subcommand.
#[derive(Parser, Debug)]
pub struct FlattenArgs {
    /// Signal table JSON file.
    pub signal_table: PathBuf,

    /// Write to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Output format of `iogen vhdl`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum VhdlFormat {
    /// VHDL `signal` declarations.
    Text,
    /// Declaration descriptors as JSON.
    Json,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Verbosity level from repeated `-v`.
    pub verbose: u8,
    /// Optional path to a custom config file.
    pub config: Option<String>,
}

impl GlobalArgs {
    /// Returns the `tracing` filter directive for these flags.
    pub fn log_filter(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        config: cli.config,
    };

    tracing_subscriber::fmt()
        .with_env_filter(global.log_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let result = match cli.command {
        Command::Xdc(ref args) => xdc::run(args),
        Command::Vhdl(ref args) => vhdl::run(args),
        Command::Flatten(ref args) => flatten::run(args),
        Command::Build => build::run(&global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_xdc() {
        let cli = Cli::parse_from(["iogen", "xdc", "pins.json"]);
        match cli.command {
            Command::Xdc(ref args) => {
                assert_eq!(args.pin_table, PathBuf::from("pins.json"));
                assert!(args.output.is_none());
            }
            _ => panic!("expected Xdc command"),
        }
    }

    #[test]
    fn parse_xdc_with_output() {
        let cli = Cli::parse_from(["iogen", "xdc", "pins.json", "-o", "build/top.xdc"]);
        match cli.command {
            Command::Xdc(ref args) => {
                assert_eq!(args.output, Some(PathBuf::from("build/top.xdc")));
            }
            _ => panic!("expected Xdc command"),
        }
    }

    #[test]
    fn parse_vhdl_default_format() {
        let cli = Cli::parse_from(["iogen", "vhdl", "signals.json"]);
        match cli.command {
            Command::Vhdl(ref args) => {
                assert_eq!(args.signal_table, PathBuf::from("signals.json"));
                assert_eq!(args.format, VhdlFormat::Text);
            }
            _ => panic!("expected Vhdl command"),
        }
    }

    #[test]
    fn parse_vhdl_json() {
        let cli = Cli::parse_from(["iogen", "vhdl", "signals.json", "--format", "json"]);
        match cli.command {
            Command::Vhdl(ref args) => assert_eq!(args.format, VhdlFormat::Json),
            _ => panic!("expected Vhdl command"),
        }
    }

    #[test]
    fn parse_flatten() {
        let cli = Cli::parse_from(["iogen", "flatten", "signals.json"]);
        assert!(matches!(cli.command, Command::Flatten(_)));
    }

    #[test]
    fn parse_build_with_config() {
        let cli = Cli::parse_from(["iogen", "--config", "/path/to/iogen.toml", "build"]);
        assert!(matches!(cli.command, Command::Build));
        assert_eq!(cli.config.as_deref(), Some("/path/to/iogen.toml"));
    }

    #[test]
    fn parse_global_flags() {
        let cli = Cli::parse_from(["iogen", "--quiet", "build"]);
        assert!(cli.quiet);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn verbose_counts() {
        let cli = Cli::parse_from(["iogen", "-vv", "build"]);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn missing_subcommand_fails() {
        assert!(Cli::try_parse_from(["iogen"]).is_err());
    }

    #[test]
    fn log_filter_levels() {
        let mut global = GlobalArgs {
            quiet: false,
            verbose: 0,
            config: None,
        };
        assert_eq!(global.log_filter(), "info");
        global.verbose = 1;
        assert_eq!(global.log_filter(), "debug");
        global.verbose = 5;
        assert_eq!(global.log_filter(), "trace");
        global.quiet = true;
        assert_eq!(global.log_filter(), "error");
    }
}
