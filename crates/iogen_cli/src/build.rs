//! `iogen build`: generate every output configured in `iogen.toml`.
//!
//! The full pipeline:
//!
//! 1. Locate `iogen.toml` (`--config`, or walk up from the current directory)
//! 2. Load config via `iogen_config` and resolve paths
//! 3. Load the signal table, if configured
//! 4. Load the pin table, or flatten the signal table when none is configured
//! 5. Write the XDC constraints
//! 6. Write the VHDL signal declarations (needs a signal table)

use std::path::{Path, PathBuf};

use iogen_config::resolve_project;
use iogen_emit::{emit_vhdl_signals, emit_xdc_constraints, join_lines, render_vhdl_signals};
use iogen_model::{flatten_signals, load_pin_table, load_signal_table};

use crate::pipeline::{resolve_config_file, write_file};
use crate::GlobalArgs;

/// What a build produced.
#[derive(Debug)]
pub struct BuildReport {
    /// Path of the written XDC file.
    pub xdc: PathBuf,
    /// Path of the written VHDL file, when a signal table was configured.
    pub vhdl: Option<PathBuf>,
    /// Number of pin rows emitted to the XDC file.
    pub pin_rows: usize,
}

/// Runs the `iogen build` command.
///
/// Returns exit code 0 on success.
pub fn run(global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let config_file = resolve_config_file(global)?;
    let report = build_project(&config_file)?;
    tracing::info!(
        xdc = %report.xdc.display(),
        pin_rows = report.pin_rows,
        vhdl = report.vhdl.is_some(),
        "build finished"
    );
    Ok(0)
}

/// Loads `config_file` and writes the configured outputs.
pub fn build_project(config_file: &Path) -> Result<BuildReport, Box<dyn std::error::Error>> {
    let config = iogen_config::load_config_file(config_file)?;
    let root = config_file.parent().unwrap_or_else(|| Path::new("."));
    let project = resolve_project(&config, root);
    tracing::info!(project = %project.name, "building");

    let signals = project
        .signals
        .as_deref()
        .map(load_signal_table)
        .transpose()?;

    let pins = match (&project.pins, &signals) {
        (Some(path), _) => load_pin_table(path)?,
        (None, Some(signals)) => flatten_signals(signals)?,
        (None, None) => return Err("no signal or pin table configured".into()),
    };

    let xdc = join_lines(&emit_xdc_constraints(&pins)?);
    write_file(&project.xdc, &xdc)?;
    tracing::info!(path = %project.xdc.display(), "wrote XDC constraints");

    let vhdl = match &signals {
        Some(signals) => {
            let text = join_lines(&render_vhdl_signals(&emit_vhdl_signals(signals)));
            write_file(&project.vhdl, &text)?;
            tracing::info!(path = %project.vhdl.display(), "wrote VHDL signals");
            Some(project.vhdl)
        }
        None => {
            tracing::warn!("no signal table configured, skipping VHDL output");
            None
        }
    };

    Ok(BuildReport {
        xdc: project.xdc,
        vhdl,
        pin_rows: pins.len(),
    })
}
