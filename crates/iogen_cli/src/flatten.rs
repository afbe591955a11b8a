//! `iogen flatten`: expand a signal table into a pin table.

use std::path::Path;

use iogen_model::{flatten_signals, load_signal_table};

use crate::pipeline::write_output;
use crate::FlattenArgs;

/// Runs the `iogen flatten` command.
///
/// Returns exit code 0 on success.
pub fn run(args: &FlattenArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let text = render(&args.signal_table)?;
    write_output(args.output.as_deref(), &text)?;
    Ok(0)
}

/// Loads a signal table and renders the flattened pin table as JSON.
pub fn render(signal_table: &Path) -> Result<String, Box<dyn std::error::Error>> {
    let signals = load_signal_table(signal_table)?;
    let pins = flatten_signals(&signals)?;
    let mut json = serde_json::to_string_pretty(&pins)?;
    json.push('\n');
    Ok(json)
}
