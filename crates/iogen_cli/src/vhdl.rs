//! `iogen vhdl`: emit VHDL signal declarations for a signal table.

use std::path::Path;

use iogen_emit::{emit_vhdl_signals, join_lines, render_vhdl_signals};
use iogen_model::load_signal_table;

use crate::pipeline::write_output;
use crate::{VhdlArgs, VhdlFormat};

/// Runs the `iogen vhdl` command.
///
/// Returns exit code 0 on success.
pub fn run(args: &VhdlArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let text = render(&args.signal_table, args.format)?;
    write_output(args.output.as_deref(), &text)?;
    Ok(0)
}

/// Loads a signal table and renders its declarations in the requested format.
pub fn render(
    signal_table: &Path,
    format: VhdlFormat,
) -> Result<String, Box<dyn std::error::Error>> {
    let rows = load_signal_table(signal_table)?;
    let signals = emit_vhdl_signals(&rows);
    match format {
        VhdlFormat::Text => Ok(join_lines(&render_vhdl_signals(&signals))),
        VhdlFormat::Json => {
            let mut json = serde_json::to_string_pretty(&signals)?;
            json.push('\n');
            Ok(json)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SIGNALS: &str = r#"[
        {"name": "clk", "direction": "in", "buffer": "ibuf", "diff_pair": false,
         "bus": false, "width": 1, "iostandard": "LVCMOS33", "pins": "E3"},
        {"name": "led", "direction": "out", "buffer": "obuf", "diff_pair": false,
         "bus": true, "width": 4, "iostandard": "LVCMOS33",
         "pins": ["H5", "J5", "T9", "T10"]}
    ]"#;

    fn write_signals(tmp: &TempDir) -> std::path::PathBuf {
        let path = tmp.path().join("signals.json");
        fs::write(&path, SIGNALS).unwrap();
        path
    }

    #[test]
    fn render_text() {
        let tmp = TempDir::new().unwrap();
        let text = render(&write_signals(&tmp), VhdlFormat::Text).unwrap();
        assert_eq!(
            text,
            "signal clk : std_logic;\nsignal led : std_logic_vector(3 downto 0);\n"
        );
    }

    #[test]
    fn render_json() {
        let tmp = TempDir::new().unwrap();
        let text = render(&write_signals(&tmp), VhdlFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[1]["type"], "std_logic_vector");
        assert_eq!(value[1]["range"], "(3 downto 0)");
        assert!(value[0]["range"].is_null());
    }
}
