//! `iogen xdc`: emit XDC pin constraints for a pin table.

use std::path::Path;

use iogen_emit::{emit_xdc_constraints, join_lines};
use iogen_model::load_pin_table;

use crate::pipeline::write_output;
use crate::XdcArgs;

/// Runs the `iogen xdc` command.
///
/// Returns exit code 0 on success.
pub fn run(args: &XdcArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let text = render(&args.pin_table)?;
    write_output(args.output.as_deref(), &text)?;
    Ok(0)
}

/// Loads a pin table and renders its XDC constraint text.
pub fn render(pin_table: &Path) -> Result<String, Box<dyn std::error::Error>> {
    let rows = load_pin_table(pin_table)?;
    let lines = emit_xdc_constraints(&rows)?;
    Ok(join_lines(&lines))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn render_single_pin() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("pins.json");
        fs::write(
            &path,
            r#"[{"name": "clk", "index": null, "direction": "in", "buffer": "ibuf",
                "width": 1, "bus": false, "iostandard": "LVCMOS33", "pin": "A17"}]"#,
        )
        .unwrap();
        assert_eq!(
            render(&path).unwrap(),
            "set_property PACKAGE_PIN A17 [get_ports {clk_pad}]\n\
             set_property IOSTANDARD LVCMOS33 [get_ports {clk_pad}]\n\
             \n"
        );
    }

    #[test]
    fn render_reports_invalid_row() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("pins.json");
        fs::write(
            &path,
            r#"[{"name": "clk", "index": 0, "direction": "in", "buffer": "ibuf",
                "width": 1, "bus": false, "iostandard": "LVCMOS33", "pin": "A17"}]"#,
        )
        .unwrap();
        let err = render(&path).unwrap_err();
        assert!(err.to_string().contains("'index'"));
    }

    #[test]
    fn run_writes_output_file() {
        let tmp = TempDir::new().unwrap();
        let pins = tmp.path().join("pins.json");
        fs::write(&pins, "[]").unwrap();
        let out = tmp.path().join("top.xdc");
        let args = XdcArgs {
            pin_table: pins,
            output: Some(out.clone()),
        };
        assert_eq!(run(&args).unwrap(), 0);
        assert_eq!(fs::read_to_string(out).unwrap(), "\n");
    }
}
