//! VHDL signal declaration descriptors.

use std::fmt;

use iogen_model::SignalRow;
use serde::Serialize;

/// The VHDL type of a declared signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VhdlType {
    /// A single bit.
    #[serde(rename = "std_logic")]
    StdLogic,
    /// A descending bit vector.
    #[serde(rename = "std_logic_vector")]
    StdLogicVector,
}

impl VhdlType {
    /// Returns the VHDL type name.
    pub fn as_str(self) -> &'static str {
        match self {
            VhdlType::StdLogic => "std_logic",
            VhdlType::StdLogicVector => "std_logic_vector",
        }
    }
}

impl fmt::Display for VhdlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declaration descriptor for one signal.
///
/// Serializes as `{"name", "type", "range"}` with `range` null for scalars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VhdlSignal {
    /// Signal name.
    pub name: String,
    /// Declared type.
    #[serde(rename = "type")]
    pub ty: VhdlType,
    /// Index range such as `(3 downto 0)`, for vectors only.
    pub range: Option<String>,
    /// HDL annotation appended to the declaration line.
    #[serde(skip)]
    pub comment: Option<String>,
}

impl VhdlSignal {
    /// Renders the descriptor as a VHDL signal declaration.
    pub fn declaration(&self) -> String {
        let range = self.range.as_deref().unwrap_or_default();
        match &self.comment {
            Some(text) => format!("signal {} : {}{range}; -- {text}", self.name, self.ty),
            None => format!("signal {} : {}{range};", self.name, self.ty),
        }
    }
}

/// Maps each signal row to a declaration descriptor, preserving order.
///
/// Bus rows become `std_logic_vector` with range `(width-1 downto 0)`; all
/// other rows become `std_logic`. Rows are read as-is, without validation.
pub fn emit_vhdl_signals<'a, I>(rows: I) -> Vec<VhdlSignal>
where
    I: IntoIterator<Item = &'a SignalRow>,
{
    rows.into_iter()
        .map(|row| {
            let (ty, range) = if row.bus {
                (
                    VhdlType::StdLogicVector,
                    Some(format!("({} downto 0)", i64::from(row.width) - 1)),
                )
            } else {
                (VhdlType::StdLogic, None)
            };
            VhdlSignal {
                name: row.name.clone(),
                ty,
                range,
                comment: row.comment.hdl_text().map(str::to_string),
            }
        })
        .collect()
}

/// Renders descriptors as declaration lines, one per signal.
pub fn render_vhdl_signals(signals: &[VhdlSignal]) -> Vec<String> {
    signals.iter().map(VhdlSignal::declaration).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use iogen_model::{Comment, PinSpec};

    fn row(name: &str, width: u32, bus: bool) -> SignalRow {
        SignalRow {
            name: name.to_string(),
            group: None,
            direction: "out".to_string(),
            buffer: "obuf".to_string(),
            diff_pair: false,
            bus,
            width,
            iostandard: "LVCMOS33".to_string(),
            pins: Some(PinSpec::Scalar("A1".to_string())),
            pinset: None,
            comment: Comment::default(),
        }
    }

    #[test]
    fn bus_becomes_vector() {
        let out = emit_vhdl_signals(&[row("led", 4, true)]);
        assert_eq!(
            out,
            vec![VhdlSignal {
                name: "led".to_string(),
                ty: VhdlType::StdLogicVector,
                range: Some("(3 downto 0)".to_string()),
                comment: None,
            }]
        );
    }

    #[test]
    fn single_bit_bus_keeps_range() {
        let out = emit_vhdl_signals(&[row("sel", 1, true)]);
        assert_eq!(out[0].range.as_deref(), Some("(0 downto 0)"));
    }

    #[test]
    fn non_bus_is_scalar() {
        let out = emit_vhdl_signals(&[row("clk", 1, false)]);
        assert_eq!(out[0].ty, VhdlType::StdLogic);
        assert_eq!(out[0].range, None);
    }

    #[test]
    fn order_is_preserved() {
        let rows = [row("b", 1, false), row("a", 2, true), row("c", 1, false)];
        let names: Vec<_> = emit_vhdl_signals(&rows)
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn empty_input() {
        let rows: Vec<SignalRow> = Vec::new();
        assert!(emit_vhdl_signals(&rows).is_empty());
    }

    #[test]
    fn serializes_with_type_key() {
        let out = emit_vhdl_signals(&[row("led", 8, true), row("clk", 1, false)]);
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"name": "led", "type": "std_logic_vector", "range": "(7 downto 0)"},
                {"name": "clk", "type": "std_logic", "range": null}
            ])
        );
    }

    #[test]
    fn declarations() {
        let out = emit_vhdl_signals(&[row("led", 4, true), row("clk", 1, false)]);
        assert_eq!(
            render_vhdl_signals(&out),
            vec![
                "signal led : std_logic_vector(3 downto 0);",
                "signal clk : std_logic;"
            ]
        );
    }

    #[test]
    fn hdl_comment_trails_declaration() {
        let mut led = row("led", 2, true);
        led.comment = Comment::new(Some("user LEDs"), Some("bank 35"));
        let mut clk = row("clk", 1, false);
        clk.comment = Comment::new(Some(""), Some("oscillator"));
        let out = emit_vhdl_signals(&[led, clk]);
        assert_eq!(
            render_vhdl_signals(&out),
            vec![
                "signal led : std_logic_vector(1 downto 0); -- user LEDs",
                "signal clk : std_logic;"
            ]
        );
        let json = serde_json::to_value(&out[0]).unwrap();
        assert!(json.get("comment").is_none());
    }
}
