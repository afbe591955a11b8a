//! XDC pin constraint emission.
//!
//! Produces the body of a Xilinx Design Constraints file: one `PACKAGE_PIN`
//! and one `IOSTANDARD` property per port. Consecutive rows sharing a `name`
//! form a group; groups are separated by a blank line and open with the first
//! row's XDC comment, if any.
//!
//! ```text
//! # 100 MHz oscillator
//! set_property PACKAGE_PIN E3 [get_ports {clk_pad}]
//! set_property IOSTANDARD LVCMOS33 [get_ports {clk_pad}]
//!
//! set_property PACKAGE_PIN J18 [get_ports {data_p[0]}]
//! set_property PACKAGE_PIN J19 [get_ports {data_n[0]}]
//! set_property IOSTANDARD LVDS [get_ports {data_p[0]}]
//! set_property IOSTANDARD LVDS [get_ports {data_n[0]}]
//! ```

use iogen_model::{Pads, PinRow, ValidationError};

/// Which group of rows the emitter is in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum GroupState {
    /// No row has been emitted yet.
    #[default]
    Start,
    /// Emitting rows of the named group.
    In(String),
}

/// Incremental XDC emitter.
///
/// Feed rows in order with [`push`](Self::push), then call
/// [`finish`](Self::finish) to append the trailing blank line. A row that
/// fails validation leaves the accumulator untouched, so the lines of earlier
/// rows remain available through [`lines`](Self::lines).
#[derive(Debug, Default)]
pub struct XdcAccumulator {
    group: GroupState,
    lines: Vec<String>,
}

impl XdcAccumulator {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `row` and appends its constraint lines.
    pub fn push(&mut self, row: &PinRow) -> Result<(), ValidationError> {
        row.validate()?;

        let entering = match &self.group {
            GroupState::Start => true,
            GroupState::In(name) => *name != row.name,
        };
        if entering {
            if let GroupState::In(_) = self.group {
                self.lines.push(String::new());
            }
            self.group = GroupState::In(row.name.clone());
            if let Some(text) = row.comment.xdc_text() {
                self.lines.push(format!("# {text}"));
            }
        }

        let ports = port_legs(row);
        for (port, pin) in &ports {
            self.lines
                .push(format!("set_property PACKAGE_PIN {pin} [{port}]"));
        }
        for (port, _) in &ports {
            self.lines
                .push(format!("set_property IOSTANDARD {} [{port}]", row.iostandard));
        }
        Ok(())
    }

    /// Returns the lines emitted so far, without the trailing blank line.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Appends the trailing blank line and returns all lines.
    pub fn finish(mut self) -> Vec<String> {
        self.lines.push(String::new());
        self.lines
    }
}

/// Emits XDC constraint lines for a pre-grouped sequence of pin rows.
///
/// Each row is validated immediately before it is emitted; the first failure
/// aborts the call. Rows are never reordered, so a name that reappears after
/// another group opens a new group of its own. The output always ends with
/// one blank line, so an empty input yields `[""]`.
pub fn emit_xdc_constraints<'a, I>(rows: I) -> Result<Vec<String>, ValidationError>
where
    I: IntoIterator<Item = &'a PinRow>,
{
    let acc = rows
        .into_iter()
        .try_fold(XdcAccumulator::new(), |mut acc, row| {
            acc.push(row)?;
            Ok::<_, ValidationError>(acc)
        })?;
    tracing::debug!(lines = acc.lines().len(), "emitted xdc constraints");
    Ok(acc.finish())
}

/// Formats a `get_ports` command for a port, optionally indexed.
pub fn get_ports(port: &str, index: Option<u32>) -> String {
    match index {
        Some(index) => format!("get_ports {{{port}[{index}]}}"),
        None => format!("get_ports {{{port}}}"),
    }
}

/// Returns `(get_ports command, package pin)` for each leg of the row,
/// `p` before `n` for differential pairs.
fn port_legs(row: &PinRow) -> Vec<(String, &str)> {
    let index = row.port_index();
    match &row.pads {
        Pads::SingleEnded { pin } => {
            vec![(get_ports(&format!("{}_pad", row.name), index), pin.as_str())]
        }
        Pads::DiffPair { p, n } => vec![
            (get_ports(&format!("{}_p", row.name), index), p.as_str()),
            (get_ports(&format!("{}_n", row.name), index), n.as_str()),
        ],
    }
}
