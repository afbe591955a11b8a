//! Text emitters for iogen.
//!
//! [`vhdl`] maps signal rows to VHDL declaration descriptors; [`xdc`] turns
//! validated pin rows into the body of an XDC pin constraint file.

#![warn(missing_docs)]

pub mod vhdl;
pub mod xdc;

pub use vhdl::{emit_vhdl_signals, render_vhdl_signals, VhdlSignal, VhdlType};
pub use xdc::{emit_xdc_constraints, get_ports, XdcAccumulator};

/// Joins emitted lines into file text, terminating every line with `\n`.
pub fn join_lines(lines: &[String]) -> String {
    let mut text = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines {
        text.push_str(line);
        text.push('\n');
    }
    text
}
