//! JSON loading of signal and pin tables.
//!
//! Both tables are a top-level JSON array of row objects. Every row is
//! validated as it is loaded; the first invalid row aborts the load.

use std::path::Path;

use serde::Deserialize;

use crate::comment::Comment;
use crate::error::LoadError;
use crate::pin::{Pads, PinRow};
use crate::signal::SignalRow;

/// A pin table row as it appears in JSON, before its pad shape is known.
#[derive(Debug, Deserialize)]
struct RawPinRow {
    #[serde(default)]
    name: String,
    #[serde(default)]
    index: Option<u32>,
    direction: String,
    buffer: String,
    width: u32,
    bus: bool,
    iostandard: String,
    #[serde(default)]
    comment: Comment,
    #[serde(default)]
    pin: Option<String>,
    #[serde(default)]
    p: Option<String>,
    #[serde(default)]
    n: Option<String>,
}

impl RawPinRow {
    fn into_row(self, position: usize) -> Result<PinRow, LoadError> {
        let pads = match (self.pin, self.p, self.n) {
            (Some(pin), _, _) => Pads::SingleEnded { pin },
            (None, Some(p), Some(n)) => Pads::DiffPair { p, n },
            _ => {
                return Err(LoadError::UnrecognizedPinRow {
                    position,
                    name: self.name,
                })
            }
        };

        let row = PinRow {
            name: self.name,
            index: self.index,
            direction: self.direction,
            buffer: self.buffer,
            width: self.width,
            bus: self.bus,
            iostandard: self.iostandard,
            comment: self.comment,
            pads,
        };
        row.validate()?;
        Ok(row)
    }
}

/// Reads and validates a signal table from a JSON file.
pub fn load_signal_table(path: &Path) -> Result<Vec<SignalRow>, LoadError> {
    signal_table_from_str(&read_table(path)?)
}

/// Parses and validates a signal table from a JSON string.
pub fn signal_table_from_str(json: &str) -> Result<Vec<SignalRow>, LoadError> {
    let rows: Vec<SignalRow> =
        serde_json::from_str(json).map_err(|e| LoadError::Parse(e.to_string()))?;
    for row in &rows {
        row.validate()?;
    }
    tracing::debug!(rows = rows.len(), "loaded signal table");
    Ok(rows)
}

/// Reads and validates a pin table from a JSON file.
pub fn load_pin_table(path: &Path) -> Result<Vec<PinRow>, LoadError> {
    pin_table_from_str(&read_table(path)?)
}

/// Parses and validates a pin table from a JSON string.
///
/// A row with a `pin` key is single-ended; otherwise a row with both `p` and
/// `n` is a differential pair. Any other row is reported as
/// [`LoadError::UnrecognizedPinRow`].
pub fn pin_table_from_str(json: &str) -> Result<Vec<PinRow>, LoadError> {
    let raw: Vec<RawPinRow> =
        serde_json::from_str(json).map_err(|e| LoadError::Parse(e.to_string()))?;
    let rows = raw
        .into_iter()
        .enumerate()
        .map(|(position, row)| row.into_row(position))
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!(rows = rows.len(), "loaded pin table");
    Ok(rows)
}

fn read_table(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}
