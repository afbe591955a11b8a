//! Expansion of signal rows into pin rows.

use crate::error::{Field, Table, ValidationError, Violation};
use crate::pin::{Pads, PinRow};
use crate::signal::{PinSpec, SignalRow};

/// Expands one signal row into its pin rows.
///
/// A scalar assignment yields one row; a list assignment of width `W` yields
/// `W` rows in list order. Bus rows get their bit position as `index`; other
/// rows get none. The signal row is validated first, and a list assignment
/// on a non-bus row is rejected since its bits would share one port.
pub fn flatten_signal(row: &SignalRow) -> Result<Vec<PinRow>, ValidationError> {
    row.validate()?;
    if !row.bus {
        let vector = match (&row.pins, &row.pinset) {
            (Some(PinSpec::Vector(_)), _) => Some(Field::Pins),
            (_, Some(pinset)) if matches!(pinset.p, PinSpec::Vector(_)) => Some(Field::Pinset),
            _ => None,
        };
        if let Some(field) = vector {
            return Err(ValidationError::new(
                Table::Signal,
                &row.name,
                Violation::VectorWithoutBus {
                    field,
                    width: row.width,
                },
            ));
        }
    }

    let pads: Vec<Pads> = match (&row.pins, &row.pinset) {
        (Some(PinSpec::Scalar(pin)), None) => vec![Pads::SingleEnded { pin: pin.clone() }],
        (Some(PinSpec::Vector(pins)), None) => pins
            .iter()
            .map(|pin| Pads::SingleEnded { pin: pin.clone() })
            .collect(),
        (None, Some(pinset)) => match (&pinset.p, &pinset.n) {
            (PinSpec::Scalar(p), PinSpec::Scalar(n)) => vec![Pads::DiffPair {
                p: p.clone(),
                n: n.clone(),
            }],
            (PinSpec::Vector(p), PinSpec::Vector(n)) => p
                .iter()
                .zip(n)
                .map(|(p, n)| Pads::DiffPair {
                    p: p.clone(),
                    n: n.clone(),
                })
                .collect(),
            _ => unreachable!("validated pinset has matching leg shapes"),
        },
        _ => unreachable!("validated signal row has exactly one pin source"),
    };

    Ok(pads
        .into_iter()
        .enumerate()
        .map(|(bit, pads)| PinRow {
            name: row.name.clone(),
            index: row.bus.then_some(bit as u32),
            direction: row.direction.clone(),
            buffer: row.buffer.clone(),
            width: row.width,
            bus: row.bus,
            iostandard: row.iostandard.clone(),
            comment: row.comment.clone(),
            pads,
        })
        .collect())
}

/// Expands a signal table into a pin table, preserving row order.
///
/// Rows expanded from the same signal stay contiguous.
pub fn flatten_signals<'a, I>(rows: I) -> Result<Vec<PinRow>, ValidationError>
where
    I: IntoIterator<Item = &'a SignalRow>,
{
    let mut out = Vec::new();
    for row in rows {
        out.extend(flatten_signal(row)?);
    }
    tracing::debug!(pin_rows = out.len(), "flattened signal table");
    Ok(out)
}
