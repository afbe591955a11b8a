//! Signal rows: the pre-flattening declaration of one named I/O signal.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::comment::Comment;
use crate::error::{Field, Table, ValidationError, Violation};

/// A physical pin assignment given either as one identifier or one per bit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PinSpec {
    /// A single pin identifier, for a one-bit signal.
    Scalar(String),
    /// One pin identifier per bit, least significant first.
    Vector(Vec<String>),
}

/// The `p`/`n` legs of a differential signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinSet {
    /// Positive leg(s).
    pub p: PinSpec,
    /// Negative leg(s).
    pub n: PinSpec,
}

/// One row of the signal table.
///
/// Exactly one of `pins` (single-ended) or `pinset` (differential) is set on a
/// valid row, and `diff_pair` agrees with which one it is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalRow {
    /// Signal name, used as the HDL identifier and the port stem.
    pub name: String,
    /// Optional grouping label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Port direction label (`in`, `out`, `inout`).
    pub direction: String,
    /// Driver or buffer type label.
    pub buffer: String,
    /// Whether the signal is a differential pair.
    pub diff_pair: bool,
    /// Whether the signal is declared as an indexed vector.
    pub bus: bool,
    /// Number of bits.
    pub width: u32,
    /// Electrical signaling standard (e.g. `LVCMOS33`, `LVDS`).
    pub iostandard: String,
    /// Single-ended pin assignment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pins: Option<PinSpec>,
    /// Differential pin assignment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinset: Option<PinSet>,
    /// Optional annotations.
    #[serde(default, skip_serializing_if = "Comment::is_empty")]
    pub comment: Comment,
}

impl SignalRow {
    /// Checks the row's internal consistency.
    ///
    /// Field checks run first, then the checks that depend on the shape of the
    /// pin assignment. The first violated invariant is reported.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.check()
            .map_err(|violation| ValidationError::new(Table::Signal, &self.name, violation))
    }

    fn check(&self) -> Result<(), Violation> {
        if self.name.is_empty() {
            return Err(Violation::Empty(Field::Name));
        }
        if self.width < 1 {
            return Err(Violation::ZeroWidth);
        }
        if self.iostandard.is_empty() {
            return Err(Violation::Empty(Field::Iostandard));
        }
        if self.group.as_deref().is_some_and(|g| g.trim().is_empty()) {
            return Err(Violation::Empty(Field::Group));
        }

        match (&self.pins, &self.pinset) {
            (Some(pins), None) => self.check_pins(pins),
            (None, Some(pinset)) => self.check_pinset(pinset),
            _ => Err(Violation::PinSource),
        }
    }

    fn check_pins(&self, pins: &PinSpec) -> Result<(), Violation> {
        if self.diff_pair {
            return Err(Violation::DiffPairWithPins);
        }

        match pins {
            PinSpec::Scalar(pin) => {
                if self.width != 1 {
                    return Err(Violation::ScalarWidth {
                        field: Field::Pins,
                        width: self.width,
                    });
                }
                if pin.trim().is_empty() {
                    return Err(Violation::Empty(Field::Pins));
                }
            }
            PinSpec::Vector(list) => {
                if list.len() != self.width as usize {
                    return Err(Violation::PinCount {
                        field: Field::Pins,
                        expected: self.width,
                        actual: list.len(),
                    });
                }
                if let Some(position) = list.iter().position(|pin| pin.trim().is_empty()) {
                    return Err(Violation::EmptyEntry {
                        field: Field::Pins,
                        position,
                    });
                }
                let mut seen = HashSet::with_capacity(list.len());
                for pin in list {
                    if !seen.insert(pin.as_str()) {
                        return Err(Violation::DuplicatePin(pin.clone()));
                    }
                }
            }
        }
        Ok(())
    }

    fn check_pinset(&self, pinset: &PinSet) -> Result<(), Violation> {
        if !self.diff_pair {
            return Err(Violation::SingleEndedWithPinset);
        }

        match (&pinset.p, &pinset.n) {
            (PinSpec::Scalar(p), PinSpec::Scalar(n)) => {
                if self.width != 1 {
                    return Err(Violation::ScalarWidth {
                        field: Field::Pinset,
                        width: self.width,
                    });
                }
                if p.trim().is_empty() {
                    return Err(Violation::Empty(Field::P));
                }
                if n.trim().is_empty() {
                    return Err(Violation::Empty(Field::N));
                }
                if p == n {
                    return Err(Violation::IdenticalLegs(p.clone()));
                }
            }
            (PinSpec::Vector(p), PinSpec::Vector(n)) => {
                if p.len() != n.len() {
                    return Err(Violation::PinsetLength {
                        p: p.len(),
                        n: n.len(),
                    });
                }
                if p.len() != self.width as usize {
                    return Err(Violation::PinCount {
                        field: Field::Pinset,
                        expected: self.width,
                        actual: p.len(),
                    });
                }
            }
            _ => return Err(Violation::MixedPinsetShape),
        }
        Ok(())
    }
}
