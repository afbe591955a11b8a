//! Pin rows: the flattened, per-pin (or per-bit) unit of the pin table.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::comment::Comment;
use crate::error::{Field, Table, ValidationError, Violation};

/// The physical pads a pin row is bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pads {
    /// One physical pin.
    SingleEnded {
        /// Package pin identifier.
        pin: String,
    },
    /// A complementary `p`/`n` pin pair.
    DiffPair {
        /// Positive leg package pin.
        p: String,
        /// Negative leg package pin.
        n: String,
    },
}

/// One row of the flattened pin table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinRow {
    /// Name of the signal this row belongs to.
    pub name: String,
    /// Bit index within the signal; present exactly when `bus` is set.
    pub index: Option<u32>,
    /// Port direction label.
    pub direction: String,
    /// Driver or buffer type label.
    pub buffer: String,
    /// Width of the owning signal.
    pub width: u32,
    /// Whether the owning signal is an indexed vector.
    pub bus: bool,
    /// Electrical signaling standard.
    pub iostandard: String,
    /// Annotations copied from the owning signal.
    pub comment: Comment,
    /// Physical pad assignment.
    pub pads: Pads,
}

impl PinRow {
    /// Checks the row's internal consistency before emission.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.check()
            .map_err(|violation| ValidationError::new(Table::Pin, &self.name, violation))
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

        match (self.bus, self.index) {
            (true, None) => return Err(Violation::BusWithoutIndex),
            (false, Some(index)) => return Err(Violation::IndexWithoutBus(index)),
            _ => {}
        }

        match &self.pads {
            Pads::SingleEnded { pin } => {
                if pin.is_empty() {
                    return Err(Violation::Empty(Field::Pin));
                }
            }
            Pads::DiffPair { p, n } => {
                if p.is_empty() {
                    return Err(Violation::Empty(Field::P));
                }
                if n.is_empty() {
                    return Err(Violation::Empty(Field::N));
                }
            }
        }
        Ok(())
    }

    /// Returns the bit index used in port references, or `None` for scalar rows.
    pub fn port_index(&self) -> Option<u32> {
        if self.bus {
            self.index
        } else {
            None
        }
    }
}

/// Serializes to the flat JSON object read by [`pin_table_from_str`](crate::pin_table_from_str):
/// shared fields plus either `pin` or `p`/`n`.
impl Serialize for PinRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("name", &self.name)?;
        map.serialize_entry("index", &self.index)?;
        map.serialize_entry("direction", &self.direction)?;
        map.serialize_entry("buffer", &self.buffer)?;
        map.serialize_entry("width", &self.width)?;
        map.serialize_entry("bus", &self.bus)?;
        map.serialize_entry("iostandard", &self.iostandard)?;
        if !self.comment.is_empty() {
            map.serialize_entry("comment", &self.comment)?;
        }
        match &self.pads {
            Pads::SingleEnded { pin } => {
                map.serialize_entry("pin", pin)?;
            }
            Pads::DiffPair { p, n } => {
                map.serialize_entry("p", p)?;
                map.serialize_entry("n", n)?;
            }
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_ended(name: &str, pin: &str) -> PinRow {
        PinRow {
            name: name.to_string(),
            index: None,
            direction: "in".to_string(),
            buffer: "ibuf".to_string(),
            width: 1,
            bus: false,
            iostandard: "LVCMOS33".to_string(),
            comment: Comment::default(),
            pads: Pads::SingleEnded {
                pin: pin.to_string(),
            },
        }
    }

    fn diff_pair(name: &str, p: &str, n: &str) -> PinRow {
        PinRow {
            iostandard: "LVDS".to_string(),
            pads: Pads::DiffPair {
                p: p.to_string(),
                n: n.to_string(),
            },
            ..single_ended(name, "")
        }
    }

    fn violation(row: &PinRow) -> Violation {
        row.validate().unwrap_err().violation
    }

    #[test]
    fn valid_single_ended() {
        let row = single_ended("clk", "A17");
        assert!(row.validate().is_ok());
        assert!(matches!(row.pads, Pads::SingleEnded { .. }));
    }

    #[test]
    fn valid_diff_pair() {
        let row = diff_pair("sys_clk", "J18", "J19");
        assert!(row.validate().is_ok());
        assert!(matches!(row.pads, Pads::DiffPair { .. }));
    }

    #[test]
    fn empty_name() {
        let row = single_ended("", "A17");
        let err = row.validate().unwrap_err();
        assert_eq!(err.table, Table::Pin);
        assert_eq!(err.violation, Violation::Empty(Field::Name));
    }

    #[test]
    fn zero_width() {
        let mut row = single_ended("clk", "A17");
        row.width = 0;
        assert_eq!(violation(&row), Violation::ZeroWidth);
    }

    #[test]
    fn empty_iostandard() {
        let mut row = diff_pair("clk", "J18", "J19");
        row.iostandard.clear();
        assert_eq!(violation(&row), Violation::Empty(Field::Iostandard));
    }

    #[test]
    fn bus_requires_index() {
        let mut row = single_ended("led", "H5");
        row.bus = true;
        assert_eq!(violation(&row), Violation::BusWithoutIndex);
        row.index = Some(0);
        assert!(row.validate().is_ok());
    }

    #[test]
    fn index_requires_bus() {
        let mut row = single_ended("led", "H5");
        row.index = Some(3);
        assert_eq!(violation(&row), Violation::IndexWithoutBus(3));
        row.bus = true;
        assert!(row.validate().is_ok());
    }

    #[test]
    fn empty_pin() {
        let row = single_ended("clk", "");
        assert_eq!(violation(&row), Violation::Empty(Field::Pin));
    }

    #[test]
    fn empty_legs() {
        assert_eq!(
            violation(&diff_pair("clk", "", "J19")),
            Violation::Empty(Field::P)
        );
        assert_eq!(
            violation(&diff_pair("clk", "J18", "")),
            Violation::Empty(Field::N)
        );
    }

    #[test]
    fn shared_checks_precede_pad_checks() {
        let mut row = single_ended("led", "");
        row.bus = true;
        assert_eq!(violation(&row), Violation::BusWithoutIndex);
    }

    #[test]
    fn port_index_follows_bus_flag() {
        let mut row = single_ended("led", "H5");
        assert_eq!(row.port_index(), None);
        row.bus = true;
        row.index = Some(2);
        assert_eq!(row.port_index(), Some(2));
    }

    #[test]
    fn serialize_single_ended() {
        let json = serde_json::to_value(single_ended("clk", "A17")).unwrap();
        assert_eq!(json["pin"], "A17");
        assert!(json["index"].is_null());
        assert!(json.get("p").is_none());
        assert!(json.get("comment").is_none());
    }

    #[test]
    fn serialize_diff_pair_with_comment() {
        let mut row = diff_pair("clk", "J18", "J19");
        row.comment = Comment::new(None, Some("200 MHz"));
        let json = serde_json::to_value(row).unwrap();
        assert_eq!(json["p"], "J18");
        assert_eq!(json["n"], "J19");
        assert_eq!(json["comment"]["xdc"], "200 MHz");
        assert!(json.get("pin").is_none());
    }
}
