//! Error types for row validation and table loading.

use std::fmt;
use std::path::PathBuf;

/// The table a failing row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    /// The pre-flattening signal table.
    Signal,
    /// The flattened pin table.
    Pin,
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Table::Signal => f.write_str("signal"),
            Table::Pin => f.write_str("pin"),
        }
    }
}

/// A row field named by a [`Violation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// The signal or pin name.
    Name,
    /// The optional signal group.
    Group,
    /// The electrical standard label.
    Iostandard,
    /// Single-ended pin list of a signal row.
    Pins,
    /// Differential pin set of a signal row.
    Pinset,
    /// Physical pin of a single-ended pin row.
    Pin,
    /// Positive leg of a differential pair.
    P,
    /// Negative leg of a differential pair.
    N,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Name => "name",
            Field::Group => "group",
            Field::Iostandard => "iostandard",
            Field::Pins => "pins",
            Field::Pinset => "pinset",
            Field::Pin => "pin",
            Field::P => "p",
            Field::N => "n",
        };
        f.write_str(name)
    }
}

/// The invariant a row violated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    /// A required text field is empty (or blank, for pin identifiers and groups).
    #[error("'{0}' must be non-empty")]
    Empty(Field),

    /// One entry of a pin list is empty or blank.
    #[error("'{field}' entry {position} must be non-empty")]
    EmptyEntry {
        /// The list field.
        field: Field,
        /// Zero-based position of the empty entry.
        position: usize,
    },

    /// `width` is zero.
    #[error("'width' must be >= 1")]
    ZeroWidth,

    /// Both or neither of `pins` and `pinset` were given.
    #[error("exactly one of 'pins' or 'pinset' must be provided")]
    PinSource,

    /// `pins` was given on a row flagged as a differential pair.
    #[error("'diff_pair' must be false when 'pins' is provided")]
    DiffPairWithPins,

    /// `pinset` was given on a row not flagged as a differential pair.
    #[error("'diff_pair' must be true when 'pinset' is provided")]
    SingleEndedWithPinset,

    /// A scalar pin source was given for a multi-bit signal.
    #[error("scalar '{field}' requires width == 1, got {width}")]
    ScalarWidth {
        /// `pins` or `pinset`.
        field: Field,
        /// The declared width.
        width: u32,
    },

    /// A pin list does not have one entry per bit.
    #[error("number of '{field}' entries ({actual}) must equal 'width' ({expected})")]
    PinCount {
        /// `pins` or `pinset`.
        field: Field,
        /// The declared width.
        expected: u32,
        /// The number of entries given.
        actual: usize,
    },

    /// The same physical pin appears twice in a `pins` list.
    #[error("duplicate pin '{0}' in 'pins'")]
    DuplicatePin(String),

    /// Scalar `p` and `n` name the same physical pin.
    #[error("'p' and 'n' must differ, both are '{0}'")]
    IdenticalLegs(String),

    /// `p` and `n` are not both scalars or both lists.
    #[error("'pinset.p' and 'pinset.n' must both be strings or both be lists")]
    MixedPinsetShape,

    /// `p` and `n` lists differ in length.
    #[error("'pinset.p' ({p}) and 'pinset.n' ({n}) must be the same length")]
    PinsetLength {
        /// Length of the `p` list.
        p: usize,
        /// Length of the `n` list.
        n: usize,
    },

    /// A bus pin row has no bit index.
    #[error("bus entries must have an integer 'index'")]
    BusWithoutIndex,

    /// A list-shaped pin source was given on a row not flagged as a bus.
    #[error("list '{field}' of width {width} requires 'bus' to be true")]
    VectorWithoutBus {
        /// `pins` or `pinset`.
        field: Field,
        /// The declared width.
        width: u32,
    },

    /// A non-bus pin row carries a bit index.
    #[error("scalar entries must not have an 'index', got {0}")]
    IndexWithoutBus(u32),
}

/// A row failed validation.
///
/// Carries the table kind, the offending row's name and the violated
/// invariant so callers can branch on [`Violation`] without string matching.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{table} row '{row}': {violation}")]
pub struct ValidationError {
    /// Which table the row belongs to.
    pub table: Table,
    /// The row's `name` (possibly empty, when that is the violation).
    pub row: String,
    /// The violated invariant.
    pub violation: Violation,
}

impl ValidationError {
    /// Creates a new validation error for the named row.
    pub fn new(table: Table, row: impl Into<String>, violation: Violation) -> Self {
        Self {
            table,
            row: row.into(),
            violation,
        }
    }
}

/// Errors that can occur when loading a signal or pin table from JSON.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The table file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// The table path.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The JSON content could not be parsed into rows.
    #[error("failed to parse table: {0}")]
    Parse(String),

    /// A pin row is neither single-ended nor a differential pair.
    ///
    /// This only happens when the pin table was produced by something other
    /// than the flattener, so it is kept apart from ordinary validation failures.
    #[error("pin row {position} ('{name}') has neither 'pin' nor both 'p' and 'n'")]
    UnrecognizedPinRow {
        /// Zero-based position of the row in the table.
        position: usize,
        /// The row's name, if it had one.
        name: String,
    },

    /// A row was well-formed JSON but failed validation.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}
