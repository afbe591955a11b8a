//! Row model for the iogen I/O constraint generator.
//!
//! A [`SignalRow`] declares one named I/O signal, possibly multi-bit and possibly
//! differential. Flattening expands it into one [`PinRow`] per physical pin (or
//! per `p`/`n` pair). Both row kinds carry a `validate` method that checks the
//! row's internal consistency and reports the first violated invariant as a
//! structured [`ValidationError`].

#![warn(missing_docs)]

pub mod comment;
pub mod error;
pub mod flatten;
pub mod loader;
pub mod pin;
pub mod signal;

pub use comment::Comment;
pub use error::{Field, LoadError, Table, ValidationError, Violation};
pub use flatten::{flatten_signal, flatten_signals};
pub use loader::{load_pin_table, load_signal_table, pin_table_from_str, signal_table_from_str};
pub use pin::{Pads, PinRow};
pub use signal::{PinSet, PinSpec, SignalRow};
