//! Packet ID extraction from the PrismarineJS `minecraft-data` protocol description.
//!
//! [`extract_state`] reads the ID to name mapper of each direction of a
//! connection state out of `protocol.json`, and [`disambiguate`] renames the
//! packets whose name is used by both directions, so that every name is
//! unique within its state.

mod disambiguate;
pub mod document;
mod error;
mod extract;
pub mod names;
mod state;

pub use disambiguate::{disambiguate, duplicate_names};
pub use error::{Error, Result};
pub use extract::{extract_direction, extract_state};
pub use state::{ConnectionState, Direction, DirectionTable, ProtocolIds, StateMapping};
