//! Pulls packet ID to name tables out of `protocol.json`.
//!
//! Each direction of a state declares its packets as a `packet` container
//! whose first field is a mapper from packet ID to packet name:
//!
//! ```json
//! "toClient": { "types": { "packet": ["container", [
//!     { "name": "name", "type": ["mapper", { "type": "varint", "mappings": { "0x00": "spawn_entity" } }] },
//!     { "name": "params", "type": ["switch", { ... }] }
//! ]] } }
//! ```

use serde_json::Value;
use tracing::debug;

use crate::document::Node;
use crate::error::{Error, Result};
use crate::names::{canonical_name, parse_packet_id};
use crate::state::{ConnectionState, Direction, DirectionTable, StateMapping};

/// Extracts both direction tables of `state` from the whole document.
///
/// Fails on the first missing key, unexpected value shape or unparsable ID;
/// nothing is returned for a state that is only partly well-formed.
pub fn extract_state(document: &Value, state: ConnectionState) -> Result<StateMapping> {
    let state_node = Node::root(document).field(state.key())?;
    let mut mapping = StateMapping::default();
    for direction in Direction::ALL {
        *mapping.table_mut(direction) = extract_direction(&state_node, direction)?;
    }
    Ok(mapping)
}

/// Extracts one direction's table from the node of its state.
pub fn extract_direction(state: &Node<'_>, direction: Direction) -> Result<DirectionTable> {
    let mappings = packet_mappings(state, direction)?;
    let mut table = DirectionTable::new();
    for key in mappings.object()?.keys() {
        let id = parse_packet_id(key).map_err(|source| Error::ParseError {
            path: mappings.path().to_string(),
            key: key.clone(),
            source,
        })?;
        let name_node = mappings.field(key)?;
        let name =
            canonical_name(name_node.str()?).ok_or_else(|| name_node.mismatch("packet name"))?;
        table.insert(id, name);
    }
    debug!(
        "Extracted {} {} packets from {}",
        table.len(),
        direction,
        mappings.path()
    );
    Ok(table)
}

fn packet_mappings<'a>(state: &Node<'a>, direction: Direction) -> Result<Node<'a>> {
    state
        .field(direction.key())?
        .field("types")?
        .field("packet")?
        // ["container", [fields...]]
        .index(1)?
        // the packet ID field comes first
        .index(0)?
        .field("type")?
        // ["mapper", { "type": ..., "mappings": ... }]
        .index(1)?
        .field("mappings")
}
