//! One generation run: load the document, extract every state, write the constants.

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{debug, info};

use packetid_proto::{disambiguate, extract_state, ConnectionState, ProtocolIds};

use crate::fetch::Source;
use crate::render;

/// Extracts and disambiguates the packet IDs of every generated state.
///
/// Stops at the first state that fails to extract; the error keeps the
/// underlying [`packetid_proto::Error`] as its root cause.
pub fn protocol_ids(document: &Value, version: &str) -> Result<ProtocolIds> {
    let mut ids = ProtocolIds::new(version);
    for state in ConnectionState::GENERATED {
        let mut mapping = extract_state(document, state)
            .with_context(|| format!("failed to extract {state} packet ids"))?;
        disambiguate(&mut mapping);
        debug!(
            "{state}: {} clientbound, {} serverbound",
            mapping.clientbound.len(),
            mapping.serverbound.len()
        );
        if let Some(slot) = ids.state_mut(state) {
            *slot = mapping;
        }
    }
    Ok(ids)
}

/// Loads `source`, builds the packet IDs and writes them to `output`.
///
/// Nothing is written unless every state was extracted.
pub fn generate(source: &Source, version: &str, output: &Path) -> Result<ProtocolIds> {
    info!("Loading {source}");
    let document = source.load()?;
    let ids = protocol_ids(&document, version)?;
    render::write_file(output, &ids)?;
    info!("Wrote {} packet ids to {}", ids.len(), output.display());
    Ok(ids)
}
