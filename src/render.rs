//! Renders packet IDs as a Rust source file.

use std::fmt::Write;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use packetid_proto::{ConnectionState, Direction, ProtocolIds};

/// Renders `ids` as a Rust module with one `i32` constant per packet.
///
/// Each generated state becomes a `pub mod`, with clientbound constants
/// before serverbound ones, each in ascending ID order.
pub fn render(ids: &ProtocolIds) -> Result<String> {
    let mut output = String::new();
    writeln!(
        &mut output,
        "// @generated by packetid from minecraft-data {}. Do not edit by hand.",
        ids.version
    )?;
    writeln!(&mut output)?;
    writeln!(&mut output, "#![allow(non_upper_case_globals)]")?;
    for (state, mapping) in ids.states() {
        writeln!(&mut output)?;
        writeln!(&mut output, "/// {} state", state_title(state))?;
        writeln!(&mut output, "pub mod {} {{", state.key())?;
        for (index, direction) in Direction::ALL.into_iter().enumerate() {
            if index > 0 {
                writeln!(&mut output)?;
            }
            writeln!(&mut output, "    // {direction}")?;
            for (id, name) in mapping.table(direction) {
                writeln!(
                    &mut output,
                    "    pub const {name}: i32 = {id};",
                    id = format_packet_id(*id)
                )?;
            }
        }
        writeln!(&mut output, "}}")?;
    }
    Ok(output)
}

pub fn write_file(path: &Path, ids: &ProtocolIds) -> Result<()> {
    let output = render(ids)?;
    fs::write(path, output).with_context(|| format!("failed to write {}", path.display()))
}

fn state_title(state: ConnectionState) -> &'static str {
    match state {
        ConnectionState::Handshaking => "Handshaking",
        ConnectionState::Status => "Status (ping)",
        ConnectionState::Login => "Login",
        ConnectionState::Play => "Play",
    }
}

fn format_packet_id(id: i32) -> String {
    if id < 0 {
        format!("-{:#04x}", id.unsigned_abs())
    } else {
        format!("{id:#04x}")
    }
}
