//! Generates Rust packet ID constants from the PrismarineJS `minecraft-data`
//! protocol description.

pub mod fetch;
pub mod generate;
pub mod render;

/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info,reqwest=warn,hyper=warn,hyper_util=warn";
