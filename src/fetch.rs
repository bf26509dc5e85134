//! Loading `protocol.json`, either from minecraft-data on GitHub or from disk.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use reqwest::blocking;
use serde_json::Value;

/// Minecraft version generated when none is given.
pub const DEFAULT_VERSION: &str = "1.17.1";

const MINECRAFT_DATA_URL: &str =
    "https://raw.githubusercontent.com/PrismarineJS/minecraft-data/master/data/pc";

/// URL of the `protocol.json` of a Minecraft version in minecraft-data.
pub fn protocol_url(version: &str) -> String {
    format!("{MINECRAFT_DATA_URL}/{version}/protocol.json")
}

/// Where the protocol document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Remote(String),
    Local(PathBuf),
}

impl Source {
    /// The pinned minecraft-data URL for `version`.
    pub fn for_version(version: &str) -> Self {
        Source::Remote(protocol_url(version))
    }

    pub fn load(&self) -> Result<Value> {
        match self {
            Source::Remote(url) => fetch_document(url),
            Source::Local(path) => read_document(path),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Remote(url) => f.write_str(url),
            Source::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

pub fn fetch_document(url: &str) -> Result<Value> {
    blocking::get(url)
        .with_context(|| format!("failed to download {url}"))?
        .error_for_status()
        .with_context(|| format!("failed to download {url}"))?
        .json()
        .map_err(|err| anyhow!("failed to parse JSON from {url}: {err}"))
}

pub fn read_document(path: &Path) -> Result<Value> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("failed to parse {}", path.display()))
}
