//! Typed, path-tracking access into the untyped `protocol.json` tree.

use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// A value inside the protocol document, together with the path used to reach it.
///
/// Every accessor returns a [`Result`] so that a document with an unexpected
/// shape produces [`Error::NotFound`] or [`Error::TypeMismatch`] naming the
/// exact location, instead of a panic.
#[derive(Debug, Clone)]
pub struct Node<'a> {
    value: &'a Value,
    path: String,
}

impl<'a> Node<'a> {
    pub fn root(value: &'a Value) -> Self {
        Self {
            value,
            path: String::new(),
        }
    }

    /// Dotted path of this node, e.g. `play.toClient.types.packet[1]`.
    pub fn path(&self) -> &str {
        if self.path.is_empty() {
            "<document>"
        } else {
            &self.path
        }
    }

    /// Descends into the object member named `key`.
    pub fn field(&self, key: &str) -> Result<Node<'a>> {
        let value = self.object()?.get(key).ok_or_else(|| Error::NotFound {
            path: self.path().to_string(),
            key: format!("key {key:?}"),
        })?;
        let path = if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{key}", self.path)
        };
        Ok(Node { value, path })
    }

    /// Descends into the sequence element at `index`.
    pub fn index(&self, index: usize) -> Result<Node<'a>> {
        let value = self.array()?.get(index).ok_or_else(|| Error::NotFound {
            path: self.path().to_string(),
            key: format!("element [{index}]"),
        })?;
        Ok(Node {
            value,
            path: format!("{}[{index}]", self.path),
        })
    }

    pub fn object(&self) -> Result<&'a Map<String, Value>> {
        self.value
            .as_object()
            .ok_or_else(|| self.mismatch("object"))
    }

    pub fn array(&self) -> Result<&'a [Value]> {
        self.value
            .as_array()
            .map(Vec::as_slice)
            .ok_or_else(|| self.mismatch("array"))
    }

    pub fn str(&self) -> Result<&'a str> {
        self.value.as_str().ok_or_else(|| self.mismatch("string"))
    }

    pub(crate) fn mismatch(&self, expected: &'static str) -> Error {
        Error::TypeMismatch {
            path: self.path().to_string(),
            expected,
            found: kind(self.value),
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
