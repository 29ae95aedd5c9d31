//! The path writer: destructive assignment at a previously recorded path.

use thiserror::Error;

use blobpart_value::{Key, Path, Value};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddressingError {
    #[error("EMPTY_PATH")]
    EmptyPath,
    #[error("INVALID_INDEX: {0}")]
    InvalidIndex(String),
    #[error("NOT_FOUND: {0}")]
    NotFound(String),
    #[error("INVALID_TARGET: {0}")]
    InvalidTarget(String),
}

/// Overwrite the value at `path` inside `root`, in place.
///
/// Structural inverse of one part's extraction: after uploading a part,
/// callers splice the returned reference back in at the part's recorded
/// path. Descends through all but the last key without creating
/// intermediate containers, then assigns at the final key: object keys
/// insert or overwrite, array indices must be in bounds.
///
/// Paths must be non-empty and must name an addressable route through
/// `root`'s existing shape; anything else is a hard [`AddressingError`].
pub fn write_at_path(root: &mut Value, path: &Path, value: Value) -> Result<(), AddressingError> {
    let (last, parents) = path.keys().split_last().ok_or(AddressingError::EmptyPath)?;

    let mut node = root;
    for key in parents {
        node = descend(node, key)?;
    }

    match node {
        Value::Array(items) => {
            let index = as_index(last)?;
            let slot = items
                .get_mut(index)
                .ok_or_else(|| AddressingError::NotFound(last.to_string()))?;
            *slot = value;
        }
        Value::Object(map) => {
            map.insert(last.to_string(), value);
        }
        _ => return Err(AddressingError::InvalidTarget(last.to_string())),
    }
    Ok(())
}

fn descend<'a>(node: &'a mut Value, key: &Key) -> Result<&'a mut Value, AddressingError> {
    match node {
        Value::Array(items) => {
            let index = as_index(key)?;
            items
                .get_mut(index)
                .ok_or_else(|| AddressingError::NotFound(key.to_string()))
        }
        Value::Object(map) => map
            .get_mut(&key.to_string())
            .ok_or_else(|| AddressingError::NotFound(key.to_string())),
        _ => Err(AddressingError::InvalidTarget(key.to_string())),
    }
}

fn as_index(key: &Key) -> Result<usize, AddressingError> {
    key.as_index()
        .ok_or_else(|| AddressingError::InvalidIndex(key.to_string()))
}
