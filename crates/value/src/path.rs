//! Path addressing into a payload tree.
//!
//! A [`Path`] is an ordered sequence of [`Key`]s, each an array index or an
//! object property. Paths have a pointer-style string form (`/a/0/b`) with
//! `~0`/`~1` escaping for `~` and `/` in property names; that string form
//! is what crosses into multipart field names.

use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("NOT_ABSOLUTE")]
    NotAbsolute,
}

/// One step of a [`Path`]: an array index or an object property.
///
/// Indices display as their decimal form, so `/items/0/name` addresses the
/// same location whether the `0` was recorded as an index or a property.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Index(usize),
    Prop(String),
}

impl Key {
    /// The key as an array index, if it is integer-like. Properties that
    /// are canonical decimals (no sign, no leading zeros) qualify.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Key::Index(index) => Some(*index),
            Key::Prop(prop) => match prop.parse::<usize>() {
                Ok(index) if index.to_string() == *prop => Some(index),
                _ => None,
            },
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(index) => write!(f, "{index}"),
            Key::Prop(prop) => f.write_str(prop),
        }
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Key::Index(index)
    }
}

impl From<&str> for Key {
    fn from(prop: &str) -> Self {
        Key::Prop(prop.to_string())
    }
}

impl From<String> for Key {
    fn from(prop: String) -> Self {
        Key::Prop(prop)
    }
}

/// Positional address of one location in a payload tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Path(Vec<Key>);

impl Path {
    /// The empty path, addressing the root value itself.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keys(&self) -> &[Key] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, key: impl Into<Key>) {
        self.0.push(key.into());
    }

    /// A copy of this path extended by one key.
    pub fn join(&self, key: impl Into<Key>) -> Path {
        let mut keys = self.0.clone();
        keys.push(key.into());
        Path(keys)
    }

    /// Parse an absolute pointer string back into a path.
    ///
    /// Examples:
    /// - `"" -> []`
    /// - `"/" -> [""]`
    /// - `"/a~1b/~0k/0" -> ["a/b", "~k", 0]`
    ///
    /// Tokens in canonical decimal form come back as [`Key::Index`], so
    /// parsing a formatted path reproduces it exactly.
    pub fn parse(pointer: &str) -> Result<Path, PathError> {
        if pointer.is_empty() {
            return Ok(Path::new());
        }
        if !pointer.starts_with('/') {
            return Err(PathError::NotAbsolute);
        }
        Ok(pointer
            .split('/')
            .skip(1)
            .map(|token| {
                let token = unescape_component(token);
                match token.parse::<usize>() {
                    Ok(index) if index.to_string() == token => Key::Index(index),
                    _ => Key::Prop(token),
                }
            })
            .collect())
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for key in &self.0 {
            f.write_str("/")?;
            match key {
                Key::Index(index) => write!(f, "{index}")?,
                Key::Prop(prop) => f.write_str(&escape_component(prop))?,
            }
        }
        Ok(())
    }
}

impl FromIterator<Key> for Path {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        Path(iter.into_iter().collect())
    }
}

impl From<Vec<Key>> for Path {
    fn from(keys: Vec<Key>) -> Self {
        Path(keys)
    }
}

/// Escapes one pointer token component.
fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    component.replace('~', "~0").replace('/', "~1")
}

/// Unescapes one pointer token component.
fn unescape_component(component: &str) -> String {
    if !component.contains('~') {
        return component.to_string();
    }
    component.replace("~1", "/").replace("~0", "~")
}
