#![forbid(unsafe_code)]

//! Update descriptions.
//!
//! A [`Uidl`] node describes the desired state of one component: a tag, a
//! set of typed attributes, and ordered child descriptions. Layouts read
//! their own attributes (orientation, margins, spacing, alignments) and hand
//! each child description to the matching child component.
//!
//! Typed getters distinguish a missing attribute (`Ok(None)`) from one of
//! the wrong type (`Err`), so callers pick their own defaults.

use std::collections::BTreeMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A typed attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum AttrValue {
    /// Boolean flag.
    Bool(bool),
    /// Integer.
    Int(i64),
    /// String.
    Str(String),
    /// Integer list.
    IntArray(Vec<i64>),
}

impl AttrValue {
    fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Str(_) => "string",
            Self::IntArray(_) => "int array",
        }
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Vec<i64>> for AttrValue {
    fn from(value: Vec<i64>) -> Self {
        Self::IntArray(value)
    }
}

impl<const N: usize> From<[i64; N]> for AttrValue {
    fn from(value: [i64; N]) -> Self {
        Self::IntArray(value.to_vec())
    }
}

/// Attribute access errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UidlError {
    /// The attribute exists but holds another type.
    TypeMismatch {
        /// Attribute name.
        name: String,
        /// Type the caller asked for.
        expected: &'static str,
        /// Type actually stored.
        found: &'static str,
    },
}

impl fmt::Display for UidlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeMismatch {
                name,
                expected,
                found,
            } => write!(f, "attribute `{name}`: expected {expected}, found {found}"),
        }
    }
}

impl std::error::Error for UidlError {}

/// One node of an update description.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Uidl {
    tag: String,
    #[cfg_attr(feature = "serde", serde(default))]
    attributes: BTreeMap<String, AttrValue>,
    #[cfg_attr(feature = "serde", serde(default))]
    children: Vec<Uidl>,
}

impl Uidl {
    /// An empty description with the given tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute (builder style).
    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Append a child description (builder style).
    #[must_use]
    pub fn with_child(mut self, child: Uidl) -> Self {
        self.children.push(child);
        self
    }

    /// Append several child descriptions (builder style).
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Uidl>) -> Self {
        self.children.extend(children);
        self
    }

    /// Set an attribute.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Remove an attribute, returning its previous value.
    pub fn remove_attr(&mut self, name: &str) -> Option<AttrValue> {
        self.attributes.remove(name)
    }

    /// Tag of this node.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Child descriptions, in order.
    pub fn children(&self) -> &[Uidl] {
        &self.children
    }

    /// Whether the attribute is present, whatever its type.
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Raw attribute value.
    pub fn attribute(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(name)
    }

    /// The `id` attribute, identifying the described component.
    pub fn id(&self) -> Option<&str> {
        match self.attributes.get("id") {
            Some(AttrValue::Str(id)) => Some(id),
            _ => None,
        }
    }

    /// String attribute.
    pub fn string_attribute(&self, name: &str) -> Result<Option<&str>, UidlError> {
        match self.attributes.get(name) {
            None => Ok(None),
            Some(AttrValue::Str(value)) => Ok(Some(value)),
            Some(other) => Err(mismatch(name, "string", other)),
        }
    }

    /// Integer attribute.
    pub fn int_attribute(&self, name: &str) -> Result<Option<i64>, UidlError> {
        match self.attributes.get(name) {
            None => Ok(None),
            Some(AttrValue::Int(value)) => Ok(Some(*value)),
            Some(other) => Err(mismatch(name, "int", other)),
        }
    }

    /// Boolean attribute.
    pub fn bool_attribute(&self, name: &str) -> Result<Option<bool>, UidlError> {
        match self.attributes.get(name) {
            None => Ok(None),
            Some(AttrValue::Bool(value)) => Ok(Some(*value)),
            Some(other) => Err(mismatch(name, "bool", other)),
        }
    }

    /// Integer list attribute.
    pub fn int_array_attribute(&self, name: &str) -> Result<Option<&[i64]>, UidlError> {
        match self.attributes.get(name) {
            None => Ok(None),
            Some(AttrValue::IntArray(values)) => Ok(Some(values)),
            Some(other) => Err(mismatch(name, "int array", other)),
        }
    }
}

fn mismatch(name: &str, expected: &'static str, found: &AttrValue) -> UidlError {
    UidlError::TypeMismatch {
        name: name.to_owned(),
        expected,
        found: found.kind(),
    }
}
