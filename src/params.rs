//! The wire-side parameter mapping and its merge rules.
//!
//! Every query component contributes a [`Params`] patch through the
//! [`ToParams`] capability; the query root folds those patches into one
//! flat mapping with [`merge_all`]. The fold is the single correctness
//! invariant of the crate: scalar keys are last-writer-wins, list keys
//! concatenate in patch order, and the result is deterministic for a
//! given sequence of patches.
//!
//! Keys are flat strings; values are either a scalar or an ordered list.
//! List order is significant on the wire (the backend treats repeated
//! filter and facet parameters as ordered), so the map preserves
//! first-insertion key order and never reorders list elements.

use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single parameter value: one scalar or an ordered list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Scalar(String),
    List(Vec<String>),
}

impl ParamValue {
    /// Number of wire values this entry expands to
    pub fn len(&self) -> usize {
        match self {
            ParamValue::Scalar(_) => 1,
            ParamValue::List(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Scalar(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Scalar(value.to_string())
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(values: Vec<String>) -> Self {
        ParamValue::List(values)
    }
}

/// Flat parameter mapping sent to the search backend.
///
/// Insertion order of keys is preserved so that serializing the same
/// query twice yields byte-identical output.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params {
    entries: IndexMap<String, ParamValue>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a scalar parameter, replacing any existing value under the key
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries
            .insert(key.into(), ParamValue::Scalar(value.into()));
    }

    /// Append one element to a list parameter, creating the list if absent.
    ///
    /// A scalar already stored under the key is replaced by a fresh list;
    /// list-ness is decided by the component that owns the key.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let entry = self
            .entries
            .entry(key.into())
            .or_insert_with(|| ParamValue::List(Vec::new()));
        match entry {
            ParamValue::List(values) => values.push(value.into()),
            ParamValue::Scalar(_) => *entry = ParamValue::List(vec![value.into()]),
        }
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Merge another patch into this mapping.
    ///
    /// Precedence rule: when both sides hold a list under the same key the
    /// lists concatenate (earlier elements first); any other collision is
    /// resolved by replacement with the later patch's value. The rule is
    /// total, so merging never fails.
    pub fn merge(&mut self, patch: Params) {
        for (key, incoming) in patch.entries {
            match self.entries.entry(key) {
                Entry::Occupied(mut occupied) => match (occupied.get_mut(), incoming) {
                    (ParamValue::List(existing), ParamValue::List(mut values)) => {
                        existing.append(&mut values);
                    }
                    (slot, incoming) => *slot = incoming,
                },
                Entry::Vacant(vacant) => {
                    vacant.insert(incoming);
                }
            }
        }
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = (&'a String, &'a ParamValue);
    type IntoIter = indexmap::map::Iter<'a, String, ParamValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Anything that can contribute a slice of the output parameters.
///
/// Implementations must be pure functions of their own state: no shared
/// mutation, no reads of sibling components. An empty mapping is a valid
/// contribution.
pub trait ToParams {
    fn to_params(&self) -> Params;
}

/// Fold an ordered sequence of patches into one mapping.
///
/// This is phase two of serialization, kept free of any component
/// knowledge so the precedence rule can be tested in isolation.
pub fn merge_all(patches: impl IntoIterator<Item = Params>) -> Params {
    let mut merged = Params::new();
    for patch in patches {
        merged.merge(patch);
    }
    merged
}
