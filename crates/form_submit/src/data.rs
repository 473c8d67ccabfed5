//! Flattened submission data.

use std::mem;

/// Value held under one submission key.
///
/// A name starts out [`Self::Single`]; a second control sharing the name
/// promotes it to [`Self::Multiple`]. The split is caller-visible on
/// purpose: the receiving endpoint sees a scalar for single-valued fields
/// and a list for groups, exactly as the browser-era wire data did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Single(String),
    Multiple(Vec<String>),
}

impl Value {
    fn push(&mut self, value: String) {
        match self {
            Self::Single(existing) => {
                let first = mem::take(existing);
                *self = Self::Multiple(vec![first, value]);
            }
            Self::Multiple(values) => values.push(value),
        }
    }

    /// All values in encounter order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        match self {
            Self::Single(value) => std::slice::from_ref(value).iter(),
            Self::Multiple(values) => values.iter(),
        }
        .map(String::as_str)
    }
}

/// Ordered name → value(s) mapping ready for POST encoding.
///
/// Keys keep the order of their first occurrence; values under a shared key
/// keep encounter order. Forms are small, so lookup is a linear scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionData {
    entries: Vec<(String, Value)>,
}

impl SubmissionData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a name/value pair. First occurrence of a name stores a scalar; a
    /// second occurrence promotes it to a two-element list; later ones
    /// append.
    pub fn add(&mut self, name: &str, value: &str) {
        if let Some((_, existing)) = self.entries.iter_mut().find(|(key, _)| key == name) {
            existing.push(value.to_owned());
        } else {
            self.entries
                .push((name.to_owned(), Value::Single(value.to_owned())));
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Entries in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
