// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Accumulated, not-yet-committed form values keyed by field name.
///
/// Values are kept exactly as entered. Blank values are treated as absent
/// by [`Draft::value`], which is what validation and record parsing read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Draft {
    fields: BTreeMap<String, String>,
}

impl Draft {
    /// Creates an empty draft.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    /// Returns the trimmed value of a field, or `None` if it is absent or blank.
    #[must_use]
    pub fn value(&self, field: &str) -> Option<&str> {
        self.fields
            .get(field)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// Returns the raw value of a field exactly as entered.
    #[must_use]
    pub fn raw(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Sets a field value, replacing any previous value.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Sets a field only when it is currently absent or blank.
    pub fn set_default(&mut self, field: &str, value: &str) {
        if self.value(field).is_none() {
            self.set(field, value);
        }
    }

    /// Sets a field from an optional value; `None` removes it.
    pub fn set_opt(&mut self, field: &str, value: Option<impl ToString>) {
        match value {
            Some(v) => self.set(field, v.to_string()),
            None => {
                self.fields.remove(field);
            }
        }
    }

    /// Removes a field, returning its raw value.
    pub fn remove(&mut self, field: &str) -> Option<String> {
        self.fields.remove(field)
    }

    /// Overlays every field of `patch` onto this draft.
    pub fn merge(&mut self, patch: &Self) {
        for (field, value) in &patch.fields {
            self.fields.insert(field.clone(), value.clone());
        }
    }

    /// Iterates over `(field, raw value)` pairs in field-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the number of fields present, blank or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the draft holds no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Draft {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
