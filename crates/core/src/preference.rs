// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::PreferenceError;
use std::collections::HashMap;

/// Durable storage for boolean user preferences.
///
/// A missing key is `Ok(None)`, not an error.
pub trait PreferenceStore {
    /// Reads a preference.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read or holds a
    /// value that is not a boolean.
    fn load(&self, key: &str) -> Result<Option<bool>, PreferenceError>;

    /// Writes a preference, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store rejects the write.
    fn save(&mut self, key: &str, value: bool) -> Result<(), PreferenceError>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn load(&self, key: &str) -> Result<Option<bool>, PreferenceError> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, value: bool) -> Result<(), PreferenceError> {
        (**self).save(key, value)
    }
}

/// A `PreferenceStore` that lives only as long as the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryPreferenceStore {
    values: HashMap<String, bool>,
}

impl InMemoryPreferenceStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds one preference.
    #[must_use]
    pub fn with_value(key: &str, value: bool) -> Self {
        let mut store: Self = Self::new();
        store.values.insert(key.to_string(), value);
        store
    }
}

impl PreferenceStore for InMemoryPreferenceStore {
    fn load(&self, key: &str) -> Result<Option<bool>, PreferenceError> {
        Ok(self.values.get(key).copied())
    }

    fn save(&mut self, key: &str, value: bool) -> Result<(), PreferenceError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}
