//! Variable declarations collected during one compilation.

use indexmap::IndexMap;

use crate::{Error, Result};

/// Bare variable name to declared type descriptor, in first-registration order.
///
/// A registry lives for exactly one compilation; it is never shared.
#[derive(Debug, Default)]
pub struct VariableRegistry {
    entries: IndexMap<String, String>,
}

impl VariableRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `bare_name` is used with `declared_type`.
    ///
    /// Re-registering with the same descriptor is a no-op. Descriptors are
    /// compared as written, so `ID!` and `ID !` conflict.
    pub fn register(&mut self, bare_name: &str, declared_type: &str) -> Result<()> {
        match self.entries.get(bare_name) {
            Some(first) if first != declared_type => Err(Error::VariableTypeConflict {
                name: bare_name.to_owned(),
                first: first.clone(),
                second: declared_type.to_owned(),
            }),
            Some(_) => Ok(()),
            None => {
                tracing::debug!(variable = bare_name, ty = declared_type, "registered variable");
                self.entries
                    .insert(bare_name.to_owned(), declared_type.to_owned());
                Ok(())
            }
        }
    }

    pub fn get(&self, bare_name: &str) -> Option<&str> {
        self.entries.get(bare_name).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub(crate) fn into_entries(self) -> impl Iterator<Item = (String, String)> {
        self.entries.into_iter()
    }
}
