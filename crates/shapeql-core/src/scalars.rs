//! Scalar decode table: named types to runtime primitive kinds.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Runtime primitive a scalar decodes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarKind {
    Text,
    Integer,
    Number,
    Boolean,
    /// Unknown type; the raw value passes through untouched.
    Opaque,
}

impl ScalarKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ScalarKind::Text => "text",
            ScalarKind::Integer => "integer",
            ScalarKind::Number => "number",
            ScalarKind::Boolean => "boolean",
            ScalarKind::Opaque => "opaque",
        }
    }

    /// Whether a non-null JSON value fits this kind. Integers must fit `i64`.
    pub fn accepts(self, value: &Value) -> bool {
        match self {
            ScalarKind::Text => value.is_string(),
            ScalarKind::Integer => value.is_i64(),
            ScalarKind::Number => value.is_number(),
            ScalarKind::Boolean => value.is_boolean(),
            ScalarKind::Opaque => true,
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const BUILTINS: &[(&str, ScalarKind)] = &[
    ("String", ScalarKind::Text),
    ("ID", ScalarKind::Text),
    ("Int", ScalarKind::Integer),
    ("Float", ScalarKind::Number),
    ("Number", ScalarKind::Number),
    ("Boolean", ScalarKind::Boolean),
];

/// Extensible map from named type to [`ScalarKind`].
///
/// `Default` holds the builtin scalars. Lookups of unknown names yield
/// [`ScalarKind::Opaque`] rather than failing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScalarTable {
    kinds: HashMap<String, ScalarKind>,
}

impl Default for ScalarTable {
    fn default() -> Self {
        Self {
            kinds: BUILTINS
                .iter()
                .map(|&(name, kind)| (name.to_owned(), kind))
                .collect(),
        }
    }
}

impl ScalarTable {
    /// Table with the builtin scalars.
    pub fn new() -> Self {
        Self::default()
    }

    /// Table with no entries; every name is opaque.
    pub fn empty() -> Self {
        Self {
            kinds: HashMap::new(),
        }
    }

    /// Builtins overridden and extended by a JSON object such as
    /// `{"DateTime": "text", "Decimal": "number"}`.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let overrides: HashMap<String, ScalarKind> = serde_json::from_str(json)?;
        let mut table = Self::default();
        table.extend(overrides);
        Ok(table)
    }

    pub fn insert(&mut self, name: impl Into<String>, kind: ScalarKind) {
        self.kinds.insert(name.into(), kind);
    }

    /// Builder form of [`ScalarTable::insert`].
    pub fn with(mut self, name: impl Into<String>, kind: ScalarKind) -> Self {
        self.insert(name, kind);
        self
    }

    pub fn get(&self, name: &str) -> Option<ScalarKind> {
        self.kinds.get(name).copied()
    }

    pub fn kind_of(&self, name: &str) -> ScalarKind {
        self.get(name).unwrap_or(ScalarKind::Opaque)
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

impl<K: Into<String>> Extend<(K, ScalarKind)> for ScalarTable {
    fn extend<I: IntoIterator<Item = (K, ScalarKind)>>(&mut self, iter: I) {
        for (name, kind) in iter {
            self.insert(name, kind);
        }
    }
}
