//! Result shape descriptor.
//!
//! Mirrors the specification tree: one entry per caller key, recording where
//! the value sits in the raw response and how to decode it.

use indexmap::IndexMap;

use shapeql_core::{ScalarKind, ScalarTable, TypeExpr};

/// How to decode a scalar value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScalarRule {
    /// Descriptor parsed; `kind` is the runtime kind of its base type.
    Typed { ty: TypeExpr, kind: ScalarKind },
    /// Descriptor outside the type grammar; the value passes through.
    Opaque { descriptor: String },
}

impl ScalarRule {
    /// Decode rule for a scalar leaf descriptor. Never fails: descriptors that
    /// do not parse become [`ScalarRule::Opaque`].
    pub fn from_descriptor(descriptor: &str, scalars: &ScalarTable) -> Self {
        match TypeExpr::parse(descriptor) {
            Ok(ty) => {
                let kind = scalars.kind_of(ty.base_name());
                ScalarRule::Typed { ty, kind }
            }
            Err(_) => ScalarRule::Opaque {
                descriptor: descriptor.to_owned(),
            },
        }
    }

    pub fn kind(&self) -> ScalarKind {
        match self {
            ScalarRule::Typed { kind, .. } => *kind,
            ScalarRule::Opaque { .. } => ScalarKind::Opaque,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Scalar(ScalarRule),
    Nested(ResultShape),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShapeEntry {
    /// Key in the raw response (the alias when the field was renamed).
    pub response_key: String,
    pub kind: ShapeKind,
}

/// Caller key to [`ShapeEntry`], in specification order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultShape {
    entries: IndexMap<String, ShapeEntry>,
}

impl ResultShape {
    pub(crate) fn insert(&mut self, key: &str, entry: ShapeEntry) {
        self.entries.insert(key.to_owned(), entry);
    }

    pub fn get(&self, key: &str) -> Option<&ShapeEntry> {
        self.entries.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ShapeEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
