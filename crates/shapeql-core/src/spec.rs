//! Declarative query specification tree.
//!
//! A specification is a [`Group`]: an insertion-ordered map from caller key
//! to [`SpecNode`]. Key order is significant, it becomes the order of the
//! selections on the wire and of the fields in the reshaped result.
//!
//! Trees are built either with the helpers in this module:
//!
//! ```
//! use shapeql_core::spec::{group, op, scalar, var};
//!
//! let root = group([(
//!     "order",
//!     op(group([("id", scalar("String!"))]))
//!         .arg("argA", var("$varA", "ID!"))
//!         .into(),
//! )]);
//! assert_eq!(root.len(), 1);
//! ```
//!
//! or loaded from JSON with [`Group::from_json`].

use indexmap::IndexMap;
use serde::Deserialize;

/// Marker that distinguishes variable names from literal names.
pub const VARIABLE_SIGIL: char = '$';

/// A reference to a query variable, as written by the caller.
///
/// The name is expected to carry the [`VARIABLE_SIGIL`]; the compiler rejects
/// references without it instead of guessing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VarRef {
    name: String,
    type_descriptor: String,
}

impl VarRef {
    pub fn new(name: impl Into<String>, type_descriptor: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_descriptor: type_descriptor.into(),
        }
    }

    /// Name as written, sigil included.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_descriptor(&self) -> &str {
        &self.type_descriptor
    }

    /// Name without the sigil, or `None` when the sigil is missing.
    pub fn bare_name(&self) -> Option<&str> {
        self.name.strip_prefix(VARIABLE_SIGIL)
    }
}

/// Ordered collection of caller keys at one level of the tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Group {
    children: IndexMap<String, SpecNode>,
}

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a child, keeping the original position on replace.
    pub fn insert(&mut self, key: impl Into<String>, node: impl Into<SpecNode>) {
        self.children.insert(key.into(), node.into());
    }

    /// Builder form of [`Group::insert`].
    pub fn with(mut self, key: impl Into<String>, node: impl Into<SpecNode>) -> Self {
        self.insert(key, node);
        self
    }

    pub fn get(&self, key: &str) -> Option<&SpecNode> {
        self.children.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SpecNode)> {
        self.children.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.children.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Parse a specification from its JSON form.
    ///
    /// - a string is a scalar leaf holding its type descriptor;
    /// - an object whose only key is `"$op"` is an operation:
    ///   `{"$op": {"field": "wireName", "args": {"arg": ["$var", "Type!"]}, "body": ...}}`
    ///   (`field` and `args` are optional, `body` is a string or a group);
    /// - any other object is a group.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl<K: Into<String>> FromIterator<(K, SpecNode)> for Group {
    fn from_iter<I: IntoIterator<Item = (K, SpecNode)>>(iter: I) -> Self {
        Self {
            children: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// One entry of a specification tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpecNode {
    /// Terminal field; holds the type descriptor used to decode its value.
    Scalar(String),
    /// Nested field whose wire name is the key.
    Group(Group),
    /// Field that may be renamed on the wire and may bind arguments.
    Operation(Operation),
}

impl From<Group> for SpecNode {
    fn from(group: Group) -> Self {
        SpecNode::Group(group)
    }
}

impl From<Operation> for SpecNode {
    fn from(op: Operation) -> Self {
        SpecNode::Operation(op)
    }
}

/// What an operation selects: a bare scalar or a nested group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OperationBody {
    Scalar(String),
    Group(Group),
}

impl From<Group> for OperationBody {
    fn from(group: Group) -> Self {
        OperationBody::Group(group)
    }
}

impl From<&str> for OperationBody {
    fn from(descriptor: &str) -> Self {
        OperationBody::Scalar(descriptor.to_owned())
    }
}

impl From<String> for OperationBody {
    fn from(descriptor: String) -> Self {
        OperationBody::Scalar(descriptor)
    }
}

/// A field with an optional wire name and argument bindings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Operation {
    wire_name: Option<String>,
    arguments: IndexMap<String, VarRef>,
    body: OperationBody,
}

impl Operation {
    pub fn new(body: impl Into<OperationBody>) -> Self {
        Self {
            wire_name: None,
            arguments: IndexMap::new(),
            body: body.into(),
        }
    }

    /// Request `wire_name` on the wire; the caller key becomes its alias.
    pub fn named(mut self, wire_name: impl Into<String>) -> Self {
        self.wire_name = Some(wire_name.into());
        self
    }

    /// Bind argument `name` to a variable. Arguments keep insertion order.
    pub fn arg(mut self, name: impl Into<String>, var: VarRef) -> Self {
        self.arguments.insert(name.into(), var);
        self
    }

    /// Wire name override; `None` means "use the key".
    pub fn wire_name(&self) -> Option<&str> {
        self.wire_name.as_deref()
    }

    pub fn arguments(&self) -> impl Iterator<Item = (&str, &VarRef)> {
        self.arguments.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn body(&self) -> &OperationBody {
        &self.body
    }
}

pub fn group<K: Into<String>>(children: impl IntoIterator<Item = (K, SpecNode)>) -> Group {
    children.into_iter().collect()
}

pub fn scalar(descriptor: impl Into<String>) -> SpecNode {
    SpecNode::Scalar(descriptor.into())
}

pub fn op(body: impl Into<OperationBody>) -> Operation {
    Operation::new(body)
}

pub fn var(name: impl Into<String>, type_descriptor: impl Into<String>) -> VarRef {
    VarRef::new(name, type_descriptor)
}

// ============================================================================
// JSON form
// ============================================================================

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNode {
    Scalar(String),
    Operation(RawOperationNode),
    Group(IndexMap<String, RawNode>),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawOperationNode {
    #[serde(rename = "$op")]
    op: RawOperation,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawOperation {
    #[serde(default)]
    field: Option<String>,
    #[serde(default)]
    args: IndexMap<String, (String, String)>,
    body: RawBody,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawBody {
    Scalar(String),
    Group(IndexMap<String, RawNode>),
}

fn group_from_raw(raw: IndexMap<String, RawNode>) -> Group {
    raw.into_iter().map(|(k, v)| (k, node_from_raw(v))).collect()
}

fn node_from_raw(raw: RawNode) -> SpecNode {
    match raw {
        RawNode::Scalar(descriptor) => SpecNode::Scalar(descriptor),
        RawNode::Group(children) => SpecNode::Group(group_from_raw(children)),
        RawNode::Operation(RawOperationNode { op }) => {
            let body = match op.body {
                RawBody::Scalar(descriptor) => OperationBody::Scalar(descriptor),
                RawBody::Group(children) => OperationBody::Group(group_from_raw(children)),
            };
            SpecNode::Operation(Operation {
                wire_name: op.field,
                arguments: op
                    .args
                    .into_iter()
                    .map(|(arg, (name, ty))| (arg, VarRef::new(name, ty)))
                    .collect(),
                body,
            })
        }
    }
}

impl<'de> Deserialize<'de> for Group {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        IndexMap::<String, RawNode>::deserialize(deserializer).map(group_from_raw)
    }
}
