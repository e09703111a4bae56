//! Specification tree to document and result shape.
//!
//! The walk is a deterministic pre-order traversal in key insertion order.
//! Every variable binding goes through the [`VariableRegistry`]; declarations
//! are parsed and emitted once the whole tree has been visited.

use shapeql_core::spec::{Group, Operation, OperationBody, SpecNode, VarRef};
use shapeql_core::utils::is_valid_name;
use shapeql_core::{ScalarTable, TypeExpr};

use crate::document::{Argument, CompiledDocument, Field, SelectionSet, VariableDefinition};
use crate::registry::VariableRegistry;
use crate::shape::{ResultShape, ScalarRule, ShapeEntry, ShapeKind};
use crate::{Error, NameKind, Result};

/// Compile an anonymous query with the builtin scalar table.
pub fn compile(root: &Group) -> Result<(CompiledDocument, ResultShape)> {
    Compiler::new(&ScalarTable::default()).compile(root, None)
}

/// Single-use compiler. Owns the registry for one compilation.
pub struct Compiler<'a> {
    scalars: &'a ScalarTable,
    registry: VariableRegistry,
    /// Caller keys from the root to the node being compiled.
    path: Vec<String>,
}

impl<'a> Compiler<'a> {
    pub fn new(scalars: &'a ScalarTable) -> Self {
        Self {
            scalars,
            registry: VariableRegistry::new(),
            path: Vec::new(),
        }
    }

    pub fn compile(
        mut self,
        root: &Group,
        operation_name: Option<&str>,
    ) -> Result<(CompiledDocument, ResultShape)> {
        let _span = tracing::debug_span!("compile", operation = operation_name).entered();

        if let Some(name) = operation_name {
            check_name(NameKind::Operation, name)?;
        }

        let (selection_set, shape) = self.compile_group(root)?;

        let variables = self
            .registry
            .into_entries()
            .map(|(name, descriptor)| -> Result<VariableDefinition> {
                let ty = TypeExpr::parse(&descriptor)?;
                Ok(VariableDefinition { name, ty })
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            variables = variables.len(),
            fields = selection_set.fields.len(),
            "compiled document"
        );

        let document =
            CompiledDocument::new(operation_name.map(str::to_owned), variables, selection_set);
        Ok((document, shape))
    }

    fn compile_group(&mut self, group: &Group) -> Result<(SelectionSet, ResultShape)> {
        if group.is_empty() {
            return Err(Error::EmptySelection {
                path: self.path_display(),
            });
        }

        let mut fields = Vec::with_capacity(group.len());
        let mut shape = ResultShape::default();

        for (key, node) in group.iter() {
            check_name(NameKind::Field, key)?;
            self.path.push(key.to_owned());
            let (field, kind) = self.compile_node(key, node)?;
            self.path.pop();

            shape.insert(
                key,
                ShapeEntry {
                    response_key: field.response_key().to_owned(),
                    kind,
                },
            );
            fields.push(field);
        }

        Ok((SelectionSet { fields }, shape))
    }

    fn compile_node(&mut self, key: &str, node: &SpecNode) -> Result<(Field, ShapeKind)> {
        match node {
            SpecNode::Scalar(descriptor) => {
                let field = Field {
                    name: key.to_owned(),
                    alias: None,
                    arguments: Vec::new(),
                    selection_set: None,
                };
                Ok((field, ShapeKind::Scalar(self.scalar_rule(descriptor))))
            }
            SpecNode::Group(group) => {
                let (set, shape) = self.compile_group(group)?;
                let field = Field {
                    name: key.to_owned(),
                    alias: None,
                    arguments: Vec::new(),
                    selection_set: Some(set),
                };
                Ok((field, ShapeKind::Nested(shape)))
            }
            SpecNode::Operation(op) => self.compile_operation(key, op),
        }
    }

    fn compile_operation(&mut self, key: &str, op: &Operation) -> Result<(Field, ShapeKind)> {
        let name = op.wire_name().unwrap_or(key);
        check_name(NameKind::WireField, name)?;
        let alias = (name != key).then(|| key.to_owned());

        let mut arguments = Vec::new();
        for (arg, var) in op.arguments() {
            check_name(NameKind::Argument, arg)?;
            let bare = bare_variable_name(var)?;
            self.registry.register(bare, var.type_descriptor())?;
            arguments.push(Argument {
                name: arg.to_owned(),
                variable: bare.to_owned(),
            });
        }

        let (selection_set, kind) = match op.body() {
            OperationBody::Scalar(descriptor) => {
                (None, ShapeKind::Scalar(self.scalar_rule(descriptor)))
            }
            OperationBody::Group(group) => {
                let (set, shape) = self.compile_group(group)?;
                (Some(set), ShapeKind::Nested(shape))
            }
        };

        let field = Field {
            name: name.to_owned(),
            alias,
            arguments,
            selection_set,
        };
        Ok((field, kind))
    }

    fn scalar_rule(&self, descriptor: &str) -> ScalarRule {
        let rule = ScalarRule::from_descriptor(descriptor, self.scalars);
        if matches!(rule, ScalarRule::Opaque { .. }) {
            tracing::warn!(
                path = %self.path_display(),
                descriptor,
                "scalar descriptor is not a type expression, value passes through undecoded"
            );
        }
        rule
    }

    fn path_display(&self) -> String {
        if self.path.is_empty() {
            "query root".to_owned()
        } else {
            format!("`{}`", self.path.join("."))
        }
    }
}

fn bare_variable_name(var: &VarRef) -> Result<&str> {
    let Some(bare) = var.bare_name() else {
        return Err(Error::MissingSigil {
            raw: var.name().to_owned(),
        });
    };
    check_name(NameKind::Variable, bare)?;
    Ok(bare)
}

fn check_name(kind: NameKind, name: &str) -> Result<()> {
    if is_valid_name(name) {
        Ok(())
    } else {
        Err(Error::InvalidName {
            kind,
            name: name.to_owned(),
        })
    }
}
