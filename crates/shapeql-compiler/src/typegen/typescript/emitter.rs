//! Core emitter struct and main emit logic.

use std::collections::BTreeSet;

use crate::CompiledQuery;
use crate::shape::{ResultShape, ShapeKind};

use super::Config;

/// One interface member ready for rendering.
pub(super) struct Member {
    pub(super) key: String,
    pub(super) ty: String,
    /// Rendered as `T | null`.
    pub(super) nullable: bool,
    /// Rendered as `key?:`.
    pub(super) optional: bool,
}

/// TypeScript emitter for a compiled query.
pub struct Emitter<'a> {
    pub(super) query: &'a CompiledQuery,
    pub(super) config: Config,

    /// Names already used (for collision avoidance)
    pub(super) used_names: BTreeSet<String>,
    /// Alias for nested result levels, assigned when the shape has any
    pub(super) nested_alias: Option<String>,
    /// Output buffer
    pub(super) output: String,
}

impl<'a> Emitter<'a> {
    pub fn new(query: &'a CompiledQuery, config: Config) -> Self {
        Self {
            query,
            config,
            used_names: BTreeSet::new(),
            nested_alias: None,
            output: String::new(),
        }
    }

    /// Emit the variables interface (if any) followed by the result interfaces.
    pub fn emit(mut self) -> String {
        let base = self.base_root_name();
        let root = self.unique_name(&base);

        if !self.query.document().variables().is_empty() {
            let base = match &self.config.variables_name {
                Some(name) => name.clone(),
                None => format!("{root}Variables"),
            };
            let name = self.unique_name(&base);
            self.emit_variables(&name);
        }

        let shape = self.query.shape();
        let has_nested = shape
            .iter()
            .any(|(_, entry)| matches!(entry.kind, ShapeKind::Nested(_)));
        if has_nested {
            let alias = self.unique_name("Nested");
            self.emit_nested_alias(&alias);
            self.nested_alias = Some(alias);
        }
        self.emit_shape(&root, shape);

        // Ensure exactly one trailing newline
        self.output.truncate(self.output.trim_end().len());
        self.output.push('\n');
        self.output
    }

    /// Every declared variable must be bound, so nullable ones are
    /// `T | null`, never optional.
    fn emit_variables(&mut self, name: &str) {
        let scalars = self.query.scalars();
        let members: Vec<Member> = self
            .query
            .document()
            .variables()
            .iter()
            .map(|var| {
                let kind = scalars.kind_of(var.ty.base_name());
                Member {
                    key: var.name.clone(),
                    ty: self.type_expr(var.ty.nullable(), kind),
                    nullable: !var.ty.is_non_null(),
                    optional: false,
                }
            })
            .collect();
        self.emit_interface(name, &members);
    }

    /// Nested levels are emitted before the interface that references them.
    /// A nested member may come back as an object, a list or null, which the
    /// `Nested<T>` alias spells out.
    fn emit_shape(&mut self, name: &str, shape: &ResultShape) {
        let mut members = Vec::with_capacity(shape.len());
        for (key, entry) in shape.iter() {
            let member = match &entry.kind {
                ShapeKind::Scalar(rule) => self.scalar_member(key, rule),
                ShapeKind::Nested(inner) => {
                    let child = self.nested_name(name, key);
                    self.emit_shape(&child, inner);
                    let ty = match &self.nested_alias {
                        Some(alias) => format!("{alias}<{child}>"),
                        None => child,
                    };
                    Member {
                        key: key.to_owned(),
                        ty,
                        nullable: false,
                        optional: false,
                    }
                }
            };
            members.push(member);
        }
        self.emit_interface(name, &members);
    }
}
