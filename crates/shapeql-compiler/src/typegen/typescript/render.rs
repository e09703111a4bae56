//! Output rendering methods.

use shapeql_core::{ScalarKind, TypeExpr};

use crate::shape::ScalarRule;

use super::emitter::Member;
use super::{Emitter, OptionalStyle};

impl Emitter<'_> {
    pub(super) fn scalar_member(&self, key: &str, rule: &ScalarRule) -> Member {
        match rule {
            ScalarRule::Typed { ty, kind } => {
                let nullable = !ty.is_non_null();
                Member {
                    key: key.to_owned(),
                    ty: self.type_expr(ty.nullable(), *kind),
                    nullable,
                    optional: nullable && self.config.optional == OptionalStyle::QuestionMark,
                }
            }
            // `unknown` already admits null
            ScalarRule::Opaque { .. } => Member {
                key: key.to_owned(),
                ty: "unknown".to_owned(),
                nullable: false,
                optional: false,
            },
        }
    }

    /// TypeScript for a type known to be present; list elements carry their
    /// own nullability.
    pub(super) fn type_expr(&self, ty: &TypeExpr, kind: ScalarKind) -> String {
        match ty {
            TypeExpr::Named(_) => primitive(kind).to_owned(),
            TypeExpr::NonNull(inner) => self.type_expr(inner, kind),
            TypeExpr::List(inner) => {
                let elem = if inner.is_non_null() {
                    self.type_expr(inner, kind)
                } else {
                    format!("({} | null)", self.type_expr(inner, kind))
                };
                format!("{elem}[]")
            }
        }
    }

    pub(super) fn emit_nested_alias(&mut self, name: &str) {
        let export = if self.config.export { "export " } else { "" };
        self.output
            .push_str(&format!("{export}type {name}<T> = T | {name}<T>[] | null;\n\n"));
    }

    pub(super) fn emit_interface(&mut self, name: &str, members: &[Member]) {
        let export = if self.config.export { "export " } else { "" };
        self.output.push_str(&format!("{export}interface {name} {{\n"));

        let readonly = if self.config.readonly { "readonly " } else { "" };
        for member in members {
            let optional = if member.optional { "?" } else { "" };
            let null = if member.nullable { " | null" } else { "" };
            self.output.push_str(&format!(
                "  {readonly}{}{optional}: {}{null};\n",
                member.key, member.ty
            ));
        }

        self.output.push_str("}\n\n");
    }
}

fn primitive(kind: ScalarKind) -> &'static str {
    match kind {
        ScalarKind::Text => "string",
        ScalarKind::Integer | ScalarKind::Number => "number",
        ScalarKind::Boolean => "boolean",
        ScalarKind::Opaque => "unknown",
    }
}
