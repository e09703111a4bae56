//! Wire-level document model and rendering.
//!
//! Rendering is deterministic: the same document always produces the same
//! text. Two styles are available, a single-line compact form (used as the
//! request body) and an indented form for humans.

use std::fmt;

use shapeql_core::TypeExpr;

/// `$name: Type` in the operation header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariableDefinition {
    /// Bare name (no sigil).
    pub name: String,
    pub ty: TypeExpr,
}

/// `arg: $variable`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Argument {
    pub name: String,
    /// Bare variable name (no sigil).
    pub variable: String,
}

/// One selection: `[alias: ]name[(args)][ { ... }]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub alias: Option<String>,
    pub arguments: Vec<Argument>,
    /// `None` for terminal fields.
    pub selection_set: Option<SelectionSet>,
}

impl Field {
    /// Key under which the service returns this field's value.
    pub fn response_key(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionSet {
    pub fields: Vec<Field>,
}

/// A single query operation ready to be sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompiledDocument {
    operation_name: Option<String>,
    variables: Vec<VariableDefinition>,
    selection_set: SelectionSet,
}

impl CompiledDocument {
    pub(crate) fn new(
        operation_name: Option<String>,
        variables: Vec<VariableDefinition>,
        selection_set: SelectionSet,
    ) -> Self {
        Self {
            operation_name,
            variables,
            selection_set,
        }
    }

    pub fn operation_name(&self) -> Option<&str> {
        self.operation_name.as_deref()
    }

    /// Variable declarations in first-use order.
    pub fn variables(&self) -> &[VariableDefinition] {
        &self.variables
    }

    pub fn variable(&self, name: &str) -> Option<&VariableDefinition> {
        self.variables.iter().find(|v| v.name == name)
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    pub fn render(&self, style: RenderStyle) -> String {
        let mut printer = Printer {
            out: String::new(),
            style,
        };
        printer.document(self);
        printer.out
    }
}

/// `{}` renders compact, `{:#}` renders pretty.
impl fmt::Display for CompiledDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let style = if f.alternate() {
            RenderStyle::Pretty
        } else {
            RenderStyle::Compact
        };
        f.write_str(&self.render(style))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderStyle {
    /// Single line: `query { a { b } }`
    #[default]
    Compact,
    /// Two-space indentation, one selection per line.
    Pretty,
}

struct Printer {
    out: String,
    style: RenderStyle,
}

impl Printer {
    fn document(&mut self, doc: &CompiledDocument) {
        self.out.push_str("query");
        if let Some(name) = &doc.operation_name {
            self.out.push(' ');
            self.out.push_str(name);
        }
        if !doc.variables.is_empty() {
            self.out.push('(');
            for (i, var) in doc.variables.iter().enumerate() {
                if i > 0 {
                    self.out.push_str(", ");
                }
                self.out.push('$');
                self.out.push_str(&var.name);
                self.out.push_str(": ");
                self.out.push_str(&var.ty.to_string());
            }
            self.out.push(')');
        }
        self.out.push(' ');
        self.selection_set(&doc.selection_set, 0);
    }

    fn selection_set(&mut self, set: &SelectionSet, depth: usize) {
        match self.style {
            RenderStyle::Compact => {
                self.out.push_str("{ ");
                for (i, field) in set.fields.iter().enumerate() {
                    if i > 0 {
                        self.out.push(' ');
                    }
                    self.field(field, depth);
                }
                self.out.push_str(" }");
            }
            RenderStyle::Pretty => {
                self.out.push_str("{\n");
                for field in &set.fields {
                    self.indent(depth + 1);
                    self.field(field, depth + 1);
                    self.out.push('\n');
                }
                self.indent(depth);
                self.out.push('}');
            }
        }
    }

    fn field(&mut self, field: &Field, depth: usize) {
        if let Some(alias) = &field.alias {
            self.out.push_str(alias);
            self.out.push_str(": ");
        }
        self.out.push_str(&field.name);

        if !field.arguments.is_empty() {
            self.out.push('(');
            for (i, arg) in field.arguments.iter().enumerate() {
                if i > 0 {
                    self.out.push_str(", ");
                }
                self.out.push_str(&arg.name);
                self.out.push_str(": $");
                self.out.push_str(&arg.variable);
            }
            self.out.push(')');
        }

        if let Some(set) = &field.selection_set {
            self.out.push(' ');
            self.selection_set(set, depth);
        }
    }

    fn indent(&mut self, depth: usize) {
        for _ in 0..depth {
            self.out.push_str("  ");
        }
    }
}
