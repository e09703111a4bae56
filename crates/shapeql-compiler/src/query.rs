//! Query facade: compile once, run many.

use shapeql_core::spec::Group;
use shapeql_core::ScalarTable;

use crate::Result;
use crate::compile::Compiler;
use crate::document::{CompiledDocument, RenderStyle};
use crate::shape::ResultShape;

/// Compile options for one specification.
///
/// ```
/// use shapeql_compiler::QueryBuilder;
/// use shapeql_core::spec::{group, op, scalar, var};
///
/// let root = group([(
///     "order",
///     op(group([("id", scalar("String!"))]))
///         .arg("argA", var("$varA", "ID!"))
///         .into(),
/// )]);
/// let query = QueryBuilder::new(&root).name("GetOrder").compile().unwrap();
/// assert_eq!(
///     query.text(),
///     "query GetOrder($varA: ID!) { order(argA: $varA) { id } }"
/// );
/// ```
pub struct QueryBuilder<'a> {
    root: &'a Group,
    name: Option<String>,
    scalars: ScalarTable,
}

impl<'a> QueryBuilder<'a> {
    pub fn new(root: &'a Group) -> Self {
        Self {
            root,
            name: None,
            scalars: ScalarTable::default(),
        }
    }

    /// Name the operation (`query Name(...)`).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Scalar table used for decode rules and variable checks.
    pub fn scalars(mut self, scalars: ScalarTable) -> Self {
        self.scalars = scalars;
        self
    }

    pub fn compile(self) -> Result<CompiledQuery> {
        let (document, shape) =
            Compiler::new(&self.scalars).compile(self.root, self.name.as_deref())?;
        let text = document.render(RenderStyle::Compact);
        Ok(CompiledQuery {
            document,
            shape,
            text,
            scalars: self.scalars,
        })
    }
}

/// Immutable result of a compilation. Share it behind an `Arc` to run the
/// same document with many variable bindings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompiledQuery {
    document: CompiledDocument,
    shape: ResultShape,
    text: String,
    scalars: ScalarTable,
}

impl CompiledQuery {
    pub fn document(&self) -> &CompiledDocument {
        &self.document
    }

    pub fn shape(&self) -> &ResultShape {
        &self.shape
    }

    /// Compact wire text, rendered once at compile time.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn pretty(&self) -> String {
        self.document.render(RenderStyle::Pretty)
    }

    pub fn operation_name(&self) -> Option<&str> {
        self.document.operation_name()
    }

    pub fn scalars(&self) -> &ScalarTable {
        &self.scalars
    }
}
