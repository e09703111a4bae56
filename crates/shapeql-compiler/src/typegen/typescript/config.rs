//! Configuration types for TypeScript emission.

/// How nullable result members are written. Variables are always
/// `name: T | null`, since every declared variable must be bound.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OptionalStyle {
    /// `name: T | null`
    #[default]
    Null,
    /// `name?: T | null`
    QuestionMark,
}

/// Configuration for TypeScript emission.
#[derive(Clone, Debug)]
pub struct Config {
    /// Whether to export interfaces
    pub(crate) export: bool,
    /// Result interface name; defaults to the operation name, then `Query`
    pub(crate) root_name: Option<String>,
    /// Variables interface name; defaults to the root name + `Variables`
    pub(crate) variables_name: Option<String>,
    pub(crate) optional: OptionalStyle,
    /// Mark members `readonly`
    pub(crate) readonly: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export: true,
            root_name: None,
            variables_name: None,
            optional: OptionalStyle::default(),
            readonly: false,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn export(mut self, value: bool) -> Self {
        self.export = value;
        self
    }

    pub fn root_name(mut self, name: impl Into<String>) -> Self {
        self.root_name = Some(name.into());
        self
    }

    pub fn variables_name(mut self, name: impl Into<String>) -> Self {
        self.variables_name = Some(name.into());
        self
    }

    pub fn optional(mut self, style: OptionalStyle) -> Self {
        self.optional = style;
        self
    }

    pub fn readonly(mut self, value: bool) -> Self {
        self.readonly = value;
        self
    }
}
