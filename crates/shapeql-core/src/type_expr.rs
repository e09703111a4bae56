//! Type descriptors for variables and scalar fields.
//!
//! A descriptor is the compact text form used on the wire (`[ID!]!`).
//! [`TypeExpr`] is its parsed structure. Parsing strips modifiers outside-in
//! (trailing `!` first, then one pair of enclosing brackets), so rendering a
//! parsed expression with `Display` reproduces the descriptor exactly.

use std::fmt;

use crate::utils::is_valid_name;

/// Parsed type descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeExpr {
    /// A named type: `ID`, `String`, `OrderFilter`.
    Named(String),
    /// `[T]`
    List(Box<TypeExpr>),
    /// `T!`. Never wraps another `NonNull`.
    NonNull(Box<TypeExpr>),
}

/// Why a descriptor was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DescriptorFault {
    Empty,
    NestedNonNull,
    UnbalancedBrackets,
    UnclosedList,
    InvalidName,
    /// More than [`MAX_LIST_DEPTH`] nested lists.
    TooDeep,
}

impl fmt::Display for DescriptorFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            DescriptorFault::Empty => "empty type",
            DescriptorFault::NestedNonNull => "non-null modifier applied twice",
            DescriptorFault::UnbalancedBrackets => "unbalanced brackets",
            DescriptorFault::UnclosedList => "unclosed list type",
            DescriptorFault::InvalidName => "invalid type name",
            DescriptorFault::TooDeep => "list types nested too deeply",
        };
        f.write_str(msg)
    }
}

/// A descriptor that does not follow the type grammar.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("malformed type descriptor `{descriptor}`: {reason}")]
pub struct MalformedTypeDescriptor {
    /// The raw descriptor as the caller wrote it.
    pub descriptor: String,
    pub reason: DescriptorFault,
}

impl TypeExpr {
    /// Parse a compact descriptor such as `[[ID!]]!`.
    pub fn parse(descriptor: &str) -> Result<Self, MalformedTypeDescriptor> {
        parse_descriptor(descriptor).map_err(|reason| MalformedTypeDescriptor {
            descriptor: descriptor.to_owned(),
            reason,
        })
    }

    pub fn named(name: impl Into<String>) -> Self {
        TypeExpr::Named(name.into())
    }

    pub fn list(inner: TypeExpr) -> Self {
        TypeExpr::List(Box::new(inner))
    }

    /// Wrap in `NonNull`. Already non-null expressions are returned unchanged.
    pub fn non_null(inner: TypeExpr) -> Self {
        match inner {
            TypeExpr::NonNull(_) => inner,
            other => TypeExpr::NonNull(Box::new(other)),
        }
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, TypeExpr::NonNull(_))
    }

    /// The expression with an outer `NonNull` removed, if any.
    pub fn nullable(&self) -> &TypeExpr {
        match self {
            TypeExpr::NonNull(inner) => inner,
            other => other,
        }
    }

    /// Innermost named type.
    pub fn base_name(&self) -> &str {
        match self {
            TypeExpr::Named(name) => name,
            TypeExpr::List(inner) | TypeExpr::NonNull(inner) => inner.base_name(),
        }
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Named(name) => f.write_str(name),
            TypeExpr::List(inner) => write!(f, "[{inner}]"),
            TypeExpr::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}

impl std::str::FromStr for TypeExpr {
    type Err = MalformedTypeDescriptor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeExpr::parse(s)
    }
}

/// List nesting allowed in one descriptor. Bounds the depth of every
/// recursive walk over a parsed [`TypeExpr`].
pub const MAX_LIST_DEPTH: usize = 32;

enum Modifier {
    List,
    NonNull,
}

fn parse_descriptor(descriptor: &str) -> Result<TypeExpr, DescriptorFault> {
    let mut modifiers = Vec::new();
    let mut depth = 0;
    let mut s = descriptor;

    loop {
        if s.is_empty() {
            return Err(DescriptorFault::Empty);
        }

        if let Some(rest) = s.strip_suffix('!') {
            if rest.ends_with('!') {
                return Err(DescriptorFault::NestedNonNull);
            }
            modifiers.push(Modifier::NonNull);
            s = rest;
            continue;
        }

        if let Some(rest) = s.strip_prefix('[') {
            let Some(inner) = rest.strip_suffix(']') else {
                return Err(DescriptorFault::UnclosedList);
            };
            depth += 1;
            if depth > MAX_LIST_DEPTH {
                return Err(DescriptorFault::TooDeep);
            }
            // `[A][B]` strips to `A][B`, which must not be read as one list.
            if !is_balanced(inner) {
                return Err(DescriptorFault::UnbalancedBrackets);
            }
            modifiers.push(Modifier::List);
            s = inner;
            continue;
        }

        break;
    }

    if s.contains(['[', ']']) {
        return Err(DescriptorFault::UnbalancedBrackets);
    }
    if !is_valid_name(s) {
        return Err(DescriptorFault::InvalidName);
    }

    let ty = modifiers
        .into_iter()
        .rev()
        .fold(TypeExpr::Named(s.to_owned()), |inner, modifier| match modifier {
            Modifier::List => TypeExpr::List(Box::new(inner)),
            Modifier::NonNull => TypeExpr::NonNull(Box::new(inner)),
        });
    Ok(ty)
}

fn is_balanced(s: &str) -> bool {
    let mut depth = 0usize;
    for c in s.chars() {
        match c {
            '[' => depth += 1,
            ']' => {
                let Some(next) = depth.checked_sub(1) else {
                    return false;
                };
                depth = next;
            }
            _ => {}
        }
    }
    depth == 0
}
