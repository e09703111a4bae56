//! Variable binding validation.

use shapeql_compiler::CompiledDocument;
use shapeql_core::{ScalarTable, TypeExpr};

use crate::json_kind;
use crate::{Result, RuntimeError};

/// Bare variable name to bound value.
pub type Bindings = serde_json::Map<String, serde_json::Value>;

/// Check that `bindings` names exactly the declared variables and that each
/// value fits its declared type.
pub fn validate_bindings(
    document: &CompiledDocument,
    scalars: &ScalarTable,
    bindings: &Bindings,
) -> Result<()> {
    for def in document.variables() {
        let Some(value) = bindings.get(&def.name) else {
            return Err(RuntimeError::MissingVariable {
                name: def.name.clone(),
            });
        };
        check_value(&def.ty, value, scalars).map_err(|found| {
            RuntimeError::VariableTypeMismatch {
                name: def.name.clone(),
                expected: def.ty.to_string(),
                found,
            }
        })?;
    }

    if let Some(name) = bindings
        .keys()
        .find(|name| document.variable(name).is_none())
    {
        return Err(RuntimeError::UnexpectedVariable { name: name.clone() });
    }

    Ok(())
}

/// Err carries the JSON kind of the offending value.
fn check_value(
    ty: &TypeExpr,
    value: &serde_json::Value,
    scalars: &ScalarTable,
) -> std::result::Result<(), &'static str> {
    match ty {
        TypeExpr::NonNull(inner) => {
            if value.is_null() {
                return Err("null");
            }
            check_value(inner, value, scalars)
        }
        _ if value.is_null() => Ok(()),
        TypeExpr::List(inner) => {
            let Some(items) = value.as_array() else {
                return Err(json_kind(value));
            };
            items
                .iter()
                .try_for_each(|item| check_value(inner, item, scalars))
        }
        TypeExpr::Named(name) => {
            if scalars.kind_of(name).accepts(value) {
                Ok(())
            } else {
                Err(json_kind(value))
            }
        }
    }
}
