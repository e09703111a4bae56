//! Decoding raw responses through a [`ResultShape`].

use std::fmt;

use serde_json::Value as Json;

use shapeql_compiler::{ResultShape, ScalarRule, ShapeKind};
use shapeql_core::{ScalarKind, TypeExpr};

use crate::json_kind;
use crate::{Result, RuntimeError, Value};

/// Reshape a raw response tree into the caller's keys.
///
/// Every caller key is looked up under its response key (the alias when the
/// field was renamed). Output order follows the specification.
pub fn reshape(shape: &ResultShape, response: &Json) -> Result<Value> {
    let Json::Object(_) = response else {
        return Err(RuntimeError::MalformedResponse {
            path: String::new(),
            found: json_kind(response),
        });
    };
    reshape_level(shape, response, &mut Path::default())
}

fn reshape_level<'a>(
    shape: &'a ResultShape,
    raw: &Json,
    path: &mut Path<'a>,
) -> Result<Value> {
    match raw {
        Json::Object(map) => {
            let mut fields = Vec::with_capacity(shape.len());
            for (key, entry) in shape.iter() {
                path.segments.push(Segment::Key(key));
                let Some(value) = map.get(&entry.response_key) else {
                    return Err(RuntimeError::MissingField {
                        path: path.to_string(),
                    });
                };
                let decoded = match &entry.kind {
                    ShapeKind::Scalar(rule) => decode_scalar(rule, value, path)?,
                    ShapeKind::Nested(inner) => reshape_level(inner, value, path)?,
                };
                path.segments.pop();
                fields.push((key.to_owned(), decoded));
            }
            Ok(Value::Object(fields))
        }
        // Lists of nested objects reshape element-wise.
        Json::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                path.segments.push(Segment::Index(index));
                out.push(reshape_level(shape, item, path)?);
                path.segments.pop();
            }
            Ok(Value::List(out))
        }
        Json::Null => Ok(Value::Null),
        other => Err(RuntimeError::MalformedResponse {
            path: path.to_string(),
            found: json_kind(other),
        }),
    }
}

fn decode_scalar(rule: &ScalarRule, raw: &Json, path: &mut Path<'_>) -> Result<Value> {
    match rule {
        ScalarRule::Typed { ty, kind } => decode_typed(ty, *kind, raw, path),
        ScalarRule::Opaque { .. } if raw.is_null() => Ok(Value::Null),
        ScalarRule::Opaque { .. } => Ok(Value::Raw(raw.clone())),
    }
}

fn decode_typed(
    ty: &TypeExpr,
    kind: ScalarKind,
    raw: &Json,
    path: &mut Path<'_>,
) -> Result<Value> {
    match ty {
        TypeExpr::NonNull(inner) => {
            if raw.is_null() {
                return Err(RuntimeError::UnexpectedNull {
                    path: path.to_string(),
                });
            }
            decode_typed(inner, kind, raw, path)
        }
        _ if raw.is_null() => Ok(Value::Null),
        TypeExpr::List(inner) => {
            let Json::Array(items) = raw else {
                return Err(mismatch(ty, raw, path));
            };
            let mut out = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                path.segments.push(Segment::Index(index));
                out.push(decode_typed(inner, kind, item, path)?);
                path.segments.pop();
            }
            Ok(Value::List(out))
        }
        TypeExpr::Named(_) => decode_named(kind, raw).ok_or_else(|| mismatch(ty, raw, path)),
    }
}

fn decode_named(kind: ScalarKind, raw: &Json) -> Option<Value> {
    match kind {
        ScalarKind::Text => raw.as_str().map(|s| Value::Text(s.to_owned())),
        ScalarKind::Integer => raw.as_i64().map(Value::Integer),
        ScalarKind::Number => raw.as_f64().map(Value::Number),
        ScalarKind::Boolean => raw.as_bool().map(Value::Bool),
        ScalarKind::Opaque => Some(Value::Raw(raw.clone())),
    }
}

fn mismatch(ty: &TypeExpr, raw: &Json, path: &Path<'_>) -> RuntimeError {
    RuntimeError::ScalarMismatch {
        path: path.to_string(),
        expected: ty.to_string(),
        found: json_kind(raw),
    }
}

/// Caller-key path into the response, rendered as `order.lines[2].qty`.
#[derive(Default)]
struct Path<'a> {
    segments: Vec<Segment<'a>>,
}

enum Segment<'a> {
    Key(&'a str),
    Index(usize),
}

impl fmt::Display for Path<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Key(key) if i == 0 => f.write_str(key)?,
                Segment::Key(key) => write!(f, ".{key}")?,
                Segment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}
