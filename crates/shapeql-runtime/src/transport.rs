//! The seam between a runner and whatever executes documents.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use shapeql_compiler::CompiledQuery;

use crate::binding::{Bindings, validate_bindings};
use crate::{Result, TransportError};

/// Request body handed to a [`Transport`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Request<'a> {
    pub query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<&'a str>,
    pub variables: &'a Bindings,
}

impl<'a> Request<'a> {
    /// Validate `bindings` against `query` and build its request.
    pub fn new(query: &'a CompiledQuery, bindings: &'a Bindings) -> Result<Self> {
        validate_bindings(query.document(), query.scalars(), bindings)?;
        Ok(Self {
            query: query.text(),
            operation_name: query.operation_name(),
            variables: bindings,
        })
    }
}

/// Executes a request against the remote service.
///
/// Implementations return the response's data tree, keyed by wire names and
/// aliases. Retries, timeouts and the response envelope are theirs to handle.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(
        &self,
        request: &Request<'_>,
    ) -> std::result::Result<serde_json::Value, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn execute(
        &self,
        request: &Request<'_>,
    ) -> std::result::Result<serde_json::Value, TransportError> {
        (**self).execute(request).await
    }
}
