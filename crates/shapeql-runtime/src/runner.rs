//! Compile once, run many.

use std::sync::Arc;

use shapeql_compiler::CompiledQuery;
use tracing::Instrument;

use crate::binding::Bindings;
use crate::reshape::reshape;
use crate::transport::{Request, Transport};
use crate::{Result, Value};

/// Runs one compiled query through a transport.
///
/// The query is shared, so any number of runners (or concurrent runs of one
/// runner) can use it with different bindings.
pub struct Runner<T> {
    query: Arc<CompiledQuery>,
    transport: T,
}

impl<T: Transport> Runner<T> {
    pub fn new(query: Arc<CompiledQuery>, transport: T) -> Self {
        Self { query, transport }
    }

    pub fn query(&self) -> &CompiledQuery {
        &self.query
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Validate `bindings`, execute, and reshape the response.
    pub async fn run(&self, bindings: &Bindings) -> Result<Value> {
        let span = tracing::debug_span!("run", operation = self.query.operation_name());
        self.run_inner(bindings).instrument(span).await
    }

    async fn run_inner(&self, bindings: &Bindings) -> Result<Value> {
        let request = Request::new(&self.query, bindings)?;
        tracing::debug!(variables = bindings.len(), "executing query");

        let response = self.transport.execute(&request).await.inspect_err(|err| {
            tracing::debug!(error = %err, "transport failed");
        })?;
        tracing::debug!("transport returned; reshaping");

        reshape(self.query.shape(), &response)
    }
}
