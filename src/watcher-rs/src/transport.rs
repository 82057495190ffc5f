use serde_json::Value;
use watcher_core::{Method, Params};

use crate::Result;

/// A fully built watcher request, ready to go on the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: Method,
    pub path: String,
    pub params: Params,
    pub body: Option<Value>,
}

/// Performs HTTP requests on behalf of the client.
///
/// Connection reuse, timeouts and retries belong to implementations; the
/// client calls `perform_request` exactly once per operation and returns
/// whatever it yields.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn perform_request(&self, request: Request) -> Result<Value>;
}
