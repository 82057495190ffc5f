use crate::http::HttpTransport;
use crate::transport::{Request, Transport};
use crate::Result;
use serde_json::Value;
use std::sync::Arc;
use watcher_core::{is_empty_body, operation_path, ArgumentError, Config, Operation, Params};

/// Watcher REST API Client
///
/// Stateless apart from the transport it wraps; cheap to clone and share.
#[derive(Clone)]
pub struct WatcherClient {
    transport: Arc<dyn Transport>,
}

impl WatcherClient {
    /// Wrap an existing transport
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Create a client over HTTP to the given base URL
    pub fn connect(base_url: impl Into<String>) -> Self {
        Self::new(Arc::new(HttpTransport::new(base_url)))
    }

    /// Create a client over HTTP using timeout, TLS and auth settings from `config`
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(Arc::new(HttpTransport::from_config(config)?)))
    }

    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// Get info about the watcher plugin
    #[tracing::instrument(skip(self, params))]
    pub async fn info(&self, params: Params) -> Result<Value> {
        self.send(Operation::Info, None, params, None).await
    }

    /// Create or replace a watch
    #[tracing::instrument(skip(self, body, params))]
    pub async fn put_watch(&self, id: &str, body: Value, params: Params) -> Result<Value> {
        if id.is_empty() {
            return Err(ArgumentError::empty("id").into());
        }
        if is_empty_body(&body) {
            return Err(ArgumentError::empty("body").into());
        }
        self.send(Operation::PutWatch, Some(id), params, Some(body)).await
    }

    /// Get stats for the watcher plugin
    #[tracing::instrument(skip(self, params))]
    pub async fn stats(&self, params: Params) -> Result<Value> {
        self.send(Operation::Stats, None, params, None).await
    }

    /// Stop the watcher service
    #[tracing::instrument(skip(self, params))]
    pub async fn stop(&self, params: Params) -> Result<Value> {
        self.send(Operation::Stop, None, params, None).await
    }

    /// Start the watcher service
    #[tracing::instrument(skip(self, params))]
    pub async fn start(&self, params: Params) -> Result<Value> {
        self.send(Operation::Start, None, params, None).await
    }

    /// Acknowledge a watch's actions
    #[tracing::instrument(skip(self, params))]
    pub async fn ack_watch(&self, id: &str, params: Params) -> Result<Value> {
        self.send(Operation::AckWatch, Some(id), params, None).await
    }

    /// Execute a watch manually, optionally with an execution control body
    #[tracing::instrument(skip(self, body, params))]
    pub async fn execute_watch(
        &self,
        id: &str,
        body: Option<Value>,
        params: Params,
    ) -> Result<Value> {
        self.send(Operation::ExecuteWatch, Some(id), params, body).await
    }

    /// Retrieve a watch definition
    #[tracing::instrument(skip(self, params))]
    pub async fn get_watch(&self, id: &str, params: Params) -> Result<Value> {
        self.send(Operation::GetWatch, Some(id), params, None).await
    }

    /// Delete a watch
    #[tracing::instrument(skip(self, params))]
    pub async fn delete_watch(&self, id: &str, params: Params) -> Result<Value> {
        self.send(Operation::DeleteWatch, Some(id), params, None).await
    }

    /// Restart the watcher service
    #[tracing::instrument(skip(self, params))]
    pub async fn restart(&self, params: Params) -> Result<Value> {
        self.send(Operation::Restart, None, params, None).await
    }

    async fn send(
        &self,
        operation: Operation,
        id: Option<&str>,
        params: Params,
        body: Option<Value>,
    ) -> Result<Value> {
        let path = operation_path(operation, id)?;
        for param in params.undocumented_for(operation) {
            tracing::debug!(%operation, param, "Forwarding undocumented query param");
        }

        tracing::debug!(%operation, %path, "Dispatching watcher request");
        self.transport
            .perform_request(Request {
                method: operation.method(),
                path,
                params,
                body,
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientError;
    use serde_json::json;
    use std::sync::Mutex;
    use watcher_core::Method;

    /// Records every request and answers with a canned reply.
    struct RecordingTransport {
        requests: Mutex<Vec<Request>>,
        reply: std::result::Result<Value, (u16, String)>,
    }

    impl RecordingTransport {
        fn replying(reply: Value) -> Arc<Self> {
            Arc::new(Self {
                requests: Mutex::new(Vec::new()),
                reply: Ok(reply),
            })
        }

        fn failing(status: u16, message: &str) -> Arc<Self> {
            Arc::new(Self {
                requests: Mutex::new(Vec::new()),
                reply: Err((status, message.to_string())),
            })
        }

        fn requests(&self) -> Vec<Request> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl Transport for RecordingTransport {
        async fn perform_request(&self, request: Request) -> Result<Value> {
            self.requests.lock().unwrap().push(request);
            match &self.reply {
                Ok(value) => Ok(value.clone()),
                Err((status, message)) => Err(ClientError::Server {
                    status: *status,
                    message: message.clone(),
                }),
            }
        }
    }

    fn watch_body() -> Value {
        json!({
            "trigger": {"schedule": {"interval": "10s"}},
            "input": {"search": {"request": {"indices": ["logs"]}}},
            "actions": {"log": {"logging": {"text": "hit"}}}
        })
    }

    fn assert_empty_arg(err: ClientError, name: &str) {
        match err {
            ClientError::InvalidArgument(ArgumentError::EmptyValue { name: got }) => {
                assert_eq!(got, name)
            }
            other => panic!("expected empty argument error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_each_operation_issues_one_request() {
        let transport = RecordingTransport::replying(json!({"acknowledged": true}));
        let client = WatcherClient::new(transport.clone());

        client.info(Params::new()).await.unwrap();
        client.put_watch("w1", watch_body(), Params::new()).await.unwrap();
        client.stats(Params::new()).await.unwrap();
        client.stop(Params::new()).await.unwrap();
        client.start(Params::new()).await.unwrap();
        client.ack_watch("w1", Params::new()).await.unwrap();
        client.execute_watch("w1", None, Params::new()).await.unwrap();
        client.get_watch("w1", Params::new()).await.unwrap();
        client.delete_watch("w1", Params::new()).await.unwrap();
        client.restart(Params::new()).await.unwrap();

        let sent: Vec<(Method, String)> = transport
            .requests()
            .into_iter()
            .map(|r| (r.method, r.path))
            .collect();

        let expected = vec![
            (Method::Get, "/_watcher/"),
            (Method::Put, "/_watcher/watch/w1"),
            (Method::Get, "/_watcher/stats"),
            (Method::Put, "/_watcher/_stop"),
            (Method::Put, "/_watcher/_start"),
            (Method::Put, "/_watcher/watch/w1/_ack"),
            (Method::Put, "/_watcher/watch/w1/_execute"),
            (Method::Get, "/_watcher/watch/w1"),
            (Method::Delete, "/_watcher/watch/w1"),
            (Method::Put, "/_watcher/_restart"),
        ];
        let expected: Vec<(Method, String)> = expected
            .into_iter()
            .map(|(m, p)| (m, p.to_string()))
            .collect();

        assert_eq!(sent, expected);
    }

    #[tokio::test]
    async fn test_empty_id_rejected_without_request() {
        let transport = RecordingTransport::replying(json!({}));
        let client = WatcherClient::new(transport.clone());

        assert_empty_arg(
            client.put_watch("", watch_body(), Params::new()).await.unwrap_err(),
            "id",
        );
        assert_empty_arg(client.ack_watch("", Params::new()).await.unwrap_err(), "id");
        assert_empty_arg(
            client
                .execute_watch("", Some(json!({"ignore_condition": true})), Params::new())
                .await
                .unwrap_err(),
            "id",
        );
        assert_empty_arg(client.get_watch("", Params::new()).await.unwrap_err(), "id");
        assert_empty_arg(
            client.delete_watch("", Params::new()).await.unwrap_err(),
            "id",
        );

        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_put_watch_requires_body() {
        let transport = RecordingTransport::replying(json!({}));
        let client = WatcherClient::new(transport.clone());

        for body in [Value::Null, json!(""), json!([])] {
            let err = client.put_watch("w1", body, Params::new()).await.unwrap_err();
            assert_empty_arg(err, "body");
        }

        // id is checked before body
        let err = client.put_watch("", Value::Null, Params::new()).await.unwrap_err();
        assert_empty_arg(err, "id");

        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_put_watch_sends_empty_object() {
        let transport = RecordingTransport::replying(json!({}));
        let client = WatcherClient::new(transport.clone());

        client.put_watch("w1", json!({}), Params::new()).await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].path, "/_watcher/watch/w1");
        assert_eq!(requests[0].body, Some(json!({})));
    }

    #[tokio::test]
    async fn test_response_passed_through_unmodified() {
        let response = json!({
            "found": true,
            "_id": "w1",
            "watch": watch_body(),
            "_status": {"actions": {"log": {"ack": {"state": "awaits_successful_execution"}}}}
        });
        let transport = RecordingTransport::replying(response.clone());
        let client = WatcherClient::new(transport);

        let got = client.get_watch("w1", Params::new()).await.unwrap();
        assert_eq!(got, response);
    }

    #[tokio::test]
    async fn test_bodies_forwarded() {
        let transport = RecordingTransport::replying(json!({}));
        let client = WatcherClient::new(transport.clone());

        client.put_watch("w1", watch_body(), Params::new()).await.unwrap();
        client
            .execute_watch("w1", Some(json!({"record_execution": true})), Params::new())
            .await
            .unwrap();
        client.execute_watch("w1", None, Params::new()).await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].body, Some(watch_body()));
        assert_eq!(requests[1].body, Some(json!({"record_execution": true})));
        assert_eq!(requests[2].body, None);
    }

    #[tokio::test]
    async fn test_params_forwarded_verbatim() {
        let transport = RecordingTransport::replying(json!({}));
        let client = WatcherClient::new(transport.clone());

        client
            .delete_watch("w1", Params::new().force(true).master_timeout("1m"))
            .await
            .unwrap();

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].params.get("force"), Some("true"));
        assert_eq!(requests[0].params.get("master_timeout"), Some("1m"));

        // Params outside the documented list still go out untouched
        client
            .get_watch("w1", Params::new().with("filter_path", "watch.trigger"))
            .await
            .unwrap();
        client
            .execute_watch("w1", None, Params::new().with("debug", true))
            .await
            .unwrap();

        let requests = transport.requests();
        assert_eq!(requests.len(), 3);
        assert_eq!(requests[1].path, "/_watcher/watch/w1");
        assert_eq!(requests[1].params.get("filter_path"), Some("watch.trigger"));
        assert_eq!(requests[2].path, "/_watcher/watch/w1/_execute");
        assert_eq!(requests[2].params.get("debug"), Some("true"));
    }

    #[tokio::test]
    async fn test_watch_id_escaped_in_path() {
        let transport = RecordingTransport::replying(json!({}));
        let client = WatcherClient::new(transport.clone());

        client.ack_watch("team/a b", Params::new()).await.unwrap();
        assert_eq!(
            transport.requests()[0].path,
            "/_watcher/watch/team%2Fa%20b/_ack"
        );
    }

    #[tokio::test]
    async fn test_transport_error_surfaced_unmodified() {
        let transport = RecordingTransport::failing(409, "version conflict");
        let client = WatcherClient::new(transport.clone());

        let err = client.ack_watch("w1", Params::new()).await.unwrap_err();
        match err {
            ClientError::Server { status, message } => {
                assert_eq!(status, 409);
                assert_eq!(message, "version conflict");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(transport.requests().len(), 1);
    }
}
