use std::fmt;

/// Query params the server documents for every operation.
pub const GLOBAL_PARAMS: &[&str] = &["pretty", "format"];

/// HTTP verbs used by the watcher API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every remote watcher operation the client knows how to issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Info,
    PutWatch,
    Stats,
    Stop,
    Start,
    AckWatch,
    ExecuteWatch,
    GetWatch,
    DeleteWatch,
    Restart,
}

impl Operation {
    pub const ALL: [Operation; 10] = [
        Operation::Info,
        Operation::PutWatch,
        Operation::Stats,
        Operation::Stop,
        Operation::Start,
        Operation::AckWatch,
        Operation::ExecuteWatch,
        Operation::GetWatch,
        Operation::DeleteWatch,
        Operation::Restart,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Info => "info",
            Operation::PutWatch => "put_watch",
            Operation::Stats => "stats",
            Operation::Stop => "stop",
            Operation::Start => "start",
            Operation::AckWatch => "ack_watch",
            Operation::ExecuteWatch => "execute_watch",
            Operation::GetWatch => "get_watch",
            Operation::DeleteWatch => "delete_watch",
            Operation::Restart => "restart",
        }
    }

    pub fn method(&self) -> Method {
        match self {
            Operation::Info | Operation::Stats | Operation::GetWatch => Method::Get,
            Operation::DeleteWatch => Method::Delete,
            Operation::PutWatch
            | Operation::Stop
            | Operation::Start
            | Operation::AckWatch
            | Operation::ExecuteWatch
            | Operation::Restart => Method::Put,
        }
    }

    /// Operation-specific query params, not counting [`GLOBAL_PARAMS`].
    ///
    /// Informational only: params outside this list are still sent.
    pub fn documented_params(&self) -> &'static [&'static str] {
        match self {
            Operation::PutWatch | Operation::AckWatch => &["master_timeout"],
            Operation::DeleteWatch => &["force", "master_timeout"],
            _ => &[],
        }
    }

    pub fn documents_param(&self, name: &str) -> bool {
        GLOBAL_PARAMS.contains(&name) || self.documented_params().contains(&name)
    }

    pub fn requires_id(&self) -> bool {
        matches!(
            self,
            Operation::PutWatch
                | Operation::AckWatch
                | Operation::ExecuteWatch
                | Operation::GetWatch
                | Operation::DeleteWatch
        )
    }

    /// Path segments after the `_watcher` root. `None` stands in for the watch id.
    pub fn path_template(&self) -> &'static [Option<&'static str>] {
        match self {
            Operation::Info => &[],
            Operation::Stats => &[Some("stats")],
            Operation::Stop => &[Some("_stop")],
            Operation::Start => &[Some("_start")],
            Operation::Restart => &[Some("_restart")],
            Operation::PutWatch | Operation::GetWatch | Operation::DeleteWatch => {
                &[Some("watch"), None]
            }
            Operation::AckWatch => &[Some("watch"), None, Some("_ack")],
            Operation::ExecuteWatch => &[Some("watch"), None, Some("_execute")],
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
