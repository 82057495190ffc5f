use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::operation::Operation;


/// A query-string value. Everything is a string on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParamValue(String);

impl ParamValue {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self(if value { "true" } else { "false" }.to_string())
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(values: Vec<String>) -> Self {
        Self(values.join(","))
    }
}

impl From<&[&str]> for ParamValue {
    fn from(values: &[&str]) -> Self {
        Self(values.join(","))
    }
}

/// Query-string options for a single call, kept sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, ParamValue>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an arbitrary param. It is forwarded as-is; the server decides whether it applies.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// Timeout for the master node write, e.g. `30s`.
    pub fn master_timeout(self, timeout: impl Into<String>) -> Self {
        let timeout: String = timeout.into();
        self.with("master_timeout", timeout)
    }

    /// Ignore locks when deleting a watch.
    pub fn force(self, force: bool) -> Self {
        self.with("force", force)
    }

    pub fn pretty(self, pretty: bool) -> Self {
        self.with("pretty", pretty)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(ParamValue::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Name/value pairs ready for a query string.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    /// Names not in the operation's documented list.
    pub fn undocumented_for(&self, operation: Operation) -> impl Iterator<Item = &str> {
        self.0
            .keys()
            .map(String::as_str)
            .filter(move |name| !operation.documents_param(name))
    }
}
