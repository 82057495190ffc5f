/// Raised locally, before any request reaches the transport.
///
/// Only required arguments are checked here; everything else is left to the server.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgumentError {
    #[error("Empty value passed for a required argument '{name}'.")]
    EmptyValue { name: &'static str },
}

impl ArgumentError {
    pub fn empty(name: &'static str) -> Self {
        Self::EmptyValue { name }
    }
}
