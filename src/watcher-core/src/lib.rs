//! Watcher Core Library
//!
//! This crate provides the transport-independent pieces of the watcher client:
//! - The operation table (method, path shape, accepted query params)
//! - Query parameter rendering and validation
//! - Path building with segment escaping
//! - Argument errors raised before any request is sent
//! - Client configuration

pub mod config;
pub mod error;
pub mod operation;
pub mod params;
pub mod path;

// Re-export commonly used types
pub use config::{Config, LoggingConfig};
pub use error::ArgumentError;
pub use operation::{Method, Operation, GLOBAL_PARAMS};
pub use params::{ParamValue, Params};
pub use path::{is_empty_body, make_path, operation_path};
