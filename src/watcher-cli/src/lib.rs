//! watcher - command-line access to the search-engine watcher API
//!
//! This crate provides both a library and the `watcher` binary. The library
//! exposes argument parsing and command dispatch so they can be driven with
//! any [`watcher_rs::Transport`].
//!
//! ```bash
//! watcher --url http://localhost:9200 put-watch error_watch --body watch.json
//! watcher get-watch error_watch
//! ```

pub use watcher_rs;

pub mod cli;
pub mod telemetry;
