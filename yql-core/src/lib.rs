#![allow(clippy::module_inception)]
//! Request model for Yahoo Query Language queries.
//!
//! A [`QueryRequest`] owns its command, its response format, the transport
//! it was given at construction and the body of its last successful run.
//! Network I/O is delegated to a [`Transport`]; see the `yql-ureq` crate
//! for a ready-made one.

mod error;
mod format;
mod query;
mod transport;

pub use error::{Error, Result};
pub use format::ResponseFormat;
pub use query::{request_body, QueryOptions, QueryRequest, QueryState, BASE_URL, ENV_TABLES};
pub use transport::{Connector, Transport};
