mod error;
mod ureq_impl;

pub use error::{Error, Result};
pub use ureq_impl::{UreqConnector, UreqTransport, FORM_CONTENT_TYPE};

// Re-export core types so callers only need this crate
pub use yql_core::{
    request_body, Connector, QueryOptions, QueryRequest, QueryState, ResponseFormat, Transport,
    BASE_URL, ENV_TABLES,
};

/// Build a query bound to a default [`UreqConnector`].
pub fn query(command: impl Into<String>, format: ResponseFormat) -> QueryRequest<UreqTransport> {
    QueryRequest::new(command, format, &UreqConnector::new())
}
