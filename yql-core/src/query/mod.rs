mod options;
mod query;

pub use options::QueryOptions;
pub use query::{request_body, QueryRequest, QueryState, BASE_URL, ENV_TABLES};
