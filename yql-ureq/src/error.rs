use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP POST to {url} failed: {reason}")]
    HttpPost { url: String, reason: String },
    #[error("failed to read response body (status {status}, {received} bytes read): {reason}")]
    ResponseBody {
        status: u16,
        received: usize,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<Error> for yql_core::Error {
    fn from(e: Error) -> Self {
        yql_core::Error::Transfer(Box::new(e))
    }
}
