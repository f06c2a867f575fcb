use std::{borrow::Cow, fs, path::Path};

use log::{debug, info, warn};
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::format::ResponseFormat;
use crate::transport::{Connector, Transport};

use super::options::QueryOptions;

pub const BASE_URL: &str = "http://query.yahooapis.com/v1/public/yql";
pub const ENV_TABLES: &str = "store://datatables.org/alltableswithkeys";

/// Build the form body posted for `command`.
///
/// The command is appended verbatim, callers are responsible for any
/// escaping the service expects.
pub fn request_body(command: &str, format: ResponseFormat) -> String {
    format!("q={}&env={}&format={}", command, ENV_TABLES, format.as_str())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryState {
    Constructed,
    Succeeded,
    Failed,
}

/// A single YQL query and the response of its last successful execution.
///
/// The transport is acquired when the request is built and released when
/// it is dropped. `execute` takes `&mut self`, so one instance can only run
/// one transfer at a time; use one instance per in-flight query.
pub struct QueryRequest<T: Transport> {
    command: String,
    format: ResponseFormat,
    options: QueryOptions,
    transport: Option<T>,
    init_error: Option<String>,
    response: Option<Vec<u8>>,
    status: Option<u16>,
    state: QueryState,
}

impl<T: Transport> QueryRequest<T> {
    /// Create a query, acquiring its transport from `connector`.
    ///
    /// Acquisition failure does not fail construction: the request is
    /// returned unconnected and every execution of it fails without I/O.
    pub fn new<C>(command: impl Into<String>, format: ResponseFormat, connector: &C) -> Self
    where
        C: Connector<Transport = T>,
    {
        match connector.connect() {
            Ok(transport) => Self::with_transport(command, format, transport),
            Err(e) => {
                warn!("failed to acquire transport: {}", e);
                let mut request = Self::build(command.into(), format, None);
                request.init_error = Some(e.to_string());
                request
            }
        }
    }

    /// Create a query around an already acquired transport.
    pub fn with_transport(command: impl Into<String>, format: ResponseFormat, transport: T) -> Self {
        Self::build(command.into(), format, Some(transport))
    }

    fn build(command: String, format: ResponseFormat, transport: Option<T>) -> Self {
        QueryRequest {
            command,
            format,
            options: QueryOptions::default(),
            transport,
            init_error: None,
            response: None,
            status: None,
            state: QueryState::Constructed,
        }
    }

    pub fn with_options(mut self, options: QueryOptions) -> Self {
        self.options = options;
        self
    }

    /// Run the query, reporting only whether it succeeded.
    pub fn execute(&mut self) -> bool {
        match self.try_execute() {
            Ok(()) => true,
            Err(e) => {
                warn!("query failed: {}", e);
                false
            }
        }
    }

    /// Run the query, returning the reason of a failure.
    ///
    /// On success the stored response is replaced by the body of this
    /// transfer. On failure the previously stored response is kept.
    pub fn try_execute(&mut self) -> Result<()> {
        let transport = self.transport.as_mut().ok_or(Error::NotConnected)?;

        let body = request_body(&self.command, self.format);
        debug!("POST {} ({} bytes)", BASE_URL, body.len());

        let mut received = Vec::new();
        let mut chunks = 0usize;
        let outcome = transport.post(BASE_URL, &body, &mut |chunk: &[u8]| {
            chunks += 1;
            received.extend_from_slice(chunk);
        });

        let status = match outcome {
            Ok(status) => status,
            Err(e) => {
                self.state = QueryState::Failed;
                return Err(e);
            }
        };
        self.status = Some(status);

        if !self.options.accepts(status) {
            self.state = QueryState::Failed;
            return Err(Error::HttpStatus(status));
        }

        info!(
            "query completed: status {}, {} bytes in {} chunks",
            status,
            received.len(),
            chunks
        );
        self.response = Some(received);
        self.state = QueryState::Succeeded;
        Ok(())
    }

    /// Response body as text. Empty until an execution succeeded.
    pub fn response(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.response_bytes())
    }

    pub fn response_bytes(&self) -> &[u8] {
        self.response.as_deref().unwrap_or_default()
    }

    /// Decode the stored response as JSON.
    pub fn response_json<D: DeserializeOwned>(&self) -> Result<D> {
        Ok(serde_json::from_slice(self.response_bytes())?)
    }

    /// Write the stored response to `path`, truncating any existing file.
    ///
    /// Does nothing if no execution has succeeded yet.
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        match &self.response {
            Some(response) => {
                fs::write(path, response)?;
                debug!("wrote {} bytes to {}", response.len(), path.display());
            }
            None => debug!("no response yet, skipping write to {}", path.display()),
        }
        Ok(())
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn format(&self) -> ResponseFormat {
        self.format
    }

    pub fn options(&self) -> QueryOptions {
        self.options
    }

    pub fn request_body(&self) -> String {
        request_body(&self.command, self.format)
    }

    pub fn state(&self) -> QueryState {
        self.state
    }

    /// HTTP status of the last completed transfer.
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    pub fn is_connected(&self) -> bool {
        self.transport.is_some()
    }

    /// Why the transport could not be acquired, if it could not.
    pub fn init_error(&self) -> Option<&str> {
        self.init_error.as_deref()
    }

    pub fn transport(&self) -> Option<&T> {
        self.transport.as_ref()
    }
}
