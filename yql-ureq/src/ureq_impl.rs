use std::io::{ErrorKind, Read};
use std::time::Duration;

use log::debug;
use yql_core::{Connector, Transport};

use crate::error::Error;

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

const CHUNK_SIZE: usize = 16 * 1024;

/// Hands out [`UreqTransport`]s sharing one timeout setting.
#[derive(Clone, Debug)]
pub struct UreqConnector {
    timeout: Option<Duration>,
}

impl UreqConnector {
    /// Create a connector whose transfers block until they complete.
    pub fn new() -> Self {
        Self { timeout: None }
    }

    /// Create a connector whose transports give up after `timeout_secs`.
    pub fn with_timeout(timeout_secs: u64) -> Self {
        Self {
            timeout: Some(Duration::from_secs(timeout_secs)),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl Default for UreqConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl Connector for UreqConnector {
    type Transport = UreqTransport;

    fn connect(&self) -> yql_core::Result<UreqTransport> {
        Ok(UreqTransport::new(self.timeout))
    }
}

/// Minimal blocking transport implementation using ureq.
#[derive(Clone, Debug)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    /// `None` lets a transfer run for as long as the server takes.
    pub fn new(timeout: Option<Duration>) -> Self {
        Self {
            agent: ureq::Agent::config_builder()
                .timeout_global(timeout)
                // 4xx/5xx bodies are handed to the caller like any other
                .http_status_as_error(false)
                .build()
                .into(),
        }
    }
}

impl Transport for UreqTransport {
    fn post(&mut self, url: &str, body: &str, sink: &mut dyn FnMut(&[u8])) -> yql_core::Result<u16> {
        let mut response = self
            .agent
            .post(url)
            .header("Content-Type", FORM_CONTENT_TYPE)
            .send(body)
            .map_err(|e| Error::HttpPost {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status().as_u16();
        let mut reader = response.body_mut().as_reader();
        let mut buf = vec![0u8; CHUNK_SIZE];
        let mut total = 0usize;

        loop {
            let n = match reader.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    return Err(Error::ResponseBody {
                        status,
                        received: total,
                        reason: e.to_string(),
                    }
                    .into())
                }
            };
            total += n;
            sink(&buf[..n]);
        }

        debug!("{} answered {} with {} bytes", url, status, total);
        Ok(status)
    }
}
