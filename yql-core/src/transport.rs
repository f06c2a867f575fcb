use crate::error::Result;

/// Blocking HTTP capability a query is executed through.
///
/// Implement this with any HTTP library to run queries over it. The core
/// never touches sockets, TLS or transfer decoding itself.
pub trait Transport {
    /// POST `body` as a form-encoded payload to `url`.
    ///
    /// Every received chunk of the response body must be handed to `sink`
    /// in arrival order, and all calls to `sink` must happen before this
    /// method returns.
    ///
    /// # Returns
    /// The HTTP status code of a completed transfer. A completed transfer
    /// carrying a 4xx/5xx status is still `Ok`.
    fn post(&mut self, url: &str, body: &str, sink: &mut dyn FnMut(&[u8])) -> Result<u16>;
}

/// Acquires a [`Transport`] for a new query.
pub trait Connector {
    type Transport: Transport;

    fn connect(&self) -> Result<Self::Transport>;
}
