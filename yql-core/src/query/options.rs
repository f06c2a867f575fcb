/// Per-request knobs. The defaults reproduce the plain YQL client behaviour.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    /// Treat a completed transfer with a non-2xx status as a failure.
    pub strict_status: bool,
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict_status(mut self, strict: bool) -> Self {
        self.strict_status = strict;
        self
    }

    pub(crate) fn accepts(&self, status: u16) -> bool {
        !self.strict_status || (200..300).contains(&status)
    }
}
