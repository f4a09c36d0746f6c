use std::fmt;

use crate::{
    context::DecodeContext,
    format::{FrameDescriptor, HardwareFormat},
};

/// Why a backend declined to start. An expected probe outcome, not a broker
/// error: the next candidate is tried and the reason goes to the debug log.
#[derive(Clone, Debug)]
pub struct ProbeFailure {
    pub reason: String,
}

impl ProbeFailure {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ProbeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reason)
    }
}

/// A platform-specific hardware-acceleration implementation.
///
/// Exactly two lifecycle entry points: `probe` attempts to initialize against
/// a decode context and format (driver handshake, surface allocation), and
/// `stop` tears that state down. The broker guarantees `stop` is called
/// exactly once, and only on a backend whose `probe` succeeded.
pub trait AccelBackend: Send {
    /// Registry/selection name, also used in log output.
    fn name(&self) -> &str;

    fn probe(
        &mut self,
        ctx: &mut DecodeContext,
        requested: HardwareFormat,
        frame: &FrameDescriptor,
    ) -> Result<(), ProbeFailure>;

    fn stop(&mut self, ctx: &mut DecodeContext);
}

pub type BackendFactory = Box<dyn Fn() -> Box<dyn AccelBackend> + Send>;

/// Ordered set of candidate backends, passed explicitly into
/// [`crate::AccelSession::create`]. Each entry pairs a selection name with a
/// factory so every probe attempt runs against a fresh backend instance; a
/// declined backend is dropped, never reused.
#[derive(Default)]
pub struct BackendRegistry {
    entries: Vec<(String, BackendFactory)>,
}

impl BackendRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> Box<dyn AccelBackend> + Send + 'static,
    {
        self.entries.push((name.into(), Box::new(factory)));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Candidates in registration order, narrowed to one name when a
    /// preferred backend is configured.
    pub fn candidates<'a>(
        &'a self,
        preferred: Option<&'a str>,
    ) -> impl Iterator<Item = (&'a str, &'a BackendFactory)> + 'a {
        self.entries
            .iter()
            .filter(move |(name, _)| preferred.is_none_or(|p| p == name))
            .map(|(name, factory)| (name.as_str(), factory))
    }
}

impl fmt::Debug for BackendRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendRegistry")
            .field(
                "entries",
                &self
                    .entries
                    .iter()
                    .map(|(name, _)| name.as_str())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
