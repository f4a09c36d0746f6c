use crate::{
    backend::{AccelBackend, BackendRegistry},
    context::DecodeContext,
    error::{BrokerError, BrokerResult},
    format::{FrameDescriptor, HardwareFormat},
};

/// Backend-selection settings for one acceleration attempt.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct SessionConfig {
    /// Probe only the backend registered under this name. `None` probes
    /// every registered backend in order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred: Option<String>,
}

/// One active hardware-acceleration attachment to a decode context.
///
/// Created by [`AccelSession::create`], which probes registry candidates in
/// order and returns the first backend that accepts. The session owns that
/// backend exclusively until [`AccelSession::close`] consumes the session and
/// delivers the backend's single `stop` call.
///
/// The session must not outlive the decode context it was created against,
/// and `close` must be called with that same context. Ownership makes
/// double-close and close-of-a-failed-create unrepresentable; forgetting to
/// close leaks the backend's driver state and is logged as a warning on drop.
pub struct AccelSession {
    backend: Option<Box<dyn AccelBackend>>,
    requested: HardwareFormat,
    frame: FrameDescriptor,
}

impl std::fmt::Debug for AccelSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccelSession")
            .field("backend", &self.backend.as_ref().map(|b| b.name().to_owned()))
            .field("requested", &self.requested)
            .field("frame", &self.frame)
            .finish()
    }
}

impl AccelSession {
    #[tracing::instrument(skip(registry, ctx))]
    pub fn create(
        registry: &BackendRegistry,
        config: &SessionConfig,
        ctx: &mut DecodeContext,
        requested: HardwareFormat,
        frame: FrameDescriptor,
    ) -> BrokerResult<AccelSession> {
        if !ctx.is_open() {
            return Err(BrokerError::context_closed(format!(
                "cannot probe {requested:?} acceleration for a closed {} context",
                ctx.codec()
            )));
        }

        let mut attempts = 0usize;
        for (name, factory) in registry.candidates(config.preferred.as_deref()) {
            attempts += 1;
            let mut backend = factory();
            match backend.probe(ctx, requested, &frame) {
                Ok(()) => {
                    tracing::debug!(backend = name, ?requested, "acceleration backend active");
                    return Ok(AccelSession {
                        backend: Some(backend),
                        requested,
                        frame,
                    });
                }
                Err(failure) => {
                    tracing::debug!(backend = name, %failure, "acceleration probe declined");
                }
            }
        }

        Err(match (&config.preferred, attempts) {
            (Some(name), 0) => {
                BrokerError::unavailable(format!("no backend registered as {name:?}"))
            }
            (None, 0) => BrokerError::unavailable("no acceleration backends registered"),
            (_, n) => BrokerError::unavailable(format!(
                "all {n} candidate backends declined {requested:?}"
            )),
        })
    }

    pub fn backend_name(&self) -> &str {
        self.active().name()
    }

    pub fn requested(&self) -> HardwareFormat {
        self.requested
    }

    pub fn frame(&self) -> &FrameDescriptor {
        &self.frame
    }

    /// Stops the backend and releases it. Consumes the session: a stopped
    /// session cannot be restarted, retries need a fresh `create`.
    pub fn close(mut self, ctx: &mut DecodeContext) {
        // `backend` is Some from create until taken here.
        if let Some(mut backend) = self.backend.take() {
            backend.stop(ctx);
        }
    }

    fn active(&self) -> &dyn AccelBackend {
        self.backend
            .as_deref()
            .expect("session backend present until close")
    }
}

impl Drop for AccelSession {
    fn drop(&mut self) {
        if let Some(backend) = &self.backend {
            tracing::warn!(
                backend = backend.name(),
                "acceleration session dropped without close; backend stop not delivered"
            );
        }
    }
}
