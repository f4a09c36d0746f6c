pub type BrokerResult<T> = Result<T, BrokerError>;

#[derive(thiserror::Error, Debug)]
pub enum BrokerError {
    /// No backend could be activated. Recoverable: callers fall back to
    /// software decoding.
    #[error("acceleration unavailable: {0}")]
    Unavailable(String),

    /// The decode context handed to the broker was not open.
    #[error("decode context closed: {0}")]
    ContextClosed(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BrokerError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    pub fn context_closed(msg: impl Into<String>) -> Self {
        Self::ContextClosed(msg.into())
    }
}
