/// Convenience result type used across scenelink.
pub type ScenelinkResult<T> = Result<T, ScenelinkError>;

/// Top-level error taxonomy used by bridge and scene APIs.
///
/// Every variant is fatal to the single call (or dispatch) that produced it;
/// nothing in the crate retries automatically.
#[derive(thiserror::Error, Debug)]
pub enum ScenelinkError {
    /// Malformed or unrecognized wire payload.
    #[error("decode error: {0}")]
    Decode(String),

    /// An exception raised inside the engine, surfaced verbatim.
    #[error("engine error: {0}")]
    Engine(String),

    /// No response arrived within the configured bound. The engine-side
    /// operation is not stopped; only the host-side wait is abandoned.
    #[error("timed out waiting for '{0}'")]
    Timeout(String),

    /// Dispatch referenced a handle that is not (or no longer) registered.
    #[error("unknown callback handle {0}")]
    UnknownCallback(u64),

    /// The transport to the engine failed (closed pipe, spawn failure).
    #[error("engine link error: {0}")]
    Link(String),

    /// Frame capture failed while a recording was armed.
    #[error("recording error: {0}")]
    Recording(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScenelinkError {
    /// Build a [`ScenelinkError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`ScenelinkError::Engine`] value.
    pub fn engine(msg: impl Into<String>) -> Self {
        Self::Engine(msg.into())
    }

    /// Build a [`ScenelinkError::Timeout`] value.
    pub fn timeout(method: impl Into<String>) -> Self {
        Self::Timeout(method.into())
    }

    /// Build a [`ScenelinkError::Link`] value.
    pub fn link(msg: impl Into<String>) -> Self {
        Self::Link(msg.into())
    }

    /// Build a [`ScenelinkError::Recording`] value.
    pub fn recording(msg: impl Into<String>) -> Self {
        Self::Recording(msg.into())
    }
}
