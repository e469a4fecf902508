use alloc::string::String;

/// Recoverable errors surfaced by the engine.
///
/// None of these are fatal. A stale index means the host acted on a data
/// snapshot the engine has since replaced; the call is ignored and a later
/// `reset`/`append` reconciles the two sides. A render failure is reported
/// back on the update channel so the host's event loop can decide what to
/// do with its own error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// An index-based call referred to a position outside `0..len`.
    StaleIndex { index: usize, len: usize },
    /// The host's update callback returned an error.
    RenderFailed(RenderError),
}

impl core::fmt::Display for EngineError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::StaleIndex { index, len } => {
                write!(f, "stale index {index} (current item count {len})")
            }
            Self::RenderFailed(err) => write!(f, "host render callback failed: {err}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EngineError {}

impl From<RenderError> for EngineError {
    fn from(err: RenderError) -> Self {
        Self::RenderFailed(err)
    }
}

/// Failure reported by a host update callback.
///
/// The engine never inspects the message; it is carried verbatim back to the
/// host via [`crate::EngineEvent::RenderFailed`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderError {
    pub message: String,
}

impl RenderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl core::fmt::Display for RenderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RenderError {}
