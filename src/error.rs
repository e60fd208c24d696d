use thiserror::Error;

/// Failures that can occur while producing a text command
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Input device could not be brought up (or was never initialized)
    #[error("device unavailable: {0}")]
    DeviceUnavailable(String),

    /// Recognizer listened but heard nothing it could decode
    #[error("no speech detected")]
    NoSpeechDetected,

    /// No text command could be produced from the input
    #[error("recognition failed: {0}")]
    RecognitionFailed(String),
}

impl CommandError {
    /// Recoverable errors are reported to the user as "command not understood"
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, CommandError::DeviceUnavailable(_))
    }
}
