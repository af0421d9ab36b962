use thiserror::Error;

/// Errors surfaced by the core components.
///
/// Rendering itself never fails; these cover misconfiguration and misuse of
/// the frame loop lifecycle.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FolioError {
    #[error("invalid device profile: {0}")]
    InvalidProfile(&'static str),

    #[error("unknown theme '{0}', expected \"dark\" or \"light\"")]
    UnknownTheme(String),

    #[error("frame loop is already running")]
    LoopAlreadyRunning,

    #[error("frame loop has been torn down")]
    LoopTornDown,
}
