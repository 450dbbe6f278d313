use thiserror::Error;

/// Problems with level data or tuning handed to the core.
///
/// These surface when a session is built, never from inside a tick.
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("unknown level {0}; expected 1 or 2")]
    UnknownLevel(u8),
    #[error("failed to parse level data: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{what} has a non-positive or non-finite size {size:?}")]
    DegenerateBox { what: String, size: [f32; 3] },
    #[error("{what} has a non-finite position {position:?}")]
    NonFinitePosition { what: String, position: [f32; 3] },
    #[error("level `{0}` has no platforms")]
    NoPlatforms(String),
    #[error("tuning `{field}` must be {expected}, got {value}")]
    InvalidTuning {
        field: &'static str,
        expected: &'static str,
        value: f64,
    },
}

/// Misuse of the session's respawn capability.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error("level already won; build a new session to replay it")]
    AlreadyWon,
    #[error("respawn token from epoch {token} does not match session epoch {current}")]
    StaleRespawnToken { token: u64, current: u64 },
}
