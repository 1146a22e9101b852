//! Error types for the alert monitor

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Failures that can stop the monitor from starting.
///
/// Once the workers run nothing is reported through this type: lost frames are
/// logged and dropped.
#[derive(Debug, thiserror::Error)]
pub enum Error{
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration parsed but holds unusable values
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// A peripheral refused to initialize
    #[error("{driver} initialization failed: {reason}")]
    DriverInit{
        /// Which peripheral
        driver: &'static str,
        /// What went wrong
        reason: String,
    },

    /// A link could not take a frame
    #[error("{0} link closed")]
    LinkClosed(&'static str),
}
