use thiserror::Error;

/// Failures while reading style configuration or command line data.
///
/// Drawing itself never fails; bad geometry or data just renders oddly.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read style file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse style file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid color '{0}': expected #RRGGBB or #AARRGGBB")]
    InvalidColor(String),

    #[error("too many colors: {0} given, the palette has 4 slots")]
    TooManyColors(usize),

    #[error("invalid data value '{0}'")]
    InvalidValue(String),
}
