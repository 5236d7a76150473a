use std::fmt;
use std::io;

#[derive(Debug)]
pub enum ConfigErrorKind {
    InvalidFormat(String),
    InvalidValue(String, String),
}

impl fmt::Display for ConfigErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigErrorKind::InvalidFormat(msg) => write!(f, "Invalid config format: {}", msg),
            ConfigErrorKind::InvalidValue(key, msg) => {
                write!(f, "Invalid value for '{}': {}", key, msg)
            }
        }
    }
}

#[derive(Debug)]
pub enum ListDataError {
    Io(io::Error),
    /// A single directory level could not be enumerated.
    Enumeration {
        path: String,
        source: io::Error,
    },
    Parse(String),
    Config(ConfigErrorKind),
    Other(String),
}

impl ListDataError {
    pub fn enumeration(path: impl Into<String>, source: io::Error) -> Self {
        ListDataError::Enumeration {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for ListDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListDataError::Io(err) => write!(f, "{}", err),
            ListDataError::Enumeration { path, source } => {
                write!(f, "Failed to list '{}': {}", path, source)
            }
            ListDataError::Parse(msg) => write!(f, "{}", msg),
            ListDataError::Config(kind) => write!(f, "{}", kind),
            ListDataError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ListDataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ListDataError::Io(err) => Some(err),
            ListDataError::Enumeration { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for ListDataError {
    fn from(err: io::Error) -> Self {
        ListDataError::Io(err)
    }
}

impl From<toml::de::Error> for ListDataError {
    fn from(err: toml::de::Error) -> Self {
        ListDataError::Config(ConfigErrorKind::InvalidFormat(err.to_string()))
    }
}

impl From<toml::ser::Error> for ListDataError {
    fn from(err: toml::ser::Error) -> Self {
        ListDataError::Parse(format!("Failed to serialize config: {}", err))
    }
}

impl From<serde_json::Error> for ListDataError {
    fn from(err: serde_json::Error) -> Self {
        ListDataError::Parse(err.to_string())
    }
}

impl From<csv::Error> for ListDataError {
    fn from(err: csv::Error) -> Self {
        ListDataError::Other(format!("CSV output failed: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, ListDataError>;
