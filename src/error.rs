// SPDX-License-Identifier: MPL-2.0
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A configuration value had the wrong shape or type.
    InvalidArgument(String),

    /// The configured resource folder does not exist.
    ResourceDirectoryNotFound(PathBuf),

    /// Neither the locale file nor the fallback file exists.
    /// `path` is the last candidate tried (the fallback file).
    ResourceFileNotFound { path: PathBuf },

    Io(String),

    Config(String),

    /// The renderer failed to display a template.
    Render(String),
}

impl Error {
    /// Returns `true` for the two module errors raised by the loader
    /// (missing directory, missing resource file).
    pub fn is_missing_resource(&self) -> bool {
        matches!(
            self,
            Error::ResourceDirectoryNotFound(_) | Error::ResourceFileNotFound { .. }
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(e) => write!(f, "Invalid argument: {}", e),
            Error::ResourceDirectoryNotFound(path) => {
                write!(f, "Resource directory not found: {}", path.display())
            }
            Error::ResourceFileNotFound { path } => {
                write!(f, "Resource file {} not found", path.display())
            }
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Render(e) => write!(f, "Render Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
