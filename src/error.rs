// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Manifest(ManifestError),
    Image(String),
}

/// Reasons a gallery manifest could not be turned into items.
/// Used to pick a localized message for the empty-gallery placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestError {
    /// The manifest is not valid TOML or does not match the expected layout.
    Parse(String),

    /// The path is neither a manifest file nor an image directory.
    UnsupportedSource,

    /// An item has an empty `src` entry.
    MissingSource { index: usize },
}

impl ManifestError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ManifestError::Parse(_) => "error-manifest-parse",
            ManifestError::UnsupportedSource => "error-manifest-unsupported",
            ManifestError::MissingSource { .. } => "error-manifest-missing-source",
        }
    }
}

impl fmt::Display for ManifestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestError::Parse(msg) => write!(f, "Invalid manifest: {}", msg),
            ManifestError::UnsupportedSource => {
                write!(f, "Not a manifest file or image directory")
            }
            ManifestError::MissingSource { index } => {
                write!(f, "Item {} has no image source", index)
            }
        }
    }
}

impl Error {
    /// Returns the i18n message key shown when loading a gallery fails.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Manifest(err) => err.i18n_key(),
            Error::Config(_) => "notification-config-load-error",
            Error::Io(_) | Error::Image(_) => "error-gallery-io",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Manifest(e) => write!(f, "Manifest Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ManifestError> for Error {
    fn from(err: ManifestError) -> Self {
        Error::Manifest(err)
    }
}

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

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
