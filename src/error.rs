//! Error types for content loading.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ContentError>;

/// Everything that can go wrong while turning the content directory into a
/// catalog. Request handlers never see these: a failed startup load is fatal,
/// a failed reload keeps the previous catalog.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Front matter missing or unparsable for a post file.
    #[error("Front matter error in {path}: {message}")]
    FrontMatter { path: PathBuf, message: String },

    #[error("TOML error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid date {value:?} in {path}: expected YYYY-MM-DD")]
    Date { path: PathBuf, value: String },

    #[error("Site metadata error: {0}")]
    SiteMeta(String),
}

impl ContentError {
    pub fn front_matter(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::FrontMatter {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn toml(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::Toml {
            path: path.into(),
            source,
        }
    }

    pub fn date(path: impl Into<PathBuf>, value: impl Into<String>) -> Self {
        Self::Date {
            path: path.into(),
            value: value.into(),
        }
    }

    pub fn site_meta(message: impl Into<String>) -> Self {
        Self::SiteMeta(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn front_matter_error_names_the_file() {
        let err = ContentError::front_matter("content/posts/broken.md", "missing title");
        assert!(err.to_string().contains("content/posts/broken.md"));
        assert!(err.to_string().contains("missing title"));
    }

    #[test]
    fn io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: ContentError = io_err.into();
        assert!(err.to_string().contains("IO error"));
    }
}
