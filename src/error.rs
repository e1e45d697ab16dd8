// SPDX-License-Identifier: MPL-2.0
use crate::application::port::ContentError;
use crate::domain::error::ShowcaseError;
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Content(ContentError),
    Showcase(ShowcaseError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Content(e) => write!(f, "Content Error: {}", e),
            Error::Showcase(e) => write!(f, "Showcase Error: {}", e),
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

impl From<ContentError> for Error {
    fn from(err: ContentError) -> Self {
        Error::Content(err)
    }
}

impl From<ShowcaseError> for Error {
    fn from(err: ShowcaseError) -> Self {
        Error::Showcase(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
