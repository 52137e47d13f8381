//! Error types for content selection and presentation

use thiserror::Error;

/// Errors raised while turning content into display records
#[derive(Error, Debug)]
pub enum Error {
    /// A content item carries a date that is not a calendar date
    #[error("invalid date {value:?} on `{identifier}`")]
    DateParse { identifier: String, value: String },

    /// A photo was authored without its cover image
    #[error("photo `{identifier}` has no cover image")]
    MissingCover { identifier: String },

    /// Front-matter could not be parsed
    #[error("failed to parse front-matter in {path}: {message}")]
    FrontMatter { path: String, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
