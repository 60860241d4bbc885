//! Errors raised while reading an OPC package.

use std::fmt::Display;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, OpcError>;

#[derive(Error, Debug)]
pub enum OpcError {
    #[error("Package not found: {0}")]
    PackageNotFound(String),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Unreadable XML in a package-level part (`[Content_Types].xml`, `.rels`)
    /// or a part body that is not UTF-8.
    #[error("Malformed {part}: {message}")]
    Xml { part: String, message: String },

    #[error("Part not found: {0}")]
    PartNotFound(String),

    #[error("No content type for {0}")]
    ContentTypeNotFound(String),

    #[error("Relationship not found: {0}")]
    RelationshipNotFound(String),

    #[error("Invalid relationship: {0}")]
    InvalidRelationship(String),
}

impl OpcError {
    pub(crate) fn xml(part: &str, err: impl Display) -> Self {
        OpcError::Xml {
            part: part.to_string(),
            message: err.to_string(),
        }
    }
}
