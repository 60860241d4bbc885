//! Errors raised while reading a presentation.

use crate::ooxml::opc::error::OpcError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, OoxmlError>;

#[derive(Error, Debug)]
pub enum OoxmlError {
    /// The zip container or its part graph is broken.
    #[error("OPC error: {0}")]
    Opc(#[from] OpcError),

    /// A part's XML could not be read.
    #[error("XML error: {0}")]
    Xml(String),

    /// The package's main part is not a presentation.
    #[error("Invalid content type: expected {expected}, got {got}")]
    InvalidContentType { expected: String, got: String },

    /// Well-formed XML with a value that makes no sense, e.g. a non-numeric
    /// slide width.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

impl From<quick_xml::Error> for OoxmlError {
    fn from(err: quick_xml::Error) -> Self {
        OoxmlError::Xml(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for OoxmlError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        OoxmlError::Xml(err.to_string())
    }
}

impl From<std::str::Utf8Error> for OoxmlError {
    fn from(err: std::str::Utf8Error) -> Self {
        OoxmlError::Xml(err.to_string())
    }
}
