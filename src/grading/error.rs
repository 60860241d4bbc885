//! Error types for grading.
use crate::ooxml::OoxmlError;
use thiserror::Error;

/// Result type for grading operations.
pub type Result<T> = std::result::Result<T, GradeError>;

/// Error types for grading.
#[derive(Error, Debug)]
pub enum GradeError {
    /// The submission could not be opened as a presentation.
    ///
    /// This is the only way an evaluation can fail; no partial report is
    /// produced.
    #[error("文件解析失败: {0}")]
    Parse(#[from] OoxmlError),

    /// A finished report could not be serialized.
    #[error("Failed to render report: {0}")]
    Render(String),
}

impl From<crate::ooxml::opc::error::OpcError> for GradeError {
    fn from(err: crate::ooxml::opc::error::OpcError) -> Self {
        GradeError::Parse(OoxmlError::Opc(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_message_embeds_cause() {
        let err = GradeError::from(OoxmlError::InvalidFormat("not a deck".to_string()));
        assert_eq!(err.to_string(), "文件解析失败: Invalid format: not a deck");
    }
}
