//! Package parts.

use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::PackURI;
use crate::ooxml::opc::rel::Relationships;

/// One part of a package: its name, content type, bytes and outgoing
/// relationships.
///
/// XML parts hold UTF-8 bytes; the PresentationML wrappers parse them on
/// demand.
#[derive(Debug, Clone)]
pub struct Part {
    partname: PackURI,
    content_type: String,
    blob: Vec<u8>,
    rels: Relationships,
}

impl Part {
    pub fn new(partname: PackURI, content_type: impl Into<String>, blob: Vec<u8>) -> Self {
        Self {
            partname,
            content_type: content_type.into(),
            blob,
            rels: Relationships::new(),
        }
    }

    pub fn with_rels(mut self, rels: Relationships) -> Self {
        self.rels = rels;
        self
    }

    #[inline]
    pub fn partname(&self) -> &PackURI {
        &self.partname
    }

    #[inline]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    #[inline]
    pub fn blob(&self) -> &[u8] {
        &self.blob
    }

    #[inline]
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Part name of the target of relationship `r_id`.
    pub fn related_partname(&self, r_id: &str) -> Result<&PackURI> {
        self.rels
            .get(r_id)
            .ok_or_else(|| {
                OpcError::RelationshipNotFound(format!("{} in {}", r_id, self.partname))
            })?
            .target_partname()
    }
}

/// True for `application/xml`, `text/xml` and any `...+xml` type.
pub(crate) fn is_xml_content_type(content_type: &str) -> bool {
    content_type.ends_with("+xml") || content_type.ends_with("/xml")
}
