//! Relationships between package parts.
//!
//! Each source (a part, or the package itself) lists its relationships in a
//! sibling `_rels/<name>.rels` part. Internal targets are resolved to part
//! names when the `.rels` part is parsed.

use crate::ooxml::opc::constants::target_mode;
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::PackURI;
use quick_xml::Reader;
use quick_xml::events::Event;
use smallvec::SmallVec;

/// Where a relationship points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelTarget {
    /// A part of the same package
    Part(PackURI),
    /// Anything outside the package, usually a URL
    External(String),
}

/// One `<Relationship>` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    r_id: String,
    reltype: String,
    target: RelTarget,
}

impl Relationship {
    pub fn new(r_id: impl Into<String>, reltype: impl Into<String>, target: RelTarget) -> Self {
        Self {
            r_id: r_id.into(),
            reltype: reltype.into(),
            target,
        }
    }

    #[inline]
    pub fn r_id(&self) -> &str {
        &self.r_id
    }

    #[inline]
    pub fn reltype(&self) -> &str {
        &self.reltype
    }

    #[inline]
    pub fn target(&self) -> &RelTarget {
        &self.target
    }

    /// Part name of the target. External relationships have none.
    pub fn target_partname(&self) -> Result<&PackURI> {
        match &self.target {
            RelTarget::Part(partname) => Ok(partname),
            RelTarget::External(url) => Err(OpcError::InvalidRelationship(format!(
                "{} points outside the package ({})",
                self.r_id, url
            ))),
        }
    }
}

/// Relationships of one source, in document order.
#[derive(Debug, Clone, Default)]
pub struct Relationships {
    rels: SmallVec<[Relationship; 8]>,
}

impl Relationships {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the `.rels` part named `rels_name`.
    ///
    /// `base_uri` is the directory of the source part; relative targets are
    /// resolved against it. Entries missing `Id`, `Type` or `Target` are
    /// skipped.
    pub fn from_xml(xml: &[u8], base_uri: &str, rels_name: &str) -> Result<Self> {
        let mut rels = Self::new();
        let mut reader = Reader::from_reader(xml);

        loop {
            match reader.read_event().map_err(|e| OpcError::xml(rels_name, e))? {
                Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"Relationship" => {
                    let (mut r_id, mut reltype, mut target) = (None, None, None);
                    let mut external = false;

                    for attr in e.attributes() {
                        let attr = attr.map_err(|e| OpcError::xml(rels_name, e))?;
                        let value = attr
                            .unescape_value()
                            .map_err(|e| OpcError::xml(rels_name, e))?
                            .into_owned();
                        match attr.key.as_ref() {
                            b"Id" => r_id = Some(value),
                            b"Type" => reltype = Some(value),
                            b"Target" => target = Some(value),
                            b"TargetMode" => external = value == target_mode::EXTERNAL,
                            _ => {},
                        }
                    }

                    if let (Some(r_id), Some(reltype), Some(target)) = (r_id, reltype, target) {
                        let target = if external {
                            RelTarget::External(target)
                        } else {
                            RelTarget::Part(PackURI::resolve(base_uri, &target))
                        };
                        rels.push(Relationship::new(r_id, reltype, target));
                    }
                },
                Event::Eof => break,
                _ => {},
            }
        }

        Ok(rels)
    }

    /// Add a relationship. A later entry with the same rId replaces the earlier one.
    pub fn push(&mut self, rel: Relationship) {
        match self.rels.iter_mut().find(|r| r.r_id == rel.r_id) {
            Some(existing) => *existing = rel,
            None => self.rels.push(rel),
        }
    }

    pub fn get(&self, r_id: &str) -> Option<&Relationship> {
        self.rels.iter().find(|rel| rel.r_id == r_id)
    }

    /// The one relationship of type `reltype`.
    ///
    /// Zero or several matches are both errors.
    pub fn single_of_type(&self, reltype: &str) -> Result<&Relationship> {
        let mut matching = self.rels.iter().filter(|rel| rel.reltype == reltype);

        match (matching.next(), matching.next()) {
            (Some(rel), None) => Ok(rel),
            (None, _) => Err(OpcError::RelationshipNotFound(format!(
                "no relationship of type {}",
                reltype
            ))),
            (Some(_), Some(_)) => Err(OpcError::InvalidRelationship(format!(
                "more than one relationship of type {}",
                reltype
            ))),
        }
    }

    /// Part names of every internal target.
    pub fn internal_targets(&self) -> impl Iterator<Item = &PackURI> {
        self.rels.iter().filter_map(|rel| match &rel.target {
            RelTarget::Part(partname) => Some(partname),
            RelTarget::External(_) => None,
        })
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.rels.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }
}
