//! Reads the logical structure of a package out of its zip members.
//!
//! Only parts reachable from the package relationships are loaded. The
//! content type of each part comes from `[Content_Types].xml`: an
//! `<Override>` for its exact name, else a `<Default>` for its extension.

use crate::ooxml::opc::encoding::xml_to_utf8;
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::{CONTENT_TYPES_MEMBER, PackURI};
use crate::ooxml::opc::part::{Part, is_xml_content_type};
use crate::ooxml::opc::phys_pkg::PhysPkgReader;
use crate::ooxml::opc::rel::Relationships;
use quick_xml::Reader;
use quick_xml::events::Event;
use std::borrow::Cow;
use std::collections::{HashMap, HashSet};
use std::io::{Read, Seek};

/// Parsed `[Content_Types].xml`. Keys are lowercased; lookups ignore case.
#[derive(Debug, Default)]
struct ContentTypes {
    by_extension: HashMap<String, String>,
    by_partname: HashMap<String, String>,
}

impl ContentTypes {
    fn from_xml(xml: &[u8]) -> Result<Self> {
        let mut types = Self::default();
        let mut reader = Reader::from_reader(xml);
        let malformed = |e: &dyn std::fmt::Display| OpcError::xml(CONTENT_TYPES_MEMBER, e);

        loop {
            let e = match reader.read_event().map_err(|e| malformed(&e))? {
                Event::Start(e) | Event::Empty(e) => e,
                Event::Eof => break,
                _ => continue,
            };
            let (key_attr, table) = match e.local_name().as_ref() {
                b"Default" => (&b"Extension"[..], &mut types.by_extension),
                b"Override" => (&b"PartName"[..], &mut types.by_partname),
                _ => continue,
            };

            let (mut key, mut content_type) = (None, None);
            for attr in e.attributes() {
                let attr = attr.map_err(|e| malformed(&e))?;
                let value = attr.unescape_value().map_err(|e| malformed(&e))?;
                if attr.key.as_ref() == key_attr {
                    key = Some(value.to_lowercase());
                } else if attr.key.as_ref() == b"ContentType" {
                    content_type = Some(value.into_owned());
                }
            }

            if let (Some(key), Some(content_type)) = (key, content_type) {
                table.insert(key, content_type);
            }
        }

        Ok(types)
    }

    fn lookup(&self, partname: &PackURI) -> Result<&str> {
        self.by_partname
            .get(&partname.as_str().to_lowercase())
            .or_else(|| self.by_extension.get(&partname.extension().to_lowercase()))
            .map(String::as_str)
            .ok_or_else(|| OpcError::ContentTypeNotFound(partname.to_string()))
    }
}

/// The package relationships and every part reachable from them.
#[derive(Debug)]
pub struct PackageReader {
    rels: Relationships,
    parts: Vec<Part>,
}

impl PackageReader {
    /// Walk the relationship graph of the package.
    ///
    /// A relationship to a member the archive does not contain is an error,
    /// as is an XML part that does not decode. XML parts are stored as UTF-8.
    pub fn read<R: Read + Seek>(mut phys: PhysPkgReader<R>) -> Result<Self> {
        let mut members = phys.read_all()?;

        let content_types = members
            .get(CONTENT_TYPES_MEMBER)
            .ok_or_else(|| OpcError::PartNotFound(format!("/{}", CONTENT_TYPES_MEMBER)))
            .and_then(|xml| ContentTypes::from_xml(&xml_to_utf8(CONTENT_TYPES_MEMBER, xml)?))?;
        let rels = rels_of(&members, &PackURI::package())?;

        let mut seen = HashSet::new();
        let mut pending = Vec::new();
        enqueue(&rels, &mut seen, &mut pending);

        let mut parts = Vec::new();
        while let Some(partname) = pending.pop() {
            let part_rels = rels_of(&members, &partname)?;
            enqueue(&part_rels, &mut seen, &mut pending);

            let content_type = content_types.lookup(&partname)?.to_string();
            let mut blob = members
                .remove(partname.membername())
                .ok_or_else(|| OpcError::PartNotFound(partname.to_string()))?;
            if is_xml_content_type(&content_type) {
                blob = utf8_blob(&partname, blob)?;
            }

            parts.push(Part::new(partname, content_type, blob).with_rels(part_rels));
        }

        Ok(Self { rels, parts })
    }

    /// Package-level relationships.
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    pub fn into_parts(self) -> (Relationships, Vec<Part>) {
        (self.rels, self.parts)
    }
}

fn enqueue(rels: &Relationships, seen: &mut HashSet<PackURI>, pending: &mut Vec<PackURI>) {
    for partname in rels.internal_targets() {
        if seen.insert(partname.clone()) {
            pending.push(partname.clone());
        }
    }
}

/// Relationships of `source`; a source without a `.rels` member has none.
fn rels_of(members: &HashMap<String, Vec<u8>>, source: &PackURI) -> Result<Relationships> {
    let rels_uri = source.rels_uri();
    match members.get(rels_uri.membername()) {
        Some(xml) => {
            let xml = xml_to_utf8(rels_uri.as_str(), xml)?;
            Relationships::from_xml(&xml, source.base_uri(), rels_uri.as_str())
        },
        None => Ok(Relationships::new()),
    }
}

/// `blob` transcoded to UTF-8, or `blob` itself when it already is.
fn utf8_blob(partname: &PackURI, blob: Vec<u8>) -> Result<Vec<u8>> {
    let decoded = match xml_to_utf8(partname.as_str(), &blob)? {
        Cow::Borrowed(xml) if xml.len() == blob.len() => None,
        xml => Some(xml.into_owned()),
    };
    Ok(decoded.unwrap_or(blob))
}
