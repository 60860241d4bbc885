//! An opened OPC package.

use crate::ooxml::opc::constants::relationship_type;
use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::PackURI;
use crate::ooxml::opc::part::Part;
use crate::ooxml::opc::phys_pkg::PhysPkgReader;
use crate::ooxml::opc::pkgreader::PackageReader;
use crate::ooxml::opc::rel::Relationships;
use std::collections::HashMap;
use std::io::{Read, Seek};
use std::path::Path;

/// Every reachable part of a package, by part name, plus the package-level
/// relationships.
#[derive(Debug)]
pub struct OpcPackage {
    rels: Relationships,
    parts: HashMap<PackURI, Part>,
}

impl OpcPackage {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load(PhysPkgReader::open(path)?)
    }

    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        Self::load(PhysPkgReader::new(reader)?)
    }

    fn load<R: Read + Seek>(phys: PhysPkgReader<R>) -> Result<Self> {
        let (rels, parts) = PackageReader::read(phys)?.into_parts();
        Ok(Self {
            rels,
            parts: parts
                .into_iter()
                .map(|part| (part.partname().clone(), part))
                .collect(),
        })
    }

    /// The part the package's `officeDocument` relationship points at
    /// (`/ppt/presentation.xml` in a deck).
    pub fn main_document_part(&self) -> Result<&Part> {
        self.part_by_reltype(relationship_type::OFFICE_DOCUMENT)
    }

    /// The target of the single package relationship of type `reltype`.
    pub fn part_by_reltype(&self, reltype: &str) -> Result<&Part> {
        let rel = self.rels.single_of_type(reltype)?;
        self.get_part(rel.target_partname()?)
    }

    pub fn get_part(&self, partname: &PackURI) -> Result<&Part> {
        self.parts
            .get(partname)
            .ok_or_else(|| OpcError::PartNotFound(partname.to_string()))
    }

    /// Package-level relationships.
    #[inline]
    pub fn rels(&self) -> &Relationships {
        &self.rels
    }
}
