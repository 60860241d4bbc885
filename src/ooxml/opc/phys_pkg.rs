//! Zip container access.

use crate::ooxml::opc::error::{OpcError, Result};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;
use zip::ZipArchive;

/// The zip archive behind a package.
pub struct PhysPkgReader<R: Read + Seek> {
    archive: ZipArchive<R>,
}

impl PhysPkgReader<BufReader<File>> {
    /// Open a package file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(OpcError::PackageNotFound(path.display().to_string()));
        }

        Self::new(BufReader::new(File::open(path)?))
    }
}

impl<R: Read + Seek> PhysPkgReader<R> {
    /// Read the central directory. Anything that is not a zip archive fails
    /// here.
    pub fn new(reader: R) -> Result<Self> {
        Ok(Self {
            archive: ZipArchive::new(reader)?,
        })
    }

    /// Decompress every file member, keyed by member name.
    pub fn read_all(&mut self) -> Result<HashMap<String, Vec<u8>>> {
        let mut members = HashMap::with_capacity(self.archive.len());

        for index in 0..self.archive.len() {
            let mut file = self.archive.by_index(index)?;
            if file.is_dir() {
                continue;
            }

            let mut data = Vec::with_capacity(usize::try_from(file.size()).unwrap_or(0));
            file.read_to_end(&mut data)?;
            members.insert(file.name().to_string(), data);
        }

        Ok(members)
    }

    /// Number of archive entries, directories included.
    #[inline]
    pub fn len(&self) -> usize {
        self.archive.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.archive.is_empty()
    }
}
