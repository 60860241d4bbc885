//! Opening `.pptx` files.

use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::OpcPackage;
use crate::ooxml::opc::constants::content_type as ct;
use crate::ooxml::pptx::parts::PresentationPart;
use crate::ooxml::pptx::presentation::Presentation;
use std::io::{Read, Seek};
use std::path::Path;

/// Main-part content types read as a presentation: `.pptx`, `.pptm`,
/// `.ppsx` and `.potx`.
const PRESENTATION_CONTENT_TYPES: [&str; 4] = [
    ct::PML_PRESENTATION_MAIN,
    ct::PML_PRES_MACRO_MAIN,
    ct::PML_SLIDESHOW_MAIN,
    ct::PML_TEMPLATE_MAIN,
];

/// A package whose main part is known to be a presentation.
///
/// ```rust,no_run
/// use slidegrade::ooxml::pptx::Package;
///
/// let pkg = Package::open("presentation.pptx")?;
/// println!("{} slides", pkg.presentation()?.slide_count()?);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct Package {
    opc: OpcPackage,
}

impl Package {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_opc(OpcPackage::open(path)?)
    }

    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        Self::from_opc(OpcPackage::from_reader(reader)?)
    }

    /// Reject packages whose main part is some other kind of document.
    pub fn from_opc(opc: OpcPackage) -> Result<Self> {
        let content_type = opc.main_document_part()?.content_type();
        if !PRESENTATION_CONTENT_TYPES.contains(&content_type) {
            return Err(OoxmlError::InvalidContentType {
                expected: ct::PML_PRESENTATION_MAIN.to_string(),
                got: content_type.to_string(),
            });
        }

        Ok(Self { opc })
    }

    pub fn presentation(&self) -> Result<Presentation<'_>> {
        let main = self.opc.main_document_part()?;
        Ok(Presentation::new(PresentationPart::from_part(main), &self.opc))
    }
}
