//! The presentation as a whole.

use crate::ooxml::error::Result;
use crate::ooxml::opc::OpcPackage;
use crate::ooxml::pptx::parts::{PresentationPart, SlidePart};
use crate::ooxml::pptx::slide::Slide;

/// Slide size and slides of a deck, borrowed from its [`Package`].
///
/// [`Package`]: crate::ooxml::pptx::Package
pub struct Presentation<'a> {
    part: PresentationPart<'a>,
    package: &'a OpcPackage,
}

impl<'a> Presentation<'a> {
    #[inline]
    pub(crate) fn new(part: PresentationPart<'a>, package: &'a OpcPackage) -> Self {
        Self { part, package }
    }

    pub fn slide_count(&self) -> Result<usize> {
        self.part.slide_count()
    }

    /// `(width, height)` in EMUs, or None when `<p:sldSz>` is missing.
    pub fn slide_size(&self) -> Result<Option<(i64, i64)>> {
        self.part.slide_size()
    }

    /// Slides in `<p:sldIdLst>` order, which is the order they are shown in.
    /// Part names (`slide3.xml`) say nothing about position.
    pub fn slides(&self) -> Result<Vec<Slide<'a>>> {
        let main = self.part.part();

        self.part
            .slide_rids()?
            .iter()
            .map(|rid| -> Result<Slide<'a>> {
                let partname = main.related_partname(rid)?;
                Ok(Slide::new(SlidePart::from_part(self.package.get_part(partname)?)))
            })
            .collect()
    }

    #[inline]
    pub fn part(&self) -> &PresentationPart<'a> {
        &self.part
    }
}
