//! Individual slides.

use crate::ooxml::error::Result;
use crate::ooxml::opc::packuri::PackURI;
use crate::ooxml::pptx::parts::SlidePart;
use crate::ooxml::pptx::shapes::base::BaseShape;

/// One slide of a [`Presentation`](crate::ooxml::pptx::Presentation).
///
/// ```rust,no_run
/// use slidegrade::ooxml::pptx::Package;
///
/// let pkg = Package::open("presentation.pptx")?;
/// for slide in pkg.presentation()?.slides()? {
///     for shape in slide.shapes()? {
///         if let Some(frame) = shape.text_frame()? {
///             println!("{}: {}", slide.partname(), frame.text()?);
///         }
///     }
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Slide<'a> {
    part: SlidePart<'a>,
}

impl<'a> Slide<'a> {
    #[inline]
    pub(crate) fn new(part: SlidePart<'a>) -> Self {
        Self { part }
    }

    pub fn partname(&self) -> &'a PackURI {
        self.part.part().partname()
    }

    /// Top-level shapes in z-order.
    pub fn shapes(&self) -> Result<Vec<BaseShape>> {
        self.part.shapes()
    }

    pub fn shape_count(&self) -> Result<usize> {
        self.shapes().map(|shapes| shapes.len())
    }

    #[inline]
    pub fn part(&self) -> &SlidePart<'a> {
        &self.part
    }
}
