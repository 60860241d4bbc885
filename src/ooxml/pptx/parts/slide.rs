//! `/ppt/slides/slideN.xml`: the shape tree of one slide.

use crate::ooxml::error::Result;
use crate::ooxml::opc::part::Part;
use crate::ooxml::pptx::shapes::base::{BaseShape, ShapeType};
use crate::ooxml::xml::{child_elements, find_element};

pub struct SlidePart<'a> {
    part: &'a Part,
}

impl<'a> SlidePart<'a> {
    pub fn from_part(part: &'a Part) -> Self {
        Self { part }
    }

    #[inline]
    fn xml_bytes(&self) -> &'a [u8] {
        self.part.blob()
    }

    /// Shape children of `<p:spTree>` in z-order. Shapes inside a group stay
    /// inside their group shape.
    pub fn shapes(&self) -> Result<Vec<BaseShape>> {
        let Some(tree) = find_element(self.xml_bytes(), b"spTree")? else {
            return Ok(Vec::new());
        };

        Ok(child_elements(tree)?
            .into_iter()
            .filter_map(|child| {
                ShapeType::from_local_name(&child.local_name)
                    .map(|shape_type| BaseShape::new(child.xml.to_vec(), shape_type))
            })
            .collect())
    }

    #[inline]
    pub fn part(&self) -> &'a Part {
        self.part
    }
}
