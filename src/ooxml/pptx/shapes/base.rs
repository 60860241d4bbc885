/// Base shape types for PowerPoint presentations.
use crate::ooxml::error::Result;
use crate::ooxml::pptx::shapes::table::Table;
use crate::ooxml::pptx::shapes::textframe::TextFrame;
use crate::ooxml::xml::{find_element, first_attr};
use serde::Serialize;

/// `graphicData` URI of a DrawingML table.
const TABLE_GRAPHIC_DATA_URI: &str = "http://schemas.openxmlformats.org/drawingml/2006/table";

/// Shape type enumeration.
///
/// Indicates what kind of shape this is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeType {
    /// An auto shape or text box (p:sp)
    Shape,
    /// A picture shape (p:pic)
    Picture,
    /// A graphic frame containing a table, chart or diagram (p:graphicFrame)
    GraphicFrame,
    /// A group shape (p:grpSp)
    GroupShape,
    /// A connector shape (p:cxnSp)
    Connector,
    /// Ink or other content part (p:contentPart)
    ContentPart,
}

impl ShapeType {
    /// Map a shape tree child's local name to a shape type.
    ///
    /// Returns None for the non-shape children of `<p:spTree>`
    /// (`nvGrpSpPr`, `grpSpPr`, `extLst`).
    pub fn from_local_name(local_name: &[u8]) -> Option<Self> {
        match local_name {
            b"sp" => Some(Self::Shape),
            b"pic" => Some(Self::Picture),
            b"graphicFrame" => Some(Self::GraphicFrame),
            b"grpSp" => Some(Self::GroupShape),
            b"cxnSp" => Some(Self::Connector),
            b"contentPart" => Some(Self::ContentPart),
            _ => None,
        }
    }

    /// Short lowercase label, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Shape => "shape",
            Self::Picture => "picture",
            Self::GraphicFrame => "graphic-frame",
            Self::GroupShape => "group-shape",
            Self::Connector => "connector",
            Self::ContentPart => "content-part",
        }
    }
}

/// A shape on a slide.
///
/// Keeps the raw XML of the shape element and reads properties on demand.
///
/// # Examples
///
/// ```rust,ignore
/// for shape in slide.shapes()? {
///     println!("Shape: {}", shape.name()?);
///     if let Some(tf) = shape.text_frame()? {
///         println!("  text: {}", tf.text()?);
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct BaseShape {
    /// Raw XML bytes for this shape
    xml_bytes: Vec<u8>,
    /// Shape type
    shape_type: ShapeType,
}

impl BaseShape {
    /// Create a new BaseShape from XML bytes and shape type.
    pub fn new(xml_bytes: Vec<u8>, shape_type: ShapeType) -> Self {
        Self {
            xml_bytes,
            shape_type,
        }
    }

    /// Get the shape type.
    #[inline]
    pub fn shape_type(&self) -> &ShapeType {
        &self.shape_type
    }

    /// Get the shape name.
    ///
    /// Returns the name from the `<p:cNvPr>` element.
    pub fn name(&self) -> Result<String> {
        Ok(first_attr(&self.xml_bytes, b"cNvPr", b"name")?.unwrap_or_default())
    }

    /// Check if this shape has a text frame.
    ///
    /// Only auto shapes carry one; a shape without `<p:txBody>` still has an
    /// (empty) text frame.
    pub fn has_text_frame(&self) -> bool {
        self.shape_type == ShapeType::Shape
    }

    /// Get the text frame of this shape, if it can have one.
    pub fn text_frame(&self) -> Result<Option<TextFrame>> {
        if !self.has_text_frame() {
            return Ok(None);
        }

        Ok(Some(match find_element(&self.xml_bytes, b"txBody")? {
            Some(body) => TextFrame::from_xml(body),
            None => TextFrame::empty(),
        }))
    }

    /// Check if this shape is a graphic frame holding a table.
    pub fn has_table(&self) -> Result<bool> {
        if self.shape_type != ShapeType::GraphicFrame {
            return Ok(false);
        }

        let uri = first_attr(&self.xml_bytes, b"graphicData", b"uri")?;
        Ok(uri.as_deref() == Some(TABLE_GRAPHIC_DATA_URI))
    }

    /// Get the table carried by this shape, if any.
    pub fn table(&self) -> Result<Option<Table>> {
        if !self.has_table()? {
            return Ok(None);
        }
        Table::from_graphic_frame_xml(&self.xml_bytes)
    }

    /// Get raw XML bytes.
    #[inline]
    pub fn xml_bytes(&self) -> &[u8] {
        &self.xml_bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE_FRAME: &str = r#"<p:graphicFrame xmlns:p="urn:p" xmlns:a="urn:a">
  <p:nvGraphicFramePr><p:cNvPr id="4" name="Table 3"/></p:nvGraphicFramePr>
  <a:graphic><a:graphicData uri="http://schemas.openxmlformats.org/drawingml/2006/table">
    <a:tbl><a:tblGrid><a:gridCol w="1"/><a:gridCol w="1"/></a:tblGrid><a:tr h="1"><a:tc/><a:tc/></a:tr></a:tbl>
  </a:graphicData></a:graphic>
</p:graphicFrame>"#;

    #[test]
    fn test_text_shape() {
        let shape = BaseShape::new(
            br#"<p:sp xmlns:p="urn:p" xmlns:a="urn:a"><p:nvSpPr><p:cNvPr id="2" name="Title 1"/></p:nvSpPr><p:txBody><a:p><a:r><a:t>Hi</a:t></a:r></a:p></p:txBody></p:sp>"#.to_vec(),
            ShapeType::Shape,
        );

        assert_eq!(shape.name().unwrap(), "Title 1");
        assert!(shape.has_text_frame());
        assert_eq!(shape.text_frame().unwrap().unwrap().text().unwrap(), "Hi");
        assert!(!shape.has_table().unwrap());
    }

    #[test]
    fn test_shape_without_body_has_empty_frame() {
        let shape = BaseShape::new(br#"<p:sp xmlns:p="urn:p"/>"#.to_vec(), ShapeType::Shape);
        assert_eq!(shape.text_frame().unwrap().unwrap().text().unwrap(), "");
    }

    #[test]
    fn test_table_frame() {
        let shape = BaseShape::new(TABLE_FRAME.as_bytes().to_vec(), ShapeType::GraphicFrame);

        assert!(!shape.has_text_frame());
        assert!(shape.text_frame().unwrap().is_none());
        assert!(shape.has_table().unwrap());

        let table = shape.table().unwrap().unwrap();
        assert_eq!(table.row_count().unwrap(), 1);
        assert_eq!(table.column_count().unwrap(), 2);
    }

    #[test]
    fn test_chart_frame_is_not_a_table() {
        let chart = TABLE_FRAME.replace("drawingml/2006/table", "drawingml/2006/chart");
        let shape = BaseShape::new(chart.into_bytes(), ShapeType::GraphicFrame);

        assert!(!shape.has_table().unwrap());
        assert!(shape.table().unwrap().is_none());
    }

    #[test]
    fn test_from_local_name() {
        assert_eq!(ShapeType::from_local_name(b"cxnSp"), Some(ShapeType::Connector));
        assert_eq!(ShapeType::from_local_name(b"grpSpPr"), None);
    }
}
