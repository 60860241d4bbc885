/// Text frame for accessing text content in shapes.
use crate::ooxml::error::Result;
use crate::ooxml::xml::{child_elements, element_text, find_element};

/// Line break inside a paragraph (`<a:br/>`).
const LINE_BREAK: char = '\u{b}';

/// A text frame (`<p:txBody>` or `<a:txBody>`) containing text content.
///
/// # Examples
///
/// ```rust,ignore
/// if let Some(text_frame) = shape.text_frame()? {
///     println!("Text: {}", text_frame.text()?);
///
///     for para in text_frame.paragraphs()? {
///         println!("Paragraph: {}", para.text()?);
///     }
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextFrame {
    /// Raw XML bytes of the text body element
    xml_bytes: Vec<u8>,
}

impl TextFrame {
    /// Create a TextFrame from the XML of a text body element.
    pub(crate) fn from_xml(xml_bytes: &[u8]) -> Self {
        Self {
            xml_bytes: xml_bytes.to_vec(),
        }
    }

    /// An empty text frame, as seen on a shape without `<p:txBody>`.
    pub(crate) fn empty() -> Self {
        Self::default()
    }

    /// Get the paragraphs of this text frame in document order.
    pub fn paragraphs(&self) -> Result<Vec<Paragraph>> {
        if self.xml_bytes.is_empty() {
            return Ok(Vec::new());
        }

        Ok(child_elements(&self.xml_bytes)?
            .into_iter()
            .filter(|child| child.is(b"p"))
            .map(|child| Paragraph {
                xml_bytes: child.xml.to_vec(),
            })
            .collect())
    }

    /// Get the full text of this frame.
    ///
    /// Paragraphs are separated by `\n`. No trimming is applied.
    pub fn text(&self) -> Result<String> {
        let paragraphs = self
            .paragraphs()?
            .iter()
            .map(Paragraph::text)
            .collect::<Result<Vec<_>>>()?;

        Ok(paragraphs.join("\n"))
    }
}

/// A paragraph (`<a:p>`) inside a text frame.
#[derive(Debug, Clone)]
pub struct Paragraph {
    xml_bytes: Vec<u8>,
}

impl Paragraph {
    /// Get the text of this paragraph.
    ///
    /// Runs and fields contribute their `<a:t>` text, line breaks become a
    /// vertical tab. Paragraph properties contribute nothing.
    pub fn text(&self) -> Result<String> {
        let mut text = String::new();

        for child in child_elements(&self.xml_bytes)? {
            match child.local_name.as_slice() {
                b"r" | b"fld" => {
                    if let Some(t) = find_element(child.xml, b"t")? {
                        text.push_str(&element_text(t)?);
                    }
                },
                b"br" => text.push(LINE_BREAK),
                _ => {},
            }
        }

        Ok(text)
    }
}
