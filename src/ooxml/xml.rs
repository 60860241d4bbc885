//! Small streaming helpers shared by the PresentationML wrappers.
//!
//! Every wrapper keeps the raw bytes of its own element and carves child
//! elements out of them as sub-slices, so nothing is re-serialized. Readers
//! here never trim text: whitespace inside `<a:t>` is content.

use crate::ooxml::error::{OoxmlError, Result};
use quick_xml::Reader;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesStart, Event};

/// A direct child element of some parent element.
#[derive(Debug, Clone)]
pub(crate) struct ChildElement<'a> {
    /// Local name (namespace prefix stripped)
    pub local_name: Vec<u8>,
    /// The complete element, start tag to end tag
    pub xml: &'a [u8],
}

impl ChildElement<'_> {
    #[inline]
    pub fn is(&self, local_name: &[u8]) -> bool {
        self.local_name == local_name
    }
}

/// Byte offset of the `<` that opens `e`, given the reader position right after it.
fn tag_start(xml: &[u8], e: &BytesStart<'_>, pos_after: usize) -> Result<usize> {
    memchr::memrchr(b'<', &xml[..pos_after - e.len()])
        .ok_or_else(|| OoxmlError::Xml("unterminated start tag".to_string()))
}

/// Consume `e` (already read) up to its matching end tag and return the full slice.
fn element_slice<'a>(
    xml: &'a [u8],
    reader: &mut Reader<&'a [u8]>,
    e: &BytesStart<'a>,
    is_empty: bool,
) -> Result<&'a [u8]> {
    let start = tag_start(xml, e, reader.buffer_position() as usize)?;
    if !is_empty {
        reader.read_to_end(e.name())?;
    }
    Ok(&xml[start..reader.buffer_position() as usize])
}

/// Find the first element (at any depth) with the given local name.
pub(crate) fn find_element<'a>(xml: &'a [u8], local_name: &[u8]) -> Result<Option<&'a [u8]>> {
    let mut reader = Reader::from_reader(xml);

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.local_name().as_ref() == local_name => {
                return element_slice(xml, &mut reader, &e, false).map(Some);
            },
            Event::Empty(e) if e.local_name().as_ref() == local_name => {
                return element_slice(xml, &mut reader, &e, true).map(Some);
            },
            Event::Eof => return Ok(None),
            _ => {},
        }
    }
}

/// List the direct children of the root element of `xml`, in document order.
pub(crate) fn child_elements(xml: &[u8]) -> Result<Vec<ChildElement<'_>>> {
    let mut reader = Reader::from_reader(xml);

    // Skip the prolog up to the root start tag
    loop {
        match reader.read_event()? {
            Event::Start(_) => break,
            Event::Empty(_) | Event::Eof => return Ok(Vec::new()),
            _ => {},
        }
    }

    let mut children = Vec::new();
    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let slice = element_slice(xml, &mut reader, &e, false)?;
                children.push(ChildElement {
                    local_name: e.local_name().as_ref().to_vec(),
                    xml: slice,
                });
            },
            Event::Empty(e) => {
                let slice = element_slice(xml, &mut reader, &e, true)?;
                children.push(ChildElement {
                    local_name: e.local_name().as_ref().to_vec(),
                    xml: slice,
                });
            },
            Event::End(_) | Event::Eof => break,
            _ => {},
        }
    }

    Ok(children)
}

/// Concatenate all character data inside the root element of `xml`.
///
/// Entity and character references are resolved; unknown entities are kept
/// verbatim as `&name;`.
pub(crate) fn element_text(xml: &[u8]) -> Result<String> {
    let mut reader = Reader::from_reader(xml);
    let mut text = String::new();

    loop {
        match reader.read_event()? {
            Event::Text(e) => text.push_str(std::str::from_utf8(e.as_ref())?),
            Event::CData(e) => text.push_str(std::str::from_utf8(e.as_ref())?),
            Event::GeneralRef(e) => push_reference(&mut text, std::str::from_utf8(e.as_ref())?),
            Event::Eof => break,
            _ => {},
        }
    }

    Ok(text)
}

/// Append the expansion of an entity or character reference (`name` is the
/// text between `&` and `;`).
fn push_reference(text: &mut String, name: &str) {
    if let Some(expanded) = resolve_predefined_entity(name) {
        text.push_str(expanded);
        return;
    }

    let code = match name.strip_prefix('#') {
        Some(hex) if hex.starts_with(['x', 'X']) => u32::from_str_radix(&hex[1..], 16).ok(),
        Some(dec) => dec.parse::<u32>().ok(),
        None => None,
    };

    match code.and_then(char::from_u32) {
        Some(c) => text.push(c),
        None => {
            text.push('&');
            text.push_str(name);
            text.push(';');
        },
    }
}

/// Read an attribute of the first element with the given local name.
///
/// `attr_name` is compared against the attribute's local name, so `r:id`
/// matches `b"id"`.
pub(crate) fn first_attr(xml: &[u8], element: &[u8], attr_name: &[u8]) -> Result<Option<String>> {
    let mut reader = Reader::from_reader(xml);

    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == element => {
                for attr in e.attributes() {
                    let attr = attr?;
                    if attr.key.local_name().as_ref() == attr_name {
                        return Ok(Some(attr.unescape_value()?.into_owned()));
                    }
                }
                return Ok(None);
            },
            Event::Eof => return Ok(None),
            _ => {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TREE: &[u8] = br#"<?xml version="1.0"?>
<p:spTree xmlns:p="urn:p" xmlns:a="urn:a">
  <p:nvGrpSpPr/>
  <p:sp><p:txBody><a:p><a:r><a:t>Hello</a:t></a:r></a:p></p:txBody></p:sp>
  <p:pic name="x"/>
</p:spTree>"#;

    #[test]
    fn test_child_elements() {
        let children = child_elements(TREE).unwrap();
        let names: Vec<&[u8]> = children.iter().map(|c| c.local_name.as_slice()).collect();
        assert_eq!(names, vec![&b"nvGrpSpPr"[..], b"sp", b"pic"]);

        assert!(children[1].xml.starts_with(b"<p:sp>"));
        assert!(children[1].xml.ends_with(b"</p:sp>"));
        assert_eq!(children[2].xml, br#"<p:pic name="x"/>"#);
    }

    #[test]
    fn test_find_element() {
        let t = find_element(TREE, b"t").unwrap().unwrap();
        assert_eq!(t, b"<a:t>Hello</a:t>");
        assert!(find_element(TREE, b"tbl").unwrap().is_none());
    }

    #[test]
    fn test_element_text_resolves_references() {
        let text =
            element_text(b"<a:t>A &amp; B &#x4E2D;&#25991; &lt;x&gt; &bogus;</a:t>").unwrap();
        assert_eq!(text, "A & B \u{4E2D}\u{6587} <x> &bogus;");
    }

    #[test]
    fn test_element_text_keeps_whitespace() {
        assert_eq!(element_text(b"<a:t>  spaced  </a:t>").unwrap(), "  spaced  ");
    }

    #[test]
    fn test_first_attr() {
        let xml = br#"<p:sldIdLst><p:sldId id="256" r:id="rId2"/></p:sldIdLst>"#;
        assert_eq!(first_attr(xml, b"sldIdLst", b"id").unwrap(), None);
        assert_eq!(first_attr(xml, b"sldId", b"id").unwrap().as_deref(), Some("256"));
    }
}
