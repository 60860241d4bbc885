//! Character encoding of XML parts.
//!
//! XML parts may be stored as UTF-8 or UTF-16 with a byte order mark, or in
//! whatever encoding their `<?xml ... encoding="..."?>` declaration names.
//! Everything past the package reader works on UTF-8, so parts are
//! transcoded once when they are loaded.

use crate::ooxml::opc::error::{OpcError, Result};
use encoding_rs::{Encoding, UTF_8, UTF_16BE, UTF_16LE};
use quick_xml::Reader;
use quick_xml::events::Event;
use std::borrow::Cow;

/// Detect the encoding of `xml` and return it as UTF-8 without a BOM.
///
/// UTF-8 input without a BOM is borrowed. The declaration is left in place;
/// the XML reader ignores its `encoding` attribute.
pub(crate) fn xml_to_utf8<'a>(part: &str, xml: &'a [u8]) -> Result<Cow<'a, [u8]>> {
    let (encoding, body) = match Encoding::for_bom(xml) {
        Some((encoding, bom_len)) => (encoding, &xml[bom_len..]),
        None => (sniff(xml), xml),
    };

    if encoding == UTF_8 {
        return match std::str::from_utf8(body) {
            Ok(_) => Ok(Cow::Borrowed(body)),
            Err(e) => Err(OpcError::xml(part, e)),
        };
    }

    encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .map(|text| Cow::Owned(text.into_owned().into_bytes()))
        .ok_or_else(|| OpcError::xml(part, format!("invalid {} data", encoding.name())))
}

/// Encoding of a part without a BOM.
fn sniff(xml: &[u8]) -> &'static Encoding {
    match xml {
        [b'<', 0, b'?', 0, ..] => UTF_16LE,
        [0, b'<', 0, b'?', ..] => UTF_16BE,
        _ => declared_encoding(xml).map(Encoding::output_encoding).unwrap_or(UTF_8),
    }
}

/// Encoding named by the XML declaration, if there is one and it is known.
/// A declared UTF-16 in single-byte text maps back to UTF-8 through
/// [`Encoding::output_encoding`].
fn declared_encoding(xml: &[u8]) -> Option<&'static Encoding> {
    let mut reader = Reader::from_reader(xml);
    match reader.read_event() {
        Ok(Event::Decl(decl)) => {
            let label = decl.encoding()?.ok()?;
            Encoding::for_label(&label)
        },
        _ => None,
    }
}
