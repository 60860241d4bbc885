//! `/ppt/presentation.xml`: slide size and slide order.

use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::part::Part;
use crate::ooxml::xml::{child_elements, find_element};
use quick_xml::Reader;
use quick_xml::events::Event;

/// Read access to the main part of a deck.
pub struct PresentationPart<'a> {
    part: &'a Part,
}

impl<'a> PresentationPart<'a> {
    pub fn from_part(part: &'a Part) -> Self {
        Self { part }
    }

    #[inline]
    fn xml_bytes(&self) -> &'a [u8] {
        self.part.blob()
    }

    /// Number of `<p:sldId>` entries.
    pub fn slide_count(&self) -> Result<usize> {
        Ok(self.slide_rids()?.len())
    }

    /// `cx` and `cy` of `<p:sldSz>`, in EMUs. None when the element or one of
    /// the two attributes is missing.
    pub fn slide_size(&self) -> Result<Option<(i64, i64)>> {
        let Some(sld_sz) = find_element(self.xml_bytes(), b"sldSz")? else {
            return Ok(None);
        };

        let mut reader = Reader::from_reader(sld_sz);
        let mut cx = None;
        let mut cy = None;

        if let Event::Empty(e) | Event::Start(e) = reader.read_event()? {
            for attr in e.attributes() {
                let attr = attr?;
                let slot = match attr.key.as_ref() {
                    b"cx" => &mut cx,
                    b"cy" => &mut cy,
                    _ => continue,
                };
                let value = std::str::from_utf8(&attr.value)?;
                *slot = Some(value.trim().parse::<i64>().map_err(|e| {
                    OoxmlError::InvalidFormat(format!("Invalid slide size '{}': {}", value, e))
                })?);
            }
        }

        Ok(cx.zip(cy))
    }

    /// `r:id` of every `<p:sldId>`, in list order.
    pub fn slide_rids(&self) -> Result<Vec<String>> {
        let Some(list) = find_element(self.xml_bytes(), b"sldIdLst")? else {
            return Ok(Vec::new());
        };

        let mut rids = Vec::new();
        for child in child_elements(list)?.iter().filter(|c| c.is(b"sldId")) {
            let mut reader = Reader::from_reader(child.xml);
            if let Event::Empty(e) | Event::Start(e) = reader.read_event()? {
                // The plain `id` attribute is the numeric slide id; the
                // relationship id lives in the relationships namespace.
                for attr in e.attributes() {
                    let attr = attr?;
                    if attr.key.local_name().as_ref() == b"id" && attr.key.prefix().is_some() {
                        rids.push(attr.unescape_value()?.into_owned());
                        break;
                    }
                }
            }
        }

        Ok(rids)
    }

    #[inline]
    pub fn part(&self) -> &'a Part {
        self.part
    }
}
