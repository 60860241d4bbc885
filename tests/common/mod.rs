//! In-memory `.pptx` fixtures.
//!
//! Builds the smallest package PowerPoint readers accept: content types,
//! package relationships, a presentation part and one part per slide.

use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

pub const WIDE: (i64, i64) = (12192000, 6858000);
pub const STANDARD: (i64, i64) = (9144000, 6858000);

const PRESENTATION_MAIN: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml";

const NS: &str = r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main""#;

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Shapes of one slide, as raw `<p:spTree>` children.
#[derive(Debug, Clone, Default)]
pub struct SlideFixture {
    shapes: Vec<String>,
}

impl SlideFixture {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> usize {
        self.shapes.len() + 2
    }

    /// A text box with a single paragraph.
    pub fn text(mut self, text: &str) -> Self {
        let id = self.next_id();
        self.shapes.push(format!(
            r#"<p:sp><p:nvSpPr><p:cNvPr id="{id}" name="TextBox {id}"/><p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr><p:spPr/><p:txBody><a:bodyPr/><a:lstStyle/><a:p><a:r><a:rPr lang="zh-CN"/><a:t>{}</a:t></a:r></a:p></p:txBody></p:sp>"#,
            escape(text)
        ));
        self
    }

    /// A table whose cells read `r{row}c{col}`, unless `fill` is given.
    pub fn table(self, rows: usize, cols: usize) -> Self {
        self.table_with(rows, cols, |r, c| format!("r{}c{}", r, c))
    }

    pub fn table_with(
        mut self,
        rows: usize,
        cols: usize,
        fill: impl Fn(usize, usize) -> String,
    ) -> Self {
        let id = self.next_id();
        let grid: String = (0..cols).map(|_| r#"<a:gridCol w="3048000"/>"#).collect();
        let body: String = (0..rows)
            .map(|r| {
                let cells: String = (0..cols)
                    .map(|c| {
                        format!(
                            "<a:tc><a:txBody><a:bodyPr/><a:lstStyle/><a:p><a:r><a:t>{}</a:t></a:r></a:p></a:txBody><a:tcPr/></a:tc>",
                            escape(&fill(r, c))
                        )
                    })
                    .collect();
                format!(r#"<a:tr h="370840">{}</a:tr>"#, cells)
            })
            .collect();

        self.shapes.push(format!(
            r#"<p:graphicFrame><p:nvGraphicFramePr><p:cNvPr id="{id}" name="Table {id}"/><p:cNvGraphicFramePr><a:graphicFrameLocks noGrp="1"/></p:cNvGraphicFramePr><p:nvPr/></p:nvGraphicFramePr><p:xfrm><a:off x="0" y="0"/><a:ext cx="6096000" cy="741680"/></p:xfrm><a:graphic><a:graphicData uri="http://schemas.openxmlformats.org/drawingml/2006/table"><a:tbl><a:tblPr firstRow="1" bandRow="1"/><a:tblGrid>{grid}</a:tblGrid>{body}</a:tbl></a:graphicData></a:graphic></p:graphicFrame>"#
        ));
        self
    }

    pub fn picture(mut self) -> Self {
        let id = self.next_id();
        self.shapes.push(format!(
            r#"<p:pic><p:nvPicPr><p:cNvPr id="{id}" name="Picture {id}"/><p:cNvPicPr/><p:nvPr/></p:nvPicPr><p:blipFill/><p:spPr/></p:pic>"#
        ));
        self
    }

    fn to_xml(&self) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><p:sld {NS}><p:cSld><p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr/>{}</p:spTree></p:cSld></p:sld>"#,
            self.shapes.concat()
        )
    }
}

/// A presentation to be written as a `.pptx` package.
#[derive(Debug, Clone)]
pub struct DeckBuilder {
    size: Option<(i64, i64)>,
    slides: Vec<SlideFixture>,
    utf16_slides: bool,
}

impl Default for DeckBuilder {
    fn default() -> Self {
        Self {
            size: Some(WIDE),
            slides: Vec::new(),
            utf16_slides: false,
        }
    }
}

impl DeckBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, size: (i64, i64)) -> Self {
        self.size = Some(size);
        self
    }

    pub fn without_size(mut self) -> Self {
        self.size = None;
        self
    }

    pub fn slide(mut self, slide: SlideFixture) -> Self {
        self.slides.push(slide);
        self
    }

    /// Store slide parts as UTF-16LE with a byte order mark.
    pub fn utf16_slides(mut self) -> Self {
        self.utf16_slides = true;
        self
    }

    pub fn blank_slides(mut self, count: usize) -> Self {
        self.slides.extend(std::iter::repeat_n(SlideFixture::new(), count));
        self
    }

    fn presentation_xml(&self) -> String {
        let ids: String = (0..self.slides.len())
            .map(|i| format!(r#"<p:sldId id="{}" r:id="rId{}"/>"#, 256 + i, i + 2))
            .collect();
        let size = self
            .size
            .map(|(cx, cy)| format!(r#"<p:sldSz cx="{}" cy="{}"/>"#, cx, cy))
            .unwrap_or_default();

        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><p:presentation {NS}><p:sldIdLst>{ids}</p:sldIdLst>{size}<p:notesSz cx="6858000" cy="9144000"/></p:presentation>"#
        )
    }

    fn presentation_rels(&self) -> String {
        let rels: String = (0..self.slides.len())
            .map(|i| {
                format!(
                    r#"<Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide" Target="slides/slide{}.xml"/>"#,
                    i + 2,
                    i + 1
                )
            })
            .collect();
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">{rels}</Relationships>"#
        )
    }

    fn content_types(&self, main_content_type: &str) -> String {
        let overrides: String = (0..self.slides.len())
            .map(|i| {
                format!(
                    r#"<Override PartName="/ppt/slides/slide{}.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slide+xml"/>"#,
                    i + 1
                )
            })
            .collect();
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/ppt/presentation.xml" ContentType="{main_content_type}"/>{overrides}</Types>"#
        )
    }

    /// Serialize the package.
    pub fn build(&self) -> Vec<u8> {
        self.build_with_main_content_type(PRESENTATION_MAIN)
    }

    /// Serialize the package, declaring a different content type for the main part.
    pub fn build_with_main_content_type(&self, main_content_type: &str) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();

        let mut add = |name: &str, data: &[u8]| {
            writer.start_file(name, options).unwrap();
            writer.write_all(data).unwrap();
        };

        add("[Content_Types].xml", self.content_types(main_content_type).as_bytes());
        add(
            "_rels/.rels",
            br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="ppt/presentation.xml"/></Relationships>"#,
        );
        add("ppt/presentation.xml", self.presentation_xml().as_bytes());
        add("ppt/_rels/presentation.xml.rels", self.presentation_rels().as_bytes());
        for (i, slide) in self.slides.iter().enumerate() {
            let xml = slide.to_xml();
            let data = if self.utf16_slides {
                let xml = xml.replacen(r#"encoding="UTF-8""#, r#"encoding="UTF-16""#, 1);
                std::iter::once(0xfeff)
                    .chain(xml.encode_utf16())
                    .flat_map(u16::to_le_bytes)
                    .collect()
            } else {
                xml.into_bytes()
            };
            add(&format!("ppt/slides/slide{}.xml", i + 1), &data);
        }

        writer.finish().unwrap().into_inner()
    }

    /// Write the package into `dir` and return its path.
    pub fn write_to(&self, dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, self.build()).unwrap();
        path
    }
}

/// A deck that passes every computed rule: seven 16:9 slides, a picture on
/// slide 1, the title and an 11x2 table on slide 7.
pub fn model_answer() -> DeckBuilder {
    DeckBuilder::new()
        .slide(SlideFixture::new().picture())
        .blank_slides(5)
        .slide(SlideFixture::new().text("出版信息").table(11, 2))
}
