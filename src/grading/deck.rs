//! Owned snapshot of the parts of a presentation the inspector looks at.
//!
//! Building the snapshot is the only step that reads XML, so every parse
//! problem surfaces here and the inspector itself cannot fail.

use crate::grading::error::Result;
use crate::ooxml::pptx::shapes::{BaseShape, ShapeType, Table};
use crate::ooxml::pptx::{Package, Presentation, Slide};
use log::debug;
use serde::Serialize;
use std::io::{Cursor, Read, Seek};
use std::path::Path;

/// Slide dimensions in EMUs, shared by every slide of a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlideSize {
    pub width: i64,
    pub height: i64,
}

impl SlideSize {
    /// Width divided by height, or None for a zero height.
    pub fn aspect_ratio(&self) -> Option<f64> {
        if self.height == 0 {
            return None;
        }
        Some(self.width as f64 / self.height as f64)
    }
}

/// A table's grid and cell text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSnapshot {
    pub rows: usize,
    pub columns: usize,
    /// Cell text, row by row
    pub cells: Vec<Vec<String>>,
}

impl TableSnapshot {
    fn from_table(table: &Table) -> crate::ooxml::Result<Self> {
        let mut cells = Vec::new();
        for row in table.rows()? {
            cells.push(
                row.cells()?
                    .iter()
                    .map(|cell| cell.text())
                    .collect::<crate::ooxml::Result<Vec<_>>>()?,
            );
        }

        Ok(Self {
            rows: table.row_count()?,
            columns: table.column_count()?,
            cells,
        })
    }
}

/// One top-level shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShapeSnapshot {
    pub name: String,
    pub kind: ShapeType,
    /// Text frame content; None when the shape has no text frame
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<TableSnapshot>,
}

impl ShapeSnapshot {
    fn from_shape(shape: &BaseShape) -> crate::ooxml::Result<Self> {
        let text = match shape.text_frame()? {
            Some(frame) => Some(frame.text()?),
            None => None,
        };
        let table = match shape.table()? {
            Some(table) => Some(TableSnapshot::from_table(&table)?),
            None => None,
        };

        Ok(Self {
            name: shape.name()?,
            kind: *shape.shape_type(),
            text,
            table,
        })
    }
}

/// One slide with its top-level shapes in z-order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlideSnapshot {
    pub partname: String,
    pub shapes: Vec<ShapeSnapshot>,
}

impl SlideSnapshot {
    fn from_slide(slide: &Slide<'_>) -> crate::ooxml::Result<Self> {
        Ok(Self {
            partname: slide.partname().to_string(),
            shapes: slide
                .shapes()?
                .iter()
                .map(ShapeSnapshot::from_shape)
                .collect::<crate::ooxml::Result<Vec<_>>>()?,
        })
    }

    /// Text of every shape that has a text frame, in z-order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.shapes.iter().filter_map(|shape| shape.text.as_deref())
    }

    /// Every table on the slide, in z-order.
    pub fn tables(&self) -> impl Iterator<Item = &TableSnapshot> {
        self.shapes.iter().filter_map(|shape| shape.table.as_ref())
    }
}

/// A parsed presentation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Deck {
    /// None when `<p:sldSz>` is absent
    pub slide_size: Option<SlideSize>,
    pub slides: Vec<SlideSnapshot>,
}

impl Deck {
    /// Open and snapshot a presentation file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let package = Package::open(path)?;
        Self::from_package(&package)
    }

    /// Snapshot a presentation read from `reader`.
    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        let package = Package::from_reader(reader)?;
        Self::from_package(&package)
    }

    /// Snapshot a presentation held in memory.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_reader(Cursor::new(bytes))
    }

    /// Snapshot an already opened package.
    pub fn from_package(package: &Package) -> Result<Self> {
        Ok(Self::from_presentation(&package.presentation()?)?)
    }

    /// Snapshot a presentation.
    pub fn from_presentation(pres: &Presentation<'_>) -> crate::ooxml::Result<Self> {
        let slide_size = pres
            .slide_size()?
            .map(|(width, height)| SlideSize { width, height });

        let slides = pres
            .slides()?
            .iter()
            .map(SlideSnapshot::from_slide)
            .collect::<crate::ooxml::Result<Vec<_>>>()?;

        debug!(
            "Loaded deck: {} slides, size {:?}",
            slides.len(),
            slide_size.map(|s| (s.width, s.height))
        );

        Ok(Self { slide_size, slides })
    }

    #[inline]
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Get a slide by 0-based index.
    #[inline]
    pub fn slide(&self, index: usize) -> Option<&SlideSnapshot> {
        self.slides.get(index)
    }
}
