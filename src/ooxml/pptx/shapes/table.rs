/// Table shape implementation for PowerPoint presentations.
use crate::ooxml::error::Result;
use crate::ooxml::pptx::shapes::textframe::TextFrame;
use crate::ooxml::xml::{ChildElement, child_elements, find_element};

/// A table in a PowerPoint presentation.
///
/// Tables in PowerPoint are DrawingML tables (`<a:tbl>`) contained within
/// graphic frames. They contain rows, which contain cells.
///
/// # Examples
///
/// ```rust,ignore
/// if let Some(table) = graphic_frame.table()? {
///     println!("Table: {}x{}", table.row_count()?, table.column_count()?);
///
///     for (row_idx, row) in table.rows()?.iter().enumerate() {
///         for (col_idx, cell) in row.cells()?.iter().enumerate() {
///             println!("Cell[{},{}]: {}", row_idx, col_idx, cell.text()?);
///         }
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Table {
    /// Raw XML bytes of the `<a:tbl>` element
    xml_bytes: Vec<u8>,
}

impl Table {
    /// Create a new Table from the XML of an `<a:tbl>` element.
    pub fn new(xml_bytes: Vec<u8>) -> Self {
        Self { xml_bytes }
    }

    /// Find the table inside a graphic frame, if there is one.
    pub fn from_graphic_frame_xml(xml_bytes: &[u8]) -> Result<Option<Self>> {
        Ok(find_element(xml_bytes, b"tbl")?.map(|tbl| Self::new(tbl.to_vec())))
    }

    fn row_elements(&self) -> Result<Vec<ChildElement<'_>>> {
        Ok(child_elements(&self.xml_bytes)?
            .into_iter()
            .filter(|child| child.is(b"tr"))
            .collect())
    }

    /// Get the number of rows (`<a:tr>`) in the table.
    pub fn row_count(&self) -> Result<usize> {
        Ok(self.row_elements()?.len())
    }

    /// Get the number of columns in the table.
    ///
    /// This is the number of `<a:gridCol>` entries. A table without a grid
    /// falls back to the cell count of its first row.
    pub fn column_count(&self) -> Result<usize> {
        if let Some(grid) = find_element(&self.xml_bytes, b"tblGrid")? {
            return Ok(child_elements(grid)?
                .iter()
                .filter(|child| child.is(b"gridCol"))
                .count());
        }

        match self.rows()?.first() {
            Some(row) => row.cell_count(),
            None => Ok(0),
        }
    }

    /// Get all rows in the table.
    pub fn rows(&self) -> Result<Vec<TableRow>> {
        Ok(self
            .row_elements()?
            .into_iter()
            .map(|row| TableRow::new(row.xml.to_vec()))
            .collect())
    }

    /// Get a specific cell by row and column index (0-based).
    pub fn cell(&self, row: usize, col: usize) -> Result<Option<TableCell>> {
        match self.rows()?.get(row) {
            Some(r) => Ok(r.cells()?.into_iter().nth(col)),
            None => Ok(None),
        }
    }
}

/// A row in a table.
#[derive(Debug, Clone)]
pub struct TableRow {
    /// Raw XML bytes of the `<a:tr>` element
    xml_bytes: Vec<u8>,
}

impl TableRow {
    /// Create a new TableRow from XML bytes.
    pub fn new(xml_bytes: Vec<u8>) -> Self {
        Self { xml_bytes }
    }

    /// Get all cells in this row.
    pub fn cells(&self) -> Result<Vec<TableCell>> {
        Ok(child_elements(&self.xml_bytes)?
            .into_iter()
            .filter(|child| child.is(b"tc"))
            .map(|cell| TableCell::new(cell.xml.to_vec()))
            .collect())
    }

    /// Get the number of cells (`<a:tc>`) in this row.
    pub fn cell_count(&self) -> Result<usize> {
        Ok(child_elements(&self.xml_bytes)?
            .iter()
            .filter(|child| child.is(b"tc"))
            .count())
    }
}

/// A cell in a table.
#[derive(Debug, Clone)]
pub struct TableCell {
    /// Raw XML bytes of the `<a:tc>` element
    xml_bytes: Vec<u8>,
}

impl TableCell {
    /// Create a new TableCell from XML bytes.
    pub fn new(xml_bytes: Vec<u8>) -> Self {
        Self { xml_bytes }
    }

    /// Get the text frame of this cell.
    pub fn text_frame(&self) -> Result<TextFrame> {
        Ok(match find_element(&self.xml_bytes, b"txBody")? {
            Some(body) => TextFrame::from_xml(body),
            None => TextFrame::empty(),
        })
    }

    /// Get the text content of this cell.
    pub fn text(&self) -> Result<String> {
        self.text_frame()?.text()
    }
}
