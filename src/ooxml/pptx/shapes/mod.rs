/// Shapes module for PowerPoint presentations.
///
/// This module provides types for working with shapes on slides:
/// - Shapes of any kind, with their type and name
/// - Text frames and paragraphs of auto shapes
/// - Tables inside graphic frames
pub mod base;
pub mod table;
pub mod textframe;

pub use base::{BaseShape, ShapeType};
pub use table::{Table, TableCell, TableRow};
pub use textframe::{Paragraph, TextFrame};
