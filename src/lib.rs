//! slidegrade - rubric grading for PowerPoint (.pptx) assignments
//!
//! This library opens a presentation, answers a handful of structural
//! questions about it and scores it against a fixed 41-row rubric.
//!
//! # Features
//!
//! - **OPC reader**: content types, relationships and parts of the zip package
//! - **PresentationML view**: slide size, slides in order, shapes, text frames and tables
//! - **Inspector**: slide count, 16:9 check, text containment, table dimensions
//! - **Evaluator**: the published rubric, with per-rule results and a total
//!
//! # Example - Grading a submission
//!
//! ```no_run
//! use slidegrade::grading::{Evaluator, EvaluatorOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let report = Evaluator::new(EvaluatorOptions::default()).evaluate_path("yswg.pptx")?;
//!
//! println!("Total: {} / {}", report.total, report.rubric_total);
//! for rule in report.failed() {
//!     println!("{:>2} {}", rule.id, rule.description);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Reading a PPTX file
//!
//! ```no_run
//! use slidegrade::ooxml::pptx::Package;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pkg = Package::open("presentation.pptx")?;
//! let pres = pkg.presentation()?;
//!
//! for slide in pres.slides()? {
//!     for shape in slide.shapes()? {
//!         if let Some(table) = shape.table()? {
//!             println!("{}x{} table", table.row_count()?, table.column_count()?);
//!         }
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod grading;
pub mod ooxml;

pub use grading::{Evaluator, EvaluatorOptions, GradeError, ScoreReport};
