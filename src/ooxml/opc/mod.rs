//! Open Packaging Conventions (OPC) reader.
//!
//! A `.pptx` file is a zip archive of parts tied together by relationships.
//! This module reads that structure:
//!
//! - [`phys_pkg`]: zip members
//! - `encoding`: XML parts transcoded to UTF-8
//! - [`pkgreader`]: `[Content_Types].xml` and the relationship walk
//! - [`OpcPackage`]: reachable parts by [`PackURI`], and the main document part
pub mod constants;
mod encoding;
pub mod error;
pub mod package;
pub mod packuri;
pub mod part;
pub mod phys_pkg;
pub mod pkgreader;
pub mod rel;

pub use package::OpcPackage;
pub use packuri::PackURI;
pub use part::Part;
pub use rel::{RelTarget, Relationship, Relationships};
