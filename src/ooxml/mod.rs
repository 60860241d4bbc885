//! Office Open XML (OOXML) reading support.
//!
//! Only the PresentationML side is implemented: an OPC package reader
//! ([`opc`]) and a read-only view of `.pptx` decks ([`pptx`]).
//!
//! # Example
//!
//! ```rust,no_run
//! use slidegrade::ooxml::pptx::Package;
//!
//! let pkg = Package::open("presentation.pptx")?;
//! let pres = pkg.presentation()?;
//! println!("{} slides", pres.slide_count()?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
pub mod error;
pub mod opc;
pub mod pptx;
pub(crate) mod xml;

pub use error::{OoxmlError, Result};
