//! PowerPoint (.pptx) presentation support.
//!
//! Read-only access to Office Open XML presentations:
//!
//! - [`Package`]: the .pptx file package
//! - [`Presentation`]: slide count, slide size, slides in presentation order
//! - [`Slide`]: top-level shapes of one slide
//! - [`shapes`]: text frames and tables carried by shapes
//!
//! # Example
//!
//! ```rust,no_run
//! use slidegrade::ooxml::pptx::Package;
//!
//! let package = Package::open("presentation.pptx")?;
//! let pres = package.presentation()?;
//!
//! for slide in pres.slides()? {
//!     println!("Slide has {} shapes", slide.shape_count()?);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod package;
pub mod parts;
pub mod presentation;
pub mod shapes;
pub mod slide;

pub use package::Package;
pub use presentation::Presentation;
pub use slide::Slide;
