//! Wrappers over the XML of the parts a deck reader needs.

pub mod presentation;
pub mod slide;

pub use presentation::PresentationPart;
pub use slide::SlidePart;
