//! Structural predicates over a [`Deck`].
//!
//! All functions here are pure and read-only.

use crate::grading::deck::{Deck, SlideSnapshot};
use crate::grading::rule::Check;
use log::warn;
use std::ops::RangeInclusive;

/// Aspect ratios accepted as 16:9.
pub const WIDESCREEN_RATIO: RangeInclusive<f64> = 1.7..=1.8;

/// What to do when a check targets a slide the deck does not have.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SlideLookup {
    /// Inspect the first slide instead.
    #[default]
    FirstSlide,
    /// Fail the check.
    Fail,
}

/// True iff the deck has exactly `n` slides.
pub fn slide_count_equals(deck: &Deck, n: usize) -> bool {
    deck.slide_count() == n
}

/// True iff `width / height` lies within [`WIDESCREEN_RATIO`].
///
/// A deck without a slide size, or with a zero height, is not widescreen.
pub fn is_widescreen(deck: &Deck) -> bool {
    deck.slide_size
        .and_then(|size| size.aspect_ratio())
        .is_some_and(|ratio| WIDESCREEN_RATIO.contains(&ratio))
}

/// True iff some text frame on the slide contains `needle` (case-sensitive).
pub fn slide_contains_text(slide: &SlideSnapshot, needle: &str) -> bool {
    slide.texts().any(|text| text.contains(needle))
}

/// True iff some table on the slide is exactly `rows` × `cols`.
pub fn slide_contains_table(slide: &SlideSnapshot, rows: usize, cols: usize) -> bool {
    slide
        .tables()
        .any(|table| table.rows == rows && table.columns == cols)
}

/// True iff the slide has at least one top-level shape.
pub fn slide_has_shapes(slide: &SlideSnapshot) -> bool {
    !slide.shapes.is_empty()
}

/// Answers [`Check`]s against one deck.
#[derive(Debug, Clone, Copy)]
pub struct Inspector<'d> {
    deck: &'d Deck,
    lookup: SlideLookup,
}

impl<'d> Inspector<'d> {
    pub fn new(deck: &'d Deck, lookup: SlideLookup) -> Self {
        Self { deck, lookup }
    }

    /// Resolve a 0-based slide index under the lookup policy.
    ///
    /// Returns None when the deck has no slides, or when the index is out of
    /// range and the policy is [`SlideLookup::Fail`].
    pub fn slide(&self, index: usize) -> Option<&'d SlideSnapshot> {
        if let Some(slide) = self.deck.slide(index) {
            return Some(slide);
        }

        match (self.lookup, self.deck.slide(0)) {
            (SlideLookup::FirstSlide, Some(first)) => {
                warn!(
                    "Slide {} not found ({} slides), inspecting slide 1 instead",
                    index + 1,
                    self.deck.slide_count()
                );
                Some(first)
            },
            _ => {
                warn!(
                    "Slide {} not found ({} slides), check fails",
                    index + 1,
                    self.deck.slide_count()
                );
                None
            },
        }
    }

    /// Evaluate a check.
    pub fn check(&self, check: &Check) -> bool {
        match *check {
            Check::SlideCount(n) => slide_count_equals(self.deck, n),
            Check::Widescreen => is_widescreen(self.deck),
            Check::SlideHasShapes { slide } => self.slide(slide).is_some_and(slide_has_shapes),
            Check::SlideContainsText { slide, needle } => self
                .slide(slide)
                .is_some_and(|s| slide_contains_text(s, needle)),
            Check::SlideContainsTable { slide, rows, cols } => self
                .slide(slide)
                .is_some_and(|s| slide_contains_table(s, rows, cols)),
        }
    }
}
