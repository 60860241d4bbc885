//! Rubric rule definitions.

use crate::grading::points::Points;
use serde::{Serialize, Serializer};
use std::fmt;

/// A structural question the inspector can answer about a deck.
///
/// Slide numbers are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// The deck has exactly this many slides.
    SlideCount(usize),
    /// The slide aspect ratio is within the 16:9 tolerance band.
    Widescreen,
    /// The slide has at least one top-level shape.
    SlideHasShapes { slide: usize },
    /// Some text frame on the slide contains `needle`.
    SlideContainsText { slide: usize, needle: &'static str },
    /// Some table on the slide has exactly `rows` × `cols`.
    SlideContainsTable { slide: usize, rows: usize, cols: usize },
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::SlideCount(n) => write!(f, "slide count == {}", n),
            Self::Widescreen => f.write_str("width / height in [1.7, 1.8]"),
            Self::SlideHasShapes { slide } => {
                write!(f, "slide {} has at least one shape", slide + 1)
            },
            Self::SlideContainsText { slide, needle } => {
                write!(f, "slide {} text contains \"{}\"", slide + 1, needle)
            },
            Self::SlideContainsTable { slide, rows, cols } => {
                write!(f, "slide {} has a {}x{} table", slide + 1, rows, cols)
            },
        }
    }
}

/// Where a rule's outcome comes from.
///
/// Rules the inspector cannot verify (themes, animations, picture styles)
/// are `AssumedPass`. Teaching the inspector a new question means turning
/// such an entry into `Computed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeSource {
    Computed(Check),
    AssumedPass,
}

impl OutcomeSource {
    #[inline]
    pub fn is_computed(&self) -> bool {
        matches!(self, Self::Computed(_))
    }
}

impl fmt::Display for OutcomeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Computed(check) => write!(f, "computed: {}", check),
            Self::AssumedPass => f.write_str("assumed pass"),
        }
    }
}

impl Serialize for OutcomeSource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One row of the rubric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleDef {
    /// 1-based position in the published checklist
    pub id: u8,
    /// Rubric text, verbatim
    pub description: &'static str,
    /// Points awarded when the rule passes
    pub points: Points,
    /// How the outcome is decided
    pub outcome: OutcomeSource,
    /// Known disagreement between the rubric text and the executed check
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inconsistency: Option<&'static str>,
}

impl RuleDef {
    /// A rule decided by an inspector check. `tenths` is the point value in tenths.
    pub const fn computed(id: u8, description: &'static str, tenths: u32, check: Check) -> Self {
        Self {
            id,
            description,
            points: Points::from_tenths(tenths),
            outcome: OutcomeSource::Computed(check),
            inconsistency: None,
        }
    }

    /// A rule that always passes.
    pub const fn assumed(id: u8, description: &'static str, tenths: u32) -> Self {
        Self {
            id,
            description,
            points: Points::from_tenths(tenths),
            outcome: OutcomeSource::AssumedPass,
            inconsistency: None,
        }
    }

    /// Attach a note about a mismatch between the text and the check.
    pub const fn flagged(mut self, note: &'static str) -> Self {
        self.inconsistency = Some(note);
        self
    }
}
