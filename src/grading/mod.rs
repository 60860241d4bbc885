//! Rubric grading of `.pptx` submissions.
//!
//! A submission is parsed once into a [`Deck`] snapshot. The [`Evaluator`]
//! then walks the static [`CHECKLIST`] in order: rules with a computed
//! outcome ask the [`Inspector`], the rest pass unconditionally. The result
//! is a [`ScoreReport`] with one entry per rule.
//!
//! ```rust,no_run
//! use slidegrade::grading::Evaluator;
//!
//! match Evaluator::default().evaluate_path("yswg.pptx") {
//!     Ok(report) => print!("{}", report),
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```

pub mod checklist;
pub mod deck;
pub mod error;
pub mod evaluator;
pub mod inspector;
pub mod points;
pub mod report;
pub mod rule;

pub use checklist::{CHECKLIST, Checklist, RUBRIC_TOTAL, RULE_COUNT};
pub use deck::{Deck, ShapeSnapshot, SlideSize, SlideSnapshot, TableSnapshot};
pub use error::{GradeError, Result};
pub use evaluator::{Evaluator, EvaluatorOptions};
pub use inspector::{Inspector, SlideLookup};
pub use points::Points;
pub use report::{FAIL_LABEL, PASS_LABEL, RuleResult, ScoreReport};
pub use rule::{Check, OutcomeSource, RuleDef};
