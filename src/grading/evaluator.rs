//! Rule evaluation.

use crate::grading::checklist::{CHECKLIST, Checklist, RUBRIC_TOTAL};
use crate::grading::deck::Deck;
use crate::grading::error::Result;
use crate::grading::inspector::{Inspector, SlideLookup};
use crate::grading::report::{RuleResult, ScoreReport};
use crate::grading::rule::OutcomeSource;
use log::{debug, info};
use std::io::{Read, Seek};
use std::path::Path;

/// Runtime options for an [`Evaluator`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvaluatorOptions {
    /// Policy for checks that target a missing slide
    pub slide_lookup: SlideLookup,
}

impl EvaluatorOptions {
    /// Fail checks that target a missing slide instead of inspecting slide 1.
    pub fn strict_slides(mut self, strict: bool) -> Self {
        self.slide_lookup = if strict { SlideLookup::Fail } else { SlideLookup::FirstSlide };
        self
    }
}

/// Scores presentations against the rubric.
///
/// # Examples
///
/// ```rust,no_run
/// use slidegrade::grading::{Evaluator, EvaluatorOptions};
///
/// let evaluator = Evaluator::new(EvaluatorOptions::default());
/// let report = evaluator.evaluate_path("yswg.pptx")?;
/// println!("{} / {}", report.total, report.rubric_total);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Evaluator {
    options: EvaluatorOptions,
    checklist: &'static Checklist,
}

impl Evaluator {
    pub fn new(options: EvaluatorOptions) -> Self {
        Self {
            options,
            checklist: &CHECKLIST,
        }
    }

    #[inline]
    pub fn options(&self) -> EvaluatorOptions {
        self.options
    }

    /// Parse and grade a presentation file.
    pub fn evaluate_path<P: AsRef<Path>>(&self, path: P) -> Result<ScoreReport> {
        let path = path.as_ref();
        debug!("Grading {}", path.display());
        Ok(self.evaluate_deck(&Deck::open(path)?))
    }

    /// Parse and grade a presentation read from `reader`.
    pub fn evaluate_reader<R: Read + Seek>(&self, reader: R) -> Result<ScoreReport> {
        Ok(self.evaluate_deck(&Deck::from_reader(reader)?))
    }

    /// Parse and grade a presentation held in memory.
    pub fn evaluate_bytes(&self, bytes: &[u8]) -> Result<ScoreReport> {
        Ok(self.evaluate_deck(&Deck::from_bytes(bytes)?))
    }

    /// Grade an already parsed deck. This cannot fail.
    pub fn evaluate_deck(&self, deck: &Deck) -> ScoreReport {
        let inspector = Inspector::new(deck, self.options.slide_lookup);

        let results: Vec<RuleResult> = self
            .checklist
            .rules()
            .iter()
            .map(|rule| {
                let passed = match &rule.outcome {
                    OutcomeSource::Computed(check) => inspector.check(check),
                    OutcomeSource::AssumedPass => true,
                };
                debug!(
                    "Rule {:>2} [{}]: {}",
                    rule.id,
                    rule.outcome,
                    if passed { "pass" } else { "fail" }
                );
                RuleResult::new(rule, passed)
            })
            .collect();

        let report = ScoreReport::new(results, RUBRIC_TOTAL);
        info!(
            "Graded {} rules: {} passed, total {} / {}",
            report.rules.len(),
            report.passed_count(),
            report.total,
            report.rubric_total
        );
        report
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(EvaluatorOptions::default())
    }
}
