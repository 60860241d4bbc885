//! Score reports and their renderings.

use crate::grading::error::{GradeError, Result};
use crate::grading::points::Points;
use crate::grading::rule::RuleDef;
use serde::Serialize;
use std::fmt;

/// Status label of a passing rule.
pub const PASS_LABEL: &str = "✅ 达标";
/// Status label of a failing rule.
pub const FAIL_LABEL: &str = "❌ 未达标";

/// Outcome of one rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleResult {
    pub id: u8,
    pub description: &'static str,
    pub max_score: Points,
    /// Either `max_score` or zero
    pub awarded_score: Points,
    pub passed: bool,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inconsistency: Option<&'static str>,
}

impl RuleResult {
    /// Score a rule definition.
    pub fn new(rule: &RuleDef, passed: bool) -> Self {
        Self {
            id: rule.id,
            description: rule.description,
            max_score: rule.points,
            awarded_score: if passed { rule.points } else { Points::ZERO },
            passed,
            status: if passed { PASS_LABEL } else { FAIL_LABEL },
            inconsistency: rule.inconsistency,
        }
    }
}

/// The result of grading one presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreReport {
    /// One entry per rubric row, in rubric order
    pub rules: Vec<RuleResult>,
    /// Sum of the awarded scores
    pub total: Points,
    /// Denominator for the pass rate
    pub rubric_total: Points,
    /// Whole-number percentage of `total` out of `rubric_total`, rounded down
    pub pass_rate: u32,
}

impl ScoreReport {
    /// Build a report from per-rule results.
    pub fn new(rules: Vec<RuleResult>, rubric_total: Points) -> Self {
        let total: Points = rules.iter().map(|r| r.awarded_score).sum();
        Self {
            pass_rate: total.percent_of(rubric_total),
            rules,
            total,
            rubric_total,
        }
    }

    pub fn passed_count(&self) -> usize {
        self.rules.iter().filter(|r| r.passed).count()
    }

    pub fn failed(&self) -> impl Iterator<Item = &RuleResult> {
        self.rules.iter().filter(|r| !r.passed)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| GradeError::Render(format!("JSON: {}", e)))
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_saphyr::to_string(self).map_err(|e| GradeError::Render(format!("YAML: {}", e)))
    }
}

impl fmt::Display for ScoreReport {
    /// A summary block followed by one line per rule.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "总分 (Total Score): {} / {}", self.total, self.rubric_total)?;
        writeln!(f, "评分点数量: {} 个", self.rules.len())?;
        writeln!(f, "合格率: {}%", self.pass_rate)?;
        writeln!(f)?;

        writeln!(
            f,
            "{:>3}  {:>8}  {:>8}  {:<8}  评分点描述",
            "ID", "标准分值", "实际得分", "状态"
        )?;
        for rule in &self.rules {
            let marker = if rule.inconsistency.is_some() { " (!)" } else { "" };
            writeln!(
                f,
                "{:>3}  {:>8.2}  {:>8.2}  {:<8}  {}{}",
                rule.id,
                rule.max_score.as_f64(),
                rule.awarded_score.as_f64(),
                rule.status,
                rule.description,
                marker
            )?;
        }

        let mut flagged = self
            .rules
            .iter()
            .filter_map(|r| r.inconsistency.map(|note| (r.id, note)))
            .peekable();
        if flagged.peek().is_some() {
            writeln!(f)?;
            for (id, note) in flagged {
                writeln!(f, "(!) rule {}: {}", id, note)?;
            }
        }

        Ok(())
    }
}
