pub mod ai_use;
pub mod demo;
pub mod depth;
pub mod impact;

use crate::evidence::Evidence;
use ai_use::AiUse;
use demo::Demo;
use depth::Depth;
use impact::Impact;
use tracing::trace;

/// Lowest score any criterion can receive.
pub const SCORE_FLOOR: f64 = 1.0;
/// Highest score any criterion can receive.
pub const SCORE_CEILING: f64 = 10.0;
/// Estimate for criteria no pass knows how to derive.
pub const NEUTRAL_SCORE: f64 = 5.0;

/// Logistic curve over `ln(value + 1)`; `value == midpoint` maps to 0.5.
///
/// Saturates towards 1.0 so heavy-tailed counts (lines of code, commits) can't
/// dominate a sum. Returns 0.0 for non-positive values.
pub fn log_scale(value: f64, midpoint: f64, steepness: f64) -> f64 {
    if value <= 0.0 {
        return 0.0;
    }
    let distance = (value + 1.0).ln() - (midpoint + 1.0).ln();
    1.0 / (1.0 + (-steepness * distance).exp())
}

pub fn clamp_score(score: f64, ceiling: f64) -> f64 {
    score.clamp(SCORE_FLOOR, ceiling)
}

/// Round to `decimals` places, exact ties going to the even digit.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

/// A non-LLM estimator for one criterion.
pub trait HeuristicPass {
    type Data;

    /// Upper bound of this estimate.
    const CEILING: f64 = SCORE_CEILING;

    fn required_data(&self, evidence: &Evidence<'_>) -> Self::Data;
    /// Unclamped estimate.
    fn apply(&self, data: &Self::Data) -> f64;
    fn name(&self) -> &'static str;

    fn estimate(&self, evidence: &Evidence<'_>) -> f64 {
        let data = self.required_data(evidence);
        let raw = self.apply(&data);
        trace!(pass = self.name(), raw, "heuristic estimate");
        clamp_score(raw, Self::CEILING)
    }
}

/// Criterion kinds with a heuristic estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CriterionKind {
    Impact,
    AiUse,
    Depth,
    Demo,
    Unknown,
}

impl CriterionKind {
    pub fn from_key(key: &str) -> Self {
        match key {
            "impact" => CriterionKind::Impact,
            "ai_use" => CriterionKind::AiUse,
            "depth" => CriterionKind::Depth,
            "demo" => CriterionKind::Demo,
            _ => CriterionKind::Unknown,
        }
    }

    pub fn is_demo(&self) -> bool {
        matches!(self, CriterionKind::Demo)
    }

    /// Heuristic estimate in `[1, ceiling]`, unrounded.
    pub fn estimate(&self, evidence: &Evidence<'_>) -> f64 {
        match self {
            CriterionKind::Impact => Impact.estimate(evidence),
            CriterionKind::AiUse => AiUse.estimate(evidence),
            CriterionKind::Depth => Depth.estimate(evidence),
            CriterionKind::Demo => Demo.estimate(evidence),
            CriterionKind::Unknown => NEUTRAL_SCORE,
        }
    }

    pub fn ceiling(&self) -> f64 {
        match self {
            CriterionKind::Impact => Impact::CEILING,
            CriterionKind::AiUse => AiUse::CEILING,
            CriterionKind::Depth => Depth::CEILING,
            CriterionKind::Demo => Demo::CEILING,
            CriterionKind::Unknown => SCORE_CEILING,
        }
    }
}
