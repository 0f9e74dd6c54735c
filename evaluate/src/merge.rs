//! Choosing between an LLM-reported score and a heuristic estimate.
//!
//! Precedence is fixed:
//! 1. a successful code review carrying the criterion;
//! 2. for the demo criterion only, a successful video analysis carrying `demo`;
//! 3. the criterion's heuristic pass, rounded to one decimal.

use crate::evidence::Evidence;
use crate::pass::{round_to, CriterionKind, SCORE_CEILING, SCORE_FLOOR};
use model::{CriterionScore, ReportedScore, ScoreSource};
use tracing::{debug, warn};

/// Resolve one configured criterion for one submission.
pub fn resolve_criterion(key: &str, evidence: &Evidence<'_>) -> CriterionScore {
    let kind = CriterionKind::from_key(key);

    if let Some(reported) = llm_score(key, kind, evidence) {
        let score = clamp_reported(key, evidence, reported.score);
        debug!(
            team = evidence.submission.team_number,
            criterion = key,
            score,
            source = %ScoreSource::LlmReview,
            "criterion resolved"
        );
        return CriterionScore::llm(score, &reported.rationale);
    }

    let score = round_to(kind.estimate(evidence), 1);
    debug!(
        team = evidence.submission.team_number,
        criterion = key,
        ?kind,
        score,
        source = %ScoreSource::Heuristic,
        "criterion resolved"
    );
    CriterionScore::heuristic(score)
}

fn llm_score<'e>(
    key: &str,
    kind: CriterionKind,
    evidence: &'e Evidence<'_>,
) -> Option<&'e ReportedScore> {
    if let Some(score) = evidence
        .code_review
        .and_then(|review| review.usable_score(key))
    {
        return Some(score);
    }
    if kind.is_demo() {
        return evidence.video.and_then(|video| video.usable_demo_score());
    }
    None
}

// LLM 分数理应已在上游限定在 [1, 10], 这里再兜底一次
fn clamp_reported(key: &str, evidence: &Evidence<'_>, reported: f64) -> f64 {
    if reported.is_nan() {
        warn!(
            team = evidence.submission.team_number,
            criterion = key,
            "LLM score is NaN, using floor"
        );
        return SCORE_FLOOR;
    }
    let clamped = reported.clamp(SCORE_FLOOR, SCORE_CEILING);
    if clamped != reported {
        warn!(
            team = evidence.submission.team_number,
            criterion = key,
            reported,
            clamped,
            "LLM score outside valid range, clamped"
        );
    }
    clamped
}
