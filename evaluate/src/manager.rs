use crate::aggregate::weighted_total;
use crate::config::{CriterionConfig, EvaluationContext};
use crate::evidence::{Evidence, EvidenceIndex};
use crate::merge::resolve_criterion;
use crate::store::{write_scores, StageInputs};
use model::ProjectScore;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{info, warn};

/// Result of one batch run.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoringOutcome {
    /// No criteria configured; nothing was scored.
    Skipped,
    /// One record per submission, ranked by weighted total.
    Scored(Vec<ProjectScore>),
}

impl ScoringOutcome {
    pub fn is_skipped(&self) -> bool {
        matches!(self, ScoringOutcome::Skipped)
    }

    pub fn into_scores(self) -> Vec<ProjectScore> {
        match self {
            ScoringOutcome::Skipped => Vec::new(),
            ScoringOutcome::Scored(scores) => scores,
        }
    }
}

pub struct ScoringManager {
    criteria: Vec<CriterionConfig>,
}

impl ScoringManager {
    pub fn new(criteria: Vec<CriterionConfig>) -> Self {
        Self { criteria }
    }

    pub fn from_context(ctx: &EvaluationContext) -> Self {
        Self::new(ctx.criteria().to_vec())
    }

    pub fn criteria(&self) -> &[CriterionConfig] {
        &self.criteria
    }

    /// Score one submission against every configured criterion.
    ///
    /// With no criteria configured the record carries empty scores and a zero total.
    pub fn score_one(&self, evidence: &Evidence<'_>) -> ProjectScore {
        let mut project = ProjectScore::from(evidence.submission);
        if self.criteria.is_empty() {
            return project;
        }

        let scores: BTreeMap<_, _> = self
            .criteria
            .iter()
            .map(|criterion| {
                (
                    criterion.key.clone(),
                    resolve_criterion(&criterion.key, evidence),
                )
            })
            .collect();
        project.weighted_total = weighted_total(&scores, &self.criteria);
        project.scores = scores;
        project
    }

    /// Score every submission and rank by weighted total, highest first.
    ///
    /// Ties keep submission order.
    pub fn run(&self, inputs: &StageInputs) -> ScoringOutcome {
        if self.criteria.is_empty() {
            warn!("Scoring disabled (no scoring criteria configured), skipping");
            return ScoringOutcome::Skipped;
        }

        let index = EvidenceIndex::new(
            &inputs.repo_metadata,
            &inputs.static_results,
            &inputs.code_reviews,
            &inputs.video_results,
        );

        // 每个提交独立计算, 互不影响
        let mut scores: Vec<ProjectScore> = inputs
            .submissions
            .iter()
            .map(|submission| self.score_one(&index.bundle(submission)))
            .collect();
        scores.sort_by(|a, b| b.weighted_total.total_cmp(&a.weighted_total));

        info!("Scored {} submissions", scores.len());
        if let Some(top) = scores.first() {
            info!(
                "Top score: {:.1} - {} ({})",
                top.weighted_total, top.project_name, top.team_name
            );
        }
        ScoringOutcome::Scored(scores)
    }
}

/// Score the batch and persist it wholesale to `out_path`.
///
/// Nothing is written when scoring is skipped.
pub fn run_scoring(
    ctx: &EvaluationContext,
    inputs: &StageInputs,
    out_path: &Path,
) -> anyhow::Result<ScoringOutcome> {
    let manager = ScoringManager::from_context(ctx);
    let outcome = manager.run(inputs);
    if let ScoringOutcome::Scored(scores) = &outcome {
        write_scores(out_path, scores)?;
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::{ScoreSource, Submission};

    fn criteria(keys: &[(&str, f64)]) -> Vec<CriterionConfig> {
        keys.iter()
            .map(|(key, weight)| CriterionConfig {
                key: (*key).to_owned(),
                weight: *weight,
                description: String::new(),
            })
            .collect()
    }

    #[test]
    fn test_score_one_without_criteria_is_empty_record() {
        let manager = ScoringManager::new(Vec::new());
        let sub = Submission::new(5, "Five", "Fifth");
        let project = manager.score_one(&Evidence::bare(&sub));
        assert_eq!(project.team_number, 5);
        assert!(project.scores.is_empty());
        assert_eq!(project.weighted_total, 0.0);
    }

    #[test]
    fn test_run_without_criteria_is_skipped() {
        let manager = ScoringManager::new(Vec::new());
        let inputs = StageInputs {
            submissions: vec![Submission::new(1, "a", "b")],
            ..Default::default()
        };
        let outcome = manager.run(&inputs);
        assert!(outcome.is_skipped());
        assert!(outcome.into_scores().is_empty());
    }

    #[test]
    fn test_unknown_criterion_is_neutral_heuristic() {
        let manager = ScoringManager::new(criteria(&[("originality", 1.0)]));
        let sub = Submission::new(1, "a", "b");
        let project = manager.score_one(&Evidence::bare(&sub));
        let resolved = &project.scores["originality"];
        assert_eq!(resolved.score, 5.0);
        assert_eq!(resolved.source, ScoreSource::Heuristic);
        assert_eq!(project.weighted_total, 5.0);
    }

    #[test]
    fn test_every_configured_criterion_resolved() {
        let manager = ScoringManager::new(criteria(&[
            ("impact", 0.25),
            ("depth", 0.2),
            ("demo", 0.3),
            ("ai_use", 0.25),
            ("polish", 0.1),
        ]));
        let sub = Submission::new(1, "a", "b");
        let project = manager.score_one(&Evidence::bare(&sub));
        assert_eq!(project.scores.len(), 5);
        for resolved in project.scores.values() {
            assert!(resolved.score >= 1.0 && resolved.score <= 10.0);
        }
    }
}
