use crate::config::CriterionConfig;
use crate::pass::round_to;
use model::CriterionScore;
use std::collections::BTreeMap;

/// Weighted sum of resolved scores, rounded to two decimals.
///
/// Configured criteria missing from `scores` contribute nothing.
pub fn weighted_total(
    scores: &BTreeMap<String, CriterionScore>,
    criteria: &[CriterionConfig],
) -> f64 {
    let total: f64 = criteria
        .iter()
        .filter_map(|criterion| {
            scores
                .get(&criterion.key)
                .map(|resolved| resolved.score * criterion.weight)
        })
        .sum();
    round_to(total, 2)
}
