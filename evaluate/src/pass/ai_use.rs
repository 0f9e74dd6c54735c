use crate::evidence::Evidence;
use crate::pass::{log_scale, HeuristicPass};

/// Detected patterns worth a flat bonus on top of the integration score.
const PATTERN_BONUSES: [(&[&str], f64); 5] = [
    (&["extended_thinking"], 0.4),
    (&["mcp_server"], 0.3),
    (&["agentic_pattern"], 0.3),
    (&["anthropic_sdk", "openai_sdk", "gemini_sdk"], 0.3),
    (&["tool_use"], 0.2),
];

#[derive(Debug, Clone, Default)]
pub struct AiUseData {
    pub integration_score: u32,
    pub pattern_bonus: f64,
}

impl From<&Evidence<'_>> for AiUseData {
    fn from(evidence: &Evidence<'_>) -> Self {
        let analysis = &evidence.static_analysis;
        let pattern_bonus = PATTERN_BONUSES
            .iter()
            .filter(|(names, _)| names.iter().any(|name| analysis.has_pattern(name)))
            .map(|(_, bonus)| bonus)
            .sum();
        Self {
            integration_score: analysis.integration_score,
            pattern_bonus,
        }
    }
}

pub struct AiUse;

impl HeuristicPass for AiUse {
    type Data = AiUseData;

    const CEILING: f64 = 8.0;

    fn required_data(&self, evidence: &Evidence<'_>) -> AiUseData {
        AiUseData::from(evidence)
    }

    fn apply(&self, data: &AiUseData) -> f64 {
        if data.integration_score == 0 {
            return 1.0;
        }
        1.0 + log_scale(data.integration_score as f64, 60.0, 1.0) * 7.0 + data.pattern_bonus
    }

    fn name(&self) -> &'static str {
        "ai_use"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::{PatternMatch, StaticAnalysisResult, Submission};

    fn analysis(score: u32, patterns: &[&str]) -> StaticAnalysisResult {
        let mut result = StaticAnalysisResult::empty(1);
        result.integration_score = score;
        for name in patterns {
            result
                .integration_patterns
                .insert((*name).to_owned(), PatternMatch::default());
        }
        result
    }

    #[test]
    fn test_zero_integration_is_exactly_one() {
        let sub = Submission::new(1, "t", "p");
        // patterns without any integration score earn nothing
        let static_result = analysis(0, &["extended_thinking", "tool_use"]);
        let evidence = Evidence::new(&sub, None, Some(&static_result), None, None);
        assert_eq!(AiUse.estimate(&evidence), 1.0);
    }

    #[test]
    fn test_midpoint_score() {
        let sub = Submission::new(1, "t", "p");
        let static_result = analysis(60, &[]);
        let evidence = Evidence::new(&sub, None, Some(&static_result), None, None);
        assert!((AiUse.estimate(&evidence) - 4.5).abs() < 1e-9);
    }

    #[test]
    fn test_sdk_bonus_counted_once() {
        let sub = Submission::new(1, "t", "p");
        let static_result = analysis(10, &["anthropic_sdk", "openai_sdk", "gemini_sdk"]);
        let evidence = Evidence::new(&sub, None, Some(&static_result), None, None);
        let data = AiUse.required_data(&evidence);
        assert!((data.pattern_bonus - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_all_bonuses() {
        let sub = Submission::new(1, "t", "p");
        let static_result = analysis(
            5,
            &["extended_thinking", "mcp_server", "agentic_pattern", "openai_sdk", "tool_use"],
        );
        let evidence = Evidence::new(&sub, None, Some(&static_result), None, None);
        let data = AiUse.required_data(&evidence);
        assert!((data.pattern_bonus - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_capped_at_eight_even_when_saturated() {
        let sub = Submission::new(1, "t", "p");
        let static_result = analysis(
            1_000_000,
            &["extended_thinking", "mcp_server", "agentic_pattern", "openai_sdk", "tool_use"],
        );
        let evidence = Evidence::new(&sub, None, Some(&static_result), None, None);
        assert_eq!(AiUse.estimate(&evidence), 8.0);
    }
}
