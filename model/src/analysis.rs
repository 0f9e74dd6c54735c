use crate::TeamNumber;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IntegrationDepth {
    #[default]
    None,
    Basic,
    Moderate,
    Deep,
    Extensive,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct PatternMatch {
    pub description: String,
    #[serde(default)]
    pub files: Vec<String>,
    #[serde(default)]
    pub match_count: u32,
}

// 仓库结构特征
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct RepoStructure {
    pub top_level_dirs: Vec<String>,
    pub top_level_files: Vec<String>,
    pub has_docker: bool,
    pub has_ci: bool,
    pub has_env_example: bool,
    /// Agent/assistant configuration doc checked into the repo root.
    pub has_claude_md: bool,
    pub has_license: bool,
    pub frameworks_detected: Vec<String>,
}

/// Result of static pattern scanning (no LLM involved).
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct StaticAnalysisResult {
    pub team_number: TeamNumber,
    #[serde(default)]
    pub clone_success: bool,
    /// pattern name -> match detail
    #[serde(default)]
    pub integration_patterns: BTreeMap<String, PatternMatch>,
    #[serde(default)]
    pub integration_score: u32,
    #[serde(default)]
    pub integration_depth: IntegrationDepth,
    #[serde(default)]
    pub boilerplate_type: Option<String>,
    #[serde(default)]
    pub is_boilerplate_heavy: bool,
    #[serde(default)]
    pub structure: RepoStructure,
}

impl StaticAnalysisResult {
    pub fn empty(team_number: TeamNumber) -> Self {
        Self {
            team_number,
            ..Default::default()
        }
    }

    pub fn has_pattern(&self, name: &str) -> bool {
        self.integration_patterns.contains_key(name)
    }
}

/// A score as written by an upstream LLM reviewer.
///
/// `source` is whatever the producer put there (usually the provider name,
/// e.g. `anthropic` or `gemini`) and is not interpreted.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct ReportedScore {
    pub score: f64,
    #[serde(default)]
    pub rationale: String,
    #[serde(default)]
    pub source: String,
}

impl ReportedScore {
    pub fn new(score: f64, rationale: &str) -> Self {
        Self {
            score,
            rationale: rationale.to_owned(),
            source: String::new(),
        }
    }
}

/// Result of the LLM narrative code review.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct CodeReviewResult {
    pub team_number: TeamNumber,
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub review_text: String,
    #[serde(default)]
    pub scores: BTreeMap<String, ReportedScore>,
    #[serde(default)]
    pub model_used: String,
}

impl CodeReviewResult {
    /// The reviewer's score for `criterion`, only when the review itself succeeded.
    pub fn usable_score(&self, criterion: &str) -> Option<&ReportedScore> {
        if !self.success {
            return None;
        }
        self.scores.get(criterion)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct VideoDownloadResult {
    pub success: bool,
    pub error: Option<String>,
    pub method: String,
    pub file_path: Option<String>,
    pub duration_seconds: f64,
}

/// Result of the LLM video review.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct VideoAnalysisResult {
    pub team_number: TeamNumber,
    #[serde(default)]
    pub download: VideoDownloadResult,
    #[serde(default)]
    pub analysis_success: bool,
    #[serde(default)]
    pub analysis_error: Option<String>,
    #[serde(default)]
    pub review_text: String,
    #[serde(default)]
    pub scores: BTreeMap<String, ReportedScore>,
    #[serde(default)]
    pub model_used: String,
}

impl VideoAnalysisResult {
    pub const DEMO_KEY: &'static str = "demo";

    pub fn usable_demo_score(&self) -> Option<&ReportedScore> {
        if !self.analysis_success {
            return None;
        }
        self.scores.get(Self::DEMO_KEY)
    }

    /// Duration of the downloaded video, `None` when nothing was downloaded.
    pub fn downloaded_duration(&self) -> Option<f64> {
        self.download
            .success
            .then_some(self.download.duration_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_review_hides_scores() {
        let mut review = CodeReviewResult {
            team_number: 1,
            ..Default::default()
        };
        review
            .scores
            .insert("depth".to_owned(), ReportedScore::new(6.0, "solid"));
        assert!(review.usable_score("depth").is_none());

        review.success = true;
        let score = review.usable_score("depth").unwrap();
        assert_eq!(score.score, 6.0);
        assert_eq!(score.rationale, "solid");
    }

    #[test]
    fn test_provider_name_accepted_as_source() {
        let json = r#"{
            "team_number": 9,
            "success": true,
            "scores": {
                "impact": {"score": 7.0, "rationale": "", "source": "anthropic"},
                "demo": {"score": 6.5, "source": "gemini"},
                "depth": {"score": 5.0}
            }
        }"#;
        let review: CodeReviewResult = serde_json::from_str(json).unwrap();
        assert_eq!(review.usable_score("impact").unwrap().source, "anthropic");
        assert_eq!(review.usable_score("demo").unwrap().score, 6.5);
        assert!(review.usable_score("depth").unwrap().source.is_empty());
    }

    #[test]
    fn test_demo_score_requires_analysis_success() {
        let json = r#"{
            "team_number": 4,
            "download": {"success": true, "duration_seconds": 95.5},
            "analysis_success": false,
            "scores": {"demo": {"score": 7.0, "rationale": "clear walkthrough"}}
        }"#;
        let mut video: VideoAnalysisResult = serde_json::from_str(json).unwrap();
        assert!(video.usable_demo_score().is_none());
        assert_eq!(video.downloaded_duration(), Some(95.5));

        video.analysis_success = true;
        assert_eq!(video.usable_demo_score().unwrap().score, 7.0);
    }
}
