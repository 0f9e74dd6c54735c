use crate::submission::Submission;
use crate::TeamNumber;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Where a criterion score came from.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ScoreSource {
    LlmReview,
    Heuristic,
    #[default]
    Automated,
}

impl ScoreSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreSource::LlmReview => "llm_review",
            ScoreSource::Heuristic => "heuristic",
            ScoreSource::Automated => "automated",
        }
    }
}

impl fmt::Display for ScoreSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// 单项评分
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct CriterionScore {
    pub score: f64,
    #[serde(default)]
    pub rationale: String,
    #[serde(default)]
    pub source: ScoreSource,
}

impl CriterionScore {
    pub fn llm(score: f64, rationale: &str) -> Self {
        Self {
            score,
            rationale: rationale.to_owned(),
            source: ScoreSource::LlmReview,
        }
    }

    pub fn heuristic(score: f64) -> Self {
        Self {
            score,
            rationale: String::new(),
            source: ScoreSource::Heuristic,
        }
    }
}

/// Final combined score for one submission.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct ProjectScore {
    pub team_number: TeamNumber,
    pub team_name: String,
    pub project_name: String,
    #[serde(default)]
    pub scores: BTreeMap<String, CriterionScore>,
    #[serde(default)]
    pub weighted_total: f64,
}

impl From<&Submission> for ProjectScore {
    fn from(sub: &Submission) -> Self {
        Self {
            team_number: sub.team_number,
            team_name: sub.team_name.clone(),
            project_name: sub.project_name.clone(),
            scores: BTreeMap::new(),
            weighted_total: 0.0,
        }
    }
}
