use crate::TeamNumber;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How the git history relates to the evaluation period.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HackathonPeriodFlag {
    Clean,
    MinorPriorWork,
    SignificantPriorWork,
    PreExistingProject,
    #[default]
    Unknown,
}

// git 历史分析结果
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct GitHistory {
    /// UTC, stored without offset
    pub first_commit_date: Option<NaiveDateTime>,
    pub last_commit_date: Option<NaiveDateTime>,
    pub total_commits: u32,
    pub commits_before_hackathon: u32,
    pub commits_during_hackathon: u32,
    pub commits_after_deadline: u32,
    pub hackathon_period_flag: HackathonPeriodFlag,
    pub is_fork: bool,
    pub is_single_commit_dump: bool,
    pub commit_authors: Vec<String>,
}

impl GitHistory {
    /// Commits made inside the evaluation period when known, otherwise all commits.
    pub fn effective_commits(&self) -> u32 {
        if self.commits_during_hackathon > 0 {
            self.commits_during_hackathon
        } else {
            self.total_commits
        }
    }
}

// 仓库文件统计
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct RepoFiles {
    pub file_count: u32,
    pub total_loc: u64,
    pub primary_language: String,
    /// language name -> lines of code
    pub languages: BTreeMap<String, u64>,
    pub has_readme: bool,
    pub has_tests: bool,
}

impl Default for RepoFiles {
    fn default() -> Self {
        Self {
            file_count: 0,
            total_loc: 0,
            primary_language: "unknown".to_owned(),
            languages: BTreeMap::new(),
            has_readme: false,
            has_tests: false,
        }
    }
}

impl RepoFiles {
    const NON_CODE_LANGUAGES: [&'static str; 4] = ["Markdown", "JSON", "YAML", "TOML"];

    /// Number of distinct languages that carry program code (docs and data formats excluded).
    pub fn code_language_count(&self) -> usize {
        self.languages
            .keys()
            .filter(|name| {
                !Self::NON_CODE_LANGUAGES
                    .iter()
                    .any(|lang| *lang == name.as_str())
            })
            .count()
    }
}

/// Result of cloning and analyzing a repository.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct RepoMetadata {
    pub team_number: TeamNumber,
    #[serde(default)]
    pub team_name: String,
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub sanitized_name: String,
    #[serde(default)]
    pub clone_success: bool,
    #[serde(default)]
    pub clone_error: Option<String>,
    #[serde(default)]
    pub files: RepoFiles,
    #[serde(default)]
    pub git_history: GitHistory,
}

impl RepoMetadata {
    /// Neutral record for a submission whose repository was never cloned.
    pub fn empty(team_number: TeamNumber) -> Self {
        Self {
            team_number,
            ..Default::default()
        }
    }
}
