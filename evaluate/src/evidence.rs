//! Per-submission evidence lookup.
//!
//! Upstream stages each produce one record per team, any of which may be
//! missing. [`EvidenceIndex`] keys them by team number once per batch and
//! [`EvidenceIndex::bundle`] hands every pass a complete [`Evidence`] value,
//! substituting neutral records for whatever was never produced.

use model::{
    CodeReviewResult, RepoMetadata, StaticAnalysisResult, Submission, TeamNumber,
    VideoAnalysisResult,
};
use std::borrow::Cow;
use std::collections::HashMap;

/// Everything known about one submission.
///
/// Repo metadata and static analysis are always present (defaulted when
/// absent). Code review and video analysis stay optional since their absence
/// decides whether a score can come from an LLM at all.
#[derive(Debug, Clone)]
pub struct Evidence<'a> {
    pub submission: &'a Submission,
    pub repo: Cow<'a, RepoMetadata>,
    pub static_analysis: Cow<'a, StaticAnalysisResult>,
    pub code_review: Option<&'a CodeReviewResult>,
    pub video: Option<&'a VideoAnalysisResult>,
}

impl<'a> Evidence<'a> {
    pub fn new(
        submission: &'a Submission,
        repo: Option<&'a RepoMetadata>,
        static_analysis: Option<&'a StaticAnalysisResult>,
        code_review: Option<&'a CodeReviewResult>,
        video: Option<&'a VideoAnalysisResult>,
    ) -> Self {
        let team = submission.team_number;
        Self {
            submission,
            repo: repo.map_or_else(|| Cow::Owned(RepoMetadata::empty(team)), Cow::Borrowed),
            static_analysis: static_analysis.map_or_else(
                || Cow::Owned(StaticAnalysisResult::empty(team)),
                Cow::Borrowed,
            ),
            code_review,
            video,
        }
    }

    /// Evidence with nothing but the submission itself.
    pub fn bare(submission: &'a Submission) -> Self {
        Self::new(submission, None, None, None, None)
    }
}

/// Stage outputs keyed by team number.
#[derive(Debug, Default)]
pub struct EvidenceIndex<'a> {
    repo: HashMap<TeamNumber, &'a RepoMetadata>,
    static_analysis: HashMap<TeamNumber, &'a StaticAnalysisResult>,
    code_review: HashMap<TeamNumber, &'a CodeReviewResult>,
    video: HashMap<TeamNumber, &'a VideoAnalysisResult>,
}

impl<'a> EvidenceIndex<'a> {
    pub fn new(
        repo_metadata: &'a [RepoMetadata],
        static_results: &'a [StaticAnalysisResult],
        code_reviews: &'a [CodeReviewResult],
        video_results: &'a [VideoAnalysisResult],
    ) -> Self {
        Self {
            repo: repo_metadata.iter().map(|m| (m.team_number, m)).collect(),
            static_analysis: static_results.iter().map(|s| (s.team_number, s)).collect(),
            code_review: code_reviews.iter().map(|r| (r.team_number, r)).collect(),
            video: video_results.iter().map(|v| (v.team_number, v)).collect(),
        }
    }

    pub fn bundle(&self, submission: &'a Submission) -> Evidence<'a> {
        let team = submission.team_number;
        Evidence::new(
            submission,
            self.repo.get(&team).copied(),
            self.static_analysis.get(&team).copied(),
            self.code_review.get(&team).copied(),
            self.video.get(&team).copied(),
        )
    }
}
