pub mod analysis;
pub mod repo;
pub mod score;
pub mod submission;

pub use analysis::{
    CodeReviewResult, IntegrationDepth, PatternMatch, ReportedScore, RepoStructure,
    StaticAnalysisResult,
    VideoAnalysisResult, VideoDownloadResult,
};
pub use repo::{GitHistory, HackathonPeriodFlag, RepoFiles, RepoMetadata};
pub use score::{CriterionScore, ProjectScore, ScoreSource};
pub use submission::Submission;

/// Team number shared by every record of one submission.
pub type TeamNumber = u32;
