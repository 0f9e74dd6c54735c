use crate::error::{StoreError, StoreResult};
use model::{
    CodeReviewResult, ProjectScore, RepoMetadata, StaticAnalysisResult, Submission,
    VideoAnalysisResult,
};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const SUBMISSIONS_FILE: &str = "submissions.json";
pub const REPO_METADATA_FILE: &str = "repo_metadata.json";
pub const STATIC_ANALYSIS_FILE: &str = "static_analysis.json";
pub const CODE_REVIEWS_FILE: &str = "code_reviews.json";
pub const VIDEO_ANALYSIS_FILE: &str = "video_analysis.json";
pub const SCORES_FILE: &str = "scores.json";

/// Read a JSON array written by an upstream stage. A missing file means the
/// stage never ran and yields an empty list.
pub fn load_records<T: DeserializeOwned>(path: &Path) -> StoreResult<Vec<T>> {
    if !path.exists() {
        debug!("{:?} not found, treating as empty", path);
        return Ok(Vec::new());
    }
    let content = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Persist the ranked batch as a pretty JSON array, replacing any previous file.
pub fn write_scores(path: &Path, scores: &[ProjectScore]) -> StoreResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| StoreError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let content = serde_json::to_string_pretty(scores).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, content).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Saved {} scores to {}", scores.len(), path.display());
    Ok(())
}

pub fn load_scores(path: &Path) -> StoreResult<Vec<ProjectScore>> {
    load_records(path)
}

/// Outputs of every stage the scorer reads.
#[derive(Debug, Default)]
pub struct StageInputs {
    pub submissions: Vec<Submission>,
    pub repo_metadata: Vec<RepoMetadata>,
    pub static_results: Vec<StaticAnalysisResult>,
    pub code_reviews: Vec<CodeReviewResult>,
    pub video_results: Vec<VideoAnalysisResult>,
}

impl StageInputs {
    pub fn load(data_dir: &Path) -> StoreResult<Self> {
        let inputs = Self {
            submissions: load_records(&data_dir.join(SUBMISSIONS_FILE))?,
            repo_metadata: load_records(&data_dir.join(REPO_METADATA_FILE))?,
            static_results: load_records(&data_dir.join(STATIC_ANALYSIS_FILE))?,
            code_reviews: load_records(&data_dir.join(CODE_REVIEWS_FILE))?,
            video_results: load_records(&data_dir.join(VIDEO_ANALYSIS_FILE))?,
        };
        info!(
            "Loaded {} submissions ({} repos, {} static analyses, {} code reviews, {} video analyses) from {}",
            inputs.submissions.len(),
            inputs.repo_metadata.len(),
            inputs.static_results.len(),
            inputs.code_reviews.len(),
            inputs.video_results.len(),
            data_dir.display(),
        );
        Ok(inputs)
    }
}

pub fn default_scores_path(data_dir: &Path) -> PathBuf {
    data_dir.join(SCORES_FILE)
}
