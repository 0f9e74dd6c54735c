//! Scoring stage of the submission review pipeline.
//!
//! Combines LLM review scores and heuristic estimates into one weighted,
//! ranked score per submission. Every criterion score records its source.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod evidence;
pub mod logging;
pub mod manager;
pub mod merge;
pub mod pass;
pub mod store;

pub use crate::config::{CriterionConfig, EvaluationContext, ScoringConfig};
pub use error::{ConfigError, StoreError};
pub use evidence::{Evidence, EvidenceIndex};
pub use manager::{run_scoring, ScoringManager, ScoringOutcome};
pub use merge::resolve_criterion;
pub use pass::{log_scale, CriterionKind, HeuristicPass};
pub use store::{load_records, load_scores, write_scores, StageInputs};
