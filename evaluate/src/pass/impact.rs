use crate::evidence::Evidence;
use crate::pass::{log_scale, HeuristicPass};

#[derive(Debug, Clone, Default)]
pub struct ImpactData {
    pub description_words: usize,
    pub total_loc: u64,
    pub framework_count: usize,
    pub has_readme: bool,
    pub has_docker: bool,
    pub has_ci: bool,
    pub has_env_example: bool,
}

impl From<&Evidence<'_>> for ImpactData {
    fn from(evidence: &Evidence<'_>) -> Self {
        let structure = &evidence.static_analysis.structure;
        Self {
            description_words: evidence.submission.description_word_count(),
            total_loc: evidence.repo.files.total_loc,
            framework_count: structure.frameworks_detected.len(),
            has_readme: evidence.repo.files.has_readme,
            has_docker: structure.has_docker,
            has_ci: structure.has_ci,
            has_env_example: structure.has_env_example,
        }
    }
}

impl ImpactData {
    // 部署信号: Docker / CI / env 示例, 各 0.5
    fn deployment_bonus(&self) -> f64 {
        [self.has_docker, self.has_ci, self.has_env_example]
            .iter()
            .filter(|present| **present)
            .count() as f64
            * 0.5
    }
}

pub struct Impact;

impl HeuristicPass for Impact {
    type Data = ImpactData;

    fn required_data(&self, evidence: &Evidence<'_>) -> ImpactData {
        ImpactData::from(evidence)
    }

    fn apply(&self, data: &ImpactData) -> f64 {
        let description = (data.description_words as f64 / 80.0).min(2.0);
        let size = log_scale(data.total_loc as f64, 5000.0, 1.2) * 2.5;
        let frameworks = (data.framework_count as f64 * 0.4).min(1.0);
        let readme = if data.has_readme { 1.0 } else { 0.0 };
        description + size + frameworks + readme + data.deployment_bonus()
    }

    fn name(&self) -> &'static str {
        "impact"
    }
}
