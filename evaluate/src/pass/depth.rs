use crate::evidence::Evidence;
use crate::pass::{log_scale, HeuristicPass};
use model::HackathonPeriodFlag;

#[derive(Debug, Clone, Default)]
pub struct DepthData {
    pub commits: u32,
    pub total_loc: u64,
    pub file_count: u32,
    pub code_languages: usize,
    pub has_tests: bool,
    pub has_config_doc: bool,
    pub has_readme: bool,
    pub has_docker: bool,
    pub has_ci: bool,
    pub is_single_commit_dump: bool,
    pub is_boilerplate_heavy: bool,
    pub period_flag: HackathonPeriodFlag,
}

impl From<&Evidence<'_>> for DepthData {
    fn from(evidence: &Evidence<'_>) -> Self {
        let files = &evidence.repo.files;
        let history = &evidence.repo.git_history;
        let analysis = &evidence.static_analysis;
        Self {
            commits: history.effective_commits(),
            total_loc: files.total_loc,
            file_count: files.file_count,
            code_languages: files.code_language_count(),
            has_tests: files.has_tests,
            has_config_doc: analysis.structure.has_claude_md,
            has_readme: files.has_readme,
            has_docker: analysis.structure.has_docker,
            has_ci: analysis.structure.has_ci,
            is_single_commit_dump: history.is_single_commit_dump,
            is_boilerplate_heavy: analysis.is_boilerplate_heavy,
            period_flag: history.hackathon_period_flag,
        }
    }
}

impl DepthData {
    fn volume(&self) -> f64 {
        log_scale(self.commits as f64, 50.0, 1.0) * 2.5
            + log_scale(self.total_loc as f64, 10_000.0, 1.0) * 2.0
            + log_scale(self.file_count as f64, 50.0, 1.0)
    }

    fn engineering_bonus(&self) -> f64 {
        let flags = [
            (self.has_tests, 1.0),
            (self.has_config_doc, 0.5),
            (self.has_readme, 0.5),
            (self.code_languages >= 3, 0.5),
            (self.has_docker, 0.5),
            (self.has_ci, 0.5),
        ];
        flags
            .iter()
            .filter(|(present, _)| *present)
            .map(|(_, bonus)| bonus)
            .sum()
    }

    // 惩罚项: 一次性提交 / 模板代码 / 赛前已有项目
    fn penalty(&self) -> f64 {
        let mut penalty = 0.0;
        if self.is_single_commit_dump {
            penalty += 2.0;
        }
        if self.is_boilerplate_heavy {
            penalty += 2.0;
        }
        penalty += match self.period_flag {
            HackathonPeriodFlag::PreExistingProject => 3.0,
            HackathonPeriodFlag::SignificantPriorWork => 1.5,
            HackathonPeriodFlag::Clean
            | HackathonPeriodFlag::MinorPriorWork
            | HackathonPeriodFlag::Unknown => 0.0,
        };
        penalty
    }
}

pub struct Depth;

impl HeuristicPass for Depth {
    type Data = DepthData;

    fn required_data(&self, evidence: &Evidence<'_>) -> DepthData {
        DepthData::from(evidence)
    }

    fn apply(&self, data: &DepthData) -> f64 {
        data.volume() + data.engineering_bonus() - data.penalty()
    }

    fn name(&self) -> &'static str {
        "depth"
    }
}
