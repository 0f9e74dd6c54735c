use crate::TeamNumber;
use serde::{Deserialize, Serialize};

// 参赛提交信息结构 (由 CSV 解析阶段产出)
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Submission {
    pub team_number: TeamNumber,
    pub team_name: String,
    pub project_name: String,
    #[serde(default)]
    pub sanitized_name: String,
    #[serde(default)]
    pub description: String,
}

impl Submission {
    pub fn new(team_number: TeamNumber, team_name: &str, project_name: &str) -> Self {
        Self {
            team_number,
            team_name: team_name.to_owned(),
            project_name: project_name.to_owned(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_owned();
        self
    }

    pub fn description_word_count(&self) -> usize {
        self.description.split_whitespace().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_optional_fields_default() {
        let json = r#"{"team_number": 7, "team_name": "Owls", "project_name": "Nightwatch"}"#;
        let sub: Submission = serde_json::from_str(json).unwrap();
        assert_eq!(sub.team_number, 7);
        assert!(sub.description.is_empty());
        assert_eq!(sub.description_word_count(), 0);
    }

    #[test]
    fn test_word_count_ignores_repeated_whitespace() {
        let sub = Submission::new(1, "a", "b").with_description("  an   agent\tfor\n triage ");
        assert_eq!(sub.description_word_count(), 4);
    }
}
