use crate::error::ConfigError;
use anyhow::Context;
use ::config::builder::DefaultState;
use ::config::{Config, ConfigBuilder, Environment, File, FileFormat};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// 单个评分维度配置
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CriterionConfig {
    pub key: String,
    pub weight: f64,
    #[serde(default)]
    pub description: String,
}

/// 评分维度权重配置, 顺序即配置文件中的顺序
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct ScoringConfig {
    #[serde(default)]
    pub criteria: Vec<CriterionConfig>,
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for (index, criterion) in self.criteria.iter().enumerate() {
            if criterion.key.trim().is_empty() {
                return Err(ConfigError::EmptyCriterionKey { index });
            }
            if !criterion.weight.is_finite() || criterion.weight < 0.0 {
                return Err(ConfigError::InvalidWeight {
                    key: criterion.key.clone(),
                    weight: criterion.weight,
                });
            }
            if !seen.insert(criterion.key.as_str()) {
                return Err(ConfigError::DuplicateCriterion(criterion.key.clone()));
            }
        }
        Ok(())
    }

    /// Ceiling of any weighted total under this configuration.
    pub fn max_total(&self) -> f64 {
        10.0 * self.criteria.iter().map(|c| c.weight).sum::<f64>()
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./output/data")
}

/// 评价上下文结构体
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct EvaluationContext {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default)]
    pub scoring: Option<ScoringConfig>,
}

impl Default for EvaluationContext {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            scoring: None,
        }
    }
}

impl EvaluationContext {
    pub fn load_config(config_path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let config_path = config_path.as_ref();
        let builder = Config::builder()
            .add_source(
                File::from(config_path)
                    .format(FileFormat::Toml)
                    .required(true),
            )
            .add_source(
                Environment::with_prefix("EVALUATE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );
        Self::build(builder)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))
    }

    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        Self::build(Config::builder().add_source(File::from_str(text, FileFormat::Toml)))
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> anyhow::Result<Self> {
        let ctx: Self = builder
            .build()
            .with_context(|| anyhow::anyhow!("Failed to load config"))?
            .try_deserialize()
            .with_context(|| anyhow::anyhow!("Failed to deserialize config"))?;
        if let Some(scoring) = &ctx.scoring {
            scoring.validate()?;
        }
        Ok(ctx)
    }

    /// Configured criteria in file order; empty when scoring is not configured.
    pub fn criteria(&self) -> &[CriterionConfig] {
        self.scoring
            .as_ref()
            .map(|s| s.criteria.as_slice())
            .unwrap_or_default()
    }

    pub fn scoring_enabled(&self) -> bool {
        !self.criteria().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        data_dir = "/tmp/review/data"

        [[scoring.criteria]]
        key = "impact"
        weight = 0.25
        description = "Real-world usefulness"

        [[scoring.criteria]]
        key = "depth"
        weight = 0.20
    "#;

    #[test]
    fn test_criteria_keep_file_order() {
        let ctx = EvaluationContext::from_toml_str(SAMPLE).unwrap();
        let keys: Vec<&str> = ctx.criteria().iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["impact", "depth"]);
        assert_eq!(ctx.data_dir, PathBuf::from("/tmp/review/data"));
        assert!(ctx.criteria()[1].description.is_empty());
        assert!(ctx.scoring_enabled());
    }

    #[test]
    fn test_missing_scoring_section_disables_scoring() {
        let ctx = EvaluationContext::from_toml_str("").unwrap();
        assert!(ctx.criteria().is_empty());
        assert!(!ctx.scoring_enabled());
        assert_eq!(ctx.data_dir, default_data_dir());
    }

    #[test]
    fn test_duplicate_criterion_rejected() {
        let text = r#"
            [[scoring.criteria]]
            key = "demo"
            weight = 0.3
            [[scoring.criteria]]
            key = "demo"
            weight = 0.1
        "#;
        let err = EvaluationContext::from_toml_str(text).unwrap_err();
        assert!(err.to_string().contains("demo"));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let scoring = ScoringConfig {
            criteria: vec![CriterionConfig {
                key: "impact".to_owned(),
                weight: -1.0,
                description: String::new(),
            }],
        };
        assert!(matches!(
            scoring.validate(),
            Err(ConfigError::InvalidWeight { .. })
        ));
    }

    #[test]
    fn test_max_total_is_ten_times_weight_sum() {
        let ctx = EvaluationContext::from_toml_str(SAMPLE).unwrap();
        let max = ctx.scoring.unwrap().max_total();
        assert!((max - 4.5).abs() < 1e-9);
    }
}
