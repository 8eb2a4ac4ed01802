use crate::error::ScoreError;
use crate::scoring::{ScoringSettings, Strategy};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ScoreConfig {
    pub project: ProjectConfig,
    pub scoring: Option<ScoringConfig>,
    pub limits: Option<LimitsConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
    pub name: String,
    #[serde(default = "default_reference_dir")]
    pub reference_dir: String,
}

fn default_reference_dir() -> String {
    "references".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    pub strategy: Option<String>,
    pub target_words: Option<usize>,
    pub min_words: Option<usize>,
    pub length_weight: Option<f32>,
    pub quality_weight: Option<f32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    pub max_words: Option<usize>,
}

impl ScoreConfig {
    /// Resolve scoring settings, falling back to defaults for anything the
    /// config leaves unset.
    pub fn settings(&self) -> ScoringSettings {
        let defaults = ScoringSettings::default();
        let strategy = self
            .scoring
            .as_ref()
            .and_then(|scoring| scoring.strategy.as_deref())
            .map(|name| match name {
                "overlap" => Strategy::Overlap,
                _ => Strategy::Alignment,
            })
            .unwrap_or(defaults.strategy);

        match &self.scoring {
            Some(scoring) => ScoringSettings {
                strategy,
                target_words: scoring.target_words.unwrap_or(defaults.target_words),
                min_words: scoring.min_words.unwrap_or(defaults.min_words),
                length_weight: scoring.length_weight.unwrap_or(defaults.length_weight),
                quality_weight: scoring.quality_weight.unwrap_or(defaults.quality_weight),
                max_words: self.max_words(),
            },
            None => ScoringSettings {
                strategy,
                max_words: self.max_words(),
                ..defaults
            },
        }
    }

    pub fn max_words(&self) -> usize {
        self.limits
            .as_ref()
            .and_then(|limits| limits.max_words)
            .unwrap_or_else(|| ScoringSettings::default().max_words)
    }

    pub fn validate(&self) -> Result<(), ScoreError> {
        if let Some(strategy) = self
            .scoring
            .as_ref()
            .and_then(|scoring| scoring.strategy.as_deref())
        {
            if !matches!(strategy, "alignment" | "overlap") {
                return Err(ScoreError::ConfigParse(format!(
                    "unsupported scoring.strategy: {strategy}"
                )));
            }
        }

        let settings = self.settings();
        for (key, weight) in [
            ("scoring.length_weight", settings.length_weight),
            ("scoring.quality_weight", settings.quality_weight),
        ] {
            if !(0.0..=1.0).contains(&weight) {
                return Err(ScoreError::ConfigParse(format!(
                    "{key} must be between 0.0 and 1.0 (found {weight})"
                )));
            }
        }
        let weight_sum = settings.length_weight + settings.quality_weight;
        if (weight_sum - 1.0).abs() > 0.001 {
            return Err(ScoreError::ConfigParse(format!(
                "scoring weights must sum to 1.0 (found {weight_sum:.3})"
            )));
        }

        if settings.target_words == 0 {
            return Err(ScoreError::ConfigParse(
                "scoring.target_words must be greater than 0".to_string(),
            ));
        }
        if settings.max_words == 0 {
            return Err(ScoreError::ConfigParse(
                "limits.max_words must be greater than 0".to_string(),
            ));
        }
        if self.project.reference_dir.trim().is_empty() {
            return Err(ScoreError::ConfigParse(
                "project.reference_dir must be non-empty".to_string(),
            ));
        }

        Ok(())
    }
}
