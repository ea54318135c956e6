//! Configuration for the multi-stage (freight) builder

use serde::Deserialize;

use crate::engine::fuel;
use crate::error::BuildError;

/// Payload mass (kg) at and above which a second stage is fitted
pub const DEFAULT_ONE_STAGE_MAX_KG: f64 = 1000.0;

/// Payload mass (kg) that fills the second stage's tanks completely
pub const DEFAULT_TWO_STAGES_MAX_KG: f64 = 2000.0;

/// Engines fitted to the first stage
pub const DEFAULT_ENGINES_PER_FIRST_STAGE: u32 = 4;

/// How computed fuel levels above a full tank are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuelPolicy {
    /// Keep the raw proportional value, which exceeds 100 for payloads
    /// heavier than `two_stages_max_kg`
    #[default]
    Unclamped,
    /// Cap every fuel level to the 0..=100 range
    Clamped,
}

impl FuelPolicy {
    pub fn apply(&self, level: f64) -> f64 {
        match self {
            FuelPolicy::Unclamped => level,
            FuelPolicy::Clamped => level.clamp(fuel::EMPTY_TANK, fuel::FULL_TANK),
        }
    }
}

/// Thresholds and layout for [`crate::MultiStageBuilder`].
///
/// Requires `0 < one_stage_max_kg < two_stages_max_kg` and
/// `engines_per_first_stage >= 1`. Missing fields in a TOML document fall
/// back to the defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MultiStageConfig {
    /// Heaviest payload the first stage lifts alone. Payloads at or above
    /// this mass get a second stage, and the first stage is fully fuelled.
    pub one_stage_max_kg: f64,
    /// Payload mass at which the second stage is fully fuelled
    pub two_stages_max_kg: f64,
    /// Number of engines sharing the first stage's thrust
    pub engines_per_first_stage: u32,
    pub fuel_policy: FuelPolicy,
}

impl Default for MultiStageConfig {
    fn default() -> Self {
        Self {
            one_stage_max_kg: DEFAULT_ONE_STAGE_MAX_KG,
            two_stages_max_kg: DEFAULT_TWO_STAGES_MAX_KG,
            engines_per_first_stage: DEFAULT_ENGINES_PER_FIRST_STAGE,
            fuel_policy: FuelPolicy::default(),
        }
    }
}

impl MultiStageConfig {
    pub fn new(
        one_stage_max_kg: f64,
        two_stages_max_kg: f64,
        engines_per_first_stage: u32,
    ) -> Self {
        Self {
            one_stage_max_kg,
            two_stages_max_kg,
            engines_per_first_stage,
            fuel_policy: FuelPolicy::default(),
        }
    }

    pub fn with_fuel_policy(mut self, fuel_policy: FuelPolicy) -> Self {
        self.fuel_policy = fuel_policy;
        self
    }

    /// Parse a TOML document and validate the result
    pub fn from_toml_str(source: &str) -> Result<Self, BuildError> {
        let config: Self = toml::from_str(source)
            .map_err(|e| BuildError::Configuration(format!("failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), BuildError> {
        let one = self.one_stage_max_kg;
        let two = self.two_stages_max_kg;

        if !one.is_finite() || !two.is_finite() {
            return Err(BuildError::Configuration(format!(
                "stage thresholds must be finite, got {} and {}",
                one, two
            )));
        }
        if one <= 0.0 {
            return Err(BuildError::Configuration(format!(
                "one_stage_max_kg must be positive, got {}",
                one
            )));
        }
        if one >= two {
            return Err(BuildError::Configuration(format!(
                "one_stage_max_kg ({}) must be below two_stages_max_kg ({})",
                one, two
            )));
        }
        if self.engines_per_first_stage == 0 {
            return Err(BuildError::Configuration(
                "engines_per_first_stage must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
