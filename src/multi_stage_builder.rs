use crate::build_phase::{BuildPhase, BuildStep};
use crate::builder::RocketBuilder;
use crate::config::MultiStageConfig;
use crate::engine::{fuel, Engine};
use crate::error::BuildError;
use crate::payload::{Payload, Satellite};
use crate::rocket::FreightRocket;
use crate::stage::Stage;

/// Rocket shell while a freight rocket is being assembled
#[derive(Debug, Default)]
struct FreightDraft {
    payload: Option<Satellite>,
    first_stage: Option<Stage>,
    second_stage: Option<Stage>,
}

/// Builds liquid-fuelled freight rockets with one or two stages.
///
/// Given payload mass `w` and the configured thresholds:
/// - the first stage carries `engines_per_first_stage` engines of thrust `w`
///   each, a stage total of `w * engines_per_first_stage`
/// - a single-engine second stage with thrust `w` is added when
///   `w >= one_stage_max_kg`
/// - first stage fuel is `min(w, one_stage_max_kg) / one_stage_max_kg * 100`
/// - second stage fuel is `(w - one_stage_max_kg) / (two_stages_max_kg - one_stage_max_kg) * 100`,
///   passed through the configured [`crate::FuelPolicy`]
#[derive(Debug)]
pub struct MultiStageBuilder {
    config: MultiStageConfig,
    phase: BuildPhase,
    draft: Option<FreightDraft>,
}

impl MultiStageBuilder {
    /// Create a builder, rejecting invalid thresholds up front
    pub fn new(config: MultiStageConfig) -> Result<Self, BuildError> {
        config.validate()?;
        Ok(Self {
            config,
            phase: BuildPhase::Empty,
            draft: None,
        })
    }

    pub fn config(&self) -> &MultiStageConfig {
        &self.config
    }

    /// Whether a payload of this mass gets a second stage
    pub fn needs_second_stage(&self, mass_kg: f64) -> bool {
        mass_kg >= self.config.one_stage_max_kg
    }

    /// Fuel level for the first stage
    pub fn first_stage_fuel(&self, mass_kg: f64) -> f64 {
        let one = self.config.one_stage_max_kg;
        let level = mass_kg.min(one) / one * fuel::FULL_TANK;
        self.config.fuel_policy.apply(level)
    }

    /// Fuel level for the second stage
    pub fn second_stage_fuel(&self, mass_kg: f64) -> f64 {
        let one = self.config.one_stage_max_kg;
        let two = self.config.two_stages_max_kg;
        let level = (mass_kg - one) / (two - one) * fuel::FULL_TANK;
        self.config.fuel_policy.apply(level)
    }

    fn draft_mut(&mut self, step: BuildStep) -> Result<&mut FreightDraft, BuildError> {
        let phase = self.phase;
        self.draft.as_mut().ok_or_else(|| phase.reject(step))
    }

    fn attached_mass(&self, step: BuildStep) -> Result<f64, BuildError> {
        self.draft
            .as_ref()
            .and_then(|d| d.payload.as_ref())
            .map(|p| p.mass_kg)
            .ok_or_else(|| self.phase.reject(step))
    }
}

impl Default for MultiStageBuilder {
    fn default() -> Self {
        Self {
            config: MultiStageConfig::default(),
            phase: BuildPhase::Empty,
            draft: None,
        }
    }
}

impl RocketBuilder for MultiStageBuilder {
    type Payload = Satellite;
    type Rocket = FreightRocket;

    fn name(&self) -> &'static str {
        "multi_stage"
    }

    fn phase(&self) -> BuildPhase {
        self.phase
    }

    fn create_product(&mut self) -> Result<(), BuildError> {
        self.phase.advance(BuildStep::CreateProduct)?;
        self.draft = Some(FreightDraft::default());
        tracing::debug!(builder = self.name(), phase = self.phase.name(), "rocket shell created");
        Ok(())
    }

    fn add_payload(&mut self, payload: Satellite) -> Result<(), BuildError> {
        let step = BuildStep::AddPayload;
        self.phase.check(step)?;
        payload.validate()?;

        let (id, mass_kg) = (payload.id, payload.mass_kg);
        self.draft_mut(step)?.payload = Some(payload);
        self.phase.advance(step)?;
        tracing::debug!(
            builder = self.name(),
            phase = self.phase.name(),
            satellite = id,
            mass_kg,
            "payload attached"
        );
        Ok(())
    }

    fn add_stages(&mut self) -> Result<(), BuildError> {
        let step = BuildStep::AddStages;
        self.phase.check(step)?;

        let mass_kg = self.attached_mass(step)?;
        // Every first-stage engine gets thrust `w`, for a stage total of `w * n`
        let first_stage =
            Stage::uniform(self.config.engines_per_first_stage, Engine::liquid(mass_kg));
        let first_stage_thrust = first_stage.total_thrust();
        let second_stage = self
            .needs_second_stage(mass_kg)
            .then(|| Stage::single(Engine::liquid(mass_kg)));

        let stage_count = 1 + usize::from(second_stage.is_some());
        let draft = self.draft_mut(step)?;
        draft.first_stage = Some(first_stage);
        draft.second_stage = second_stage;
        self.phase.advance(step)?;

        tracing::debug!(
            builder = self.name(),
            phase = self.phase.name(),
            mass_kg,
            stage_count,
            first_stage_thrust,
            "stages fitted"
        );
        Ok(())
    }

    fn finalize_resources(&mut self) -> Result<(), BuildError> {
        let step = BuildStep::FinalizeResources;
        self.phase.check(step)?;

        let mass_kg = self.attached_mass(step)?;
        let first_level = self.first_stage_fuel(mass_kg);
        let second_level = self.second_stage_fuel(mass_kg);

        let phase = self.phase;
        let draft = self.draft_mut(step)?;
        let first_stage = draft.first_stage.as_mut().ok_or_else(|| phase.reject(step))?;
        first_stage.refuel(first_level);

        let second_fuelled = match draft.second_stage.as_mut() {
            Some(stage) => {
                stage.refuel(second_level);
                Some(second_level)
            }
            None => None,
        };
        self.phase.advance(step)?;

        if let Some(level) = second_fuelled {
            if level > fuel::FULL_TANK {
                tracing::warn!(
                    builder = self.name(),
                    mass_kg,
                    level,
                    "second stage fuel level exceeds a full tank"
                );
            }
        }
        tracing::debug!(
            builder = self.name(),
            phase = self.phase.name(),
            first_stage_fuel = first_level,
            second_stage_fuel = ?second_fuelled,
            "fuel loaded"
        );
        Ok(())
    }

    fn retrieve_product(&mut self) -> Result<FreightRocket, BuildError> {
        let step = BuildStep::RetrieveProduct;
        self.phase.check(step)?;

        let draft = self.draft.take().ok_or_else(|| self.phase.reject(step))?;
        let (Some(payload), Some(first_stage)) = (draft.payload, draft.first_stage) else {
            return Err(self.phase.reject(step));
        };

        self.phase.advance(step)?;
        tracing::debug!(
            builder = self.name(),
            phase = self.phase.name(),
            satellite = payload.id,
            "freight rocket retrieved"
        );
        Ok(FreightRocket {
            payload,
            first_stage,
            second_stage: draft.second_stage,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FuelPolicy;
    use crate::engine::EngineKind;
    use crate::rocket::Rocket;

    const EPS: f64 = 1e-9;

    fn build(builder: &mut MultiStageBuilder, mass_kg: f64) -> Result<FreightRocket, BuildError> {
        builder.create_product()?;
        builder.add_payload(Satellite::new(1, mass_kg))?;
        builder.add_stages()?;
        builder.finalize_resources()?;
        builder.retrieve_product()
    }

    #[test]
    fn test_light_payload_single_stage() {
        let mut builder = MultiStageBuilder::default();
        let rocket = build(&mut builder, 500.0).unwrap();

        assert_eq!(rocket.stage_count(), 1);
        assert!(rocket.second_stage().is_none());
        assert_eq!(rocket.first_stage.engine_count(), 4);
        for engine in rocket.first_stage.engines() {
            assert_eq!(engine.kind, EngineKind::Liquid);
            assert!((engine.thrust - 500.0).abs() < EPS);
            assert!((engine.fuel_level - 50.0).abs() < EPS);
        }
        assert!((rocket.first_stage.total_thrust() - 2000.0).abs() < EPS);
    }

    #[test]
    fn test_threshold_payload_gets_empty_second_stage() {
        let mut builder = MultiStageBuilder::default();
        let rocket = build(&mut builder, 1000.0).unwrap();

        assert_eq!(rocket.stage_count(), 2);
        assert!((rocket.first_stage.fuel_level() - 100.0).abs() < EPS);
        let second = rocket.second_stage().unwrap();
        assert_eq!(second.engine_count(), 1);
        assert!((second.engines()[0].thrust - 1000.0).abs() < EPS);
        assert!(second.fuel_level().abs() < EPS);
    }

    #[test]
    fn test_mid_payload_half_second_stage() {
        let mut builder = MultiStageBuilder::default();
        let rocket = build(&mut builder, 1500.0).unwrap();

        assert_eq!(rocket.stage_count(), 2);
        assert!((rocket.first_stage.fuel_level() - 100.0).abs() < EPS);
        assert!((rocket.second_stage().unwrap().fuel_level() - 50.0).abs() < EPS);
    }

    #[test]
    fn test_overweight_payload_unclamped() {
        let mut builder = MultiStageBuilder::default();
        let rocket = build(&mut builder, 2500.0).unwrap();

        assert!((rocket.first_stage.fuel_level() - 100.0).abs() < EPS);
        assert!((rocket.second_stage().unwrap().fuel_level() - 150.0).abs() < EPS);
    }

    #[test]
    fn test_overweight_payload_clamped() {
        let config = MultiStageConfig::default().with_fuel_policy(FuelPolicy::Clamped);
        let mut builder = MultiStageBuilder::new(config).unwrap();
        let rocket = build(&mut builder, 2500.0).unwrap();

        assert!((rocket.second_stage().unwrap().fuel_level() - 100.0).abs() < EPS);
    }

    #[test]
    fn test_custom_engine_count() {
        let mut builder = MultiStageBuilder::new(MultiStageConfig::new(100.0, 300.0, 3)).unwrap();
        let rocket = build(&mut builder, 200.0).unwrap();

        assert_eq!(rocket.first_stage.engine_count(), 3);
        assert_eq!(rocket.first_stage.total_thrust(), 600.0);
        assert!((rocket.second_stage().unwrap().fuel_level() - 50.0).abs() < EPS);
    }

    #[test]
    fn test_first_stage_engine_thrust_matches_mass_exactly() {
        let cases = [(3, 0.1), (3, 700.7), (5, 123.456), (7, 1e-3), (4, 8.99e307)];
        for (engines, mass_kg) in cases {
            let config = MultiStageConfig::new(1000.0, 2000.0, engines);
            let mut builder = MultiStageBuilder::new(config).unwrap();
            let rocket = build(&mut builder, mass_kg).unwrap();

            assert_eq!(rocket.first_stage.engine_count(), engines as usize);
            for engine in rocket.first_stage.engines() {
                assert_eq!(engine.thrust.to_bits(), mass_kg.to_bits(), "n={engines} w={mass_kg}");
            }
        }
    }

    #[test]
    fn test_builder_keeps_its_config() {
        let config = MultiStageConfig::new(50.0, 75.0, 2).with_fuel_policy(FuelPolicy::Clamped);
        let builder = MultiStageBuilder::new(config.clone()).unwrap();
        assert_eq!(builder.config(), &config);
        assert_eq!(MultiStageBuilder::default().config(), &MultiStageConfig::default());
    }

    #[test]
    fn test_add_stages_right_after_create_rejected() {
        let mut builder = MultiStageBuilder::default();
        builder.create_product().unwrap();
        let err = builder.add_stages().unwrap_err();
        assert_eq!(
            err,
            BuildError::Protocol {
                step: BuildStep::AddStages,
                phase: BuildPhase::Created,
            }
        );
        assert_eq!(builder.phase(), BuildPhase::Created);
    }

    #[test]
    fn test_add_stages_on_empty_builder_rejected() {
        let mut builder = MultiStageBuilder::default();
        let err = builder.add_stages().unwrap_err();
        assert_eq!(
            err,
            BuildError::Protocol {
                step: BuildStep::AddStages,
                phase: BuildPhase::Empty,
            }
        );
        assert_eq!(builder.phase(), BuildPhase::Empty);
    }

    #[test]
    fn test_invalid_config_rejected_at_construction() {
        let err = MultiStageBuilder::new(MultiStageConfig::new(2000.0, 1000.0, 4)).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_zero_mass_rejected() {
        let mut builder = MultiStageBuilder::default();
        let err = build(&mut builder, 0.0).unwrap_err();
        assert_eq!(err, BuildError::InvalidPayload { mass_kg: 0.0 });
        assert_eq!(builder.phase(), BuildPhase::Created);
    }

    #[test]
    fn test_finalize_before_stages_rejected() {
        let mut builder = MultiStageBuilder::default();
        builder.create_product().unwrap();
        builder.add_payload(Satellite::new(3, 800.0)).unwrap();
        let err = builder.finalize_resources().unwrap_err();
        assert_eq!(
            err,
            BuildError::Protocol {
                step: BuildStep::FinalizeResources,
                phase: BuildPhase::PayloadAttached,
            }
        );
    }

    #[test]
    fn test_stages_twice_rejected() {
        let mut builder = MultiStageBuilder::default();
        builder.create_product().unwrap();
        builder.add_payload(Satellite::new(3, 800.0)).unwrap();
        builder.add_stages().unwrap();
        assert!(builder.add_stages().unwrap_err().is_protocol());
        assert_eq!(builder.phase(), BuildPhase::StagesBuilt);
    }

    #[test]
    fn test_retrieve_twice_rejected() {
        let mut builder = MultiStageBuilder::default();
        build(&mut builder, 1200.0).unwrap();
        let err = builder.retrieve_product().unwrap_err();
        assert_eq!(
            err,
            BuildError::Protocol {
                step: BuildStep::RetrieveProduct,
                phase: BuildPhase::Retrieved,
            }
        );
    }

    #[test]
    fn test_fuel_formulas() {
        let builder = MultiStageBuilder::default();
        assert!(!builder.needs_second_stage(999.999));
        assert!(builder.needs_second_stage(1000.0));
        assert!((builder.first_stage_fuel(250.0) - 25.0).abs() < EPS);
        assert!((builder.first_stage_fuel(5000.0) - 100.0).abs() < EPS);
        assert!((builder.second_stage_fuel(1750.0) - 75.0).abs() < EPS);
    }

    #[test]
    fn test_payload_identity_preserved() {
        let mut builder = MultiStageBuilder::default();
        builder.create_product().unwrap();
        builder.add_payload(Satellite::new(42, 1100.0)).unwrap();
        builder.add_stages().unwrap();
        builder.finalize_resources().unwrap();
        let rocket = builder.retrieve_product().unwrap();
        assert_eq!(rocket.payload, Satellite::new(42, 1100.0));
    }
}
