use crate::build_phase::{BuildPhase, BuildStep};
use crate::builder::RocketBuilder;
use crate::engine::Engine;
use crate::error::BuildError;
use crate::payload::{Payload, Probe};
use crate::rocket::SoundingRocket;
use crate::stage::Stage;

/// Rocket shell while a sounding rocket is being assembled
#[derive(Debug, Default)]
struct SoundingDraft {
    payload: Option<Probe>,
    stage: Option<Stage>,
}

/// Builds single-stage sounding rockets.
///
/// One solid motor whose thrust equals the probe's mass. There is no fuel to
/// load, so resource finalization only advances the phase.
#[derive(Debug, Default)]
pub struct SimpleBuilder {
    phase: BuildPhase,
    draft: Option<SoundingDraft>,
}

impl SimpleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn draft_mut(&mut self, step: BuildStep) -> Result<&mut SoundingDraft, BuildError> {
        let phase = self.phase;
        self.draft.as_mut().ok_or_else(|| phase.reject(step))
    }
}

impl RocketBuilder for SimpleBuilder {
    type Payload = Probe;
    type Rocket = SoundingRocket;

    fn name(&self) -> &'static str {
        "simple"
    }

    fn phase(&self) -> BuildPhase {
        self.phase
    }

    fn create_product(&mut self) -> Result<(), BuildError> {
        self.phase.advance(BuildStep::CreateProduct)?;
        self.draft = Some(SoundingDraft::default());
        tracing::debug!(builder = self.name(), phase = self.phase.name(), "rocket shell created");
        Ok(())
    }

    fn add_payload(&mut self, payload: Probe) -> Result<(), BuildError> {
        let step = BuildStep::AddPayload;
        self.phase.check(step)?;
        payload.validate()?;

        let mass_kg = payload.mass_kg;
        self.draft_mut(step)?.payload = Some(payload);
        self.phase.advance(step)?;
        tracing::debug!(
            builder = self.name(),
            phase = self.phase.name(),
            mass_kg,
            "payload attached"
        );
        Ok(())
    }

    fn add_stages(&mut self) -> Result<(), BuildError> {
        let step = BuildStep::AddStages;
        self.phase.check(step)?;

        let phase = self.phase;
        let draft = self.draft_mut(step)?;
        let mass_kg = draft
            .payload
            .as_ref()
            .map(|p| p.mass_kg)
            .ok_or_else(|| phase.reject(step))?;

        // Thrust maps 1:1 onto payload mass
        draft.stage = Some(Stage::single(Engine::solid(mass_kg)));
        self.phase.advance(step)?;
        tracing::debug!(
            builder = self.name(),
            phase = self.phase.name(),
            thrust = mass_kg,
            "solid stage fitted"
        );
        Ok(())
    }

    fn finalize_resources(&mut self) -> Result<(), BuildError> {
        self.phase.advance(BuildStep::FinalizeResources)?;
        tracing::debug!(builder = self.name(), phase = self.phase.name(), "no fuel to load");
        Ok(())
    }

    fn retrieve_product(&mut self) -> Result<SoundingRocket, BuildError> {
        let step = BuildStep::RetrieveProduct;
        self.phase.check(step)?;

        let draft = self.draft.take().ok_or_else(|| self.phase.reject(step))?;
        let (Some(payload), Some(stage)) = (draft.payload, draft.stage) else {
            return Err(self.phase.reject(step));
        };

        self.phase.advance(step)?;
        tracing::debug!(
            builder = self.name(),
            phase = self.phase.name(),
            "sounding rocket retrieved"
        );
        Ok(SoundingRocket { payload, stage })
    }
}
