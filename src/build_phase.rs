//! Construction progress shared by every rocket builder.
//! Each builder instance walks this sequence exactly once:
//! Empty -> Created -> PayloadAttached -> StagesBuilt -> ResourcesFinalized -> Retrieved.

use crate::error::BuildError;

/// Where a builder currently is in the construction sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildPhase {
    /// No rocket shell allocated yet
    #[default]
    Empty,
    /// Empty rocket shell exists
    Created,
    /// Payload attached, no stages yet
    PayloadAttached,
    /// Stages computed from the payload
    StagesBuilt,
    /// Engine fuel levels set
    ResourcesFinalized,
    /// Rocket handed to the caller; the builder is spent
    Retrieved,
}

impl BuildPhase {
    /// Get the phase name for display
    pub fn name(&self) -> &'static str {
        match self {
            BuildPhase::Empty => "Empty",
            BuildPhase::Created => "Created",
            BuildPhase::PayloadAttached => "PayloadAttached",
            BuildPhase::StagesBuilt => "StagesBuilt",
            BuildPhase::ResourcesFinalized => "ResourcesFinalized",
            BuildPhase::Retrieved => "Retrieved",
        }
    }

    /// Check if no further step can be taken from this phase
    pub fn is_terminal(&self) -> bool {
        matches!(self, BuildPhase::Retrieved)
    }

    /// Move to the phase reached by `step`, or reject the step.
    /// The phase is left untouched on rejection.
    pub fn advance(&mut self, step: BuildStep) -> Result<(), BuildError> {
        self.check(step)?;
        *self = step.target();
        Ok(())
    }

    /// Reject `step` unless it is the next one in the sequence
    pub fn check(&self, step: BuildStep) -> Result<(), BuildError> {
        if *self == step.source() {
            Ok(())
        } else {
            Err(self.reject(step))
        }
    }

    /// The error reported when `step` is attempted from this phase
    pub fn reject(&self, step: BuildStep) -> BuildError {
        BuildError::Protocol { step, phase: *self }
    }
}

/// One of the five construction steps, in call order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStep {
    CreateProduct,
    AddPayload,
    AddStages,
    FinalizeResources,
    RetrieveProduct,
}

impl BuildStep {
    /// Human-readable verb phrase used in error messages
    pub fn name(&self) -> &'static str {
        match self {
            BuildStep::CreateProduct => "create product",
            BuildStep::AddPayload => "add payload",
            BuildStep::AddStages => "add stages",
            BuildStep::FinalizeResources => "finalize resources",
            BuildStep::RetrieveProduct => "retrieve product",
        }
    }

    /// The only phase this step may be called from
    pub fn source(&self) -> BuildPhase {
        match self {
            BuildStep::CreateProduct => BuildPhase::Empty,
            BuildStep::AddPayload => BuildPhase::Created,
            BuildStep::AddStages => BuildPhase::PayloadAttached,
            BuildStep::FinalizeResources => BuildPhase::StagesBuilt,
            BuildStep::RetrieveProduct => BuildPhase::ResourcesFinalized,
        }
    }

    /// The phase a successful call leaves the builder in
    pub fn target(&self) -> BuildPhase {
        match self {
            BuildStep::CreateProduct => BuildPhase::Created,
            BuildStep::AddPayload => BuildPhase::PayloadAttached,
            BuildStep::AddStages => BuildPhase::StagesBuilt,
            BuildStep::FinalizeResources => BuildPhase::ResourcesFinalized,
            BuildStep::RetrieveProduct => BuildPhase::Retrieved,
        }
    }

    /// All steps in the order a director calls them
    pub fn all_steps() -> [BuildStep; 5] {
        [
            BuildStep::CreateProduct,
            BuildStep::AddPayload,
            BuildStep::AddStages,
            BuildStep::FinalizeResources,
            BuildStep::RetrieveProduct,
        ]
    }
}
