use crate::build_phase::BuildPhase;
use crate::error::BuildError;
use crate::payload::Payload;
use crate::rocket::Rocket;

/// The staged construction contract every rocket builder implements.
///
/// Steps must be called exactly once each, in declaration order:
/// `create_product`, `add_payload`, `add_stages`, `finalize_resources`,
/// `retrieve_product`. Any other call fails with [`BuildError::Protocol`]
/// and leaves the builder where it was. After `retrieve_product` the builder
/// is spent; build the next rocket with a fresh instance.
pub trait RocketBuilder {
    type Payload: Payload;
    type Rocket: Rocket<Payload = Self::Payload>;

    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Current position in the construction sequence
    fn phase(&self) -> BuildPhase;

    /// Allocate an empty rocket shell
    fn create_product(&mut self) -> Result<(), BuildError>;

    /// Attach the payload. Fails with [`BuildError::InvalidPayload`] for a
    /// non-positive or non-finite mass, in which case another payload may
    /// be offered.
    fn add_payload(&mut self, payload: Self::Payload) -> Result<(), BuildError>;

    /// Derive and attach the stage stack from the attached payload
    fn add_stages(&mut self) -> Result<(), BuildError>;

    /// Set per-engine fuel levels. A no-op for families without fuel.
    fn finalize_resources(&mut self) -> Result<(), BuildError>;

    /// Hand over the finished rocket
    fn retrieve_product(&mut self) -> Result<Self::Rocket, BuildError>;
}
