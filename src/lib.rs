pub mod build_phase;
pub mod builder;
pub mod config;
pub mod director;
pub mod engine;
pub mod error;
pub mod multi_stage_builder;
pub mod payload;
pub mod rocket;
pub mod simple_builder;
pub mod stage;

pub use builder::RocketBuilder;
pub use config::{FuelPolicy, MultiStageConfig};
pub use director::Director;
pub use error::BuildError;
pub use multi_stage_builder::MultiStageBuilder;
pub use simple_builder::SimpleBuilder;
