pub mod simulation;
pub mod configuration;
pub mod visualization;

pub use simulation::states::{Body, BodyId, System, NVec2};
pub use simulation::trail::{SamplingTier, TickCounter, Trail};
pub use simulation::forces::{NetForce, NewtonianGravity};
pub use simulation::integrator::symplectic_euler;
pub use simulation::params::Parameters;
pub use simulation::scenario::Scenario;

pub use configuration::config::{EngineConfig, ParametersConfig, ViewConfig, BodyConfig, ScenarioConfig};

pub use visualization::view::{ViewCommand, ViewSettings, ViewState};
pub use visualization::solsim_vis2d::run_2d;
