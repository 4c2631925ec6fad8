pub mod guidance;
pub mod io;
pub mod sim;

pub use guidance::{
    ConfigError, Guidance, Guidance2, Guidance3, GuidanceConfig, Phase, VectorPid,
};
pub use sim::{simulate, Outcome, SimConfig, TickRecord};
