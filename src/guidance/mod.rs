pub mod config;
pub mod pid;
pub mod system;
pub mod thrust;

pub use config::{ConfigError, GuidanceConfig};
pub use pid::VectorPid;
pub use system::{Guidance, Guidance2, Guidance3, Phase};
pub use thrust::saturate;
