pub mod runner;

pub use runner::{simulate, Outcome, SimConfig, TickRecord};
