pub mod csv;

pub use csv::{write_trajectory, write_trajectory_file};
