pub mod config;
pub mod error;

pub use config::SimulationConfig;
pub use error::{DungeonError, Result};
