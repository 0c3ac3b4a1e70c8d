//! Simulation Configuration Module
//!
//! Provides run configuration loaded from TOML files, replacing the fixed
//! constants of the generator with operator-tunable values.
//!
//! ## Loading Order
//!
//! 1. `TWIN_SIM_CONFIG` environment variable (path to TOML file)
//! 2. `twin_sim.toml` in the current working directory
//! 3. Built-in defaults (matching the stock dataset)
//!
//! The config is passed explicitly to the simulator; there is no global
//! instance.
//!
//! ```ignore
//! let config = SimConfig::load();
//! let run = Simulator::new(config)?.run();
//! ```

mod sim_config;
pub mod defaults;
pub mod validation;

pub use sim_config::*;
