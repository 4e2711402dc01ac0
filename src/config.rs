//! Heuristic configuration.
//!
//! Chooses the construction policy and whether 2-opt runs afterwards,
//! loadable from TOML so batch drivers can switch heuristics without
//! recompiling.
//!
//! # Examples
//!
//! ```
//! use u_tsp::config::HeuristicConfig;
//! use u_tsp::constructive::InsertionPolicy;
//!
//! let config = HeuristicConfig::from_toml_str(r#"
//!     improve = false
//!
//!     [policy]
//!     type = "random"
//!     seed = 42
//! "#).unwrap();
//!
//! assert_eq!(config.policy, InsertionPolicy::Random { seed: 42 });
//! assert!(!config.improve);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constructive::InsertionPolicy;
use crate::error::Result;

/// Which heuristics [`solve`](crate::solver::solve) runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct HeuristicConfig {
    /// Construction policy.
    #[serde(default)]
    pub policy: InsertionPolicy,

    /// Run 2-opt on the constructed tour.
    #[serde(default = "default_improve")]
    pub improve: bool,
}

fn default_improve() -> bool {
    true
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            policy: InsertionPolicy::default(),
            improve: default_improve(),
        }
    }
}

impl HeuristicConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Loads a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Sets the construction policy.
    pub fn with_policy(mut self, policy: InsertionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Enables or disables 2-opt.
    pub fn with_improve(mut self, improve: bool) -> Self {
        self.improve = improve;
        self
    }
}
