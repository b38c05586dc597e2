//! Configuration loading for the simulator.
//!
//! TOML file with a `[grid]` section; every field has a default, so a
//! missing or partial file still yields the stock 5x5 table.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::core::{Cell, Grid};
use crate::error::Result;

/// Top-level configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub grid: GridConfig,
}

/// Grid dimensions and blocked cells
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Table width in cells
    pub width: i32,
    /// Table height in cells
    pub height: i32,
    /// Blocked cells as [x, y] pairs
    pub potholes: Vec<(i32, i32)>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 5,
            height: 5,
            potholes: vec![(1, 1), (2, 0), (0, 2), (1, 2), (3, 3)],
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(basic_toml::from_str(&contents)?)
    }
}

impl GridConfig {
    /// Build the immutable grid this configuration describes
    pub fn build(&self) -> Result<Grid> {
        Grid::new(self.width, self.height, self.potholes.iter().copied().map(Cell::from))
    }
}
