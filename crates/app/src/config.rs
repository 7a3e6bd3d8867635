//! Simulation configuration
//!
//! All tunables in one serde struct, loadable from a TOML file; every field
//! falls back to the original demo's constants so an empty file (or no file
//! at all) reproduces the stock experience.

use glam::Vec3;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::clock::DEFAULT_TICK_INTERVAL;
use crate::controller::{DEFAULT_MOUSE_SENSITIVITY, DEFAULT_MOVE_SPEED};
use fieldwalk_physics::{DEFAULT_GRAVITY, DEFAULT_HIT_RADIUS};

/// Errors from loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Simulation tunables
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    /// Walking speed, units per second
    pub move_speed: f32,
    /// Look sensitivity, radians per device unit per second
    pub mouse_sensitivity: f32,
    /// Free-fall acceleration
    pub gravity: f32,
    /// Player collision sphere radius
    pub hit_radius: f32,
    /// Fixed physics timestep in seconds
    pub tick_interval: f32,
    /// Initial camera origin
    pub origin: [f32; 3],
    /// Initial camera target
    pub target: [f32; 3],
    /// Initial camera up vector
    pub up: [f32; 3],
    /// Animate the sphere lattice with the simulation clock
    pub animate_lattice: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            move_speed: DEFAULT_MOVE_SPEED,
            mouse_sensitivity: DEFAULT_MOUSE_SENSITIVITY,
            gravity: DEFAULT_GRAVITY,
            hit_radius: DEFAULT_HIT_RADIUS,
            tick_interval: DEFAULT_TICK_INTERVAL,
            origin: [0.0, 1.0, 0.0],
            target: [0.0, 1.0, -1.0],
            up: [0.0, 1.0, 0.0],
            animate_lattice: false,
        }
    }
}

impl SimConfig {
    /// Load a configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn origin_vec(&self) -> Vec3 {
        Vec3::from_array(self.origin)
    }

    pub fn target_vec(&self) -> Vec3 {
        Vec3::from_array(self.target)
    }

    pub fn up_vec(&self) -> Vec3 {
        Vec3::from_array(self.up)
    }
}
