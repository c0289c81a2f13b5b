//! Maintenance configuration domain model.

use serde::{Deserialize, Serialize};

/// Tunables for the background and foreground cleanup paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceConfig {
    /// Minimum elapsed time between two orphan sweeps.
    #[serde(default = "default_min_sweep_interval_ms")]
    pub min_sweep_interval_ms: u64,

    /// Fixed delay before the single optimistic re-check after a render
    /// failure with an inconclusive probe.
    #[serde(default = "default_image_retry_delay_ms")]
    pub image_retry_delay_ms: u64,
}

fn default_min_sweep_interval_ms() -> u64 {
    60_000
}

fn default_image_retry_delay_ms() -> u64 {
    1_500
}

impl Default for MaintenanceConfig {
    fn default() -> Self {
        Self {
            min_sweep_interval_ms: default_min_sweep_interval_ms(),
            image_retry_delay_ms: default_image_retry_delay_ms(),
        }
    }
}
