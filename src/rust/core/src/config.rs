// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT

use crate::error::PredictionError;
use crate::optimization::sweeps::DEFAULT_DEGRADATION_WEEKS;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Kernel configuration. Every field has a default, so partial TOML/JSON is accepted.
///
/// Keys are camelCase like the rest of the JSON surface; snake_case is accepted
/// for TOML files. Unknown keys are rejected.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct PredictionConfig {
    /// Reject inputs outside the calibrated process domain instead of extrapolating.
    #[serde(alias = "enforce_domain")]
    pub enforce_domain: bool,
    /// Generate the three chart datasets.
    #[serde(alias = "include_charts")]
    pub include_charts: bool,
    /// Last week of the degradation profile.
    #[serde(alias = "degradation_weeks")]
    pub degradation_weeks: u32,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            enforce_domain: false,
            include_charts: true,
            degradation_weeks: DEFAULT_DEGRADATION_WEEKS,
        }
    }
}

impl PredictionConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, PredictionError> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_json_str(s: &str) -> Result<Self, PredictionError> {
        serde_json::from_str(s).map_err(|e| PredictionError::Config(e.to_string()))
    }
}

#[wasm_bindgen]
impl PredictionConfig {
    #[wasm_bindgen(constructor)]
    pub fn new() -> PredictionConfig {
        PredictionConfig::default()
    }

    pub fn strict() -> PredictionConfig {
        PredictionConfig {
            enforce_domain: true,
            ..PredictionConfig::default()
        }
    }
}
