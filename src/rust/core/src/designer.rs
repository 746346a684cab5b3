// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//! Scaffold Designer
//!
//! Holds the current slider state for the dashboard. Every mutation re-runs
//! the whole prediction pipeline and replaces the stored result; there is no
//! partial recomputation.

use crate::config::PredictionConfig;
use crate::error::PredictionError;
use crate::prediction_kernel::{PredictionKernel, PredictionResponse};
use crate::science::presets::PresetRegistry;
use crate::science::process::{Parameter, ProcessInputs};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct ScaffoldDesigner {
    inputs: ProcessInputs,
    config: PredictionConfig,
    latest: Result<PredictionResponse, PredictionError>,
}

#[wasm_bindgen]
impl ScaffoldDesigner {
    #[wasm_bindgen(constructor)]
    pub fn new() -> ScaffoldDesigner {
        Self::with_config(ProcessInputs::default(), PredictionConfig::default())
    }

    pub fn set_molecular_weight(&mut self, value: f64) {
        self.set(Parameter::MolecularWeight, value);
    }

    pub fn set_concentration(&mut self, value: f64) {
        self.set(Parameter::Concentration, value);
    }

    pub fn set_voltage(&mut self, value: f64) {
        self.set(Parameter::Voltage, value);
    }

    pub fn set_flow_rate(&mut self, value: f64) {
        self.set(Parameter::FlowRate, value);
    }

    pub fn set_distance(&mut self, value: f64) {
        self.set(Parameter::Distance, value);
    }

    /// Update any one parameter and recompute.
    pub fn set(&mut self, parameter: Parameter, value: f64) {
        self.inputs.set(parameter, value);
        self.recompute();
    }

    /// Jump to a named preset. Returns false (and changes nothing) for an unknown ID.
    pub fn load_preset(&mut self, id: &str) -> bool {
        match PresetRegistry::get_standard(id) {
            Some(inputs) => {
                self.inputs = inputs;
                self.recompute();
                true
            }
            None => false,
        }
    }

    pub fn set_config(&mut self, config: PredictionConfig) {
        self.config = config;
        self.recompute();
    }

    /// Latest response as JSON (`{error}` if the current inputs cannot be evaluated).
    pub fn prediction_json(&self) -> String {
        match &self.latest {
            Ok(r) => serde_json::to_string(r).unwrap_or_default(),
            Err(e) => serde_json::to_string(&serde_json::json!({ "error": e.to_string() }))
                .unwrap_or_default(),
        }
    }

    pub fn prediction_value(&self) -> Result<JsValue, JsValue> {
        match &self.latest {
            Ok(r) => Ok(serde_wasm_bindgen::to_value(r)?),
            Err(e) => Err(JsValue::from_str(&e.to_string())),
        }
    }

    pub fn get(&self, parameter: Parameter) -> f64 {
        self.inputs.get(parameter)
    }
}

impl Default for ScaffoldDesigner {
    fn default() -> Self {
        Self::new()
    }
}

impl ScaffoldDesigner {
    pub fn with_config(inputs: ProcessInputs, config: PredictionConfig) -> Self {
        let latest = PredictionKernel::respond(&inputs, &config);
        Self {
            inputs,
            config,
            latest,
        }
    }

    pub fn inputs(&self) -> &ProcessInputs {
        &self.inputs
    }

    pub fn latest(&self) -> Result<&PredictionResponse, &PredictionError> {
        self.latest.as_ref()
    }

    fn recompute(&mut self) {
        self.latest = PredictionKernel::respond(&self.inputs, &self.config);
    }
}
