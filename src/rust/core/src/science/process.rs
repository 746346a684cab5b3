// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// Electrospinning process parameters (the five slider inputs).

use serde::{Deserialize, Serialize};
use std::fmt;
use wasm_bindgen::prelude::*;

/// Reference process point: every process factor of the architecture stage is 1.0 here.
pub const REFERENCE_MW: f64 = 100_000.0;
pub const REFERENCE_CONCENTRATION: f64 = 10.0;
pub const REFERENCE_VOLTAGE: f64 = 17.5;
pub const REFERENCE_FLOW_RATE: f64 = 1.5;
pub const REFERENCE_DISTANCE: f64 = 15.0;

/// One of the five process parameters. Used for targeted updates and error reporting.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Parameter {
    MolecularWeight = 0,
    Concentration = 1,
    Voltage = 2,
    FlowRate = 3,
    Distance = 4,
}

impl Parameter {
    pub const ALL: [Parameter; 5] = [
        Parameter::MolecularWeight,
        Parameter::Concentration,
        Parameter::Voltage,
        Parameter::FlowRate,
        Parameter::Distance,
    ];

    pub fn unit(&self) -> &'static str {
        match self {
            Parameter::MolecularWeight => "Da",
            Parameter::Concentration => "wt%",
            Parameter::Voltage => "kV",
            Parameter::FlowRate => "mL/h",
            Parameter::Distance => "cm",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Parameter::MolecularWeight => "molecularWeight",
            Parameter::Concentration => "concentration",
            Parameter::Voltage => "voltage",
            Parameter::FlowRate => "flowRate",
            Parameter::Distance => "distance",
        };
        f.write_str(name)
    }
}

/// Process inputs for one evaluation.
///
/// Field names serialize in camelCase to match the dashboard's slider state.
/// Missing fields fall back to the reference process point.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProcessInputs {
    /// Polymer molecular weight (Da)
    pub molecular_weight: f64,
    /// Solution concentration (wt%)
    pub concentration: f64,
    /// Applied voltage (kV)
    pub voltage: f64,
    /// Solution flow rate (mL/h)
    pub flow_rate: f64,
    /// Tip-to-collector distance (cm)
    pub distance: f64,
}

impl Default for ProcessInputs {
    fn default() -> Self {
        Self {
            molecular_weight: REFERENCE_MW,
            concentration: REFERENCE_CONCENTRATION,
            voltage: REFERENCE_VOLTAGE,
            flow_rate: REFERENCE_FLOW_RATE,
            distance: REFERENCE_DISTANCE,
        }
    }
}

impl ProcessInputs {
    pub fn new(
        molecular_weight: f64,
        concentration: f64,
        voltage: f64,
        flow_rate: f64,
        distance: f64,
    ) -> Self {
        Self {
            molecular_weight,
            concentration,
            voltage,
            flow_rate,
            distance,
        }
    }

    /// Reference voltage, flow and distance at the given MW and concentration.
    /// This is the operating point the chart sweeps evaluate.
    pub fn at_reference(molecular_weight: f64, concentration: f64) -> Self {
        Self {
            molecular_weight,
            concentration,
            ..Self::default()
        }
    }

    pub fn get(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::MolecularWeight => self.molecular_weight,
            Parameter::Concentration => self.concentration,
            Parameter::Voltage => self.voltage,
            Parameter::FlowRate => self.flow_rate,
            Parameter::Distance => self.distance,
        }
    }

    pub fn set(&mut self, parameter: Parameter, value: f64) {
        match parameter {
            Parameter::MolecularWeight => self.molecular_weight = value,
            Parameter::Concentration => self.concentration = value,
            Parameter::Voltage => self.voltage = value,
            Parameter::FlowRate => self.flow_rate = value,
            Parameter::Distance => self.distance = value,
        }
    }

    /// Copy with one parameter replaced.
    pub fn with(mut self, parameter: Parameter, value: f64) -> Self {
        self.set(parameter, value);
        self
    }

    /// Parameter values in `Parameter::ALL` order.
    pub fn values(&self) -> [f64; 5] {
        [
            self.molecular_weight,
            self.concentration,
            self.voltage,
            self.flow_rate,
            self.distance,
        ]
    }
}
