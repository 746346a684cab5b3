// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//! Process Domain Guardrails
//!
//! The calibrated operating envelope of the five process parameters.
//! The engine itself is permissive (it clamps its outputs), so these checks
//! only report; the kernel decides whether a violation is fatal.

use crate::error::PredictionError;
use crate::science::process::{Parameter, ProcessInputs};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParameterRange {
    pub min: f64,
    pub max: f64,
}

impl ParameterRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Slider bounds of the calibrated process domain
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessGuardrails {
    pub molecular_weight: ParameterRange, // Da
    pub concentration: ParameterRange,    // wt%
    pub voltage: ParameterRange,          // kV
    pub flow_rate: ParameterRange,        // mL/h
    pub distance: ParameterRange,         // cm
}

impl Default for ProcessGuardrails {
    fn default() -> Self {
        ProcessGuardrails {
            molecular_weight: ParameterRange::new(30_000.0, 200_000.0),
            concentration: ParameterRange::new(5.0, 20.0),
            voltage: ParameterRange::new(10.0, 25.0),
            flow_rate: ParameterRange::new(0.5, 3.0),
            distance: ParameterRange::new(10.0, 25.0),
        }
    }
}

impl ProcessGuardrails {
    pub fn range(&self, parameter: Parameter) -> ParameterRange {
        match parameter {
            Parameter::MolecularWeight => self.molecular_weight,
            Parameter::Concentration => self.concentration,
            Parameter::Voltage => self.voltage,
            Parameter::FlowRate => self.flow_rate,
            Parameter::Distance => self.distance,
        }
    }

    pub fn validate(&self, inputs: &ProcessInputs) -> GuardrailValidation {
        let mut violations = Vec::new();

        for parameter in Parameter::ALL {
            let value = inputs.get(parameter);
            let range = self.range(parameter);
            if !value.is_finite() {
                violations.push(GuardrailViolation {
                    parameter,
                    actual_value: value,
                    range,
                    severity: ViolationSeverity::Critical,
                });
            } else if !range.contains(value) {
                violations.push(GuardrailViolation {
                    parameter,
                    actual_value: value,
                    range,
                    severity: ViolationSeverity::Warning,
                });
            }
        }

        GuardrailValidation { violations }
    }
}

#[derive(Clone, Debug)]
pub struct GuardrailValidation {
    pub violations: Vec<GuardrailViolation>,
}

impl GuardrailValidation {
    pub fn in_domain(&self) -> bool {
        self.violations.is_empty()
    }

    /// First violation as an error. `strict` also turns out-of-domain values into errors.
    pub fn to_error(&self, strict: bool) -> Option<PredictionError> {
        self.violations
            .iter()
            .find(|v| strict || v.severity == ViolationSeverity::Critical)
            .map(|v| v.into_error())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GuardrailViolation {
    pub parameter: Parameter,
    pub actual_value: f64,
    pub range: ParameterRange,
    pub severity: ViolationSeverity,
}

impl GuardrailViolation {
    pub fn into_error(self) -> PredictionError {
        match self.severity {
            ViolationSeverity::Critical => PredictionError::NonFiniteInput {
                parameter: self.parameter,
                value: self.actual_value,
            },
            ViolationSeverity::Warning => PredictionError::OutOfDomain {
                parameter: self.parameter,
                value: self.actual_value,
                min: self.range.min,
                max: self.range.max,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ViolationSeverity {
    /// Outside the calibrated domain; results are extrapolated and clamped
    Warning,
    /// NaN or infinite; cannot be evaluated
    Critical,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_point_in_domain() {
        let result = ProcessGuardrails::default().validate(&ProcessInputs::default());
        assert!(result.in_domain());
        assert!(result.to_error(true).is_none());
    }

    #[test]
    fn test_domain_edges_are_inclusive() {
        let guard = ProcessGuardrails::default();
        let low = ProcessInputs::new(30_000.0, 5.0, 10.0, 0.5, 10.0);
        let high = ProcessInputs::new(200_000.0, 20.0, 25.0, 3.0, 25.0);
        assert!(guard.validate(&low).in_domain());
        assert!(guard.validate(&high).in_domain());
    }

    #[test]
    fn test_out_of_domain_is_warning() {
        let guard = ProcessGuardrails::default();
        let inputs = ProcessInputs::default().with(Parameter::Voltage, 30.0);
        let result = guard.validate(&inputs);
        assert_eq!(result.violations.len(), 1);
        assert_eq!(result.violations[0].parameter, Parameter::Voltage);
        assert_eq!(result.violations[0].severity, ViolationSeverity::Warning);

        assert!(result.to_error(false).is_none());
        assert!(matches!(
            result.to_error(true),
            Some(PredictionError::OutOfDomain { parameter: Parameter::Voltage, .. })
        ));
    }

    #[test]
    fn test_non_finite_is_critical() {
        let guard = ProcessGuardrails::default();
        let inputs = ProcessInputs::default().with(Parameter::FlowRate, f64::NAN);
        let result = guard.validate(&inputs);
        assert_eq!(result.violations[0].severity, ViolationSeverity::Critical);
        assert!(matches!(
            result.to_error(false),
            Some(PredictionError::NonFiniteInput { parameter: Parameter::FlowRate, .. })
        ));
    }
}
