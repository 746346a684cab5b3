// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// PredictionKernel: Unified Rust/WASM Scaffold Prediction Orchestrator
//
// This file is part of the scaffold prediction engine.
// For licensing terms, see the LICENSE file in the project root.

// ============================================================================
// PredictionKernel
// ============================================================================
// Runs the full pipeline: process -> architecture -> biology -> suitability
// -> chart sweeps. The dashboard calls ONLY this module (or the designer that
// wraps it), never the individual engines.
// ============================================================================

use crate::config::PredictionConfig;
use crate::error::PredictionError;
use crate::guardrails::{GuardrailValidation, ProcessGuardrails};
use crate::optimization::sweeps::{ChartData, SweepGenerator};
use crate::science::architecture::{ArchitectureEngine, ArchitectureProperties, Morphology};
use crate::science::biology::{BiologicalOutcomes, BiologyEngine};
use crate::science::process::ProcessInputs;
use crate::science::suitability::{ApplicationScores, CellScores, SuitabilityEngine};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use wasm_bindgen::prelude::*;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidationEvent {
    pub topic: String,
    pub message: String,
    pub severity: String, // 'INFO', 'WARNING', 'CRITICAL'
}

/// Everything derived from one set of process inputs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub inputs: ProcessInputs,
    pub architecture: ArchitectureProperties,
    pub biology: BiologicalOutcomes,
    pub applications: ApplicationScores,
    pub cells: CellScores,
    pub charts: Option<ChartData>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResponse {
    pub result: Prediction,
    pub events: Vec<ValidationEvent>,
    pub fingerprint: String,
    pub compute_time_ms: f32,
}

impl PredictionResponse {
    pub fn to_json(&self, pretty: bool) -> Result<String, PredictionError> {
        let out = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        out.map_err(PredictionError::Serialization)
    }
}

#[wasm_bindgen]
pub struct PredictionKernel;

#[wasm_bindgen]
impl PredictionKernel {
    /// Main entry point: compute the full prediction from JSON inputs.
    ///
    /// # Arguments
    /// * `inputs_json` - process inputs, e.g.
    ///   `{"molecularWeight": 124000, "concentration": 10, "voltage": 18, "flowRate": 1, "distance": 15}`.
    ///   Missing fields take the reference value.
    ///
    /// # Returns
    /// JSON `{result, events, fingerprint, computeTimeMs}`, or `{error}` when the
    /// inputs cannot be parsed or evaluated.
    #[wasm_bindgen]
    pub fn compute_json(inputs_json: &str) -> String {
        Self::compute_json_with_config(inputs_json, &PredictionConfig::default())
    }

    /// As `compute_json`, with an explicit configuration.
    #[wasm_bindgen]
    pub fn compute_json_with_config(inputs_json: &str, config: &PredictionConfig) -> String {
        let response = serde_json::from_str::<ProcessInputs>(inputs_json)
            .map_err(PredictionError::from)
            .and_then(|inputs| Self::respond(&inputs, config))
            .and_then(|r| r.to_json(false));

        response.unwrap_or_else(|e| error_json(&e))
    }

    /// `JsValue` in, `JsValue` out, for callers that already hold a JS object.
    pub fn compute_value(inputs: JsValue) -> Result<JsValue, JsValue> {
        let inputs: ProcessInputs = serde_wasm_bindgen::from_value(inputs)?;
        let response = Self::respond(&inputs, &PredictionConfig::default())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(serde_wasm_bindgen::to_value(&response)?)
    }
}

/// Pure Rust Implementation (Non-WASM-Bindgen)
impl PredictionKernel {
    /// Full pipeline. Stages run in order and nothing is cached between calls.
    pub fn compute(
        inputs: &ProcessInputs,
        config: &PredictionConfig,
    ) -> Result<Prediction, PredictionError> {
        let validation = ProcessGuardrails::default().validate(inputs);
        Self::compute_validated(inputs, config, &validation)
    }

    /// Pipeline over inputs that have already been checked against the guardrails.
    fn compute_validated(
        inputs: &ProcessInputs,
        config: &PredictionConfig,
        validation: &GuardrailValidation,
    ) -> Result<Prediction, PredictionError> {
        if let Some(err) = validation.to_error(config.enforce_domain) {
            return Err(err);
        }

        // 1. Architecture
        let architecture = ArchitectureEngine::predict(inputs);

        // 2. Biology (consumes architecture)
        let biology = BiologyEngine::predict(inputs.molecular_weight, &architecture);

        // 3. Suitability
        let applications = SuitabilityEngine::score_applications(&architecture);
        let cells = SuitabilityEngine::score_cells(&architecture);

        // 4. Charts
        let charts = if config.include_charts {
            Some(SweepGenerator::generate(
                inputs,
                architecture.degradation_rate,
                config.degradation_weeks,
            ))
        } else {
            None
        };

        tracing::debug!(
            molecular_weight = inputs.molecular_weight,
            concentration = inputs.concentration,
            fiber_diameter = architecture.fiber_diameter,
            morphology = architecture.morphology.label(),
            lineage = biology.msc_lineage.label(),
            best_application = applications.best().0.label(),
            best_cell = cells.best().0.label(),
            "prediction computed"
        );

        Ok(Prediction {
            inputs: *inputs,
            architecture,
            biology,
            applications,
            cells,
            charts,
        })
    }

    /// Compute and wrap with events, fingerprint and timing.
    pub fn respond(
        inputs: &ProcessInputs,
        config: &PredictionConfig,
    ) -> Result<PredictionResponse, PredictionError> {
        let start = instant::Instant::now();

        let validation = ProcessGuardrails::default().validate(inputs);
        let result = Self::compute_validated(inputs, config, &validation)?;
        let events = Self::events(&validation, &result);

        for event in &events {
            tracing::warn!(topic = %event.topic, "{}", event.message);
        }

        Ok(PredictionResponse {
            result,
            events,
            fingerprint: Self::fingerprint(inputs),
            compute_time_ms: start.elapsed().as_secs_f32() * 1000.0,
        })
    }

    /// Findings the dashboard should surface next to the numbers.
    pub fn events(validation: &GuardrailValidation, prediction: &Prediction) -> Vec<ValidationEvent> {
        let mut events = Vec::new();

        for v in &validation.violations {
            events.push(ValidationEvent {
                topic: "PROCESS.DOMAIN".to_string(),
                message: format!(
                    "{} = {} {} outside calibrated range [{}, {}]; result is extrapolated",
                    v.parameter,
                    v.actual_value,
                    v.parameter.unit(),
                    v.range.min,
                    v.range.max
                ),
                severity: "WARNING".to_string(),
            });
        }

        let window = &prediction.architecture.concentration_window;
        if !window.in_window {
            events.push(ValidationEvent {
                topic: "PROCESS.SPINNABILITY".to_string(),
                message: format!(
                    "Concentration {:.1} wt% outside spinnable window {:.1}-{:.1} wt% for this MW",
                    prediction.inputs.concentration, window.min, window.max
                ),
                severity: "WARNING".to_string(),
            });
        }

        match prediction.architecture.morphology {
            Morphology::Beaded => events.push(ValidationEvent {
                topic: "ARCHITECTURE.MORPHOLOGY".to_string(),
                message: "Beaded fibers expected: raise concentration or molecular weight".to_string(),
                severity: "WARNING".to_string(),
            }),
            Morphology::RibbonLikeThick => events.push(ValidationEvent {
                topic: "ARCHITECTURE.MORPHOLOGY".to_string(),
                message: "Ribbon-like thick fibers expected: lower concentration".to_string(),
                severity: "INFO".to_string(),
            }),
            Morphology::OptimalUniform | Morphology::UniformBeadFree => {}
        }

        events
    }

    /// SHA-256 over the little-endian bytes of the five inputs, hex encoded.
    pub fn fingerprint(inputs: &ProcessInputs) -> String {
        let mut hasher = Sha256::new();
        for v in inputs.values() {
            hasher.update(v.to_le_bytes());
        }
        hex::encode(hasher.finalize())
    }
}

fn error_json(e: &PredictionError) -> String {
    serde_json::to_string(&serde_json::json!({
        "error": e.to_string()
    }))
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::science::process::Parameter;

    #[test]
    fn test_compute_reference() {
        let p = PredictionKernel::compute(&ProcessInputs::default(), &PredictionConfig::default()).unwrap();
        assert_eq!(p.architecture.fiber_diameter, 400.0);
        let charts = p.charts.unwrap();
        assert_eq!(charts.mw_comparison.len(), 8);
        assert_eq!(charts.trade_off.len(), 9);
        assert_eq!(charts.degradation_profile.len(), 17);
    }

    #[test]
    fn test_charts_can_be_disabled() {
        let config = PredictionConfig {
            include_charts: false,
            ..PredictionConfig::default()
        };
        let p = PredictionKernel::compute(&ProcessInputs::default(), &config).unwrap();
        assert!(p.charts.is_none());
    }

    #[test]
    fn test_degradation_horizon_follows_config() {
        let config = PredictionConfig {
            degradation_weeks: 24,
            ..PredictionConfig::default()
        };
        let p = PredictionKernel::compute(&ProcessInputs::default(), &config).unwrap();
        assert_eq!(p.charts.unwrap().degradation_profile.len(), 25);
    }

    #[test]
    fn test_permissive_mode_extrapolates() {
        let inputs = ProcessInputs::default().with(Parameter::MolecularWeight, 400_000.0);
        let p = PredictionKernel::compute(&inputs, &PredictionConfig::default()).unwrap();
        assert!(p.architecture.fiber_diameter <= 1500.0);
    }

    #[test]
    fn test_strict_mode_rejects_out_of_domain() {
        let inputs = ProcessInputs::default().with(Parameter::Distance, 5.0);
        let err = PredictionKernel::compute(&inputs, &PredictionConfig::strict()).unwrap_err();
        assert!(matches!(
            err,
            PredictionError::OutOfDomain { parameter: Parameter::Distance, .. }
        ));
    }

    #[test]
    fn test_non_finite_always_rejected() {
        let inputs = ProcessInputs::default().with(Parameter::Concentration, f64::INFINITY);
        let err = PredictionKernel::compute(&inputs, &PredictionConfig::default()).unwrap_err();
        assert!(matches!(err, PredictionError::NonFiniteInput { .. }));
    }

    #[test]
    fn test_events_for_window_and_domain() {
        // 180 kDa at 12 wt%: outside the 9-10.5 window, ribbon-like
        let inputs = ProcessInputs::new(180_000.0, 12.0, 30.0, 1.5, 15.0);
        let response = PredictionKernel::respond(&inputs, &PredictionConfig::default()).unwrap();
        let topics: Vec<&str> = response.events.iter().map(|e| e.topic.as_str()).collect();
        assert!(topics.contains(&"PROCESS.DOMAIN"));
        assert!(topics.contains(&"PROCESS.SPINNABILITY"));
        assert!(topics.contains(&"ARCHITECTURE.MORPHOLOGY"));
    }

    #[test]
    fn test_no_events_at_reference() {
        let response =
            PredictionKernel::respond(&ProcessInputs::default(), &PredictionConfig::default()).unwrap();
        assert!(response.events.is_empty());
    }

    #[test]
    fn test_respond_strict_fails_before_events() {
        let inputs = ProcessInputs::default().with(Parameter::FlowRate, 4.0);
        assert!(matches!(
            PredictionKernel::respond(&inputs, &PredictionConfig::strict()),
            Err(PredictionError::OutOfDomain { parameter: Parameter::FlowRate, .. })
        ));

        let response = PredictionKernel::respond(&inputs, &PredictionConfig::default()).unwrap();
        let domain = response
            .events
            .iter()
            .filter(|e| e.topic == "PROCESS.DOMAIN")
            .count();
        assert_eq!(domain, 1);
    }

    #[test]
    fn test_response_to_json_compact_and_pretty() {
        let response =
            PredictionKernel::respond(&ProcessInputs::default(), &PredictionConfig::default()).unwrap();
        let compact = response.to_json(false).unwrap();
        let pretty = response.to_json(true).unwrap();
        assert!(!compact.contains('\n'));
        assert!(pretty.contains('\n'));

        let a: serde_json::Value = serde_json::from_str(&compact).unwrap();
        let b: serde_json::Value = serde_json::from_str(&pretty).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_fingerprint_stable_and_sensitive() {
        let a = PredictionKernel::fingerprint(&ProcessInputs::default());
        let b = PredictionKernel::fingerprint(&ProcessInputs::default());
        let c = PredictionKernel::fingerprint(&ProcessInputs::default().with(Parameter::Voltage, 17.6));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 64);
    }
}
