// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//! Scalar Formulas for Electrospun PVA Scaffolds
//!
//! Pure functions over scalar values. The engines in `science` compose these
//! into the architecture and biology stages; they are also exported to JS
//! individually so the dashboard can label chart axes with the same math.
//!
//! Coefficients are hand-calibrated against published PVA electrospinning
//! reference points and are kept exactly as calibrated.

use wasm_bindgen::prelude::*;

/// Clamp `value` into `[min, max]`.
///
/// Every derived property goes through this; `min <= max` holds for all call sites.
#[wasm_bindgen]
pub fn bounded(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

// ============================================================================
// PROCESS FACTORS (fiber diameter model)
// ============================================================================

/// Chain entanglement factor, 1.0 at 100 kDa / 10 wt%.
///
/// η_factor = (M_w / 100000) * (c / 10)
#[wasm_bindgen]
pub fn viscosity_factor(molecular_weight: f64, concentration: f64) -> f64 {
    (molecular_weight / 100_000.0) * (concentration / 10.0)
}

/// Higher field strength stretches the jet harder and thins the fiber.
#[wasm_bindgen]
pub fn voltage_factor(voltage_kv: f64) -> f64 {
    1.0 - (voltage_kv - 17.5) * 0.015
}

/// More solution per unit time gives thicker fibers.
#[wasm_bindgen]
pub fn flow_factor(flow_rate_ml_h: f64) -> f64 {
    1.0 + (flow_rate_ml_h - 1.5) * 0.12
}

#[wasm_bindgen]
pub fn distance_factor(distance_cm: f64) -> f64 {
    1.0 + (distance_cm - 15.0) * 0.008
}

/// Fiber diameter (nm) from the four process factors.
///
/// d = 400 nm * Π factors, clamped to [150, 1500] nm
#[wasm_bindgen]
pub fn fiber_diameter_nm(
    molecular_weight: f64,
    concentration: f64,
    voltage_kv: f64,
    flow_rate_ml_h: f64,
    distance_cm: f64,
) -> f64 {
    let d = 400.0
        * viscosity_factor(molecular_weight, concentration)
        * voltage_factor(voltage_kv)
        * flow_factor(flow_rate_ml_h)
        * distance_factor(distance_cm);
    bounded(d, 150.0, 1500.0)
}

// ============================================================================
// DEGRADATION KINETICS
// ============================================================================

/// First-order mass-loss constant (1/week) from a weekly degradation rate (%/week).
#[wasm_bindgen]
pub fn degradation_constant(degradation_rate: f64) -> f64 {
    degradation_rate / 100.0 * 0.15
}

/// Mass remaining (%) after `week` weeks of first-order hydrolytic degradation.
///
/// m(t) = 100 * exp(-k t)
#[wasm_bindgen]
pub fn mass_remaining(degradation_rate: f64, week: f64) -> f64 {
    100.0 * (-degradation_constant(degradation_rate) * week).exp()
}

/// Mechanical property retention (%), reaching zero at week 20.
///
/// R(t) = 100 * (1 - t/20)^1.5
#[wasm_bindgen]
pub fn mechanical_retention(week: f64) -> f64 {
    let remaining = (1.0 - week / 20.0).max(0.0);
    (100.0 * remaining.powf(1.5)).max(0.0)
}

/// Cell infiltration depth (%), logistic with midpoint at week 6.
#[wasm_bindgen]
pub fn cell_infiltration(week: f64) -> f64 {
    (100.0 / (1.0 + (-0.4 * (week - 6.0)).exp())).min(100.0)
}

// ============================================================================
// SCORING
// ============================================================================

/// Multiplicative suitability factor: 1.0 when the condition holds, `penalty` otherwise.
#[wasm_bindgen]
pub fn gate(condition: bool, penalty: f64) -> f64 {
    if condition {
        1.0
    } else {
        penalty
    }
}

/// Fold factors into a 0-100 score. Capped at 100, never floored.
pub fn suitability(factors: &[f64]) -> f64 {
    factors.iter().fold(100.0, |acc, f| acc * f).min(100.0)
}

// ============================================================================
// TESTS
// ============================================================================
