// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto

//! Chart Sweeps
//!
//! Deterministic re-evaluations of the architecture and biology stages at
//! fixed alternate molecular weights, plus the degradation time series for
//! the current scaffold. Sweeps hold the current concentration and evaluate
//! voltage, flow rate and distance at the reference process point.

use crate::formulas::{cell_infiltration, mass_remaining, mechanical_retention};
use crate::science::architecture::{ArchitectureEngine, Morphology};
use crate::science::biology::BiologyEngine;
use crate::science::process::ProcessInputs;
use serde::{Deserialize, Serialize};

/// Commercial PVA grades shown in the comparison table (Da).
pub const COMPARISON_GRADES: [f64; 8] = [
    31_000.0, 50_000.0, 61_000.0, 85_000.0, 89_000.0, 124_000.0, 146_000.0, 186_000.0,
];

pub const TRADE_OFF_START: f64 = 30_000.0;
pub const TRADE_OFF_STEP: f64 = 20_000.0;
pub const TRADE_OFF_POINTS: usize = 9;

pub const DEFAULT_DEGRADATION_WEEKS: u32 = 16;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MwComparisonRow {
    pub label: String,
    pub molecular_weight: f64,
    pub fiber_diameter: f64,
    pub tensile_strength: f64,
    pub youngs_modulus: f64,
    pub degradation_rate: f64,
    pub cell_viability: f64,
    pub morphology: Morphology,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeOffPoint {
    pub molecular_weight: f64,
    pub tensile_strength: f64,
    pub degradation_rate: f64,
    pub water_absorption: f64,
    pub cell_viability: f64,
    pub gag_content: f64,
    pub current: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DegradationPoint {
    pub week: u32,
    pub mass_remaining: f64,
    pub mechanical_retention: f64,
    pub cell_infiltration: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub mw_comparison: Vec<MwComparisonRow>,
    pub trade_off: Vec<TradeOffPoint>,
    pub degradation_profile: Vec<DegradationPoint>,
}

pub struct SweepGenerator;

impl SweepGenerator {
    /// MW values of the trade-off sweep: 30k, 50k, ..., 190k.
    pub fn trade_off_grid() -> [f64; TRADE_OFF_POINTS] {
        let mut grid = [0.0; TRADE_OFF_POINTS];
        for (i, mw) in grid.iter_mut().enumerate() {
            *mw = TRADE_OFF_START + TRADE_OFF_STEP * i as f64;
        }
        grid
    }

    pub fn mw_comparison(concentration: f64) -> Vec<MwComparisonRow> {
        COMPARISON_GRADES
            .iter()
            .map(|&mw| {
                let arch = ArchitectureEngine::predict(&ProcessInputs::at_reference(mw, concentration));
                let bio = BiologyEngine::predict(mw, &arch);
                MwComparisonRow {
                    label: format!("{:.0}k", mw / 1000.0),
                    molecular_weight: mw,
                    fiber_diameter: arch.fiber_diameter,
                    tensile_strength: arch.tensile_strength,
                    youngs_modulus: arch.youngs_modulus,
                    degradation_rate: arch.degradation_rate,
                    cell_viability: bio.cell_viability,
                    morphology: arch.morphology,
                }
            })
            .collect()
    }

    /// Trade-off sweep; the grid point nearest `current_mw` is flagged (lower MW wins a tie).
    pub fn trade_off(current_mw: f64, concentration: f64) -> Vec<TradeOffPoint> {
        let grid = Self::trade_off_grid();
        let nearest = Self::nearest_index(&grid, current_mw);

        grid.iter()
            .enumerate()
            .map(|(i, &mw)| {
                let arch = ArchitectureEngine::predict(&ProcessInputs::at_reference(mw, concentration));
                let bio = BiologyEngine::predict(mw, &arch);
                TradeOffPoint {
                    molecular_weight: mw,
                    tensile_strength: arch.tensile_strength,
                    degradation_rate: arch.degradation_rate,
                    water_absorption: arch.water_absorption,
                    cell_viability: bio.cell_viability,
                    gag_content: bio.gag_content,
                    current: i == nearest,
                }
            })
            .collect()
    }

    /// Weekly mass loss, mechanical retention and cell infiltration, week 0 through `weeks`.
    pub fn degradation_profile(degradation_rate: f64, weeks: u32) -> Vec<DegradationPoint> {
        (0..=weeks)
            .map(|week| {
                let t = week as f64;
                DegradationPoint {
                    week,
                    mass_remaining: mass_remaining(degradation_rate, t),
                    mechanical_retention: mechanical_retention(t),
                    cell_infiltration: cell_infiltration(t),
                }
            })
            .collect()
    }

    /// All three chart datasets for the given inputs and their degradation rate.
    pub fn generate(inputs: &ProcessInputs, degradation_rate: f64, weeks: u32) -> ChartData {
        ChartData {
            mw_comparison: Self::mw_comparison(inputs.concentration),
            trade_off: Self::trade_off(inputs.molecular_weight, inputs.concentration),
            degradation_profile: Self::degradation_profile(degradation_rate, weeks),
        }
    }

    fn nearest_index(grid: &[f64], target: f64) -> usize {
        let mut best = 0;
        let mut best_dist = f64::INFINITY;
        for (i, &mw) in grid.iter().enumerate() {
            let dist = (mw - target).abs();
            if dist < best_dist {
                best = i;
                best_dist = dist;
            }
        }
        best
    }
}
