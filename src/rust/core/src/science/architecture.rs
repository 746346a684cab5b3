// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// ArchitectureEngine: process parameters -> scaffold architecture

use crate::formulas::{bounded, fiber_diameter_nm};
use crate::science::process::ProcessInputs;
use serde::{Deserialize, Serialize};

/// Molecular weight grade. Decides the spinnable concentration window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MwTier {
    /// < 70 kDa
    Low,
    /// 70 kDa to < 150 kDa
    Medium,
    /// >= 150 kDa
    High,
}

impl MwTier {
    pub fn classify(molecular_weight: f64) -> Self {
        if molecular_weight < 70_000.0 {
            MwTier::Low
        } else if molecular_weight < 150_000.0 {
            MwTier::Medium
        } else {
            MwTier::High
        }
    }

    /// Spinnable concentration bounds (wt%) for this grade.
    pub fn concentration_bounds(&self) -> (f64, f64) {
        match self {
            MwTier::Low => (6.0, 14.0),
            MwTier::Medium => (8.0, 12.0),
            MwTier::High => (9.0, 10.5),
        }
    }
}

/// Concentration window for the current MW, and whether the current concentration sits inside it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConcentrationWindow {
    pub tier: MwTier,
    pub min: f64,
    pub max: f64,
    pub in_window: bool,
}

impl ConcentrationWindow {
    pub fn evaluate(molecular_weight: f64, concentration: f64) -> Self {
        let tier = MwTier::classify(molecular_weight);
        let (min, max) = tier.concentration_bounds();
        Self {
            tier,
            min,
            max,
            in_window: concentration >= min && concentration <= max,
        }
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }
}

/// Expected fiber morphology. Serializes as its display label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Morphology {
    #[serde(rename = "beaded")]
    Beaded,
    #[serde(rename = "ribbon-like/thick")]
    RibbonLikeThick,
    #[serde(rename = "optimal uniform")]
    OptimalUniform,
    #[serde(rename = "uniform bead-free")]
    UniformBeadFree,
}

impl Morphology {
    /// First matching rule wins.
    pub fn classify(molecular_weight: f64, concentration: f64) -> Self {
        if molecular_weight < 70_000.0 && concentration < 9.0 {
            Morphology::Beaded
        } else if molecular_weight > 150_000.0 && concentration > 10.0 {
            Morphology::RibbonLikeThick
        } else if (100_000.0..=150_000.0).contains(&molecular_weight) {
            Morphology::OptimalUniform
        } else {
            Morphology::UniformBeadFree
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Morphology::Beaded => "beaded",
            Morphology::RibbonLikeThick => "ribbon-like/thick",
            Morphology::OptimalUniform => "optimal uniform",
            Morphology::UniformBeadFree => "uniform bead-free",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchitectureProperties {
    pub fiber_diameter: f64,    // nm
    pub porosity: f64,          // %
    pub pore_size: f64,         // μm
    pub tensile_strength: f64,  // MPa
    pub youngs_modulus: f64,    // MPa
    pub water_absorption: f64,  // %
    pub contact_angle: f64,     // degrees
    pub degradation_rate: f64,  // %/week
    pub swelling_ratio: f64,    // %
    pub morphology: Morphology,
    pub concentration_window: ConcentrationWindow,
}

pub struct ArchitectureEngine;

impl ArchitectureEngine {
    /// Predict scaffold architecture from process parameters.
    ///
    /// Total over the reals: every property is clamped, so out-of-domain
    /// inputs extrapolate rather than fail.
    pub fn predict(inputs: &ProcessInputs) -> ArchitectureProperties {
        let mw = inputs.molecular_weight;
        let c = inputs.concentration;
        let mw_ratio = mw / 100_000.0;

        // 1. Fiber diameter from the process factors
        let fiber_diameter = fiber_diameter_nm(
            mw,
            c,
            inputs.voltage,
            inputs.flow_rate,
            inputs.distance,
        );

        // 2. Packing of the mat: thinner fibers and stronger fields open it up
        let porosity = bounded(
            95.0 - fiber_diameter / 100.0 * 2.5 + (inputs.voltage - 17.5) * 0.5,
            60.0,
            95.0,
        );
        let pore_size = bounded(fiber_diameter / 200.0 * 1.5 + porosity / 20.0, 2.0, 15.0);

        // 3. Mechanics
        let thick_fiber_penalty = if fiber_diameter > 1000.0 { 2.0 } else { 0.0 };
        let tensile_strength = bounded(
            2.5 + mw_ratio * 5.2 + (c - 10.0) * 0.35 - thick_fiber_penalty,
            2.0,
            32.0,
        );
        let youngs_modulus = bounded(25.0 + mw_ratio * 60.0 + (c - 10.0) * 2.5, 20.0, 85.0);

        // 4. Hydration and degradation (crystallinity rises with MW)
        let water_absorption = bounded(
            950.0 - mw_ratio * 280.0 + (porosity - 75.0) * 8.0,
            350.0,
            950.0,
        );
        let contact_angle = bounded(45.0 + mw_ratio * 15.0 - (porosity - 75.0) * 0.3, 35.0, 75.0);
        let degradation_rate = bounded(
            25.0 - mw_ratio * 10.5 + (porosity - 75.0) * 0.15,
            4.0,
            25.0,
        );
        let swelling_ratio = bounded(100.0 - mw_ratio * 8.0 - (c - 10.0) * 0.5, 80.0, 100.0);

        ArchitectureProperties {
            fiber_diameter,
            porosity,
            pore_size,
            tensile_strength,
            youngs_modulus,
            water_absorption,
            contact_angle,
            degradation_rate,
            swelling_ratio,
            morphology: Morphology::classify(mw, c),
            concentration_window: ConcentrationWindow::evaluate(mw, c),
        }
    }
}
