// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// BiologyEngine: scaffold architecture -> biological response

use crate::formulas::bounded;
use crate::science::architecture::ArchitectureProperties;
use serde::{Deserialize, Serialize};

/// Stiffness below which MSCs commit to the neurogenic lineage (MPa).
pub const NEUROGENIC_MODULUS_LIMIT: f64 = 35.0;
/// Stiffness at or above which MSCs commit to the osteogenic lineage (MPa).
pub const OSTEOGENIC_MODULUS_THRESHOLD: f64 = 60.0;

/// Lineage commitment scores (0-100).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineageScores {
    pub neurogenic: f64,
    pub osteogenic: f64,
    pub chondrogenic: f64,
}

/// Dominant MSC lineage on a substrate, with the full score triple.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "lineage", content = "scores", rename_all = "camelCase")]
pub enum MscLineage {
    Neurogenic(LineageScores),
    MyogenicChondrogenic(LineageScores),
    Osteogenic(LineageScores),
}

impl MscLineage {
    /// Substrate-stiffness rule (Engler-type mechanosensing).
    pub fn from_modulus(youngs_modulus: f64) -> Self {
        if youngs_modulus < NEUROGENIC_MODULUS_LIMIT {
            MscLineage::Neurogenic(LineageScores {
                neurogenic: 85.0,
                osteogenic: 10.0,
                chondrogenic: 25.0,
            })
        } else if youngs_modulus < OSTEOGENIC_MODULUS_THRESHOLD {
            MscLineage::MyogenicChondrogenic(LineageScores {
                neurogenic: 20.0,
                osteogenic: 30.0,
                chondrogenic: 80.0,
            })
        } else {
            MscLineage::Osteogenic(LineageScores {
                neurogenic: 10.0,
                osteogenic: 90.0,
                chondrogenic: 35.0,
            })
        }
    }

    pub fn scores(&self) -> LineageScores {
        match self {
            MscLineage::Neurogenic(s)
            | MscLineage::MyogenicChondrogenic(s)
            | MscLineage::Osteogenic(s) => *s,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MscLineage::Neurogenic(_) => "neurogenic",
            MscLineage::MyogenicChondrogenic(_) => "myogenic/chondrogenic",
            MscLineage::Osteogenic(_) => "osteogenic",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiologicalOutcomes {
    pub cell_viability: f64,      // %
    pub proliferation_time: f64,  // hours (doubling)
    pub gag_content: f64,         // μg/mg
    pub col2_expression: f64,     // fold change
    pub aggrecan_expression: f64, // fold change
    pub col1_col2_ratio: f64,
    pub msc_lineage: MscLineage,
    pub burst_release: f64,      // % released in 24 h
    pub sustained_duration: f64, // days
}

pub struct BiologyEngine;

impl BiologyEngine {
    /// Predict biological outcomes from the already-derived architecture.
    pub fn predict(molecular_weight: f64, arch: &ArchitectureProperties) -> BiologicalOutcomes {
        let m = molecular_weight / 100_000.0;
        let porosity = arch.porosity;
        let fiber = arch.fiber_diameter;
        let modulus = arch.youngs_modulus;
        let pore = arch.pore_size;

        // Viability peaks near 100 kDa; open, porous mats help
        let cell_viability = bounded(
            90.0 + (porosity - 75.0) * 0.2 + pore * 0.3 - (m - 1.0).abs() * 1.5,
            85.0,
            98.0,
        );

        let proliferation_time = bounded(
            24.0 + (modulus - 50.0) * 0.12 + (fiber - 500.0) / 100.0 * 1.2 - (pore - 5.0) * 0.4,
            20.0,
            48.0,
        );

        // Chondrogenic matrix
        let gag_content = bounded(
            12.0 + m * 9.0 + (porosity - 75.0) * 0.3 + (pore - 5.0) * 0.8,
            5.0,
            45.0,
        );
        let col2_expression = bounded(1.0 + m * 2.2 + (modulus - 35.0) * 0.04, 1.0, 8.0);
        let aggrecan_expression = bounded(1.0 + m * 1.6 + (porosity - 75.0) * 0.05, 1.0, 6.0);
        let col1_col2_ratio = bounded(1.2 - m * 0.45 + (modulus - 60.0) * 0.02, 0.1, 2.5);

        // Drug release
        let burst_release = bounded(
            55.0 - m * 15.0 + (porosity - 75.0) * 0.8 - (fiber - 400.0) / 100.0 * 1.5,
            15.0,
            75.0,
        );
        let sustained_duration = bounded(
            7.0 + m * 6.0 - (porosity - 75.0) * 0.25 + (fiber - 400.0) / 100.0 * 0.8,
            3.0,
            28.0,
        );

        BiologicalOutcomes {
            cell_viability,
            proliferation_time,
            gag_content,
            col2_expression,
            aggrecan_expression,
            col1_col2_ratio,
            msc_lineage: MscLineage::from_modulus(modulus),
            burst_release,
            sustained_duration,
        }
    }
}
