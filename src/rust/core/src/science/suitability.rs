// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// SuitabilityEngine: multiplicative application and cell-type scoring.
//
// Every score starts at 100 and is multiplied by one factor per criterion.
// A met criterion contributes 1.0; an unmet one contributes a fixed penalty
// or a shortfall ratio. Products are capped at 100 and never floored.

use crate::formulas::{gate, suitability};
use crate::science::architecture::ArchitectureProperties;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Application {
    CartilageTissueEngineering,
    WoundDressing,
    DrugDelivery,
    NerveGuidanceConduit,
    BoneTissueEngineering,
    SkinRegeneration,
}

impl Application {
    pub const ALL: [Application; 6] = [
        Application::CartilageTissueEngineering,
        Application::WoundDressing,
        Application::DrugDelivery,
        Application::NerveGuidanceConduit,
        Application::BoneTissueEngineering,
        Application::SkinRegeneration,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Application::CartilageTissueEngineering => "Cartilage Tissue Engineering",
            Application::WoundDressing => "Wound Dressing",
            Application::DrugDelivery => "Drug Delivery",
            Application::NerveGuidanceConduit => "Nerve Guidance Conduit",
            Application::BoneTissueEngineering => "Bone Tissue Engineering",
            Application::SkinRegeneration => "Skin Regeneration",
        }
    }

    fn factors(&self, a: &ArchitectureProperties) -> Vec<f64> {
        match self {
            Application::CartilageTissueEngineering => vec![
                gate((40.0..=85.0).contains(&a.youngs_modulus), 0.7),
                gate(a.pore_size >= 5.0, a.pore_size / 5.0),
                gate(a.porosity >= 80.0, 0.85),
                gate(a.swelling_ratio >= 85.0, 0.9),
            ],
            Application::WoundDressing => vec![
                gate(a.water_absorption >= 600.0, a.water_absorption / 600.0),
                gate(a.porosity >= 80.0, 0.8),
                gate(a.contact_angle <= 55.0, 0.85),
            ],
            Application::DrugDelivery => vec![
                gate((6.0..=15.0).contains(&a.degradation_rate), 0.75),
                gate(a.fiber_diameter <= 800.0, 0.8),
                gate(a.swelling_ratio >= 85.0, 0.9),
            ],
            Application::NerveGuidanceConduit => vec![
                gate(a.fiber_diameter <= 500.0, 500.0 / a.fiber_diameter),
                gate(a.youngs_modulus <= 40.0, 0.6),
                gate(a.tensile_strength >= 3.0, 0.8),
            ],
            Application::BoneTissueEngineering => vec![
                gate(a.youngs_modulus >= 60.0, a.youngs_modulus / 60.0),
                gate(a.tensile_strength >= 8.0, a.tensile_strength / 8.0),
                gate(a.pore_size >= 8.0, 0.8),
                gate(a.degradation_rate <= 10.0, 0.85),
            ],
            Application::SkinRegeneration => vec![
                gate(a.porosity >= 75.0, 0.8),
                gate(a.tensile_strength >= 5.0, a.tensile_strength / 5.0),
                gate(a.water_absorption >= 500.0, 0.85),
                gate(a.contact_angle <= 60.0, 0.9),
            ],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CellType {
    Chondrocytes,
    MesenchymalStemCells,
    Fibroblasts,
    Osteoblasts,
    SchwannCells,
    Keratinocytes,
}

impl CellType {
    pub const ALL: [CellType; 6] = [
        CellType::Chondrocytes,
        CellType::MesenchymalStemCells,
        CellType::Fibroblasts,
        CellType::Osteoblasts,
        CellType::SchwannCells,
        CellType::Keratinocytes,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CellType::Chondrocytes => "Chondrocytes",
            CellType::MesenchymalStemCells => "Mesenchymal Stem Cells",
            CellType::Fibroblasts => "Fibroblasts",
            CellType::Osteoblasts => "Osteoblasts",
            CellType::SchwannCells => "Schwann Cells",
            CellType::Keratinocytes => "Keratinocytes",
        }
    }

    fn factors(&self, a: &ArchitectureProperties) -> Vec<f64> {
        match self {
            CellType::Chondrocytes => vec![
                gate((35.0..=70.0).contains(&a.youngs_modulus), 0.75),
                gate(a.pore_size >= 5.0, a.pore_size / 5.0),
                gate(a.swelling_ratio >= 85.0, 0.9),
            ],
            CellType::MesenchymalStemCells => vec![
                gate(a.porosity >= 80.0, 0.85),
                gate(a.pore_size >= 4.0, a.pore_size / 4.0),
                gate(a.fiber_diameter <= 1000.0, 0.8),
            ],
            CellType::Fibroblasts => vec![
                gate(a.contact_angle <= 60.0, 0.8),
                gate(a.porosity >= 75.0, 0.85),
            ],
            CellType::Osteoblasts => vec![
                gate(a.youngs_modulus >= 60.0, a.youngs_modulus / 60.0),
                gate(a.pore_size >= 8.0, 0.75),
                gate(a.tensile_strength >= 6.0, 0.85),
            ],
            CellType::SchwannCells => vec![
                gate(a.fiber_diameter <= 600.0, 600.0 / a.fiber_diameter),
                gate(a.youngs_modulus <= 40.0, 0.65),
            ],
            CellType::Keratinocytes => vec![
                gate(a.contact_angle <= 55.0, 0.85),
                gate(a.water_absorption >= 550.0, 0.8),
                gate(a.porosity >= 70.0, 0.9),
            ],
        }
    }
}

/// Scores in declaration order of `Application::ALL`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationScores {
    pub cartilage_tissue_engineering: f64,
    pub wound_dressing: f64,
    pub drug_delivery: f64,
    pub nerve_guidance_conduit: f64,
    pub bone_tissue_engineering: f64,
    pub skin_regeneration: f64,
}

impl ApplicationScores {
    pub fn get(&self, application: Application) -> f64 {
        match application {
            Application::CartilageTissueEngineering => self.cartilage_tissue_engineering,
            Application::WoundDressing => self.wound_dressing,
            Application::DrugDelivery => self.drug_delivery,
            Application::NerveGuidanceConduit => self.nerve_guidance_conduit,
            Application::BoneTissueEngineering => self.bone_tissue_engineering,
            Application::SkinRegeneration => self.skin_regeneration,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Application, f64)> + '_ {
        Application::ALL.into_iter().map(move |a| (a, self.get(a)))
    }

    /// Highest-scoring application; the earlier one wins a tie.
    pub fn best(&self) -> (Application, f64) {
        best_of(self.iter(), Application::ALL[0])
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellScores {
    pub chondrocytes: f64,
    pub mesenchymal_stem_cells: f64,
    pub fibroblasts: f64,
    pub osteoblasts: f64,
    pub schwann_cells: f64,
    pub keratinocytes: f64,
}

impl CellScores {
    pub fn get(&self, cell: CellType) -> f64 {
        match cell {
            CellType::Chondrocytes => self.chondrocytes,
            CellType::MesenchymalStemCells => self.mesenchymal_stem_cells,
            CellType::Fibroblasts => self.fibroblasts,
            CellType::Osteoblasts => self.osteoblasts,
            CellType::SchwannCells => self.schwann_cells,
            CellType::Keratinocytes => self.keratinocytes,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (CellType, f64)> + '_ {
        CellType::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    pub fn best(&self) -> (CellType, f64) {
        best_of(self.iter(), CellType::ALL[0])
    }
}

fn best_of<K: Copy>(mut scores: impl Iterator<Item = (K, f64)>, first: K) -> (K, f64) {
    let mut best = scores.next().unwrap_or((first, f64::NEG_INFINITY));
    for (k, s) in scores {
        if s > best.1 {
            best = (k, s);
        }
    }
    best
}

pub struct SuitabilityEngine;

impl SuitabilityEngine {
    pub fn score_application(application: Application, arch: &ArchitectureProperties) -> f64 {
        suitability(&application.factors(arch))
    }

    pub fn score_cell(cell: CellType, arch: &ArchitectureProperties) -> f64 {
        suitability(&cell.factors(arch))
    }

    pub fn score_applications(arch: &ArchitectureProperties) -> ApplicationScores {
        let s = |a| Self::score_application(a, arch);
        ApplicationScores {
            cartilage_tissue_engineering: s(Application::CartilageTissueEngineering),
            wound_dressing: s(Application::WoundDressing),
            drug_delivery: s(Application::DrugDelivery),
            nerve_guidance_conduit: s(Application::NerveGuidanceConduit),
            bone_tissue_engineering: s(Application::BoneTissueEngineering),
            skin_regeneration: s(Application::SkinRegeneration),
        }
    }

    pub fn score_cells(arch: &ArchitectureProperties) -> CellScores {
        let s = |c| Self::score_cell(c, arch);
        CellScores {
            chondrocytes: s(CellType::Chondrocytes),
            mesenchymal_stem_cells: s(CellType::MesenchymalStemCells),
            fibroblasts: s(CellType::Fibroblasts),
            osteoblasts: s(CellType::Osteoblasts),
            schwann_cells: s(CellType::SchwannCells),
            keratinocytes: s(CellType::Keratinocytes),
        }
    }
}
