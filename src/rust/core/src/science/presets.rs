// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// Standard process presets (named slider positions)

use crate::science::process::ProcessInputs;

pub struct PresetRegistry;

impl PresetRegistry {
    pub const IDS: [&'static str; 5] = [
        "Reference",
        "LowMwBeaded",
        "CartilageOptimal",
        "HighMwRibbon",
        "NerveGuidance",
    ];

    /// Retrieve a standard process preset by ID
    /// Supports: "Reference", "LowMwBeaded", "CartilageOptimal", "HighMwRibbon", "NerveGuidance"
    pub fn get_standard(id: &str) -> Option<ProcessInputs> {
        match id {
            "Reference" => Some(ProcessInputs::default()),
            // Short chains below the entanglement threshold: Rayleigh breakup into beads
            "LowMwBeaded" => Some(ProcessInputs::new(50_000.0, 7.0, 17.5, 1.5, 15.0)),
            "CartilageOptimal" => Some(ProcessInputs::new(124_000.0, 10.0, 18.0, 1.0, 15.0)),
            // Viscous dope, jet collapses on the collector
            "HighMwRibbon" => Some(ProcessInputs::new(186_000.0, 12.0, 15.0, 2.5, 12.0)),
            // Thin, compliant fibers for aligned neurite outgrowth
            "NerveGuidance" => Some(ProcessInputs::new(61_000.0, 9.0, 22.0, 0.8, 18.0)),
            _ => None,
        }
    }
}
