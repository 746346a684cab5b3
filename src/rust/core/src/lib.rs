// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// Electrospun PVA Scaffold Prediction Engine
// Process parameters -> architecture -> biology -> suitability, for Rust and WASM callers
//

pub mod config;
pub mod designer;
pub mod error;
pub mod formulas;
pub mod guardrails;
pub mod optimization;
pub mod prediction_kernel;
pub mod science;
#[cfg(test)]
pub mod tests_prediction;

// Re-export core types
pub use config::PredictionConfig;
pub use designer::ScaffoldDesigner;
pub use error::PredictionError;
pub use prediction_kernel::{Prediction, PredictionKernel, PredictionResponse};
pub use science::architecture::{ArchitectureEngine, ArchitectureProperties, Morphology, MwTier};
pub use science::biology::{BiologicalOutcomes, BiologyEngine, MscLineage};
pub use science::process::{Parameter, ProcessInputs};
pub use science::suitability::{ApplicationScores, CellScores, SuitabilityEngine};
