// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT

//! Errors surfaced by the prediction kernel.
//!
//! The formula stages themselves are total; these only arise at the input
//! boundary (JSON hydration, non-finite values, strict-domain mode), while
//! writing the response, and while loading configuration.

use crate::science::process::Parameter;

#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
    #[error("failed to parse process inputs: {0}")]
    InvalidInput(#[from] serde_json::Error),

    #[error("{parameter} must be a finite number, got {value}")]
    NonFiniteInput { parameter: Parameter, value: f64 },

    #[error("{parameter} = {value} is outside the process domain [{min}, {max}]")]
    OutOfDomain {
        parameter: Parameter,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("failed to serialize prediction: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for PredictionError {
    fn from(e: toml::de::Error) -> Self {
        PredictionError::Config(e.to_string())
    }
}
