// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
//
//! scaffold_predict: CLI binary for full scaffold prediction
//!
//! Takes process inputs as JSON on stdin, as --json, or as a named --preset,
//! runs the whole pipeline (architecture, biology, suitability, charts), and
//! writes the response JSON to stdout.
//!
//! Usage:
//!   echo '{"molecularWeight":124000,"concentration":10}' | scaffold_predict
//!   scaffold_predict --json '{"molecularWeight":60000,"concentration":8}' --pretty
//!   scaffold_predict --preset CartilageOptimal --config kernel.toml
//!
//! Logs go to stderr; set RUST_LOG=scaffold_core=debug to see each recompute.

use clap::Parser;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use scaffold_core::config::PredictionConfig;
use scaffold_core::error::PredictionError;
use scaffold_core::prediction_kernel::PredictionKernel;
use scaffold_core::science::presets::PresetRegistry;
use scaffold_core::science::process::ProcessInputs;

#[derive(Parser, Debug)]
#[command(name = "scaffold_predict", version, about = "Predict electrospun PVA scaffold properties")]
struct Args {
    /// Process inputs as a JSON object (read from stdin when neither this nor --preset is given)
    #[arg(long, conflicts_with = "preset")]
    json: Option<String>,

    /// Named process preset
    #[arg(long)]
    preset: Option<String>,

    /// Kernel configuration file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Reject inputs outside the calibrated process domain
    #[arg(long)]
    strict: bool,

    /// Skip the chart datasets
    #[arg(long)]
    no_charts: bool,

    /// Pretty-print the output
    #[arg(long)]
    pretty: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("scaffold_core=info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(out) => {
            println!("{}", out);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("ERROR: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<String, PredictionError> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| PredictionError::Config(format!("{}: {}", path.display(), e)))?;
            PredictionConfig::from_toml_str(&text)?
        }
        None => PredictionConfig::default(),
    };
    if args.strict {
        config.enforce_domain = true;
    }
    if args.no_charts {
        config.include_charts = false;
    }

    let inputs = read_inputs(args)?;
    PredictionKernel::respond(&inputs, &config)?.to_json(args.pretty)
}

fn read_inputs(args: &Args) -> Result<ProcessInputs, PredictionError> {
    if let Some(id) = &args.preset {
        return PresetRegistry::get_standard(id).ok_or_else(|| {
            PredictionError::Config(format!(
                "unknown preset '{}' (available: {})",
                id,
                PresetRegistry::IDS.join(", ")
            ))
        });
    }

    let text = match &args.json {
        Some(j) => j.clone(),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    if text.trim().is_empty() {
        return Ok(ProcessInputs::default());
    }
    Ok(serde_json::from_str(&text)?)
}
