// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto

//! Prediction Kernel Tests
//!
//! End-to-end checks through the JSON boundary the dashboard uses.

use crate::config::PredictionConfig;
use crate::prediction_kernel::PredictionKernel;
use serde_json::json;

fn compute(inputs: serde_json::Value) -> serde_json::Value {
    let out = PredictionKernel::compute_json(&inputs.to_string());
    serde_json::from_str(&out).unwrap()
}

#[test]
fn test_reference_case_through_json() {
    let response = compute(json!({
        "molecularWeight": 100000, "concentration": 10,
        "voltage": 17.5, "flowRate": 1.5, "distance": 15
    }));
    let arch = &response["result"]["architecture"];

    assert_eq!(arch["fiberDiameter"].as_f64().unwrap(), 400.0);
    assert!((arch["porosity"].as_f64().unwrap() - 85.0).abs() < 1e-9);
    assert!((arch["tensileStrength"].as_f64().unwrap() - 7.7).abs() < 1e-9);
    assert_eq!(arch["youngsModulus"].as_f64().unwrap(), 85.0);
    assert!((arch["swellingRatio"].as_f64().unwrap() - 92.0).abs() < 1e-9);
    assert_eq!(arch["morphology"], "optimal uniform");
    assert_eq!(arch["concentrationWindow"]["inWindow"], true);
    assert_eq!(arch["concentrationWindow"]["tier"], "medium");

    assert_eq!(response["result"]["biology"]["mscLineage"]["lineage"], "osteogenic");
    assert_eq!(response["events"].as_array().unwrap().len(), 0);
    assert_eq!(response["fingerprint"].as_str().unwrap().len(), 64);
}

#[test]
fn test_beaded_low_mw_through_json() {
    let response = compute(json!({ "molecularWeight": 60000, "concentration": 8 }));
    assert_eq!(response["result"]["architecture"]["morphology"], "beaded");

    let topics: Vec<&str> = response["events"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|e| e["topic"].as_str())
        .collect();
    assert!(topics.contains(&"ARCHITECTURE.MORPHOLOGY"));
}

#[test]
fn test_chart_payload_shape() {
    let response = compute(json!({ "molecularWeight": 124000, "concentration": 10 }));
    let charts = &response["result"]["charts"];

    assert_eq!(charts["mwComparison"].as_array().unwrap().len(), 8);
    let trade_off = charts["tradeOff"].as_array().unwrap();
    assert_eq!(trade_off.len(), 9);
    let current: Vec<f64> = trade_off
        .iter()
        .filter(|p| p["current"] == true)
        .map(|p| p["molecularWeight"].as_f64().unwrap())
        .collect();
    assert_eq!(current, vec![130_000.0]);

    let profile = charts["degradationProfile"].as_array().unwrap();
    assert_eq!(profile.len(), 17);
    assert_eq!(profile[0]["massRemaining"].as_f64().unwrap(), 100.0);
    assert_eq!(profile[0]["mechanicalRetention"].as_f64().unwrap(), 100.0);
}

#[test]
fn test_malformed_json_returns_error_object() {
    let out = PredictionKernel::compute_json("{ not json");
    let response: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert!(response["error"].as_str().unwrap().contains("parse"));
}

#[test]
fn test_strict_config_error_object() {
    let config = PredictionConfig::strict();
    let out = PredictionKernel::compute_json_with_config(r#"{"voltage": 40}"#, &config);
    let response: serde_json::Value = serde_json::from_str(&out).unwrap();
    let message = response["error"].as_str().unwrap();
    assert!(message.contains("voltage"), "{}", message);
}

#[test]
fn test_identical_inputs_identical_output() {
    let inputs = json!({
        "molecularWeight": 146000, "concentration": 11.5,
        "voltage": 21, "flowRate": 0.9, "distance": 19
    });
    let a = compute(inputs.clone());
    let b = compute(inputs);
    assert_eq!(a["result"], b["result"]);
    assert_eq!(a["fingerprint"], b["fingerprint"]);
}
