//! Serde view over the OQC calibration export.
//!
//! Field names follow the OQC export exactly, including the camelCase
//! `qubitCount` and the uppercase property names (`T1`, `fRB`, `fCX`).
//! Per-qubit properties are keyed by the qubit index as a string;
//! per-edge properties by a `"control-target"` composite string.
//! Coherence times are exported in nanoseconds.

// Fields are deserialized to mirror the export even where the
// provider does not consume them yet.
#![allow(dead_code)]

use std::collections::BTreeMap;

use serde::Deserialize;

/// Calibration figures for one qubit.
#[derive(Debug, Deserialize)]
pub struct QubitProperties {
    /// T1 relaxation time (ns).
    #[serde(rename = "T1")]
    pub t1: f64,
    /// T2 dephasing time (ns).
    #[serde(rename = "T2")]
    pub t2: f64,
    /// Randomized-benchmarking fidelity of the single-qubit gates.
    #[serde(rename = "fRB")]
    pub f_rb: f64,
    /// Readout fidelity.
    #[serde(rename = "fRO")]
    pub f_ro: f64,
    /// Qubit index, redundantly repeated inside the record.
    pub qubit: f64,
}

/// Directed coupling of one two-qubit entry.
#[derive(Debug, Deserialize)]
pub struct Coupling {
    /// Control qubit.
    pub control_qubit: f64,
    /// Target qubit.
    pub target_qubit: f64,
}

/// Calibration figures for one directed two-qubit gate.
#[derive(Debug, Deserialize)]
pub struct TwoQubitProperties {
    /// Coupling this entry calibrates.
    pub coupling: Coupling,
    /// ECR gate fidelity.
    #[serde(rename = "fCX")]
    pub f_cx: f64,
}

/// Per-qubit and per-edge property tables.
#[derive(Debug, Deserialize)]
pub struct Properties {
    /// Keyed by qubit index as a string (`"0"`, `"1"`, ...).
    pub one_qubit: BTreeMap<String, QubitProperties>,
    /// Keyed by `"control-target"` (`"0-1"`, ...).
    pub two_qubit: BTreeMap<String, TwoQubitProperties>,
}

/// Complete OQC calibration export for one backend.
#[derive(Debug, Deserialize)]
pub struct OqcCalibration {
    /// Backend name (e.g. `"lucy"`).
    pub name: String,
    /// Qubit count.
    #[serde(rename = "qubitCount")]
    pub qubit_count: u32,
    /// Directed connectivity pairs, kept exactly as listed — the ECR
    /// gate is direction-sensitive.
    pub connectivity: Vec<(u32, u32)>,
    /// Calibration tables.
    pub properties: Properties,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_export() {
        let raw = r#"{
            "name": "lucy",
            "qubitCount": 2,
            "connectivity": [[0, 1]],
            "properties": {
                "one_qubit": {
                    "0": {"T1": 1.2e4, "T2": 8.0e3, "fRB": 0.995, "fRO": 0.93, "qubit": 0},
                    "1": {"T1": 1.1e4, "T2": 7.5e3, "fRB": 0.994, "fRO": 0.92, "qubit": 1}
                },
                "two_qubit": {
                    "0-1": {
                        "coupling": {"control_qubit": 0, "target_qubit": 1},
                        "fCX": 0.97
                    }
                }
            }
        }"#;
        let cal: OqcCalibration = serde_json::from_str(raw).unwrap();
        assert_eq!(cal.name, "lucy");
        assert_eq!(cal.qubit_count, 2);
        assert_eq!(cal.properties.one_qubit["0"].f_rb, 0.995);
        assert_eq!(cal.properties.two_qubit["0-1"].f_cx, 0.97);
    }

    #[test]
    fn test_snake_case_qubit_count_rejected() {
        let raw = r#"{"name": "lucy", "qubit_count": 2, "connectivity": [],
                      "properties": {"one_qubit": {}, "two_qubit": {}}}"#;
        assert!(serde_json::from_str::<OqcCalibration>(raw).is_err());
    }
}
