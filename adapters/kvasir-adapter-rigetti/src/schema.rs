//! Serde view over the Rigetti QCS specs export.
//!
//! Matches the QCS device-specs JSON: a `specs` object with a `1Q`
//! table keyed by qubit index string and a `2Q` table keyed by an
//! undirected `"a-b"` pair string, plus class-level gate timing.
//! QCS exports coherence times in seconds; `timing` is in nanoseconds.

// Fields are deserialized to mirror the export even where the
// provider does not consume them yet.
#![allow(dead_code)]

use std::collections::BTreeMap;

use serde::Deserialize;

/// Specs for one qubit.
#[derive(Debug, Deserialize)]
pub struct OneQubitSpecs {
    /// Single-qubit randomized-benchmarking fidelity.
    #[serde(rename = "f1QRB")]
    pub f_1q_rb: f64,
    /// Readout fidelity.
    #[serde(rename = "fRO")]
    pub f_ro: f64,
    /// T1 relaxation time (seconds).
    #[serde(rename = "T1")]
    pub t1: f64,
    /// T2 dephasing time (seconds).
    #[serde(rename = "T2")]
    pub t2: f64,
}

/// Specs for one undirected qubit pair.
#[derive(Debug, Deserialize)]
pub struct TwoQubitSpecs {
    /// CZ gate fidelity.
    #[serde(rename = "fCZ")]
    pub f_cz: f64,
}

/// The per-qubit and per-pair spec tables.
#[derive(Debug, Deserialize)]
pub struct Specs {
    /// Keyed by qubit index as a string (`"0"`, `"1"`, ...).
    #[serde(rename = "1Q")]
    pub one_qubit: BTreeMap<String, OneQubitSpecs>,
    /// Keyed by an undirected `"a-b"` pair string (`"0-1"`, ...). CZ is
    /// symmetric, so the provider expands every pair to both directions.
    #[serde(rename = "2Q")]
    pub two_qubit: BTreeMap<String, TwoQubitSpecs>,
}

/// Class-level gate timing, in nanoseconds.
#[derive(Debug, Deserialize)]
pub struct Timing {
    /// Single-qubit gate duration.
    #[serde(rename = "1q")]
    pub one_qubit: f64,
    /// Two-qubit gate duration.
    #[serde(rename = "2q")]
    pub two_qubit: f64,
    /// Readout duration.
    pub readout: f64,
}

/// Complete Rigetti QCS specs export for one backend.
#[derive(Debug, Deserialize)]
pub struct RigettiCalibration {
    /// Backend name (e.g. `"aspen-m2"`).
    pub name: String,
    /// Qubit count.
    pub num_qubits: u32,
    /// Spec tables.
    pub specs: Specs,
    /// Class-level timing.
    pub timing: Timing,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_export() {
        let raw = r#"{
            "name": "aspen-m2",
            "num_qubits": 2,
            "specs": {
                "1Q": {
                    "0": {"f1QRB": 0.998, "fRO": 0.95, "T1": 2.3e-5, "T2": 1.8e-5},
                    "1": {"f1QRB": 0.997, "fRO": 0.94, "T1": 2.1e-5, "T2": 1.6e-5}
                },
                "2Q": {
                    "0-1": {"fCZ": 0.91}
                }
            },
            "timing": {"1q": 40, "2q": 240, "readout": 1760}
        }"#;
        let cal: RigettiCalibration = serde_json::from_str(raw).unwrap();
        assert_eq!(cal.name, "aspen-m2");
        assert_eq!(cal.specs.one_qubit["0"].f_1q_rb, 0.998);
        assert_eq!(cal.specs.two_qubit["0-1"].f_cz, 0.91);
        assert_eq!(cal.timing.two_qubit, 240.0);
    }
}
