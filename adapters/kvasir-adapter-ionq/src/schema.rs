//! Serde view over the IonQ characterization export.
//!
//! Field names and nesting follow the IonQ characterizations API
//! (<https://docs.ionq.com/#tag/characterizations>) exactly. Fidelity
//! and timing are reported once per rotation class (`1q`, `2q`), not
//! per qubit — the provider fans them out uniformly. All timing values
//! are exported in nanoseconds.

// Fields are deserialized to mirror the export even where the
// provider does not consume them yet.
#![allow(dead_code)]

use serde::Deserialize;

/// One aggregated statistic from the characterization run.
#[derive(Debug, Deserialize)]
pub struct Statistics {
    /// Mean over the characterization run.
    pub mean: f64,
}

/// Class-level fidelity figures.
#[derive(Debug, Deserialize)]
pub struct Fidelity {
    /// Single-qubit rotation class.
    #[serde(rename = "1q")]
    pub one_qubit: Statistics,
    /// Two-qubit (Mølmer-Sørensen) class.
    #[serde(rename = "2q")]
    pub two_qubit: Statistics,
    /// State preparation and measurement.
    pub spam: Statistics,
}

/// Class-level timing figures, in nanoseconds.
#[derive(Debug, Deserialize)]
pub struct Timing {
    /// T1 relaxation time.
    pub t1: f64,
    /// T2 dephasing time.
    pub t2: f64,
    /// Single-qubit gate duration.
    #[serde(rename = "1q")]
    pub one_qubit: f64,
    /// Two-qubit gate duration.
    #[serde(rename = "2q")]
    pub two_qubit: f64,
    /// Readout duration.
    pub readout: f64,
    /// Reset duration.
    pub reset: f64,
}

/// Complete IonQ characterization export for one backend.
#[derive(Debug, Deserialize)]
pub struct IonqCalibration {
    /// Backend name (e.g. `"harmony"`).
    pub backend: String,
    /// Unordered connectivity pairs. The MS gate is symmetric, so the
    /// provider expands every pair to both directions.
    pub connectivity: Vec<(u32, u32)>,
    /// Characterization timestamp (unix epoch).
    pub date: i64,
    /// Class-level fidelities.
    pub fidelity: Fidelity,
    /// Characterization id.
    pub id: String,
    /// Qubit count.
    pub qubits: u32,
    /// Class-level timing.
    pub timing: Timing,
}
