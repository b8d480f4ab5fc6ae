//! Serde view over the IBM backend-properties export.
//!
//! Matches the JSON emitted by IBM's `BackendProperties` snapshots:
//! a `qubits` array with one parameter list per qubit (`T1`, `T2`,
//! `readout_error`, `readout_length`, ...) and a `gates` array with one
//! entry per gate per qubit tuple (`gate_error`, `gate_length`). Every
//! parameter carries its own unit string; IBM exports T1/T2 in
//! microseconds and gate lengths in nanoseconds, so the provider
//! normalizes through [`Parameter::value_ns`].

// Fields are deserialized to mirror the export even where the
// provider does not consume them yet.
#![allow(dead_code)]

use serde::Deserialize;

use kvasir_device::{DeviceError, DeviceResult};

/// One named, unit-tagged calibration parameter.
#[derive(Debug, Deserialize)]
pub struct Parameter {
    /// Parameter name (`"T1"`, `"gate_error"`, `"readout_length"`, ...).
    pub name: String,
    /// Parameter value in the unit given by `unit`.
    pub value: f64,
    /// Unit string; empty for dimensionless parameters.
    pub unit: String,
    /// Timestamp of the measurement.
    #[serde(default)]
    pub date: Option<String>,
}

impl Parameter {
    /// The value converted to nanoseconds.
    ///
    /// # Errors
    ///
    /// [`DeviceError::Schema`] for a unit this adapter does not know —
    /// a silent wrong-unit passthrough would corrupt every downstream
    /// cost model.
    pub fn value_ns(&self) -> DeviceResult<f64> {
        let factor = match self.unit.as_str() {
            "s" => 1e9,
            "ms" => 1e6,
            "us" | "µs" => 1e3,
            "ns" => 1.0,
            other => {
                return Err(DeviceError::Schema(format!(
                    "unknown time unit '{other}' for parameter '{}'",
                    self.name
                )));
            }
        };
        Ok(self.value * factor)
    }
}

/// Calibration entry for one gate on one qubit tuple.
#[derive(Debug, Deserialize)]
pub struct GateProperties {
    /// Gate name (`"sx"`, `"cx"`, ...).
    pub gate: String,
    /// Qubits the entry applies to; two entries for a directed pair.
    pub qubits: Vec<u32>,
    /// Parameters, typically `gate_error` and `gate_length`.
    pub parameters: Vec<Parameter>,
    /// Instance name (e.g. `"cx0_1"`).
    #[serde(default)]
    pub name: Option<String>,
}

/// Complete IBM backend-properties export.
#[derive(Debug, Deserialize)]
pub struct IbmCalibration {
    /// Backend name (e.g. `"ibm_montreal"`).
    pub backend_name: String,
    /// Properties schema version.
    pub backend_version: String,
    /// Snapshot timestamp.
    pub last_update_date: String,
    /// One parameter list per qubit; the qubit index is the position.
    pub qubits: Vec<Vec<Parameter>>,
    /// One entry per gate per qubit tuple.
    pub gates: Vec<GateProperties>,
    /// Device-wide parameters (unused here).
    #[serde(default)]
    pub general: Vec<Parameter>,
}

/// Find a parameter by name in a parameter list.
pub fn find_parameter<'a>(parameters: &'a [Parameter], name: &str) -> Option<&'a Parameter> {
    parameters.iter().find(|p| p.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_ns_conversions() {
        let t1 = Parameter {
            name: "T1".into(),
            value: 100.0,
            unit: "us".into(),
            date: None,
        };
        assert_eq!(t1.value_ns().unwrap(), 1e5);

        let length = Parameter {
            name: "gate_length".into(),
            value: 35.5,
            unit: "ns".into(),
            date: None,
        };
        assert_eq!(length.value_ns().unwrap(), 35.5);
    }

    #[test]
    fn test_unknown_unit_rejected() {
        let p = Parameter {
            name: "T1".into(),
            value: 1.0,
            unit: "fortnights".into(),
            date: None,
        };
        assert!(matches!(p.value_ns(), Err(DeviceError::Schema(_))));
    }

    #[test]
    fn test_deserialize_export() {
        let raw = r#"{
            "backend_name": "ibm_montreal",
            "backend_version": "2.4.8",
            "last_update_date": "2023-01-12T04:36:17Z",
            "qubits": [[
                {"name": "T1", "value": 100.2, "unit": "us", "date": "2023-01-12T01:00:00Z"},
                {"name": "T2", "value": 80.1, "unit": "us"},
                {"name": "readout_error", "value": 0.015, "unit": ""},
                {"name": "readout_length", "value": 5000, "unit": "ns"}
            ]],
            "gates": [{
                "gate": "sx",
                "qubits": [0],
                "parameters": [
                    {"name": "gate_error", "value": 0.0003, "unit": ""},
                    {"name": "gate_length", "value": 35.5, "unit": "ns"}
                ],
                "name": "sx0"
            }],
            "general": []
        }"#;
        let cal: IbmCalibration = serde_json::from_str(raw).unwrap();
        assert_eq!(cal.backend_name, "ibm_montreal");
        assert_eq!(cal.qubits.len(), 1);
        assert_eq!(cal.gates[0].gate, "sx");
        assert!(find_parameter(&cal.qubits[0], "T1").is_some());
        assert!(find_parameter(&cal.qubits[0], "frequency").is_none());
    }
}
