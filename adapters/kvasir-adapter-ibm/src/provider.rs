//! IBM provider: normalization of backend-properties exports.
//!
//! Normalization rules for IBM superconducting backends:
//!
//! - qubit count is the length of the `qubits` array; connectivity is
//!   collected from the two-qubit gate entries, directed exactly as
//!   listed (IBM exports each supported direction as its own entry);
//! - per-gate fidelity is `1 - gate_error`; durations come from
//!   `gate_length`, coherence times from `T1`/`T2`, all normalized to
//!   nanoseconds via the per-parameter unit tags;
//! - readout fidelity is `1 - readout_error`;
//! - `rz` is a virtual frame change with no physical pulse — always
//!   recorded as fidelity 1, duration 0 on every qubit, whatever the
//!   export lists for it.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::debug;

use kvasir_device::{
    Device, DeviceCalibration, DeviceError, DeviceResult, Provider, default_calibration_dir,
    read_calibration,
};

use crate::schema::{IbmCalibration, Parameter, find_parameter};

fn required<'a>(
    parameters: &'a [Parameter],
    name: &str,
    context: &str,
) -> DeviceResult<&'a Parameter> {
    find_parameter(parameters, name)
        .ok_or_else(|| DeviceError::Schema(format!("missing parameter '{name}' for {context}")))
}

/// Provider for IBM Quantum superconducting devices.
#[derive(Debug, Clone)]
pub struct IbmProvider {
    calibration_dir: PathBuf,
}

impl IbmProvider {
    /// Create a provider reading from the default calibration root.
    pub fn new() -> Self {
        Self {
            calibration_dir: default_calibration_dir().join("ibm"),
        }
    }

    /// Create a provider reading from an explicit directory.
    pub fn with_calibration_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            calibration_dir: dir.into(),
        }
    }
}

impl Default for IbmProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl Provider for IbmProvider {
    fn provider_name(&self) -> &'static str {
        "ibm"
    }

    fn get_available_device_names(&self) -> Vec<&'static str> {
        vec!["ibm_washington", "ibm_montreal"]
    }

    fn get_max_qubits(&self) -> u32 {
        127
    }

    fn calibration_dir(&self) -> &Path {
        &self.calibration_dir
    }

    fn import_backend(&self, path: &Path) -> DeviceResult<Device> {
        debug!(path = %path.display(), "importing IBM backend-properties export");
        let export: IbmCalibration = read_calibration(path)?;
        let num_qubits = export.qubits.len() as u32;

        let mut calibration = DeviceCalibration::new();
        for (qubit, parameters) in export.qubits.iter().enumerate() {
            let qubit = qubit as u32;
            let context = format!("qubit {qubit}");
            calibration
                .t1
                .insert(qubit, required(parameters, "T1", &context)?.value_ns()?);
            calibration
                .t2
                .insert(qubit, required(parameters, "T2", &context)?.value_ns()?);
            calibration.readout_fidelity.insert(
                qubit,
                1.0 - required(parameters, "readout_error", &context)?.value,
            );
            calibration.readout_duration.insert(
                qubit,
                required(parameters, "readout_length", &context)?.value_ns()?,
            );
        }

        let mut coupling_map = BTreeSet::new();
        for entry in &export.gates {
            if entry.gate == "reset" {
                // Calibrated by IBM but not part of the gate basis.
                continue;
            }
            match *entry.qubits.as_slice() {
                [qubit] => {
                    if entry.gate == "rz" {
                        // Injected uniformly below.
                        continue;
                    }
                    let context = format!("gate '{}' on qubit {qubit}", entry.gate);
                    let error = required(&entry.parameters, "gate_error", &context)?.value;
                    let length =
                        required(&entry.parameters, "gate_length", &context)?.value_ns()?;
                    calibration
                        .single_qubit_gate_fidelity
                        .entry(qubit)
                        .or_default()
                        .insert(entry.gate.clone(), 1.0 - error);
                    calibration
                        .single_qubit_gate_duration
                        .entry(qubit)
                        .or_default()
                        .insert(entry.gate.clone(), length);
                }
                [control, target] => {
                    // Directed exactly as exported; IBM lists each
                    // supported direction as its own entry.
                    coupling_map.insert((control, target));
                    let context =
                        format!("gate '{}' on edge ({control}, {target})", entry.gate);
                    let error = required(&entry.parameters, "gate_error", &context)?.value;
                    let length =
                        required(&entry.parameters, "gate_length", &context)?.value_ns()?;
                    calibration
                        .two_qubit_gate_fidelity
                        .entry((control, target))
                        .or_default()
                        .insert(entry.gate.clone(), 1.0 - error);
                    calibration
                        .two_qubit_gate_duration
                        .entry((control, target))
                        .or_default()
                        .insert(entry.gate.clone(), length);
                }
                ref other => {
                    return Err(DeviceError::Schema(format!(
                        "gate '{}' applies to {} qubits; expected 1 or 2",
                        entry.gate,
                        other.len()
                    )));
                }
            }
        }

        // rz is a virtual frame change: perfect and instantaneous on
        // every qubit, regardless of what the export lists for it.
        for qubit in 0..num_qubits {
            calibration
                .single_qubit_gate_fidelity
                .entry(qubit)
                .or_default()
                .insert("rz".to_string(), 1.0);
            calibration
                .single_qubit_gate_duration
                .entry(qubit)
                .or_default()
                .insert("rz".to_string(), 0.0);
        }

        let device = Device {
            name: export.backend_name,
            num_qubits,
            basis_gates: ["id", "rz", "sx", "x", "cx", "measure", "barrier"]
                .map(String::from)
                .to_vec(),
            coupling_map,
            calibration,
        };
        device.validate()?;
        debug!(device = %device.name, num_qubits = device.num_qubits, "imported IBM device");
        Ok(device)
    }
}
