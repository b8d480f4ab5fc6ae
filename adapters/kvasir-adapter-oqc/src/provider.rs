//! OQC provider: normalization of calibration exports.
//!
//! Normalization rules for OQC superconducting backends:
//!
//! - connectivity pairs are *directed* and kept exactly as listed —
//!   the native ECR gate is direction-sensitive, so no reverse edges
//!   are synthesized;
//! - single-qubit fidelity is the per-qubit `fRB` figure, applied to
//!   each of `rz`, `sx`, `x`;
//! - two-qubit fidelity is the per-edge `fCX` figure, keyed in the
//!   export by a `"control-target"` composite string;
//! - every basis gate is physically calibrated: no virtual gates;
//! - the export carries no gate durations, so the duration tables
//!   stay empty.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use tracing::debug;

use kvasir_device::{
    Device, DeviceCalibration, DeviceError, DeviceResult, Provider, default_calibration_dir,
    read_calibration,
};

use crate::schema::OqcCalibration;

/// Single-qubit gates covered by the `fRB` figure.
const CALIBRATED_1Q_GATES: [&str; 3] = ["rz", "sx", "x"];

/// Provider for OQC superconducting devices.
#[derive(Debug, Clone)]
pub struct OqcProvider {
    calibration_dir: PathBuf,
}

impl OqcProvider {
    /// Create a provider reading from the default calibration root.
    pub fn new() -> Self {
        Self {
            calibration_dir: default_calibration_dir().join("oqc"),
        }
    }

    /// Create a provider reading from an explicit directory.
    pub fn with_calibration_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            calibration_dir: dir.into(),
        }
    }
}

impl Default for OqcProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl Provider for OqcProvider {
    fn provider_name(&self) -> &'static str {
        "oqc"
    }

    fn get_available_device_names(&self) -> Vec<&'static str> {
        vec!["lucy"]
    }

    fn get_max_qubits(&self) -> u32 {
        8
    }

    fn calibration_dir(&self) -> &Path {
        &self.calibration_dir
    }

    fn import_backend(&self, path: &Path) -> DeviceResult<Device> {
        debug!(path = %path.display(), "importing OQC calibration export");
        let export: OqcCalibration = read_calibration(path)?;

        // ECR is direction-sensitive: keep edges exactly as exported.
        let coupling_map: BTreeSet<_> = export.connectivity.iter().copied().collect();

        let mut calibration = DeviceCalibration::new();
        for qubit in 0..export.qubit_count {
            let props = export
                .properties
                .one_qubit
                .get(&qubit.to_string())
                .ok_or_else(|| {
                    DeviceError::Schema(format!("missing one_qubit entry for qubit {qubit}"))
                })?;

            calibration.single_qubit_gate_fidelity.insert(
                qubit,
                CALIBRATED_1Q_GATES
                    .iter()
                    .map(|&gate| (gate.to_string(), props.f_rb))
                    .collect(),
            );
            calibration.readout_fidelity.insert(qubit, props.f_ro);
            calibration.t1.insert(qubit, props.t1);
            calibration.t2.insert(qubit, props.t2);
        }

        for &(control, target) in &coupling_map {
            let key = format!("{control}-{target}");
            // A declared edge the export does not calibrate is a
            // data-integrity failure, not a default-to-zero case.
            let props = export.properties.two_qubit.get(&key).ok_or(
                DeviceError::MissingEdgeCalibration {
                    device: export.name.clone(),
                    control,
                    target,
                },
            )?;
            calibration.two_qubit_gate_fidelity.insert(
                (control, target),
                BTreeMap::from([("ecr".to_string(), props.f_cx)]),
            );
        }

        let device = Device {
            name: export.name,
            num_qubits: export.qubit_count,
            basis_gates: ["rz", "sx", "x", "ecr", "measure"].map(String::from).to_vec(),
            coupling_map,
            calibration,
        };
        device.validate()?;
        debug!(device = %device.name, num_qubits = device.num_qubits, "imported OQC device");
        Ok(device)
    }
}
