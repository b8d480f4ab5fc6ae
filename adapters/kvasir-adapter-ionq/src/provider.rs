//! IonQ provider: normalization of characterization exports.
//!
//! Normalization rules for IonQ trapped-ion backends:
//!
//! - connectivity pairs are unordered; the native Mølmer-Sørensen gate
//!   is symmetric, so every exported pair lands in the coupling map in
//!   both directions with identical calibration;
//! - fidelity/duration come as one scalar per rotation class (`1q`,
//!   `2q`) and are applied uniformly to every qubit and edge;
//! - `rz` is a virtual Z rotation with no physical pulse — recorded as
//!   fidelity 1, duration 0 on every qubit.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use tracing::debug;

use kvasir_device::{
    Device, DeviceCalibration, DeviceResult, Provider, default_calibration_dir, read_calibration,
};

use crate::schema::IonqCalibration;

/// Single-qubit gates carrying a physical pulse on IonQ hardware.
const CALIBRATED_1Q_GATES: [&str; 2] = ["rx", "ry"];

/// Provider for IonQ trapped-ion devices.
#[derive(Debug, Clone)]
pub struct IonqProvider {
    calibration_dir: PathBuf,
}

impl IonqProvider {
    /// Create a provider reading from the default calibration root.
    pub fn new() -> Self {
        Self {
            calibration_dir: default_calibration_dir().join("ionq"),
        }
    }

    /// Create a provider reading from an explicit directory.
    pub fn with_calibration_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            calibration_dir: dir.into(),
        }
    }
}

impl Default for IonqProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl Provider for IonqProvider {
    fn provider_name(&self) -> &'static str {
        "ionq"
    }

    fn get_available_device_names(&self) -> Vec<&'static str> {
        vec!["harmony", "aria"]
    }

    fn get_max_qubits(&self) -> u32 {
        23
    }

    fn calibration_dir(&self) -> &Path {
        &self.calibration_dir
    }

    fn import_backend(&self, path: &Path) -> DeviceResult<Device> {
        debug!(path = %path.display(), "importing IonQ characterization export");
        let export: IonqCalibration = read_calibration(path)?;

        let mut coupling_map = BTreeSet::new();
        for &(a, b) in &export.connectivity {
            // MS gate is symmetric: both directions are valid.
            coupling_map.insert((a, b));
            coupling_map.insert((b, a));
        }

        let mut calibration = DeviceCalibration::new();
        for qubit in 0..export.qubits {
            let mut fidelity: BTreeMap<String, f64> = CALIBRATED_1Q_GATES
                .iter()
                .map(|&gate| (gate.to_string(), export.fidelity.one_qubit.mean))
                .collect();
            let mut duration: BTreeMap<String, f64> = CALIBRATED_1Q_GATES
                .iter()
                .map(|&gate| (gate.to_string(), export.timing.one_qubit))
                .collect();
            // rz is a virtual Z rotation: perfect and instantaneous.
            fidelity.insert("rz".to_string(), 1.0);
            duration.insert("rz".to_string(), 0.0);

            calibration.single_qubit_gate_fidelity.insert(qubit, fidelity);
            calibration.single_qubit_gate_duration.insert(qubit, duration);
            calibration
                .readout_fidelity
                .insert(qubit, export.fidelity.spam.mean);
            calibration
                .readout_duration
                .insert(qubit, export.timing.readout);
            calibration.t1.insert(qubit, export.timing.t1);
            calibration.t2.insert(qubit, export.timing.t2);
        }

        for &edge in &coupling_map {
            calibration.two_qubit_gate_fidelity.insert(
                edge,
                BTreeMap::from([("rxx".to_string(), export.fidelity.two_qubit.mean)]),
            );
            calibration.two_qubit_gate_duration.insert(
                edge,
                BTreeMap::from([("rxx".to_string(), export.timing.two_qubit)]),
            );
        }

        let device = Device {
            name: export.backend,
            num_qubits: export.qubits,
            basis_gates: ["rxx", "rz", "ry", "rx", "measure", "barrier"]
                .map(String::from)
                .to_vec(),
            coupling_map,
            calibration,
        };
        device.validate()?;
        debug!(device = %device.name, num_qubits = device.num_qubits, "imported IonQ device");
        Ok(device)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kvasir_device::DeviceError;

    fn harmony_export() -> serde_json::Value {
        serde_json::json!({
            "backend": "harmony",
            "connectivity": [[0, 1]],
            "date": 1673449009,
            "fidelity": {
                "1q": {"mean": 0.99},
                "2q": {"mean": 0.96},
                "spam": {"mean": 0.995}
            },
            "id": "char-1234",
            "qubits": 11,
            "timing": {
                "t1": 1e7, "t2": 2e5,
                "1q": 10, "2q": 200,
                "readout": 100, "reset": 1
            }
        })
    }

    fn write_export(value: &serde_json::Value) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("harmony_calibration.json");
        std::fs::write(&path, serde_json::to_string(value).unwrap()).unwrap();
        (dir, path)
    }

    #[test]
    fn test_import_harmony() {
        let (_dir, path) = write_export(&harmony_export());
        let device = IonqProvider::new().import_backend(&path).unwrap();

        assert_eq!(device.name, "harmony");
        assert_eq!(device.num_qubits, 11);
        assert_eq!(
            device.coupling_map,
            BTreeSet::from([(0, 1), (1, 0)])
        );
        assert_eq!(
            device.calibration.single_qubit_gate_fidelity(0, "rz"),
            Some(1.0)
        );
        assert_eq!(
            device.calibration.single_qubit_gate_duration(0, "rz"),
            Some(0.0)
        );
        assert_eq!(
            device.calibration.single_qubit_gate_fidelity(0, "rx"),
            Some(0.99)
        );
        assert_eq!(
            device.calibration.two_qubit_gate_fidelity((0, 1), "rxx"),
            Some(0.96)
        );
    }

    #[test]
    fn test_class_scalars_fan_out_to_every_qubit() {
        let (_dir, path) = write_export(&harmony_export());
        let device = IonqProvider::new().import_backend(&path).unwrap();

        for qubit in 0..device.num_qubits {
            assert_eq!(
                device.calibration.single_qubit_gate_fidelity(qubit, "ry"),
                Some(0.99)
            );
            assert_eq!(device.calibration.readout_fidelity(qubit), Some(0.995));
            assert_eq!(device.calibration.readout_duration(qubit), Some(100.0));
            assert_eq!(device.calibration.t1(qubit), Some(1e7));
            assert_eq!(device.calibration.t2(qubit), Some(2e5));
        }
    }

    #[test]
    fn test_symmetric_expansion_has_identical_calibration() {
        let (_dir, path) = write_export(&harmony_export());
        let device = IonqProvider::new().import_backend(&path).unwrap();

        assert_eq!(
            device.calibration.two_qubit_gate_fidelity((0, 1), "rxx"),
            device.calibration.two_qubit_gate_fidelity((1, 0), "rxx"),
        );
        assert_eq!(
            device.calibration.two_qubit_gate_duration((0, 1), "rxx"),
            device.calibration.two_qubit_gate_duration((1, 0), "rxx"),
        );
    }

    #[test]
    fn test_import_is_idempotent() {
        let (_dir, path) = write_export(&harmony_export());
        let provider = IonqProvider::new();
        let first = provider.import_backend(&path).unwrap();
        let second = provider.import_backend(&path).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_connectivity_out_of_range_is_validation_error() {
        let mut export = harmony_export();
        export["qubits"] = serde_json::json!(4);
        export["connectivity"] = serde_json::json!([[2, 5]]);
        let (_dir, path) = write_export(&export);

        let err = IonqProvider::new().import_backend(&path).unwrap_err();
        assert!(matches!(
            err,
            DeviceError::QubitIndexOutOfRange { index: 5, num_qubits: 4, .. }
        ));
    }

    #[test]
    fn test_fidelity_out_of_range_is_validation_error() {
        let mut export = harmony_export();
        export["fidelity"]["2q"]["mean"] = serde_json::json!(1.3);
        let (_dir, path) = write_export(&export);

        assert!(matches!(
            IonqProvider::new().import_backend(&path),
            Err(DeviceError::FidelityOutOfRange { .. })
        ));
    }

    #[test]
    fn test_missing_field_is_parse_error() {
        let mut export = harmony_export();
        export.as_object_mut().unwrap().remove("fidelity");
        let (_dir, path) = write_export(&export);

        assert!(matches!(
            IonqProvider::new().import_backend(&path),
            Err(DeviceError::Parse(_))
        ));
    }

    #[test]
    fn test_get_device_by_name() {
        let (dir, _path) = write_export(&harmony_export());
        let provider = IonqProvider::with_calibration_dir(dir.path());
        let device = provider.get_device("harmony").unwrap();
        assert_eq!(device.name, "harmony");
    }

    #[test]
    fn test_unknown_device_name() {
        let provider = IonqProvider::new();
        assert!(matches!(
            provider.get_device("tempo"),
            Err(DeviceError::UnknownDevice { .. })
        ));
    }

    #[test]
    fn test_vendor_facts() {
        let provider = IonqProvider::new();
        assert_eq!(provider.provider_name(), "ionq");
        assert_eq!(provider.get_available_device_names(), vec!["harmony", "aria"]);
        assert_eq!(provider.get_max_qubits(), 23);
    }
}
