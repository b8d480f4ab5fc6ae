//! Rigetti provider: normalization of QCS specs exports.
//!
//! Normalization rules for Rigetti superconducting backends:
//!
//! - connectivity comes from the `2Q` spec keys (`"a-b"`); the native
//!   CZ gate is symmetric, so every pair lands in the coupling map in
//!   both directions with identical calibration;
//! - `rx` fidelity is the per-qubit `f1QRB` figure; `rz` is a virtual
//!   frame change — fidelity 1, duration 0;
//! - coherence times are exported in seconds and normalized to
//!   nanoseconds; gate durations come from the class-level `timing`
//!   block, already in nanoseconds.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use tracing::debug;

use kvasir_device::{
    Device, DeviceCalibration, DeviceError, DeviceResult, Provider, default_calibration_dir,
    read_calibration,
};

use crate::schema::RigettiCalibration;

/// Seconds → nanoseconds.
const S_TO_NS: f64 = 1e9;

/// Parse an undirected `"a-b"` pair key from the `2Q` table.
fn parse_pair_key(key: &str) -> DeviceResult<(u32, u32)> {
    let malformed =
        || DeviceError::Schema(format!("malformed 2Q pair key '{key}', expected 'a-b'"));
    let (a, b) = key.split_once('-').ok_or_else(malformed)?;
    Ok((
        a.parse().map_err(|_| malformed())?,
        b.parse().map_err(|_| malformed())?,
    ))
}

/// Provider for Rigetti superconducting devices.
#[derive(Debug, Clone)]
pub struct RigettiProvider {
    calibration_dir: PathBuf,
}

impl RigettiProvider {
    /// Create a provider reading from the default calibration root.
    pub fn new() -> Self {
        Self {
            calibration_dir: default_calibration_dir().join("rigetti"),
        }
    }

    /// Create a provider reading from an explicit directory.
    pub fn with_calibration_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            calibration_dir: dir.into(),
        }
    }
}

impl Default for RigettiProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl Provider for RigettiProvider {
    fn provider_name(&self) -> &'static str {
        "rigetti"
    }

    fn get_available_device_names(&self) -> Vec<&'static str> {
        vec!["aspen-m2"]
    }

    fn get_max_qubits(&self) -> u32 {
        80
    }

    fn calibration_dir(&self) -> &Path {
        &self.calibration_dir
    }

    fn import_backend(&self, path: &Path) -> DeviceResult<Device> {
        debug!(path = %path.display(), "importing Rigetti QCS specs export");
        let export: RigettiCalibration = read_calibration(path)?;

        let mut calibration = DeviceCalibration::new();
        for qubit in 0..export.num_qubits {
            let specs = export
                .specs
                .one_qubit
                .get(&qubit.to_string())
                .ok_or_else(|| {
                    DeviceError::Schema(format!("missing 1Q entry for qubit {qubit}"))
                })?;

            calibration.single_qubit_gate_fidelity.insert(
                qubit,
                BTreeMap::from([
                    ("rx".to_string(), specs.f_1q_rb),
                    // rz is a virtual frame change.
                    ("rz".to_string(), 1.0),
                ]),
            );
            calibration.single_qubit_gate_duration.insert(
                qubit,
                BTreeMap::from([
                    ("rx".to_string(), export.timing.one_qubit),
                    ("rz".to_string(), 0.0),
                ]),
            );
            calibration.readout_fidelity.insert(qubit, specs.f_ro);
            calibration
                .readout_duration
                .insert(qubit, export.timing.readout);
            calibration.t1.insert(qubit, specs.t1 * S_TO_NS);
            calibration.t2.insert(qubit, specs.t2 * S_TO_NS);
        }

        let mut coupling_map = BTreeSet::new();
        for (key, specs) in &export.specs.two_qubit {
            let (a, b) = parse_pair_key(key)?;
            // CZ is symmetric: both directions, identical calibration.
            for edge in [(a, b), (b, a)] {
                coupling_map.insert(edge);
                calibration
                    .two_qubit_gate_fidelity
                    .insert(edge, BTreeMap::from([("cz".to_string(), specs.f_cz)]));
                calibration.two_qubit_gate_duration.insert(
                    edge,
                    BTreeMap::from([("cz".to_string(), export.timing.two_qubit)]),
                );
            }
        }

        let device = Device {
            name: export.name,
            num_qubits: export.num_qubits,
            basis_gates: ["rx", "rz", "cz", "measure", "barrier"]
                .map(String::from)
                .to_vec(),
            coupling_map,
            calibration,
        };
        device.validate()?;
        debug!(device = %device.name, num_qubits = device.num_qubits, "imported Rigetti device");
        Ok(device)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aspen_export() -> serde_json::Value {
        serde_json::json!({
            "name": "aspen-m2",
            "num_qubits": 3,
            "specs": {
                "1Q": {
                    "0": {"f1QRB": 0.998, "fRO": 0.95, "T1": 2.3e-5, "T2": 1.8e-5},
                    "1": {"f1QRB": 0.997, "fRO": 0.94, "T1": 2.1e-5, "T2": 1.6e-5},
                    "2": {"f1QRB": 0.996, "fRO": 0.93, "T1": 2.0e-5, "T2": 1.5e-5}
                },
                "2Q": {
                    "0-1": {"fCZ": 0.91},
                    "1-2": {"fCZ": 0.89}
                }
            },
            "timing": {"1q": 40, "2q": 240, "readout": 1760}
        })
    }

    fn write_export(value: &serde_json::Value) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aspen-m2_calibration.json");
        std::fs::write(&path, serde_json::to_string(value).unwrap()).unwrap();
        (dir, path)
    }

    #[test]
    fn test_import_aspen() {
        let (_dir, path) = write_export(&aspen_export());
        let device = RigettiProvider::new().import_backend(&path).unwrap();

        assert_eq!(device.name, "aspen-m2");
        assert_eq!(device.num_qubits, 3);
        assert_eq!(
            device.calibration.single_qubit_gate_fidelity(0, "rx"),
            Some(0.998)
        );
        assert_eq!(
            device.calibration.single_qubit_gate_duration(1, "rx"),
            Some(40.0)
        );
        assert_eq!(
            device.calibration.two_qubit_gate_fidelity((1, 2), "cz"),
            Some(0.89)
        );
        assert_eq!(device.calibration.readout_duration(2), Some(1760.0));
    }

    #[test]
    fn test_pair_keys_expand_both_directions() {
        let (_dir, path) = write_export(&aspen_export());
        let device = RigettiProvider::new().import_backend(&path).unwrap();

        assert_eq!(
            device.coupling_map,
            BTreeSet::from([(0, 1), (1, 0), (1, 2), (2, 1)])
        );
        assert_eq!(
            device.calibration.two_qubit_gate_fidelity((0, 1), "cz"),
            device.calibration.two_qubit_gate_fidelity((1, 0), "cz"),
        );
    }

    #[test]
    fn test_rz_is_virtual() {
        let (_dir, path) = write_export(&aspen_export());
        let device = RigettiProvider::new().import_backend(&path).unwrap();

        for qubit in 0..3 {
            assert_eq!(
                device.calibration.single_qubit_gate_fidelity(qubit, "rz"),
                Some(1.0)
            );
            assert_eq!(
                device.calibration.single_qubit_gate_duration(qubit, "rz"),
                Some(0.0)
            );
        }
    }

    #[test]
    fn test_coherence_times_converted_from_seconds() {
        let (_dir, path) = write_export(&aspen_export());
        let device = RigettiProvider::new().import_backend(&path).unwrap();

        assert_eq!(device.calibration.t1(0), Some(2.3e-5 * 1e9));
        assert_eq!(device.calibration.t2(2), Some(1.5e-5 * 1e9));
    }

    #[test]
    fn test_malformed_pair_key_is_schema_error() {
        let mut export = aspen_export();
        export["specs"]["2Q"]
            .as_object_mut()
            .unwrap()
            .insert("0:1".into(), serde_json::json!({"fCZ": 0.9}));
        let (_dir, path) = write_export(&export);

        assert!(matches!(
            RigettiProvider::new().import_backend(&path),
            Err(DeviceError::Schema(_))
        ));
    }

    #[test]
    fn test_missing_qubit_entry_is_schema_error() {
        let mut export = aspen_export();
        export["specs"]["1Q"].as_object_mut().unwrap().remove("2");
        let (_dir, path) = write_export(&export);

        assert!(matches!(
            RigettiProvider::new().import_backend(&path),
            Err(DeviceError::Schema(_))
        ));
    }

    #[test]
    fn test_pair_out_of_range_is_validation_error() {
        let mut export = aspen_export();
        export["specs"]["2Q"]
            .as_object_mut()
            .unwrap()
            .insert("2-5".into(), serde_json::json!({"fCZ": 0.9}));
        let (_dir, path) = write_export(&export);

        assert!(matches!(
            RigettiProvider::new().import_backend(&path),
            Err(DeviceError::QubitIndexOutOfRange { index: 5, .. })
        ));
    }

    #[test]
    fn test_import_is_idempotent() {
        let (_dir, path) = write_export(&aspen_export());
        let provider = RigettiProvider::new();
        assert_eq!(
            provider.import_backend(&path).unwrap(),
            provider.import_backend(&path).unwrap()
        );
    }

    #[test]
    fn test_get_device_by_name() {
        let (dir, _path) = write_export(&aspen_export());
        let provider = RigettiProvider::with_calibration_dir(dir.path());
        assert_eq!(provider.get_device("aspen-m2").unwrap().name, "aspen-m2");
        assert!(matches!(
            provider.get_device("aspen-11"),
            Err(DeviceError::UnknownDevice { .. })
        ));
    }

    #[test]
    fn test_vendor_facts() {
        let provider = RigettiProvider::new();
        assert_eq!(provider.provider_name(), "rigetti");
        assert_eq!(provider.get_available_device_names(), vec!["aspen-m2"]);
        assert_eq!(provider.get_max_qubits(), 80);
    }
}
