//! Provider trait: one implementation per hardware vendor.
//!
//! A [`Provider`] knows three things about its vendor: which device
//! names exist, how large they get, and how to turn one calibration
//! export into a normalized [`Device`]. Vendor schema variance is
//! modeled as polymorphism — each vendor is a distinct implementation
//! of this one contract, never a branch in a shared parser.
//!
//! Providers are stateless apart from the directory their calibration
//! snapshots live in. Imports are synchronous, independent, and touch
//! no shared mutable state, so callers may parallelize freely.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::device::Device;
use crate::error::{DeviceError, DeviceResult};

/// Root directory for calibration snapshots.
///
/// `$KVASIR_CALIBRATION_DIR` when set, `./calibration_data` otherwise.
/// Providers append their own subdirectory (`ibm/`, `ionq/`, ...).
pub fn default_calibration_dir() -> PathBuf {
    std::env::var("KVASIR_CALIBRATION_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("calibration_data"))
}

/// Read one calibration export and deserialize it as `T`.
///
/// The file handle is scoped to this call and released on every exit
/// path. An unreadable file is [`DeviceError::Io`]; invalid JSON or a
/// schema mismatch is [`DeviceError::Parse`].
pub fn read_calibration<T: DeserializeOwned>(path: &Path) -> DeviceResult<T> {
    debug!(path = %path.display(), "reading calibration export");
    let raw = std::fs::read_to_string(path).map_err(|source| DeviceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&raw)?)
}

/// Contract implemented once per hardware vendor.
///
/// Required methods cover vendor facts (`provider_name`,
/// `get_available_device_names`, `get_max_qubits`, `calibration_dir`)
/// and the normalization routine (`import_backend`). Name-based lookup
/// and bulk import are provided on top.
pub trait Provider {
    /// Stable lowercase vendor identifier (`"ibm"`, `"ionq"`, ...).
    fn provider_name(&self) -> &'static str;

    /// Canonical device names this vendor supports, independent of
    /// whether calibration data is currently present on disk.
    fn get_available_device_names(&self) -> Vec<&'static str>;

    /// Largest qubit count among this vendor's supported devices.
    /// Usable for capacity planning without loading any export.
    fn get_max_qubits(&self) -> u32;

    /// Directory holding this vendor's calibration snapshots.
    fn calibration_dir(&self) -> &Path;

    /// Parse one calibration export and return a fully populated,
    /// invariant-satisfying [`Device`].
    ///
    /// # Errors
    ///
    /// A parse error when the source cannot be read as the vendor
    /// schema; a validation error when parsed values violate a model
    /// invariant. No partial device is ever returned.
    fn import_backend(&self, path: &Path) -> DeviceResult<Device>;

    /// Path of the calibration snapshot for `device_name`.
    fn calibration_path(&self, device_name: &str) -> PathBuf {
        self.calibration_dir()
            .join(format!("{device_name}_calibration.json"))
    }

    /// Import a supported device by name.
    ///
    /// # Errors
    ///
    /// [`DeviceError::UnknownDevice`] for a name this vendor does not
    /// support; otherwise whatever `import_backend` reports.
    fn get_device(&self, device_name: &str) -> DeviceResult<Device> {
        if !self
            .get_available_device_names()
            .contains(&device_name)
        {
            return Err(DeviceError::UnknownDevice {
                provider: self.provider_name().to_string(),
                device: device_name.to_string(),
            });
        }
        let device = self.import_backend(&self.calibration_path(device_name))?;
        debug!(
            provider = self.provider_name(),
            device = device_name,
            num_qubits = device.num_qubits,
            "imported device"
        );
        Ok(device)
    }

    /// Import every supported device, in `get_available_device_names`
    /// order. Fails on the first device whose import fails.
    fn get_available_devices(&self) -> DeviceResult<Vec<Device>> {
        self.get_available_device_names()
            .iter()
            .map(|name| self.get_device(name))
            .collect()
    }
}
