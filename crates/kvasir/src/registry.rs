//! Stateless provider registry.
//!
//! The set of supported vendors is fixed at build time, so the registry
//! is a pure function returning fresh provider instances — no global
//! singleton, no initialization or teardown. Each call re-derives the
//! same list; provider iteration order (IBM, IonQ, OQC, Rigetti) fixes
//! the order of every concatenated result.

use std::path::Path;

use tracing::debug;

use kvasir_device::{
    Device, DeviceError, DeviceResult, Provider, Sanitizer, default_calibration_dir,
};

use kvasir_adapter_ibm::IbmProvider;
use kvasir_adapter_ionq::IonqProvider;
use kvasir_adapter_oqc::OqcProvider;
use kvasir_adapter_rigetti::RigettiProvider;

/// One fresh instance per supported vendor, reading snapshots under
/// `root` (one subdirectory per vendor).
pub fn get_available_providers_in(root: &Path) -> Vec<Box<dyn Provider>> {
    vec![
        Box::new(IbmProvider::with_calibration_dir(root.join("ibm"))),
        Box::new(IonqProvider::with_calibration_dir(root.join("ionq"))),
        Box::new(OqcProvider::with_calibration_dir(root.join("oqc"))),
        Box::new(RigettiProvider::with_calibration_dir(root.join("rigetti"))),
    ]
}

/// One fresh instance per supported vendor, reading snapshots from the
/// default calibration root.
pub fn get_available_providers() -> Vec<Box<dyn Provider>> {
    get_available_providers_in(&default_calibration_dir())
}

/// Canonical device names across all providers, in provider order.
/// Loads no calibration data.
pub fn get_available_device_names() -> Vec<String> {
    get_available_providers()
        .iter()
        .flat_map(|provider| {
            provider
                .get_available_device_names()
                .into_iter()
                .map(String::from)
        })
        .collect()
}

/// Import every supported device across all providers, reading
/// snapshots under `root`.
///
/// When a sanitizer is supplied it runs uniformly over every device.
/// After each pass the device's qubit count and coupling map are
/// compared against their pre-pass state and the device is
/// re-validated, so a sanitizer that grows the structure or breaks a
/// model invariant surfaces as an error here, never as a corrupt
/// device downstream.
///
/// # Errors
///
/// Fails on the first device whose import, sanitization, structure
/// check, or post-sanitize validation fails.
pub fn get_available_devices_in(
    root: &Path,
    sanitizer: Option<&dyn Sanitizer>,
) -> DeviceResult<Vec<Device>> {
    let mut devices = Vec::new();
    for provider in get_available_providers_in(root) {
        debug!(provider = provider.provider_name(), "importing provider devices");
        for mut device in provider.get_available_devices()? {
            if let Some(sanitizer) = sanitizer {
                let num_qubits = device.num_qubits;
                let coupling_map = device.coupling_map.clone();
                sanitizer.sanitize(&mut device)?;
                if device.num_qubits != num_qubits || device.coupling_map != coupling_map {
                    return Err(DeviceError::SanitizerStructureChanged {
                        device: device.name,
                    });
                }
                device.validate()?;
            }
            devices.push(device);
        }
    }
    Ok(devices)
}

/// Import every supported device across all providers from the default
/// calibration root. See [`get_available_devices_in`].
pub fn get_available_devices(sanitizer: Option<&dyn Sanitizer>) -> DeviceResult<Vec<Device>> {
    get_available_devices_in(&default_calibration_dir(), sanitizer)
}
