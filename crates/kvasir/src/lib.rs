//! Kvasir — vendor-neutral quantum hardware calibration import.
//!
//! Kvasir normalizes heterogeneous quantum-hardware calibration exports
//! (vendor-specific JSON describing qubit counts, connectivity, gate
//! fidelities and durations, coherence times) into one vendor-neutral
//! [`Device`] model, so downstream tooling can reason about any
//! supported backend through a single interface.
//!
//! # Supported vendors
//!
//! | Vendor | Crate | Connectivity | Virtual gates |
//! |--------|-------|--------------|---------------|
//! | IBM | `kvasir-adapter-ibm` | directed, from gate entries | `rz` |
//! | IonQ | `kvasir-adapter-ionq` | symmetric, expanded | `rz` |
//! | OQC | `kvasir-adapter-oqc` | directed, as listed | none |
//! | Rigetti | `kvasir-adapter-rigetti` | symmetric, expanded | `rz` |
//!
//! # Example: enumerating devices
//!
//! ```ignore
//! // Names come without touching any calibration file.
//! let names = kvasir::get_available_device_names();
//! assert!(names.contains(&"harmony".to_string()));
//!
//! // Full import reads one JSON snapshot per device.
//! let devices = kvasir::get_available_devices(None)?;
//! for device in &devices {
//!     println!("{}: {} qubits", device.name, device.num_qubits);
//! }
//! # Ok::<(), kvasir::DeviceError>(())
//! ```

mod registry;

pub use kvasir_device::{
    Device, DeviceCalibration, DeviceError, DeviceResult, Edge, Provider, Sanitizer,
    default_calibration_dir,
};

pub use kvasir_adapter_ibm::IbmProvider;
pub use kvasir_adapter_ionq::IonqProvider;
pub use kvasir_adapter_oqc::OqcProvider;
pub use kvasir_adapter_rigetti::RigettiProvider;

pub use registry::{
    get_available_device_names, get_available_devices, get_available_devices_in,
    get_available_providers, get_available_providers_in,
};
