//! Kvasir device model
//!
//! This crate defines the vendor-neutral representation of a quantum
//! hardware backend — [`Device`] and its [`DeviceCalibration`] tables —
//! plus the [`Provider`] contract that each vendor adapter implements
//! to turn its own calibration-export JSON into that representation.
//!
//! # Overview
//!
//! Vendors export calibration snapshots in mutually incompatible JSON
//! schemas: different unit conventions, symmetric vs. directed
//! connectivity, different gate-naming, virtual vs. physical gates.
//! Each adapter crate (`kvasir-adapter-ibm`, `kvasir-adapter-ionq`,
//! `kvasir-adapter-oqc`, `kvasir-adapter-rigetti`) reconciles one such
//! schema; downstream compilation and scoring see only [`Device`].
//!
//! # Example: importing one device
//!
//! ```ignore
//! use kvasir_device::Provider;
//! use kvasir_adapter_ionq::IonqProvider;
//!
//! let provider = IonqProvider::new();
//! let device = provider.get_device("harmony")?;
//! assert_eq!(device.num_qubits, 11);
//! // rz is virtual on IonQ hardware: fidelity 1, duration 0.
//! assert_eq!(device.calibration.single_qubit_gate_fidelity(0, "rz"), Some(1.0));
//! # Ok::<(), kvasir_device::DeviceError>(())
//! ```

pub mod device;
pub mod error;
pub mod provider;
pub mod sanitize;

pub use device::{Device, DeviceCalibration, Edge};
pub use error::{DeviceError, DeviceResult};
pub use provider::{Provider, default_calibration_dir, read_calibration};
pub use sanitize::Sanitizer;
