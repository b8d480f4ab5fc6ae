//! Kvasir adapter for OQC superconducting devices.
//!
//! Normalizes OQC calibration exports into the vendor-neutral
//! [`Device`](kvasir_device::Device) model. OQC's ECR gate is
//! direction-sensitive, so exported connectivity is kept directed and
//! unexpanded; per-qubit and per-edge figures come keyed by index and
//! `"control-target"` strings respectively.

pub mod schema;

mod provider;

pub use provider::OqcProvider;
