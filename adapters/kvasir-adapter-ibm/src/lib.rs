//! Kvasir adapter for IBM Quantum superconducting devices.
//!
//! Normalizes IBM backend-properties exports into the vendor-neutral
//! [`Device`](kvasir_device::Device) model. IBM tags every parameter
//! with its own unit (T1/T2 in microseconds, gate lengths in
//! nanoseconds); this adapter converts everything to nanoseconds,
//! derives directed connectivity from the two-qubit gate entries, and
//! records the virtual `rz` frame change as perfect and instantaneous
//! on every qubit.

pub mod schema;

mod provider;

pub use provider::IbmProvider;
