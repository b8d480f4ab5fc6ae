//! Kvasir adapter for IonQ trapped-ion devices.
//!
//! Normalizes IonQ characterization exports into the vendor-neutral
//! [`Device`](kvasir_device::Device) model. IonQ reports fidelity and
//! timing once per rotation class; this adapter fans those scalars out
//! to every qubit and edge, expands the symmetric connectivity to both
//! directions, and records the virtual `rz` rotation as perfect and
//! instantaneous.

pub mod schema;

mod provider;

pub use provider::IonqProvider;
