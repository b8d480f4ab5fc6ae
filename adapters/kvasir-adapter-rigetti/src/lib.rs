//! Kvasir adapter for Rigetti superconducting devices.
//!
//! Normalizes Rigetti QCS specs exports into the vendor-neutral
//! [`Device`](kvasir_device::Device) model. Connectivity is derived
//! from the undirected `2Q` pair keys and expanded to both directions
//! (CZ is symmetric); coherence times are converted from seconds to
//! nanoseconds; the virtual `rz` frame change is recorded as perfect
//! and instantaneous.

pub mod schema;

mod provider;

pub use provider::RigettiProvider;
