//! Pluggable calibration sanitization.
//!
//! Registry callers can request a uniform post-processing pass over
//! every imported device — typically to rewrite degenerate calibration
//! values (a stuck-at-zero fidelity, a missing readout figure) before
//! the device reaches cost models. The concrete imputation rule is not
//! part of this core: it is supplied by the caller as a [`Sanitizer`].

use crate::device::Device;
use crate::error::DeviceResult;

/// A post-processing pass over one imported [`Device`].
///
/// # Contract
///
/// A sanitizer may rewrite calibration *values* in place but must leave
/// the device satisfying every model invariant: no new qubits, no new
/// edges, fidelities in `[0, 1]`, durations non-negative. The registry
/// checks the qubit count and coupling map against their pre-pass
/// state and re-validates after each pass, so a sanitizer that grows
/// the structure or breaks an invariant surfaces as an error to the
/// caller rather than as a corrupt device downstream.
pub trait Sanitizer {
    /// Rewrite degenerate calibration values in `device`.
    ///
    /// # Errors
    ///
    /// Implementations may fail when the device's data is beyond repair
    /// (e.g. an entire table is degenerate and no imputation baseline
    /// exists).
    fn sanitize(&self, device: &mut Device) -> DeviceResult<()>;
}
