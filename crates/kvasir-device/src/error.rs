//! Error types for the device model.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for device-model operations.
pub type DeviceResult<T> = Result<T, DeviceError>;

/// Errors that can occur when importing or validating a device.
///
/// The taxonomy is deliberately three-way:
///
/// - **parse** ([`Io`](DeviceError::Io), [`Parse`](DeviceError::Parse),
///   [`Schema`](DeviceError::Schema)) — the export could not be read as
///   the vendor schema at all;
/// - **validation** (index, fidelity, duration, and coupling-map
///   variants) — the export parsed, but the values violate a model
///   invariant;
/// - **unknown device** ([`UnknownDevice`](DeviceError::UnknownDevice)) —
///   a caller asked a provider for a device name it does not support.
///
/// On any of these, no partial [`Device`](crate::Device) is returned.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DeviceError {
    /// Calibration file could not be read.
    #[error("failed to read calibration export '{path}': {source}")]
    Io {
        /// Path of the export that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Calibration export is not valid JSON or does not match the
    /// vendor schema (missing field, wrong type).
    #[error("calibration export does not match vendor schema: {0}")]
    Parse(#[from] serde_json::Error),

    /// Export parsed as JSON but a vendor-schema constraint beyond
    /// serde's reach is violated (e.g. a per-qubit table entry missing,
    /// a malformed `"control-target"` edge key).
    #[error("malformed calibration export: {0}")]
    Schema(String),

    /// A qubit index referenced anywhere in the device lies outside
    /// `[0, num_qubits)`.
    #[error("device '{device}': qubit index {index} out of range (num_qubits = {num_qubits})")]
    QubitIndexOutOfRange {
        /// Device being validated.
        device: String,
        /// Offending index.
        index: u32,
        /// Declared qubit count.
        num_qubits: u32,
    },

    /// A fidelity value lies outside `[0, 1]`.
    #[error("device '{device}': fidelity {value} for {context} outside [0, 1]")]
    FidelityOutOfRange {
        /// Device being validated.
        device: String,
        /// What the value calibrates (gate/qubit/edge).
        context: String,
        /// Offending value.
        value: f64,
    },

    /// A duration or coherence time is negative or not finite
    /// (NaN or infinite).
    #[error("device '{device}': duration {value} ns for {context} is not a finite non-negative number")]
    InvalidDuration {
        /// Device being validated.
        device: String,
        /// What the value calibrates (gate/qubit/edge).
        context: String,
        /// Offending value.
        value: f64,
    },

    /// A two-qubit calibration entry is keyed by a pair that is not a
    /// coupling-map member.
    #[error(
        "device '{device}': two-qubit calibration for ({control}, {target}) \
         which is not in the coupling map"
    )]
    EdgeNotInCouplingMap {
        /// Device being validated.
        device: String,
        /// Control qubit of the offending key.
        control: u32,
        /// Target qubit of the offending key.
        target: u32,
    },

    /// The coupling map declares an edge the export carries no
    /// calibration for. A missing entry is a data-integrity problem,
    /// never absence-implies-zero: under the virtual-gate convention a
    /// defaulted zero duration would read as "instantaneous".
    #[error(
        "device '{device}': coupling map declares ({control}, {target}) \
         but the export carries no calibration for it"
    )]
    MissingEdgeCalibration {
        /// Device being validated.
        device: String,
        /// Control qubit of the uncalibrated edge.
        control: u32,
        /// Target qubit of the uncalibrated edge.
        target: u32,
    },

    /// A sanitization pass changed a device's structure (qubit count
    /// or coupling map) instead of only rewriting calibration values.
    #[error("device '{device}': sanitizer changed the device structure")]
    SanitizerStructureChanged {
        /// Device whose structure changed.
        device: String,
    },

    /// A provider was asked for a device name it does not support.
    #[error("provider '{provider}' does not support device '{device}'")]
    UnknownDevice {
        /// Provider that rejected the request.
        provider: String,
        /// Requested device name.
        device: String,
    },
}
