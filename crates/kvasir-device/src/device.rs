//! Vendor-neutral device and calibration model.
//!
//! A [`Device`] is an immutable snapshot of one hardware backend at
//! calibration-export time: topology, native gate basis, and the full
//! per-qubit / per-edge calibration tables. Providers construct it
//! atomically from one vendor export; downstream cost models consume it
//! without ever touching vendor-specific JSON again.
//!
//! # Directed coupling map
//!
//! `coupling_map` is an explicit set of *ordered* `(control, target)`
//! pairs rather than an undirected graph. Vendors disagree on whether
//! their two-qubit gate is direction-sensitive (OQC's ECR is, IonQ's
//! Mølmer-Sørensen gate is not), so the expand-or-not decision lives in
//! each adapter and the shared model stays direction-agnostic.
//!
//! # Virtual gates
//!
//! A gate realized purely in classical bookkeeping (e.g. a virtual Z
//! rotation) is recorded as fidelity exactly `1.0` and duration exactly
//! `0.0` — never omitted from the tables. Every basis gate therefore has
//! an entry for every qubit/edge it can act on, and cost aggregation
//! needs no null-checks. Conversely, a fidelity of `1.0` or a duration
//! of `0.0` always means "virtual", never "physically perfect".

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{DeviceError, DeviceResult};

/// Directed two-qubit edge: `(control, target)`.
pub type Edge = (u32, u32);

/// Immutable snapshot of one hardware backend.
#[derive(Debug, Clone, PartialEq)]
pub struct Device {
    /// Canonical identifier, unique within the provider's namespace.
    pub name: String,
    /// Number of qubits. All indices elsewhere lie in `[0, num_qubits)`.
    pub num_qubits: u32,
    /// Gate names the backend natively executes. Vendor-fixed, not
    /// derived from the calibration data.
    pub basis_gates: Vec<String>,
    /// Directed two-qubit connectivity. Symmetric devices carry both
    /// `(a, b)` and `(b, a)`; directed devices only the supported
    /// direction.
    pub coupling_map: BTreeSet<Edge>,
    /// Calibration tables, exclusively owned by this device.
    pub calibration: DeviceCalibration,
}

/// Calibration tables for one [`Device`].
///
/// All durations and coherence times are in nanoseconds; all fidelities
/// in `[0, 1]`. Tables use ordered maps so two imports of the same
/// export compare equal field-by-field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceCalibration {
    /// Qubit index → gate name → fidelity.
    pub single_qubit_gate_fidelity: BTreeMap<u32, BTreeMap<String, f64>>,
    /// Qubit index → gate name → duration (ns).
    pub single_qubit_gate_duration: BTreeMap<u32, BTreeMap<String, f64>>,
    /// Directed edge → gate name → fidelity. Keys must be coupling-map
    /// members.
    pub two_qubit_gate_fidelity: BTreeMap<Edge, BTreeMap<String, f64>>,
    /// Directed edge → gate name → duration (ns).
    pub two_qubit_gate_duration: BTreeMap<Edge, BTreeMap<String, f64>>,
    /// Per-qubit readout fidelity.
    pub readout_fidelity: BTreeMap<u32, f64>,
    /// Per-qubit readout duration (ns).
    pub readout_duration: BTreeMap<u32, f64>,
    /// Per-qubit T1 relaxation time (ns).
    pub t1: BTreeMap<u32, f64>,
    /// Per-qubit T2 dephasing time (ns).
    pub t2: BTreeMap<u32, f64>,
}

impl DeviceCalibration {
    /// Create empty calibration tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fidelity of `gate` on `qubit`, if calibrated.
    pub fn single_qubit_gate_fidelity(&self, qubit: u32, gate: &str) -> Option<f64> {
        self.single_qubit_gate_fidelity
            .get(&qubit)
            .and_then(|gates| gates.get(gate))
            .copied()
    }

    /// Duration of `gate` on `qubit` in nanoseconds, if calibrated.
    pub fn single_qubit_gate_duration(&self, qubit: u32, gate: &str) -> Option<f64> {
        self.single_qubit_gate_duration
            .get(&qubit)
            .and_then(|gates| gates.get(gate))
            .copied()
    }

    /// Fidelity of `gate` on the directed `edge`, if calibrated.
    pub fn two_qubit_gate_fidelity(&self, edge: Edge, gate: &str) -> Option<f64> {
        self.two_qubit_gate_fidelity
            .get(&edge)
            .and_then(|gates| gates.get(gate))
            .copied()
    }

    /// Duration of `gate` on the directed `edge` in nanoseconds, if
    /// calibrated.
    pub fn two_qubit_gate_duration(&self, edge: Edge, gate: &str) -> Option<f64> {
        self.two_qubit_gate_duration
            .get(&edge)
            .and_then(|gates| gates.get(gate))
            .copied()
    }

    /// Readout fidelity of `qubit`, if calibrated.
    pub fn readout_fidelity(&self, qubit: u32) -> Option<f64> {
        self.readout_fidelity.get(&qubit).copied()
    }

    /// Readout duration of `qubit` in nanoseconds, if calibrated.
    pub fn readout_duration(&self, qubit: u32) -> Option<f64> {
        self.readout_duration.get(&qubit).copied()
    }

    /// T1 relaxation time of `qubit` in nanoseconds, if calibrated.
    pub fn t1(&self, qubit: u32) -> Option<f64> {
        self.t1.get(&qubit).copied()
    }

    /// T2 dephasing time of `qubit` in nanoseconds, if calibrated.
    pub fn t2(&self, qubit: u32) -> Option<f64> {
        self.t2.get(&qubit).copied()
    }
}

impl Device {
    /// Check whether the directed edge `(control, target)` is in the
    /// coupling map.
    pub fn is_connected(&self, control: u32, target: u32) -> bool {
        self.coupling_map.contains(&(control, target))
    }

    /// Check whether `gate` is in the native basis.
    pub fn supports_gate(&self, gate: &str) -> bool {
        self.basis_gates.iter().any(|g| g == gate)
    }

    /// Validate every model invariant.
    ///
    /// Providers call this as the last step of `import_backend`, so no
    /// invariant-violating device ever reaches a caller. The registry
    /// calls it again after a sanitization pass.
    ///
    /// # Errors
    ///
    /// Returns the first violation found:
    ///
    /// - [`DeviceError::QubitIndexOutOfRange`] — any index `>= num_qubits`
    ///   in the coupling map or any table;
    /// - [`DeviceError::FidelityOutOfRange`] — any fidelity outside `[0, 1]`;
    /// - [`DeviceError::InvalidDuration`] — any duration or coherence
    ///   time that is negative or not finite;
    /// - [`DeviceError::EdgeNotInCouplingMap`] — any two-qubit table key
    ///   that is not a coupling-map member;
    /// - [`DeviceError::MissingEdgeCalibration`] — any coupling-map edge
    ///   without a two-qubit gate fidelity entry.
    pub fn validate(&self) -> DeviceResult<()> {
        for &(control, target) in &self.coupling_map {
            self.check_qubit(control)?;
            self.check_qubit(target)?;
        }

        let cal = &self.calibration;
        for (&qubit, gates) in &cal.single_qubit_gate_fidelity {
            self.check_qubit(qubit)?;
            for (gate, &value) in gates {
                self.check_fidelity(format!("gate '{gate}' on qubit {qubit}"), value)?;
            }
        }
        for (&qubit, gates) in &cal.single_qubit_gate_duration {
            self.check_qubit(qubit)?;
            for (gate, &value) in gates {
                self.check_duration(format!("gate '{gate}' on qubit {qubit}"), value)?;
            }
        }

        for (&(control, target), gates) in &cal.two_qubit_gate_fidelity {
            self.check_edge(control, target)?;
            for (gate, &value) in gates {
                self.check_fidelity(
                    format!("gate '{gate}' on edge ({control}, {target})"),
                    value,
                )?;
            }
        }
        for (&(control, target), gates) in &cal.two_qubit_gate_duration {
            self.check_edge(control, target)?;
            for (gate, &value) in gates {
                self.check_duration(
                    format!("gate '{gate}' on edge ({control}, {target})"),
                    value,
                )?;
            }
        }

        // A declared edge without calibration is a data-integrity
        // problem, not an absence-implies-zero situation.
        for &(control, target) in &self.coupling_map {
            let calibrated = cal
                .two_qubit_gate_fidelity
                .get(&(control, target))
                .is_some_and(|gates| !gates.is_empty());
            if !calibrated {
                return Err(DeviceError::MissingEdgeCalibration {
                    device: self.name.clone(),
                    control,
                    target,
                });
            }
        }

        for (&qubit, &value) in &cal.readout_fidelity {
            self.check_qubit(qubit)?;
            self.check_fidelity(format!("readout on qubit {qubit}"), value)?;
        }
        for (&qubit, &value) in &cal.readout_duration {
            self.check_qubit(qubit)?;
            self.check_duration(format!("readout on qubit {qubit}"), value)?;
        }
        for (&qubit, &value) in &cal.t1 {
            self.check_qubit(qubit)?;
            self.check_duration(format!("T1 of qubit {qubit}"), value)?;
        }
        for (&qubit, &value) in &cal.t2 {
            self.check_qubit(qubit)?;
            self.check_duration(format!("T2 of qubit {qubit}"), value)?;
        }

        Ok(())
    }

    fn check_qubit(&self, index: u32) -> DeviceResult<()> {
        if index >= self.num_qubits {
            return Err(DeviceError::QubitIndexOutOfRange {
                device: self.name.clone(),
                index,
                num_qubits: self.num_qubits,
            });
        }
        Ok(())
    }

    fn check_edge(&self, control: u32, target: u32) -> DeviceResult<()> {
        if !self.coupling_map.contains(&(control, target)) {
            return Err(DeviceError::EdgeNotInCouplingMap {
                device: self.name.clone(),
                control,
                target,
            });
        }
        Ok(())
    }

    fn check_fidelity(&self, context: String, value: f64) -> DeviceResult<()> {
        if !(0.0..=1.0).contains(&value) {
            return Err(DeviceError::FidelityOutOfRange {
                device: self.name.clone(),
                context,
                value,
            });
        }
        Ok(())
    }

    fn check_duration(&self, context: String, value: f64) -> DeviceResult<()> {
        if !value.is_finite() || value < 0.0 {
            return Err(DeviceError::InvalidDuration {
                device: self.name.clone(),
                context,
                value,
            });
        }
        Ok(())
    }
}
