//! Machine state — the snapshot record the external controller writes.
//!
//! The controller is authoritative for this record; the façade only ever
//! reads it. Missing fields are tolerated and defaulted here so that a
//! partially-written or older-format snapshot still renders. The full
//! unmodified document travels alongside the typed view in
//! [`StateSnapshot`] for diagnostic consumption.

use serde::{Deserialize, Serialize};

/// State tag the controller reports while no operation is active.
pub const IDLE_STATE: &str = "idle";

/// Typed view of the controller's state snapshot.
///
/// Field defaults mirror what the controller assumes when a field is
/// absent from the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineState {
    /// Coarse state tag; anything other than `"idle"` means an operation
    /// is in progress.
    pub machine_state: String,
    /// Remaining feed units in the magazine.
    pub cans_loaded: i64,
    /// Feeding mode tag (`"INTERVAL"` or `"DAILY"` in practice).
    pub schedule_mode: String,
    /// Unix timestamp of the next scheduled feed; `0` when unset.
    pub feed_time: i64,
    /// Hours between feeds in interval mode.
    pub feed_gap: f64,
    /// Hour component of the daily-mode schedule.
    pub daily_feed_hour: u32,
    /// Minute component of the daily-mode schedule.
    pub daily_feed_minute: u32,
    /// Z-axis offset of the last can ejection.
    pub eject_last: f64,
    /// Current Z-axis position.
    pub z_position: f64,
}

impl Default for MachineState {
    fn default() -> Self {
        Self {
            machine_state: "unknown".to_string(),
            cans_loaded: 0,
            schedule_mode: "UNKNOWN".to_string(),
            feed_time: 0,
            feed_gap: 1.0,
            daily_feed_hour: 0,
            daily_feed_minute: 0,
            eject_last: 318.0,
            z_position: 0.0,
        }
    }
}

impl MachineState {
    /// Whether the controller is currently running an operation.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.machine_state != IDLE_STATE
    }

    /// Feed interval in whole minutes (`feed_gap` hours truncated).
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn feed_interval_minutes(&self) -> i64 {
        (self.feed_gap * 60.0) as i64
    }
}

/// A state snapshot as read from the backing store: the typed view plus
/// the unmodified raw document.
#[derive(Debug, Clone, PartialEq)]
pub struct StateSnapshot {
    /// Typed fields with defaults applied.
    pub state: MachineState,
    /// The full document exactly as the controller wrote it.
    pub raw: serde_json::Value,
}

impl StateSnapshot {
    /// Build a snapshot from a parsed JSON document.
    ///
    /// Unknown fields stay in `raw`; known fields missing from the
    /// document take their defaults.
    ///
    /// # Errors
    ///
    /// Returns the serde error when a known field has an incompatible
    /// type (e.g. `cans_loaded` as a string).
    pub fn from_value(raw: serde_json::Value) -> Result<Self, serde_json::Error> {
        let state = MachineState::deserialize(&raw)?;
        Ok(Self { state, raw })
    }
}
