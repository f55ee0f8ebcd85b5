//! Status and health views — presentation-friendly projections of the
//! machine state.
//!
//! The formatter never fails: an unrenderable feed time collapses to a
//! sentinel string instead of erroring the request.

use chrono::{Local, TimeZone};
use serde::Serialize;

use crate::state::StateSnapshot;
use crate::time::Timestamp;

/// Rendered in place of `next_feed_time` when no feed is scheduled.
pub const NOT_SET: &str = "Not set";

/// Rendered in place of `next_feed_time` when the scheduled value cannot
/// be represented as a local calendar time.
pub const INVALID_TIME: &str = "Invalid time";

/// Calendar format for the human-readable feed time, in the server's
/// local zone.
pub const FEED_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The JSON view served by `/api/status`.
#[derive(Debug, Clone, Serialize)]
pub struct StatusView {
    /// Unix time the view was produced.
    pub timestamp: i64,
    /// Remaining feed units.
    pub cans_left: i64,
    /// Feeding mode tag.
    pub feed_mode: String,
    /// Next scheduled feed as a local calendar string, or a sentinel.
    pub next_feed_time: String,
    /// Next scheduled feed as a unix timestamp, kept for calculations.
    pub next_feed_time_unix: i64,
    /// Whether an operation is in progress. Derived as
    /// `machine_state != "idle"`; the controller-side busy guard keys off
    /// the same tag.
    pub operation_running: bool,
    /// Raw state tag from the controller.
    pub machine_state: String,
    /// Feed interval in whole minutes.
    pub feed_interval_minutes: i64,
    /// Hour component of the daily-mode schedule.
    pub daily_feed_hour: u32,
    /// Minute component of the daily-mode schedule.
    pub daily_feed_minute: u32,
    /// Z-axis offset of the last can ejection.
    pub eject_last: f64,
    /// Current Z-axis position.
    pub z_position: f64,
    /// Full unmodified state document, for diagnostics.
    pub raw_state: serde_json::Value,
}

/// Project a state snapshot into the client-facing view.
#[must_use]
pub fn format_status(snapshot: &StateSnapshot, now: Timestamp) -> StatusView {
    let state = &snapshot.state;
    StatusView {
        timestamp: now.timestamp(),
        cans_left: state.cans_loaded,
        feed_mode: state.schedule_mode.clone(),
        next_feed_time: format_feed_time(state.feed_time),
        next_feed_time_unix: state.feed_time,
        operation_running: state.is_busy(),
        machine_state: state.machine_state.clone(),
        feed_interval_minutes: state.feed_interval_minutes(),
        daily_feed_hour: state.daily_feed_hour,
        daily_feed_minute: state.daily_feed_minute,
        eject_last: state.eject_last,
        z_position: state.z_position,
        raw_state: snapshot.raw.clone(),
    }
}

/// Render a unix feed time as a local calendar string.
///
/// Non-positive values mean "no feed scheduled". Values chrono cannot map
/// to a single local time (out of range, or inside a zone transition)
/// collapse to [`INVALID_TIME`].
#[must_use]
pub fn format_feed_time(feed_time: i64) -> String {
    if feed_time <= 0 {
        return NOT_SET.to_string();
    }
    match Local.timestamp_opt(feed_time, 0) {
        chrono::LocalResult::Single(dt) => dt.format(FEED_TIME_FORMAT).to_string(),
        _ => INVALID_TIME.to_string(),
    }
}

/// The JSON view served by `/api/health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthView {
    /// Overall status tag.
    pub status: HealthStatus,
    /// Whether the state file currently exists.
    pub state_file_exists: bool,
    /// Unix time the probe ran.
    pub timestamp: i64,
}

/// Health status tag. File absence is demoted to `degraded` rather than
/// reported as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

impl HealthView {
    /// Build a health view from the state-file availability probe.
    #[must_use]
    pub fn new(state_file_exists: bool, now: Timestamp) -> Self {
        Self {
            status: if state_file_exists {
                HealthStatus::Healthy
            } else {
                HealthStatus::Degraded
            },
            state_file_exists,
            timestamp: now.timestamp(),
        }
    }
}
