//! # catfeeder-domain
//!
//! Pure domain model for the catfeeder monitoring/control façade.
//!
//! ## Responsibilities
//! - Define the **machine state** record the external controller writes
//!   (typed view with per-field defaults, plus the raw JSON document)
//! - Define the **pending command** record this component writes
//!   (single-slot mailbox: action tag, source marker, issue timestamp)
//! - Derive the **status view** served to clients (human-readable feed
//!   time, busy flag, unit conversions) and the **health view**
//! - Define the error taxonomy shared by ports and adapters
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod command;
pub mod error;
pub mod state;
pub mod status;
pub mod time;
