//! # catfeeder-adapter-storage-json
//!
//! File-backed implementations of the application ports, speaking the
//! JSON IPC the external controller already uses:
//!
//! - [`JsonStateFile`] — reads the state snapshot the controller writes
//!   (never mutates it)
//! - [`JsonCommandFile`] — overwrites the single-slot command mailbox the
//!   controller polls
//!
//! Single-writer assumption: one API instance owns the command file, the
//! controller owns the state file. No locking is attempted.
//!
//! ## Dependency rule
//! Depends on `catfeeder-app` (port traits) and `catfeeder-domain`.
//! Never imports the HTTP adapter.

mod command_file;
mod state_file;

pub use command_file::JsonCommandFile;
pub use state_file::JsonStateFile;
