//! # catfeeder-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON API** (`/api/status`, `/api/feed`, `/api/eject`,
//!   `/api/terminate`, `/api/health`)
//! - Serve the **embedded dashboard page** at `/` — a single HTML document
//!   that polls the status endpoint and posts action requests
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and failures into HTTP responses
//!
//! ## Dependency rule
//! Depends on `catfeeder-app` (for port traits and services) and
//! `catfeeder-domain` (for the view types). Never leaks axum types into
//! the domain.

pub mod api;
pub mod dashboard;
pub mod error;
pub mod router;
pub mod state;
