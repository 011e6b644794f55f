//! Server-side components of the folder service.
//!
//! ## Submodules
//!
//! - [`config`] - CLI/environment configuration.
//! - [`error`] - Mapping of every failure category onto an HTTP response.
//! - [`handler`] - Request handlers and the shared [`handler::FolderService`]
//!   state.
//! - [`routes`] - The [`axum::Router`] wiring handlers and middleware.
//! - [`telemetry`] - `tracing-subscriber` setup plus optional OpenTelemetry
//!   traces and metrics.
//!
//! These are wired together in the server's `main.rs`.

pub mod config;
pub mod error;
pub mod handler;
pub mod routes;
pub mod telemetry;
