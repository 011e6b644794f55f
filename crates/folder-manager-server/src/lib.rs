//! # `folder-manager-server`: HTTP Front for Client Folder Provisioning
//!
//! An [`axum`] service in front of [`folder_manager`]. Clients address folders
//! by client identifier (`SERIAL(YY)` or `YYYY-SERIAL`); the service resolves
//! or creates the matching folder in both the *Unrestricted information* and
//! *Restricted information* branches of the backend.
//!
//! ## Endpoints
//!
//! - `GET /folders/{client_id}` - `200 {"folders": [...]}`, `400` for an
//!   invalid id, `404` when the client has no folders.
//! - `POST /folders` with `{"clientId": "..."}` - `201 {"folders": [...]}`
//!   with a `Location` header, `400` for an invalid id or an existing client.
//! - `GET /health` - liveness.
//!
//! Backend faults are reported as `500`. Every error body has the shape
//! `{"code": "...", "message": "..."}`.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin folder-manager-server -- --port 8080
//! ```
//!
//! ## Module Overview
//!
//! - [`server`] - configuration, routing, handlers, error mapping and
//!   telemetry.

pub mod server;
