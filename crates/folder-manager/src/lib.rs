//! # `folder-manager`: Client Folder Provisioning
//!
//! Maps a client identifier to a pair of folders, one under the
//! *Unrestricted information* top-level folder and one under *Restricted
//! information*, inside an external document-management backend. The
//! `year/serial` hierarchy is created on demand.
//!
//! ## Components
//!
//! - [`ClientId`] - parses and validates the two accepted identifier syntaxes
//!   (`SERIAL(YY)` and `YYYY-SERIAL`) into a normalized `{year, serial}` pair.
//! - [`FolderClient`] - runs the lookup-or-create workflow against both
//!   [`Branch`]es concurrently and joins the outcome.
//! - [`FileManagementApi`] - the backend capability the client is generic
//!   over. [`InMemoryFileManagementApi`] is a process-local implementation.
//!
//! ## Example
//!
//! ```
//! use folder_manager::{ClientId, FolderClient, InMemoryFileManagementApi};
//!
//! # futures::executor::block_on(async {
//! let client = FolderClient::new(InMemoryFileManagementApi::new());
//! let id = ClientId::parse("12345(67)").unwrap();
//! assert_eq!(id.year(), "1967");
//!
//! let created = client.create_folders(id.year(), id.serial()).await.unwrap();
//! assert!(created.is_some());
//!
//! // A second creation for the same client id is a conflict.
//! let again = client.create_folders(id.year(), id.serial()).await.unwrap();
//! assert!(again.is_none());
//! # });
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize` for [`Folder`], [`BranchFolder`] and [`Branch`].
//! - `tracing`: structured events for folder creation, expected absence or
//!   conflict, and backend faults.

mod api;
mod branch;
mod client;
mod client_id;
mod error;
mod folder;
mod memory;

pub use crate::api::*;
pub use crate::branch::*;
pub use crate::client::*;
pub use crate::client_id::*;
pub use crate::error::*;
pub use crate::folder::*;
pub use crate::memory::*;
