//! HTTP handlers for client folder lookup and creation.
//!
//! Both handlers follow the same shape: validate the raw client id with
//! [`ClientId`], run the matching [`FolderClient`] operation, then translate
//! the outcome. `Ok(None)` from the client is an expected absence or conflict
//! and becomes a `404`/`400`; a [`BackendError`](folder_manager::BackendError)
//! becomes a `500`.

use crate::server::{
    error::ApiError,
    telemetry::{
        increment_backend_faults, increment_conflicts, increment_folders_created,
        increment_not_found, increment_requests,
    },
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
};
use folder_manager::{ClientId, FileManagementApi, FolderClient, FolderPair};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// How an absent `clientId` is echoed in error messages.
const MISSING_CLIENT_ID: &str = "undefined";

/// Shared handler state: one [`FolderClient`] for the lifetime of the server.
pub struct FolderService<A> {
    client: Arc<FolderClient<A>>,
}

impl<A> FolderService<A>
where
    A: FileManagementApi,
{
    pub fn new(api: A) -> Self {
        Self {
            client: Arc::new(FolderClient::new(api)),
        }
    }

    pub fn client(&self) -> &FolderClient<A> {
        &self.client
    }
}

impl<A> Clone for FolderService<A> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
        }
    }
}

/// Body of a successful lookup or creation.
#[derive(Debug, Serialize)]
pub struct FoldersResponse {
    pub folders: FolderPair,
}

/// Body of `POST /folders`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFoldersRequest {
    #[serde(default)]
    pub client_id: Option<String>,
}

/// `GET /folders/{client_id}`
#[tracing::instrument(skip(service))]
pub async fn get_folders<A>(
    State(service): State<FolderService<A>>,
    Path(client_id): Path<String>,
) -> Result<Json<FoldersResponse>, ApiError>
where
    A: FileManagementApi + Send + Sync + 'static,
{
    increment_requests("get");
    let parsed: ClientId = client_id.parse()?;

    let folders = service
        .client()
        .resolve_folders(parsed.year(), parsed.serial())
        .await
        .inspect_err(|_| increment_backend_faults())?;

    match folders {
        Some(folders) => Ok(Json(FoldersResponse { folders })),
        None => {
            increment_not_found();
            Err(ApiError::NotFound { client_id })
        }
    }
}

/// `POST /folders`
///
/// An absent or `null` `clientId` is reported as `undefined`. The `Location`
/// of a created client uses its normalized `YYYY-SERIAL` form.
#[tracing::instrument(skip_all)]
pub async fn create_folders<A>(
    State(service): State<FolderService<A>>,
    payload: Result<Json<CreateFoldersRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
    A: FileManagementApi + Send + Sync + 'static,
{
    increment_requests("create");
    let Json(request) = payload?;
    let client_id = request
        .client_id
        .unwrap_or_else(|| MISSING_CLIENT_ID.to_owned());
    let parsed: ClientId = client_id.parse()?;
    tracing::debug!(%client_id, year = parsed.year(), serial = parsed.serial(), "creating folders");

    let folders = service
        .client()
        .create_folders(parsed.year(), parsed.serial())
        .await
        .inspect_err(|_| increment_backend_faults())?;

    match folders {
        Some(folders) => {
            increment_folders_created(folders.len() as u64);
            let location = format!("/folders/{parsed}");
            Ok((
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                Json(FoldersResponse { folders }),
            ))
        }
        None => {
            increment_conflicts();
            Err(ApiError::AlreadyExists { client_id })
        }
    }
}

/// `GET /health`
pub async fn health() -> &'static str {
    "ok"
}
