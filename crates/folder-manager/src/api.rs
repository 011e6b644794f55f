use crate::{Folder, Result};
use core::future::Future;
use std::sync::Arc;

/// The operations the folder client needs from a document-management backend.
///
/// Implementations are remote services in production and test doubles in
/// tests. Every method resolves to [`BackendError`](crate::BackendError) on a
/// backend fault. A missing folder is `Ok(None)`, not an error.
pub trait FileManagementApi {
    /// Fetches a folder by its backend id.
    fn get_folder_by_id(&self, id: &str) -> impl Future<Output = Result<Option<Folder>>> + Send;

    /// Fetches the child folder called `name` directly under
    /// `parent_folder_id`.
    fn get_folder_by_name(
        &self,
        parent_folder_id: &str,
        name: &str,
    ) -> impl Future<Output = Result<Option<Folder>>> + Send;

    /// Creates a folder called `name` under `parent_folder_id` and returns it.
    fn create_folder(
        &self,
        parent_folder_id: &str,
        name: &str,
    ) -> impl Future<Output = Result<Folder>> + Send;
}

impl<A> FileManagementApi for Arc<A>
where
    A: FileManagementApi + Send + Sync,
{
    fn get_folder_by_id(&self, id: &str) -> impl Future<Output = Result<Option<Folder>>> + Send {
        (**self).get_folder_by_id(id)
    }

    fn get_folder_by_name(
        &self,
        parent_folder_id: &str,
        name: &str,
    ) -> impl Future<Output = Result<Option<Folder>>> + Send {
        (**self).get_folder_by_name(parent_folder_id, name)
    }

    fn create_folder(
        &self,
        parent_folder_id: &str,
        name: &str,
    ) -> impl Future<Output = Result<Folder>> + Send {
        (**self).create_folder(parent_folder_id, name)
    }
}
