//! Two-branch folder resolution and creation.
//!
//! Every client owns one `year/serial` folder under each [`Branch`]. The
//! [`FolderClient`] runs the same per-branch workflow for both branches
//! concurrently and joins their outcomes:
//!
//! - both branches produce a folder: `Ok(Some([unrestricted, restricted]))`
//! - a branch reports an expected absence (read) or conflict (write):
//!   `Ok(None)`
//! - a branch hits a backend fault: `Err(BackendError)` carrying the fault
//!
//! When both branches fail, the one that finished first decides the outcome.
//! Both branch futures are always driven to completion, so a failure in one
//! branch never abandons the other half-way through its creations.
//!
//! There is no locking around check-then-create. Two concurrent
//! [`FolderClient::create_folders`] calls for the same client may both find
//! the serial folder absent and both create it.

use crate::{BackendError, Branch, BranchFolder, FileManagementApi, FolderPair, Result};
use core::{future::Future, pin::pin};
use futures::future::{Either, select};


/// Why a single branch did not produce a folder.
#[derive(Debug)]
enum BranchError {
    /// The backend failed.
    Fault(BackendError),
    /// Read path: the year or serial folder does not exist.
    Absent(String),
    /// Write path: the serial folder already exists.
    Exists(String),
}

impl From<BackendError> for BranchError {
    fn from(err: BackendError) -> Self {
        Self::Fault(err)
    }
}

type BranchResult = core::result::Result<BranchFolder, BranchError>;

/// Resolves and provisions client folders in a [`FileManagementApi`].
///
/// Holds no state besides the backend handle; construct it once and share it.
#[derive(Debug)]
pub struct FolderClient<A> {
    api: A,
}

impl<A> FolderClient<A>
where
    A: FileManagementApi,
{
    pub const fn new(api: A) -> Self {
        Self { api }
    }

    /// The backend this client talks to.
    pub const fn api(&self) -> &A {
        &self.api
    }

    /// Looks up the client's serial folder in both branches.
    ///
    /// Returns `Ok(None)` if either branch lacks the year or serial folder.
    /// Never creates anything.
    ///
    /// # Errors
    ///
    /// Returns the first backend fault observed.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self)))]
    pub async fn resolve_folders(&self, year: &str, serial: &str) -> Result<Option<FolderPair>> {
        settle(
            self.resolve_branch(Branch::Unrestricted, year, serial),
            self.resolve_branch(Branch::Restricted, year, serial),
        )
        .await
    }

    /// Creates the client's serial folder in both branches, creating the year
    /// folder first where it is missing.
    ///
    /// Returns `Ok(None)` if the serial folder already exists in either
    /// branch. An existing serial folder is never created a second time.
    ///
    /// # Errors
    ///
    /// Returns the first backend fault observed.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self)))]
    pub async fn create_folders(&self, year: &str, serial: &str) -> Result<Option<FolderPair>> {
        settle(
            self.create_branch(Branch::Unrestricted, year, serial),
            self.create_branch(Branch::Restricted, year, serial),
        )
        .await
    }

    async fn resolve_branch(&self, branch: Branch, year: &str, serial: &str) -> BranchResult {
        let Some(year_folder) = self.api.get_folder_by_name(branch.folder_id(), year).await?
        else {
            return Err(BranchError::Absent(format!(
                "{branch} had no folder for year '{year}'"
            )));
        };

        let Some(folder) = self.api.get_folder_by_name(&year_folder.id, serial).await? else {
            return Err(BranchError::Absent(format!(
                "{branch} for year '{year}' had no folder with name '{serial}'"
            )));
        };

        Ok(folder.in_branch(branch))
    }

    async fn create_branch(&self, branch: Branch, year: &str, serial: &str) -> BranchResult {
        let year_folder = match self.api.get_folder_by_name(branch.folder_id(), year).await? {
            Some(folder) => folder,
            None => {
                #[cfg(feature = "tracing")]
                tracing::info!("creating folder for year '{year}' in type '{branch}'");
                self.api.create_folder(branch.folder_id(), year).await?
            }
        };

        if self
            .api
            .get_folder_by_name(&year_folder.id, serial)
            .await?
            .is_some()
        {
            return Err(BranchError::Exists(format!(
                "{branch} has an existing folder in year '{year}' with name '{serial}'"
            )));
        }

        #[cfg(feature = "tracing")]
        tracing::info!(
            "creating folder with name '{serial}' in year '{year}' with type '{branch}'"
        );
        let folder = self.api.create_folder(&year_folder.id, serial).await?;
        Ok(folder.in_branch(branch))
    }
}

/// Drives both branches to completion and joins them into one outcome.
///
/// The branch that completes first is the one whose failure is reported.
/// `select` polls the unrestricted branch first, so it wins ties.
async fn settle<U, R>(unrestricted: U, restricted: R) -> Result<Option<FolderPair>>
where
    U: Future<Output = BranchResult>,
    R: Future<Output = BranchResult>,
{
    let unrestricted = pin!(unrestricted);
    let restricted = pin!(restricted);

    let (unrestricted, restricted, restricted_first) =
        match select(unrestricted, restricted).await {
            Either::Left((done, pending)) => (done, pending.await, false),
            Either::Right((done, pending)) => (pending.await, done, true),
        };

    let failure = match (unrestricted, restricted) {
        (Ok(unrestricted), Ok(restricted)) => return Ok(Some([unrestricted, restricted])),
        (Err(err), Ok(_)) | (Ok(_), Err(err)) => err,
        (Err(first), Err(_)) if !restricted_first => first,
        (Err(_), Err(first)) => first,
    };

    match failure {
        BranchError::Fault(err) => {
            #[cfg(feature = "tracing")]
            tracing::error!("backend fault: {err}");
            Err(err)
        }
        BranchError::Absent(_reason) | BranchError::Exists(_reason) => {
            #[cfg(feature = "tracing")]
            tracing::info!("{_reason}");
            Ok(None)
        }
    }
}
