use crate::{BackendError, Branch, FileManagementApi, Folder, Result};
use parking_lot::Mutex;
use std::collections::HashMap;

/// A process-local [`FileManagementApi`] backed by a map.
///
/// Starts out holding only the two top-level [`Branch`] folders. Ids are
/// assigned sequentially after them. Nothing is persisted.
///
/// Like most document-management systems it does not enforce unique names
/// under a parent; it is the caller's job to look before creating.
#[derive(Debug)]
pub struct InMemoryFileManagementApi {
    state: Mutex<State>,
}

#[derive(Debug)]
struct State {
    next_id: u64,
    folders: HashMap<String, Entry>,
}

#[derive(Debug)]
struct Entry {
    parent_id: Option<String>,
    name: String,
}

impl InMemoryFileManagementApi {
    pub fn new() -> Self {
        let folders = Branch::ALL
            .iter()
            .map(|branch| {
                let entry = Entry {
                    parent_id: None,
                    name: branch.name().to_owned(),
                };
                (branch.folder_id().to_owned(), entry)
            })
            .collect::<HashMap<_, _>>();

        Self {
            state: Mutex::new(State {
                next_id: folders.len() as u64 + 1,
                folders,
            }),
        }
    }

    /// Number of folders held, including the top-level ones.
    pub fn len(&self) -> usize {
        self.state.lock().folders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryFileManagementApi {
    fn default() -> Self {
        Self::new()
    }
}

impl FileManagementApi for InMemoryFileManagementApi {
    async fn get_folder_by_id(&self, id: &str) -> Result<Option<Folder>> {
        let state = self.state.lock();
        Ok(state
            .folders
            .get(id)
            .map(|entry| Folder::new(id, entry.name.as_str())))
    }

    async fn get_folder_by_name(
        &self,
        parent_folder_id: &str,
        name: &str,
    ) -> Result<Option<Folder>> {
        let state = self.state.lock();
        Ok(state
            .folders
            .iter()
            .find(|(_, entry)| {
                entry.name == name && entry.parent_id.as_deref() == Some(parent_folder_id)
            })
            .map(|(id, entry)| Folder::new(id.as_str(), entry.name.as_str())))
    }

    async fn create_folder(&self, parent_folder_id: &str, name: &str) -> Result<Folder> {
        let mut state = self.state.lock();
        if !state.folders.contains_key(parent_folder_id) {
            return Err(BackendError::new(format!(
                "no folder with id '{parent_folder_id}'"
            )));
        }

        let id = state.next_id.to_string();
        state.next_id += 1;
        state.folders.insert(
            id.clone(),
            Entry {
                parent_id: Some(parent_folder_id.to_owned()),
                name: name.to_owned(),
            },
        );
        Ok(Folder::new(id, name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeded_with_top_level_folders() {
        let api = InMemoryFileManagementApi::new();
        assert_eq!(api.len(), 2);

        let unrestricted = api.get_folder_by_id("1").await.unwrap().unwrap();
        assert_eq!(unrestricted.name, "Unrestricted information");
        let restricted = api.get_folder_by_id("2").await.unwrap().unwrap();
        assert_eq!(restricted.name, "Restricted information");
        assert_eq!(api.get_folder_by_id("3").await.unwrap(), None);
    }

    #[tokio::test]
    async fn creates_and_finds_children_by_name() {
        let api = InMemoryFileManagementApi::new();
        let year = api.create_folder("1", "1967").await.unwrap();
        assert_eq!(year, Folder::new("3", "1967"));

        let found = api.get_folder_by_name("1", "1967").await.unwrap();
        assert_eq!(found, Some(year.clone()));
        assert_eq!(api.get_folder_by_id(&year.id).await.unwrap(), Some(year));
    }

    #[tokio::test]
    async fn lookup_is_scoped_to_parent() {
        let api = InMemoryFileManagementApi::new();
        api.create_folder("1", "1967").await.unwrap();

        assert_eq!(api.get_folder_by_name("2", "1967").await.unwrap(), None);
        assert_eq!(api.get_folder_by_name("1", "1968").await.unwrap(), None);
    }

    #[tokio::test]
    async fn create_under_unknown_parent_is_a_fault() {
        let api = InMemoryFileManagementApi::new();
        let err = api.create_folder("42", "1967").await.unwrap_err();
        assert_eq!(err.message(), "no folder with id '42'");
        assert_eq!(api.len(), 2);
    }

    #[tokio::test]
    async fn works_through_arc() {
        let api = std::sync::Arc::new(InMemoryFileManagementApi::new());
        let folder = api.create_folder("2", "2000").await.unwrap();
        let found = FileManagementApi::get_folder_by_name(&api, "2", "2000")
            .await
            .unwrap();
        assert_eq!(found, Some(folder));
    }
}
