use crate::Branch;

/// A folder as returned by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Folder {
    pub id: String,
    pub name: String,
}

impl Folder {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Tags this folder with the branch it was resolved in.
    pub fn in_branch(self, branch: Branch) -> BranchFolder {
        BranchFolder {
            id: self.id,
            name: self.name,
            top_level_folder: branch,
        }
    }
}

/// A client's serial folder, tagged with the branch it lives under.
///
/// Serializes as `{"id", "name", "topLevelFolder"}` where `topLevelFolder` is
/// the branch's display name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BranchFolder {
    pub id: String,
    pub name: String,
    pub top_level_folder: Branch,
}

/// The client's folders, always `[Unrestricted, Restricted]`.
pub type FolderPair = [BranchFolder; 2];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_branch_keeps_backend_fields() {
        let folder = Folder::new("5", "12345").in_branch(Branch::Unrestricted);
        assert_eq!(folder.id, "5");
        assert_eq!(folder.name, "12345");
        assert_eq!(folder.top_level_folder, Branch::Unrestricted);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn branch_folder_wire_format() {
        let folder = Folder::new("6", "12345").in_branch(Branch::Restricted);
        let json = serde_json::to_value(&folder).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "6",
                "name": "12345",
                "topLevelFolder": "Restricted information"
            })
        );
    }
}
