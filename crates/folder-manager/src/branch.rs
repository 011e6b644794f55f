use core::fmt;

/// One of the two fixed top-level folders under which every client gets a
/// `year/serial` hierarchy.
///
/// Both top-level folders are expected to already exist in the backend with
/// the ids returned by [`Branch::folder_id`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Branch {
    Unrestricted,
    Restricted,
}

impl Branch {
    /// Every branch, in the order results are reported.
    pub const ALL: [Self; 2] = [Self::Unrestricted, Self::Restricted];

    /// Backend id of this branch's top-level folder.
    pub const fn folder_id(self) -> &'static str {
        match self {
            Self::Unrestricted => "1",
            Self::Restricted => "2",
        }
    }

    /// Display name of this branch's top-level folder.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Unrestricted => "Unrestricted information",
            Self::Restricted => "Restricted information",
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Branch {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}
