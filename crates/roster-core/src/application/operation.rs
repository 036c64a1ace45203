use std::fmt;

/// The remote operations a collection (or a direct caller) can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionOperation {
    Fetch,
    Get,
    Create,
    Update,
    Delete,
}

impl CollectionOperation {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fetch => "fetch",
            Self::Get => "get",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }

    /// The message shown to the user when this operation fails.
    pub const fn failure_message(&self) -> &'static str {
        match self {
            Self::Fetch => "Failed to fetch users",
            Self::Get => "Failed to fetch user",
            Self::Create => "Failed to create user",
            Self::Update => "Failed to update user",
            Self::Delete => "Failed to delete user",
        }
    }
}

impl fmt::Display for CollectionOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
