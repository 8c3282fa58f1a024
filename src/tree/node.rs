use super::{DTree, DirError, Result};

/// A directory entry: a named edge from a directory to its sub-directory.
/// The name is a single path component and never contains `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DEnt {
    pub name: String,
    pub subdir: DTree,
}

impl DEnt {
    fn validate_name(name: &str) -> Result<()> {
        if name.is_empty() {
            Err(DirError::EmptyName)
        } else if name.contains('/') {
            Err(DirError::SlashInName(name.to_string()))
        } else {
            Ok(())
        }
    }

    /// Returns an entry named `name` that owns `subdir`.
    ///
    /// # Errors
    ///
    /// * `DirError::EmptyName` if `name` is empty.
    /// * `DirError::SlashInName` if `name` contains `/`.
    pub fn new<A: Into<String>>(name: A, subdir: DTree) -> Result<Self> {
        let name = name.into();
        Self::validate_name(&name)?;
        Ok(Self { name, subdir })
    }

    /// Returns an entry whose sub-directory is empty.
    pub fn leaf<A: Into<String>>(name: A) -> Result<Self> {
        Self::new(name, DTree::new())
    }
}
