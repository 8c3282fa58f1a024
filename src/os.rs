use log::debug;

use crate::tree::{DTree, Result};

/// Operating system state: the directory tree and the current working directory.
///
/// The working directory is stored as the component names leading to it from the root.
/// There is no notion of `..`; every `chdir` is absolute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OsState {
    dtree: DTree,
    cwd: Vec<String>,
}

impl OsState {
    /// Creates an empty directory tree with the working directory at the root.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tree(dtree: DTree) -> Self {
        Self { dtree, cwd: Vec::new() }
    }

    pub fn dtree(&self) -> &DTree {
        &self.dtree
    }

    pub fn cwd(&self) -> &[String] {
        &self.cwd
    }

    /// Changes the working directory to the subdirectory given by `path`, or to the root
    /// if `path` is empty.
    ///
    /// ```
    /// # use dtree::OsState;
    /// let mut s = OsState::new();
    /// s.mkdir("a").unwrap();
    /// s.chdir(&["a"]).unwrap();
    /// s.mkdir("b").unwrap();
    /// s.mkdir("c").unwrap();
    /// s.chdir(&[]).unwrap();
    /// let mut paths = s.paths().unwrap();
    /// paths.sort();
    /// assert_eq!(&paths, &["/a/b/", "/a/c/"]);
    /// ```
    ///
    /// # Errors
    ///
    /// * `DirError::InvalidChild` if `path` does not name an existing directory. The
    ///   previous working directory is kept.
    pub fn chdir(&mut self, path: &[&str]) -> Result<()> {
        self.dtree.with_subdir(path, |_| ())?;
        debug!("chdir: /{}", path.join("/"));
        self.cwd = path.iter().map(|name| name.to_string()).collect();
        Ok(())
    }

    /// Makes a new subdirectory named `name` in the working directory.
    ///
    /// # Errors
    ///
    /// * `DirError::EmptyName` if `name` is empty.
    /// * `DirError::SlashInName` if `name` contains `/`.
    /// * `DirError::InvalidChild` if the working directory is invalid.
    /// * `DirError::DirExists` if `name` already exists.
    pub fn mkdir(&mut self, name: &str) -> Result<()> {
        self.dtree.with_subdir_mut(self.cwd.as_slice(), |dt| dt.mkdir(name))?
    }

    /// Paths from the working directory to each reachable leaf, in no particular order.
    ///
    /// # Errors
    ///
    /// * `DirError::InvalidChild` if the working directory is invalid.
    pub fn paths(&self) -> Result<Vec<String>> {
        self.dtree.with_subdir(self.cwd.as_slice(), |dt| dt.paths())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::DirError;

    #[test]
    fn starts_at_root_of_empty_tree() {
        let s = OsState::new();
        assert!(s.cwd().is_empty());
        assert_eq!(s.paths().unwrap(), vec!["/"]);
    }

    #[test]
    fn paths_are_relative_to_cwd() {
        let mut s = OsState::new();
        s.mkdir("a").unwrap();
        s.chdir(&["a"]).unwrap();
        s.mkdir("b").unwrap();
        s.chdir(&["a", "b"]).unwrap();
        s.mkdir("d").unwrap();
        s.chdir(&["a"]).unwrap();
        s.mkdir("c").unwrap();

        assert_eq!(s.cwd(), &["a"]);
        assert_eq!(s.paths().unwrap(), vec!["/b/d/", "/c/"]);
        s.chdir(&[]).unwrap();
        assert_eq!(s.paths().unwrap(), vec!["/a/b/d/", "/a/c/"]);
        assert_eq!(s.dtree().sorted_paths(), vec!["/a/b/d/", "/a/c/"]);
    }

    #[test]
    fn failed_chdir_keeps_cwd() {
        let mut s = OsState::new();
        s.mkdir("a").unwrap();
        s.chdir(&["a"]).unwrap();
        assert_eq!(
            s.chdir(&["a", "missing"]),
            Err(DirError::InvalidChild(String::from("missing")))
        );
        assert_eq!(s.cwd(), &["a"]);
    }

    #[test]
    fn mkdir_errors_pass_through() {
        let mut s = OsState::new();
        s.mkdir("a").unwrap();
        assert_eq!(s.mkdir("a"), Err(DirError::DirExists(String::from("a"))));
        assert_eq!(s.mkdir("x/y"), Err(DirError::SlashInName(String::from("x/y"))));
        assert_eq!(s.mkdir(""), Err(DirError::EmptyName));
    }

    #[test]
    fn wraps_an_existing_tree() {
        let mut dt = DTree::new();
        dt.mkdir("etc").unwrap();
        let mut s = OsState::from_tree(dt);
        s.chdir(&["etc"]).unwrap();
        s.mkdir("hosts").unwrap();
        assert_eq!(s.paths().unwrap(), vec!["/hosts/"]);
    }
}
