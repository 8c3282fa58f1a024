use log::{debug, trace};
use thiserror::Error;

pub mod node;

use node::DEnt;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirError {
    #[error("empty name is invalid")]
    EmptyName,
    /// `/` is the path separator, so it can never appear inside a component name.
    #[error("{0}: slash in name is invalid")]
    SlashInName(String),
    /// Only one sub-directory of a given name can exist in any directory.
    #[error("{0}: directory exists")]
    DirExists(String),
    #[error("{0}: invalid element in path")]
    InvalidChild(String),
}

pub type Result<T> = std::result::Result<T, DirError>;

/// A directory tree. A tree without children is a leaf.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DTree {
    pub children: Vec<DEnt>,
}

impl DTree {
    /// Creates an empty directory tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a tree from already constructed entries, keeping their order.
    ///
    /// # Errors
    ///
    /// * `DirError::DirExists` if two entries share a name.
    pub fn from_entries(entries: Vec<DEnt>) -> Result<Self> {
        let mut tree = Self::new();
        for entry in entries {
            if tree.get_child(&entry.name).is_some() {
                return Err(DirError::DirExists(entry.name));
            }
            tree.children.push(entry);
        }
        Ok(tree)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn get_child(&self, name: &str) -> Option<&DTree> {
        self.children
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| &entry.subdir)
    }

    pub fn get_child_mut(&mut self, name: &str) -> Option<&mut DTree> {
        self.children
            .iter_mut()
            .find(|entry| entry.name == name)
            .map(|entry| &mut entry.subdir)
    }

    /// Makes an empty subdirectory with the given name in this directory.
    ///
    /// ```
    /// # use dtree::DTree;
    /// let mut dt = DTree::new();
    /// dt.mkdir("test").unwrap();
    /// assert_eq!(&dt.paths(), &["/test/"]);
    /// ```
    ///
    /// # Errors
    ///
    /// * `DirError::EmptyName` if `name` is empty.
    /// * `DirError::SlashInName` if `name` contains `/`.
    /// * `DirError::DirExists` if `name` already exists.
    pub fn mkdir(&mut self, name: &str) -> Result<()> {
        let entry = DEnt::leaf(name)?;
        if self.get_child(name).is_some() {
            return Err(DirError::DirExists(entry.name));
        }
        debug!("mkdir: {}", name);
        self.children.push(entry);
        Ok(())
    }

    fn walk<S: AsRef<str>>(&self, path: &[S]) -> Result<&DTree> {
        let mut current = self;
        for name in path {
            let name = name.as_ref();
            trace!("walk: entering '{}'", name);
            current = current
                .get_child(name)
                .ok_or_else(|| DirError::InvalidChild(name.to_string()))?;
        }
        Ok(current)
    }

    fn walk_mut<S: AsRef<str>>(&mut self, path: &[S]) -> Result<&mut DTree> {
        let mut current = self;
        for name in path {
            let name = name.as_ref();
            trace!("walk_mut: entering '{}'", name);
            current = current
                .get_child_mut(name)
                .ok_or_else(|| DirError::InvalidChild(name.to_string()))?;
        }
        Ok(current)
    }

    /// Traverses to the subdirectory given by `path` and then calls `f` to visit it.
    /// An empty `path` visits this directory.
    ///
    /// ```
    /// # use dtree::DTree;
    /// let mut dt = DTree::new();
    /// dt.mkdir("test").unwrap();
    /// let paths = dt.with_subdir(&["test"], |dt| dt.paths()).unwrap();
    /// assert_eq!(&paths, &["/"]);
    /// ```
    ///
    /// # Errors
    ///
    /// * `DirError::InvalidChild` naming the first component of `path` that does not exist.
    pub fn with_subdir<'b, S, F, R>(&'b self, path: &[S], f: F) -> Result<R>
    where
        S: AsRef<str>,
        F: FnOnce(&'b DTree) -> R,
    {
        self.walk(path).map(f)
    }

    /// Mutable counterpart of [`DTree::with_subdir`].
    ///
    /// ```
    /// # use dtree::DTree;
    /// let mut dt = DTree::new();
    /// dt.mkdir("a").unwrap();
    /// dt.with_subdir_mut(&["a"], |dt| dt.mkdir("b")).unwrap().unwrap();
    /// assert_eq!(&dt.paths(), &["/a/b/"]);
    /// ```
    ///
    /// # Errors
    ///
    /// * `DirError::InvalidChild` naming the first component of `path` that does not exist.
    pub fn with_subdir_mut<'b, S, F, R>(&'b mut self, path: &[S], f: F) -> Result<R>
    where
        S: AsRef<str>,
        F: FnOnce(&'b mut DTree) -> R,
    {
        self.walk_mut(path).map(f)
    }

    /// Produces the path to each reachable leaf, in no particular order.
    ///
    /// Every component is prefixed by `/` and a leaf contributes a final `/`, so a leaf `d`
    /// under `a/b` yields `/a/b/d/`. An empty tree is itself a leaf and yields `/`.
    ///
    /// ```
    /// # use dtree::DTree;
    /// let mut dt = DTree::new();
    /// dt.mkdir("a").unwrap();
    /// dt.with_subdir_mut(&["a"], |dt| dt.mkdir("b")).unwrap().unwrap();
    /// dt.with_subdir_mut(&["a"], |dt| dt.mkdir("c")).unwrap().unwrap();
    /// let mut paths = dt.paths();
    /// paths.sort();
    /// assert_eq!(&paths, &["/a/b/", "/a/c/"]);
    /// ```
    pub fn paths(&self) -> Vec<String> {
        if self.is_leaf() {
            return vec![String::from("/")];
        }
        let mut result = Vec::new();
        for entry in &self.children {
            for suffix in entry.subdir.paths() {
                result.push(format!("/{}{}", entry.name, suffix));
            }
        }
        result
    }

    /// [`DTree::paths`] in ascending byte order.
    pub fn sorted_paths(&self) -> Vec<String> {
        let mut paths = self.paths();
        paths.sort();
        paths
    }
}
