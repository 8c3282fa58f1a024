//! A simulated directory tree and an operating system stub to interact with it.
//!
//! Nothing here touches the real filesystem. A [`DTree`] is plain owned data: each
//! directory owns its entries, each entry owns its sub-directory.

pub mod tree;
pub mod os;

pub use os::OsState;
pub use tree::{node::DEnt, DTree, DirError, Result};
