//! Locations in files, for pointing reports at the source of a problem.

use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Loc {
    pathname: Arc<PathBuf>,
    /// line 0 means the loc applies to the file as a whole.
    pub line: u32,
    pub column: u32,
}

impl Loc {
    pub fn for_file(pathname: &Path) -> Self {
        Loc { pathname: Arc::new(pathname.to_path_buf()), line: 0, column: 0 }
    }

    /// Lines and columns are 1-based here, like in the error messages of the parsers we use.
    pub fn new(pathname: &Path, line: usize, column: usize) -> Self {
        Loc {
            pathname: Arc::new(pathname.to_path_buf()),
            line: u32::try_from(line).unwrap_or(u32::MAX),
            column: u32::try_from(column).unwrap_or(u32::MAX),
        }
    }

    pub fn pathname(&self) -> &Path {
        &self.pathname
    }
}
