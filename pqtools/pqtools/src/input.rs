use std::{fs::File, io, path::Path};

use crate::error::PqToolsError;

/// Open an input file, separating "absent" from other I/O failures.
pub(crate) fn open_input(path: &Path) -> Result<File, PqToolsError> {
    File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => PqToolsError::NotFound {
            path: path.to_path_buf(),
        },
        _ => PqToolsError::Open {
            path: path.to_path_buf(),
            source,
        },
    })
}
