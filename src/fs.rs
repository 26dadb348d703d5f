//! Capability-scoped file access helpers.
//!
//! Every file the tool touches is opened through a `cap_std` directory
//! handle for its parent, so path handling lives in one place.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

use crate::error::ReviewError;

/// An opened parent directory together with the file name inside it.
#[derive(Debug)]
pub(crate) struct ParentDir {
    /// Handle for the directory that contains the file.
    pub(crate) dir: Dir,
    /// File name relative to `dir`.
    pub(crate) file_name: Utf8PathBuf,
}

/// Opens the parent directory of `path`.
///
/// When `create` is set, missing parent directories are created first.
pub(crate) fn open_parent_dir(path: &Utf8Path, create: bool) -> Result<ParentDir, ReviewError> {
    let file_name = path.file_name().ok_or_else(|| ReviewError::Io {
        message: format!("invalid path '{path}': no file name"),
    })?;
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));

    if create && parent != Utf8Path::new(".") {
        create_dir_all(parent)?;
    }

    let dir = Dir::open_ambient_dir(parent, ambient_authority())
        .map_err(|error| ReviewError::io(&format!("failed to open directory '{parent}'"), &error))?;

    Ok(ParentDir {
        dir,
        file_name: Utf8PathBuf::from(file_name),
    })
}

fn create_dir_all(parent: &Utf8Path) -> Result<(), ReviewError> {
    let (base, relative) = if parent.is_absolute() {
        let relative = parent.strip_prefix("/").map_err(|_| ReviewError::Io {
            message: format!("failed to normalise directory '{parent}'"),
        })?;
        ("/", relative)
    } else {
        (".", parent)
    };

    if relative.as_str().is_empty() {
        return Ok(());
    }

    let root = Dir::open_ambient_dir(base, ambient_authority())
        .map_err(|error| ReviewError::io(&format!("failed to open directory '{base}'"), &error))?;
    root.create_dir_all(relative)
        .map_err(|error| ReviewError::io(&format!("failed to create directory '{parent}'"), &error))
}
