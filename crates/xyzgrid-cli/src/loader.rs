//! Reading XYZ token files from disk.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use xyzgrid_core::{Loaded, parse_tokens};

/// Errors from reading an input file.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum LoadError {
    /// The path does not exist or is not a regular file.
    #[display("file not found: {}", path.display())]
    NotFound {
        /// Absolute form of the requested path.
        path: PathBuf,
    },
    /// The file exists but could not be read.
    #[display("cannot read {}: {source}", path.display())]
    Read {
        /// Absolute form of the requested path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

/// Reads `path` and decodes its XYZ tokens.
///
/// Bytes that are not valid UTF-8 are replaced before tokenizing, so they only
/// cause the tokens containing them to be skipped.
///
/// # Errors
///
/// Returns [`LoadError::NotFound`] if `path` is not an existing regular file,
/// and [`LoadError::Read`] if reading it fails.
pub fn load_file(path: &Path) -> Result<Loaded, LoadError> {
    let shown = absolute(path);
    if !path.is_file() {
        return Err(LoadError::NotFound { path: shown });
    }

    let bytes = fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound {
            path: shown.clone(),
        },
        _ => LoadError::Read {
            path: shown.clone(),
            source,
        },
    })?;
    log::info!("read {} bytes from {}", bytes.len(), shown.display());

    Ok(parse_tokens(&String::from_utf8_lossy(&bytes)))
}

/// Returns `path` made absolute, or unchanged if the working directory is unavailable.
pub(crate) fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_owned())
}
