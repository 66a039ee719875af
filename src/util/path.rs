use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::domain::error::DomainError;

pub trait PathExt {
    fn is_record_file(&self) -> bool;
    fn to_canonical(&self) -> Result<PathBuf, DomainError>;
}

impl PathExt for Path {
    fn is_record_file(&self) -> bool {
        matches!(
            self.extension().and_then(OsStr::to_str),
            Some("tsv") | Some("txt")
        )
    }

    fn to_canonical(&self) -> Result<PathBuf, DomainError> {
        self.canonicalize().map_err(|e| DomainError::PathResolution {
            path: self.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

pub fn ensure_file_exists(path: &Path) -> Result<(), DomainError> {
    if !path.exists() {
        Err(DomainError::FileNotFound(path.to_path_buf()))
    } else if !path.is_file() {
        Err(DomainError::InvalidFormat {
            path: path.to_path_buf(),
            reason: "Not a file".to_string(),
        })
    } else {
        Ok(())
    }
}
