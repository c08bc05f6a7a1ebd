//! JSON document I/O shared by the snapshot and override stores.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Result, StoreError};

/// Load a JSON document. A missing file is `None`, not an error.
pub(crate) fn load_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => return Err(StoreError::io(path, source)),
    };
    let value = serde_json::from_slice(&bytes).map_err(|source| StoreError::json(path, source))?;
    Ok(Some(value))
}

/// Replace a JSON document atomically: write a sibling temp file, then
/// rename over the target. Readers see either the old document or the new
/// one, never a partial write.
pub(crate) fn store_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| StoreError::io(parent, source))?;
    }
    let bytes =
        serde_json::to_vec_pretty(value).map_err(|source| StoreError::json(path, source))?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, bytes).map_err(|source| StoreError::io(&tmp, source))?;
    fs::rename(&tmp, path).map_err(|source| StoreError::io(path, source))?;
    Ok(())
}
