//! All-or-nothing file output.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tempfile::NamedTempFile;

use crate::error::Result;
use crate::render::json::{value_to_json, JsonFormat};

/// Write `contents` to `path` atomically.
///
/// Missing parent directories are created. Data goes to a temporary file in
/// the destination directory, which is renamed over `path` once fully
/// written. On any error the temporary file is removed and `path` is left
/// as it was.
pub fn write_atomic<P: AsRef<Path>>(path: P, contents: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut temp = NamedTempFile::new_in(parent)?;
    temp.write_all(contents)?;
    temp.as_file().sync_all()?;
    temp.persist(path)?;

    log::debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

/// Serialize any model value to a JSON file.
pub fn write_json<T, P>(value: &T, path: P, format: JsonFormat) -> Result<()>
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    let json = value_to_json(value, format)?;
    write_atomic(path, json.as_bytes())
}

/// Read a model value back from a JSON file.
pub fn read_json<T, P>(path: P) -> Result<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}
