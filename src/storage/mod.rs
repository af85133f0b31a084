//! Flat certificate storage on disk.
//!
//! Every stored file lives directly under one directory; the synthesized
//! filename carries the person id, competency id, and upload timestamp, so
//! there is no separate metadata record to keep in sync.

use std::io;
use std::path::{Path, PathBuf};
use tokio::fs::File;

/// Handle to the directory holding all certificate files.
#[derive(Clone, Debug)]
pub struct StorageDir {
  root: PathBuf,
}

impl StorageDir {
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self { root: root.into() }
  }

  pub fn root(&self) -> &Path {
    &self.root
  }

  /// Create the directory (and parents) if absent, mode 0755 on Unix.
  /// Existing directories are left untouched; nothing ever removes it.
  pub async fn ensure(&self) -> io::Result<()> {
    if tokio::fs::try_exists(&self.root).await? {
      return Ok(());
    }
    tokio::fs::create_dir_all(&self.root).await?;
    #[cfg(unix)]
    {
      use std::os::unix::fs::PermissionsExt;
      tokio::fs::set_permissions(&self.root, std::fs::Permissions::from_mode(0o755)).await?;
    }
    Ok(())
  }

  fn resolve(&self, name: &str) -> PathBuf {
    self.root.join(name)
  }

  /// Persist `bytes` under `name`, overwriting any existing file.
  pub async fn save(&self, name: &str, bytes: &[u8]) -> io::Result<()> {
    self.ensure().await?;
    tokio::fs::write(self.resolve(name), bytes).await
  }

  /// Remove `name`. `Ok(false)` means the file was not there to begin with.
  pub async fn remove(&self, name: &str) -> io::Result<bool> {
    match tokio::fs::remove_file(self.resolve(name)).await {
      Ok(()) => Ok(true),
      Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
      Err(e) => Err(e),
    }
  }

  /// Open `name` for reading, returning the handle and its byte length.
  /// `Ok(None)` when the name does not exist or is not a regular file.
  pub async fn open(&self, name: &str) -> io::Result<Option<(File, u64)>> {
    let file = match File::open(self.resolve(name)).await {
      Ok(f) => f,
      Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
      Err(e) => return Err(e),
    };
    let meta = file.metadata().await?;
    if !meta.is_file() {
      return Ok(None);
    }
    Ok(Some((file, meta.len())))
  }
}

/// Reduce a client-supplied name to its final path segment. `None` for
/// names that reduce to nothing usable (empty, `.`, `..`), so callers can
/// never build a path that escapes the storage directory.
pub fn sanitize_name(name: &str) -> Option<&str> {
  let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
  match base {
    "" | "." | ".." => None,
    _ => Some(base),
  }
}

/// Extension of a client filename: the suffix after the last dot of its
/// final path segment, verbatim, empty when there is no dot.
pub fn extension_of(original: &str) -> &str {
  let base = original.rsplit(['/', '\\']).next().unwrap_or(original);
  match base.rsplit_once('.') {
    Some((_, ext)) => ext,
    None => "",
  }
}

/// Build the stored name `{personId}_{competencyId}_{timestamp}.{ext}`.
/// The dot is always present, even for an empty extension.
pub fn synthesize_name(
  person_id: &str,
  competency_id: &str,
  timestamp: i64,
  original: &str,
) -> String {
  format!(
    "{person_id}_{competency_id}_{timestamp}.{}",
    extension_of(original)
  )
}
