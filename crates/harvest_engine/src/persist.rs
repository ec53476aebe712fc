use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("output directory missing or not writable: {0}")]
    OutputDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Artifact flavor written for every harvested item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Unnormalized HTML-bearing record.
    Raw,
    /// Normalized plain-text record.
    Clean,
}

impl Variant {
    pub fn dir_name(self) -> &'static str {
        match self {
            Variant::Raw => "raw",
            Variant::Clean => "clean",
        }
    }
}

/// Ensure output directory exists; create if missing.
pub fn ensure_output_dir(dir: &Path) -> Result<(), PersistError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(PersistError::OutputDir("path is not a directory".into()));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
    }
    // Basic writability probe: try creating a temp file.
    NamedTempFile::new_in(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
    Ok(())
}

/// Writes item artifacts under the deterministic
/// `{root}/site-{id}/{variant}/{type_slug}/{stem}.txt` layout.
///
/// Writes are atomic and last-write-wins: a temp file in the target
/// directory is renamed over any existing artifact, so re-runs overwrite
/// in full and a failed write leaves no partial file.
pub struct ArtifactWriter {
    root: PathBuf,
}

impl ArtifactWriter {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Pure function of `(site, variant, type slug, stem)`.
    pub fn artifact_path(
        &self,
        site_id: u64,
        variant: Variant,
        type_slug: &str,
        stem: &str,
    ) -> PathBuf {
        self.root
            .join(format!("site-{site_id}"))
            .join(variant.dir_name())
            .join(type_slug)
            .join(format!("{stem}.txt"))
    }

    pub fn write(
        &self,
        site_id: u64,
        variant: Variant,
        type_slug: &str,
        stem: &str,
        content: &str,
    ) -> Result<PathBuf, PersistError> {
        let target = self.artifact_path(site_id, variant, type_slug, stem);
        let dir = target
            .parent()
            .ok_or_else(|| PersistError::OutputDir("artifact path has no parent".into()))?;
        ensure_output_dir(dir)?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;

        // Replace existing file if present to keep determinism.
        if target.exists() {
            fs::remove_file(&target)?;
        }
        tmp.persist(&target).map_err(|e| PersistError::Io(e.error))?;
        Ok(target)
    }
}
