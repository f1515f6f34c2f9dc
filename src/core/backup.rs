use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::store::RecordStore;
use crate::ui::messages::success;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the records slot to `dest_file`, optionally compressing the copy
    /// into a .zip archive (the plain copy is removed afterwards).
    pub fn backup(store: &RecordStore, dest_file: &str, compress: bool) -> AppResult<()> {
        let src = store.records_slot_path();
        let dest = Path::new(dest_file);

        if !src.exists() {
            return Err(AppError::Storage(format!(
                "Nothing to back up: {} does not exist",
                src.display()
            )));
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        ensure_writable(dest, false)?;

        fs::copy(&src, dest)?;

        let final_path = if compress {
            let compressed = compress_backup(dest)?;
            if compressed != dest {
                fs::remove_file(dest)?;
            }
            compressed
        } else {
            dest.to_path_buf()
        };

        success(format!("Backup created: {}", final_path.display()));
        Ok(())
    }
}

/// Compress a backup using .zip
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut f = fs::File::open(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| AppError::Storage(format!("Invalid backup path: {}", path.display())))?;
    zip.start_file(name, options).map_err(io::Error::other)?;

    io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(io::Error::other)?;

    Ok(zip_path)
}
