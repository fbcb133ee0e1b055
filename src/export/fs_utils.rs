// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use crate::utils::path::expand_tilde;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Expand `~/` and require an absolute output path.
pub(crate) fn resolve_output_path(file: &str) -> AppResult<PathBuf> {
    let path = expand_tilde(file);
    if !path.is_absolute() {
        return Err(AppError::Export(format!(
            "Output file path must be absolute: {file}"
        )));
    }
    Ok(path)
}

/// Check that the output file can be created or overwritten.
///
/// A missing file, or `force`, is fine. Otherwise the user is asked; an
/// empty or negative answer cancels the export.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;

    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => {
            info("Existing file will be overwritten.");
            Ok(())
        }
        _ => Err(AppError::Export(
            "export cancelled: existing file not overwritten".into(),
        )),
    }
}
