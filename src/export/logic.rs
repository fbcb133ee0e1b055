// src/export/logic.rs

use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::require_run;
use crate::errors::AppResult;
use crate::export::fs_utils::{ensure_writable, resolve_output_path};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{AuditExport, WinnerExport};
use crate::export::{ExportFormat, ExportKind};
use crate::raffle::build_audit;
use crate::ui::messages::warning;
use serde::Serialize;
use std::path::Path;

/// High-level export of a stored run.
pub struct ExportLogic;

impl ExportLogic {
    /// Export winners or the ticket audit of run `run_id`.
    ///
    /// - `file`: absolute output path (`~/` is expanded)
    /// - `default_prize`: audit label for entries without a prize
    #[allow(clippy::too_many_arguments)]
    pub fn export(
        pool: &mut DbPool,
        user_id: &str,
        run_id: &str,
        kind: ExportKind,
        format: ExportFormat,
        file: &str,
        default_prize: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = resolve_output_path(file)?;
        ensure_writable(&path, force)?;

        let run = require_run(&pool.conn, user_id, run_id)?;

        let written = match kind {
            ExportKind::Winners => {
                let rows: Vec<WinnerExport> = run.winners.iter().map(WinnerExport::from).collect();
                write_rows(&rows, format, &path)?
            }
            ExportKind::Audit => {
                let rows: Vec<AuditExport> = build_audit(&run.entries, default_prize)
                    .into_iter()
                    .map(AuditExport::from)
                    .collect();
                write_rows(&rows, format, &path)?
            }
        };

        if written == 0 {
            warning(format!("Run {run_id} has no {} to export.", kind.as_str()));
            return Ok(());
        }

        ttlog_quiet(
            &pool.conn,
            "export",
            run_id,
            &format!(
                "Exported {written} {} rows as {} to {}",
                kind.as_str(),
                format.as_str(),
                path.display()
            ),
        );

        Ok(())
    }
}

/// Write `rows`, returning how many were written (nothing is written when
/// there are none).
fn write_rows<T: Serialize>(rows: &[T], format: ExportFormat, path: &Path) -> AppResult<usize> {
    if rows.is_empty() {
        return Ok(0);
    }

    match format {
        ExportFormat::Csv => export_csv(rows, path)?,
        ExportFormat::Json => export_json(rows, path)?,
    }

    Ok(rows.len())
}
