use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::draft::load_draft;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::export_pdf;
use std::path::PathBuf;

use super::audit;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        file,
        force,
        allow_incomplete,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        let form = load_draft(&mut pool)?;

        let missing = form.missing_fields().len();
        if missing > 0 && !*allow_incomplete {
            return Err(AppError::Incomplete(missing));
        }

        let path = PathBuf::from(file.as_deref().unwrap_or(&cfg.report.file_name));
        export_pdf(form.entry(), &cfg.report, &path, *force)?;

        audit(
            &pool,
            "export",
            &path.display().to_string(),
            "PDF report written",
        );
    }
    Ok(())
}
