//! `save` and `load`: explicit persistence of the working draft.

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::draft::{load_draft, store_draft};
use crate::core::persist;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::entry::Shift;
use crate::ui::messages::success;
use crate::utils::date;

use super::audit;

pub fn handle_save(cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::new(&cfg.database)?;
    let form = load_draft(&mut pool)?;

    let key = persist::save(&mut pool, form.entry())?;

    audit(&pool, "save", &key, "Checklist saved");
    success(format!("Checklist saved as {key}"));
    Ok(())
}

pub fn handle_load(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Load {
        date: date_arg,
        shift,
    } = cmd
    {
        let date_text = date_arg
            .as_deref()
            .map(|d| date::normalize(d).unwrap_or_else(|| d.trim().to_string()))
            .unwrap_or_default();

        let shift = match shift.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(code) => Some(
                Shift::from_code(code).ok_or_else(|| AppError::InvalidShift(code.to_string()))?,
            ),
        };

        let mut pool = DbPool::new(&cfg.database)?;
        let entry = persist::load(&mut pool, &date_text, shift)?;

        let mut form = load_draft(&mut pool)?;
        form.replace(entry);
        store_draft(&mut pool, &form)?;

        let key = form.entry().storage_key().unwrap_or_default();
        audit(&pool, "load", &key, "Checklist loaded into the draft");
        success(format!("Loaded checklist {key} into the draft"));
    }
    Ok(())
}
