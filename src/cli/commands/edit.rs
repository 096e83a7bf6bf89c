//! `new` and `set`: edit the working draft.

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::draft::{load_draft, store_draft};
use crate::core::field::parse_assignment;
use crate::core::store::FormStore;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::entry::Shift;
use crate::ui::messages::{info, success, warning};
use crate::utils::date;

use super::audit;

pub fn handle_new(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::New {
        date: date_arg,
        today,
        shift,
    } = cmd
    {
        let mut form = FormStore::new();

        if *today {
            form.set_date(date::today().format("%Y-%m-%d").to_string());
        } else if let Some(d) = date_arg {
            let d = date::normalize(d).ok_or_else(|| AppError::InvalidDate(d.to_string()))?;
            form.set_date(d);
        }

        if let Some(code) = shift {
            let s = Shift::from_code(code).ok_or_else(|| AppError::InvalidShift(code.to_string()))?;
            form.set_shift(Some(s));
        }

        let mut pool = DbPool::new(&cfg.database)?;
        store_draft(&mut pool, &form)?;

        let entry = form.entry();
        let shift_text = entry.shift.map(|s| s.code()).unwrap_or("-");
        let date_text = if entry.date.is_empty() { "-" } else { entry.date.as_str() };
        audit(
            &pool,
            "new",
            "",
            &format!("New checklist started (date {date_text}, shift {shift_text})"),
        );

        success(format!(
            "Started a new checklist (date: {date_text}, shift: {shift_text})"
        ));
    }
    Ok(())
}

pub fn handle_set(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Set { assignments } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let mut form = load_draft(&mut pool)?;

        // all assignments are validated before anything is stored
        let mut parsed = Vec::with_capacity(assignments.len());
        for raw in assignments {
            parsed.push(parse_assignment(raw)?);
        }
        for (field, value) in &parsed {
            form.set(field, value)?;
        }

        store_draft(&mut pool, &form)?;
        info(format!("Updated {} field(s)", parsed.len()));

        let missing = form.missing_fields().len();
        if missing == 0 {
            success("Checklist complete: ready to export or send.");
        } else {
            warning(format!(
                "{missing} of {} required field(s) still empty",
                FormStore::required_field_count()
            ));
        }
    }
    Ok(())
}
