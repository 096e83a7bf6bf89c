use crate::config::Config;
use crate::core::persist;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::entry::KEY_PREFIX;
use crate::ui::messages::info;
use crate::utils::table::{Column, Table};

/// List the saved checklists, oldest key first.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::new(&cfg.database)?;
    let keys = persist::saved_entries(&mut pool)?;

    if keys.is_empty() {
        info("No saved checklists.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        Column::new("Date", 10),
        Column::new("Shift", 5),
        Column::new("Key", 24),
    ]);

    for key in keys {
        // checklist-<date>-<shift>
        let body = key.trim_start_matches(KEY_PREFIX);
        let (date, shift) = body.rsplit_once('-').unwrap_or((body, ""));
        table.add_row(vec![date.to_string(), shift.to_string(), key.clone()]);
    }

    print!("{}", table.render());
    Ok(())
}
