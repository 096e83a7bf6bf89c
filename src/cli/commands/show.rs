//! `show`, `status` and `locations`.

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::draft::load_draft;
use crate::core::show::render_entry;
use crate::core::store::FormStore;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

pub fn handle_show(cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::new(&cfg.database)?;
    let form = load_draft(&mut pool)?;
    print!("{}", render_entry(&form));
    Ok(())
}

pub fn handle_status(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { missing } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let form = load_draft(&mut pool)?;
        let empty = form.missing_fields();

        if empty.is_empty() {
            success("Checklist complete");
            return Ok(());
        }

        warning(format!(
            "Checklist incomplete: {} of {} required field(s) empty",
            empty.len(),
            FormStore::required_field_count()
        ));

        if *missing {
            for field in &empty {
                println!("  {field}");
            }
        }
    }
    Ok(())
}
