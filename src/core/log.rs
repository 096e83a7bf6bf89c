use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{RESET, color_for_operation};

const MAX_OP_WIDTH: usize = 40;

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let rows: Vec<(String, String, String, &str)> = entries
            .iter()
            .map(|e| {
                let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or_else(|_| e.date.clone());

                // operation and target in a single column
                let mut op_target = if e.target.is_empty() {
                    e.operation.clone()
                } else {
                    format!("{} ({})", e.operation, e.target)
                };
                if op_target.chars().count() > MAX_OP_WIDTH {
                    op_target =
                        op_target.chars().take(MAX_OP_WIDTH - 3).collect::<String>() + "...";
                }

                (e.id.to_string(), date, op_target, e.message.as_str())
            })
            .collect();

        let id_w = rows.iter().map(|r| r.0.len()).max().unwrap_or(1);
        let date_w = rows.iter().map(|r| r.1.len()).max().unwrap_or(10);
        let op_w = rows.iter().map(|r| r.2.chars().count()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for ((id, date, op_target, message), entry) in rows.iter().zip(&entries) {
            let color = color_for_operation(&entry.operation);
            println!(
                "{:>id_w$}: {:<date_w$} | {}{:<op_w$}{} => {}",
                id, date, color, op_target, RESET, message,
            );
        }

        Ok(())
    }
}
