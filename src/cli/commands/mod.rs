pub mod config;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod locations;
pub mod log;
pub mod persist;
pub mod send;
pub mod show;

use crate::db::log::cllog;
use crate::db::pool::DbPool;
use crate::ui::messages::warning;

/// Write an audit line; failures are reported but never abort the command.
pub(crate) fn audit(pool: &DbPool, operation: &str, target: &str, message: &str) {
    if let Err(e) = cllog(&pool.conn, operation, target, message) {
        warning(format!("Failed to write internal log: {e}"));
    }
}
