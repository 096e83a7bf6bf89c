use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::draft::load_draft;
use crate::core::notify::{EmailJsTransport, Notifier};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};

use super::audit;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Send {
        to,
        allow_incomplete,
    } = cmd
    {
        let recipient = to
            .as_deref()
            .unwrap_or(&cfg.default_recipient)
            .trim()
            .to_string();

        // no recipient: nothing else is attempted
        if recipient.is_empty() {
            return Err(AppError::MissingField("an email address"));
        }

        let mut pool = DbPool::new(&cfg.database)?;
        let form = load_draft(&mut pool)?;

        let missing = form.missing_fields().len();
        if missing > 0 && !*allow_incomplete {
            return Err(AppError::Incomplete(missing));
        }

        let transport = EmailJsTransport::new(&cfg.email)?;
        let mut notifier = Notifier::new(transport, cfg.email.clone(), cfg.report.clone());

        info(format!("Sending report to {recipient}…"));
        match notifier.send(form.entry(), &recipient) {
            Ok(()) => {
                audit(&pool, "send", &recipient, "Report sent");
                success("Report sent successfully!");
                Ok(())
            }
            Err(e) => {
                if let Some(detail) = notifier.last_error() {
                    audit(&pool, "send_failed", &recipient, detail);
                }
                Err(e)
            }
        }
    } else {
        Ok(())
    }
}
