//! Email delivery of the rendered report.
//!
//! The payload shape (`to_email`, `pdf_attachment`, `date`, `shift`) is fixed
//! by the pre-registered email template; the service, template and public key
//! identifiers come from the configuration file.

use crate::errors::{AppError, AppResult};
use crate::export::attachment::to_data_uri;
use crate::export::report::{ReportSettings, render_checklist};
use crate::models::entry::ChecklistEntry;
use crate::ui::messages::debug;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailSettings {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub access_token: Option<String>,
    pub timeout_secs: u64,
}

impl Default for EmailSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            service_id: String::new(),
            template_id: String::new(),
            public_key: String::new(),
            access_token: None,
            timeout_secs: 30,
        }
    }
}

impl EmailSettings {
    pub fn is_configured(&self) -> bool {
        [&self.endpoint, &self.service_id, &self.template_id, &self.public_key]
            .iter()
            .all(|v| !v.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailParams {
    pub to_email: String,
    pub pdf_attachment: String,
    pub date: String,
    pub shift: String,
}

/// Request body of the email API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailRequest {
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    pub template_params: EmailParams,
}

pub trait MailTransport {
    /// Submit one request. The error carries a human-readable detail.
    fn deliver(&self, request: &EmailRequest) -> Result<(), String>;
}

/// Blocking HTTP transport posting JSON to the configured endpoint.
pub struct EmailJsTransport {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl EmailJsTransport {
    pub fn new(settings: &EmailSettings) -> AppResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| AppError::Config(format!("cannot build HTTP client: {e}")))?;
        Ok(Self {
            client,
            endpoint: settings.endpoint.clone(),
        })
    }
}

impl MailTransport for EmailJsTransport {
    fn deliver(&self, request: &EmailRequest) -> Result<(), String> {
        let resp = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .map_err(|e| e.to_string())?;

        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }

        let body = resp.text().unwrap_or_default();
        Err(format!("{status}: {}", body.trim()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendState {
    Idle,
    Sending,
    Sent,
    Failed,
}

pub struct Notifier<T: MailTransport> {
    transport: T,
    settings: EmailSettings,
    report: ReportSettings,
    state: SendState,
    last_error: Option<String>,
}

impl<T: MailTransport> Notifier<T> {
    pub fn new(transport: T, settings: EmailSettings, report: ReportSettings) -> Self {
        Self {
            transport,
            settings,
            report,
            state: SendState::Idle,
            last_error: None,
        }
    }

    pub fn state(&self) -> SendState {
        self.state
    }

    /// Transport detail of the last failed attempt.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Build the request for `entry` without sending it.
    pub fn build_request(&self, entry: &ChecklistEntry, recipient: &str) -> EmailRequest {
        let pdf = render_checklist(entry, &self.report);
        EmailRequest {
            service_id: self.settings.service_id.clone(),
            template_id: self.settings.template_id.clone(),
            user_id: self.settings.public_key.clone(),
            access_token: self.settings.access_token.clone(),
            template_params: EmailParams {
                to_email: recipient.trim().to_string(),
                pdf_attachment: to_data_uri(&pdf, &self.report.file_name),
                date: entry.date.clone(),
                shift: entry.shift.map(|s| s.code().to_string()).unwrap_or_default(),
            },
        }
    }

    /// Render the report and submit it once. No retry on failure.
    pub fn send(&mut self, entry: &ChecklistEntry, recipient: &str) -> AppResult<()> {
        self.state = SendState::Idle;
        self.last_error = None;

        if recipient.trim().is_empty() {
            return Err(AppError::MissingField("an email address"));
        }
        if !self.settings.is_configured() {
            return Err(AppError::Config(
                "email service is not configured (see `config --edit`)".to_string(),
            ));
        }

        self.state = SendState::Sending;
        let request = self.build_request(entry, recipient);

        match self.transport.deliver(&request) {
            Ok(()) => {
                self.state = SendState::Sent;
                Ok(())
            }
            Err(detail) => {
                debug(format!("Failed to send email: {detail}"));
                self.state = SendState::Failed;
                self.last_error = Some(detail);
                Err(AppError::SendFailed)
            }
        }
    }
}
