mod common;
use common::filled_store;
use emchecklist::core::notify::{EmailRequest, EmailSettings, MailTransport, Notifier, SendState};
use emchecklist::errors::AppError;
use emchecklist::export::ReportSettings;
use emchecklist::export::attachment::decode_data_uri;
use std::cell::RefCell;

#[derive(Default)]
struct RecordingTransport {
    sent: RefCell<Vec<EmailRequest>>,
    fail_with: Option<String>,
}

impl MailTransport for RecordingTransport {
    fn deliver(&self, request: &EmailRequest) -> Result<(), String> {
        self.sent.borrow_mut().push(request.clone());
        match &self.fail_with {
            Some(detail) => Err(detail.clone()),
            None => Ok(()),
        }
    }
}

fn settings() -> EmailSettings {
    EmailSettings {
        service_id: "service_test".to_string(),
        template_id: "template_test".to_string(),
        public_key: "public_test".to_string(),
        ..EmailSettings::default()
    }
}

fn notifier(transport: RecordingTransport) -> Notifier<RecordingTransport> {
    Notifier::new(transport, settings(), ReportSettings::default())
}

#[test]
fn test_empty_recipient_fails_without_network_call() {
    let mut n = notifier(RecordingTransport::default());

    let err = n.send(filled_store().entry(), "  ").unwrap_err();

    assert!(matches!(err, AppError::MissingField("an email address")));
    assert!(n.transport().sent.borrow().is_empty());
    assert_eq!(n.state(), SendState::Idle);
}

#[test]
fn test_unconfigured_service_is_rejected() {
    let mut n = Notifier::new(
        RecordingTransport::default(),
        EmailSettings::default(),
        ReportSettings::default(),
    );

    let err = n
        .send(filled_store().entry(), "ops@example.com")
        .unwrap_err();

    assert!(matches!(err, AppError::Config(_)));
    assert!(n.transport().sent.borrow().is_empty());
}

#[test]
fn test_successful_send_submits_fixed_payload() {
    let mut n = notifier(RecordingTransport::default());
    let form = filled_store();

    n.send(form.entry(), " ops@example.com ").unwrap();

    assert_eq!(n.state(), SendState::Sent);
    let sent = n.transport().sent.borrow();
    assert_eq!(sent.len(), 1);

    let req = &sent[0];
    assert_eq!(req.service_id, "service_test");
    assert_eq!(req.template_id, "template_test");
    assert_eq!(req.user_id, "public_test");
    assert_eq!(req.template_params.to_email, "ops@example.com");
    assert_eq!(req.template_params.date, "2025-09-01");
    assert_eq!(req.template_params.shift, "A");

    let attachment = &req.template_params.pdf_attachment;
    assert!(attachment.starts_with("data:application/pdf;filename=checklist.pdf;base64,"));
    let pdf = decode_data_uri(attachment).expect("valid data uri");
    assert!(pdf.starts_with(b"%PDF-"));
}

#[test]
fn test_failed_send_reports_generic_error_once() {
    let transport = RecordingTransport {
        fail_with: Some("422 Unprocessable Entity: template not found".to_string()),
        ..RecordingTransport::default()
    };
    let mut n = notifier(transport);

    let err = n
        .send(filled_store().entry(), "ops@example.com")
        .unwrap_err();

    assert!(matches!(err, AppError::SendFailed));
    assert_eq!(err.to_string(), "Failed to send email. Please try again.");
    assert_eq!(n.state(), SendState::Failed);
    assert_eq!(
        n.last_error(),
        Some("422 Unprocessable Entity: template not found")
    );
    // no retry
    assert_eq!(n.transport().sent.borrow().len(), 1);
}

#[test]
fn test_state_resets_on_next_attempt() {
    let transport = RecordingTransport {
        fail_with: Some("timeout".to_string()),
        ..RecordingTransport::default()
    };
    let mut n = notifier(transport);

    assert!(n.send(filled_store().entry(), "ops@example.com").is_err());
    assert_eq!(n.state(), SendState::Failed);

    assert!(n.send(filled_store().entry(), "").is_err());
    assert_eq!(n.state(), SendState::Idle);
    assert!(n.last_error().is_none());
}

#[test]
fn test_request_json_shape() {
    let n = notifier(RecordingTransport::default());
    let req = n.build_request(filled_store().entry(), "ops@example.com");

    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json["service_id"], "service_test");
    assert_eq!(json["user_id"], "public_test");
    assert!(json.get("accessToken").is_none());

    let params = &json["template_params"];
    for key in ["to_email", "pdf_attachment", "date", "shift"] {
        assert!(params.get(key).is_some(), "missing {key}");
    }
}
