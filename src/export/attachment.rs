//! Encoding of the rendered report for the email payload.
//!
//! The attachment travels as a complete data URI
//! (`data:application/pdf;filename=<name>;base64,<payload>`), which is what
//! the email template's variable attachment expects, so no prefix stripping
//! is needed on the receiving side.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as B64;

pub const PDF_MIME: &str = "application/pdf";

pub fn to_data_uri(bytes: &[u8], file_name: &str) -> String {
    format!(
        "data:{PDF_MIME};filename={file_name};base64,{}",
        B64.encode(bytes)
    )
}

/// Inverse of [`to_data_uri`]; `None` when the input is not a base64 data URI.
pub fn decode_data_uri(uri: &str) -> Option<Vec<u8>> {
    let rest = uri.strip_prefix("data:")?;
    let (_, payload) = rest.split_once(";base64,")?;
    B64.decode(payload).ok()
}
