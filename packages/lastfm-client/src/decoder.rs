//! Service-level error detection

use crate::error::{LastfmError, LastfmResult};
use crate::xml::{LfmDocument, NormalizedNode};

/// Fail with `LastfmError::Api` unless the document reports `status="ok"`
///
/// A failed document must carry `<error code="N">message</error>`; anything
/// else is reported as `LastfmError::UnexpectedResponse`.
pub fn check(document: &LfmDocument) -> LastfmResult<()> {
    if document.is_ok() {
        return Ok(());
    }

    let status = document.status.as_deref().unwrap_or("<missing>");
    let error = document.payload.get("error").ok_or_else(|| {
        LastfmError::UnexpectedResponse(format!(
            "status '{}' without an <error> element",
            status
        ))
    })?;

    let raw_code = error.get("code").and_then(NormalizedNode::as_text).ok_or_else(|| {
        LastfmError::UnexpectedResponse("<error> element without a code".to_string())
    })?;
    let code = raw_code.trim().parse::<i32>().map_err(|_| {
        LastfmError::UnexpectedResponse(format!("non-numeric error code '{}'", raw_code))
    })?;
    let message = error.text().unwrap_or_default().trim().to_string();

    Err(LastfmError::Api { code, message })
}
