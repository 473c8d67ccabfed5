//! Collaborator interface to the asynchronous POST primitive.
//!
//! The serializer hands finished [`SubmissionData`] to a [`PostTransport`]
//! and is done; wire format, failure handling and the success-callback
//! contract all live behind the trait.

use crate::control::FormControl;
use crate::data::SubmissionData;
use crate::form::FormLike;
use crate::serialize::{SubmitError, serialize};

/// Expected response format, hinted by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    #[default]
    Text,
    Json,
    Xml,
}

/// What the transport hands to the success callback.
#[derive(Debug, Clone)]
pub struct PostResponse {
    pub status: u16,
    pub status_text: String,
    pub ok: bool,
    pub body_text: String,
    /// Parsed body when the caller hinted [`ResponseFormat::Json`] and the
    /// body parsed; otherwise `None`.
    pub json: Option<serde_json::Value>,
}

/// Success callback invoked by the transport.
pub type PostCallback = Box<dyn FnOnce(PostResponse) + Send>;

/// Asynchronous POST primitive. Fire-and-forget: implementations own all
/// transport-level failure handling and invoke `callback` only on success.
pub trait PostTransport {
    fn post(
        &self,
        url: &str,
        data: SubmissionData,
        callback: Option<PostCallback>,
        format: ResponseFormat,
    );
}

/// Serialize `form` and post it to `url` the way a browser would on submit.
///
/// `trigger` names the submit control that caused the submission, if any;
/// `callback` runs when the transport reports success.
///
/// # Errors
///
/// [`SubmitError`] when the form argument is rejected; the transport is not
/// invoked in that case.
pub fn post_form(
    transport: &dyn PostTransport,
    url: &str,
    form: Option<&dyn FormLike>,
    trigger: Option<&FormControl>,
    callback: Option<PostCallback>,
    format: ResponseFormat,
) -> Result<(), SubmitError> {
    let data = serialize(form, trigger)?;
    log::debug!("posting {} field(s) to {url}", data.len());
    transport.post(url, data, callback, format);
    Ok(())
}
