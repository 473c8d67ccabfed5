//! Form serialization with native browser submission semantics.
//!
//! Walks a form's controls in document order and flattens them into a
//! [`SubmissionData`] mapping the way a browser would on submit, including
//! which submit button's value participates when one triggered the
//! submission. The data is then handed to a [`PostTransport`] collaborator;
//! this crate performs no network I/O itself.

#![allow(
    clippy::missing_docs_in_private_items,
    reason = "Internal implementation details don't need public documentation"
)]
#![allow(
    clippy::missing_inline_in_public_items,
    reason = "Inlining decisions left to compiler for this crate"
)]

pub mod control;
pub mod data;
pub mod form;
pub mod serialize;
pub mod transport;

pub use control::{ControlId, ControlTag, ControlType, FormControl, SelectOption};
pub use data::{SubmissionData, Value};
pub use form::{Form, FormLike};
pub use serialize::{SubmitError, serialize};
pub use transport::{PostCallback, PostResponse, PostTransport, ResponseFormat, post_form};
