//! The serialization pass: form controls in, `SubmissionData` out.

use crate::control::{ControlTag, ControlType, FormControl};
use crate::data::SubmissionData;
use crate::form::FormLike;

/// Rejection of the form argument, raised before any data is collected.
#[derive(Debug, Clone)]
pub enum SubmitError {
    /// No form was supplied.
    MissingForm,
    /// The supplied element is not a form; carries the offending tag name.
    NotAForm(String),
}

impl std::fmt::Display for SubmitError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingForm => write!(formatter, "Attempted to post without a form"),
            Self::NotAForm(tag) => {
                write!(formatter, "Attempted to post a non-form element: <{tag}>")
            }
        }
    }
}

impl std::error::Error for SubmitError {}

/// A trigger that carries no submit semantics is no trigger at all. Guards
/// against callers passing whatever element the event landed on.
fn normalize_trigger<'form>(
    trigger: Option<&'form FormControl>,
) -> Option<&'form FormControl> {
    trigger.filter(|control| control.is_submit_like())
}

/// Flatten `form`'s controls into a [`SubmissionData`], replicating native
/// browser submission semantics.
///
/// `trigger` names the control whose activation caused the submission; among
/// submit-type controls, only the trigger contributes its name/value. A
/// trigger without submit semantics is treated as absent.
///
/// # Errors
///
/// [`SubmitError`] when `form` is `None` or its tag is not `form`. Nothing
/// is collected before the check.
pub fn serialize(
    form: Option<&dyn FormLike>,
    trigger: Option<&FormControl>,
) -> Result<SubmissionData, SubmitError> {
    let form = form.ok_or(SubmitError::MissingForm)?;
    if !form.tag_name().eq_ignore_ascii_case("form") {
        return Err(SubmitError::NotAForm(form.tag_name().to_owned()));
    }

    let trigger = normalize_trigger(trigger);
    let mut data = SubmissionData::new();

    for control in form.controls() {
        // Grouping containers and reset controls never submit.
        if control.tag == ControlTag::Fieldset || control.control_type == ControlType::Reset {
            continue;
        }
        // Submit-type controls contribute only when they are the trigger.
        if control.is_submit_like() && trigger.is_none_or(|chosen| chosen.id() != control.id()) {
            continue;
        }
        if control.name.is_empty() {
            log::debug!("skipping unnamed {:?} control", control.tag);
            continue;
        }

        match control.control_type {
            ControlType::SelectMultiple => {
                for option in &control.options {
                    if option.selected {
                        data.add(&control.name, &option.value);
                    }
                }
            }
            ControlType::Radio | ControlType::Checkbox => {
                if control.checked {
                    data.add(&control.name, &control.value);
                }
            }
            _ => data.add(&control.name, &control.value),
        }
    }

    Ok(data)
}
