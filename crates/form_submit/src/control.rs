//! Form control model.

use std::sync::atomic::{AtomicU32, Ordering};

/// Control identity, used to match the trigger control against the form's
/// collection. Ids are allocated process-wide, so controls of different
/// forms never alias; [`Self::DETACHED`] never matches an attached control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControlId(u32);

static NEXT_CONTROL_ID: AtomicU32 = AtomicU32::new(1);

impl ControlId {
    /// Id of a control not yet attached to any form.
    pub const DETACHED: Self = Self(0);

    pub(crate) fn allocate() -> Self {
        Self(NEXT_CONTROL_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Element tag of a form control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlTag {
    Input,
    Button,
    Select,
    TextArea,
    Fieldset,
}

/// Control type, the way the DOM reports `type` on a control.
///
/// Types the serialization rules do not distinguish (color, date, number,
/// search, ...) all route through [`Self::Other`] and are always included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlType {
    Text,
    Hidden,
    Password,
    Submit,
    Image,
    Reset,
    Radio,
    Checkbox,
    SelectOne,
    SelectMultiple,
    TextArea,
    Button,
    Other,
}

/// A single option of a select control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub selected: bool,
}

impl SelectOption {
    pub fn new(value: &str, selected: bool) -> Self {
        Self {
            value: value.to_owned(),
            selected,
        }
    }
}

/// A form control as the serializer sees it: tag, type, name, current value
/// and checked/selected state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormControl {
    id: ControlId,
    pub tag: ControlTag,
    pub control_type: ControlType,
    pub name: String,
    pub value: String,
    pub checked: bool,
    pub options: Vec<SelectOption>,
}

impl FormControl {
    pub fn new(tag: ControlTag, control_type: ControlType, name: &str, value: &str) -> Self {
        Self {
            id: ControlId::DETACHED,
            tag,
            control_type,
            name: name.to_owned(),
            value: value.to_owned(),
            checked: false,
            options: Vec::new(),
        }
    }

    /// `<input type="text">`
    pub fn text(name: &str, value: &str) -> Self {
        Self::new(ControlTag::Input, ControlType::Text, name, value)
    }

    /// `<input type="hidden">`
    pub fn hidden(name: &str, value: &str) -> Self {
        Self::new(ControlTag::Input, ControlType::Hidden, name, value)
    }

    /// `<input type="password">`
    pub fn password(name: &str, value: &str) -> Self {
        Self::new(ControlTag::Input, ControlType::Password, name, value)
    }

    /// `<input type="checkbox">`
    pub fn checkbox(name: &str, value: &str, checked: bool) -> Self {
        let mut control = Self::new(ControlTag::Input, ControlType::Checkbox, name, value);
        control.checked = checked;
        control
    }

    /// `<input type="radio">`
    pub fn radio(name: &str, value: &str, checked: bool) -> Self {
        let mut control = Self::new(ControlTag::Input, ControlType::Radio, name, value);
        control.checked = checked;
        control
    }

    /// `<input type="submit">`
    pub fn submit(name: &str, value: &str) -> Self {
        Self::new(ControlTag::Input, ControlType::Submit, name, value)
    }

    /// `<input type="image">`
    pub fn image_input(name: &str, value: &str) -> Self {
        Self::new(ControlTag::Input, ControlType::Image, name, value)
    }

    /// `<input type="reset">`
    pub fn reset_input(name: &str, value: &str) -> Self {
        Self::new(ControlTag::Input, ControlType::Reset, name, value)
    }

    /// `<button>`; `control_type` distinguishes submit/reset/plain buttons.
    pub fn button(control_type: ControlType, name: &str, value: &str) -> Self {
        Self::new(ControlTag::Button, control_type, name, value)
    }

    /// `<select>` (single choice); the selected option's value is the
    /// control's value.
    pub fn select_one(name: &str, value: &str) -> Self {
        Self::new(ControlTag::Select, ControlType::SelectOne, name, value)
    }

    /// `<select multiple>`
    pub fn select_multiple(name: &str, options: Vec<SelectOption>) -> Self {
        let mut control = Self::new(ControlTag::Select, ControlType::SelectMultiple, name, "");
        control.options = options;
        control
    }

    /// `<textarea>`
    pub fn text_area(name: &str, value: &str) -> Self {
        Self::new(ControlTag::TextArea, ControlType::TextArea, name, value)
    }

    /// `<fieldset>`; grouping container, never serialized.
    pub fn fieldset(name: &str) -> Self {
        Self::new(ControlTag::Fieldset, ControlType::Other, name, "")
    }

    pub fn id(&self) -> ControlId {
        self.id
    }

    pub(crate) fn attach(&mut self, id: ControlId) {
        self.id = id;
    }

    /// Whether this control carries submit semantics: a `<button>` of any
    /// type, or an input of type submit or image.
    pub fn is_submit_like(&self) -> bool {
        self.tag == ControlTag::Button
            || matches!(self.control_type, ControlType::Submit | ControlType::Image)
    }
}
