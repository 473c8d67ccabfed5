//! Form abstraction the serializer accepts.

use crate::control::{ControlId, FormControl};

/// Capability interface for anything serializable as a form: a tag identity
/// and an ordered control collection. The serializer rejects implementors
/// whose tag is not `form` rather than inspecting arbitrary shapes at call
/// time.
pub trait FormLike {
    /// Element tag name, lowercase by convention (matching is
    /// case-insensitive).
    fn tag_name(&self) -> &str;

    /// Controls in document order.
    fn controls(&self) -> &[FormControl];
}

/// A plain form: tag `form`, controls in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Form {
    controls: Vec<FormControl>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a control, assigning its identity within this form. Returns
    /// the assigned id so callers can name it as the trigger later.
    pub fn push(&mut self, mut control: FormControl) -> ControlId {
        let id = ControlId::allocate();
        control.attach(id);
        self.controls.push(control);
        id
    }

    /// Look a control up by its assigned id.
    pub fn control(&self, id: ControlId) -> Option<&FormControl> {
        self.controls.iter().find(|control| control.id() == id)
    }
}

impl FormLike for Form {
    fn tag_name(&self) -> &str {
        "form"
    }

    fn controls(&self) -> &[FormControl] {
        &self.controls
    }
}
