//! Style-capability detection.
//!
//! Probes a live style declaration for vendor-prefixed property names and
//! records the results in a process-wide [`Support`] record, registered once
//! at the host's environment-ready point.

#![allow(
    clippy::missing_docs_in_private_items,
    reason = "Internal implementation details don't need public documentation"
)]
#![allow(
    clippy::missing_inline_in_public_items,
    reason = "Inlining decisions left to compiler for this crate"
)]

pub mod probe;
pub mod scope;

use once_cell::sync::OnceCell;

pub use probe::{BACKGROUND_SIZE_CANDIDATES, detect_property};
pub use scope::{InlineStyle, StyleScope};

/// Capability record for style properties this process has probed.
///
/// Each field holds the property name the environment accepts for that
/// capability, or `None` when the environment supports none of the known
/// candidates. Callers apply the name directly as a style-property key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Support {
    /// Usable property name for background-image sizing.
    pub background_size: Option<String>,
}

impl Support {
    /// Probe `scope` for every capability this record tracks.
    pub fn detect(scope: &dyn StyleScope) -> Self {
        Self {
            background_size: detect_property(scope, &BACKGROUND_SIZE_CANDIDATES)
                .map(ToOwned::to_owned),
        }
    }
}

/// Global registration point for the probed capability record.
static SUPPORT: OnceCell<Support> = OnceCell::new();

/// Probe `scope` and register the result as the process-wide capability
/// record. Returns true on first successful registration; false if the
/// record was already set (the first probe wins and is never recomputed).
///
/// Call this once the environment is ready for style queries, before any
/// code consults [`support`].
pub fn init_support(scope: &dyn StyleScope) -> bool {
    let detected = Support::detect(scope);
    let fresh = SUPPORT.set(detected).is_ok();
    if !fresh {
        log::debug!("style support already probed, keeping existing record");
    }
    fresh
}

/// Get the registered capability record, if [`init_support`] has run.
pub fn support() -> Option<&'static Support> {
    SUPPORT.get()
}

/// Usable background-size property name, if probed and supported.
pub fn background_size() -> Option<&'static str> {
    support().and_then(|sup| sup.background_size.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_picks_canonical_name_when_recognized() {
        let style = InlineStyle::with_recognized(["background-size", "-moz-background-size"]);
        let detected = Support::detect(&style);
        assert_eq!(detected.background_size.as_deref(), Some("background-size"));
    }

    #[test]
    fn test_detect_unsupported_environment() {
        let style = InlineStyle::with_recognized(["color", "display"]);
        let detected = Support::detect(&style);
        assert_eq!(detected.background_size, None);
    }

    #[test]
    fn test_init_support_is_one_shot() {
        // Registration races with other tests only through this shared cell,
        // so assert the invariant rather than which call won: after any
        // successful init, re-running with a different scope changes nothing.
        let first = InlineStyle::with_recognized(["-webkit-background-size"]);
        init_support(&first);
        let recorded = support().map(|sup| sup.background_size.clone());

        let second = InlineStyle::with_recognized(["background-size"]);
        assert!(!init_support(&second));
        assert_eq!(support().map(|sup| sup.background_size.clone()), recorded);
    }
}
