//! Live style-declaration surface the probe runs against.

use std::collections::{HashMap, HashSet};

/// A live style declaration that can be asked about property names.
///
/// `property_value` returns `Some` whenever the environment recognizes the
/// property name, even if nothing is currently declared for it (the value is
/// then the empty string). `None` means the name is unknown to the
/// environment. The distinction is what the probe keys off: a recognized but
/// unset property is still a usable capability.
pub trait StyleScope {
    /// Current value for `name`, or `None` when the name is unrecognized.
    fn property_value(&self, name: &str) -> Option<&str>;
}

/// An element's inline style declaration.
///
/// Backed by the table of property names the engine recognizes plus the
/// declarations currently set on the element. Stands in for what a browser
/// exposes as `element.style`.
#[derive(Debug, Clone, Default)]
pub struct InlineStyle {
    recognized: HashSet<String>,
    declared: HashMap<String, String>,
}

impl InlineStyle {
    /// Empty declaration recognizing the given property names.
    pub fn with_recognized<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            recognized: names.into_iter().map(Into::into).collect(),
            declared: HashMap::new(),
        }
    }

    /// Set a declaration. The name becomes recognized if it was not already.
    pub fn set(&mut self, name: &str, value: &str) {
        self.recognized.insert(name.to_owned());
        self.declared.insert(name.to_owned(), value.to_owned());
    }
}

impl StyleScope for InlineStyle {
    fn property_value(&self, name: &str) -> Option<&str> {
        if let Some(value) = self.declared.get(name) {
            return Some(value);
        }
        // Recognized but unset reads back as the empty string.
        self.recognized.contains(name).then_some("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognized_but_unset_reads_empty() {
        let style = InlineStyle::with_recognized(["background-size"]);
        assert_eq!(style.property_value("background-size"), Some(""));
        assert_eq!(style.property_value("-o-background-size"), None);
    }

    #[test]
    fn test_declared_value_reads_back() {
        let mut style = InlineStyle::default();
        style.set("background-size", "auto 100%");
        assert_eq!(style.property_value("background-size"), Some("auto 100%"));
    }
}
