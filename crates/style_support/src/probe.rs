//! Linear probe over candidate property names.

use crate::scope::StyleScope;

/// Candidate property names for background-image sizing, highest priority
/// first: the canonical name, then vendor-prefixed fallbacks for engines
/// that predate the unprefixed form.
pub const BACKGROUND_SIZE_CANDIDATES: [&str; 5] = [
    "background-size",
    "-moz-background-size",
    "-webkit-background-size",
    "-khtml-background-size",
    "-o-background-size",
];

/// Return the first candidate `scope` recognizes, scanning in the given
/// priority order, or `None` when the environment supports none of them.
///
/// An unsupported result is a valid outcome callers must check, not an
/// error.
pub fn detect_property<'candidates>(
    scope: &dyn StyleScope,
    candidates: &[&'candidates str],
) -> Option<&'candidates str> {
    let found = candidates
        .iter()
        .copied()
        .find(|name| scope.property_value(name).is_some());
    match found {
        Some(name) => log::debug!("style property probe matched {name}"),
        None => log::debug!("style property probe found no supported candidate"),
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scope::InlineStyle;

    #[test]
    fn test_first_supported_candidate_wins() {
        // Only the second and third candidates are recognized; the scan must
        // stop at the second, never fall through to the third.
        let style = InlineStyle::with_recognized(["-moz-background-size", "-webkit-background-size"]);
        let detected = detect_property(&style, &BACKGROUND_SIZE_CANDIDATES);
        assert_eq!(detected, Some("-moz-background-size"));
    }

    #[test]
    fn test_no_supported_candidate() {
        let style = InlineStyle::default();
        assert_eq!(detect_property(&style, &BACKGROUND_SIZE_CANDIDATES), None);
    }

    #[test]
    fn test_recognized_but_empty_counts_as_supported() {
        let style = InlineStyle::with_recognized(["-o-background-size"]);
        let detected = detect_property(&style, &BACKGROUND_SIZE_CANDIDATES);
        assert_eq!(detected, Some("-o-background-size"));
    }
}
