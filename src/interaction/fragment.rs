/// Location fragment prefix selecting a slide, e.g. `#slide-3`.
pub const FRAGMENT_PREFIX: &str = "slide-";

/// Parses `#slide-<digits>` (the leading `#` is optional).
///
/// Returns `None` for anything else, including empty digits, signs, trailing
/// characters and values that overflow `usize`. Range checks are left to the
/// caller.
#[must_use]
pub fn parse_slide_fragment(fragment: &str) -> Option<usize> {
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
    let digits = fragment.strip_prefix(FRAGMENT_PREFIX)?;
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Formats the fragment selecting `index`.
#[must_use]
pub fn slide_fragment(index: usize) -> String {
    format!("#{FRAGMENT_PREFIX}{index}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_fragments() {
        assert_eq!(parse_slide_fragment("#slide-3"), Some(3));
        assert_eq!(parse_slide_fragment("slide-12"), Some(12));
        assert_eq!(parse_slide_fragment("#slide-99"), Some(99));
    }

    #[test]
    fn rejects_malformed_fragments() {
        for fragment in [
            "",
            "#",
            "#slide-",
            "#slide-abc",
            "#slide-3a",
            "#slide--3",
            "#slide-+3",
            "#page-3",
            "#slide-99999999999999999999999",
        ] {
            assert_eq!(parse_slide_fragment(fragment), None, "{fragment}");
        }
    }

    #[test]
    fn formatting_matches_parser() {
        assert_eq!(slide_fragment(5), "#slide-5");
        assert_eq!(parse_slide_fragment(&slide_fragment(5)), Some(5));
    }
}
