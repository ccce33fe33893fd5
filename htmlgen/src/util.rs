//! Utility functions.
//!
//! The renderer writes text and attribute values verbatim. Use [escape_text] and
//! [escape_attribute] on untrusted input before handing it to a container.

use std::borrow::Cow;

/// Pick the value of the first branch whose condition holds, or `otherwise`.
pub fn vif<T>(branches: impl IntoIterator<Item = (bool, T)>, otherwise: T) -> T {
    branches
        .into_iter()
        .find_map(|(condition, value)| condition.then_some(value))
        .unwrap_or(otherwise)
}

/// Like [vif], but conditions and values are only evaluated as far as needed.
pub fn lif<T>(
    branches: &[(&dyn Fn() -> bool, &dyn Fn() -> T)],
    otherwise: impl FnOnce() -> T,
) -> T {
    for (condition, value) in branches {
        if condition() {
            return value();
        }
    }
    otherwise()
}

/// `n` non-breaking space entities.
pub fn nbsp(n: usize) -> String {
    "&nbsp;".repeat(n)
}

/// Escape text for use as element contents.
pub fn escape_text(text: &str) -> Cow<'_, str> {
    html_escape::encode_text(text)
}

/// Escape text for use inside a double-quoted attribute value.
pub fn escape_attribute(value: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(value)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::Builder;
    use bumpalo::Bump;

    #[test]
    fn test_vif_picks_first_true_branch() {
        assert_eq!(vif([(false, "a"), (true, "b"), (true, "c")], "d"), "b");
        assert_eq!(vif([(false, "a")], "d"), "d");
        assert_eq!(vif([], 7), 7);
    }

    #[test]
    fn test_lif_is_lazy() {
        let evaluated = Cell::new(0);
        let yes = || true;
        let no = || false;
        let first = || {
            evaluated.set(evaluated.get() + 1);
            "first"
        };
        let second = || {
            evaluated.set(evaluated.get() + 1);
            "second"
        };
        let picked = lif::<&str>(&[(&no, &first), (&yes, &second), (&yes, &first)], || "none");
        assert_eq!(picked, "second");
        assert_eq!(evaluated.get(), 1);
    }

    #[test]
    fn test_helpers_feed_containers() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        let cell = b.catalog().td.with((nbsp(2), escape_text("a < b")));
        assert_eq!(cell.render(), "<td>&nbsp;&nbsp;a &lt; b</td>");

        let title = escape_attribute(r#"say "hi""#);
        let span = b.catalog().span.with_attrs([b.attr(("title", title.as_ref()))]);
        assert_eq!(span.render(), r#"<span title="say &quot;hi&quot;" />"#);
    }
}
