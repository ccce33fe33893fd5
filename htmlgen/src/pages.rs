//! Ready-made composites for whole pages and labelled form fields.

use bumpalo::collections::String as BumpString;

use crate::{Attribute, Builder, Container, Node, Pseudo};

/// The script URL used by [Page::with_jquery].
pub const JQUERY_SRC: &str = "http://ajax.googleapis.com/ajax/libs/jquery/1.11.3/jquery.min.js";

/// A `<label>` followed by the `<input>` it labels. The heart is the input.
///
/// ```text
/// <label for="{name}" {label_attributes}>{label}</label><input name="{name}" {attributes} />
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LabeledInput<'bump> {
    /// The label's contents.
    pub label: Node<'bump>,
    /// The input's `name`, also used as the label's `for`.
    pub name: &'bump str,
    /// Extra attributes for the label.
    pub label_attributes: &'bump [Attribute<'bump>],
}
impl<'bump> LabeledInput<'bump> {
    /// Create a labelled input with no extra label attributes.
    pub fn new(b: &Builder<'bump>, label: &str, name: &str) -> Self {
        Self {
            label: b.text(label),
            name: b.bump().alloc_str(name),
            label_attributes: &[],
        }
    }
}
impl<'bump> Pseudo<'bump> for LabeledInput<'bump> {
    fn heart(
        &self,
        b: &Builder<'bump>,
        contents: Container<'bump>,
        attributes: &'bump [Attribute<'bump>],
    ) -> Container<'bump> {
        let name = b.attr(("name", self.name));
        b.catalog()
            .input
            .extend(contents, std::iter::once(name).chain(attributes.iter().copied()))
    }

    fn skeleton(&self, b: &Builder<'bump>, heart: Container<'bump>) -> Container<'bump> {
        let label = b.catalog().label.extend(
            self.label,
            std::iter::once(b.attr(("for", self.name)))
                .chain(self.label_attributes.iter().copied()),
        );
        b.sequence((label, heart))
    }

    fn name(&self) -> &'static str {
        "LabeledInput"
    }
}

/// A doctype followed by `<html>`. The heart is the html element.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimplePage;
impl<'bump> Pseudo<'bump> for SimplePage {
    fn heart(
        &self,
        b: &Builder<'bump>,
        contents: Container<'bump>,
        attributes: &'bump [Attribute<'bump>],
    ) -> Container<'bump> {
        b.catalog().html.extend(contents, attributes.iter().copied())
    }

    fn skeleton(&self, b: &Builder<'bump>, heart: Container<'bump>) -> Container<'bump> {
        b.sequence((b.doctype(), heart))
    }

    fn name(&self) -> &'static str {
        "SimplePage"
    }
}

/// A complete page with a title and an optional stylesheet. The heart is the body.
///
/// ```text
/// <!DOCTYPE html>
/// <html>
///     <head>
///         <title>{title}</title>
///         <link rel="stylesheet" href="{stylesheet}" />
///     </head>
///     <body {attributes}>{contents}</body>
/// </html>
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Page<'bump> {
    /// The contents of `<title>`.
    pub title: &'bump str,
    /// The stylesheet to link, if any.
    pub stylesheet: Option<&'bump str>,
    /// Whether to load jQuery from [JQUERY_SRC] in the head.
    pub jquery: bool,
}
impl<'bump> Page<'bump> {
    /// Create a page with a title and an optional stylesheet.
    pub fn new(b: &Builder<'bump>, title: &str, stylesheet: Option<&str>) -> Self {
        Self {
            title: b.bump().alloc_str(title),
            stylesheet: stylesheet
                .filter(|s| !s.is_empty())
                .map(|s| BumpString::from_str_in(s, b.bump()).into_bump_str()),
            jquery: false,
        }
    }

    /// The same page, also loading jQuery.
    pub fn with_jquery(self) -> Self {
        Self {
            jquery: true,
            ..self
        }
    }

    fn head(&self, b: &Builder<'bump>) -> Container<'bump> {
        let tags = b.catalog();
        let stylesheet = self.stylesheet.map(|href| {
            tags.link
                .with_attrs([b.attr(("rel", "stylesheet")), b.attr(("href", href))])
        });
        let jquery = self
            .jquery
            .then(|| tags.script.with_attrs([b.attr(("src", JQUERY_SRC))]));
        tags.head.with((tags.title.with(self.title), stylesheet, jquery))
    }
}
impl<'bump> Pseudo<'bump> for Page<'bump> {
    fn heart(
        &self,
        b: &Builder<'bump>,
        contents: Container<'bump>,
        attributes: &'bump [Attribute<'bump>],
    ) -> Container<'bump> {
        b.catalog().body.extend(contents, attributes.iter().copied())
    }

    fn skeleton(&self, b: &Builder<'bump>, heart: Container<'bump>) -> Container<'bump> {
        let html = b.catalog().html.with((self.head(b), heart));
        b.sequence((b.doctype(), html))
    }

    fn name(&self) -> &'static str {
        if self.jquery {
            "JqPage"
        } else {
            "Page"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bumpalo::Bump;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_labeled_input() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        let field = b
            .composite(
                LabeledInput::new(&b, "Name", "user"),
                (),
                [b.attr(("type_", "text"))],
            )
            .unwrap();
        assert_eq!(
            field.render(),
            r#"<label for="user">Name</label><input name="user" type="text" />"#
        );
        assert!(field.is_empty());
        assert_eq!(field.attribute("type").unwrap().as_str(), Some("text"));
    }

    #[test]
    fn test_simple_page_delegates_to_html() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        let page = b
            .composite(SimplePage, ("a", "b"), [b.attr(("lang", "en"))])
            .unwrap();
        assert_eq!(page.render(), r#"<!DOCTYPE html><html lang="en">ab</html>"#);
        assert_eq!(page.get(1).and_then(|n| n.as_text()), Some("b"));
    }

    #[test]
    fn test_page_head() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        let plain = b
            .composite(Page::new(&b, "Home", None), "hi", [])
            .unwrap();
        assert_eq!(
            plain.render(),
            "<!DOCTYPE html><html><head><title>Home</title></head><body>hi</body></html>"
        );

        let unstyled = b
            .composite(Page::new(&b, "Home", Some("")), (), [])
            .unwrap();
        assert!(!unstyled.render().contains("<link"));

        let styled = b
            .composite(Page::new(&b, "Home", Some("site.css")).with_jquery(), (), [])
            .unwrap();
        assert_eq!(
            styled.render(),
            format!(
                "<!DOCTYPE html><html><head><title>Home</title>\
                 <link rel=\"stylesheet\" href=\"site.css\" />\
                 <script src=\"{JQUERY_SRC}\"></script></head><body /></html>"
            )
        );
    }
}
