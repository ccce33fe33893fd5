//! The predefined tags, one prebuilt empty element per name.

use bumpalo::Bump;

use crate::{Container, Error, TagKind};

macro_rules! catalog {
    ($($kind:ident { $($tag_ident:ident = $tag_name:literal),* $(,)? })*) => {
        /// Prebuilt empty elements for the common HTML tags.
        ///
        /// Each field is an element with no children and no attributes; extend it at the
        /// point of use with [Container::extend], [Container::with] or [Container::with_attrs].
        ///
        /// The list-style mutators act on the prebuilt element itself, so mutating a
        /// catalog entry changes it for every later user of the same catalog.
        pub struct Catalog<'bump> {
            $($(
                #[doc = concat!("The `", $tag_name, "` element.")]
                pub $tag_ident: Container<'bump>,
            )*)*
        }
        impl<'bump> Catalog<'bump> {
            /// Build every element of the catalog in `bump`.
            pub fn new(bump: &'bump Bump) -> Self {
                Self {
                    $($(
                        $tag_ident: Container::element(bump, $tag_name, TagKind::$kind),
                    )*)*
                }
            }

            /// Look up a prebuilt element by its tag name.
            pub fn get(&self, name: &str) -> Result<Container<'bump>, Error> {
                match name {
                    $($($tag_name => Ok(self.$tag_ident),)*)*
                    _ => Err(Error::UnknownTag {
                        name: name.to_string(),
                    }),
                }
            }
        }

        /// Every tag in the [Catalog] with its [TagKind].
        pub const TAGS: &[(&str, TagKind)] = &[$($(($tag_name, TagKind::$kind)),*),*];
    };
}
catalog! {
    SelfClosingOnly {
        br = "br", hr = "hr",
    }
    Normal {
        a = "a", b = "b", body = "body", button = "button", code = "code", div = "div",
        em = "em", embed = "embed", form = "form",
        h1 = "h1", h2 = "h2", h3 = "h3", h4 = "h4", h5 = "h5", h6 = "h6",
        head = "head", html = "html", iframe = "iframe", img = "img", input = "input",
        i = "i", label = "label", link = "link", option = "option", p = "p", pre = "pre",
        select = "select", span = "span", strong = "strong", style = "style", title = "title",
        table = "table", th = "th", tr = "tr", td = "td", caption = "caption",
        colgroup = "colgroup", thead = "thead", tbody = "tbody", tfoot = "tfoot",
        ul = "ul", ol = "ol", li = "li", dl = "dl", dt = "dt", dd = "dd",
    }
    AlwaysPaired {
        script = "script", textarea = "textarea", video = "video",
    }
}
