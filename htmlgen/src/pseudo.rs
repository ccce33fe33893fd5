use std::fmt;

use crate::{Attribute, Builder, Container};

/// A recipe for a composite container: an inner container (the *heart*) placed somewhere
/// inside a larger structure (the *skeleton*).
///
/// The composite renders as the skeleton, but its contents are the heart's contents, so
/// list-style access and [Container::extend] act on the heart. The implementing value
/// holds whatever extra parameters the skeleton needs; it is stored once and reused when
/// the composite is extended. Its [fmt::Debug] output appears in the composite's own.
///
/// # Example
///
/// ```
/// use htmlgen::{bumpalo::Bump, Attribute, Builder, Container, Pseudo, TagKind};
///
/// /// A `<figure>` whose heart is the caption.
/// #[derive(Debug)]
/// struct Figure<'bump> {
///     image: Container<'bump>,
/// }
/// impl<'bump> Pseudo<'bump> for Figure<'bump> {
///     fn heart(
///         &self,
///         b: &Builder<'bump>,
///         contents: Container<'bump>,
///         attributes: &'bump [Attribute<'bump>],
///     ) -> Container<'bump> {
///         b.tag("figcaption", TagKind::Normal)
///             .unwrap()
///             .extend(contents, attributes.iter().copied())
///     }
///
///     fn skeleton(&self, b: &Builder<'bump>, heart: Container<'bump>) -> Container<'bump> {
///         b.tag("figure", TagKind::Normal).unwrap().with((self.image, heart))
///     }
/// }
///
/// let bump = Bump::new();
/// let b = Builder::new(&bump);
/// let image = b.catalog().img.with_attrs([b.attr(("src", "cat.png"))]);
/// let figure = b.composite(Figure { image }, "A cat", []).unwrap();
/// assert_eq!(figure.render(), r#"<figure><img src="cat.png" /><figcaption>A cat</figcaption></figure>"#);
/// assert_eq!(figure.len(), 1);
/// ```
pub trait Pseudo<'bump>: fmt::Debug {
    /// Build the inner container from the composite's contents and attributes.
    ///
    /// When the composite is extended this is called again with the previous contents
    /// followed by the new ones, so `contents` should be passed through unchanged.
    fn heart(
        &self,
        b: &Builder<'bump>,
        contents: Container<'bump>,
        attributes: &'bump [Attribute<'bump>],
    ) -> Container<'bump>;

    /// Build the outer structure around `heart`. The returned container must contain
    /// `heart` itself (not a copy), directly or nested further down.
    fn skeleton(&self, b: &Builder<'bump>, heart: Container<'bump>) -> Container<'bump>;

    /// A name for diagnostics and debug output.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
