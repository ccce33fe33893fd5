//! The entry point for constructing containers in an arena.

use bumpalo::Bump;

use crate::{
    Attribute, Catalog, Container, Content, Error, IntoAttribute, IntoTagKind, Node, Pseudo,
    TagKind,
};

/// A builder for creating containers using a bump allocator.
///
/// Creating a builder also builds the tag [Catalog] for its arena, once.
///
/// # Example
///
/// ```
/// use htmlgen::{bumpalo::Bump, Builder};
///
/// let bump = Bump::new();
/// let b = Builder::new(&bump);
/// let tags = b.catalog();
/// let page = tags.div.extend(
///     tags.h1.with("Hello, World!"),
///     [b.attr(("class_", "container"))],
/// );
/// assert_eq!(page.render(), r#"<div class="container"><h1>Hello, World!</h1></div>"#);
/// ```
#[derive(Clone, Copy)]
pub struct Builder<'bump> {
    bump: &'bump Bump,
    catalog: &'bump Catalog<'bump>,
}
impl<'bump> Builder<'bump> {
    /// Create a new builder with the given bump allocator.
    pub fn new(bump: &'bump Bump) -> Self {
        Self {
            bump,
            catalog: bump.alloc(Catalog::new(bump)),
        }
    }

    /// Get a reference to the bump allocator.
    pub fn bump(&self) -> &'bump Bump {
        self.bump
    }

    /// Get the prebuilt elements of this arena.
    pub fn catalog(&self) -> &'bump Catalog<'bump> {
        self.catalog
    }

    /// Look up a prebuilt element by tag name.
    pub fn get(&self, name: &str) -> Result<Container<'bump>, Error> {
        self.catalog.get(name)
    }

    /// Create an attribute from a value that implements [IntoAttribute].
    pub fn attr(&self, value: impl IntoAttribute<'bump>) -> Attribute<'bump> {
        value.into_attribute(self.bump)
    }

    /// Create a text node from a string.
    pub fn text(&self, text: &str) -> Node<'bump> {
        Node::text(self.bump, text)
    }

    /// Create a plain sequence: its children render back to back with no tag.
    pub fn sequence(&self, contents: impl Content<'bump>) -> Container<'bump> {
        Container::sequence(self.bump, contents)
    }

    /// Create an empty element with the given tag name and kind.
    ///
    /// The kind is validated here; an unknown kind is an
    /// [crate::ErrorKind::InvalidConfiguration] error.
    pub fn tag(&self, name: &str, kind: impl IntoTagKind) -> Result<Container<'bump>, Error> {
        let kind = kind.into_tag_kind().inspect_err(|err| {
            tracing::debug!(name, %err, "rejected tag configuration");
        })?;
        Ok(Container::element(self.bump, name, kind))
    }

    /// Create a `<!DOCTYPE html>` declaration.
    pub fn doctype(&self) -> Container<'bump> {
        Container::element(self.bump, "!DOCTYPE", TagKind::SelfClosingOnly)
            .with_attrs([self.attr("html")])
    }

    /// Create a composite from `pseudo`, passing `contents` and `attributes` to its heart.
    ///
    /// Fails with [Error::DetachedHeart] if the skeleton does not contain the heart.
    pub fn composite<P>(
        &self,
        pseudo: P,
        contents: impl Content<'bump>,
        attributes: impl IntoIterator<Item = Attribute<'bump>>,
    ) -> Result<Container<'bump>, Error>
    where
        P: Pseudo<'bump> + 'bump,
    {
        let pseudo: &'bump dyn Pseudo<'bump> = self.bump.alloc(pseudo);
        let attributes = crate::attribute::merge(self.bump, &[], attributes);
        let contents = self.sequence(contents);
        let (composite, embedded) = Container::composite(*self, pseudo, contents, attributes);
        if !embedded {
            tracing::debug!(composite = pseudo.name(), "skeleton does not embed its heart");
            return Err(Error::DetachedHeart {
                composite: pseudo.name(),
            });
        }
        Ok(composite)
    }
}
