use std::cell::{Ref, RefCell};
use std::fmt;

use bumpalo::collections::Vec as BumpVec;
use bumpalo::Bump;

use crate::attribute::{self, Attribute, AttributeValue};
use crate::{Builder, Content, Error, Flattener, Node, Pseudo, TagKind};

/// The construction recipe of a [Container]: which kind it is and the parameters it was
/// built with. Every [Container::extend] reuses it unchanged.
#[derive(Clone, Copy)]
pub enum Variant<'bump> {
    /// Children are concatenated with no surrounding tag.
    Sequence,
    /// An HTML tag.
    Element {
        /// The name of the tag.
        name: &'bump str,
        /// How the tag renders when it has no children.
        kind: TagKind,
    },
    /// An inner container (the heart) embedded in a larger outer structure (the skeleton).
    Composite {
        /// The recipe that builds the heart and the skeleton.
        pseudo: &'bump dyn Pseudo<'bump>,
        /// The builder the composite was assembled with.
        builder: Builder<'bump>,
        /// The wrapped container. Its contents are the composite's contents.
        heart: Container<'bump>,
        /// The outer structure, which is what gets rendered.
        skeleton: Container<'bump>,
    },
}
impl<'bump> PartialEq for Variant<'bump> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Variant::Sequence, Variant::Sequence) => true,
            (
                Variant::Element { name, kind },
                Variant::Element {
                    name: other_name,
                    kind: other_kind,
                },
            ) => name == other_name && kind == other_kind,
            (
                Variant::Composite {
                    pseudo,
                    heart,
                    skeleton,
                    ..
                },
                Variant::Composite {
                    pseudo: other_pseudo,
                    heart: other_heart,
                    skeleton: other_skeleton,
                    ..
                },
            ) => {
                std::ptr::addr_eq(
                    *pseudo as *const (dyn Pseudo<'bump> + 'bump),
                    *other_pseudo as *const (dyn Pseudo<'bump> + 'bump),
                ) && heart == other_heart
                    && skeleton == other_skeleton
            }
            _ => false,
        }
    }
}

struct ContainerData<'bump> {
    variant: Variant<'bump>,
    contents: &'bump RefCell<BumpVec<'bump, Node<'bump>>>,
    attributes: &'bump [Attribute<'bump>],
    atomic: Option<bool>,
    spacer: &'bump str,
}

/// A unit of HTML composition: a plain sequence, an element, or a composite.
///
/// Containers are handles into a bump arena and are cheap to copy. Apart from the
/// list-style mutators ([Container::set], [Container::insert], [Container::push],
/// [Container::remove], [Container::pop]) a container never changes after it is built;
/// [Container::extend] returns a new container instead.
#[derive(Clone, Copy)]
pub struct Container<'bump> {
    bump: &'bump Bump,
    data: &'bump ContainerData<'bump>,
}
impl<'bump> Container<'bump> {
    fn assemble(
        bump: &'bump Bump,
        variant: Variant<'bump>,
        contents: &'bump RefCell<BumpVec<'bump, Node<'bump>>>,
        attributes: &'bump [Attribute<'bump>],
        atomic: Option<bool>,
        spacer: &'bump str,
    ) -> Self {
        let data = bump.alloc(ContainerData {
            variant,
            contents,
            attributes,
            atomic,
            spacer,
        });
        Container { bump, data }
    }

    fn primitive(
        bump: &'bump Bump,
        variant: Variant<'bump>,
        contents: BumpVec<'bump, Node<'bump>>,
        attributes: &'bump [Attribute<'bump>],
        atomic: Option<bool>,
        spacer: &'bump str,
    ) -> Self {
        let contents = bump.alloc(RefCell::new(contents));
        Self::assemble(bump, variant, contents, attributes, atomic, spacer)
    }

    /// A plain sequence of the flattened `contents`.
    pub(crate) fn sequence(bump: &'bump Bump, contents: impl Content<'bump>) -> Self {
        let mut out = Flattener::new(bump);
        out.visit(contents);
        Self::primitive(bump, Variant::Sequence, out.finish(), &[], None, "")
    }

    /// An empty element.
    pub(crate) fn element(bump: &'bump Bump, name: &str, kind: TagKind) -> Self {
        let name = bump.alloc_str(name);
        Self::primitive(
            bump,
            Variant::Element { name, kind },
            BumpVec::new_in(bump),
            &[],
            None,
            "",
        )
    }

    /// Build a composite by running `pseudo`'s heart and skeleton.
    ///
    /// Returns the composite together with whether the skeleton embeds the heart.
    pub(crate) fn composite(
        builder: Builder<'bump>,
        pseudo: &'bump dyn Pseudo<'bump>,
        contents: Container<'bump>,
        attributes: &'bump [Attribute<'bump>],
    ) -> (Self, bool) {
        let heart = pseudo.heart(&builder, contents, attributes);
        let skeleton = pseudo.skeleton(&builder, heart);
        let embedded = skeleton.reaches(heart.data.contents);
        tracing::trace!(
            composite = pseudo.name(),
            children = heart.len(),
            embedded,
            "assembled composite"
        );
        let composite = Self::assemble(
            builder.bump(),
            Variant::Composite {
                pseudo,
                builder,
                heart,
                skeleton,
            },
            heart.data.contents,
            attributes,
            None,
            "",
        );
        (composite, embedded)
    }

    /// Get the construction recipe of this container.
    pub fn variant(&self) -> Variant<'bump> {
        self.data.variant
    }

    /// Get a reference to the bump allocator.
    pub fn bump(&self) -> &'bump Bump {
        self.bump
    }

    /// Get the tag name if this container is an [`Element`].
    ///
    /// [`Element`]: Variant::Element
    pub fn tag(&self) -> Option<&'bump str> {
        match self.data.variant {
            Variant::Element { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Get the attributes of the container.
    ///
    /// Composites keep their own attributes, but render only through their skeleton.
    pub fn attributes(&self) -> &'bump [Attribute<'bump>] {
        self.data.attributes
    }

    /// Look up an attribute by name. `class_`-style spellings are accepted.
    pub fn attribute(&self, name: &str) -> Result<AttributeValue<'bump>, Error> {
        let key = attribute::normalize_key(name);
        self.data
            .attributes
            .iter()
            .find(|a| a.key == key)
            .map(|a| a.value)
            .ok_or_else(|| Error::UnknownAttribute {
                name: key.to_string(),
            })
    }

    /// The string placed between rendered children.
    pub fn spacer(&self) -> &'bump str {
        self.data.spacer
    }

    /// Whether this container is inserted whole when passed as contents.
    ///
    /// An explicit marker set with [Container::atomic] wins; otherwise sequences are
    /// expanded and elements and composites are not.
    pub fn is_atomic(&self) -> bool {
        self.data
            .atomic
            .unwrap_or(!matches!(self.data.variant, Variant::Sequence))
    }

    /// Returns `true` if both handles point at the same container.
    pub fn ptr_eq(&self, other: &Container<'bump>) -> bool {
        std::ptr::eq(self.data, other.data)
    }

    /// Create a new container of the same variant with `contents` appended and
    /// `attributes` merged over the existing ones. `self` is left untouched.
    ///
    /// Composites re-run their heart and skeleton with the combined contents. If the
    /// rebuilt skeleton no longer embeds the heart, the extension is dropped and `self`
    /// is returned; use [Container::try_extend] to observe that case.
    pub fn extend(
        &self,
        contents: impl Content<'bump>,
        attributes: impl IntoIterator<Item = Attribute<'bump>>,
    ) -> Container<'bump> {
        self.try_extend(contents, attributes).unwrap_or_else(|err| {
            tracing::warn!(%err, "extension rejected; keeping the previous composite");
            *self
        })
    }

    /// Like [Container::extend], but fails with [Error::DetachedHeart] when an
    /// extended composite's skeleton no longer embeds its heart.
    pub fn try_extend(
        &self,
        contents: impl Content<'bump>,
        attributes: impl IntoIterator<Item = Attribute<'bump>>,
    ) -> Result<Container<'bump>, Error> {
        let mut out = Flattener::new(self.bump);
        for node in self.contents().iter() {
            out.push_node(*node);
        }
        out.visit(contents);
        let attributes = attribute::merge(self.bump, self.data.attributes, attributes);

        match self.data.variant {
            Variant::Composite {
                pseudo, builder, ..
            } => {
                let contents = Self::primitive(
                    self.bump,
                    Variant::Sequence,
                    out.finish(),
                    &[],
                    None,
                    "",
                );
                let (composite, embedded) =
                    Self::composite(builder, pseudo, contents, attributes);
                if !embedded {
                    return Err(Error::DetachedHeart {
                        composite: pseudo.name(),
                    });
                }
                Ok(composite)
            }
            variant => Ok(Self::primitive(
                self.bump,
                variant,
                out.finish(),
                attributes,
                self.data.atomic,
                self.data.spacer,
            )),
        }
    }

    /// Shorthand for [Container::extend] without attributes.
    pub fn with(&self, contents: impl Content<'bump>) -> Container<'bump> {
        self.extend(contents, [])
    }

    /// Shorthand for [Container::extend] without contents.
    pub fn with_attrs(
        &self,
        attributes: impl IntoIterator<Item = Attribute<'bump>>,
    ) -> Container<'bump> {
        self.extend((), attributes)
    }

    /// Create a copy that joins its children with `spacer` (e.g. `"\n"`).
    ///
    /// Elements also place the spacer just inside their open and close tags.
    pub fn with_spacer(&self, spacer: &str) -> Container<'bump> {
        let data = ContainerData {
            spacer: self.bump.alloc_str(spacer),
            ..self.copy_data()
        };
        Container {
            bump: self.bump,
            data: self.bump.alloc(data),
        }
    }

    /// Create a copy with an explicit atomicity marker, overriding the variant default.
    pub fn atomic(&self, atomic: bool) -> Container<'bump> {
        let data = ContainerData {
            atomic: Some(atomic),
            ..self.copy_data()
        };
        Container {
            bump: self.bump,
            data: self.bump.alloc(data),
        }
    }

    fn copy_data(&self) -> ContainerData<'bump> {
        let contents = match self.data.variant {
            // A composite's contents must stay aliased to its heart.
            Variant::Composite { .. } => self.data.contents,
            _ => self
                .bump
                .alloc(RefCell::new(BumpVec::from_iter_in(
                    self.contents().iter().copied(),
                    self.bump,
                ))),
        };
        ContainerData {
            variant: self.data.variant,
            contents,
            attributes: self.data.attributes,
            atomic: self.data.atomic,
            spacer: self.data.spacer,
        }
    }

    /// Place `self` between each item of `items`, producing a sequence.
    pub fn join<I>(&self, items: I) -> Container<'bump>
    where
        I: IntoIterator,
        I::Item: Content<'bump>,
    {
        let mut out = Flattener::new(self.bump);
        for (idx, item) in items.into_iter().enumerate() {
            if idx > 0 {
                out.push_node(Node::Container(*self));
            }
            out.visit(item);
        }
        Self::primitive(self.bump, Variant::Sequence, out.finish(), &[], None, "")
    }

    /// Render the container to a string.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Write the rendered container to a writer.
    pub fn write(&self, w: &mut dyn fmt::Write) -> fmt::Result {
        match self.data.variant {
            Variant::Composite { skeleton, .. } => skeleton.write(w),
            Variant::Sequence => self.write_children(w),
            Variant::Element { name, kind } => {
                let paired = !self.is_empty() || kind == TagKind::AlwaysPaired;
                write!(w, "<{name}")?;
                for attribute in self.data.attributes {
                    attribute.write_to(w)?;
                }
                if paired {
                    w.write_char('>')?;
                    w.write_str(self.data.spacer)?;
                    self.write_children(w)?;
                    w.write_str(self.data.spacer)?;
                    write!(w, "</{name}>")
                } else if kind == TagKind::SelfClosingOnly {
                    w.write_char('>')
                } else {
                    w.write_str(" />")
                }
            }
        }
    }

    fn write_children(&self, w: &mut dyn fmt::Write) -> fmt::Result {
        for (idx, node) in self.contents().iter().enumerate() {
            if idx > 0 {
                w.write_str(self.data.spacer)?;
            }
            match node {
                Node::Text(text) => w.write_str(text)?,
                Node::Container(c) => c.write(w)?,
                Node::Leaf(leaf) => write!(w, "{leaf}")?,
            }
        }
        Ok(())
    }

    /// Whether `contents` is this container's contents, or is reachable through its
    /// children (and, for composites, its skeleton).
    fn reaches(&self, contents: &RefCell<BumpVec<'bump, Node<'bump>>>) -> bool {
        if std::ptr::eq(self.data.contents, contents) {
            return true;
        }
        if let Variant::Composite { skeleton, .. } = self.data.variant {
            if skeleton.reaches(contents) {
                return true;
            }
        }
        // A mutably borrowed cell is being edited right now and cannot hold `contents`
        // in a way that matters for this check.
        let Ok(children) = self.data.contents.try_borrow() else {
            return false;
        };
        children.iter().any(|node| match node {
            Node::Container(c) => c.reaches(contents),
            _ => false,
        })
    }
}

/// List-style access to the children. On a composite these act on the heart's children.
impl<'bump> Container<'bump> {
    /// Borrow the children.
    pub fn contents(&self) -> Ref<'bump, [Node<'bump>]> {
        Ref::map(self.data.contents.borrow(), |c| c.as_slice())
    }

    /// Iterate over a snapshot of the children.
    pub fn iter(&self) -> impl Iterator<Item = Node<'bump>> {
        self.contents().to_vec().into_iter()
    }

    /// Get the number of children.
    pub fn len(&self) -> usize {
        self.contents().len()
    }

    /// Returns `true` if the container has no children.
    pub fn is_empty(&self) -> bool {
        self.contents().is_empty()
    }

    /// Get the child at `index`.
    pub fn get(&self, index: usize) -> Option<Node<'bump>> {
        self.contents().get(index).copied()
    }

    /// Replace the child at `index`, returning the previous one.
    pub fn set(&self, index: usize, node: impl Into<Node<'bump>>) -> Result<Node<'bump>, Error> {
        let node = self.admit("set", node.into())?;
        let mut contents = self.borrow_mut("set")?;
        let len = contents.len();
        let slot = contents.get_mut(index).ok_or(Error::IndexOutOfRange {
            operation: "set",
            index,
            len,
        })?;
        Ok(std::mem::replace(slot, node))
    }

    /// Insert a child before `index`. An index past the end appends.
    pub fn insert(&self, index: usize, node: impl Into<Node<'bump>>) -> Result<(), Error> {
        let node = self.admit("insert", node.into())?;
        let mut contents = self.borrow_mut("insert")?;
        let index = index.min(contents.len());
        contents.insert(index, node);
        Ok(())
    }

    /// Append a child.
    pub fn push(&self, node: impl Into<Node<'bump>>) -> Result<(), Error> {
        let node = self.admit("push", node.into())?;
        self.borrow_mut("push")?.push(node);
        Ok(())
    }

    /// Remove and return the child at `index`.
    pub fn remove(&self, index: usize) -> Result<Node<'bump>, Error> {
        let mut contents = self.borrow_mut("remove")?;
        if index >= contents.len() {
            return Err(Error::IndexOutOfRange {
                operation: "remove",
                index,
                len: contents.len(),
            });
        }
        Ok(contents.remove(index))
    }

    /// Remove and return the last child.
    pub fn pop(&self) -> Result<Node<'bump>, Error> {
        self.borrow_mut("pop")?
            .pop()
            .ok_or(Error::IndexOutOfRange {
                operation: "pop",
                index: 0,
                len: 0,
            })
    }

    fn borrow_mut(
        &self,
        operation: &'static str,
    ) -> Result<std::cell::RefMut<'bump, BumpVec<'bump, Node<'bump>>>, Error> {
        self.data.contents.try_borrow_mut().map_err(|_| {
            tracing::debug!(operation, "contents are borrowed; mutation rejected");
            Error::ContentsBusy { operation }
        })
    }

    fn admit(&self, operation: &'static str, node: Node<'bump>) -> Result<Node<'bump>, Error> {
        match node {
            Node::Container(c) if c.reaches(self.data.contents) => {
                tracing::debug!(operation, "mutation would create a cycle; rejected");
                Err(Error::WouldCycle { operation })
            }
            node => Ok(node),
        }
    }
}

impl fmt::Display for Container<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write(f)
    }
}

impl fmt::Debug for Container<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.data.variant {
            Variant::Sequence => write!(f, "Sequence(")?,
            Variant::Element { name, kind } => write!(f, "Element({name:?}, {kind:?}")?,
            Variant::Composite { pseudo, .. } => write!(f, "Composite({pseudo:?}")?,
        }
        for (idx, Attribute { key, value }) in self.data.attributes.iter().enumerate() {
            let sep = match (idx, self.data.variant) {
                (0, Variant::Sequence) => "",
                _ => ", ",
            };
            match value {
                AttributeValue::Text(text) => write!(f, "{sep}{key} = {text:?}")?,
                value => write!(f, "{sep}{key} = {value}")?,
            }
        }
        f.write_str(")")?;
        let contents = self.contents();
        if !contents.is_empty() {
            f.write_str("(")?;
            for (idx, node) in contents.iter().enumerate() {
                if idx > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{node:?}")?;
            }
            f.write_str(")")?;
        }
        Ok(())
    }
}

impl<'bump> PartialEq for Container<'bump> {
    fn eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        self.data.variant == other.data.variant
            && self.data.spacer == other.data.spacer
            && self.data.atomic == other.data.atomic
            && attribute::same_set(self.data.attributes, other.data.attributes)
            && *self.contents() == *other.contents()
    }
}

impl<'bump, T: Content<'bump>> std::ops::Add<T> for Container<'bump> {
    type Output = Container<'bump>;

    fn add(self, rhs: T) -> Self::Output {
        Container::sequence(self.bump, (self, rhs))
    }
}
impl<'bump> std::ops::Add<Container<'bump>> for &str {
    type Output = Container<'bump>;

    fn add(self, rhs: Container<'bump>) -> Self::Output {
        Container::sequence(rhs.bump, (self, rhs))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::{AtomicLeaf, ErrorKind, TagKind};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_elements_by_kind() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        assert_eq!(b.tag("div", TagKind::Normal).unwrap().render(), "<div />");
        assert_eq!(b.tag("br", TagKind::SelfClosingOnly).unwrap().render(), "<br>");
        assert_eq!(
            b.tag("script", TagKind::AlwaysPaired).unwrap().render(),
            "<script></script>"
        );
    }

    #[test]
    fn test_element_with_contents_is_paired() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        let div = b.tag("div", TagKind::Normal).unwrap();
        assert_eq!(div.with("x").render(), "<div>x</div>");
        let br = b.tag("br", TagKind::SelfClosingOnly).unwrap();
        assert_eq!(br.with("x").render(), "<br>x</br>");
    }

    #[test]
    fn test_boolean_attributes() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        let option = b.tag("option", TagKind::Normal).unwrap();
        assert_eq!(
            option.with_attrs([b.attr(("selected", true))]).render(),
            "<option selected />"
        );
        assert_eq!(
            option.extend("Fowl", [b.attr(("selected", false))]).render(),
            "<option>Fowl</option>"
        );
    }

    #[test]
    fn test_extend_leaves_original_untouched() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        let p = b.catalog().p.extend("a", [b.attr(("class_", "lead"))]);
        let before = p.render();

        let q = p.extend(("b", "c"), [b.attr(("id", "x")), b.attr(("class", "tail"))]);

        assert_eq!(p.render(), before);
        assert_eq!(p.len(), 1);
        assert_eq!(p.attributes().len(), 1);
        assert_eq!(q.render(), r#"<p class="tail" id="x">abc</p>"#);
        assert_ne!(q.render(), before);
    }

    #[test]
    fn test_extend_is_referentially_transparent() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        let li = b.catalog().li;
        let one = li.extend("x", [b.attr(("value", 1i32))]);
        let two = li.extend("x", [b.attr(("value", 1i32))]);
        assert_eq!(one, two);
        assert!(!one.ptr_eq(&two));
    }

    #[test]
    fn test_spacer_joins_children() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        let seq = b.sequence(("a", "b", "c")).with_spacer("\n");
        assert_eq!(seq.render(), "a\nb\nc");

        let ul = b.catalog().ul.with_spacer("\n");
        let ul = ul.with((b.catalog().li.with("1"), b.catalog().li.with("2")));
        assert_eq!(ul.render(), "<ul>\n<li>1</li>\n<li>2</li>\n</ul>");
    }

    #[test]
    fn test_rerender_is_identical() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        let table = b.catalog().table.with(b.catalog().tr.with(b.catalog().td.with(3i32)));
        assert_eq!(table.render(), table.render());
        assert_eq!(table.render(), "<table><tr><td>3</td></tr></table>");
    }

    #[test]
    fn test_list_facade() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        let ol = b.catalog().ol.with(("a", "b"));
        ol.insert(1, "mid").unwrap();
        ol.push("end").unwrap();
        ol.insert(99, "last").unwrap();
        assert_eq!(ol.render(), "<ol>amidbendlast</ol>");

        assert_eq!(ol.set(0, "A").unwrap().as_text(), Some("a"));
        assert_eq!(ol.remove(1).unwrap().as_text(), Some("mid"));
        assert_eq!(ol.pop().unwrap().as_text(), Some("last"));
        assert_eq!(ol.get(0).and_then(|n| n.as_text()), Some("A"));
        assert_eq!(ol.len(), 3);
        assert_eq!(ol.iter().count(), 3);

        let err = ol.set(10, "x").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedOperation);
        assert!(matches!(err, Error::IndexOutOfRange { index: 10, len: 3, .. }));
        assert!(b.catalog().ol.pop().is_err());
    }

    #[test]
    fn test_unknown_attribute() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        let label = b.catalog().label.with_attrs([b.attr(("for_", "name"))]);
        assert_eq!(label.attribute("for").unwrap().as_str(), Some("name"));
        assert_eq!(label.attribute("for_").unwrap().as_str(), Some("name"));
        let err = label.attribute("href").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedOperation);
    }

    #[test]
    fn test_mutation_cannot_create_cycles() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        let outer = b.catalog().div.with(b.catalog().span);
        let inner = outer.get(0).and_then(|n| n.as_container()).unwrap();

        assert_eq!(
            outer.push(outer),
            Err(Error::WouldCycle { operation: "push" })
        );
        assert!(matches!(inner.push(outer), Err(Error::WouldCycle { .. })));
        // A structurally identical but distinct container is fine.
        outer.push(outer.with(())).unwrap();
        assert_eq!(outer.render(), "<div><span /><div><span /></div></div>");
    }

    struct Meddler<'a, 'bump> {
        parent: &'a Cell<Option<Container<'bump>>>,
        outcome: &'a RefCell<Option<Result<(), Error>>>,
    }
    impl fmt::Display for Meddler<'_, '_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            if let Some(parent) = self.parent.get() {
                *self.outcome.borrow_mut() = Some(parent.push("late"));
            }
            f.write_str("leaf")
        }
    }
    impl AtomicLeaf for Meddler<'_, '_> {}

    #[test]
    fn test_mutation_during_render_is_rejected() {
        let parent = Cell::new(None);
        let outcome = RefCell::new(None);
        let bump = Bump::new();
        let b = Builder::new(&bump);
        let div = b.catalog().div.with(("a", Meddler {
            parent: &parent,
            outcome: &outcome,
        }));
        parent.set(Some(div));

        assert_eq!(div.render(), "<div>aleaf</div>");
        assert_eq!(
            outcome.take(),
            Some(Err(Error::ContentsBusy { operation: "push" }))
        );
        assert_eq!(div.len(), 2);
    }

    #[test]
    fn test_join_and_add() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        let br = b.catalog().br;
        assert_eq!(br.join(["a", "b", "c"]).render(), "a<br>b<br>c");
        assert_eq!(br.join(Vec::<&str>::new()).render(), "");

        let line = b.catalog().em.with("x") + br;
        assert_eq!(line.render(), "<em>x</em><br>");
        assert_eq!(line.len(), 2);
        assert_eq!(("> " + line).render(), "> <em>x</em><br>");
        assert_eq!(("> " + line).len(), 3);
    }

    #[test]
    fn test_debug_repr() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        let a = b
            .catalog()
            .a
            .extend(("home", b.catalog().br), [b.attr(("href", "/"))]);
        assert_eq!(
            format!("{a:?}"),
            r#"Element("a", Normal, href = "/")("home", Element("br", SelfClosingOnly))"#
        );
        assert_eq!(format!("{:?}", b.sequence("x")), r#"Sequence()("x")"#);
    }

    #[test]
    fn test_atomic_marker_overrides_default() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        let seq = b.sequence(("a", "b"));
        assert!(!seq.is_atomic());
        assert!(seq.atomic(true).is_atomic());
        assert_eq!(b.catalog().div.with(seq.atomic(true)).len(), 1);
        assert_eq!(b.catalog().div.with(seq).len(), 2);

        let spread = b.catalog().b.with(("x", "y")).atomic(false);
        assert_eq!(b.catalog().p.with(spread).render(), "<p>xy</p>");
    }
}
