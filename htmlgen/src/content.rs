//! Flattening of constructor arguments into a container's children.
//!
//! Anything passed as contents implements [Content]. Text, numbers, elements and
//! [AtomicLeaf] values are *atomic* and become a single child; collections, tuples,
//! iterators and plain sequences are *expanded*, depth-first and left-to-right, until only
//! atomic values remain.

use std::borrow::Cow;
use std::fmt;

use bumpalo::collections::String as BumpString;
use bumpalo::collections::Vec as BumpVec;
use bumpalo::Bump;

use crate::Container;

/// A single child of a container.
#[derive(Clone, Copy)]
pub enum Node<'bump> {
    /// Text, written verbatim.
    Text(&'bump str),
    /// A nested container.
    Container(Container<'bump>),
    /// An opaque value rendered through its [fmt::Display] impl.
    Leaf(&'bump dyn fmt::Display),
}
impl<'bump> Node<'bump> {
    /// Create a text node, copying `text` into the arena.
    pub fn text(bump: &'bump Bump, text: &str) -> Self {
        Node::Text(bump.alloc_str(text))
    }

    /// Get the container if this node is a [`Container`].
    ///
    /// [`Container`]: Node::Container
    pub fn as_container(&self) -> Option<Container<'bump>> {
        match self {
            Node::Container(c) => Some(*c),
            _ => None,
        }
    }

    /// Get the text if this node is [`Text`].
    ///
    /// [`Text`]: Node::Text
    pub fn as_text(&self) -> Option<&'bump str> {
        match self {
            Node::Text(t) => Some(*t),
            _ => None,
        }
    }
}
impl<'bump> From<&'bump str> for Node<'bump> {
    fn from(text: &'bump str) -> Self {
        Node::Text(text)
    }
}
impl<'bump> From<Container<'bump>> for Node<'bump> {
    fn from(container: Container<'bump>) -> Self {
        Node::Container(container)
    }
}
impl<'bump> PartialEq for Node<'bump> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Node::Text(a), Node::Text(b)) => a == b,
            (Node::Container(a), Node::Container(b)) => a == b,
            // A leaf is opaque; its rendered text is all there is to compare.
            (Node::Leaf(a), Node::Leaf(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
impl fmt::Display for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Text(t) => f.write_str(t),
            Node::Container(c) => fmt::Display::fmt(c, f),
            Node::Leaf(l) => fmt::Display::fmt(l, f),
        }
    }
}
impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Text(t) => write!(f, "{t:?}"),
            Node::Container(c) => fmt::Debug::fmt(c, f),
            Node::Leaf(l) => write!(f, "Leaf({l})"),
        }
    }
}

/// Marker for values that must never be expanded, even when they could be iterated.
///
/// Implementing this makes the type a [Content] that is stored whole and rendered with
/// [fmt::Display]. The value is moved into the arena and is not dropped.
///
/// ```
/// use std::fmt;
/// use htmlgen::{bumpalo::Bump, AtomicLeaf, Builder};
///
/// struct Version(u32, u32);
/// impl fmt::Display for Version {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "v{}.{}", self.0, self.1)
///     }
/// }
/// impl AtomicLeaf for Version {}
///
/// let bump = Bump::new();
/// let b = Builder::new(&bump);
/// let badge = b.catalog().span.with(Version(1, 2));
/// assert_eq!(badge.render(), "<span>v1.2</span>");
/// ```
pub trait AtomicLeaf: fmt::Display {}

/// Trait for values that can be flattened into a container's children.
pub trait Content<'bump> {
    /// Append this value, or the atomic values it expands to, to `out`.
    fn flatten_into(self, out: &mut Flattener<'bump>);
}

/// Wraps any [IntoIterator] so that its items are expanded as contents.
///
/// Created with [each].
#[derive(Debug, Clone)]
pub struct Each<I>(pub I);

/// Expand every item of `iter` into the container's contents.
pub fn each<I: IntoIterator>(iter: I) -> Each<I> {
    Each(iter)
}

/// Collects flattened children in order.
pub struct Flattener<'bump> {
    bump: &'bump Bump,
    nodes: BumpVec<'bump, Node<'bump>>,
}
impl<'bump> Flattener<'bump> {
    pub(crate) fn new(bump: &'bump Bump) -> Self {
        Self {
            bump,
            nodes: BumpVec::new_in(bump),
        }
    }

    /// Get a reference to the bump allocator.
    pub fn bump(&self) -> &'bump Bump {
        self.bump
    }

    /// Flatten a nested value.
    pub fn visit(&mut self, content: impl Content<'bump>) {
        content.flatten_into(self);
    }

    /// Append a node, expanding it first if it is a non-atomic container.
    pub fn push_node(&mut self, node: Node<'bump>) {
        match node {
            Node::Container(c) if !c.is_atomic() => {
                for child in c.contents().iter() {
                    self.push_node(*child);
                }
            }
            node => self.nodes.push(node),
        }
    }

    /// Append a text node, copying `text` into the arena.
    pub fn push_text(&mut self, text: &str) {
        self.nodes.push(Node::text(self.bump, text));
    }

    pub(crate) fn finish(self) -> BumpVec<'bump, Node<'bump>> {
        self.nodes
    }
}

impl<'bump, T: AtomicLeaf + 'bump> Content<'bump> for T {
    fn flatten_into(self, out: &mut Flattener<'bump>) {
        let leaf: &'bump dyn fmt::Display = out.bump().alloc(self);
        out.nodes.push(Node::Leaf(leaf));
    }
}
impl<'bump> Content<'bump> for Node<'bump> {
    fn flatten_into(self, out: &mut Flattener<'bump>) {
        out.push_node(self);
    }
}
impl<'bump> Content<'bump> for Container<'bump> {
    fn flatten_into(self, out: &mut Flattener<'bump>) {
        out.push_node(Node::Container(self));
    }
}
impl<'bump> Content<'bump> for &Container<'bump> {
    fn flatten_into(self, out: &mut Flattener<'bump>) {
        out.push_node(Node::Container(*self));
    }
}
impl<'bump> Content<'bump> for &str {
    fn flatten_into(self, out: &mut Flattener<'bump>) {
        out.push_text(self);
    }
}
impl<'bump> Content<'bump> for String {
    fn flatten_into(self, out: &mut Flattener<'bump>) {
        out.push_text(&self);
    }
}
impl<'bump> Content<'bump> for &String {
    fn flatten_into(self, out: &mut Flattener<'bump>) {
        out.push_text(self);
    }
}
impl<'bump> Content<'bump> for Cow<'_, str> {
    fn flatten_into(self, out: &mut Flattener<'bump>) {
        out.push_text(&self);
    }
}
impl<'bump> Content<'bump> for BumpString<'bump> {
    fn flatten_into(self, out: &mut Flattener<'bump>) {
        out.nodes.push(Node::Text(self.into_bump_str()));
    }
}
impl<'bump> Content<'bump> for () {
    fn flatten_into(self, _out: &mut Flattener<'bump>) {}
}
impl<'bump, T: Content<'bump>> Content<'bump> for Option<T> {
    fn flatten_into(self, out: &mut Flattener<'bump>) {
        if let Some(content) = self {
            out.visit(content);
        }
    }
}
impl<'bump, T: Content<'bump>> Content<'bump> for Vec<T> {
    fn flatten_into(self, out: &mut Flattener<'bump>) {
        for content in self {
            out.visit(content);
        }
    }
}
impl<'bump, 'a, T: Content<'bump>> Content<'bump> for BumpVec<'a, T> {
    fn flatten_into(self, out: &mut Flattener<'bump>) {
        for content in self {
            out.visit(content);
        }
    }
}
impl<'bump, T: Content<'bump>, const N: usize> Content<'bump> for [T; N] {
    fn flatten_into(self, out: &mut Flattener<'bump>) {
        for content in self {
            out.visit(content);
        }
    }
}
impl<'bump, I> Content<'bump> for Each<I>
where
    I: IntoIterator,
    I::Item: Content<'bump>,
{
    fn flatten_into(self, out: &mut Flattener<'bump>) {
        for content in self.0 {
            out.visit(content);
        }
    }
}

// Values that cannot be iterated are kept whole, as text.
macro_rules! display_content {
    ($($ty:ty),*) => {
        $(
            impl<'bump> Content<'bump> for $ty {
                fn flatten_into(self, out: &mut Flattener<'bump>) {
                    let text = bumpalo::format!(in out.bump(), "{}", self);
                    out.nodes.push(Node::Text(text.into_bump_str()));
                }
            }
        )*
    };
}
display_content!(char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

macro_rules! tuple_content {
    ($($name:ident),+) => {
        impl<'bump, $($name: Content<'bump>),+> Content<'bump> for ($($name,)+) {
            #[allow(non_snake_case)]
            fn flatten_into(self, out: &mut Flattener<'bump>) {
                let ($($name,)+) = self;
                $(out.visit($name);)+
            }
        }
    };
}
tuple_content!(A);
tuple_content!(A, B);
tuple_content!(A, B, C);
tuple_content!(A, B, C, D);
tuple_content!(A, B, C, D, E);
tuple_content!(A, B, C, D, E, F);
tuple_content!(A, B, C, D, E, F, G);
tuple_content!(A, B, C, D, E, F, G, H);
tuple_content!(A, B, C, D, E, F, G, H, I);
tuple_content!(A, B, C, D, E, F, G, H, I, J);
tuple_content!(A, B, C, D, E, F, G, H, I, J, K);
tuple_content!(A, B, C, D, E, F, G, H, I, J, K, L);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Builder;
    use pretty_assertions::assert_eq;

    struct Word(&'static str);
    impl fmt::Display for Word {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.0)
        }
    }
    impl AtomicLeaf for Word {}

    fn flatten<'bump>(bump: &'bump Bump, content: impl Content<'bump>) -> Vec<String> {
        let mut out = Flattener::new(bump);
        out.visit(content);
        out.finish().iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_nested_sequences_flatten_depth_first() {
        let bump = Bump::new();
        let nested = flatten(&bump, ("a", vec![vec!["b"], vec!["c", "d"]], "e"));
        let flat = flatten(&bump, ["a", "b", "c", "d", "e"]);
        assert_eq!(nested, flat);
    }

    #[test]
    fn test_text_is_never_split() {
        let bump = Bump::new();
        assert_eq!(flatten(&bump, "abc"), vec!["abc"]);
        assert_eq!(flatten(&bump, String::from("xyz")), vec!["xyz"]);
    }

    #[test]
    fn test_non_iterable_values_are_atomic() {
        let bump = Bump::new();
        assert_eq!(flatten(&bump, (1i32, 2.5f64, 'c')), vec!["1", "2.5", "c"]);
        assert_eq!(flatten(&bump, (None::<&str>, Some("x"), ())), vec!["x"]);
    }

    #[test]
    fn test_atomic_leaf_is_kept_whole() {
        let bump = Bump::new();
        let mut out = Flattener::new(&bump);
        out.visit((Word("one"), each(["two", "three"])));
        let nodes = out.finish();
        assert_eq!(nodes.len(), 3);
        assert!(matches!(nodes[0], Node::Leaf(_)));
        assert_eq!(nodes[0].to_string(), "one");
    }

    #[test]
    fn test_leaves_compare_by_rendered_text() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        let p = b.catalog().p;
        assert_eq!(p.with(Word("w")), p.with(Word("w")));
        assert_ne!(p.with(Word("w")), p.with(Word("v")));
        assert_ne!(p.with(Word("w")).get(0), Some(Node::Text("w")));
    }

    #[test]
    fn test_sequences_splice_and_elements_stay() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        let seq = b.sequence(("a", "b"));
        let div = b.catalog().div.with("c");

        let mut out = Flattener::new(&bump);
        out.visit((seq, div, seq.atomic(true)));
        let nodes = out.finish();
        assert_eq!(nodes.len(), 4);
        assert_eq!(nodes[0].as_text(), Some("a"));
        assert_eq!(nodes[1].as_text(), Some("b"));
        assert_eq!(nodes[2].as_container(), Some(div));
        assert_eq!(nodes[3].to_string(), "ab");
    }
}
