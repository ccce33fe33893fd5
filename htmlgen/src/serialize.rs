//! `Serialize` impls for the container tree, behind the `serde` feature.
//!
//! Leaves are written through their `Display` impl. Composites are written as their
//! skeleton, which is where the heart and its children end up.

use serde::ser::{Serialize, SerializeSeq, SerializeStruct, Serializer};

use crate::{Container, Node, Variant};

struct Children<'a, 'bump>(&'a [Node<'bump>]);
impl Serialize for Children<'_, '_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for node in self.0 {
            seq.serialize_element(node)?;
        }
        seq.end()
    }
}

impl Serialize for Container<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.variant() {
            Variant::Sequence => {
                let mut s = serializer.serialize_struct("Container", 3)?;
                s.serialize_field("type", "Sequence")?;
                s.serialize_field("spacer", self.spacer())?;
                s.serialize_field("children", &Children(&self.contents()))?;
                s.end()
            }
            Variant::Element { name, kind } => {
                let mut s = serializer.serialize_struct("Container", 5)?;
                s.serialize_field("type", "Element")?;
                s.serialize_field("name", name)?;
                s.serialize_field("kind", &kind)?;
                s.serialize_field("attributes", self.attributes())?;
                s.serialize_field("children", &Children(&self.contents()))?;
                s.end()
            }
            Variant::Composite {
                pseudo, skeleton, ..
            } => {
                let mut s = serializer.serialize_struct("Container", 4)?;
                s.serialize_field("type", "Composite")?;
                s.serialize_field("name", pseudo.name())?;
                s.serialize_field("attributes", self.attributes())?;
                s.serialize_field("skeleton", &skeleton)?;
                s.end()
            }
        }
    }
}

impl Serialize for Node<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Text(text) => {
                let mut s = serializer.serialize_struct("Node", 2)?;
                s.serialize_field("type", "Text")?;
                s.serialize_field("value", text)?;
                s.end()
            }
            Node::Container(container) => container.serialize(serializer),
            Node::Leaf(leaf) => {
                let mut s = serializer.serialize_struct("Node", 2)?;
                s.serialize_field("type", "Leaf")?;
                s.serialize_field("value", &leaf.to_string())?;
                s.end()
            }
        }
    }
}

#[cfg(feature = "dump_tree")]
impl Container<'_> {
    /// Dump the tree as pretty-printed JSON, for debugging.
    pub fn dump_tree(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::Builder;
    use bumpalo::Bump;
    use pretty_assertions::assert_eq;

    #[cfg(feature = "dump_tree")]
    #[test]
    fn test_dump_tree() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        let a = b.catalog().a.extend("home", [b.attr(("href", "/"))]);
        let json: serde_json::Value = serde_json::from_str(&a.dump_tree().unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "Element",
                "name": "a",
                "kind": "Normal",
                "attributes": [{"key": "href", "value": {"type": "Text", "value": "/"}}],
                "children": [{"type": "Text", "value": "home"}],
            })
        );
    }

    #[cfg(feature = "dump_tree")]
    #[test]
    fn test_dump_composite_as_skeleton() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        let page = b
            .composite(crate::pages::SimplePage, "x", [])
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(&page.dump_tree().unwrap()).unwrap();
        assert_eq!(json["type"], "Composite");
        assert_eq!(json["name"], "SimplePage");
        assert_eq!(json["skeleton"]["children"][1]["name"], "html");
        assert_eq!(json["skeleton"]["children"][1]["children"][0]["value"], "x");
    }

    #[test]
    fn test_tree_is_serializable() {
        fn assert_serialize<T: serde::Serialize>(_: &T) {}
        let bump = Bump::new();
        let b = Builder::new(&bump);
        let div = b.catalog().div.with("x");
        assert_serialize(&div);
        assert_eq!(div.render(), "<div>x</div>");
    }
}
