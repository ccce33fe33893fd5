use std::fmt;

use bumpalo::collections::Vec as BumpVec;
use bumpalo::Bump;

/// Attribute names that would collide with Rust keywords, written with a trailing
/// underscore, and the HTML names they stand for.
pub const RESERVED_ATTRIBUTES: &[(&str, &str)] = &[
    ("class_", "class"),
    ("for_", "for"),
    ("type_", "type"),
    ("async_", "async"),
    ("loop_", "loop"),
    ("as_", "as"),
];

/// Map a reserved-word spelling (e.g. `class_`) to its real attribute name.
///
/// Any other name is returned unchanged.
pub fn normalize_key(key: &str) -> &str {
    RESERVED_ATTRIBUTES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map(|(_, name)| *name)
        .unwrap_or(key)
}

/// Represents a typed attribute value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", content = "value"))]
pub enum AttributeValue<'bump> {
    /// A string value.
    Text(&'bump str),
    /// An integer value.
    Int(i128),
    /// A floating-point value.
    Float(f64),
    /// `true` renders the bare attribute name, `false` leaves the attribute out.
    Bool(bool),
}
impl<'bump> AttributeValue<'bump> {
    /// Returns the value as a string slice if this is a Text variant.
    pub fn as_str(&self) -> Option<&'bump str> {
        match self {
            AttributeValue::Text(s) => Some(*s),
            _ => None,
        }
    }

    /// Returns the boolean value if this is a Bool variant.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttributeValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}
impl fmt::Display for AttributeValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Text(s) => f.write_str(s),
            AttributeValue::Int(i) => write!(f, "{i}"),
            AttributeValue::Float(x) => write!(f, "{x}"),
            AttributeValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
/// A key-value pair for an HTML attribute.
pub struct Attribute<'bump> {
    /// The key of the attribute.
    pub key: &'bump str,
    /// The value of the attribute.
    pub value: AttributeValue<'bump>,
}
impl<'bump> Attribute<'bump> {
    /// Create a new attribute with a string key and value.
    pub fn new(bump: &'bump Bump, key: &str, value: &str) -> Self {
        Attribute {
            key: bump.alloc_str(key),
            value: AttributeValue::Text(bump.alloc_str(value)),
        }
    }

    /// Create a new attribute with an integer value.
    pub fn new_int(bump: &'bump Bump, key: &str, value: i128) -> Self {
        Attribute {
            key: bump.alloc_str(key),
            value: AttributeValue::Int(value),
        }
    }

    /// Create a new attribute with a float value.
    pub fn new_float(bump: &'bump Bump, key: &str, value: f64) -> Self {
        Attribute {
            key: bump.alloc_str(key),
            value: AttributeValue::Float(value),
        }
    }

    /// Create a new attribute with a boolean value.
    pub fn new_bool(bump: &'bump Bump, key: &str, value: bool) -> Self {
        Attribute {
            key: bump.alloc_str(key),
            value: AttributeValue::Bool(value),
        }
    }

    /// Create a boolean attribute that is present without a value.
    pub fn boolean(bump: &'bump Bump, key: &str) -> Self {
        Self::new_bool(bump, key, true)
    }

    /// Write the attribute as it appears inside an open tag, preceded by a space.
    ///
    /// `false` attributes write nothing. Values are written verbatim.
    pub fn write_to(&self, w: &mut dyn fmt::Write) -> fmt::Result {
        match self.value {
            AttributeValue::Bool(true) => write!(w, " {}", self.key),
            AttributeValue::Bool(false) => Ok(()),
            value => write!(w, " {}=\"{}\"", self.key, value),
        }
    }
}

/// Trait for types that can be converted into an Attribute with a bump allocator.
pub trait IntoAttribute<'bump> {
    /// Convert this value into an Attribute using the given bump allocator.
    fn into_attribute(self, bump: &'bump Bump) -> Attribute<'bump>;
}
impl<'bump> IntoAttribute<'bump> for Attribute<'bump> {
    fn into_attribute(self, _bump: &'bump Bump) -> Attribute<'bump> {
        self
    }
}
impl<'bump> IntoAttribute<'bump> for &str {
    fn into_attribute(self, bump: &'bump Bump) -> Attribute<'bump> {
        Attribute::boolean(bump, self)
    }
}
impl<'bump> IntoAttribute<'bump> for (&str, &str) {
    fn into_attribute(self, bump: &'bump Bump) -> Attribute<'bump> {
        Attribute::new(bump, self.0, self.1)
    }
}
impl<'bump> IntoAttribute<'bump> for (&str, String) {
    fn into_attribute(self, bump: &'bump Bump) -> Attribute<'bump> {
        Attribute::new(bump, self.0, &self.1)
    }
}
impl<'bump> IntoAttribute<'bump> for (&str, &String) {
    fn into_attribute(self, bump: &'bump Bump) -> Attribute<'bump> {
        Attribute::new(bump, self.0, self.1)
    }
}
impl<'bump> IntoAttribute<'bump> for (String, String) {
    fn into_attribute(self, bump: &'bump Bump) -> Attribute<'bump> {
        Attribute::new(bump, &self.0, &self.1)
    }
}
impl<'bump> IntoAttribute<'bump> for (&str, bool) {
    fn into_attribute(self, bump: &'bump Bump) -> Attribute<'bump> {
        Attribute::new_bool(bump, self.0, self.1)
    }
}
impl<'bump> IntoAttribute<'bump> for (&str, f64) {
    fn into_attribute(self, bump: &'bump Bump) -> Attribute<'bump> {
        Attribute::new_float(bump, self.0, self.1)
    }
}

macro_rules! int_attributes {
    ($($int:ty),*) => {
        $(
            impl<'bump> IntoAttribute<'bump> for (&str, $int) {
                fn into_attribute(self, bump: &'bump Bump) -> Attribute<'bump> {
                    Attribute::new_int(bump, self.0, self.1 as i128)
                }
            }
        )*
    };
}
int_attributes!(i32, i64, u32, u64, usize);

/// Create an attribute from a value that implements [IntoAttribute].
pub fn attr<'bump>(bump: &'bump Bump, value: impl IntoAttribute<'bump>) -> Attribute<'bump> {
    value.into_attribute(bump)
}

/// Copy `existing` and apply `updates` on top of it.
///
/// Keys are normalised through [RESERVED_ATTRIBUTES]. A key that is already present keeps
/// its position and takes the new value; new keys are appended.
pub(crate) fn merge<'bump>(
    bump: &'bump Bump,
    existing: &[Attribute<'bump>],
    updates: impl IntoIterator<Item = Attribute<'bump>>,
) -> &'bump [Attribute<'bump>] {
    let mut merged = BumpVec::from_iter_in(existing.iter().copied(), bump);
    for Attribute { key, value } in updates {
        let key = normalize_key(key);
        match merged.iter_mut().find(|a| a.key == key) {
            Some(slot) => slot.value = value,
            None => merged.push(Attribute { key, value }),
        }
    }
    merged.into_bump_slice()
}

/// Order-insensitive comparison of two attribute sets with unique keys.
pub(crate) fn same_set(a: &[Attribute<'_>], b: &[Attribute<'_>]) -> bool {
    a.len() == b.len()
        && a.iter()
            .all(|x| b.iter().any(|y| x.key == y.key && x.value == y.value))
}
