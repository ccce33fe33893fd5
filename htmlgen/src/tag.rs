use std::str::FromStr;

use crate::Error;

/// Governs how an element renders when it has no children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TagKind {
    /// Open and close tag when there are children, `<name />` otherwise.
    #[default]
    Normal,
    /// A bare open tag (`<br>`) when there are no children.
    SelfClosingOnly,
    /// Always an open and a close tag, even when empty (`<script></script>`).
    AlwaysPaired,
}
impl TryFrom<u8> for TagKind {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TagKind::Normal),
            1 => Ok(TagKind::SelfClosingOnly),
            2 => Ok(TagKind::AlwaysPaired),
            _ => Err(Error::UnknownTagKind {
                value: value.to_string(),
            }),
        }
    }
}
impl FromStr for TagKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(TagKind::Normal),
            "self-closing-only" | "lone" => Ok(TagKind::SelfClosingOnly),
            "always-paired" | "forced-pair" => Ok(TagKind::AlwaysPaired),
            _ => Err(Error::UnknownTagKind {
                value: s.to_string(),
            }),
        }
    }
}

/// Trait for values that can be validated into a [TagKind].
///
/// This lets [crate::Builder::tag] accept raw kinds (numbers or names) and reject
/// unknown ones when the element is constructed.
pub trait IntoTagKind {
    /// Convert this value into a [TagKind].
    fn into_tag_kind(self) -> Result<TagKind, Error>;
}
impl IntoTagKind for TagKind {
    fn into_tag_kind(self) -> Result<TagKind, Error> {
        Ok(self)
    }
}
impl IntoTagKind for u8 {
    fn into_tag_kind(self) -> Result<TagKind, Error> {
        TagKind::try_from(self)
    }
}
impl IntoTagKind for &str {
    fn into_tag_kind(self) -> Result<TagKind, Error> {
        self.parse()
    }
}
