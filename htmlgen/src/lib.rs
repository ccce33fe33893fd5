#![deny(missing_docs)]
//! A crate for building HTML by composing nested containers instead of concatenating
//! strings.
//!
//! A [Builder] hands out containers: plain sequences, elements from its tag [Catalog],
//! and composites built from a [Pseudo] recipe. Calling [Container::extend] (or
//! [Container::with] / [Container::with_attrs]) on a container never changes it; it
//! returns a new container of the same kind with the extra children and attributes.
//! Anything implementing [Content] can be passed as children and is flattened into the
//! new container in order.
//!
//! All allocations are done through a bump allocator ([bumpalo::Bump]) which is passed
//! to the [Builder] once.
//!
//! Text and attribute values are written verbatim; see [util::escape_text] and
//! [util::escape_attribute] for untrusted input.
//!
//! # Example
//!
//! ```
//! use htmlgen::{bumpalo::Bump, each, Builder};
//!
//! let bump = Bump::new();
//! let b = Builder::new(&bump);
//! let tags = b.catalog();
//!
//! let nav = tags.ul.extend(
//!     each(["Home", "About"].map(|name| tags.li.with(name))),
//!     [b.attr(("class_", "nav"))],
//! );
//! assert_eq!(
//!     nav.render(),
//!     r#"<ul class="nav"><li>Home</li><li>About</li></ul>"#
//! );
//! ```

pub mod pages;
pub mod util;

// Re-export bumpalo for convenience
pub use bumpalo;

mod attribute;
pub use attribute::{
    attr, normalize_key, Attribute, AttributeValue, IntoAttribute, RESERVED_ATTRIBUTES,
};

mod builder;
pub use builder::Builder;

mod catalog;
pub use catalog::{Catalog, TAGS};

mod container;
pub use container::{Container, Variant};

mod content;
pub use content::{each, AtomicLeaf, Content, Each, Flattener, Node};

mod error;
pub use error::{Error, ErrorKind};

mod pseudo;
pub use pseudo::Pseudo;

#[cfg(feature = "serde")]
mod serialize;

mod tag;
pub use tag::{IntoTagKind, TagKind};
