use std::fmt;

/// The two broad classes of failure a container operation can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A construction parameter failed validation. Raised when the container is built,
    /// never deferred to rendering.
    InvalidConfiguration,
    /// A list-style or attribute accessor was used in a way the container cannot honour.
    UnsupportedOperation,
}

/// Error type for container construction and the list-style accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A tag kind could not be recognised.
    UnknownTagKind {
        /// The rejected value, as written by the caller.
        value: String,
    },
    /// No tag with this name exists in the [crate::Catalog].
    UnknownTag {
        /// The name that was looked up.
        name: String,
    },
    /// A composite's skeleton does not contain its heart.
    DetachedHeart {
        /// The name of the composite whose skeleton was built.
        composite: &'static str,
    },
    /// An index was outside the contents of the container.
    IndexOutOfRange {
        /// The accessor that was called.
        operation: &'static str,
        /// The requested index.
        index: usize,
        /// The number of children at the time of the call.
        len: usize,
    },
    /// The requested attribute is not set on the container.
    UnknownAttribute {
        /// The (normalised) attribute name.
        name: String,
    },
    /// The contents are borrowed elsewhere, e.g. while the container is being rendered.
    ContentsBusy {
        /// The accessor that was called.
        operation: &'static str,
    },
    /// The mutation would make the container reachable from its own contents.
    WouldCycle {
        /// The accessor that was called.
        operation: &'static str,
    },
}
impl Error {
    /// Returns the [ErrorKind] this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnknownTagKind { .. } | Error::UnknownTag { .. } | Error::DetachedHeart { .. } => {
                ErrorKind::InvalidConfiguration
            }
            Error::IndexOutOfRange { .. }
            | Error::UnknownAttribute { .. }
            | Error::ContentsBusy { .. }
            | Error::WouldCycle { .. } => ErrorKind::UnsupportedOperation,
        }
    }
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownTagKind { value } => write!(f, "Unknown tag kind '{value}'"),
            Error::UnknownTag { name } => write!(f, "No tag named '{name}' in the catalog"),
            Error::DetachedHeart { composite } => {
                write!(f, "Skeleton of {composite} does not embed its heart")
            }
            Error::IndexOutOfRange {
                operation,
                index,
                len,
            } => write!(
                f,
                "Index {index} out of range for {operation} on a container with {len} children"
            ),
            Error::UnknownAttribute { name } => write!(f, "Container has no attribute '{name}'"),
            Error::ContentsBusy { operation } => {
                write!(f, "Cannot {operation}: contents are currently borrowed")
            }
            Error::WouldCycle { operation } => {
                write!(f, "Cannot {operation}: the container would contain itself")
            }
        }
    }
}
impl std::error::Error for Error {}
