//! Error types.

use core::fmt::{self, Debug, Display, Formatter};

/// An error type indicating that the requested key is not in the tree.
///
/// Returned by [`RBTree::delete`](crate::RBTree::delete). The tree is left exactly as it was.
#[derive(Copy, Clone, Default, PartialEq, Eq)]
pub struct NotFound;

impl Debug for NotFound {
    #[cold]
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.pad("NotFound")
    }
}

impl Display for NotFound {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.pad("key not found")
    }
}

impl std::error::Error for NotFound {}
