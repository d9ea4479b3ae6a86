/// Outcome of a `delete` call. Deleting a value that isn't in the tree is
/// not an error, but callers get to observe the difference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteResult {
    /// The value was found and its node was removed from the tree.
    Deleted,
    /// The value wasn't in the tree, which was returned unmodified.
    NotFound,
}
