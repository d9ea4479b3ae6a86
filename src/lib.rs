//! This crate exposes a self-balancing Binary Search Tree (an AVL tree)
//! alongside the plain Binary Search Tree it improves on, mostly for
//! educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). BSTs also naturally support
//! sorted iteration by visiting the left subtree, then the subtree root, then
//! the right subtree.
//!
//! ## AVL Tree
//!
//! A plain BST makes no promise about its height. Inserting already-sorted
//! values hangs every node off the same side and the "tree" degrades into a
//! linked list of height `N`. An AVL tree additionally maintains, for every
//! `Node`, the invariant that the heights of its two subtrees differ by at
//! most one. Whenever an insertion or deletion breaks that bound, the tree
//! applies one of four rotations to restore it. This limits the height (and
//! with it the cost of every operation) to `O(lg N)`.
//!
//! Both trees store plain ordered values and treat inserting an existing
//! value as a no-op, so they behave like sets. Every mutating operation
//! consumes the tree it is called on and returns the new root; see the
//! module docs for examples.

#![deny(missing_docs)]

pub mod avl;
pub mod bst;

mod util;

pub use util::DeleteResult;

#[cfg(test)]
mod test;
