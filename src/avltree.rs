//! A height-balanced (AVL) binary search tree.
//!
//! Nodes own their children outright and carry the height of the subtree
//! they root, so [`AvlTree::height`] is O(1). Insertion descends
//! recursively and every call hands the (possibly rotated) subtree root back
//! to its caller; there are no parent pointers.
//!
//! For string keys, [`AvlTree::search_prefix`] walks only the branches that
//! can hold a value starting with the prefix. Keys are compared byte-wise
//! (`str`'s `Ord`), which for UTF-8 is code-point order. Under that order a
//! node that neither matches nor sorts after the prefix has no match in its
//! right subtree, and symmetrically for the left, so the pruning is exact.
//!
//! ```txt
//! insert "a", "b", "c"            a                 b
//!                                  \               / \
//!                                   b      =>     a   c
//!                                    \
//!                                     c
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;

type Link<T> = Option<Box<Node<T>>>;

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    height: usize,
    left: Link<T>,
    right: Link<T>,
}

fn height<T>(link: &Link<T>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

impl<T> Node<T> {
    fn leaf(value: T) -> Self {
        Self {
            value,
            height: 1,
            left: None,
            right: None,
        }
    }

    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    /// `height(left) - height(right)`.
    fn balance_factor(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let Some(mut pivot) = node.left.take() else {
        return node;
    };
    node.left = pivot.right.take();
    node.update_height();
    pivot.right = Some(node);
    pivot.update_height();
    pivot
}

fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let Some(mut pivot) = node.right.take() else {
        return node;
    };
    node.right = pivot.left.take();
    node.update_height();
    pivot.left = Some(node);
    pivot.update_height();
    pivot
}

/// Refreshes the height of `node` and, if it is off balance by two, rotates
/// it back into shape. Returns the new root of the subtree.
fn rebalance<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    node.update_height();
    match node.balance_factor() {
        2 => {
            if node.left.as_ref().is_some_and(|left| left.balance_factor() < 0) {
                node.left = node.left.take().map(rotate_left);
            }
            rotate_right(node)
        }
        -2 => {
            if node.right.as_ref().is_some_and(|right| right.balance_factor() > 0) {
                node.right = node.right.take().map(rotate_right);
            }
            rotate_left(node)
        }
        _ => node,
    }
}

fn insert<T: Ord>(link: Link<T>, value: T, inserted: &mut bool) -> Box<Node<T>> {
    let Some(mut node) = link else {
        *inserted = true;
        return Box::new(Node::leaf(value));
    };

    match value.cmp(&node.value) {
        Ordering::Equal => return node,
        Ordering::Less => node.left = Some(insert(node.left.take(), value, inserted)),
        Ordering::Greater => node.right = Some(insert(node.right.take(), value, inserted)),
    }

    if *inserted { rebalance(node) } else { node }
}

/// An ordered set of values kept height-balanced on every insertion.
#[derive(Debug, Clone)]
pub struct AvlTree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> AvlTree<T> {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Number of distinct values stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the tree: 0 when empty, 1 for a single value.
    pub fn height(&self) -> usize {
        height(&self.root)
    }

    /// The value currently at the root, if any.
    pub fn root(&self) -> Option<&T> {
        self.root.as_ref().map(|node| &node.value)
    }

    /// Iterates the values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref())
    }
}

impl<T: Ord> AvlTree<T> {
    /// Inserts `value`, rebalancing as needed.
    ///
    /// Returns `false` and leaves the tree untouched when an equal value is
    /// already stored. The empty string is an ordinary key that sorts before
    /// every other string.
    pub fn insert(&mut self, value: T) -> bool {
        let mut inserted = false;
        self.root = Some(insert(self.root.take(), value, &mut inserted));
        if inserted {
            self.len += 1;
        }
        inserted
    }

    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut link = &self.root;
        while let Some(node) = link {
            link = match value.cmp(node.value.borrow()) {
                Ordering::Equal => return true,
                Ordering::Less => &node.left,
                Ordering::Greater => &node.right,
            };
        }
        false
    }
}

impl<T: Borrow<str>> AvlTree<T> {
    /// Collects every stored value that starts with `prefix`.
    ///
    /// Results come in pre-order: a matching node, then the matches of its
    /// left subtree, then those of its right subtree. They are not sorted.
    /// The empty prefix matches every value.
    pub fn search_prefix(&self, prefix: &str) -> Vec<&str> {
        self.prefix_iter(prefix).collect()
    }

    /// Lazy form of [`AvlTree::search_prefix`]; each call to `next` resumes
    /// the pruned traversal where it stopped.
    pub fn prefix_iter<'a, 'p>(&'a self, prefix: &'p str) -> PrefixIter<'a, 'p, T> {
        PrefixIter {
            prefix,
            stack: self.root.as_deref().into_iter().collect(),
        }
    }
}

impl<T: Ord> FromIterator<T> for AvlTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for AvlTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a AvlTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over an [`AvlTree`].
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.value)
    }
}

/// Pruned pre-order traversal yielding the values that start with a prefix.
pub struct PrefixIter<'a, 'p, T> {
    prefix: &'p str,
    stack: Vec<&'a Node<T>>,
}

impl<'a, T: Borrow<str>> Iterator for PrefixIter<'a, '_, T> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            let value: &'a str = node.value.borrow();
            if value.starts_with(self.prefix) {
                // Right goes under left so the left subtree is visited first.
                self.stack.extend(node.right.as_deref());
                self.stack.extend(node.left.as_deref());
                return Some(value);
            } else if self.prefix < value {
                self.stack.extend(node.left.as_deref());
            } else {
                self.stack.extend(node.right.as_deref());
            }
        }
        None
    }
}
