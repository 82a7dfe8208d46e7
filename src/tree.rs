//! An ordered map backed by an unbalanced binary search tree

use std::cmp::Ordering;
use std::iter::FromIterator;
use std::mem;

mod node;
mod traverse;

pub use node::*;
pub use traverse::Collector;

type Link = Option<Box<Node>>;

/// A binary search tree keyed by single characters
///
/// BST properties: for each node with key `k`:
/// - The key of every node in the left subtree is less than `k`
/// - The key of every node in the right subtree is greater than `k`
///
/// The ordering is strict, so the tree never holds two entries with the same
/// key. Inserting a key that is already present replaces its content.
///
/// No rebalancing is performed. The depth of the tree depends on the
/// insertion order and is linear in the worst case (e.g. keys inserted in
/// sorted order).
#[derive(Debug, Clone)]
pub struct CharMap {
    root: Link,
    len: usize,
}

impl Default for CharMap {
    fn default() -> Self {
        Self {
            root: None,
            len: 0,
        }
    }
}

impl PartialEq for CharMap {
    fn eq(&self, other: &Self) -> bool {
        // Trees holding the same entries can be shaped differently depending
        // on the order of insertions and removals, so the structures cannot
        // be compared directly. In-order traversal produces the entries in
        // sorted order, which is shape-independent.

        if self.len() != other.len() {
            return false;
        }

        let mut entries = Vec::with_capacity(self.len());
        collect_entries(self.root(), &mut entries);

        let mut other_entries = Vec::with_capacity(other.len());
        collect_entries(other.root(), &mut other_entries);

        entries == other_entries
    }
}

impl Eq for CharMap {}

impl CharMap {
    /// Creates an empty `CharMap`
    ///
    /// # Examples
    ///
    /// ```
    /// use treetable::CharMap;
    /// let map = CharMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of entries in the map (i.e. the number of nodes in
    /// the tree)
    ///
    /// Time complexity: `O(1)`
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the map is empty
    ///
    /// Time complexity: `O(1)`
    pub fn is_empty(&self) -> bool {
        debug_assert!(self.len != 0 || self.root.is_none());
        self.len == 0
    }

    /// Returns `true` if the map contains an entry for the given key
    ///
    /// Time complexity: `O(depth)`
    ///
    /// # Examples
    ///
    /// ```
    /// use treetable::{CharMap, Content};
    ///
    /// let mut map = CharMap::new();
    /// map.insert('a', Content::Integer(1));
    /// assert!(map.contains('a'));
    /// assert!(!map.contains('b'));
    /// ```
    pub fn contains(&self, key: char) -> bool {
        self.get(key).is_some()
    }

    /// Returns a reference to the content stored under the given key, or
    /// `None` if no such key exists in the tree
    ///
    /// Time complexity: `O(depth)`
    ///
    /// # Examples
    ///
    /// ```
    /// use treetable::{CharMap, Content};
    ///
    /// let mut map = CharMap::new();
    /// map.insert('a', Content::Integer(1));
    /// assert_eq!(map.get('a'), Some(&Content::Integer(1)));
    /// assert_eq!(map.get('b'), None);
    /// ```
    pub fn get(&self, key: char) -> Option<&Content> {
        let mut current = self.root();
        while let Some(node) = current {
            match key.cmp(&node.key()) {
                Ordering::Less => current = node.left(),
                Ordering::Greater => current = node.right(),
                Ordering::Equal => return Some(node.content()),
            }
        }

        None
    }

    /// Returns a mutable reference to the content stored under the given key,
    /// or `None` if no such key exists in the tree
    ///
    /// Time complexity: `O(depth)`
    ///
    /// # Examples
    ///
    /// ```
    /// use treetable::{CharMap, Content};
    ///
    /// let mut map = CharMap::new();
    /// map.insert('a', Content::Integer(1));
    /// if let Some(content) = map.get_mut('a') {
    ///     *content = Content::Integer(2);
    /// }
    /// assert_eq!(map.get('a'), Some(&Content::Integer(2)));
    /// ```
    pub fn get_mut(&mut self, key: char) -> Option<&mut Content> {
        let mut current = self.root.as_deref_mut();
        while let Some(node) = current.take() {
            match key.cmp(&node.key()) {
                Ordering::Less => current = node.left_mut(),
                Ordering::Greater => current = node.right_mut(),
                Ordering::Equal => return Some(node.content_mut()),
            }
        }

        None
    }

    /// Inserts a new entry into the binary search tree
    ///
    /// If the key is already present, its content is replaced in place and
    /// the previous content is returned. Otherwise a new leaf node is
    /// attached and `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use treetable::{CharMap, Content};
    ///
    /// let mut map = CharMap::new();
    /// assert_eq!(map.insert('k', Content::Integer(37)), None);
    /// assert!(!map.is_empty());
    ///
    /// let prev = map.insert('k', Content::Text(Some("b".to_string())));
    /// assert_eq!(prev, Some(Content::Integer(37)));
    /// assert_eq!(map.get('k').and_then(|c| c.as_text()), Some("b"));
    /// ```
    pub fn insert(&mut self, key: char, content: Content) -> Option<Content> {
        let mut current = match self.root.as_deref_mut() {
            Some(root) => Some(root),
            None => {
                self.root = Some(Box::new(Node::new(key, content)));

                debug_assert_eq!(self.len, 0);
                self.len = 1;

                return None;
            },
        };

        while let Some(node) = current.take() {
            match key.cmp(&node.key()) {
                Ordering::Less => {
                    // Key not found, insert where we stopped
                    if !node.has_left() {
                        node.set_left(Node::new(key, content));
                        self.len += 1;
                        break;
                    }
                    current = node.left_mut();
                },

                Ordering::Greater => {
                    // Key not found, insert where we stopped
                    if !node.has_right() {
                        node.set_right(Node::new(key, content));
                        self.len += 1;
                        break;
                    }
                    current = node.right_mut();
                },

                Ordering::Equal => {
                    // The previous content is handed back to the caller and
                    // dropped exactly once, by them
                    let prev_content = mem::replace(node.content_mut(), content);
                    // Replacing, so `self.len` does not change
                    return Some(prev_content);
                },
            }
        }

        // A new node was inserted
        None
    }

    /// Removes a key from the map, returning its content if the key was
    /// previously present. Removing a missing key is a no-op.
    ///
    /// A node with at most one child is spliced out and its surviving
    /// subtree takes its place. A node with two children is replaced by the
    /// rightmost node of its left subtree; that node has no right child by
    /// definition, so its own left subtree moves up into its place.
    ///
    /// # Examples
    ///
    /// ```
    /// use treetable::{CharMap, Content};
    ///
    /// let mut map = CharMap::new();
    /// map.insert('a', Content::Integer(1));
    /// assert_eq!(map.remove('a'), Some(Content::Integer(1)));
    /// assert_eq!(map.remove('a'), None);
    /// ```
    pub fn remove(&mut self, key: char) -> Option<Content> {
        let removed = remove_node(&mut self.root, key);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Clears the map, removing all entries
    ///
    /// Afterwards the map is equal to a freshly created one.
    ///
    /// # Examples
    ///
    /// ```
    /// use treetable::{CharMap, Content};
    ///
    /// let mut map = CharMap::new();
    /// map.insert('a', Content::Integer(1));
    /// map.clear();
    /// assert!(map.is_empty());
    /// assert_eq!(map.get('a'), None);
    /// ```
    pub fn clear(&mut self) {
        // Tear the tree down one node at a time instead of letting the drop
        // glue recurse, since a degenerate tree is as deep as it is long
        let mut stack = Vec::new();
        stack.extend(self.root.take());

        while let Some(mut node) = stack.pop() {
            stack.extend(node.take_left());
            stack.extend(node.take_right());
        }

        self.len = 0;
    }

    /// Performs a pre-order traversal of the tree, recording every entry
    /// into `items` (each node before both of its subtrees)
    pub fn preorder<C: Collector>(&self, items: &mut C) {
        traverse::preorder(self.root(), items);
    }

    /// Performs an in-order traversal of the tree, recording every entry
    /// into `items` (each node between its left and right subtrees, i.e. in
    /// ascending key order)
    pub fn inorder<C: Collector>(&self, items: &mut C) {
        traverse::inorder(self.root(), items);
    }

    /// Performs a post-order traversal of the tree, recording every entry
    /// into `items` (each node after both of its subtrees)
    pub fn postorder<C: Collector>(&self, items: &mut C) {
        traverse::postorder(self.root(), items);
    }

    /// Returns the root node of the tree, or `None` if the tree is empty
    ///
    /// Note that the root can be **any** node inserted into the tree,
    /// depending on the order of insertions and removals. For a guaranteed
    /// ordering, use the traversal methods.
    ///
    /// This is a low-level API meant to be used for implementing custom
    /// traversals.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Returns the root node of the tree, or `None` if the tree is empty
    ///
    /// Note that the root can be **any** node inserted into the tree,
    /// depending on the order of insertions and removals. For a guaranteed
    /// ordering, use the traversal methods.
    ///
    /// This is a low-level API meant to be used for implementing custom
    /// traversals.
    pub fn root_mut(&mut self) -> Option<&mut Node> {
        self.root.as_deref_mut()
    }
}

impl Drop for CharMap {
    fn drop(&mut self) {
        // Same reasoning as `clear`: avoid deep recursive drops
        self.clear();
    }
}

impl Extend<(char, Content)> for CharMap {
    fn extend<T: IntoIterator<Item = (char, Content)>>(&mut self, iter: T) {
        for (key, content) in iter {
            self.insert(key, content);
        }
    }
}

impl FromIterator<(char, Content)> for CharMap {
    fn from_iter<T: IntoIterator<Item = (char, Content)>>(iter: T) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

/// Removes `key` from the subtree hanging off `link`, returning the content
/// of the removed node
fn remove_node(link: &mut Link, key: char) -> Option<Content> {
    let node = link.as_deref_mut()?;
    match key.cmp(&node.key()) {
        Ordering::Less => remove_node(node.left_link(), key),
        Ordering::Greater => remove_node(node.right_link(), key),
        Ordering::Equal => {
            let mut node = link.take()?;
            if node.has_left() && node.has_right() {
                // Both subtrees: the rightmost node of the left subtree takes
                // over this node's entry. It may have a left child of its
                // own, which `take_rightmost` promotes into its place.
                let rightmost = take_rightmost(node.left_link())?;
                let (rkey, rcontent) = rightmost.into_entry();
                let prev_content = node.replace_entry(rkey, rcontent);
                *link = Some(node);
                Some(prev_content)
            } else {
                // At most one subtree: splice it into the parent link
                let child = node.take_left().or_else(|| node.take_right());
                *link = child;
                Some(node.into_content())
            }
        },
    }
}

/// Detaches and returns the rightmost node of the subtree hanging off `link`
///
/// The detached node keeps its entry. Its left subtree (a rightmost node has
/// no right subtree) moves up into its place.
fn take_rightmost(link: &mut Link) -> Option<Box<Node>> {
    let mut node = link.take()?;
    if node.has_right() {
        let rightmost = take_rightmost(node.right_link());
        *link = Some(node);
        rightmost
    } else {
        *link = node.take_left();
        Some(node)
    }
}

/// Appends the entries of the subtree in ascending key order
fn collect_entries<'a>(node: Option<&'a Node>, out: &mut Vec<(char, &'a Content)>) {
    if let Some(node) = node {
        collect_entries(node.left(), out);
        out.push((node.key(), node.content()));
        collect_entries(node.right(), out);
    }
}
