use std::mem;

/// The payload stored in each node of a [`CharMap`](crate::CharMap)
///
/// The string payload is optional, so a text entry can exist without any
/// string allocated behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Integer(i32),
    Text(Option<String>),
}

impl Content {
    /// Returns the integer payload, or `None` if this is a text entry
    pub fn as_integer(&self) -> Option<i32> {
        match self {
            Content::Integer(value) => Some(*value),
            Content::Text(_) => None,
        }
    }

    /// Returns the string payload, or `None` if this is an integer entry or a
    /// text entry without an allocated string
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Content::Integer(_) => None,
            Content::Text(text) => text.as_deref(),
        }
    }
}

/// A single node of the binary search tree
///
/// Each node exclusively owns its content and both of its subtrees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    key: char,
    content: Content,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    pub(crate) fn new(key: char, content: Content) -> Self {
        Self {
            key,
            content,
            left: None,
            right: None,
        }
    }

    pub(crate) fn into_content(self) -> Content {
        self.content
    }

    pub(crate) fn into_entry(self) -> (char, Content) {
        (self.key, self.content)
    }

    pub fn key(&self) -> char {
        self.key
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut Content {
        &mut self.content
    }

    pub fn has_left(&self) -> bool {
        self.left.is_some()
    }

    pub fn has_right(&self) -> bool {
        self.right.is_some()
    }

    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    pub fn left_mut(&mut self) -> Option<&mut Self> {
        self.left.as_deref_mut()
    }

    pub fn right_mut(&mut self) -> Option<&mut Self> {
        self.right.as_deref_mut()
    }

    /// The incoming link of the left subtree, for structural rewiring
    pub(crate) fn left_link(&mut self) -> &mut Option<Box<Node>> {
        &mut self.left
    }

    /// The incoming link of the right subtree, for structural rewiring
    pub(crate) fn right_link(&mut self) -> &mut Option<Box<Node>> {
        &mut self.right
    }

    pub(crate) fn take_left(&mut self) -> Option<Box<Node>> {
        self.left.take()
    }

    pub(crate) fn take_right(&mut self) -> Option<Box<Node>> {
        self.right.take()
    }

    /// New node MUST maintain BST property
    pub(crate) fn set_left(&mut self, new_node: Self) {
        debug_assert!(self.left.is_none());
        self.left = Some(Box::new(new_node));
    }

    /// New node MUST maintain BST property
    pub(crate) fn set_right(&mut self, new_node: Self) {
        debug_assert!(self.right.is_none());
        self.right = Some(Box::new(new_node));
    }

    /// Moves a new entry into this node, returning the previous content
    ///
    /// New key MUST maintain BST property
    pub(crate) fn replace_entry(&mut self, key: char, content: Content) -> Content {
        self.key = key;
        mem::replace(&mut self.content, content)
    }
}
