//! The effective tree value produced by resolution.

use std::collections::BTreeMap;

/// Marker text used by renderers for a circular terminal node.
pub const CIRCULAR_MARKER: &str = "[Circular]";

/// One node of the effective tree.
///
/// A dependency either expands into its own resolved children, or closes a
/// cycle back to an ancestor already on the active resolution path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Resolved children, keyed by `name@version` identity.
    Branch(BTreeMap<String, Node>),
    /// Expanding this dependency again would repeat an ancestor.
    Circular,
}

impl Node {
    /// An empty branch (a package with no resolvable dependencies).
    pub fn empty() -> Self {
        Node::Branch(BTreeMap::new())
    }

    pub fn is_circular(&self) -> bool {
        matches!(self, Node::Circular)
    }

    /// The children of a branch node, `None` for a circular marker.
    pub fn children(&self) -> Option<&BTreeMap<String, Node>> {
        match self {
            Node::Branch(children) => Some(children),
            Node::Circular => None,
        }
    }

    /// Whether any descendant (or this node itself) is a circular marker.
    pub fn contains_circular(&self) -> bool {
        match self {
            Node::Circular => true,
            Node::Branch(children) => children.values().any(Node::contains_circular),
        }
    }
}

/// The effective tree of one root manifest: the root's identity plus its
/// resolved dependency subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveTree {
    /// `name@version` of the root package.
    pub id: String,
    pub root: Node,
}
