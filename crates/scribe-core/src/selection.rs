//! Resolving an editor selection to the node an action should target.
//!
//! ## Learning: Associated Types
//!
//! The host editor owns its document tree. Rather than copying it into our
//! own types, [`SelectionModel`] names the host's node type through an
//! associated type, so `selected_node` returns exactly what the host gave us.

/// A node handle supplied by the host document model.
pub trait DocumentNode {
    /// Identity of the node within the document.
    type Key: Eq;

    /// Returns the node's identity.
    fn key(&self) -> Self::Key;

    /// Returns true if the node carries character content.
    fn is_text(&self) -> bool;
}

/// One endpoint of a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point<N> {
    /// Node the point lives in
    pub node: N,
    /// Offset inside the node
    pub offset: usize,
}

impl<N> Point<N> {
    pub fn new(node: N, offset: usize) -> Self {
        Self { node, offset }
    }
}

/// Read-only view of the host editor's current selection.
pub trait SelectionModel {
    type Node: DocumentNode;

    /// Where the selection started.
    fn anchor(&self) -> Point<Self::Node>;

    /// Where the selection currently ends.
    fn focus(&self) -> Point<Self::Node>;

    /// True when the focus precedes the anchor in document order.
    fn is_backward(&self) -> bool;
}

/// Returns the node that represents what the user is acting on.
///
/// A selection inside a single node resolves to that node. A selection
/// spanning two nodes prefers the text endpoint in the direction the user
/// is pointing: the focus for backward selections, the anchor for forward
/// ones. When the preferred endpoint is not text the other endpoint is
/// returned, whatever its kind, so callers must handle non-text results.
pub fn selected_node<S: SelectionModel>(selection: &S) -> S::Node {
    let anchor_node = selection.anchor().node;
    let focus_node = selection.focus().node;

    if anchor_node.key() == focus_node.key() {
        return anchor_node;
    }

    let backward = selection.is_backward();
    let node = if backward {
        if focus_node.is_text() { focus_node } else { anchor_node }
    } else if anchor_node.is_text() {
        anchor_node
    } else {
        focus_node
    };

    tracing::trace!(
        backward,
        text = node.is_text(),
        "resolved selection across two nodes"
    );
    node
}
