//! A stand-in host editor for the demo application.
//!
//! Real deployments plug the dialogs into an existing rich-text engine. This
//! fixture only keeps a flat list of nodes and a selection over them, which
//! is enough to drive the toolbar actions and see their effects.

use scribe_core::{ApplyLink, DocumentNode, InsertTable, Point, SelectionModel, TableDimensions};

/// Identity of a node in the sample document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Character content
    Text(String),
    /// Structural node, named by its tag
    Element(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SampleNode {
    pub id: NodeId,
    pub kind: NodeKind,
    pub link: Option<String>,
}

impl SampleNode {
    /// Short description for display.
    pub fn label(&self) -> String {
        match &self.kind {
            NodeKind::Text(content) => format!("\"{}\"", content),
            NodeKind::Element(tag) => format!("<{}>", tag),
        }
    }

    fn len(&self) -> usize {
        match &self.kind {
            NodeKind::Text(content) => content.chars().count(),
            NodeKind::Element(_) => 0,
        }
    }
}

impl DocumentNode for &SampleNode {
    type Key = NodeId;

    fn key(&self) -> NodeId {
        self.id
    }

    fn is_text(&self) -> bool {
        matches!(self.kind, NodeKind::Text(_))
    }
}

/// Flat node list with an anchor/focus selection and an activity log.
#[derive(Debug, Clone)]
pub struct SampleDocument {
    nodes: Vec<SampleNode>,
    next_id: usize,
    anchor: Point<NodeId>,
    focus: Point<NodeId>,
    activity: Vec<String>,
}

impl SampleDocument {
    pub fn new() -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            next_id: 0,
            anchor: Point::new(NodeId(0), 0),
            focus: Point::new(NodeId(0), 0),
            activity: Vec::new(),
        };
        doc.push(NodeKind::Element("paragraph".to_string()));
        doc.push(NodeKind::Text("Hello, ".to_string()));
        doc.push(NodeKind::Text("rich text".to_string()));
        doc.push(NodeKind::Element("image".to_string()));
        doc.push(NodeKind::Text("Closing line".to_string()));
        doc.select(NodeId(1));
        doc
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.push(SampleNode {
            id,
            kind,
            link: None,
        });
        id
    }

    pub fn nodes(&self) -> &[SampleNode] {
        &self.nodes
    }

    pub fn node(&self, id: NodeId) -> Option<&SampleNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn activity(&self) -> &[String] {
        &self.activity
    }

    /// Collapses the selection onto the start of `id`.
    pub fn select(&mut self, id: NodeId) {
        if self.node(id).is_none() {
            return;
        }
        self.anchor = Point::new(id, 0);
        self.focus = Point::new(id, 0);
    }

    /// Moves the focus to `id`, keeping the anchor.
    ///
    /// The focus lands at the end of the node when extending forward and at
    /// its start when extending backward.
    pub fn extend_to(&mut self, id: NodeId) {
        let (Some(target), Some(anchor)) = (self.position(id), self.position(self.anchor.node)) else {
            return;
        };
        let offset = if target >= anchor {
            self.nodes[target].len()
        } else {
            0
        };
        self.focus = Point::new(id, offset);
    }

    /// True if `id` lies between the anchor and focus, inclusive.
    pub fn is_selected(&self, id: NodeId) -> bool {
        let (Some(a), Some(f), Some(n)) = (
            self.position(self.anchor.node),
            self.position(self.focus.node),
            self.position(id),
        ) else {
            return false;
        };
        a.min(f) <= n && n <= a.max(f)
    }

    /// The current selection, readable by the plugin layer.
    pub fn selection(&self) -> SampleSelection<'_> {
        SampleSelection { doc: self }
    }

    fn position(&self, id: NodeId) -> Option<usize> {
        self.nodes.iter().position(|n| n.id == id)
    }

    fn resolve(&self, point: Point<NodeId>) -> Point<&SampleNode> {
        // Selection endpoints always name nodes that exist: nodes are never
        // removed and `select`/`extend_to` ignore unknown ids.
        let node = self
            .node(point.node)
            .expect("selection endpoints name existing nodes");
        Point::new(node, point.offset)
    }
}

impl Default for SampleDocument {
    fn default() -> Self {
        Self::new()
    }
}

/// Borrowed view of a [`SampleDocument`]'s selection.
pub struct SampleSelection<'a> {
    doc: &'a SampleDocument,
}

impl<'a> SelectionModel for SampleSelection<'a> {
    type Node = &'a SampleNode;

    fn anchor(&self) -> Point<&'a SampleNode> {
        self.doc.resolve(self.doc.anchor)
    }

    fn focus(&self) -> Point<&'a SampleNode> {
        self.doc.resolve(self.doc.focus)
    }

    fn is_backward(&self) -> bool {
        let anchor = self.doc.position(self.doc.anchor.node);
        let focus = self.doc.position(self.doc.focus.node);
        match focus.cmp(&anchor) {
            std::cmp::Ordering::Less => true,
            std::cmp::Ordering::Equal => self.doc.focus.offset < self.doc.anchor.offset,
            std::cmp::Ordering::Greater => false,
        }
    }
}

impl InsertTable for SampleDocument {
    fn insert_table(&mut self, dimensions: TableDimensions) {
        let at = self.position(self.focus.node).map_or(self.nodes.len(), |p| p + 1);
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(
            at,
            SampleNode {
                id,
                kind: NodeKind::Element(format!("table {}", dimensions)),
                link: None,
            },
        );
        tracing::info!(%dimensions, "Inserted table");
        self.activity.push(format!("Inserted {} table", dimensions));
    }
}

impl ApplyLink for SampleDocument {
    type Key = NodeId;

    fn apply_link(&mut self, target: NodeId, url: &str) {
        let Some(node) = self.nodes.iter_mut().find(|n| n.id == target) else {
            tracing::warn!(?target, "Link target no longer exists");
            return;
        };
        node.link = Some(url.to_string());
        let label = node.label();
        tracing::info!(url, "Applied link");
        self.activity.push(format!("Linked {} to {}", label, url));
    }
}
