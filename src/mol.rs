use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use crate::connector::{Connector, ConnectorIndex, Endpoint};
use crate::node::Node;

/// Stable index of a fragment inside a [`Mol`]. The root is always index 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FragmentIndex(usize);

impl FragmentIndex {
    pub const ROOT: FragmentIndex = FragmentIndex(0);

    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// Display text of a sub group: a formula such as `CH2CH3` or an
/// abbreviation such as `Boc`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SubGroupLabel {
    FormulaText(String),
    Abbr(String),
}

impl SubGroupLabel {
    pub fn text(&self) -> &str {
        match self {
            SubGroupLabel::FormulaText(s) | SubGroupLabel::Abbr(s) => s,
        }
    }
}

/// Shell of a collapsible sub group, filled by
/// [`GraphStore::marshal_sub_fragment`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubGroup {
    pub label: Option<SubGroupLabel>,
}

/// A direct child of a fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Child {
    Node(NodeIndex),
    Fragment(FragmentIndex),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    parent: Option<FragmentIndex>,
    sub_group: Option<SubGroup>,
    children: Vec<Child>,
    connectors: Vec<ConnectorIndex>,
    anchors: Vec<NodeIndex>,
}

impl Fragment {
    fn root() -> Self {
        Self {
            parent: None,
            sub_group: None,
            children: Vec::new(),
            connectors: Vec::new(),
            anchors: Vec::new(),
        }
    }

    pub fn parent(&self) -> Option<FragmentIndex> {
        self.parent
    }

    pub fn sub_group(&self) -> Option<&SubGroup> {
        self.sub_group.as_ref()
    }

    pub fn label(&self) -> Option<&SubGroupLabel> {
        self.sub_group.as_ref().and_then(|g| g.label.as_ref())
    }

    pub fn children(&self) -> &[Child] {
        &self.children
    }

    /// Connectors owned by this fragment, not including nested ones.
    pub fn connectors(&self) -> &[ConnectorIndex] {
        &self.connectors
    }

    /// Member nodes that are bonded to something outside the fragment.
    pub fn anchor_nodes(&self) -> &[NodeIndex] {
        &self.anchors
    }
}

/// The CRUD surface reconstruction writes through.
pub trait GraphStore {
    /// Drops every node, connector and sub fragment.
    fn clear(&mut self);
    fn append_node(&mut self, node: Node) -> NodeIndex;
    fn append_connector(&mut self, connector: Connector) -> ConnectorIndex;
    /// The `index`-th direct child of the root, if it is a node.
    fn node_at(&self, index: usize) -> Option<NodeIndex>;
    /// Moves `nodes` out of the root into a new sub fragment built from
    /// `shell`. Returns `None` when none of the nodes could be moved.
    fn marshal_sub_fragment(&mut self, nodes: &[NodeIndex], shell: SubGroup)
        -> Option<FragmentIndex>;
}

/// Arena-backed molecular graph with nested sub fragments.
///
/// Nodes live in a petgraph arena and keep their index for the lifetime of
/// the molecule; re-parenting only changes which fragment lists them.
/// Connectors are kept in their own list since they can have more than two
/// endpoints. Every pair of node endpoints is mirrored as a petgraph edge so
/// adjacency queries work the usual way.
#[derive(Clone)]
pub struct Mol {
    graph: UnGraph<Node, ConnectorIndex>,
    connectors: Vec<Connector>,
    fragments: Vec<Fragment>,
    node_owner: Vec<FragmentIndex>,
    connector_owner: Vec<FragmentIndex>,
}

impl Mol {
    pub fn new() -> Self {
        Self {
            graph: UnGraph::default(),
            connectors: Vec::new(),
            fragments: vec![Fragment::root()],
            node_owner: Vec::new(),
            connector_owner: Vec::new(),
        }
    }

    pub fn graph(&self) -> &UnGraph<Node, ConnectorIndex> {
        &self.graph
    }

    pub fn node(&self, idx: NodeIndex) -> &Node {
        &self.graph[idx]
    }

    pub fn node_mut(&mut self, idx: NodeIndex) -> &mut Node {
        &mut self.graph[idx]
    }

    pub fn connector(&self, idx: ConnectorIndex) -> &Connector {
        &self.connectors[idx.index()]
    }

    pub fn fragment(&self, idx: FragmentIndex) -> &Fragment {
        &self.fragments[idx.index()]
    }

    pub fn root(&self) -> &Fragment {
        &self.fragments[FragmentIndex::ROOT.index()]
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn connector_count(&self) -> usize {
        self.connectors.len()
    }

    /// Every node in the arena, in creation order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    /// Every connector in the arena, in creation order.
    pub fn connectors(&self) -> impl Iterator<Item = ConnectorIndex> + '_ {
        (0..self.connectors.len()).map(ConnectorIndex::new)
    }

    pub fn owner_of_node(&self, idx: NodeIndex) -> Option<FragmentIndex> {
        self.node_owner.get(idx.index()).copied()
    }

    pub fn owner_of_connector(&self, idx: ConnectorIndex) -> Option<FragmentIndex> {
        self.connector_owner.get(idx.index()).copied()
    }

    pub fn neighbors(&self, idx: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors(idx)
    }

    /// Connectors touching `idx`, in creation order.
    pub fn connectors_of(&self, idx: NodeIndex) -> Vec<ConnectorIndex> {
        let mut found: Vec<ConnectorIndex> = self.graph.edges(idx).map(|e| *e.weight()).collect();
        found.sort();
        found.dedup();
        found
    }

    pub fn connector_between(&self, a: NodeIndex, b: NodeIndex) -> Option<ConnectorIndex> {
        self.graph.find_edge(a, b).map(|e| self.graph[e])
    }

    /// Leaf nodes of the whole structure, depth first through sub fragments.
    pub fn leaf_nodes(&self) -> Vec<NodeIndex> {
        self.leaf_nodes_of(FragmentIndex::ROOT)
    }

    pub fn leaf_nodes_of(&self, frag: FragmentIndex) -> Vec<NodeIndex> {
        let mut out = Vec::new();
        self.collect_leaves(frag, &mut out);
        out
    }

    fn collect_leaves(&self, frag: FragmentIndex, out: &mut Vec<NodeIndex>) {
        for child in &self.fragments[frag.index()].children {
            match *child {
                Child::Node(n) => out.push(n),
                Child::Fragment(f) => self.collect_leaves(f, out),
            }
        }
    }

    /// Connectors at every nesting level: the fragment's own first, then
    /// each sub fragment's in child order.
    pub fn all_connectors(&self) -> Vec<ConnectorIndex> {
        self.all_connectors_of(FragmentIndex::ROOT)
    }

    pub fn all_connectors_of(&self, frag: FragmentIndex) -> Vec<ConnectorIndex> {
        let mut out = self.fragments[frag.index()].connectors.clone();
        for sub in self.sub_fragments_of(frag) {
            out.extend(self.all_connectors_of(sub));
        }
        out
    }

    /// Direct sub fragments of the root.
    pub fn sub_fragments(&self) -> Vec<FragmentIndex> {
        self.sub_fragments_of(FragmentIndex::ROOT)
    }

    pub fn sub_fragments_of(&self, frag: FragmentIndex) -> Vec<FragmentIndex> {
        self.fragments[frag.index()]
            .children
            .iter()
            .filter_map(|c| match *c {
                Child::Fragment(f) => Some(f),
                Child::Node(_) => None,
            })
            .collect()
    }

    /// Moves the direct children `nodes` of `parent` into a new sub fragment.
    ///
    /// Connectors whose every endpoint is moved go with the nodes; moved nodes
    /// still bonded to something outside become anchors. Connectors are never
    /// rewritten, so bonds crossing the new boundary keep both endpoints.
    pub fn marshal_sub_fragment_in(
        &mut self,
        parent: FragmentIndex,
        nodes: &[NodeIndex],
        shell: SubGroup,
    ) -> Option<FragmentIndex> {
        if parent.index() >= self.fragments.len() {
            return None;
        }
        let mut moved: Vec<NodeIndex> = Vec::with_capacity(nodes.len());
        for &n in nodes {
            if self.owner_of_node(n) == Some(parent) && !moved.contains(&n) {
                moved.push(n);
            }
        }
        if moved.is_empty() {
            return None;
        }

        let mut inner: Vec<ConnectorIndex> = Vec::new();
        let mut anchors: Vec<NodeIndex> = Vec::new();
        for &n in &moved {
            for c in self.connectors_of(n) {
                if self.connector_owner[c.index()] != parent {
                    continue;
                }
                let internal = self.connectors[c.index()]
                    .endpoints
                    .iter()
                    .all(|e| matches!(e, Endpoint::Node(m) if moved.contains(m)));
                if internal {
                    if !inner.contains(&c) {
                        inner.push(c);
                    }
                } else if !anchors.contains(&n) {
                    anchors.push(n);
                }
            }
        }
        // connector endpoints have no graph edge
        for &c in &self.fragments[parent.index()].connectors {
            let conn = &self.connectors[c.index()];
            let touches = conn.nodes().filter(|m| moved.contains(m)).collect::<Vec<_>>();
            if !touches.is_empty() && conn.endpoints.iter().any(|e| e.as_node().is_none()) {
                for m in touches {
                    if !anchors.contains(&m) {
                        anchors.push(m);
                    }
                }
            }
        }

        let idx = FragmentIndex(self.fragments.len());
        {
            let p = &mut self.fragments[parent.index()];
            p.children
                .retain(|c| !matches!(c, Child::Node(n) if moved.contains(n)));
            p.connectors.retain(|c| !inner.contains(c));
            p.children.push(Child::Fragment(idx));
        }
        for &n in &moved {
            self.node_owner[n.index()] = idx;
        }
        for &c in &inner {
            self.connector_owner[c.index()] = idx;
        }
        log::trace!(
            "marshalled {} nodes and {} connectors into fragment {}",
            moved.len(),
            inner.len(),
            idx.index()
        );
        self.fragments.push(Fragment {
            parent: Some(parent),
            sub_group: Some(shell),
            children: moved.into_iter().map(Child::Node).collect(),
            connectors: inner,
            anchors,
        });
        Some(idx)
    }
}

impl GraphStore for Mol {
    fn clear(&mut self) {
        *self = Mol::new();
    }

    fn append_node(&mut self, node: Node) -> NodeIndex {
        let idx = self.graph.add_node(node);
        self.node_owner.push(FragmentIndex::ROOT);
        self.fragments[FragmentIndex::ROOT.index()]
            .children
            .push(Child::Node(idx));
        idx
    }

    fn append_connector(&mut self, connector: Connector) -> ConnectorIndex {
        let idx = ConnectorIndex::new(self.connectors.len());
        let nodes: Vec<NodeIndex> = connector
            .nodes()
            .filter(|n| self.graph.node_weight(*n).is_some())
            .collect();
        for (i, &a) in nodes.iter().enumerate() {
            for &b in &nodes[i + 1..] {
                self.graph.add_edge(a, b, idx);
            }
        }
        self.connectors.push(connector);
        self.connector_owner.push(FragmentIndex::ROOT);
        self.fragments[FragmentIndex::ROOT.index()]
            .connectors
            .push(idx);
        idx
    }

    fn node_at(&self, index: usize) -> Option<NodeIndex> {
        match self.root().children.get(index) {
            Some(Child::Node(n)) => Some(*n),
            _ => None,
        }
    }

    fn marshal_sub_fragment(
        &mut self,
        nodes: &[NodeIndex],
        shell: SubGroup,
    ) -> Option<FragmentIndex> {
        self.marshal_sub_fragment_in(FragmentIndex::ROOT, nodes, shell)
    }
}

impl Default for Mol {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Mol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mol")
            .field("node_count", &self.node_count())
            .field("connector_count", &self.connector_count())
            .field("sub_fragments", &(self.fragments.len() - 1))
            .finish()
    }
}
