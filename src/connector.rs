use petgraph::graph::NodeIndex;
use serde::{Deserialize, Serialize};

use crate::bond::BondOrder;

/// Stable index of a connector inside a [`Mol`](crate::Mol).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ConnectorIndex(usize);

impl ConnectorIndex {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// One end of a connector: a node, or (bond-to-bond) another connector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Node(NodeIndex),
    Connector(ConnectorIndex),
}

impl Endpoint {
    pub fn as_node(self) -> Option<NodeIndex> {
        match self {
            Endpoint::Node(n) => Some(n),
            Endpoint::Connector(_) => None,
        }
    }
}

impl From<NodeIndex> for Endpoint {
    fn from(n: NodeIndex) -> Self {
        Endpoint::Node(n)
    }
}

/// A graph connector with two or more ordered endpoints.
///
/// Two endpoints is an ordinary bond; more than two is a multi-center bond
/// as written by V3000 files.
#[derive(Debug, Clone, PartialEq)]
pub struct Connector {
    pub endpoints: Vec<Endpoint>,
    pub order: BondOrder,
    pub stereo: Option<i32>,
}

impl Connector {
    pub fn new(endpoints: Vec<Endpoint>, order: BondOrder) -> Self {
        Self {
            endpoints,
            order,
            stereo: None,
        }
    }

    pub fn bond(a: NodeIndex, b: NodeIndex, order: BondOrder) -> Self {
        Self::new(vec![Endpoint::Node(a), Endpoint::Node(b)], order)
    }

    /// Node endpoints in connection order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.endpoints.iter().filter_map(|e| e.as_node())
    }

    pub fn connects(&self, node: NodeIndex) -> bool {
        self.endpoints.contains(&Endpoint::Node(node))
    }
}

impl crate::traits::HasBondOrder for Connector {
    fn bond_order(&self) -> BondOrder {
        self.order
    }
}
