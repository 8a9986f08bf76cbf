//! Writer-side view of a molecule.

use log::debug;
use petgraph::graph::NodeIndex;

use super::{
    CoordMode, SYMBOL_ANYATOM, SYMBOL_ATOMLIST, SYMBOL_DUMMYATOM, SYMBOL_HETEROATOM,
    SYMBOL_RGROUP,
};
use crate::connector::{Connector, ConnectorIndex, Endpoint};
use crate::isotope;
use crate::mol::{FragmentIndex, Mol};
use crate::node::{Node, NodeKind, PseudoatomKind};
use crate::traits::{HasPosition2D, HasPosition3D};

/// Snapshot of what a CTab writer walks. Recomputed per export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuralInfo {
    /// Leaf nodes, depth first through sub groups.
    pub atoms: Vec<NodeIndex>,
    /// Connectors at every nesting level.
    pub bonds: Vec<ConnectorIndex>,
    /// Direct sub groups of the root.
    pub sub_groups: Vec<FragmentIndex>,
    pub coord_mode: CoordMode,
}

pub fn extract(mol: &Mol) -> StructuralInfo {
    let atoms = mol.leaf_nodes();
    let coord_mode = coord_mode_of(mol, &atoms);
    StructuralInfo {
        atoms,
        bonds: mol.all_connectors(),
        sub_groups: mol.sub_fragments(),
        coord_mode,
    }
}

/// 2D when more of `atoms` carry a 2D coordinate than a 3D one, otherwise
/// 3D. Ties, including no coordinates at all, go to 3D.
pub fn coord_mode_of(mol: &Mol, atoms: &[NodeIndex]) -> CoordMode {
    let (count_2d, count_3d) = atoms.iter().fold((0usize, 0usize), |(c2, c3), &n| {
        let node = mol.node(n);
        (
            c2 + usize::from(node.has_coord_2d()),
            c3 + usize::from(node.has_coord_3d()),
        )
    });
    if count_2d > count_3d {
        CoordMode::TwoD
    } else {
        CoordMode::ThreeD
    }
}

/// Node endpoints of a connector, split into the two a V2000 bond line holds
/// and the rest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitNodes {
    pub primary_nodes: Vec<NodeIndex>,
    /// Endpoints beyond the first two; `None` for ordinary bonds.
    pub remain_nodes: Option<Vec<NodeIndex>>,
}

/// Splits the node endpoints of `connector`. Connector endpoints cannot be
/// written to a Molfile and are dropped.
pub fn split_connected_nodes(connector: &Connector) -> SplitNodes {
    let mut split = SplitNodes::default();
    for endpoint in &connector.endpoints {
        match *endpoint {
            Endpoint::Node(n) if split.primary_nodes.len() < 2 => split.primary_nodes.push(n),
            Endpoint::Node(n) => split.remain_nodes.get_or_insert_with(Vec::new).push(n),
            Endpoint::Connector(c) => {
                debug!("dropping connector endpoint {} of a bond", c.index());
            }
        }
    }
    split
}

pub fn is_node_variable_atom(node: &Node) -> bool {
    node.is_variable_atom()
}

/// MDL atom type field for `node`.
///
/// Atom lists are `L` in V2000. In V3000 they are written as `[N,O]` or
/// `NOT[N,O]`, or `L` when the list is empty.
pub fn atom_type_string(node: &Node, is_v2000: bool) -> String {
    match &node.kind {
        NodeKind::Atom { .. } => node.symbol().unwrap_or("?").to_string(),
        NodeKind::Pseudoatom(PseudoatomKind::Any) => SYMBOL_ANYATOM.to_string(),
        NodeKind::Pseudoatom(PseudoatomKind::Hetero) => SYMBOL_HETEROATOM.to_string(),
        NodeKind::Pseudoatom(PseudoatomKind::Dummy) => SYMBOL_DUMMYATOM.to_string(),
        NodeKind::RGroup => SYMBOL_RGROUP.to_string(),
        NodeKind::VariableAtom { .. } if is_v2000 => SYMBOL_ATOMLIST.to_string(),
        NodeKind::VariableAtom {
            allowed_isotope_ids,
            disallowed_isotope_ids,
        } => {
            let (prefix, ids) = if allowed_isotope_ids.is_empty() {
                ("NOT[", disallowed_isotope_ids)
            } else {
                ("[", allowed_isotope_ids)
            };
            if ids.is_empty() {
                return SYMBOL_ATOMLIST.to_string();
            }
            let symbols: Vec<&str> = ids
                .iter()
                .filter_map(|id| isotope::isotope_id_symbol(id))
                .collect();
            format!("{prefix}{}]", symbols.join(","))
        }
    }
}
