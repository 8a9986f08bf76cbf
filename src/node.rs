use serde::{Deserialize, Serialize};

use crate::element;

/// Kind of placeholder a pseudo atom stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PseudoatomKind {
    /// A point with no chemical meaning.
    Dummy,
    /// Any atom (`A` or `*` in MDL files).
    Any,
    /// Any atom other than carbon or hydrogen (`Q`).
    Hetero,
}

/// The closed set of node variants a connection table can hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeKind {
    /// A concrete element, optionally a specific isotope.
    Atom {
        atomic_num: u8,
        mass_number: Option<u16>,
    },
    /// An atom list: any one of the allowed ids, or anything but the
    /// disallowed ones. Both empty is a bare list marker.
    VariableAtom {
        allowed_isotope_ids: Vec<String>,
        disallowed_isotope_ids: Vec<String>,
    },
    /// R-group placeholder.
    RGroup,
    Pseudoatom(PseudoatomKind),
}

/// A node of the molecular graph.
///
/// A node carries at most one coordinate space. Which one is decided once per
/// fragment by whoever builds the node, never per atom.
///
/// # Examples
///
/// ```
/// use mdlcrab::{Node, NodeKind};
///
/// let carbon = Node::new(NodeKind::Atom { atomic_num: 6, mass_number: None });
/// assert_eq!(carbon.symbol(), Some("C"));
/// assert!(carbon.supports_explicit_hydrogen_count());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub kind: NodeKind,
    pub charge: i32,
    pub radical: i32,
    pub parity: Option<i32>,
    pub explicit_hydrogen_count: Option<u32>,
    coord_2d: Option<[f64; 2]>,
    coord_3d: Option<[f64; 3]>,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            charge: 0,
            radical: 0,
            parity: None,
            explicit_hydrogen_count: None,
            coord_2d: None,
            coord_3d: None,
        }
    }

    pub fn atom(atomic_num: u8, mass_number: Option<u16>) -> Self {
        Self::new(NodeKind::Atom {
            atomic_num,
            mass_number,
        })
    }

    pub fn pseudoatom(kind: PseudoatomKind) -> Self {
        Self::new(NodeKind::Pseudoatom(kind))
    }

    /// Element symbol for concrete atoms.
    pub fn symbol(&self) -> Option<&'static str> {
        match self.kind {
            NodeKind::Atom { atomic_num, .. } => element::symbol_of(atomic_num),
            _ => None,
        }
    }

    pub fn is_variable_atom(&self) -> bool {
        matches!(self.kind, NodeKind::VariableAtom { .. })
    }

    /// Every node variant carries a parity slot.
    pub fn supports_parity(&self) -> bool {
        true
    }

    /// R-groups stand for whole substituents and take no hydrogen count.
    pub fn supports_explicit_hydrogen_count(&self) -> bool {
        !matches!(self.kind, NodeKind::RGroup)
    }

    /// Sets the 2D coordinate and drops any 3D one.
    pub fn set_coord_2d(&mut self, x: f64, y: f64) {
        self.coord_2d = Some([x, y]);
        self.coord_3d = None;
    }

    /// Sets the 3D coordinate and drops any 2D one.
    pub fn set_coord_3d(&mut self, x: f64, y: f64, z: f64) {
        self.coord_3d = Some([x, y, z]);
        self.coord_2d = None;
    }
}

impl crate::traits::HasAtomicNum for Node {
    fn atomic_num(&self) -> Option<u8> {
        match self.kind {
            NodeKind::Atom { atomic_num, .. } => Some(atomic_num),
            _ => None,
        }
    }
}

impl crate::traits::HasFormalCharge for Node {
    fn formal_charge(&self) -> i32 {
        self.charge
    }
}

impl crate::traits::HasIsotope for Node {
    fn mass_number(&self) -> Option<u16> {
        match self.kind {
            NodeKind::Atom { mass_number, .. } => mass_number,
            _ => None,
        }
    }
}

impl crate::traits::HasHydrogenCount for Node {
    fn explicit_hydrogen_count(&self) -> Option<u32> {
        self.explicit_hydrogen_count
    }
}

impl crate::traits::HasParity for Node {
    fn parity(&self) -> Option<i32> {
        self.parity
    }
}

impl crate::traits::HasPosition2D for Node {
    fn position_2d(&self) -> Option<[f64; 2]> {
        self.coord_2d
    }
    fn set_position_2d(&mut self, pos: Option<[f64; 2]>) {
        self.coord_2d = pos;
        if pos.is_some() {
            self.coord_3d = None;
        }
    }
}

impl crate::traits::HasPosition3D for Node {
    fn position_3d(&self) -> Option<[f64; 3]> {
        self.coord_3d
    }
    fn set_position_3d(&mut self, pos: Option<[f64; 3]>) {
        self.coord_3d = pos;
        if pos.is_some() {
            self.coord_2d = None;
        }
    }
}
