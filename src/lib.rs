pub mod bond;
pub mod connector;
pub mod element;
pub mod isotope;
pub mod lookup;
pub mod mdl;
pub mod mol;
pub mod node;
pub mod traits;

pub use bond::BondOrder;
pub use connector::{Connector, ConnectorIndex, Endpoint};
pub use element::{ElementInfo, ElementKey, ElementLookup, ElementSeries};
pub use isotope::{IsotopeInfo, IsotopeLookup};
pub use lookup::{ChemLookup, PeriodicTable};
pub use mdl::{CoordMode, MdlError, MdlOptions, MdlVersion};
pub use mol::{Child, Fragment, FragmentIndex, GraphStore, Mol, SubGroup, SubGroupLabel};
pub use node::{Node, NodeKind, PseudoatomKind};
pub use petgraph::graph::NodeIndex;
pub use traits::{
    HasAtomicNum, HasBondOrder, HasFormalCharge, HasHydrogenCount, HasIsotope, HasParity,
    HasPosition2D, HasPosition3D,
};

#[cfg(test)]
mod tests;
