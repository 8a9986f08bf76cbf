use log::{debug, warn};
use petgraph::graph::NodeIndex;

use super::connector_resolver::resolve_connector;
use super::error::{MdlError, Result};
use super::node_resolver::resolve_node;
use super::records::CtabInfo;
use super::substructure::promote_substructures;
use super::CoordMode;
use crate::lookup::ChemLookup;
use crate::mol::{FragmentIndex, GraphStore};

/// Outcome of [`fill_fragment`] beyond the graph itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FillReport {
    /// One [`MdlError::BrokenBondReference`] per dropped bond record.
    pub broken_bonds: Vec<MdlError>,
    /// Sub groups created from superatom records, in record order.
    pub sub_groups: Vec<FragmentIndex>,
}

impl FillReport {
    pub fn is_clean(&self) -> bool {
        self.broken_bonds.is_empty()
    }
}

/// Rebuilds `store` from one tokenized connection table.
///
/// The store is cleared first. Atoms are created, then bonds, then
/// superatom groups. A forced `coord_mode` other than
/// [`CoordMode::Unknown`] overrides `ctab.is_coord_3d`. Bonds naming missing
/// atoms are dropped and reported; only a node that cannot be built at all
/// fails the whole pass.
pub fn fill_fragment<S, L>(
    store: &mut S,
    ctab: &CtabInfo,
    coord_mode: CoordMode,
    lookup: &L,
) -> Result<FillReport>
where
    S: GraphStore + ?Sized,
    L: ChemLookup + ?Sized,
{
    store.clear();
    let is_coord_3d = match coord_mode {
        CoordMode::Unknown => ctab.is_coord_3d,
        forced => {
            debug!("coordinate mode forced to {forced:?}");
            forced == CoordMode::ThreeD
        }
    };

    for (i, record) in ctab.atom_infos.iter().enumerate() {
        let node = resolve_node(record, i, is_coord_3d, lookup)?;
        store.append_node(node);
    }
    let atoms_by_index: Vec<NodeIndex> = (0..ctab.atom_infos.len())
        .map(|i| store.node_at(i).ok_or(MdlError::NodeUnconstructible { atom_index: i }))
        .collect::<Result<_>>()?;

    let mut report = FillReport::default();
    for (i, record) in ctab.bond_infos.iter().enumerate() {
        match resolve_connector(record, i, &atoms_by_index) {
            Ok(connector) => {
                store.append_connector(connector);
            }
            Err(err) => {
                warn!("dropping bond record: {err}");
                report.broken_bonds.push(err);
            }
        }
    }

    report.sub_groups = promote_substructures(&ctab.sg_infos, &atoms_by_index, store);
    Ok(report)
}
