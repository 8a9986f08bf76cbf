use log::trace;
use petgraph::graph::NodeIndex;

use super::error::{MdlError, Result};
use super::records::BondRecord;
use crate::connector::{Connector, Endpoint};

/// Resolves one bond record against the nodes created for the atom records.
///
/// Both primary atoms must exist, otherwise the bond is a
/// [`MdlError::BrokenBondReference`]. Extra multi-center endpoints that do
/// not resolve are skipped. The order is taken as already decoded.
pub fn resolve_connector(
    record: &BondRecord,
    bond_index: usize,
    atoms_by_index: &[NodeIndex],
) -> Result<Connector> {
    let lookup = |atom_index: usize| {
        atoms_by_index
            .get(atom_index)
            .copied()
            .ok_or(MdlError::BrokenBondReference {
                bond_index,
                atom_index,
            })
    };
    let a = lookup(record.atom_index1)?;
    let b = lookup(record.atom_index2)?;

    let mut endpoints = vec![Endpoint::Node(a), Endpoint::Node(b)];
    if let Some(extra) = &record.end_atom_indexes {
        endpoints.extend(
            extra
                .iter()
                .filter_map(|&i| atoms_by_index.get(i).copied())
                .map(Endpoint::Node),
        );
    }
    trace!("bond {bond_index}: {} endpoints, {:?}", endpoints.len(), record.order);

    let mut connector = Connector::new(endpoints, record.order);
    connector.stereo = record.stereo;
    Ok(connector)
}
