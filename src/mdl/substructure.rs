use log::debug;
use petgraph::graph::NodeIndex;

use super::records::SubstructureRecord;
use super::SGROUP_SUPERATOM;
use crate::mol::{FragmentIndex, GraphStore, SubGroup, SubGroupLabel};

/// Picks formula text or abbreviation for a superatom label.
///
/// A label of two or more characters carrying a digit reads as a formula
/// (`CH2CH3`, `4-Cl`), anything else as an abbreviation (`Boc`, `Ph`).
pub fn classify_label(label: &str) -> SubGroupLabel {
    let is_formula = label.chars().count() >= 2 && label.chars().any(|c| c.is_ascii_digit());
    if is_formula {
        SubGroupLabel::FormulaText(label.to_string())
    } else {
        SubGroupLabel::Abbr(label.to_string())
    }
}

/// Moves the atoms of every superatom record into a sub group of `store`.
///
/// Runs after every atom and bond exists. All atom indexes are resolved
/// before any atom moves, so record order never changes which atoms a
/// record names. Other group types are skipped, as are records whose atoms
/// all fail to resolve.
pub fn promote_substructures<S>(
    records: &[SubstructureRecord],
    atoms_by_index: &[NodeIndex],
    store: &mut S,
) -> Vec<FragmentIndex>
where
    S: GraphStore + ?Sized,
{
    let mut pending: Vec<(Vec<NodeIndex>, &SubstructureRecord)> = Vec::new();
    for record in records {
        if record.sg_type != SGROUP_SUPERATOM {
            debug!("ignoring substructure of type {:?}", record.sg_type);
            continue;
        }
        let nodes: Vec<NodeIndex> = record
            .atom_indexes
            .iter()
            .filter_map(|&i| atoms_by_index.get(i).copied())
            .collect();
        if !nodes.is_empty() {
            pending.push((nodes, record));
        }
    }

    let mut created = Vec::with_capacity(pending.len());
    for (nodes, record) in pending {
        let shell = SubGroup {
            label: Some(classify_label(&record.label)),
        };
        match store.marshal_sub_fragment(&nodes, shell) {
            Some(frag) => created.push(frag),
            None => debug!("superatom {:?} has no atoms left to move", record.label),
        }
    }
    created
}
