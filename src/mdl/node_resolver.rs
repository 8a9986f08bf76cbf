use log::{debug, trace};

use super::error::{MdlError, Result};
use super::records::AtomRecord;
use super::utils;
use crate::element::ElementKey;
use crate::isotope::IsotopeLookup;
use crate::lookup::ChemLookup;
use crate::node::{Node, NodeKind, PseudoatomKind};

/// Resolves one atom record into a graph node.
///
/// The variant is picked by the first rule that applies: atom list, R-group,
/// hetero pseudo atom, any-atom pseudo atom, element, isotope alias, and
/// finally any-atom for symbols nobody recognises. Charge, radical, parity
/// and hydrogen count are copied when present, and the coordinate goes into
/// the 3D slot when `is_coord_3d` is set, otherwise the 2D one.
pub fn resolve_node<L>(
    record: &AtomRecord,
    atom_index: usize,
    is_coord_3d: bool,
    lookup: &L,
) -> Result<Node>
where
    L: ChemLookup + ?Sized,
{
    let kind = variable_atom(record)
        .or_else(|| pseudo_symbol(&record.symbol))
        .or_else(|| element_atom(record, lookup))
        .or_else(|| alias_atom(&record.symbol, lookup))
        .or(Some(NodeKind::Pseudoatom(PseudoatomKind::Any)))
        .ok_or(MdlError::NodeUnconstructible { atom_index })?;
    trace!("atom {atom_index} {:?} -> {kind:?}", record.symbol);

    let mut node = Node::new(kind);
    if let Some(charge) = record.charge {
        node.charge = charge;
    }
    if let Some(radical) = record.radical {
        node.radical = utils::radical_from_mdl(radical);
    }
    if node.supports_parity() {
        if let Some(parity) = record.parity {
            node.parity = Some(parity);
        }
    }
    if node.supports_explicit_hydrogen_count() {
        if let Some(count) = record.hydrogen_count {
            node.explicit_hydrogen_count = Some(count);
        }
    }
    if is_coord_3d {
        node.set_coord_3d(record.x, record.y, record.z.unwrap_or(0.0));
    } else {
        node.set_coord_2d(record.x, record.y);
    }
    Ok(node)
}

fn variable_atom(record: &AtomRecord) -> Option<NodeKind> {
    if record.atom_list_info.is_none() && !utils::is_atom_list_symbol(&record.symbol) {
        return None;
    }
    let mut allowed = Vec::new();
    let mut disallowed = Vec::new();
    if let Some(list) = &record.atom_list_info {
        if list.is_allow_list {
            allowed = list.symbols.clone();
        } else {
            disallowed = list.symbols.clone();
        }
    }
    Some(NodeKind::VariableAtom {
        allowed_isotope_ids: allowed,
        disallowed_isotope_ids: disallowed,
    })
}

fn pseudo_symbol(symbol: &str) -> Option<NodeKind> {
    if utils::is_rgroup_symbol(symbol) {
        Some(NodeKind::RGroup)
    } else if utils::is_hetero_atom_symbol(symbol) {
        Some(NodeKind::Pseudoatom(PseudoatomKind::Hetero))
    } else if utils::is_unspecified_atom_symbol(symbol) {
        Some(NodeKind::Pseudoatom(PseudoatomKind::Any))
    } else {
        None
    }
}

fn element_atom<L>(record: &AtomRecord, lookup: &L) -> Option<NodeKind>
where
    L: ChemLookup + ?Sized,
{
    let info = lookup.element_info(ElementKey::Symbol(&record.symbol))?;
    let mass_number = match record.mass_number.filter(|&m| m != 0) {
        Some(m) => Some(m),
        None => record
            .mass_diff
            .filter(|&d| d != 0)
            .and_then(|d| search_isotope(info.atomic_number, info.natural_mass + f64::from(d), lookup)),
    };
    Some(NodeKind::Atom {
        atomic_num: info.atomic_number,
        mass_number,
    })
}

/// Probes the rounded mass, then the floor, then the ceiling, and returns
/// the first mass number with an isotope entry.
fn search_isotope<L>(atomic_number: u8, mass: f64, lookup: &L) -> Option<u16>
where
    L: IsotopeLookup + ?Sized,
{
    let mut tried: Vec<u16> = Vec::with_capacity(3);
    for candidate in [js_round(mass), mass.floor(), mass.ceil()] {
        let Some(m) = mass_number_of(candidate) else {
            continue;
        };
        if tried.contains(&m) {
            continue;
        }
        tried.push(m);
        if let Some(iso) = lookup.isotope_info(ElementKey::AtomicNumber(atomic_number), Some(m)) {
            return Some(iso.mass_number);
        }
    }
    debug!("no isotope of element {atomic_number} near mass {mass}, tried {tried:?}");
    None
}

fn alias_atom<L>(symbol: &str, lookup: &L) -> Option<NodeKind>
where
    L: IsotopeLookup + ?Sized,
{
    let iso = lookup.isotope_info(ElementKey::Symbol(symbol), None)?;
    Some(NodeKind::Atom {
        atomic_num: iso.atomic_number,
        mass_number: Some(iso.mass_number),
    })
}

/// Half-up rounding, so 12.5 rounds to 13 and -0.5 to 0.
fn js_round(v: f64) -> f64 {
    (v + 0.5).floor()
}

fn mass_number_of(v: f64) -> Option<u16> {
    if v.is_finite() && v >= 1.0 && v <= f64::from(u16::MAX) {
        Some(v as u16)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::element::{ElementInfo, ElementLookup, ElementSeries};
    use crate::isotope::IsotopeInfo;
    use crate::lookup::PeriodicTable;
    use crate::mdl::records::AtomListInfo;
    use crate::traits::*;

    /// One-element table ("C") with a configurable natural mass and isotope
    /// list that records every isotope probe.
    struct ProbeTable {
        natural_mass: f64,
        known: Vec<u16>,
        probes: RefCell<Vec<u16>>,
    }

    impl ProbeTable {
        fn new(natural_mass: f64, known: &[u16]) -> Self {
            Self {
                natural_mass,
                known: known.to_vec(),
                probes: RefCell::new(Vec::new()),
            }
        }
    }

    impl ElementLookup for ProbeTable {
        fn element_info(&self, key: ElementKey<'_>) -> Option<ElementInfo> {
            match key {
                ElementKey::Symbol("C") | ElementKey::AtomicNumber(6) => Some(ElementInfo {
                    symbol: "C",
                    atomic_number: 6,
                    natural_mass: self.natural_mass,
                    group: Some(14),
                    period: 2,
                    series: ElementSeries::MainGroup,
                }),
                _ => None,
            }
        }
    }

    impl IsotopeLookup for ProbeTable {
        fn isotope_info(&self, _key: ElementKey<'_>, mass_number: Option<u16>) -> Option<IsotopeInfo> {
            let m = mass_number?;
            self.probes.borrow_mut().push(m);
            self.known.contains(&m).then(|| IsotopeInfo {
                atomic_number: 6,
                mass_number: m,
                exact_mass: f64::from(m),
                natural_abundance: 0.0,
                isotope_alias: None,
            })
        }
    }

    fn with_diff(diff: i32) -> AtomRecord {
        AtomRecord {
            mass_diff: Some(diff),
            ..AtomRecord::new("C", 0.0, 0.0)
        }
    }

    fn kind_of(symbol: &str) -> NodeKind {
        resolve_node(&AtomRecord::new(symbol, 0.0, 0.0), 0, false, &PeriodicTable)
            .unwrap()
            .kind
    }

    #[test]
    fn variant_priority() {
        assert_eq!(
            kind_of("L"),
            NodeKind::VariableAtom {
                allowed_isotope_ids: vec![],
                disallowed_isotope_ids: vec![],
            }
        );
        assert_eq!(kind_of("R"), NodeKind::RGroup);
        assert_eq!(kind_of("R#"), NodeKind::RGroup);
        assert_eq!(kind_of("Q"), NodeKind::Pseudoatom(PseudoatomKind::Hetero));
        assert_eq!(kind_of("A"), NodeKind::Pseudoatom(PseudoatomKind::Any));
        assert_eq!(kind_of("*"), NodeKind::Pseudoatom(PseudoatomKind::Any));
        assert_eq!(
            kind_of("N"),
            NodeKind::Atom {
                atomic_num: 7,
                mass_number: None
            }
        );
        assert_eq!(
            kind_of("D"),
            NodeKind::Atom {
                atomic_num: 1,
                mass_number: Some(2)
            }
        );
        assert_eq!(kind_of("Xx"), NodeKind::Pseudoatom(PseudoatomKind::Any));
        assert_eq!(kind_of(""), NodeKind::Pseudoatom(PseudoatomKind::Any));
    }

    #[test]
    fn atom_list_info_wins_over_symbol() {
        let mut rec = AtomRecord::new("C", 0.0, 0.0);
        rec.atom_list_info = Some(AtomListInfo {
            symbols: vec!["N".into(), "O".into()],
            is_allow_list: false,
        });
        let node = resolve_node(&rec, 0, false, &PeriodicTable).unwrap();
        assert_eq!(
            node.kind,
            NodeKind::VariableAtom {
                allowed_isotope_ids: vec![],
                disallowed_isotope_ids: vec!["N".into(), "O".into()],
            }
        );

        rec.atom_list_info.as_mut().unwrap().is_allow_list = true;
        let node = resolve_node(&rec, 0, false, &PeriodicTable).unwrap();
        assert_eq!(
            node.kind,
            NodeKind::VariableAtom {
                allowed_isotope_ids: vec!["N".into(), "O".into()],
                disallowed_isotope_ids: vec![],
            }
        );
    }

    #[test]
    fn explicit_mass_number_is_used_verbatim() {
        let mut rec = AtomRecord::new("C", 0.0, 0.0);
        rec.mass_number = Some(13);
        rec.mass_diff = Some(5);
        assert_eq!(resolve_node(&rec, 0, false, &PeriodicTable).unwrap().mass_number(), Some(13));
    }

    #[test]
    fn mass_diff_against_real_table() {
        let node = resolve_node(&with_diff(1), 0, false, &PeriodicTable).unwrap();
        assert_eq!(node.mass_number(), Some(13));
        let node = resolve_node(&with_diff(0), 0, false, &PeriodicTable).unwrap();
        assert_eq!(node.mass_number(), None);
        let node = resolve_node(&with_diff(40), 0, false, &PeriodicTable).unwrap();
        assert_eq!(node.atomic_num(), Some(6));
        assert_eq!(node.mass_number(), None);
    }

    #[test]
    fn isotope_search_round_then_floor() {
        // 12.6 + 1 = 13.6: round 14 misses, floor 13 hits
        let table = ProbeTable::new(12.6, &[13]);
        let node = resolve_node(&with_diff(1), 0, false, &table).unwrap();
        assert_eq!(node.mass_number(), Some(13));
        assert_eq!(*table.probes.borrow(), vec![14, 13]);
    }

    #[test]
    fn isotope_search_round_then_ceil() {
        // 12.4 + 1 = 13.4: round and floor are both 13, ceil 14 hits
        let table = ProbeTable::new(12.4, &[14]);
        let node = resolve_node(&with_diff(1), 0, false, &table).unwrap();
        assert_eq!(node.mass_number(), Some(14));
        assert_eq!(*table.probes.borrow(), vec![13, 14]);
    }

    #[test]
    fn isotope_search_stops_at_first_hit() {
        let table = ProbeTable::new(12.6, &[13, 14]);
        let node = resolve_node(&with_diff(1), 0, false, &table).unwrap();
        assert_eq!(node.mass_number(), Some(14));
        assert_eq!(*table.probes.borrow(), vec![14]);
    }

    #[test]
    fn isotope_miss_degrades_to_element() {
        let table = ProbeTable::new(12.6, &[]);
        let node = resolve_node(&with_diff(1), 0, false, &table).unwrap();
        assert_eq!(node.atomic_num(), Some(6));
        assert_eq!(node.mass_number(), None);
        assert_eq!(*table.probes.borrow(), vec![14, 13]);
    }

    #[test]
    fn properties_are_copied() {
        let rec = AtomRecord {
            charge: Some(-1),
            radical: Some(2),
            parity: Some(1),
            hydrogen_count: Some(2),
            ..AtomRecord::new("N", 1.0, 2.0)
        };
        let node = resolve_node(&rec, 0, false, &PeriodicTable).unwrap();
        assert_eq!(node.charge, -1);
        assert_eq!(node.radical, 2);
        assert_eq!(node.parity, Some(1));
        assert_eq!(node.explicit_hydrogen_count, Some(2));
        assert_eq!(node.position_2d(), Some([1.0, 2.0]));
        assert!(!node.has_coord_3d());
    }

    #[test]
    fn rgroup_takes_no_hydrogen_count() {
        let rec = AtomRecord {
            hydrogen_count: Some(1),
            parity: Some(2),
            ..AtomRecord::new("R#", 0.0, 0.0)
        };
        let node = resolve_node(&rec, 0, false, &PeriodicTable).unwrap();
        assert_eq!(node.explicit_hydrogen_count, None);
        assert_eq!(node.parity, Some(2));
    }

    #[test]
    fn coordinate_space_follows_caller() {
        let rec = AtomRecord {
            z: Some(3.0),
            ..AtomRecord::new("C", 1.0, 2.0)
        };
        let node = resolve_node(&rec, 0, true, &PeriodicTable).unwrap();
        assert_eq!(node.position_3d(), Some([1.0, 2.0, 3.0]));
        assert!(!node.has_coord_2d());

        let node = resolve_node(&AtomRecord::new("C", 1.0, 2.0), 0, true, &PeriodicTable).unwrap();
        assert_eq!(node.position_3d(), Some([1.0, 2.0, 0.0]));
    }

    #[test]
    fn half_up_rounding() {
        assert_eq!(js_round(12.5), 13.0);
        assert_eq!(js_round(12.49), 12.0);
        assert_eq!(js_round(-0.5), 0.0);
    }
}
