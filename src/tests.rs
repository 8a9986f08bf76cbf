use crate::mdl::{self, AtomRecord, BondRecord, CtabInfo, SubstructureRecord};
use crate::*;

fn carbon() -> Node {
    Node::atom(6, None)
}

#[test]
fn mol_append_nodes_and_connectors() {
    let mut mol = Mol::new();
    let c = mol.append_node(carbon());
    let o = mol.append_node(Node::atom(8, None));
    let bond = mol.append_connector(Connector::bond(c, o, BondOrder::Double));

    assert_eq!(mol.node_count(), 2);
    assert_eq!(mol.connector_count(), 1);
    assert_eq!(mol.node(c).atomic_num(), Some(6));
    assert_eq!(mol.node(o).atomic_num(), Some(8));
    assert_eq!(mol.connector(bond).order, BondOrder::Double);
    assert_eq!(mol.node_at(1), Some(o));
    assert_eq!(mol.node_at(2), None);
}

#[test]
fn mol_neighbors_and_connectors_of() {
    let mut mol = Mol::new();
    let a = mol.append_node(carbon());
    let b = mol.append_node(carbon());
    let c = mol.append_node(carbon());
    let ab = mol.append_connector(Connector::bond(a, b, BondOrder::Single));
    let ac = mol.append_connector(Connector::bond(a, c, BondOrder::Single));

    assert_eq!(mol.neighbors(a).count(), 2);
    assert_eq!(mol.connectors_of(a), vec![ab, ac]);
    assert_eq!(mol.connector_between(a, b), Some(ab));
    assert_eq!(mol.connector_between(b, c), None);
}

#[test]
fn multi_center_connector_links_every_pair() {
    let mut mol = Mol::new();
    let n: Vec<_> = (0..3).map(|_| mol.append_node(carbon())).collect();
    let multi = mol.append_connector(Connector::new(
        n.iter().map(|&i| Endpoint::Node(i)).collect(),
        BondOrder::Single,
    ));
    assert_eq!(mol.connector_between(n[0], n[2]), Some(multi));
    assert_eq!(mol.connector_between(n[1], n[2]), Some(multi));
    assert_eq!(mol.connectors_of(n[2]), vec![multi]);
}

#[test]
fn mol_node_mut() {
    let mut mol = Mol::new();
    let idx = mol.append_node(carbon());
    mol.node_mut(idx).charge = 1;
    assert_eq!(mol.node(idx).formal_charge(), 1);
}

#[test]
fn cloned_mol_is_independent() {
    let mut mol = Mol::new();
    let n: Vec<_> = (0..3).map(|_| mol.append_node(carbon())).collect();
    mol.append_connector(Connector::bond(n[0], n[1], BondOrder::Single));
    let frag = mol.marshal_sub_fragment(&[n[2]], SubGroup::default()).unwrap();

    let mut copy = mol.clone();
    copy.node_mut(n[0]).charge = -1;
    copy.append_node(carbon());

    assert_eq!(mol.node(n[0]).formal_charge(), 0);
    assert_eq!(mol.node_count(), 3);
    assert_eq!(copy.node_count(), 4);
    assert_eq!(copy.owner_of_node(n[2]), Some(frag));
    assert_eq!(copy.all_connectors(), mol.all_connectors());
}

#[test]
fn marshal_moves_nodes_and_inner_connectors() {
    let mut mol = Mol::new();
    let n: Vec<_> = (0..4).map(|_| mol.append_node(carbon())).collect();
    let c01 = mol.append_connector(Connector::bond(n[0], n[1], BondOrder::Single));
    let c12 = mol.append_connector(Connector::bond(n[1], n[2], BondOrder::Single));
    let c23 = mol.append_connector(Connector::bond(n[2], n[3], BondOrder::Single));

    let frag = mol
        .marshal_sub_fragment(&[n[2], n[3]], SubGroup::default())
        .unwrap();

    assert_eq!(mol.root().children().last(), Some(&Child::Fragment(frag)));
    assert_eq!(mol.root().connectors(), &[c01, c12]);
    assert_eq!(mol.fragment(frag).connectors(), &[c23]);
    assert_eq!(mol.fragment(frag).parent(), Some(FragmentIndex::ROOT));
    assert_eq!(mol.fragment(frag).anchor_nodes(), &[n[2]]);
    assert_eq!(mol.owner_of_node(n[3]), Some(frag));
    assert_eq!(mol.owner_of_connector(c12), Some(FragmentIndex::ROOT));
    assert_eq!(mol.leaf_nodes(), n);
    assert_eq!(mol.all_connectors(), vec![c01, c12, c23]);
}

#[test]
fn marshal_of_foreign_nodes_is_a_no_op() {
    let mut mol = Mol::new();
    let a = mol.append_node(carbon());
    let b = mol.append_node(carbon());
    mol.marshal_sub_fragment(&[a], SubGroup::default()).unwrap();
    assert_eq!(mol.marshal_sub_fragment(&[a], SubGroup::default()), None);
    assert_eq!(mol.marshal_sub_fragment(&[], SubGroup::default()), None);
    assert_eq!(mol.sub_fragments().len(), 1);
    assert_eq!(mol.node_at(0), Some(b));
}

#[test]
fn nested_marshal_keeps_depth_first_order() {
    let mut mol = Mol::new();
    let n: Vec<_> = (0..4).map(|_| mol.append_node(carbon())).collect();
    let outer = mol
        .marshal_sub_fragment(&[n[1], n[2], n[3]], SubGroup::default())
        .unwrap();
    let inner = mol
        .marshal_sub_fragment_in(outer, &[n[2]], SubGroup::default())
        .unwrap();
    assert_eq!(mol.sub_fragments(), vec![outer]);
    assert_eq!(mol.sub_fragments_of(outer), vec![inner]);
    assert_eq!(mol.leaf_nodes(), vec![n[0], n[1], n[3], n[2]]);
}

#[test]
fn clear_resets_everything() {
    let mut mol = Mol::new();
    let a = mol.append_node(carbon());
    mol.marshal_sub_fragment(&[a], SubGroup::default());
    mol.clear();
    assert_eq!(mol.node_count(), 0);
    assert!(mol.sub_fragments().is_empty());
}

#[test]
fn end_to_end_formaldehyde() {
    let ctab = CtabInfo {
        atom_infos: vec![AtomRecord::new("C", 0.0, 0.0), AtomRecord::new("O", 1.0, 0.0)],
        bond_infos: vec![BondRecord::new(0, 1, BondOrder::Double)],
        ..Default::default()
    };
    let mut mol = Mol::new();
    let report = mdl::fill_fragment(&mut mol, &ctab, CoordMode::Unknown, &PeriodicTable).unwrap();
    assert!(report.is_clean());

    let info = mdl::extract(&mol);
    assert_eq!(info.atoms.len(), 2);
    assert_eq!(mol.node(info.atoms[0]).kind, NodeKind::Atom { atomic_num: 6, mass_number: None });
    assert_eq!(mol.node(info.atoms[1]).kind, NodeKind::Atom { atomic_num: 8, mass_number: None });
    assert_eq!(info.bonds.len(), 1);
    let bond = mol.connector(info.bonds[0]);
    assert_eq!(bond.nodes().collect::<Vec<_>>(), info.atoms);
    assert_eq!(bond.order, BondOrder::Double);
    assert_eq!(info.coord_mode, CoordMode::TwoD);
}

#[test]
fn promotion_preserves_crossing_bond() {
    let ctab = CtabInfo {
        atom_infos: vec![
            AtomRecord::new("C", 0.0, 0.0),
            AtomRecord::new("C", 1.0, 0.0),
            AtomRecord::new("O", 2.0, 0.0),
            AtomRecord::new("C", 3.0, 0.0),
        ],
        bond_infos: vec![
            BondRecord::new(0, 1, BondOrder::Single),
            BondRecord::new(1, 2, BondOrder::Single),
            BondRecord::new(2, 3, BondOrder::Single),
        ],
        sg_infos: vec![SubstructureRecord {
            sg_type: "SUP".into(),
            atom_indexes: vec![2, 3],
            label: "OCH3".into(),
        }],
        ..Default::default()
    };
    let mut mol = Mol::new();
    let report = mdl::fill_fragment(&mut mol, &ctab, CoordMode::Unknown, &PeriodicTable).unwrap();
    let group = report.sub_groups[0];
    assert_eq!(
        mol.fragment(group).label(),
        Some(&SubGroupLabel::FormulaText("OCH3".into()))
    );

    let info = mdl::extract(&mol);
    assert_eq!(info.sub_groups, vec![group]);
    assert_eq!(info.bonds.len(), 3);
    // every bond still names two live leaf atoms
    for &b in &info.bonds {
        let split = mdl::split_connected_nodes(mol.connector(b));
        assert_eq!(split.primary_nodes.len(), 2);
        assert!(split.primary_nodes.iter().all(|n| info.atoms.contains(n)));
    }
    let crossing = mol.connector(info.bonds[1]);
    let owners: Vec<_> = crossing.nodes().map(|n| mol.owner_of_node(n)).collect();
    assert_eq!(owners, vec![Some(FragmentIndex::ROOT), Some(group)]);
}

#[test]
fn coordinate_majority_over_leaves() {
    let mut mol = Mol::new();
    for i in 0..5 {
        let mut node = carbon();
        if i < 3 {
            node.set_coord_2d(0.0, 0.0);
        } else {
            node.set_coord_3d(0.0, 0.0, 0.0);
        }
        mol.append_node(node);
    }
    assert_eq!(mdl::extract(&mol).coord_mode, CoordMode::TwoD);

    let last = mol.node_at(2).unwrap();
    mol.node_mut(last).set_coord_3d(0.0, 0.0, 1.0);
    assert_eq!(mdl::extract(&mol).coord_mode, CoordMode::ThreeD);
}

#[test]
fn node_trait_impls() {
    let mut n = Node::atom(7, Some(15));
    n.set_coord_2d(1.0, 1.0);
    assert_eq!(n.atomic_num(), Some(7));
    assert_eq!(n.mass_number(), Some(15));
    assert!(n.has_coord_2d());
    assert_eq!(Node::new(NodeKind::RGroup).atomic_num(), None);
}

#[test]
fn connector_trait_impls() {
    let c = Connector::bond(
        petgraph::graph::NodeIndex::new(0),
        petgraph::graph::NodeIndex::new(1),
        BondOrder::Triple,
    );
    assert_eq!(c.bond_order(), BondOrder::Triple);
    assert!(c.connects(petgraph::graph::NodeIndex::new(1)));
    assert!(!c.connects(petgraph::graph::NodeIndex::new(2)));
}
