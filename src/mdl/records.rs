//! Tokenized CTab records, the hand-off format between a line tokenizer and
//! the reconstruction pass (and between the extractor and a line formatter).

use serde::{Deserialize, Serialize};

use crate::bond::BondOrder;

/// Element list of an atom-list atom (`L` in V2000, `[..]`/`NOT[..]` in
/// V3000).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtomListInfo {
    #[serde(default)]
    pub symbols: Vec<String>,
    #[serde(default)]
    pub is_allow_list: bool,
}

/// One atom line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtomRecord {
    pub symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mass_number: Option<u16>,
    /// Offset from the natural mass, in whole mass units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mass_diff: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charge: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radical: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parity: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hydrogen_count: Option<u32>,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub atom_list_info: Option<AtomListInfo>,
}

impl AtomRecord {
    pub fn new(symbol: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            symbol: symbol.into(),
            x,
            y,
            ..Default::default()
        }
    }
}

/// One bond line. `order` is already decoded from the MDL bond type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BondRecord {
    pub atom_index1: usize,
    pub atom_index2: usize,
    /// Extra endpoints of a V3000 multi-center bond.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_atom_indexes: Option<Vec<usize>>,
    #[serde(default)]
    pub order: BondOrder,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stereo: Option<i32>,
}

impl BondRecord {
    pub fn new(atom_index1: usize, atom_index2: usize, order: BondOrder) -> Self {
        Self {
            atom_index1,
            atom_index2,
            order,
            ..Default::default()
        }
    }
}

/// One Sgroup. Only superatoms (`SUP`) are acted on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubstructureRecord {
    pub sg_type: String,
    #[serde(default)]
    pub atom_indexes: Vec<usize>,
    #[serde(default)]
    pub label: String,
}

/// Everything a tokenizer produces for one connection table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtabInfo {
    #[serde(default)]
    pub atom_infos: Vec<AtomRecord>,
    #[serde(default)]
    pub bond_infos: Vec<BondRecord>,
    #[serde(default)]
    pub sg_infos: Vec<SubstructureRecord>,
    #[serde(default, rename = "isCoord3D")]
    pub is_coord_3d: bool,
}
