//! MDL Molfile connection tables (V2000 and V3000).
//!
//! Tokenized atom, bond and substructure records are resolved into a
//! [`Mol`](crate::Mol) by [`fill_fragment`], and a `Mol` is shaped back into
//! the aggregates a writer needs by [`extract`]. Turning raw lines into
//! records and records into lines is left to a [`CtabTokenizer`] and a
//! [`CtabFormatter`] supplied by the caller.

mod block;
mod builder;
mod connector_resolver;
mod count_line;
pub mod error;
mod extract;
mod header;
mod io;
mod node_resolver;
mod options;
mod records;
mod substructure;
pub mod utils;

use serde::{Deserialize, Serialize};

pub use block::{BlockReader, BlockSource, BlockWriter, TextLinesBuffer};
pub use builder::{fill_fragment, FillReport};
pub use connector_resolver::resolve_connector;
pub use count_line::{decode_count_line, encode_count_line, CountLine};
pub use error::{MdlError, Result};
pub use extract::{
    atom_type_string, coord_mode_of, extract, is_node_variable_atom, split_connected_nodes,
    SplitNodes, StructuralInfo,
};
pub use header::{generate_info_line, read_info_line, Header, HeaderInfo};
pub use io::{
    CtabFormatter, CtabTokenizer, FragmentRead, HeaderBlockReader, HeaderBlockWriter,
    Molfile, MolfileRead, MolfileReader, MolfileWriter, StructureFragmentReader,
    StructureFragmentWriter,
};
pub use node_resolver::resolve_node;
pub use options::{MdlOptions, DEFAULT_PROGRAM_NAME};
pub use records::{AtomListInfo, AtomRecord, BondRecord, CtabInfo, SubstructureRecord};
pub use substructure::{classify_label, promote_substructures};

pub const VER2000: &str = "V2000";
pub const VER3000: &str = "V3000";
pub const SYMBOL_ANYATOM: &str = "A";
pub const SYMBOL_STARATOM: &str = "*";
pub const SYMBOL_HETEROATOM: &str = "Q";
pub const SYMBOL_RGROUP: &str = "R";
pub const SYMBOL_RGROUP2: &str = "R#";
pub const SYMBOL_LONEPAIR: &str = "LP";
pub const SYMBOL_ATOMLIST: &str = "L";
pub const SYMBOL_DUMMYATOM: &str = "Du";
/// The only substructure type reconstruction understands: superatoms.
pub const SGROUP_SUPERATOM: &str = "SUP";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MdlVersion {
    #[default]
    V2000,
    V3000,
}

impl MdlVersion {
    pub fn tag(self) -> &'static str {
        match self {
            MdlVersion::V2000 => VER2000,
            MdlVersion::V3000 => VER3000,
        }
    }
}

/// Coordinate space of a fragment. `Unknown` means "not forced".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CoordMode {
    #[default]
    Unknown,
    #[serde(rename = "2D")]
    TwoD,
    #[serde(rename = "3D")]
    ThreeD,
}
