//! The classic `aaabbblllfffcccsssxxxrrrpppiiimmmvvvvvv` count line.

use super::error::{MdlError, Result};
use super::extract::StructuralInfo;
use super::utils::{self, lpad};
use super::{MdlVersion, VER2000};

/// Count line written ahead of a V3000 body. The real counts live in the
/// V3000 `COUNTS` line.
const V3000_COUNT_LINE: &str = "  0  0  0     0  0              0 V3000";

/// Atom and bond counts read back from a count line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountLine {
    pub atom_count: usize,
    pub bond_count: usize,
    pub version: MdlVersion,
}

pub fn encode_count_line(info: &StructuralInfo, version: MdlVersion) -> String {
    if version == MdlVersion::V3000 {
        return V3000_COUNT_LINE.to_string();
    }
    let mut s = String::with_capacity(39);
    s.push_str(&lpad(&info.atoms.len().to_string(), 3, ' '));
    s.push_str(&lpad(&info.bonds.len().to_string(), 3, ' '));
    // lll fff ccc sss, then the four obsolete query fields
    for _ in 0..8 {
        s.push_str(&lpad("0", 3, ' '));
    }
    s.push_str("999");
    s.push_str(&lpad(VER2000, 6, ' '));
    s
}

/// Reads the `aaa` and `bbb` fields and the version tag. Blank fields read
/// as zero.
pub fn decode_count_line(line: &str) -> Result<CountLine> {
    if line.trim().is_empty() {
        return Err(MdlError::MissingCountLine);
    }
    let count = |start: usize| -> Result<usize> {
        let field = utils::field(line, start, 3);
        let field = field.trim();
        if field.is_empty() {
            return Ok(0);
        }
        field
            .parse::<usize>()
            .map_err(|_| MdlError::MalformedCountLine(line.to_string()))
    };
    Ok(CountLine {
        atom_count: count(0)?,
        bond_count: count(3)?,
        version: utils::ctab_version(line),
    })
}
