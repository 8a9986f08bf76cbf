use serde::{Deserialize, Serialize};

use super::{CoordMode, MdlVersion};

/// Program name written to the info line when a header names none.
pub const DEFAULT_PROGRAM_NAME: &str = "mdlcrab";

/// Reader and writer settings. Every field has a default, so partial
/// documents deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MdlOptions {
    /// Version writers emit.
    pub version: MdlVersion,
    /// Coordinate space forced on read and write; `Unknown` lets the data
    /// decide.
    pub coord_mode: CoordMode,
    pub program_name: String,
}

impl Default for MdlOptions {
    fn default() -> Self {
        Self {
            version: MdlVersion::V2000,
            coord_mode: CoordMode::Unknown,
            program_name: DEFAULT_PROGRAM_NAME.to_string(),
        }
    }
}
