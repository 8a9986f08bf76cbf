//! The three header lines of a molfile: name, info line, comment.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::error::Result;
use super::options::DEFAULT_PROGRAM_NAME;
use super::utils::{self, rpad};
use super::CoordMode;

/// Fields of the `IIPPPPPPPPMMDDYYHHmmdd` info line. Scaling factors,
/// energy and registry number are not read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderInfo {
    /// User initials.
    pub user_abbr: Option<String>,
    pub program_name: Option<String>,
    pub date: Option<NaiveDateTime>,
    pub coord_mode: CoordMode,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub name: Option<String>,
    pub info: HeaderInfo,
    pub comment: Option<String>,
}

fn non_blank(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Reads line 2 of a molfile. A blank line is valid and reads as empty.
pub fn read_info_line(line: &str) -> Result<HeaderInfo> {
    if line.trim().is_empty() {
        return Ok(HeaderInfo::default());
    }
    let date_field = utils::field(line, 10, 10);
    let date = if date_field.trim().is_empty() {
        None
    } else {
        Some(utils::parse_legacy_date(&date_field, false)?)
    };
    let coord_mode = match utils::field(line, 20, 2).as_str() {
        "2D" => CoordMode::TwoD,
        "3D" => CoordMode::ThreeD,
        _ => CoordMode::Unknown,
    };
    Ok(HeaderInfo {
        user_abbr: non_blank(utils::field(line, 0, 2)),
        program_name: non_blank(utils::field(line, 2, 8)),
        date,
        coord_mode,
    })
}

/// Builds line 2 of a molfile.
///
/// Missing initials are left blank, a missing program name is this crate's
/// name and a missing date is the current local time. Anything but
/// [`CoordMode::ThreeD`] is written as `2D`.
pub fn generate_info_line(info: &HeaderInfo, coord_mode: CoordMode) -> String {
    let initials = info.user_abbr.as_deref().unwrap_or("");
    let program = info.program_name.as_deref().unwrap_or(DEFAULT_PROGRAM_NAME);
    let date = info.date.unwrap_or_else(|| Local::now().naive_local());
    let dims = if coord_mode == CoordMode::ThreeD { "3D" } else { "2D" };
    format!(
        "{}{}{}{}",
        rpad(&utils::field(initials, 0, 2), 2),
        rpad(&utils::field(program, 0, 8), 8),
        utils::format_legacy_date(&date, false),
        dims
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn reads_full_info_line() {
        let info = read_info_line("JSChemDraw0315981230 2D 1   1.00000     0.00000     0").unwrap();
        assert_eq!(info.user_abbr.as_deref(), Some("JS"));
        assert_eq!(info.program_name.as_deref(), Some("ChemDraw"));
        assert_eq!(info.date, Some(date(1998, 3, 15, 12, 30)));
        // a leading space shifts the dimension code out of its columns
        assert_eq!(info.coord_mode, CoordMode::Unknown);

        let info = read_info_line("  -ISIS-  04120512303D").unwrap();
        assert_eq!(info.user_abbr, None);
        assert_eq!(info.program_name.as_deref(), Some("-ISIS-"));
        assert_eq!(info.date, Some(date(2005, 4, 12, 12, 30)));
        assert_eq!(info.coord_mode, CoordMode::ThreeD);
    }

    #[test]
    fn blank_info_line() {
        assert_eq!(read_info_line("").unwrap(), HeaderInfo::default());
        assert_eq!(read_info_line("    ").unwrap(), HeaderInfo::default());
    }

    #[test]
    fn missing_date_field() {
        let info = read_info_line("  RDKit             2D").unwrap();
        assert_eq!(info.program_name.as_deref(), Some("RDKit"));
        assert_eq!(info.date, None);
        assert_eq!(info.coord_mode, CoordMode::TwoD);
    }

    #[test]
    fn generates_info_line() {
        let info = HeaderInfo {
            user_abbr: Some("ABC".into()),
            program_name: Some("VeryLongProgram".into()),
            date: Some(date(2021, 11, 7, 9, 5)),
            coord_mode: CoordMode::Unknown,
        };
        assert_eq!(generate_info_line(&info, CoordMode::TwoD), "ABVeryLong10072109052D");
        assert_eq!(generate_info_line(&info, CoordMode::ThreeD), "ABVeryLong10072109053D");
        assert_eq!(generate_info_line(&info, CoordMode::Unknown), "ABVeryLong10072109052D");

        let info = HeaderInfo {
            date: Some(date(1999, 1, 1, 0, 0)),
            ..Default::default()
        };
        assert_eq!(generate_info_line(&info, CoordMode::TwoD), "  mdlcrab 00019900002D");
    }

    #[test]
    fn missing_date_is_now() {
        let line = generate_info_line(&HeaderInfo::default(), CoordMode::TwoD);
        assert_eq!(line.len(), 22);
        assert!(line.ends_with("2D"));
    }
}
