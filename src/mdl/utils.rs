//! Pure conversions between MDL field values and graph values.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Timelike};

use super::error::{MdlError, Result};
use super::{
    MdlVersion, SYMBOL_ANYATOM, SYMBOL_ATOMLIST, SYMBOL_HETEROATOM, SYMBOL_LONEPAIR,
    SYMBOL_RGROUP, SYMBOL_RGROUP2, SYMBOL_STARATOM, VER3000,
};
use crate::bond::BondOrder;

pub fn is_unspecified_atom_symbol(symbol: &str) -> bool {
    symbol == SYMBOL_ANYATOM || symbol == SYMBOL_STARATOM
}

pub fn is_hetero_atom_symbol(symbol: &str) -> bool {
    symbol == SYMBOL_HETEROATOM
}

pub fn is_rgroup_symbol(symbol: &str) -> bool {
    symbol == SYMBOL_RGROUP || symbol == SYMBOL_RGROUP2
}

pub fn is_lone_pair_symbol(symbol: &str) -> bool {
    symbol == SYMBOL_LONEPAIR
}

pub fn is_atom_list_symbol(symbol: &str) -> bool {
    symbol == SYMBOL_ATOMLIST
}

/// Decodes an MDL bond type. Types 5-8 are substructure-search query bonds
/// and, like anything else unknown, decode to [`BondOrder::Unset`].
pub fn bond_type_to_order(code: i32) -> BondOrder {
    match code {
        1 => BondOrder::Single,
        2 => BondOrder::Double,
        3 => BondOrder::Triple,
        4 => BondOrder::ExplicitAromatic,
        _ => BondOrder::Unset,
    }
}

/// Encodes a bond order as an MDL bond type. Orders MDL cannot express,
/// `Unset` included, are written as single bonds, so query bonds do not
/// survive a read/write cycle.
pub fn order_to_bond_type(order: BondOrder) -> i32 {
    match order {
        BondOrder::Single => 1,
        BondOrder::Double => 2,
        BondOrder::Triple => 3,
        BondOrder::ExplicitAromatic => 4,
        _ => 1,
    }
}

pub fn radical_from_mdl(value: i32) -> i32 {
    value
}

pub fn radical_to_mdl(value: i32) -> i32 {
    value
}

/// Parses an `MMDDYYHHmm` (or `MMDDYYYYHHmm` when `is_long`) date/time.
///
/// Two-digit years of 70 and above land in the 1900s, the rest in the 2000s.
/// Blank or non-numeric fields read as 0, except the month which reads as
/// January. Out of range values roll over the way calendar arithmetic does
/// (day 0 is the last day of the previous month).
pub fn parse_legacy_date(s: &str, is_long: bool) -> Result<NaiveDateTime> {
    let month0 = parse_int_prefix(&field(s, 0, 2))
        .filter(|&m| m != 0)
        .unwrap_or(1)
        - 1;
    let day = parse_int_prefix(&field(s, 2, 2)).unwrap_or(0);
    let year_len = if is_long { 4 } else { 2 };
    let mut year = parse_int_prefix(&field(s, 4, year_len)).unwrap_or(0);
    if !is_long {
        year += if year >= 70 { 1900 } else { 2000 };
    }
    let hour = parse_int_prefix(&field(s, 4 + year_len, 2)).unwrap_or(0);
    let minute = parse_int_prefix(&field(s, 6 + year_len, 2)).unwrap_or(0);

    let months = year * 12 + month0;
    let malformed = || MdlError::MalformedDate(s.to_string());
    let y = i32::try_from(months.div_euclid(12)).map_err(|_| malformed())?;
    let m = months.rem_euclid(12) as u32 + 1;
    NaiveDate::from_ymd_opt(y, m, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .and_then(|dt| dt.checked_add_signed(Duration::days(day - 1)))
        .and_then(|dt| dt.checked_add_signed(Duration::hours(hour)))
        .and_then(|dt| dt.checked_add_signed(Duration::minutes(minute)))
        .ok_or_else(malformed)
}

/// Formats a date/time as `MMDDYYHHmm` (or `MMDDYYYYHHmm`).
///
/// The month is written zero-based, one less than [`parse_legacy_date`]
/// expects.
pub fn format_legacy_date(date: &NaiveDateTime, use_long_year: bool) -> String {
    let year = if use_long_year {
        format!("{:04}", date.year())
    } else {
        format!("{:02}", date.year().rem_euclid(100))
    };
    format!(
        "{:02}{:02}{}{:02}{:02}",
        date.month0(),
        date.day(),
        year,
        date.hour(),
        date.minute()
    )
}

/// Version named on the first line of an RXN file (`$RXN` or `$RXN V3000`).
pub fn rxn_mark_version(line: &str) -> Option<MdlVersion> {
    let rest = line.strip_prefix("$RXN")?;
    if rest.trim() == VER3000 {
        Some(MdlVersion::V3000)
    } else {
        Some(MdlVersion::V2000)
    }
}

/// Version tag of a CTab count line. Anything that is not `V3000` is
/// treated as V2000.
pub fn ctab_version(count_line: &str) -> MdlVersion {
    if field(count_line, 33, 6).trim() == VER3000 {
        MdlVersion::V3000
    } else {
        MdlVersion::V2000
    }
}

/// Fixed-width field by character position. Short lines yield short or
/// empty fields.
pub fn field(line: &str, start: usize, len: usize) -> String {
    line.chars().skip(start).take(len).collect()
}

/// Reads an optionally signed integer prefix, ignoring leading whitespace.
pub(crate) fn parse_int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|v| sign * v)
}

/// Left-pads `s` with `pad` to `width` characters. Longer input is kept whole.
pub(crate) fn lpad(s: &str, width: usize, pad: char) -> String {
    let len = s.chars().count();
    let mut out: String = std::iter::repeat(pad).take(width.saturating_sub(len)).collect();
    out.push_str(s);
    out
}

/// Right-pads `s` with spaces to `width` characters.
pub(crate) fn rpad(s: &str, width: usize) -> String {
    format!("{s:<width$}")
}
