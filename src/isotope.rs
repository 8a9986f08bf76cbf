//! Isotope reference data, isotope aliases and isotope ids.
//!
//! The table covers the stable isotopes of the light elements, the common
//! heavier ones, and the two radioactive isotopes chemists routinely label
//! (tritium and carbon-14).

use serde::Serialize;

use crate::element::{self, ElementKey};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IsotopeInfo {
    pub atomic_number: u8,
    pub mass_number: u16,
    pub exact_mass: f64,
    pub natural_abundance: f64,
    /// Non-elemental symbol standing for this isotope, e.g. `D` for H-2.
    pub isotope_alias: Option<&'static str>,
}

/// Read-only isotope database.
///
/// With `mass_number` given the exact isotope is looked up. Without one, a
/// symbol key is first tried as an isotope alias (`D`, `T`) and an element
/// key resolves to its most abundant isotope.
pub trait IsotopeLookup {
    fn isotope_info(&self, key: ElementKey<'_>, mass_number: Option<u16>) -> Option<IsotopeInfo>;
}

pub fn isotope_info(key: ElementKey<'_>, mass_number: Option<u16>) -> Option<IsotopeInfo> {
    if let ElementKey::Symbol(symbol) = key {
        if let Some(row) = ISOTOPES.iter().find(|row| row.4 == Some(symbol)) {
            return match mass_number {
                Some(m) if m != row.1 => None,
                _ => Some(to_info(row)),
            };
        }
    }
    let atomic_number = match key {
        ElementKey::Symbol(s) => element::atomic_number_of(s)?,
        ElementKey::AtomicNumber(n) => n,
    };
    let mut rows = ISOTOPES.iter().filter(|row| row.0 == atomic_number);
    match mass_number {
        Some(m) => rows.find(|row| row.1 == m).map(to_info),
        None => rows
            .max_by(|a, b| a.3.total_cmp(&b.3))
            .map(to_info),
    }
}

/// Returns the symbol part of an isotope id.
pub fn isotope_id_symbol(id: &str) -> Option<&str> {
    let symbol = id.trim().trim_start_matches(|c: char| c.is_ascii_digit());
    if symbol.is_empty() {
        None
    } else {
        Some(symbol)
    }
}

fn to_info(row: &(u8, u16, f64, f64, Option<&'static str>)) -> IsotopeInfo {
    IsotopeInfo {
        atomic_number: row.0,
        mass_number: row.1,
        exact_mass: row.2,
        natural_abundance: row.3,
        isotope_alias: row.4,
    }
}

// (atomic number, mass number, exact mass, natural abundance, alias)
static ISOTOPES: [(u8, u16, f64, f64, Option<&str>); 73] = [
    (1, 1, 1.00782503207, 0.999885, None),
    (1, 2, 2.0141017778, 0.000115, Some("D")),
    (1, 3, 3.0160492777, 0.0, Some("T")),
    (2, 3, 3.0160293191, 0.00000134, None),
    (2, 4, 4.00260325415, 0.99999866, None),
    (3, 6, 6.015122795, 0.0759, None),
    (3, 7, 7.01600455, 0.9241, None),
    (4, 9, 9.0121822, 1.0, None),
    (5, 10, 10.012937, 0.199, None),
    (5, 11, 11.0093054, 0.801, None),
    (6, 12, 12.0, 0.9893, None),
    (6, 13, 13.0033548378, 0.0107, None),
    (6, 14, 14.003241989, 0.0, None),
    (7, 14, 14.0030740048, 0.99636, None),
    (7, 15, 15.0001088982, 0.00364, None),
    (8, 16, 15.99491461956, 0.99757, None),
    (8, 17, 16.9991317, 0.00038, None),
    (8, 18, 17.999161, 0.00205, None),
    (9, 19, 18.99840322, 1.0, None),
    (10, 20, 19.9924401754, 0.9048, None),
    (10, 21, 20.99384668, 0.0027, None),
    (10, 22, 21.991385114, 0.0925, None),
    (11, 23, 22.9897692809, 1.0, None),
    (12, 24, 23.9850417, 0.7899, None),
    (12, 25, 24.98583692, 0.1, None),
    (12, 26, 25.982592929, 0.1101, None),
    (13, 27, 26.98153863, 1.0, None),
    (14, 28, 27.9769265325, 0.92223, None),
    (14, 29, 28.9764947, 0.04685, None),
    (14, 30, 29.97377017, 0.03092, None),
    (15, 31, 30.97376163, 1.0, None),
    (16, 32, 31.972071, 0.9499, None),
    (16, 33, 32.97145876, 0.0075, None),
    (16, 34, 33.9678669, 0.0425, None),
    (16, 36, 35.96708076, 0.0001, None),
    (17, 35, 34.96885268, 0.7576, None),
    (17, 37, 36.96590259, 0.2424, None),
    (18, 36, 35.967545106, 0.003365, None),
    (18, 38, 37.9627324, 0.000632, None),
    (18, 40, 39.9623831225, 0.996003, None),
    (19, 39, 38.96370668, 0.932581, None),
    (19, 40, 39.96399848, 0.000117, None),
    (19, 41, 40.96182576, 0.067302, None),
    (20, 40, 39.96259098, 0.96941, None),
    (20, 42, 41.95861801, 0.00647, None),
    (20, 43, 42.9587666, 0.00135, None),
    (20, 44, 43.9554818, 0.02086, None),
    (20, 46, 45.9536926, 0.00004, None),
    (20, 48, 47.952534, 0.00187, None),
    (26, 54, 53.9396105, 0.05845, None),
    (26, 56, 55.9349375, 0.91754, None),
    (26, 57, 56.935394, 0.02119, None),
    (26, 58, 57.9332756, 0.00282, None),
    (29, 63, 62.9295975, 0.6915, None),
    (29, 65, 64.9277895, 0.3085, None),
    (30, 64, 63.9291422, 0.4917, None),
    (30, 66, 65.9260334, 0.2773, None),
    (30, 67, 66.9271273, 0.0404, None),
    (30, 68, 67.9248442, 0.1845, None),
    (30, 70, 69.9253193, 0.0061, None),
    (34, 74, 73.9224764, 0.0089, None),
    (34, 76, 75.9192136, 0.0937, None),
    (34, 77, 76.919914, 0.0763, None),
    (34, 78, 77.9173091, 0.2377, None),
    (34, 80, 79.9165213, 0.4961, None),
    (34, 82, 81.9166994, 0.0873, None),
    (35, 79, 78.9183371, 0.5069, None),
    (35, 81, 80.9162906, 0.4931, None),
    (53, 127, 126.904473, 1.0, None),
    (3, 8, 8.02248736, 0.0, None),
    (6, 11, 11.0114336, 0.0, None),
    (7, 13, 13.00573861, 0.0, None),
    (8, 15, 15.0030656, 0.0, None),
];
